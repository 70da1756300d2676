// Nurse module
// Roster staff member with a stable identity

use thiserror::Error;

/// Opaque stable identifier minted by the roster when a nurse is admitted.
///
/// Identity is deliberately not positional: assignments are keyed by this
/// id, so removing a nurse can never misattribute another nurse's shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NurseId(pub(crate) i64);

impl NurseId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NurseValidationError {
    #[error("first name cannot be empty")]
    BlankFirstName,
    #[error("last name cannot be empty")]
    BlankLastName,
}

/// A staff member on the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nurse {
    pub id: NurseId,
    pub first_name: String,
    pub last_name: String,
}

impl Nurse {
    /// Create a nurse with the given id, trimming and validating both names.
    pub fn new(
        id: NurseId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, NurseValidationError> {
        let first_name = first_name.into().trim().to_string();
        let last_name = last_name.into().trim().to_string();

        if first_name.is_empty() {
            return Err(NurseValidationError::BlankFirstName);
        }
        if last_name.is_empty() {
            return Err(NurseValidationError::BlankLastName);
        }

        Ok(Self {
            id,
            first_name,
            last_name,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Uppercase initials for the avatar badge, e.g. "Jane Doe" -> "JD".
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        first
            .into_iter()
            .chain(last)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_nurse_success() {
        let nurse = Nurse::new(NurseId(1), "Jane", "Doe").unwrap();
        assert_eq!(nurse.first_name, "Jane");
        assert_eq!(nurse.last_name, "Doe");
        assert_eq!(nurse.full_name(), "Jane Doe");
    }

    #[test]
    fn test_new_nurse_trims_names() {
        let nurse = Nurse::new(NurseId(1), "  Jane ", " Doe  ").unwrap();
        assert_eq!(nurse.first_name, "Jane");
        assert_eq!(nurse.last_name, "Doe");
    }

    #[test]
    fn test_new_nurse_blank_first_name() {
        let result = Nurse::new(NurseId(1), "   ", "Doe");
        assert_eq!(result.unwrap_err(), NurseValidationError::BlankFirstName);
    }

    #[test]
    fn test_new_nurse_blank_last_name() {
        let result = Nurse::new(NurseId(1), "Jane", "");
        assert_eq!(result.unwrap_err(), NurseValidationError::BlankLastName);
    }

    #[test]
    fn test_initials_uppercased() {
        let nurse = Nurse::new(NurseId(1), "jane", "doe").unwrap();
        assert_eq!(nurse.initials(), "JD");
    }

    #[test]
    fn test_initials_non_ascii() {
        let nurse = Nurse::new(NurseId(1), "éva", "örkény").unwrap();
        assert_eq!(nurse.initials(), "ÉÖ");
    }
}
