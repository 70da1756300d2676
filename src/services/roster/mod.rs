//! Roster state: the nurse list and the per-month shift assignments.
//!
//! Assignments are keyed by (month, nurse id, day). Keys embed the month,
//! so navigating between months never clears anything; keys embed the
//! nurse id rather than a list position, so removing a nurse purges
//! exactly that nurse's shifts and can never misattribute another's.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::nurse::{Nurse, NurseId, NurseValidationError};
use crate::models::shift::ShiftKind;
use crate::utils::date;

/// A (year, month) pair identifying one roster page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    /// Panics on a month outside 1-12.
    pub fn new(year: i32, month: u32) -> Self {
        assert!(
            (1..=12).contains(&month),
            "invalid month: {} (expected 1-12)",
            month
        );
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day_count(&self) -> u32 {
        date::days_in_month(self.year, self.month)
    }

    pub fn is_weekend(&self, day: u32) -> bool {
        date::is_weekend(self.year, self.month, day)
    }

    /// Display label, e.g. "January 2026".
    pub fn label(&self) -> String {
        format!("{} {}", date::month_name(self.month), self.year)
    }

    pub fn previous(&self) -> MonthRef {
        if self.month == 1 {
            MonthRef::new(self.year - 1, 12)
        } else {
            MonthRef::new(self.year, self.month - 1)
        }
    }

    pub fn next(&self) -> MonthRef {
        if self.month == 12 {
            MonthRef::new(self.year + 1, 1)
        } else {
            MonthRef::new(self.year, self.month + 1)
        }
    }
}

/// Key of one cell in the assignment map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AssignmentKey {
    month: MonthRef,
    nurse: NurseId,
    day: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error(transparent)]
    InvalidName(#[from] NurseValidationError),
}

/// In-memory roster: nurse list plus the flat assignment map for all months.
#[derive(Debug, Default)]
pub struct RosterService {
    nurses: Vec<Nurse>,
    assignments: HashMap<AssignmentKey, ShiftKind>,
    next_nurse_id: i64,
}

impl RosterService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a nurse after trim/non-empty validation. Mints a fresh id and
    /// appends to the list; never creates assignments.
    pub fn add_nurse(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<NurseId, RosterError> {
        let id = NurseId(self.next_nurse_id + 1);
        let nurse = Nurse::new(id, first_name, last_name)?;
        self.next_nurse_id += 1;
        self.nurses.push(nurse);
        Ok(id)
    }

    /// Remove a nurse and purge every assignment keyed to that id, in every
    /// month. Returns false when the id is unknown.
    pub fn remove_nurse(&mut self, id: NurseId) -> bool {
        let before = self.nurses.len();
        self.nurses.retain(|nurse| nurse.id != id);
        if self.nurses.len() == before {
            return false;
        }
        self.assignments.retain(|key, _| key.nurse != id);
        true
    }

    pub fn nurses(&self) -> &[Nurse] {
        &self.nurses
    }

    pub fn nurse(&self, id: NurseId) -> Option<&Nurse> {
        self.nurses.iter().find(|nurse| nurse.id == id)
    }

    pub fn len(&self) -> usize {
        self.nurses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nurses.is_empty()
    }

    /// Look up a cell's shift. Absent (unassigned or unknown nurse) is
    /// `None`, never an error.
    pub fn shift_for(&self, month: MonthRef, nurse: NurseId, day: u32) -> Option<ShiftKind> {
        self.assignments
            .get(&AssignmentKey { month, nurse, day })
            .copied()
    }

    /// Upsert a cell unconditionally; the newest write wins.
    pub fn assign_shift(&mut self, month: MonthRef, nurse: NurseId, day: u32, kind: ShiftKind) {
        self.assignments
            .insert(AssignmentKey { month, nurse, day }, kind);
    }

    /// Remove a cell's assignment; no-op when already unassigned.
    pub fn clear_shift(&mut self, month: MonthRef, nurse: NurseId, day: u32) {
        self.assignments.remove(&AssignmentKey { month, nurse, day });
    }

    /// Total assignment count across all months, used by tests and the
    /// status line.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
