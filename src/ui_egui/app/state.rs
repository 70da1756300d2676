use crate::models::nurse::NurseId;
use egui::Pos2;

/// Which top-level view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Roster,
    ManageNurses,
}

/// The cell a picker popup is editing, plus where to anchor the popup.
///
/// The anchor is a rendering-layer detail captured from the clicked
/// cell's rect; the state machine itself only cares about nurse and day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedCell {
    pub nurse: NurseId,
    pub day: u32,
    pub anchor: Pos2,
}

/// Two-state picker machine: Idle (no popup) or one selected cell.
///
/// Opening while open silently replaces the selection; choosing a shift,
/// clearing, or a press outside the popup all return to Idle.
#[derive(Debug, Default)]
pub struct ShiftPickerState {
    selected: Option<SelectedCell>,
}

impl ShiftPickerState {
    pub fn open(&mut self, cell: SelectedCell) {
        self.selected = Some(cell);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<SelectedCell> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(nurse: i64, day: u32) -> SelectedCell {
        SelectedCell {
            nurse: NurseId(nurse),
            day,
            anchor: Pos2::new(10.0, 20.0),
        }
    }

    #[test]
    fn test_starts_idle() {
        let picker = ShiftPickerState::default();
        assert!(!picker.is_open());
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn test_open_then_close_returns_to_idle() {
        let mut picker = ShiftPickerState::default();
        picker.open(cell(1, 5));
        assert!(picker.is_open());
        picker.close();
        assert!(!picker.is_open());
    }

    #[test]
    fn test_open_replaces_open_without_confirmation() {
        let mut picker = ShiftPickerState::default();
        picker.open(cell(1, 5));
        picker.open(cell(2, 9));
        let selected = picker.selected().unwrap();
        assert_eq!(selected.nurse, NurseId(2));
        assert_eq!(selected.day, 9);
    }

    #[test]
    fn test_close_when_idle_is_a_no_op() {
        let mut picker = ShiftPickerState::default();
        picker.close();
        assert!(!picker.is_open());
    }
}
