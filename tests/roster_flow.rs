// Integration tests for roster state and the export projection
use mediroster::models::shift::ShiftKind;
use mediroster::services::export::RosterTable;
use mediroster::services::roster::{MonthRef, RosterService};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_roster_produces_header_only_export() {
    let roster = RosterService::new();
    let table = RosterTable::build(&roster, MonthRef::new(2026, 1));

    // Header row only: "Nurse" plus the 31 days of January
    assert_eq!(table.headers.first().map(String::as_str), Some("Nurse"));
    assert_eq!(table.headers.len(), 32);
    assert_eq!(table.rows.len(), 0);
}

#[test]
fn test_adding_a_nurse_grows_the_list_and_derives_initials() {
    let mut roster = RosterService::new();
    let before = roster.len();

    let id = roster.add_nurse("Jane", "Doe").expect("valid names");

    assert_eq!(roster.len(), before + 1);
    let nurse = roster.nurse(id).expect("just added");
    assert_eq!(nurse.full_name(), "Jane Doe");
    assert_eq!(nurse.initials(), "JD");
}

#[test]
fn test_assignment_survives_month_navigation() {
    let mut roster = RosterService::new();
    let id = roster.add_nurse("Jane", "Doe").expect("valid names");
    let january = MonthRef::new(2026, 1);

    roster.assign_shift(january, id, 5, ShiftKind::Night);

    // Simulate navigating to February and back
    let february = january.next();
    assert_eq!(roster.shift_for(february, id, 5), None);
    let back = february.previous();
    assert_eq!(roster.shift_for(back, id, 5), Some(ShiftKind::Night));

    // The cell renders Night's code in the export projection too
    let table = RosterTable::build(&roster, back);
    assert_eq!(table.rows[0][5].text, "N");
    assert_eq!(table.rows[0][5].fill, Some(ShiftKind::Night.export_fill()));
}

#[test]
fn test_removing_a_nurse_keeps_the_others_shifts_attached() {
    let mut roster = RosterService::new();
    let a = roster.add_nurse("Nurse", "A").expect("valid names");
    let b = roster.add_nurse("Nurse", "B").expect("valid names");
    let month = MonthRef::new(2026, 1);

    roster.assign_shift(month, a, 1, ShiftKind::Morning);
    roster.assign_shift(month, b, 12, ShiftKind::Evening);

    assert!(roster.remove_nurse(a));

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.nurses()[0].last_name, "B");
    // B's shift did not migrate onto another nurse, and A's is gone
    assert_eq!(roster.shift_for(month, b, 12), Some(ShiftKind::Evening));
    assert_eq!(roster.shift_for(month, a, 1), None);
    assert_eq!(roster.assignment_count(), 1);
}

#[test]
fn test_blank_name_is_rejected_with_no_side_effects() {
    let mut roster = RosterService::new();
    roster.add_nurse("Existing", "Nurse").expect("valid names");
    let before_len = roster.len();
    let before_assignments = roster.assignment_count();

    assert!(roster.add_nurse("Jane", "   ").is_err());
    assert!(roster.add_nurse("", "Doe").is_err());

    assert_eq!(roster.len(), before_len);
    assert_eq!(roster.assignment_count(), before_assignments);
}

#[test]
fn test_reassigning_a_cell_overwrites_without_confirmation() {
    let mut roster = RosterService::new();
    let id = roster.add_nurse("Jane", "Doe").expect("valid names");
    let month = MonthRef::new(2026, 2);

    roster.assign_shift(month, id, 14, ShiftKind::Morning);
    roster.assign_shift(month, id, 14, ShiftKind::DayOff);

    assert_eq!(roster.shift_for(month, id, 14), Some(ShiftKind::DayOff));
    assert_eq!(roster.assignment_count(), 1);
}
