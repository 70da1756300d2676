// Integration tests for the PDF rendering boundary
use mediroster::models::shift::ShiftKind;
use mediroster::services::export::RosterTable;
use mediroster::services::pdf::{PdfExportOptions, RosterPdfService};
use mediroster::services::roster::{MonthRef, RosterService};

fn populated_roster() -> (RosterService, MonthRef) {
    let mut roster = RosterService::new();
    let month = MonthRef::new(2026, 1);
    let jane = roster.add_nurse("Jane", "Doe").expect("valid names");
    let omar = roster.add_nurse("Omar", "Haddad").expect("valid names");
    roster.assign_shift(month, jane, 1, ShiftKind::Morning);
    roster.assign_shift(month, jane, 3, ShiftKind::Night);
    roster.assign_shift(month, omar, 2, ShiftKind::Evening);
    roster.assign_shift(month, omar, 4, ShiftKind::DayOff);
    (roster, month)
}

#[test]
fn test_export_writes_a_pdf_document() {
    let (roster, month) = populated_roster();
    let table = RosterTable::build(&roster, month);

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("Roster_January_2026.pdf");

    RosterPdfService::export(&table, &path, &PdfExportOptions::default())
        .expect("export succeeds");

    let bytes = std::fs::read(&path).expect("file written");
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF"), "output should be a PDF document");
}

#[test]
fn test_export_of_empty_roster_still_writes_header_page() {
    let roster = RosterService::new();
    let table = RosterTable::build(&roster, MonthRef::new(2026, 2));

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("Roster_February_2026.pdf");

    RosterPdfService::export(&table, &path, &PdfExportOptions::default())
        .expect("empty roster export succeeds");
    assert!(path.exists());
}

#[test]
fn test_export_failure_is_reported_not_swallowed() {
    let (roster, month) = populated_roster();
    let table = RosterTable::build(&roster, month);

    // Parent directory does not exist, so file creation must fail
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing").join("roster.pdf");

    let result = RosterPdfService::export(&table, &path, &PdfExportOptions::default());
    assert!(result.is_err());
    assert!(!path.exists(), "no partial file should remain");
}

#[test]
fn test_many_nurses_paginate_without_error() {
    let mut roster = RosterService::new();
    let month = MonthRef::new(2026, 3);
    for i in 0u32..40 {
        let id = roster
            .add_nurse("Nurse", format!("Number{}", i))
            .expect("valid names");
        roster.assign_shift(month, id, 1 + (i % 28), ShiftKind::Morning);
    }
    let table = RosterTable::build(&roster, month);

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("Roster_March_2026.pdf");

    RosterPdfService::export(&table, &path, &PdfExportOptions::default())
        .expect("multi-page export succeeds");
    assert!(path.exists());
}
