//! Export transform: projects a roster month into a renderer-free table
//! model. The PDF service consumes this model without ever touching
//! roster state, so the projection can be tested on its own.

use crate::models::shift::ExportColor;
use crate::services::roster::{MonthRef, RosterService};

/// Printable width of a landscape A4 page, in millimeters.
pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;
pub const PAGE_MARGIN_MM: f32 = 10.0;
/// Fixed width of the leading nurse-name column.
pub const NAME_COLUMN_MM: f32 = 48.0;

const WEEKEND_FILL: ExportColor = ExportColor::new(0.93, 0.93, 0.95);
const BODY_TEXT: ExportColor = ExportColor::new(0.15, 0.15, 0.15);

/// One styled cell of the exported table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    /// Background fill; `None` paints nothing (page white).
    pub fill: Option<ExportColor>,
    pub text_color: ExportColor,
}

impl TableCell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: None,
            text_color: BODY_TEXT,
        }
    }
}

/// The full document model handed to the PDF renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterTable {
    pub title: String,
    /// "Nurse" followed by one label per day of the month.
    pub headers: Vec<String>,
    /// One row per nurse; the leading cell is the nurse name.
    pub rows: Vec<Vec<TableCell>>,
    pub name_column_width: f32,
    pub day_column_width: f32,
}

impl RosterTable {
    /// Build the table for one month from the current roster snapshot.
    pub fn build(roster: &RosterService, month: MonthRef) -> Self {
        let day_count = month.day_count();

        let mut headers = Vec::with_capacity(day_count as usize + 1);
        headers.push("Nurse".to_string());
        headers.extend((1..=day_count).map(|day| day.to_string()));

        let rows = roster
            .nurses()
            .iter()
            .map(|nurse| {
                let mut row = Vec::with_capacity(day_count as usize + 1);
                row.push(TableCell::plain(nurse.full_name()));
                for day in 1..=day_count {
                    row.push(match roster.shift_for(month, nurse.id, day) {
                        Some(kind) => TableCell {
                            text: kind.code().to_string(),
                            fill: Some(kind.export_fill()),
                            text_color: kind.export_text(),
                        },
                        None if month.is_weekend(day) => TableCell {
                            text: String::new(),
                            fill: Some(WEEKEND_FILL),
                            text_color: BODY_TEXT,
                        },
                        None => TableCell::plain(""),
                    });
                }
                row
            })
            .collect();

        Self {
            title: format!("Duty Roster - {}", month.label()),
            headers,
            rows,
            name_column_width: NAME_COLUMN_MM,
            day_column_width: day_column_width(day_count),
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Day columns split the printable width left over after the name column.
pub fn day_column_width(day_count: u32) -> f32 {
    let printable = PAGE_WIDTH_MM - 2.0 * PAGE_MARGIN_MM - NAME_COLUMN_MM;
    printable / day_count as f32
}

/// Download-style file name for a month's export, e.g. "Roster_January_2026.pdf".
pub fn suggested_file_name(month: MonthRef) -> String {
    format!(
        "Roster_{}_{}.pdf",
        crate::utils::date::month_name(month.month()),
        month.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::ShiftKind;

    #[test]
    fn test_empty_roster_exports_header_only() {
        let roster = RosterService::new();
        let table = RosterTable::build(&roster, MonthRef::new(2026, 1));
        assert_eq!(table.headers.len(), 32);
        assert_eq!(table.headers[0], "Nurse");
        assert_eq!(table.headers[31], "31");
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_assigned_cell_carries_catalog_colors() {
        let mut roster = RosterService::new();
        let id = roster.add_nurse("Jane", "Doe").unwrap();
        let month = MonthRef::new(2026, 1);
        roster.assign_shift(month, id, 5, ShiftKind::Night);

        let table = RosterTable::build(&roster, month);
        let cell = &table.rows[0][5];
        assert_eq!(cell.text, "N");
        assert_eq!(cell.fill, Some(ShiftKind::Night.export_fill()));
        assert_eq!(cell.text_color, ShiftKind::Night.export_text());
    }

    #[test]
    fn test_weekend_shading_only_when_unassigned() {
        let mut roster = RosterService::new();
        let id = roster.add_nurse("Jane", "Doe").unwrap();
        let month = MonthRef::new(2026, 1);
        // January 3rd 2026 is a Saturday
        let unassigned_weekend = &RosterTable::build(&roster, month).rows[0][3];
        assert_eq!(unassigned_weekend.fill, Some(WEEKEND_FILL));
        assert!(unassigned_weekend.text.is_empty());

        // An assigned shift's color wins over the weekend tint
        roster.assign_shift(month, id, 3, ShiftKind::Morning);
        let assigned_weekend = &RosterTable::build(&roster, month).rows[0][3];
        assert_eq!(assigned_weekend.fill, Some(ShiftKind::Morning.export_fill()));
    }

    #[test]
    fn test_weekday_unassigned_cell_is_unfilled() {
        let mut roster = RosterService::new();
        roster.add_nurse("Jane", "Doe").unwrap();
        let table = RosterTable::build(&roster, MonthRef::new(2026, 1));
        // January 5th 2026 is a Monday
        assert_eq!(table.rows[0][5].fill, None);
    }

    #[test]
    fn test_day_columns_fill_printable_width_evenly() {
        for day_count in [28u32, 29, 30, 31] {
            let width = day_column_width(day_count);
            let total = NAME_COLUMN_MM + width * day_count as f32;
            let printable = PAGE_WIDTH_MM - 2.0 * PAGE_MARGIN_MM;
            assert!((total - printable).abs() < 0.01);
        }
    }

    #[test]
    fn test_row_leads_with_nurse_name() {
        let mut roster = RosterService::new();
        roster.add_nurse("Jane", "Doe").unwrap();
        let table = RosterTable::build(&roster, MonthRef::new(2026, 2));
        assert_eq!(table.rows[0][0].text, "Jane Doe");
        assert_eq!(table.rows[0].len(), table.column_count());
    }

    #[test]
    fn test_suggested_file_name() {
        assert_eq!(
            suggested_file_name(MonthRef::new(2026, 1)),
            "Roster_January_2026.pdf"
        );
    }
}
