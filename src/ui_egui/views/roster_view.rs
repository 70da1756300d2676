//! The nurse-by-day roster grid for the selected month.
//!
//! A fixed name column followed by one column per day. Weekend columns
//! are tinted; assigned cells carry their shift's catalog colors. A
//! click on any day cell reports the cell so the app can open the
//! shift picker anchored beneath it.

use egui::{Align2, FontId, Pos2, Sense, Stroke};
use egui_extras::{Column, TableBuilder};

use super::palette::RosterCellPalette;
use crate::models::nurse::NurseId;
use crate::services::roster::{MonthRef, RosterService};
use crate::ui_egui::app::state::SelectedCell;
use crate::ui_egui::theme::RosterTheme;

/// Width of the leading nurse-name column
const NAME_COLUMN_WIDTH: f32 = 160.0;
/// Width of one day column
const DAY_COLUMN_WIDTH: f32 = 34.0;
const HEADER_HEIGHT: f32 = 26.0;
const ROW_HEIGHT: f32 = 30.0;

/// Result returned from the roster view
#[derive(Default)]
pub struct RosterViewResult {
    /// Day cell the user clicked this frame, if any
    pub clicked_cell: Option<SelectedCell>,
}

pub struct RosterView;

impl RosterView {
    pub fn show(
        ui: &mut egui::Ui,
        roster: &RosterService,
        month: MonthRef,
        selected: Option<SelectedCell>,
        theme: &RosterTheme,
    ) -> RosterViewResult {
        let palette = RosterCellPalette::from_theme(theme);
        let mut result = RosterViewResult::default();
        let day_count = month.day_count();

        egui::ScrollArea::horizontal()
            .id_source("roster_grid_scroll")
            .show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(false)
                    .vscroll(true)
                    .column(Column::exact(NAME_COLUMN_WIDTH))
                    .columns(Column::exact(DAY_COLUMN_WIDTH), day_count as usize)
                    .header(HEADER_HEIGHT, |mut header| {
                        header.col(|ui| {
                            Self::paint_header_cell(ui, "Nurse Name", false, &palette);
                        });
                        for day in 1..=day_count {
                            let is_weekend = month.is_weekend(day);
                            header.col(|ui| {
                                Self::paint_header_cell(
                                    ui,
                                    &day.to_string(),
                                    is_weekend,
                                    &palette,
                                );
                            });
                        }
                    })
                    .body(|mut body| {
                        for nurse in roster.nurses() {
                            body.row(ROW_HEIGHT, |mut row| {
                                row.col(|ui| {
                                    Self::paint_name_cell(ui, &nurse.full_name(), &palette);
                                });
                                for day in 1..=day_count {
                                    row.col(|ui| {
                                        let is_selected = selected.is_some_and(|cell| {
                                            cell.nurse == nurse.id && cell.day == day
                                        });
                                        if let Some(clicked) = Self::paint_shift_cell(
                                            ui,
                                            roster,
                                            month,
                                            nurse.id,
                                            day,
                                            is_selected,
                                            &palette,
                                        ) {
                                            result.clicked_cell = Some(clicked);
                                        }
                                    });
                                }
                            });
                        }
                    });
            });

        if roster.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("No nurses on the roster yet.")
                        .size(15.0)
                        .color(palette.text_secondary),
                );
                ui.label(
                    egui::RichText::new("Use \"+ Add Nurse\" to start filling the grid.")
                        .size(12.0)
                        .color(palette.text_secondary),
                );
            });
        }

        result
    }

    fn paint_header_cell(
        ui: &mut egui::Ui,
        label: &str,
        is_weekend: bool,
        palette: &RosterCellPalette,
    ) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let bg = if is_weekend {
            palette.header_weekend_bg
        } else {
            palette.header_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg);
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.0, palette.border));
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(13.0),
            palette.header_text,
        );
    }

    fn paint_name_cell(ui: &mut egui::Ui, name: &str, palette: &RosterCellPalette) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        ui.painter().rect_filled(rect, 2.0, palette.name_bg);
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.0, palette.border));
        ui.painter().text(
            Pos2::new(rect.left() + 6.0, rect.center().y),
            Align2::LEFT_CENTER,
            name,
            FontId::proportional(13.0),
            palette.text,
        );
    }

    fn paint_shift_cell(
        ui: &mut egui::Ui,
        roster: &RosterService,
        month: MonthRef,
        nurse: NurseId,
        day: u32,
        is_selected: bool,
        palette: &RosterCellPalette,
    ) -> Option<SelectedCell> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());

        let assigned = roster.shift_for(month, nurse, day);
        let bg = match assigned {
            Some(kind) => kind.fill_color(),
            None if month.is_weekend(day) => palette.weekend_bg,
            None => palette.cell_bg,
        };
        ui.painter().rect_filled(rect, 2.0, bg);

        let border = if is_selected {
            Stroke::new(2.0, palette.selected_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        ui.painter().rect_stroke(rect, 2.0, border);

        if let Some(kind) = assigned {
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                kind.code(),
                FontId::proportional(12.0),
                kind.text_color(),
            );
        }

        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            let hint = match assigned {
                Some(kind) => format!("{} {}", kind.icon(), kind.label()),
                None => "Click to assign a shift".to_string(),
            };
            response.clone().on_hover_text(hint);
        }

        if response.clicked() {
            // Anchor the picker just below the clicked cell
            return Some(SelectedCell {
                nurse,
                day,
                anchor: Pos2::new(rect.left(), rect.bottom() + 2.0),
            });
        }

        None
    }
}
