//! Anchored popup offering the shift choices for one roster cell.

use egui::{Align2, Color32, FontId, Id, Order, Pos2, Sense, Stroke, Vec2};

use super::palette::RosterCellPalette;
use crate::models::shift::ShiftKind;
use crate::ui_egui::app::state::SelectedCell;
use crate::ui_egui::theme::RosterTheme;

const OPTION_SIZE: Vec2 = Vec2::new(150.0, 26.0);

/// What the user did with the open picker this frame.
pub enum ShiftPickerResult {
    /// Popup still open, nothing chosen
    Open,
    /// A shift was chosen for the selected cell
    Choose(ShiftKind),
    /// "Clear shift" was chosen
    Clear,
    /// Pointer press landed outside the popup
    Dismiss,
}

pub struct ShiftPicker;

impl ShiftPicker {
    pub fn show(
        ctx: &egui::Context,
        cell: &SelectedCell,
        theme: &RosterTheme,
    ) -> ShiftPickerResult {
        let palette = RosterCellPalette::from_theme(theme);
        let mut result = ShiftPickerResult::Open;

        let area = egui::Area::new(Id::new("shift_picker_popup"))
            .fixed_pos(cell.anchor)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(palette.name_bg)
                    .stroke(Stroke::new(1.0, palette.border))
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.y = 2.0;
                        for kind in ShiftKind::ALL {
                            if Self::option_button(ui, kind) {
                                result = ShiftPickerResult::Choose(kind);
                            }
                        }
                        ui.separator();
                        let clear = ui.add_sized(
                            OPTION_SIZE,
                            egui::Button::new(
                                egui::RichText::new("Clear shift")
                                    .color(palette.text_secondary),
                            )
                            .fill(Color32::TRANSPARENT),
                        );
                        if clear.clicked() {
                            result = ShiftPickerResult::Clear;
                        }
                    });
            });

        // Any press outside the popup dismisses it. A press that opens a
        // different cell's picker is also "outside"; the caller lets the
        // new open win over the dismissal.
        if matches!(result, ShiftPickerResult::Open) {
            let popup_rect = area.response.rect;
            let pressed_outside = ctx.input(|input| {
                input.pointer.any_pressed()
                    && input
                        .pointer
                        .interact_pos()
                        .is_some_and(|pos| !popup_rect.contains(pos))
            });
            if pressed_outside {
                result = ShiftPickerResult::Dismiss;
            }
        }

        result
    }

    /// One colored row of the picker: swatch with the shift code, icon,
    /// and label. Returns true when clicked.
    fn option_button(ui: &mut egui::Ui, kind: ShiftKind) -> bool {
        let (rect, response) = ui.allocate_exact_size(OPTION_SIZE, Sense::click());

        if response.hovered() {
            ui.painter()
                .rect_filled(rect, 4.0, kind.fill_color().gamma_multiply(0.35));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let swatch = egui::Rect::from_min_size(
            Pos2::new(rect.left() + 4.0, rect.center().y - 9.0),
            Vec2::new(26.0, 18.0),
        );
        ui.painter().rect_filled(swatch, 3.0, kind.fill_color());
        ui.painter().text(
            swatch.center(),
            Align2::CENTER_CENTER,
            kind.code(),
            FontId::proportional(11.0),
            kind.text_color(),
        );

        ui.painter().text(
            Pos2::new(swatch.right() + 8.0, rect.center().y),
            Align2::LEFT_CENTER,
            format!("{} {}", kind.icon(), kind.label()),
            FontId::proportional(13.0),
            ui.visuals().text_color(),
        );

        response.clicked()
    }
}
