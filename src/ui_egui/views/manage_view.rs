//! Nurse management view: a card per nurse with avatar, ordinal label,
//! and a remove action.

use egui::{Align2, Color32, FontId, RichText, Sense, Stroke, Vec2};

use super::palette::{nurse_accent, RosterCellPalette};
use crate::models::nurse::{Nurse, NurseId};
use crate::services::roster::RosterService;
use crate::ui_egui::theme::RosterTheme;

const CARD_SIZE: Vec2 = Vec2::new(230.0, 96.0);
const AVATAR_DIAMETER: f32 = 44.0;

/// Action returned from the management view
pub enum ManageViewAction {
    None,
    /// "Back to Roster" pressed
    Back,
    /// Remove the nurse with this id
    Remove(NurseId),
}

pub struct ManageView;

impl ManageView {
    pub fn show(
        ui: &mut egui::Ui,
        roster: &RosterService,
        theme: &RosterTheme,
    ) -> ManageViewAction {
        let palette = RosterCellPalette::from_theme(theme);
        let mut action = ManageViewAction::None;

        ui.horizontal(|ui| {
            if ui.button("⬅ Back to Roster").clicked() {
                action = ManageViewAction::Back;
            }
            ui.add_space(8.0);
            ui.heading("Manage Nurses");
            ui.add_space(8.0);
            let count = roster.len();
            let plural = if count == 1 { "" } else { "s" };
            ui.label(
                RichText::new(format!("{} nurse{} on roster", count, plural))
                    .color(palette.text_secondary),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        if roster.is_empty() {
            ui.add_space(30.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("👥").size(40.0));
                ui.add_space(6.0);
                ui.label(
                    RichText::new("No nurses on the roster yet.")
                        .size(15.0)
                        .color(palette.text),
                );
                ui.label(
                    RichText::new(
                        "Go back to the roster and add nurses using the \"+ Add Nurse\" button.",
                    )
                    .size(12.0)
                    .color(palette.text_secondary),
                );
            });
            return action;
        }

        egui::ScrollArea::vertical()
            .id_source("manage_cards_scroll")
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(12.0, 12.0);
                    for (index, nurse) in roster.nurses().iter().enumerate() {
                        if Self::nurse_card(ui, index, nurse, &palette) {
                            action = ManageViewAction::Remove(nurse.id);
                        }
                    }
                });
            });

        action
    }

    /// One nurse card. Returns true when its Remove button was clicked.
    fn nurse_card(
        ui: &mut egui::Ui,
        index: usize,
        nurse: &Nurse,
        palette: &RosterCellPalette,
    ) -> bool {
        let accent = nurse_accent(index);
        let mut remove_clicked = false;

        egui::Frame::none()
            .fill(palette.name_bg)
            .rounding(egui::Rounding::same(8.0))
            .stroke(Stroke::new(1.0, palette.border))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_min_size(CARD_SIZE);
                ui.set_max_width(CARD_SIZE.x);
                ui.horizontal(|ui| {
                    // Avatar badge with initials
                    let (avatar_rect, _) = ui.allocate_exact_size(
                        Vec2::splat(AVATAR_DIAMETER),
                        Sense::hover(),
                    );
                    ui.painter().circle_filled(
                        avatar_rect.center(),
                        AVATAR_DIAMETER / 2.0,
                        accent.avatar_bg,
                    );
                    ui.painter().text(
                        avatar_rect.center(),
                        Align2::CENTER_CENTER,
                        nurse.initials(),
                        FontId::proportional(16.0),
                        accent.accent,
                    );

                    ui.add_space(6.0);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(nurse.full_name())
                                .size(14.0)
                                .strong()
                                .color(accent.accent),
                        );
                        ui.label(
                            RichText::new(format!("ID #{:04}", index + 1))
                                .size(11.0)
                                .color(palette.text_secondary),
                        );
                        ui.horizontal(|ui| {
                            let (dot_rect, _) =
                                ui.allocate_exact_size(Vec2::splat(8.0), Sense::hover());
                            ui.painter().circle_filled(
                                dot_rect.center(),
                                4.0,
                                Color32::from_rgb(76, 175, 80),
                            );
                            ui.label(
                                RichText::new("Active")
                                    .size(11.0)
                                    .color(palette.text_secondary),
                            );
                        });
                        ui.add_space(4.0);
                        if ui
                            .small_button(RichText::new("Remove").color(Color32::from_rgb(200, 60, 60)))
                            .clicked()
                        {
                            remove_clicked = true;
                        }
                    });
                });
            });

        remove_clicked
    }
}
