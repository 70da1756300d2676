use super::state::{AppView, ShiftPickerState};
use super::toast::ToastManager;
use super::RosterApp;
use crate::services::roster::{MonthRef, RosterService};
use crate::ui_egui::dialogs::add_nurse::{
    render_add_nurse_dialog, AddNurseAction, AddNurseDialogState,
};
use crate::ui_egui::theme::ThemePreference;
use crate::ui_egui::views::manage_view::{ManageView, ManageViewAction};
use crate::ui_egui::views::roster_view::RosterView;
use crate::ui_egui::views::shift_picker::{ShiftPicker, ShiftPickerResult};
use chrono::{Datelike, Local};

impl RosterApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut roster = RosterService::new();
        // Demo staff the roster ships with, mirroring a fresh install
        roster
            .add_nurse("Nurse", "A")
            .expect("seed nurse names are non-blank");
        roster
            .add_nurse("Nurse", "B")
            .expect("seed nurse names are non-blank");

        let today = Local::now().date_naive();
        let theme_preference = ThemePreference::System;
        let active_theme = theme_preference.resolve();
        active_theme.apply_to_context(&cc.egui_ctx);

        log::info!("Roster initialized with {} nurses", roster.len());

        Self {
            roster,
            current_month: MonthRef::new(today.year(), today.month()),
            current_view: AppView::Roster,
            shift_picker: ShiftPickerState::default(),
            add_nurse_dialog: AddNurseDialogState::default(),
            active_theme,
            theme_preference,
            exporting: false,
            toast_manager: ToastManager::new(),
        }
    }

    pub(super) fn set_theme_preference(
        &mut self,
        ctx: &egui::Context,
        preference: ThemePreference,
    ) {
        self.theme_preference = preference;
        self.active_theme = preference.resolve();
        self.active_theme.apply_to_context(ctx);
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_header(ctx);

        let mut clicked_cell = None;
        let mut manage_action = ManageViewAction::None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(self.active_theme.app_background)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| match self.current_view {
                AppView::Roster => {
                    let result = RosterView::show(
                        ui,
                        &self.roster,
                        self.current_month,
                        self.shift_picker.selected(),
                        &self.active_theme,
                    );
                    clicked_cell = result.clicked_cell;
                }
                AppView::ManageNurses => {
                    manage_action = ManageView::show(ui, &self.roster, &self.active_theme);
                }
            });

        // Shift picker popup (rendered above the grid). A press outside
        // dismisses it unless that press is opening another cell.
        if let Some(cell) = self.shift_picker.selected() {
            match ShiftPicker::show(ctx, &cell, &self.active_theme) {
                ShiftPickerResult::Open => {}
                ShiftPickerResult::Choose(kind) => {
                    self.roster
                        .assign_shift(self.current_month, cell.nurse, cell.day, kind);
                    self.shift_picker.close();
                }
                ShiftPickerResult::Clear => {
                    self.roster.clear_shift(self.current_month, cell.nurse, cell.day);
                    self.shift_picker.close();
                }
                ShiftPickerResult::Dismiss => {
                    if clicked_cell.is_none() {
                        self.shift_picker.close();
                    }
                }
            }
        }
        if let Some(cell) = clicked_cell {
            self.shift_picker.open(cell);
        }

        match manage_action {
            ManageViewAction::None => {}
            ManageViewAction::Back => {
                self.current_view = AppView::Roster;
            }
            ManageViewAction::Remove(id) => {
                let name = self.roster.nurse(id).map(|nurse| nurse.full_name());
                if self.roster.remove_nurse(id) {
                    if let Some(name) = name {
                        self.toast_manager.info(format!("Removed {}", name));
                    }
                }
            }
        }

        self.render_add_nurse(ctx);

        let is_dark = self.active_theme.is_dark;
        self.toast_manager.render(ctx, is_dark);
    }

    fn render_add_nurse(&mut self, ctx: &egui::Context) {
        match render_add_nurse_dialog(ctx, &mut self.add_nurse_dialog) {
            AddNurseAction::None => {}
            AddNurseAction::Cancelled => {
                self.add_nurse_dialog.close_and_reset();
            }
            AddNurseAction::Submitted => {
                let first = self.add_nurse_dialog.first_name.clone();
                let last = self.add_nurse_dialog.last_name.clone();
                match self.roster.add_nurse(first, last) {
                    Ok(id) => {
                        if let Some(nurse) = self.roster.nurse(id) {
                            self.toast_manager
                                .success(format!("Added {}", nurse.full_name()));
                        }
                        self.add_nurse_dialog.close_and_reset();
                    }
                    Err(err) => {
                        // Rejected: the dialog stays open, nothing changes
                        self.add_nurse_dialog.error_message = Some(err.to_string());
                    }
                }
            }
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(format!("Monthly Duty Roster - {}", self.current_month.label()));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.menu_button("🎨 Theme", |ui| {
                        for (label, preference) in [
                            ("System", ThemePreference::System),
                            ("Light", ThemePreference::Light),
                            ("Dark", ThemePreference::Dark),
                        ] {
                            if ui
                                .selectable_label(self.theme_preference == preference, label)
                                .clicked()
                            {
                                self.set_theme_preference(ctx, preference);
                                ui.close_menu();
                            }
                        }
                    });

                    if self.current_view == AppView::Roster {
                        let export = ui.add_enabled(
                            !self.exporting,
                            egui::Button::new("🖨 Export PDF"),
                        );
                        if export.clicked() {
                            self.export_roster_to_pdf();
                        }

                        if ui.button("Manage Nurses").clicked() {
                            self.current_view = AppView::ManageNurses;
                        }
                        if ui.button("+ Add Nurse").clicked() {
                            self.add_nurse_dialog.open();
                        }
                    }
                });
            });

            if self.current_view == AppView::Roster {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        self.navigate_previous_month();
                    }
                    if ui.button("Today").clicked() {
                        self.jump_to_current_month();
                    }
                    if ui.button("▶").clicked() {
                        self.navigate_next_month();
                    }
                });
            }
            ui.add_space(6.0);
        });
    }
}
