//! Add Nurse modal dialog.

use egui::{Color32, Context, RichText};

/// State for the add-nurse dialog
#[derive(Default)]
pub struct AddNurseDialogState {
    pub is_open: bool,
    pub first_name: String,
    pub last_name: String,
    /// Validation message shown when a save is rejected
    pub error_message: Option<String>,
}

impl AddNurseDialogState {
    pub fn open(&mut self) {
        self.is_open = true;
        self.error_message = None;
    }

    pub fn close_and_reset(&mut self) {
        self.is_open = false;
        self.first_name.clear();
        self.last_name.clear();
        self.error_message = None;
    }
}

/// Result from the add-nurse dialog
pub enum AddNurseAction {
    /// Dialog still open or closed with no request
    None,
    /// User pressed Save; the caller validates and admits
    Submitted,
    /// User cancelled or closed the window
    Cancelled,
}

/// Renders the add-nurse dialog. The caller owns validation: on a
/// rejected save it sets `error_message` and leaves the dialog open.
pub fn render_add_nurse_dialog(ctx: &Context, state: &mut AddNurseDialogState) -> AddNurseAction {
    if !state.is_open {
        return AddNurseAction::None;
    }

    let mut action = AddNurseAction::None;
    let mut open = true;

    egui::Window::new("Add Nurse")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            egui::Grid::new("add_nurse_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("First Name:");
                    ui.text_edit_singleline(&mut state.first_name);
                    ui.end_row();

                    ui.label("Last Name:");
                    ui.text_edit_singleline(&mut state.last_name);
                    ui.end_row();
                });

            if let Some(message) = &state.error_message {
                ui.add_space(4.0);
                ui.label(RichText::new(message).color(Color32::from_rgb(200, 60, 60)));
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    action = AddNurseAction::Cancelled;
                }
                if ui.button("Save").clicked() {
                    action = AddNurseAction::Submitted;
                }
            });
        });

    if !open {
        action = AddNurseAction::Cancelled;
    }

    action
}
