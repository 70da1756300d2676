mod export;
mod lifecycle;
mod navigation;
pub(crate) mod state;
mod toast;

use self::state::{AppView, ShiftPickerState};
use self::toast::ToastManager;
use crate::services::roster::{MonthRef, RosterService};
use crate::ui_egui::dialogs::add_nurse::AddNurseDialogState;
use crate::ui_egui::theme::{RosterTheme, ThemePreference};

/// Top-level application controller: owns all roster state and routes
/// it to the views each frame.
pub struct RosterApp {
    /// Nurse list and shift assignments for every month
    roster: RosterService,
    /// The month currently shown in the grid
    current_month: MonthRef,
    current_view: AppView,
    /// Idle/CellSelected machine for the shift picker popup
    shift_picker: ShiftPickerState,
    add_nurse_dialog: AddNurseDialogState,
    /// Currently applied theme colors
    active_theme: RosterTheme,
    theme_preference: ThemePreference,
    /// Guards against re-entrant export requests while one is running
    exporting: bool,
    toast_manager: ToastManager,
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
