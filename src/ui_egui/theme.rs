//! Theme module for the egui roster application
//!
//! Defines the RosterTheme structure, the light/dark presets, and the
//! system-preference resolution used by the View menu.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// How the user wants the theme chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    /// Follow the operating system's light/dark preference
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolve the preference to a concrete theme.
    pub fn resolve(&self) -> RosterTheme {
        match self {
            ThemePreference::Light => RosterTheme::light(),
            ThemePreference::Dark => RosterTheme::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => RosterTheme::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => RosterTheme::light(),
            },
        }
    }
}

/// A theme defining all colors used in the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Roster grid background color
    pub grid_background: Color32,

    /// Header strip background (day-number row, name column header)
    pub header_background: Color32,

    /// Header strip text color
    pub header_text: Color32,

    /// Unassigned weekday cell background
    pub cell_background: Color32,

    /// Unassigned weekend cell background
    pub weekend_background: Color32,

    /// Cell border color
    pub cell_border: Color32,

    /// Accent color (selected cell border, primary buttons)
    pub accent: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary text color
    pub text_secondary: Color32,
}

impl RosterTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            grid_background: Color32::from_rgb(255, 255, 255),
            header_background: Color32::from_rgb(232, 236, 244),
            header_text: Color32::from_rgb(45, 55, 80),
            cell_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(243, 243, 247),
            cell_border: Color32::from_rgb(220, 220, 220),
            accent: Color32::from_rgb(25, 118, 210),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            grid_background: Color32::from_rgb(40, 40, 40),
            header_background: Color32::from_rgb(50, 56, 70),
            header_text: Color32::from_rgb(210, 218, 235),
            cell_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 40),
            cell_border: Color32::from_rgb(60, 60, 60),
            accent: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.cell_background;
        visuals.widgets.inactive.bg_fill = self.cell_background;
        visuals.widgets.hovered.bg_fill = self.header_background;
        visuals.widgets.active.bg_fill = self.header_background;

        ctx.set_visuals(visuals);
    }
}
