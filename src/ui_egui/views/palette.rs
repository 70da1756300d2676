use crate::ui_egui::theme::RosterTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Blend header color for weekend columns (slightly darker/lighter)
fn blend_weekend(header_bg: Color32, is_dark: bool) -> Color32 {
    let factor = if is_dark { 1.15 } else { 0.92 };
    Color32::from_rgb(
        ((header_bg.r() as f32 * factor).min(255.0)) as u8,
        ((header_bg.g() as f32 * factor).min(255.0)) as u8,
        ((header_bg.b() as f32 * factor).min(255.0)) as u8,
    )
}

#[derive(Clone, Copy)]
pub(crate) struct RosterCellPalette {
    pub header_bg: Color32,
    pub header_weekend_bg: Color32,
    pub header_text: Color32,
    pub name_bg: Color32,
    pub cell_bg: Color32,
    pub weekend_bg: Color32,
    pub border: Color32,
    pub hover_border: Color32,
    pub selected_border: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
}

impl RosterCellPalette {
    pub fn from_theme(theme: &RosterTheme) -> Self {
        Self {
            header_bg: theme.header_background,
            header_weekend_bg: blend_weekend(theme.header_background, theme.is_dark),
            header_text: theme.header_text,
            name_bg: theme.grid_background,
            cell_bg: theme.cell_background,
            weekend_bg: theme.weekend_background,
            border: theme.cell_border,
            hover_border: with_alpha(theme.accent, if theme.is_dark { 160 } else { 120 }),
            selected_border: theme.accent,
            text: theme.text_primary,
            text_secondary: theme.text_secondary,
        }
    }
}

/// Avatar/accent color pair for a nurse card in the management view.
#[derive(Clone, Copy)]
pub(crate) struct NurseAccent {
    pub avatar_bg: Color32,
    pub accent: Color32,
}

/// Cycle through a small palette of accent colors based on list position.
pub(crate) fn nurse_accent(index: usize) -> NurseAccent {
    const ACCENTS: [NurseAccent; 6] = [
        NurseAccent {
            avatar_bg: Color32::from_rgb(227, 242, 253),
            accent: Color32::from_rgb(25, 118, 210),
        },
        NurseAccent {
            avatar_bg: Color32::from_rgb(252, 228, 236),
            accent: Color32::from_rgb(233, 30, 99),
        },
        NurseAccent {
            avatar_bg: Color32::from_rgb(232, 245, 233),
            accent: Color32::from_rgb(76, 175, 80),
        },
        NurseAccent {
            avatar_bg: Color32::from_rgb(255, 243, 224),
            accent: Color32::from_rgb(255, 152, 0),
        },
        NurseAccent {
            avatar_bg: Color32::from_rgb(237, 231, 246),
            accent: Color32::from_rgb(103, 58, 183),
        },
        NurseAccent {
            avatar_bg: Color32::from_rgb(224, 247, 250),
            accent: Color32::from_rgb(0, 188, 212),
        },
    ];
    ACCENTS[index % ACCENTS.len()]
}
