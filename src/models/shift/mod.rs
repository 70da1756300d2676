// Shift module
// Closed catalog of duty-shift kinds with display and export styling

use egui::Color32;

/// One of the fixed duty-shift kinds a roster cell can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftKind {
    Morning,
    Evening,
    Night,
    DayOff,
}

/// RGB color normalized to 0.0-1.0, the form the PDF layer consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ExportColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl ShiftKind {
    /// Every catalog entry, in picker display order.
    pub const ALL: [ShiftKind; 4] = [
        ShiftKind::Morning,
        ShiftKind::Evening,
        ShiftKind::Night,
        ShiftKind::DayOff,
    ];

    /// Short code shown in roster cells and the exported document.
    pub fn code(&self) -> &'static str {
        match self {
            ShiftKind::Morning => "M",
            ShiftKind::Evening => "E",
            ShiftKind::Night => "N",
            ShiftKind::DayOff => "DO",
        }
    }

    /// Human-readable label used in the picker and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Evening => "Evening",
            ShiftKind::Night => "Night",
            ShiftKind::DayOff => "Day Off",
        }
    }

    /// Icon glyph shown next to the label in the picker.
    pub fn icon(&self) -> &'static str {
        match self {
            ShiftKind::Morning => "🌅",
            ShiftKind::Evening => "🌇",
            ShiftKind::Night => "🌙",
            ShiftKind::DayOff => "🏖",
        }
    }

    /// Cell background color in the on-screen grid.
    pub fn fill_color(&self) -> Color32 {
        match self {
            ShiftKind::Morning => Color32::from_rgb(255, 236, 179),
            ShiftKind::Evening => Color32::from_rgb(255, 204, 153),
            ShiftKind::Night => Color32::from_rgb(63, 81, 160),
            ShiftKind::DayOff => Color32::from_rgb(224, 224, 224),
        }
    }

    /// Cell text color paired with `fill_color`.
    pub fn text_color(&self) -> Color32 {
        match self {
            ShiftKind::Morning => Color32::from_rgb(130, 90, 0),
            ShiftKind::Evening => Color32::from_rgb(140, 70, 10),
            ShiftKind::Night => Color32::from_rgb(245, 245, 255),
            ShiftKind::DayOff => Color32::from_rgb(90, 90, 90),
        }
    }

    /// Cell fill for the exported document.
    pub fn export_fill(&self) -> ExportColor {
        match self {
            ShiftKind::Morning => ExportColor::new(1.0, 0.925, 0.702),
            ShiftKind::Evening => ExportColor::new(1.0, 0.8, 0.6),
            ShiftKind::Night => ExportColor::new(0.247, 0.318, 0.627),
            ShiftKind::DayOff => ExportColor::new(0.878, 0.878, 0.878),
        }
    }

    /// Cell text color for the exported document.
    pub fn export_text(&self) -> ExportColor {
        match self {
            ShiftKind::Morning => ExportColor::new(0.51, 0.353, 0.0),
            ShiftKind::Evening => ExportColor::new(0.549, 0.275, 0.039),
            ShiftKind::Night => ExportColor::new(0.961, 0.961, 1.0),
            ShiftKind::DayOff => ExportColor::new(0.353, 0.353, 0.353),
        }
    }

    /// Catalog lookup by short code.
    pub fn from_code(code: &str) -> Option<ShiftKind> {
        ShiftKind::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in ShiftKind::ALL.iter().enumerate() {
            for b in ShiftKind::ALL.iter().skip(i + 1) {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_from_code_round_trips() {
        for kind in ShiftKind::ALL {
            assert_eq!(ShiftKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(ShiftKind::from_code("X"), None);
        assert_eq!(ShiftKind::from_code(""), None);
        assert_eq!(ShiftKind::from_code("m"), None);
    }

    #[test]
    fn test_expected_codes() {
        assert_eq!(ShiftKind::Morning.code(), "M");
        assert_eq!(ShiftKind::Evening.code(), "E");
        assert_eq!(ShiftKind::Night.code(), "N");
        assert_eq!(ShiftKind::DayOff.code(), "DO");
    }

    #[test]
    fn test_night_shift_uses_light_text_on_dark_fill() {
        let fill = ShiftKind::Night.fill_color();
        let text = ShiftKind::Night.text_color();
        let luma = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(luma(text) > luma(fill));
    }
}
