use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Flag;
use crate::report::content::Tone;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed colours
// ---------------------------------------------------------------------------

pub const LEFT_COLOR: Color32 = Color32::from_rgb(0xFF, 0x4B, 0x4B);
pub const STAYED_COLOR: Color32 = Color32::from_rgb(0x00, 0xCC, 0x96);

/// Series colour for an attrition group.
pub fn attrition_color(attrition: Flag) -> Color32 {
    match attrition {
        Flag::Yes => LEFT_COLOR,
        Flag::No => STAYED_COLOR,
    }
}

/// Accent colours for the four metric cards.
pub const METRIC_ACCENTS: [Color32; 4] = [
    Color32::from_rgb(0x63, 0x6E, 0xFA),
    Color32::from_rgb(0xEF, 0x55, 0x3B),
    Color32::from_rgb(0x00, 0xCC, 0x96),
    Color32::from_rgb(0xAB, 0x63, 0xFA),
];

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Info => Color32::from_rgb(0x61, 0xDA, 0xFB),
        Tone::Warning => Color32::from_rgb(0xFF, 0xA1, 0x5A),
        Tone::Success => STAYED_COLOR,
        Tone::Error => LEFT_COLOR,
    }
}

// ---------------------------------------------------------------------------
// Conditional formatting of risk levels
// ---------------------------------------------------------------------------

/// Style tag of a "Risk Level" cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskStyle {
    Critical,
    Elevated,
    Moderate,
}

/// `"Critical"` is critical, anything mentioning `"High"` is elevated,
/// everything else moderate.
pub fn risk_style(level: &str) -> RiskStyle {
    if level == "Critical" {
        RiskStyle::Critical
    } else if level.contains("High") {
        RiskStyle::Elevated
    } else {
        RiskStyle::Moderate
    }
}

impl RiskStyle {
    pub fn color(self) -> Color32 {
        match self {
            RiskStyle::Critical => LEFT_COLOR,
            RiskStyle::Elevated => Color32::from_rgb(0xFF, 0xA1, 0x5A),
            RiskStyle::Moderate => STAYED_COLOR,
        }
    }
}
