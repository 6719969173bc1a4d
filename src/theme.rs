//! Shared colour palette for the whole dashboard
//!
//! Every page reads from here; nothing else defines colours.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

// Brand colours
pub const PRIMARY: Color = Color::Rgb(0x2D, 0x5A, 0x47);
pub const SECONDARY: Color = Color::Rgb(0x1E, 0x7B, 0x8C);
pub const ACCENT: Color = Color::Rgb(0xE8, 0x72, 0x4A);

// Navigation
pub const NAV_BACKGROUND: Color = Color::Rgb(0xF1, 0x82, 0x3D);
pub const NAV_TEXT: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const NAV_HIGHLIGHT: Color = Color::Rgb(0x5C, 0x5C, 0x5C);

// Text
pub const TEXT: Color = Color::Rgb(0xE2, 0xE8, 0xF0);
pub const TEXT_MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);

pub const TERTIARY: Color = Color::Rgb(0x6B, 0x9E, 0x8C);
pub const QUINARY: Color = Color::Rgb(0xB3, 0xD9, 0xC9);

/// Series colours, assigned by `index % CHART_COLORS.len()`
pub const CHART_COLORS: [Color; 10] = [
    Color::Rgb(0x2D, 0x5A, 0x47),
    Color::Rgb(0x4A, 0x7C, 0x6F),
    Color::Rgb(0x6B, 0x9E, 0x8C),
    Color::Rgb(0x8F, 0xBF, 0xAB),
    Color::Rgb(0xB3, 0xD9, 0xC9),
    Color::Rgb(0xE8, 0x72, 0x4A),
    Color::Rgb(0xF4, 0xA3, 0x82),
    Color::Rgb(0x64, 0x74, 0x8B),
    Color::Rgb(0x94, 0xA3, 0xB8),
    Color::Rgb(0xCB, 0xD5, 0xE1),
];

pub fn chart_color(index: usize) -> Color {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Stat card colour variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum StatVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
}

impl StatVariant {
    /// Unrecognised keys fall back to `Primary`
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "secondary" => StatVariant::Secondary,
            "accent" => StatVariant::Accent,
            _ => StatVariant::Primary,
        }
    }

    pub fn color(self) -> Color {
        match self {
            StatVariant::Primary => PRIMARY,
            StatVariant::Secondary => SECONDARY,
            StatVariant::Accent => ACCENT,
        }
    }
}

impl From<String> for StatVariant {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

/// Parse a `#RRGGBB` literal; anything else yields `fallback`
pub fn hex_color(hex: &str, fallback: Color) -> Color {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return fallback;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_color_cycles() {
        assert_eq!(chart_color(0), CHART_COLORS[0]);
        assert_eq!(chart_color(9), CHART_COLORS[9]);
        assert_eq!(chart_color(10), CHART_COLORS[0]);
        assert_eq!(chart_color(13), CHART_COLORS[3]);
    }

    #[test]
    fn test_variant_fallback() {
        assert_eq!(StatVariant::from_key("secondary"), StatVariant::Secondary);
        assert_eq!(StatVariant::from_key("ACCENT"), StatVariant::Accent);
        assert_eq!(StatVariant::from_key("tertiary"), StatVariant::Primary);
        assert_eq!(StatVariant::from_key(""), StatVariant::Primary);
        assert_eq!(StatVariant::from_key("bogus").color(), PRIMARY);
    }

    #[test]
    fn test_variant_deserializes_with_fallback() {
        let parse = |json: &str| serde_json::from_str::<StatVariant>(json).unwrap();
        assert_eq!(parse("\"accent\""), StatVariant::Accent);
        assert_eq!(parse("\"Secondary\""), StatVariant::Secondary);
        assert_eq!(parse("\"bogus\""), StatVariant::Primary);
        assert_eq!(
            serde_json::to_string(&StatVariant::Secondary).unwrap(),
            "\"secondary\""
        );
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#1E7B8C", PRIMARY), SECONDARY);
        assert_eq!(hex_color("8B5CF6", PRIMARY), Color::Rgb(0x8B, 0x5C, 0xF6));
        assert_eq!(hex_color("#12345", PRIMARY), PRIMARY);
        assert_eq!(hex_color("#GGGGGG", ACCENT), ACCENT);
    }
}
