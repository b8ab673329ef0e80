//! Static palette and typography configuration shared by all scenes.

use crate::core::Rgba8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub background: Background,
    pub accent: Accents,
    pub text: TextColors,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Background {
    pub primary: Rgba8,
    pub secondary: Rgba8,
    pub surface: Rgba8,
    pub light: Rgba8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Accents {
    pub cyan: Rgba8,
    pub magenta: Rgba8,
    pub violet: Rgba8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextColors {
    pub primary: Rgba8,
    pub secondary: Rgba8,
    pub muted: Rgba8,
}

/// Scene accent selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Cyan,
    Magenta,
    Violet,
}

impl Theme {
    pub const DEFAULT: Self = Self {
        background: Background {
            primary: Rgba8::rgb(0x0a, 0x0a, 0x0f),
            secondary: Rgba8::rgb(0x12, 0x12, 0x1a),
            surface: Rgba8::rgb(0x1a, 0x1a, 0x24),
            light: Rgba8::rgb(0x52, 0x52, 0x68),
        },
        accent: Accents {
            cyan: Rgba8::rgb(0x00, 0xf5, 0xd4),
            magenta: Rgba8::rgb(0xf7, 0x25, 0x85),
            violet: Rgba8::rgb(0x7b, 0x2c, 0xbf),
        },
        text: TextColors {
            primary: Rgba8::rgb(0xf8, 0xf9, 0xfa),
            secondary: Rgba8::rgb(0xad, 0xb5, 0xbd),
            muted: Rgba8::rgb(0x6c, 0x75, 0x7d),
        },
    };

    pub fn accent(&self, color: AccentColor) -> Rgba8 {
        match color {
            AccentColor::Cyan => self.accent.cyan,
            AccentColor::Magenta => self.accent.magenta,
            AccentColor::Violet => self.accent.violet,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Font stacks the rendering host should resolve.
pub mod fonts {
    pub const DISPLAY: &str = "Syne, sans-serif";
    pub const BODY: &str = "DM Sans, sans-serif";
    pub const MONO: &str = "JetBrains Mono, monospace";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_hex_source() {
        let t = Theme::DEFAULT;
        assert_eq!(t.accent.cyan, Rgba8::from_hex("#00f5d4").unwrap());
        assert_eq!(t.accent.magenta, Rgba8::from_hex("#f72585").unwrap());
        assert_eq!(t.accent.violet, Rgba8::from_hex("#7b2cbf").unwrap());
        assert_eq!(t.background.primary, Rgba8::from_hex("#0a0a0f").unwrap());
    }

    #[test]
    fn accent_lookup_is_exhaustive() {
        let t = Theme::DEFAULT;
        assert_eq!(t.accent(AccentColor::Cyan), t.accent.cyan);
        assert_eq!(t.accent(AccentColor::Magenta), t.accent.magenta);
        assert_eq!(t.accent(AccentColor::Violet), t.accent.violet);
    }
}
