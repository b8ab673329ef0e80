//! Desktop / mobile layout presets.
//!
//! Plain keyed records selected by mode; no runtime reflection.

use crate::core::Canvas;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Desktop,
    Mobile,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    pub canvas: Canvas,
    pub mockup: MockupRect,
    pub title: TitleLayout,
    pub badges: BadgeLayout,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MockupRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TitleLayout {
    pub font_size: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BadgeLayout {
    pub font_size: f64,
    pub y: f64,
    pub gap: f64,
}

const DESKTOP: Layout = Layout {
    canvas: Canvas {
        width: 1920,
        height: 1080,
    },
    mockup: MockupRect {
        x: 360.0,
        y: 190.0,
        width: 1200.0,
        height: 700.0,
    },
    title: TitleLayout {
        font_size: 32.0,
        y: 80.0,
    },
    badges: BadgeLayout {
        font_size: 14.0,
        y: 950.0,
        gap: 16.0,
    },
};

const MOBILE: Layout = Layout {
    canvas: Canvas {
        width: 1080,
        height: 1920,
    },
    mockup: MockupRect {
        x: 80.0,
        y: 410.0,
        width: 920.0,
        height: 1100.0,
    },
    title: TitleLayout {
        font_size: 28.0,
        y: 180.0,
    },
    badges: BadgeLayout {
        font_size: 12.0,
        y: 1750.0,
        gap: 12.0,
    },
};

impl Mode {
    pub fn layout(self) -> Layout {
        match self {
            Self::Desktop => DESKTOP,
            Self::Mobile => MOBILE,
        }
    }
}
