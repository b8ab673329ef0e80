use crate::error::{ShowreelError, ShowreelResult};

pub use kurbo::{Point, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> ShowreelResult<Self> {
        if start.0 > end.0 {
            return Err(ShowreelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ShowreelResult<Self> {
        if den == 0 {
            return Err(ShowreelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ShowreelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Straight (non-premultiplied) RGBA8. The rendering host owns compositing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> ShowreelResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(ShowreelError::validation(format!("bad hex color '{s}'")));
        }
        let parse = |i: usize| -> ShowreelResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ShowreelError::validation(format!("bad hex color '{s}'")))
        };
        match hex.len() {
            6 => Ok(Self::rgb(parse(0)?, parse(2)?, parse(4)?)),
            8 => Ok(Self::rgb(parse(0)?, parse(2)?, parse(4)?).with_alpha(parse(6)?)),
            _ => Err(ShowreelError::validation(format!("bad hex color '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_range_contains_boundaries() {
        let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
        assert!(!r.contains(FrameIndex(1)));
        assert!(r.contains(FrameIndex(2)));
        assert!(r.contains(FrameIndex(4)));
        assert!(!r.contains(FrameIndex(5)));
    }

    #[test]
    fn fps_converts_frames_to_seconds() {
        let fps = Fps::new(30, 1).unwrap();
        assert_eq!(fps.frames_to_secs(360), 12.0);
        assert_eq!(fps.frame_duration_secs(), 1.0 / 30.0);
    }

    #[test]
    fn hex_color_parses_both_lengths() {
        assert_eq!(Rgba8::from_hex("#00f5d4").unwrap(), Rgba8::rgb(0, 245, 212));
        assert_eq!(
            Rgba8::from_hex("#00f5d440").unwrap(),
            Rgba8::rgb(0, 245, 212).with_alpha(0x40)
        );
        assert!(Rgba8::from_hex("#ff").is_err());
    }
}
