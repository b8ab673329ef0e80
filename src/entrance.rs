//! Element entrance animations and idle oscillations.
//!
//! Entrances are bounded ramps (an element arrives once); oscillations run
//! for the element's whole visible lifetime. Both are pure functions of the
//! scene-local frame.

use crate::{
    core::{Fps, Vec2},
    interp::interpolate,
    spring::{SpringConfig, spring_progress},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum EntranceKind {
    FadeIn,
    FadeSlideUp,
    FadeSlideDown,
    ScaleIn,
    /// Character reveal; pair with [`typewriter_prefix`].
    Typewriter,
    Spring(SpringConfig),
}

/// Derived per-frame style for one element. Never stored between frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementStyle {
    pub opacity: f64,
    pub translate: Vec2,
    pub scale: f64,
    pub rotation_deg: f64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

impl EntranceKind {
    /// Normalized progress for an element that starts `delay` frames into the
    /// scene. Ramp entrances take `duration` frames; springs ignore it.
    pub fn progress(self, local_frame: u64, delay: u64, duration: u64, fps: Fps) -> f64 {
        match self {
            Self::Spring(config) => {
                spring_progress(local_frame as i64 - delay as i64, fps, config)
            }
            _ => interpolate(
                local_frame as f64,
                [delay as f64, (delay + duration) as f64],
                [0.0, 1.0],
            ),
        }
    }

    pub fn style(self, local_frame: u64, delay: u64, duration: u64, fps: Fps) -> ElementStyle {
        let p = self.progress(local_frame, delay, duration, fps);
        match self {
            Self::FadeIn => ElementStyle {
                opacity: p,
                ..ElementStyle::default()
            },
            Self::FadeSlideUp => ElementStyle {
                opacity: p,
                translate: Vec2::new(0.0, slide(p, 20.0)),
                ..ElementStyle::default()
            },
            Self::FadeSlideDown => ElementStyle {
                opacity: p,
                translate: Vec2::new(0.0, slide(p, -20.0)),
                ..ElementStyle::default()
            },
            Self::ScaleIn => ElementStyle {
                opacity: p,
                scale: scale_from(p, 0.8),
                ..ElementStyle::default()
            },
            Self::Typewriter => ElementStyle::default(),
            Self::Spring(_) => ElementStyle {
                opacity: p,
                ..ElementStyle::default()
            },
        }
    }
}

/// Remaining slide offset for a given progress (`from_px` at 0, settled at 1).
pub fn slide(progress: f64, from_px: f64) -> f64 {
    interpolate(progress, [0.0, 1.0], [from_px, 0.0])
}

/// Scale ramp from `from` toward 1. Spring overshoot carries through, so a
/// bouncy entrance briefly scales past 1.
pub fn scale_from(progress: f64, from: f64) -> f64 {
    from + (1.0 - from) * progress
}

/// Character prefix revealed at `progress` (`floor(chars * progress)`).
pub fn typewriter_prefix(text: &str, progress: f64) -> &str {
    let chars = text.chars().count();
    let shown = ((chars as f64) * progress.clamp(0.0, 1.0)).floor() as usize;
    match text.char_indices().nth(shown) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Unbounded periodic animations for idle elements.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Oscillation {
    /// Typing-indicator dot, phase-offset by dot index; ±3 px vertical.
    DotBounce { index: u32 },
    /// Status light breathing between 0.5 and 1.0 once per second.
    StatusPulse,
    /// Active workflow node scale wobble around 0.8..1.0.
    NodePulse,
    /// Processing spinner, 6 degrees per frame.
    SpinnerRotation,
}

impl Oscillation {
    pub fn value(self, local_frame: u64, fps: Fps) -> f64 {
        let f = local_frame as f64;
        match self {
            Self::DotBounce { index } => {
                let bounce = (f * 0.3 + f64::from(index) * 1.5).sin();
                interpolate(bounce, [-1.0, 1.0], [3.0, -3.0])
            }
            Self::StatusPulse => {
                let wave = (f / fps.as_f64() * std::f64::consts::TAU).sin();
                interpolate(wave, [-1.0, 1.0], [0.5, 1.0])
            }
            Self::NodePulse => 0.8 + (f * 0.15).sin() * 0.2,
            Self::SpinnerRotation => f * 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps30() -> Fps {
        Fps { num: 30, den: 1 }
    }

    #[test]
    fn ramp_progress_clamps_around_window() {
        let k = EntranceKind::FadeIn;
        assert_eq!(k.progress(0, 10, 20, fps30()), 0.0);
        assert_eq!(k.progress(20, 10, 20, fps30()), 0.5);
        assert_eq!(k.progress(40, 10, 20, fps30()), 1.0);
    }

    #[test]
    fn fade_slide_up_starts_low_and_settles() {
        let start = EntranceKind::FadeSlideUp.style(10, 10, 10, fps30());
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.translate.y, 20.0);

        let done = EntranceKind::FadeSlideUp.style(30, 10, 10, fps30());
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.translate.y, 0.0);
    }

    #[test]
    fn spring_entrance_is_zero_before_delay() {
        let k = EntranceKind::Spring(SpringConfig::BUBBLE);
        assert_eq!(k.progress(10, 50, 0, fps30()), 0.0);
        assert!(k.progress(80, 50, 0, fps30()) > 0.9);
    }

    #[test]
    fn typewriter_reveals_floor_of_chars() {
        let text = "Processing 47 pages...";
        assert_eq!(text.chars().count(), 22);
        assert_eq!(typewriter_prefix(text, 0.0), "");
        assert_eq!(typewriter_prefix(text, 0.5).chars().count(), 11);
        assert_eq!(typewriter_prefix(text, 1.0), text);
    }

    #[test]
    fn typewriter_respects_char_boundaries() {
        let text = "héllo"; // multi-byte second char
        let p = typewriter_prefix(text, 0.4); // floor(5 * 0.4) = 2 chars
        assert_eq!(p, "hé");
    }

    #[test]
    fn dot_bounce_stays_within_three_px() {
        for f in 0..200 {
            for i in 0..3 {
                let v = Oscillation::DotBounce { index: i }.value(f, fps30());
                assert!((-3.0..=3.0).contains(&v));
            }
        }
    }

    #[test]
    fn status_pulse_period_is_one_second() {
        let fps = fps30();
        let a = Oscillation::StatusPulse.value(0, fps);
        let b = Oscillation::StatusPulse.value(30, fps);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn spinner_rotation_is_linear_in_frames() {
        assert_eq!(Oscillation::SpinnerRotation.value(0, fps30()), 0.0);
        assert_eq!(Oscillation::SpinnerRotation.value(15, fps30()), 90.0);
    }
}
