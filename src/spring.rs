//! Damped-spring entrance curves.
//!
//! Closed-form solution of a damped harmonic oscillator released from rest at
//! displacement 0 with target 1. Pure function of its inputs, which keeps
//! frame seeks and parallel frame evaluation trivially correct.

use crate::{
    core::Fps,
    error::{ShowreelError, ShowreelResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
        }
    }
}

impl SpringConfig {
    /// Chat bubbles and the JSON output card.
    pub const BUBBLE: Self = Self {
        mass: 1.0,
        stiffness: 100.0,
        damping: 15.0,
    };

    /// Document stack cards (critically damped, no overshoot).
    pub const CARD: Self = Self {
        mass: 1.0,
        stiffness: 100.0,
        damping: 20.0,
    };

    /// Workflow nodes (bouncier).
    pub const NODE: Self = Self {
        mass: 1.0,
        stiffness: 100.0,
        damping: 12.0,
    };

    /// Whole-panel scale-in for the automation scene.
    pub const PANEL: Self = Self {
        mass: 1.0,
        stiffness: 80.0,
        damping: 20.0,
    };

    pub fn validate(self) -> ShowreelResult<()> {
        if !(self.mass > 0.0) {
            return Err(ShowreelError::validation("spring mass must be > 0"));
        }
        if !(self.stiffness > 0.0) {
            return Err(ShowreelError::validation("spring stiffness must be > 0"));
        }
        if !(self.damping >= 0.0) {
            return Err(ShowreelError::validation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio; < 1 overshoots, >= 1 does not.
    pub fn damping_ratio(self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Spring progress for a trigger-relative frame count.
///
/// Returns exactly 0.0 while `frames_since_trigger < 0` (not yet triggered),
/// starts at 0 on the trigger frame and settles to 1.
pub fn spring_progress(frames_since_trigger: i64, fps: Fps, config: SpringConfig) -> f64 {
    if frames_since_trigger < 0 {
        return 0.0;
    }
    let t = fps.frames_to_secs(frames_since_trigger as u64);
    spring_at(t, config)
}

/// Spring progress at time `t` seconds after the trigger.
pub fn spring_at(t: f64, config: SpringConfig) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }

    let omega0 = (config.stiffness / config.mass).sqrt();
    let zeta = config.damping_ratio();

    // Displacement from the target, x(0) = 1, x'(0) = 0.
    let x = if zeta < 1.0 {
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        (-zeta * omega0 * t).exp()
            * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
    } else if zeta == 1.0 {
        (-omega0 * t).exp() * (1.0 + omega0 * t)
    } else {
        let omega_r = omega0 * (zeta * zeta - 1.0).sqrt();
        (-zeta * omega0 * t).exp()
            * ((omega_r * t).cosh() + (zeta * omega0 / omega_r) * (omega_r * t).sinh())
    };

    1.0 - x
}
