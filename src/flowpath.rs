//! Animated connection paths between workflow nodes.
//!
//! A path reveals itself with a stroke-dash ramp, then runs a particle along
//! the curve forever while the scene is visible.

use kurbo::{ParamCurve, Point, QuadBez};

use crate::interp::interpolate;

/// Frames the dash reveal takes after the path's delay.
pub const REVEAL_FRAMES: u64 = 20;
/// Particle loop period in frames.
pub const CYCLE_FRAMES: u64 = 40;

const CONTROL_LIFT: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlowPath {
    pub from: Point,
    pub to: Point,
    /// Scene-local frame at which the reveal starts.
    pub delay: u64,
}

/// Per-frame state of a flow path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FlowPathState {
    /// 0..1 dash reveal progress.
    pub draw_progress: f64,
    /// Total dash length (the path length metric).
    pub dash_length: f64,
    /// `dash_length * (1 - draw_progress)`.
    pub dash_offset: f64,
    /// Present once the path is fully drawn; loops along the curve.
    pub particle: Option<Point>,
}

impl FlowPath {
    pub fn control(self) -> Point {
        Point::new(
            (self.from.x + self.to.x) / 2.0,
            (self.from.y + self.to.y) / 2.0 - CONTROL_LIFT,
        )
    }

    pub fn quad(self) -> QuadBez {
        QuadBez::new(self.from, self.control(), self.to)
    }

    /// Dash metric: chord length scaled for the curve's bow. Only has to be
    /// consistent between `stroke-dasharray` and `stroke-dashoffset`, not
    /// exact arc length.
    pub fn dash_length(self) -> f64 {
        self.from.distance(self.to) * 1.2
    }

    pub fn to_svg_path(self) -> String {
        let c = self.control();
        format!(
            "M {} {} Q {} {} {} {}",
            self.from.x, self.from.y, c.x, c.y, self.to.x, self.to.y
        )
    }

    pub fn sample(self, local_frame: u64) -> FlowPathState {
        let f = local_frame as f64;
        let draw_progress = interpolate(
            f,
            [self.delay as f64, (self.delay + REVEAL_FRAMES) as f64],
            [0.0, 1.0],
        );
        let dash_length = self.dash_length();

        let particle = if local_frame > self.delay + REVEAL_FRAMES && draw_progress >= 1.0 {
            let since = local_frame - self.delay - REVEAL_FRAMES;
            let t = (since % CYCLE_FRAMES) as f64 / CYCLE_FRAMES as f64;
            Some(self.quad().eval(t))
        } else {
            None
        };

        FlowPathState {
            draw_progress,
            dash_length,
            dash_offset: dash_length * (1.0 - draw_progress),
            particle,
        }
    }
}
