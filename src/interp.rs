//! Frame-to-progress interpolation.
//!
//! Every opacity, translation, scale and rotation in the engine is produced by
//! mapping the current frame through one of these functions. All variants
//! clamp on both sides of the input range; nothing extrapolates.

use crate::{
    ease::Ease,
    error::{ShowreelError, ShowreelResult},
};

/// Linear interpolation of `f` from `[f0, f1]` onto `[v0, v1]`, clamped.
///
/// The degenerate range `f0 == f1` yields `v1` for `f >= f0` and `v0` below.
pub fn interpolate(f: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    interpolate_eased(f, input, output, Ease::Linear)
}

/// [`interpolate`] with an easing curve applied to the normalized progress.
pub fn interpolate_eased(f: f64, input: [f64; 2], output: [f64; 2], ease: Ease) -> f64 {
    let [f0, f1] = input;
    let [v0, v1] = output;
    if f < f0 {
        return v0;
    }
    if f >= f1 {
        return v1;
    }
    let t = (f - f0) / (f1 - f0);
    v0 + (v1 - v0) * ease.apply(t)
}

/// Multi-stop variant: `input` must be non-decreasing and the same length as
/// `output` (at least two stops). Piecewise linear between adjacent stops,
/// clamped to the outer values.
pub fn interpolate_multi(f: f64, input: &[f64], output: &[f64]) -> ShowreelResult<f64> {
    if input.len() < 2 || input.len() != output.len() {
        return Err(ShowreelError::animation(
            "interpolate_multi needs matching input/output stops (>= 2)",
        ));
    }
    if !input.windows(2).all(|w| w[0] <= w[1]) {
        return Err(ShowreelError::animation(
            "interpolate_multi input stops must be non-decreasing",
        ));
    }

    let last = input.len() - 1;
    if f < input[0] {
        return Ok(output[0]);
    }
    if f >= input[last] {
        return Ok(output[last]);
    }

    let seg = input.partition_point(|&x| x <= f).saturating_sub(1);
    Ok(interpolate(
        f,
        [input[seg], input[seg + 1]],
        [output[seg], output[seg + 1]],
    ))
}
