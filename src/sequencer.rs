//! Scene sequencing and cross-fade orchestration.
//!
//! Every scene's opacity is computed independently against its own fade
//! windows rather than from `floor(frame / scene_frames)`, so adjacent scenes
//! ramp through the boundary instead of popping.

use crate::{
    core::FrameIndex,
    error::{ShowreelError, ShowreelResult},
    interp::interpolate,
    timeline::Timeline,
};

/// What happens at the loop point (frame `total` wrapping to 0).
///
/// The source material held the last scene at full opacity and hard-cut back
/// to the first scene, leaving a visible seam. `CrossFade` ramps the last
/// scene out and the first scene in, symmetric with the interior boundaries.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
pub enum LoopStyle {
    #[default]
    Hold,
    CrossFade,
}

#[derive(Clone, Copy, Debug)]
pub struct Sequencer {
    timeline: Timeline,
    loop_style: LoopStyle,
}

/// One scene's contribution to a frame, in ascending index (z) order.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct SceneSample {
    pub index: u32,
    pub opacity: f64,
    /// Frame relative to the scene's own start.
    pub local_frame: FrameIndex,
}

impl Sequencer {
    pub fn new(timeline: Timeline, loop_style: LoopStyle) -> ShowreelResult<Self> {
        timeline.validate()?;
        Ok(Self {
            timeline,
            loop_style,
        })
    }

    pub fn timeline(&self) -> Timeline {
        self.timeline
    }

    /// Opacity of one scene at a global frame, before any element animation.
    ///
    /// First scenes have no fade-in and last scenes no fade-out unless the
    /// loop style says otherwise; middle scenes ramp 0→1→1→0 across their
    /// boundaries.
    pub fn scene_opacity(&self, index: u32, frame: FrameIndex) -> ShowreelResult<f64> {
        let b = self.timeline.boundaries(index)?;
        let f = frame.0 as f64;

        let fades_in = index > 0 || self.loop_style == LoopStyle::CrossFade;
        let fades_out =
            index + 1 < self.timeline.scene_count || self.loop_style == LoopStyle::CrossFade;

        let fade_in = if fades_in {
            interpolate(
                f,
                [b.fade_in.start.0 as f64, b.fade_in.end.0 as f64],
                [0.0, 1.0],
            )
        } else {
            1.0
        };
        let fade_out = if fades_out {
            interpolate(
                f,
                [b.fade_out.start.0 as f64, b.fade_out.end.0 as f64],
                [1.0, 0.0],
            )
        } else {
            1.0
        };

        // Fade windows are disjoint (enforced by Timeline::validate), so the
        // smaller ramp is the active one.
        Ok(fade_in.min(fade_out))
    }

    /// Scenes to render at a global frame, ascending index order. Scenes at
    /// zero opacity contribute nothing and are not emitted.
    #[tracing::instrument(skip(self))]
    pub fn sample(&self, frame: FrameIndex) -> ShowreelResult<Vec<SceneSample>> {
        if frame.0 >= self.timeline.total_frames() {
            return Err(ShowreelError::evaluation(format!(
                "frame {} out of bounds (total {})",
                frame.0,
                self.timeline.total_frames()
            )));
        }

        let mut out = Vec::new();
        for index in 0..self.timeline.scene_count {
            let range = self.timeline.scene_range(index)?;
            if !range.contains(frame) {
                continue;
            }
            let opacity = self.scene_opacity(index, frame)?;
            if opacity <= 0.0 {
                continue;
            }
            out.push(SceneSample {
                index,
                opacity,
                local_frame: FrameIndex(frame.0 - range.start.0),
            });
        }
        Ok(out)
    }
}
