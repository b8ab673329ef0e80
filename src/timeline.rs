use crate::{
    core::{Fps, FrameIndex, FrameRange},
    error::{ShowreelError, ShowreelResult},
};

/// Immutable timing configuration for the looping composition.
///
/// Total duration is implied: `scene_count * scene_frames`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub fps: Fps,
    pub scene_count: u32,
    pub scene_frames: u64,
    pub cross_fade_frames: u64,
}

impl Default for Timeline {
    fn default() -> Self {
        // 3 scenes x 4s at 30 fps, 0.5s cross-fades: a 12s loop.
        Self {
            fps: Fps { num: 30, den: 1 },
            scene_count: 3,
            scene_frames: 120,
            cross_fade_frames: 15,
        }
    }
}

impl Timeline {
    pub fn total_frames(self) -> u64 {
        u64::from(self.scene_count) * self.scene_frames
    }

    pub fn validate(self) -> ShowreelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.scene_count == 0 {
            return Err(ShowreelError::validation("scene_count must be > 0"));
        }
        if self.scene_frames == 0 {
            return Err(ShowreelError::validation("scene_frames must be > 0"));
        }
        // Adjacent fades may not meet in the middle of a scene.
        if self.cross_fade_frames * 2 > self.scene_frames {
            return Err(ShowreelError::validation(
                "cross_fade_frames must be <= scene_frames / 2",
            ));
        }
        Ok(())
    }

    pub fn scene_range(self, index: u32) -> ShowreelResult<FrameRange> {
        if index >= self.scene_count {
            return Err(ShowreelError::validation(format!(
                "scene index {index} out of range (count {})",
                self.scene_count
            )));
        }
        let start = u64::from(index) * self.scene_frames;
        FrameRange::new(FrameIndex(start), FrameIndex(start + self.scene_frames))
    }

    pub fn boundaries(self, index: u32) -> ShowreelResult<SceneBoundaries> {
        let range = self.scene_range(index)?;
        let cf = self.cross_fade_frames;
        Ok(SceneBoundaries {
            index,
            range,
            fade_in: FrameRange::new(range.start, FrameIndex(range.start.0 + cf))?,
            fade_out: FrameRange::new(FrameIndex(range.end.0 - cf), range.end)?,
        })
    }
}

/// Per-scene frame windows: placement plus the two cross-fade ramps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneBoundaries {
    pub index: u32,
    pub range: FrameRange,
    pub fade_in: FrameRange,
    pub fade_out: FrameRange,
}
