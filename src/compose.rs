//! Composition assembly and the per-frame evaluation entry point.

use crate::{
    core::FrameIndex,
    error::{ShowreelError, ShowreelResult},
    graph::{FrameGraph, SceneLayer},
    layout::Mode,
    scene::{Scene, SceneCtx},
    scenes::hero_demo_scenes,
    sequencer::{LoopStyle, Sequencer},
    theme::Theme,
    timeline::Timeline,
};

pub struct Composition {
    sequencer: Sequencer,
    mode: Mode,
    theme: Theme,
    scenes: Vec<Box<dyn Scene>>,
}

impl std::fmt::Debug for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composition")
            .field("mode", &self.mode)
            .field("scene_count", &self.scenes.len())
            .finish_non_exhaustive()
    }
}

impl Composition {
    /// The promo loop: chat, document extraction, workflow automation.
    pub fn hero_demo(mode: Mode, loop_style: LoopStyle) -> ShowreelResult<Self> {
        Self::new(Timeline::default(), mode, loop_style, hero_demo_scenes())
    }

    pub fn new(
        timeline: Timeline,
        mode: Mode,
        loop_style: LoopStyle,
        scenes: Vec<Box<dyn Scene>>,
    ) -> ShowreelResult<Self> {
        let sequencer = Sequencer::new(timeline, loop_style)?;

        if scenes.len() != timeline.scene_count as usize {
            return Err(ShowreelError::validation(format!(
                "timeline expects {} scenes, got {}",
                timeline.scene_count,
                scenes.len()
            )));
        }

        let mut scene_ids = std::collections::BTreeSet::new();
        for scene in &scenes {
            if !scene_ids.insert(scene.id()) {
                return Err(ShowreelError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id()
                )));
            }

            let mut element_ids = std::collections::BTreeSet::new();
            for decl in scene.elements() {
                if !element_ids.insert(decl.id) {
                    return Err(ShowreelError::validation(format!(
                        "scene '{}' declares duplicate element id '{}'",
                        scene.id(),
                        decl.id
                    )));
                }
                if decl.delay >= timeline.scene_frames {
                    return Err(ShowreelError::validation(format!(
                        "scene '{}' element '{}' delay {} exceeds scene length {}",
                        scene.id(),
                        decl.id,
                        decl.delay,
                        timeline.scene_frames
                    )));
                }
            }
        }

        Ok(Self {
            sequencer,
            mode,
            theme: Theme::DEFAULT,
            scenes,
        })
    }

    pub fn timeline(&self) -> Timeline {
        self.sequencer.timeline()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Derive the full styled node tree for one global frame.
    ///
    /// Pure with respect to `frame`; callers may evaluate frames out of order
    /// or in parallel.
    #[tracing::instrument(skip(self), fields(frame = frame.0))]
    pub fn eval_frame(&self, frame: FrameIndex) -> ShowreelResult<FrameGraph> {
        let timeline = self.timeline();
        let ctx = SceneCtx {
            fps: timeline.fps,
            theme: self.theme,
            layout: self.mode.layout(),
            mode: self.mode,
        };

        let mut layers = Vec::new();
        for sample in self.sequencer.sample(frame)? {
            let scene = &self.scenes[sample.index as usize];
            layers.push(SceneLayer {
                scene_id: scene.id().to_string(),
                accent: scene.accent(),
                opacity: sample.opacity.clamp(0.0, 1.0),
                nodes: scene.sample(sample.local_frame.0, &ctx),
            });
        }

        Ok(FrameGraph {
            frame,
            canvas: ctx.layout.canvas,
            background: self.theme.background.primary,
            scenes: layers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::GraphNode,
        scene::ElementDecl,
        theme::AccentColor,
    };

    struct FakeScene {
        id: &'static str,
        decls: Vec<ElementDecl>,
    }

    impl Scene for FakeScene {
        fn id(&self) -> &'static str {
            self.id
        }
        fn accent(&self) -> AccentColor {
            AccentColor::Cyan
        }
        fn elements(&self) -> Vec<ElementDecl> {
            self.decls.clone()
        }
        fn sample(&self, _f: u64, _ctx: &SceneCtx) -> Vec<GraphNode> {
            Vec::new()
        }
    }

    fn fake(id: &'static str, decls: Vec<ElementDecl>) -> Box<dyn Scene> {
        Box::new(FakeScene { id, decls })
    }

    #[test]
    fn hero_demo_builds_and_evaluates() {
        let comp = Composition::hero_demo(Mode::Desktop, LoopStyle::Hold).unwrap();
        let g = comp.eval_frame(FrameIndex(0)).unwrap();
        assert_eq!(g.scenes.len(), 1);
        assert_eq!(g.scenes[0].scene_id, "chat");
        assert_eq!(g.scenes[0].opacity, 1.0);

        let g = comp.eval_frame(FrameIndex(180)).unwrap();
        assert_eq!(g.scenes[0].scene_id, "document");

        let g = comp.eval_frame(FrameIndex(300)).unwrap();
        assert_eq!(g.scenes[0].scene_id, "automation");
    }

    #[test]
    fn scene_count_mismatch_is_rejected() {
        let err = Composition::new(
            Timeline::default(),
            Mode::Desktop,
            LoopStyle::Hold,
            vec![fake("only", vec![])],
        );
        assert!(err.is_err());
    }

    #[test]
    fn duplicate_element_ids_are_rejected() {
        let scenes = vec![
            fake(
                "a",
                vec![
                    ElementDecl { id: "x", delay: 0 },
                    ElementDecl { id: "x", delay: 5 },
                ],
            ),
            fake("b", vec![]),
            fake("c", vec![]),
        ];
        let err = Composition::new(Timeline::default(), Mode::Desktop, LoopStyle::Hold, scenes)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate element id"));
    }

    #[test]
    fn out_of_range_delay_is_rejected() {
        let scenes = vec![
            fake("a", vec![ElementDecl { id: "x", delay: 500 }]),
            fake("b", vec![]),
            fake("c", vec![]),
        ];
        assert!(
            Composition::new(Timeline::default(), Mode::Desktop, LoopStyle::Hold, scenes).is_err()
        );
    }

    #[test]
    fn eval_rejects_out_of_bounds_frame() {
        let comp = Composition::hero_demo(Mode::Mobile, LoopStyle::Hold).unwrap();
        assert!(comp.eval_frame(FrameIndex(360)).is_err());
        assert!(comp.eval_frame(FrameIndex(359)).is_ok());
    }

    #[test]
    fn frame_graph_serializes() {
        let comp = Composition::hero_demo(Mode::Desktop, LoopStyle::Hold).unwrap();
        let g = comp.eval_frame(FrameIndex(42)).unwrap();
        let v = serde_json::to_value(&g).unwrap();
        assert_eq!(v["frame"], 42);
        assert_eq!(v["canvas"]["width"], 1920);
    }
}
