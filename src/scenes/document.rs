//! Invoice/document extraction vignette.

use crate::{
    core::Vec2,
    entrance::{Oscillation, scale_from, slide},
    graph::{FontRole, GraphNode, NodeKind, NodeStyle},
    interp::{interpolate, interpolate_multi},
    scene::{ElementDecl, Scene, SceneCtx, badge_row, mockup_frame},
    spring::{SpringConfig, spring_progress},
    theme::AccentColor,
};

const BADGES: [&str; 3] = ["PDF \u{2192} Data", "Albanian Formats", "Auto-Export"];

struct JsonLine {
    key: &'static str,
    value: &'static str,
}

const JSON_LINES: [JsonLine; 4] = [
    JsonLine {
        key: "vendor",
        value: "\"Vodafone Albania\"",
    },
    JsonLine {
        key: "date",
        value: "\"2024-01-15\"",
    },
    JsonLine {
        key: "total",
        value: "\"\u{20AC}1,250.00\"",
    },
    JsonLine {
        key: "status",
        value: "\"verified\"",
    },
];

const DOC_COUNT: u64 = 3;
const JSON_DELAY: u64 = 55;

// Spinner visibility window: fade in over [20,30], hold, fade out over [70,80].
const SPINNER_OPACITY_FRAMES: [f64; 4] = [20.0, 30.0, 70.0, 80.0];
const SPINNER_OPACITY_STOPS: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

#[derive(Debug, Default)]
pub struct DocumentScene;

impl Scene for DocumentScene {
    fn id(&self) -> &'static str {
        "document"
    }

    fn accent(&self) -> AccentColor {
        AccentColor::Violet
    }

    fn elements(&self) -> Vec<ElementDecl> {
        let mut out = vec![
            ElementDecl {
                id: "doc-0",
                delay: 0,
            },
            ElementDecl {
                id: "doc-1",
                delay: 8,
            },
            ElementDecl {
                id: "doc-2",
                delay: 16,
            },
            ElementDecl {
                id: "spinner",
                delay: 20,
            },
            ElementDecl {
                id: "arrow",
                delay: 40,
            },
            ElementDecl {
                id: "json-card",
                delay: JSON_DELAY,
            },
        ];
        out.push(ElementDecl {
            id: "badges",
            delay: 90,
        });
        out
    }

    fn sample(&self, f: u64, ctx: &SceneCtx) -> Vec<GraphNode> {
        let violet = ctx.theme.accent.violet;
        let m = ctx.layout.mockup;
        let mut mockup = mockup_frame(ctx, "Document Processor", NodeStyle::default());
        let mid_y = m.height / 2.0;

        // Documents slide in one by one, fanned by offset and rotation.
        for i in 0..DOC_COUNT {
            let delay = i * 8;
            let p = spring_progress(f as i64 - delay as i64, ctx.fps, SpringConfig::CARD);
            mockup = mockup.child(GraphNode::new(
                format!("doc-{i}"),
                NodeKind::Rect {
                    width: 120.0,
                    height: 160.0,
                    corner_radius: 8.0,
                },
                NodeStyle::at(80.0, mid_y - 80.0)
                    .translate(Vec2::new(i as f64 * 8.0, i as f64 * 8.0))
                    .rotation_deg(i as f64 * 2.0)
                    .scale(scale_from(p, 0.8))
                    .opacity(p)
                    .fill(ctx.theme.background.light),
            ));
        }

        // Spinning processing ring between stack and output.
        let spinner_opacity =
            interpolate_multi(f as f64, &SPINNER_OPACITY_FRAMES, &SPINNER_OPACITY_STOPS)
                .expect("spinner opacity stops are static and non-decreasing");
        mockup = mockup.child(GraphNode::new(
            "spinner",
            NodeKind::Circle { radius: 25.0 },
            NodeStyle::at(m.width / 2.0 - 80.0, mid_y)
                .rotation_deg(Oscillation::SpinnerRotation.value(f, ctx.fps))
                .opacity(spinner_opacity)
                .stroke(violet),
        ));

        // Arrow scales in as processing ramps up.
        let arrow_progress = interpolate(f as f64, [40.0, 60.0], [0.0, 1.0]);
        mockup = mockup.child(GraphNode::new(
            "arrow",
            NodeKind::Path {
                d: "M 10 20 L 60 20 M 50 10 L 65 20 L 50 30".to_string(),
                stroke_width: 3.0,
                dash_array: None,
                dash_offset: None,
            },
            NodeStyle::at(m.width / 2.0 - 20.0, mid_y - 20.0)
                .scale(arrow_progress)
                .opacity(arrow_progress)
                .stroke(violet),
        ));

        // Extracted JSON card springs in from the right.
        let card_p = spring_progress(f as i64 - JSON_DELAY as i64, ctx.fps, SpringConfig::BUBBLE);
        let mut card = GraphNode::new(
            "json-card",
            NodeKind::Rect {
                width: 320.0,
                height: 180.0,
                corner_radius: 12.0,
            },
            NodeStyle::at(m.width - 380.0, mid_y - 90.0)
                .translate(Vec2::new(slide(card_p, 30.0), 0.0))
                .opacity(card_p)
                .fill(ctx.theme.background.primary)
                .stroke(violet.with_alpha(0x40)),
        );
        for (i, line) in JSON_LINES.iter().enumerate() {
            let line_delay = (JSON_DELAY + 10 + i as u64 * 8) as f64;
            let line_p = interpolate(f as f64, [line_delay, line_delay + 10.0], [0.0, 1.0]);
            card = card.child(GraphNode::new(
                format!("json-line-{i}"),
                NodeKind::Text {
                    text: format!("\"{}\": {}", line.key, line.value),
                    font: FontRole::Mono,
                    size: 15.0,
                },
                NodeStyle::at(24.0, 36.0 + i as f64 * 30.0)
                    .translate(Vec2::new(slide(line_p, 10.0), 0.0))
                    .opacity(line_p)
                    .fill(ctx.theme.text.secondary),
            ));
        }
        mockup = mockup.child(card);

        let badge_opacity = interpolate(f as f64, [90.0, 105.0], [0.0, 1.0]);
        let mut nodes = vec![mockup];
        nodes.extend(badge_row(ctx, &BADGES, self.accent(), badge_opacity));
        nodes
    }
}
