//! Multilingual AI-assistant chat vignette.

use crate::{
    core::Vec2,
    entrance::{Oscillation, slide},
    graph::{FontRole, GraphNode, NodeKind, NodeStyle},
    interp::interpolate,
    scene::{ElementDecl, Scene, SceneCtx, badge_row, mockup_frame},
    spring::{SpringConfig, spring_progress},
    theme::AccentColor,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    User,
    Ai,
}

struct Message {
    role: Role,
    text: &'static str,
    delay: u64,
}

const MESSAGES: [Message; 3] = [
    Message {
        role: Role::User,
        text: "Do you have rooms available for this weekend?",
        delay: 15,
    },
    Message {
        role: Role::Ai,
        text: "Checking availability for Saturday-Sunday...",
        delay: 50,
    },
    Message {
        role: Role::Ai,
        text: "Yes! 2 standard rooms available. Would you like to book?",
        delay: 80,
    },
];

const FLAGS: [&str; 4] = ["\u{1F1E6}\u{1F1F1}", "\u{1F1EC}\u{1F1E7}", "\u{1F1EE}\u{1F1F9}", "\u{1F1E9}\u{1F1EA}"];
const BADGES: [&str; 3] = ["WhatsApp", "5 Languages", "24/7"];

/// Typing indicator visibility window (exclusive on both sides).
const TYPING_VISIBLE: (u64, u64) = (35, 75);

#[derive(Debug, Default)]
pub struct ChatScene;

impl Scene for ChatScene {
    fn id(&self) -> &'static str {
        "chat"
    }

    fn accent(&self) -> AccentColor {
        AccentColor::Cyan
    }

    fn elements(&self) -> Vec<ElementDecl> {
        let mut out = vec![ElementDecl {
            id: "flags",
            delay: 5,
        }];
        for (i, msg) in MESSAGES.iter().enumerate() {
            out.push(ElementDecl {
                id: match i {
                    0 => "bubble-0",
                    1 => "bubble-1",
                    _ => "bubble-2",
                },
                delay: msg.delay,
            });
        }
        out.push(ElementDecl {
            id: "typing",
            delay: TYPING_VISIBLE.0,
        });
        out.push(ElementDecl {
            id: "badges",
            delay: 90,
        });
        out
    }

    fn sample(&self, f: u64, ctx: &SceneCtx) -> Vec<GraphNode> {
        let cyan = ctx.theme.accent.cyan;
        let inner_width = ctx.layout.mockup.width - 48.0;
        let mut mockup = mockup_frame(ctx, "AI Assistant", NodeStyle::default());

        // Language flag row; English highlighted.
        let flags_opacity = interpolate(f as f64, [5.0, 15.0], [0.0, 1.0]);
        let flag_nodes = FLAGS
            .iter()
            .enumerate()
            .map(|(i, flag)| {
                GraphNode::new(
                    format!("flag-{i}"),
                    NodeKind::Text {
                        text: (*flag).to_string(),
                        font: FontRole::Body,
                        size: 24.0,
                    },
                    NodeStyle::at(i as f64 * 40.0, 0.0).opacity(if i == 1 { 1.0 } else { 0.4 }),
                )
            })
            .collect();
        mockup = mockup.child(GraphNode::group(
            "flags",
            NodeStyle::at(24.0, 70.0).opacity(flags_opacity),
            flag_nodes,
        ));

        // Chat bubbles spring in with a small upward slide.
        for (i, msg) in MESSAGES.iter().enumerate() {
            let p = spring_progress(f as i64 - msg.delay as i64, ctx.fps, SpringConfig::BUBBLE);
            let width = (msg.text.len() as f64 * 9.5).min(inner_width * 0.75);
            let x = match msg.role {
                Role::User => inner_width - width,
                Role::Ai => 0.0,
            };

            let bubble = GraphNode::new(
                format!("bubble-{i}"),
                NodeKind::Rect {
                    width,
                    height: 52.0,
                    corner_radius: 16.0,
                },
                NodeStyle::at(24.0 + x, 130.0 + i as f64 * 100.0)
                    .opacity(p)
                    .translate(Vec2::new(0.0, slide(p, 20.0)))
                    .fill(match msg.role {
                        Role::User => ctx.theme.background.light,
                        Role::Ai => cyan.with_alpha(0x25),
                    }),
            )
            .child(GraphNode::new(
                format!("bubble-{i}-text"),
                NodeKind::Text {
                    text: msg.text.to_string(),
                    font: FontRole::Body,
                    size: 18.0,
                },
                NodeStyle::at(20.0, 14.0).fill(match msg.role {
                    Role::User => ctx.theme.text.primary,
                    Role::Ai => cyan,
                }),
            ));
            mockup = mockup.child(bubble);
        }

        // Typing indicator between the first reply and the second.
        if f > TYPING_VISIBLE.0 && f < TYPING_VISIBLE.1 {
            let dots = (0..3u32)
                .map(|i| {
                    let bounce = Oscillation::DotBounce { index: i }.value(f, ctx.fps);
                    GraphNode::new(
                        format!("typing-dot-{i}"),
                        NodeKind::Circle { radius: 5.0 },
                        NodeStyle::at(f64::from(i) * 16.0, 0.0)
                            .translate(Vec2::new(0.0, bounce))
                            .opacity(0.8)
                            .fill(cyan),
                    )
                })
                .collect();
            mockup = mockup.child(GraphNode::group(
                "typing",
                NodeStyle::at(24.0, 250.0),
                dots,
            ));
        }

        let badge_opacity = interpolate(f as f64, [90.0, 105.0], [0.0, 1.0]);
        let mut nodes = vec![mockup];
        nodes.extend(badge_row(ctx, &BADGES, self.accent(), badge_opacity));
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::Fps, layout::Mode, theme::Theme};

    fn ctx() -> SceneCtx {
        SceneCtx {
            fps: Fps { num: 30, den: 1 },
            theme: Theme::DEFAULT,
            layout: Mode::Desktop.layout(),
            mode: Mode::Desktop,
        }
    }

    fn find<'a>(nodes: &'a [GraphNode], id: &str) -> Option<&'a GraphNode> {
        for n in nodes {
            if n.id == id {
                return Some(n);
            }
            if let Some(hit) = find(&n.children, id) {
                return Some(hit);
            }
        }
        None
    }

    #[test]
    fn bubbles_enter_in_declared_order() {
        let scene = ChatScene;
        let nodes = scene.sample(30, &ctx());
        let b0 = find(&nodes, "bubble-0").unwrap();
        let b1 = find(&nodes, "bubble-1").unwrap();
        assert!(b0.style.opacity > 0.5);
        assert_eq!(b1.style.opacity, 0.0);
    }

    #[test]
    fn typing_indicator_only_inside_its_window() {
        let scene = ChatScene;
        assert!(find(&scene.sample(35, &ctx()), "typing").is_none());
        assert!(find(&scene.sample(50, &ctx()), "typing").is_some());
        assert!(find(&scene.sample(75, &ctx()), "typing").is_none());
    }

    #[test]
    fn badges_fade_in_late() {
        let scene = ChatScene;
        let early = scene.sample(80, &ctx());
        assert_eq!(find(&early, "badge-0").unwrap().style.opacity, 0.0);
        let late = scene.sample(110, &ctx());
        assert!(find(&late, "badge-0").unwrap().style.opacity > 0.9);
    }

    #[test]
    fn user_bubble_is_right_aligned() {
        let scene = ChatScene;
        let nodes = scene.sample(119, &ctx());
        let user = find(&nodes, "bubble-0").unwrap();
        let ai = find(&nodes, "bubble-1").unwrap();
        assert!(user.style.position.x > ai.style.position.x);
    }

    #[test]
    fn declared_elements_cover_all_delays() {
        let decls = ChatScene.elements();
        assert_eq!(decls.len(), 6);
        assert!(decls.iter().any(|d| d.id == "bubble-2" && d.delay == 80));
    }
}
