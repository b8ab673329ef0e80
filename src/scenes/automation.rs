//! Workflow automation vignette: node diagram with flowing connections.

use kurbo::Point;

use crate::{
    entrance::{Oscillation, scale_from},
    flowpath::FlowPath,
    graph::{FontRole, GraphNode, NodeKind, NodeStyle},
    icon::IconKind,
    interp::interpolate,
    scene::{ElementDecl, Scene, SceneCtx, mockup_frame},
    spring::{SpringConfig, spring_progress},
    theme::AccentColor,
};

struct WorkflowNode {
    id: &'static str,
    label: &'static str,
    icon: IconKind,
    x: f64,
    y: f64,
}

const NODES: [WorkflowNode; 5] = [
    WorkflowNode {
        id: "trigger",
        label: "Trigger",
        icon: IconKind::Zap,
        x: 160.0,
        y: 240.0,
    },
    WorkflowNode {
        id: "process",
        label: "Process",
        icon: IconKind::Cpu,
        x: 560.0,
        y: 160.0,
    },
    WorkflowNode {
        id: "decision",
        label: "Decision",
        icon: IconKind::GitBranch,
        x: 560.0,
        y: 360.0,
    },
    WorkflowNode {
        id: "action-email",
        label: "Email",
        icon: IconKind::Mail,
        x: 960.0,
        y: 120.0,
    },
    WorkflowNode {
        id: "action-database",
        label: "Database",
        icon: IconKind::Database,
        x: 960.0,
        y: 360.0,
    },
];

const CONNECTIONS: [(f64, f64, f64, f64); 4] = [
    (300.0, 280.0, 420.0, 200.0),
    (300.0, 280.0, 420.0, 400.0),
    (700.0, 200.0, 820.0, 160.0),
    (700.0, 400.0, 820.0, 400.0),
];

struct Metric {
    label: &'static str,
    value: &'static str,
}

const METRICS: [Metric; 3] = [
    Metric {
        label: "Tasks",
        value: "1,247",
    },
    Metric {
        label: "Success",
        value: "99.8%",
    },
    Metric {
        label: "Avg Time",
        value: "1.2s",
    },
];

#[derive(Debug, Default)]
pub struct AutomationScene;

impl Scene for AutomationScene {
    fn id(&self) -> &'static str {
        "automation"
    }

    fn accent(&self) -> AccentColor {
        AccentColor::Magenta
    }

    fn elements(&self) -> Vec<ElementDecl> {
        let mut out = vec![
            ElementDecl {
                id: "title",
                delay: 0,
            },
            ElementDecl {
                id: "status",
                delay: 60,
            },
            ElementDecl {
                id: "metrics",
                delay: 80,
            },
        ];
        for (i, node) in NODES.iter().enumerate() {
            out.push(ElementDecl {
                id: node.id,
                delay: 5 + i as u64 * 10,
            });
        }
        for i in 0..CONNECTIONS.len() as u64 {
            out.push(ElementDecl {
                id: match i {
                    0 => "flow-0",
                    1 => "flow-1",
                    2 => "flow-2",
                    _ => "flow-3",
                },
                delay: 20 + i * 15,
            });
        }
        out
    }

    fn sample(&self, f: u64, ctx: &SceneCtx) -> Vec<GraphNode> {
        let magenta = ctx.theme.accent.magenta;
        let cyan = ctx.theme.accent.cyan;

        // The whole panel scales in on an over-damped spring.
        let panel_p = spring_progress(f as i64, ctx.fps, SpringConfig::PANEL);
        let mut mockup = mockup_frame(
            ctx,
            "workflow-engine",
            NodeStyle::default().scale(panel_p.clamp(0.0, 1.0)),
        );

        let title_opacity = interpolate(f as f64, [0.0, 15.0], [0.0, 1.0]);
        mockup = mockup.child(GraphNode::new(
            "title",
            NodeKind::Text {
                text: "AUTOMATION PIPELINE".to_string(),
                font: FontRole::Mono,
                size: 11.0,
            },
            NodeStyle::at(16.0, 52.0)
                .opacity(title_opacity)
                .fill(ctx.theme.text.secondary),
        ));

        // Status light breathes once per second after it fades in.
        let status_opacity = interpolate(f as f64, [60.0, 80.0], [0.0, 1.0]);
        let pulse = Oscillation::StatusPulse.value(f, ctx.fps);
        mockup = mockup.child(
            GraphNode::group(
                "status",
                NodeStyle::at(ctx.layout.mockup.width - 120.0, 52.0).opacity(status_opacity),
                vec![
                    GraphNode::new(
                        "status-dot",
                        NodeKind::Circle { radius: 4.0 },
                        NodeStyle::at(0.0, 0.0).opacity(pulse).fill(cyan),
                    ),
                    GraphNode::new(
                        "status-label",
                        NodeKind::Text {
                            text: "RUNNING".to_string(),
                            font: FontRole::Mono,
                            size: 10.0,
                        },
                        NodeStyle::at(14.0, -5.0).fill(cyan),
                    ),
                ],
            ),
        );

        // Connections draw before their particles start looping.
        for (i, &(x0, y0, x1, y1)) in CONNECTIONS.iter().enumerate() {
            let path = FlowPath {
                from: Point::new(x0, y0),
                to: Point::new(x1, y1),
                delay: 20 + i as u64 * 15,
            };
            let state = path.sample(f);
            let mut flow = GraphNode::new(
                format!("flow-{i}"),
                NodeKind::Path {
                    d: path.to_svg_path(),
                    stroke_width: 2.0,
                    dash_array: Some(state.dash_length),
                    dash_offset: Some(state.dash_offset),
                },
                NodeStyle::at(0.0, 45.0).opacity(0.5).stroke(magenta),
            );
            if let Some(pos) = state.particle {
                flow = flow.child(GraphNode::new(
                    format!("flow-{i}-particle"),
                    NodeKind::Circle { radius: 6.0 },
                    NodeStyle::at(pos.x, pos.y).fill(magenta),
                ));
            }
            mockup = mockup.child(flow);
        }

        // Workflow nodes spring in, then pulse once active.
        for (i, node) in NODES.iter().enumerate() {
            let delay = 5 + i as u64 * 10;
            let p = spring_progress(f as i64 - delay as i64, ctx.fps, SpringConfig::NODE);
            let is_active = f > 60 + i as u64 * 10;
            let pulse = if is_active {
                Oscillation::NodePulse.value(f, ctx.fps)
            } else {
                1.0
            };
            let ring_color = if is_active {
                magenta
            } else {
                ctx.theme.text.muted
            };

            let circle = GraphNode::new(
                format!("{}-ring", node.id),
                NodeKind::Circle { radius: 35.0 },
                NodeStyle::at(0.0, 0.0)
                    .scale(pulse)
                    .fill(ctx.theme.background.light.with_alpha(0x60))
                    .stroke(ring_color.with_alpha(0x50)),
            )
            .child(GraphNode::new(
                format!("{}-icon", node.id),
                NodeKind::Icon {
                    icon: node.icon,
                    size: 28.0,
                },
                NodeStyle::at(0.0, 0.0).fill(ring_color),
            ));

            mockup = mockup.child(
                GraphNode::group(
                    node.id,
                    NodeStyle::at(node.x, node.y + 45.0)
                        .opacity(p)
                        .scale(scale_from(p, 0.5)),
                    vec![
                        circle,
                        GraphNode::new(
                            format!("{}-label", node.id),
                            NodeKind::Text {
                                text: node.label.to_ascii_uppercase(),
                                font: FontRole::Mono,
                                size: 12.0,
                            },
                            NodeStyle::at(0.0, 52.0).fill(ring_color),
                        ),
                    ],
                ),
            );
        }

        // Metrics footer.
        let metrics_opacity = interpolate(f as f64, [80.0, 100.0], [0.0, 1.0]);
        let metric_nodes = METRICS
            .iter()
            .enumerate()
            .map(|(i, metric)| {
                GraphNode::new(
                    format!("metric-{i}"),
                    NodeKind::Text {
                        text: format!("{} {}", metric.value, metric.label.to_ascii_uppercase()),
                        font: FontRole::Mono,
                        size: 14.0,
                    },
                    NodeStyle::at(
                        ctx.layout.mockup.width * (0.2 + 0.3 * i as f64),
                        ctx.layout.mockup.height - 30.0,
                    )
                    .fill(ctx.theme.accent.violet),
                )
            })
            .collect();
        mockup = mockup.child(GraphNode::group(
            "metrics",
            NodeStyle::at(0.0, 0.0).opacity(metrics_opacity),
            metric_nodes,
        ));

        vec![mockup]
    }
}
