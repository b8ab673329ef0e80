//! The scene seam: a scene is a fixed element arrangement sampled per frame.

use crate::{
    core::Fps,
    graph::{FontRole, GraphNode, NodeKind, NodeStyle},
    layout::{Layout, Mode},
    theme::{AccentColor, Theme},
};

/// Static context threaded into every scene sample. Carries no per-frame
/// state; two frames can be sampled concurrently with the same context.
#[derive(Clone, Copy, Debug)]
pub struct SceneCtx {
    pub fps: Fps,
    pub theme: Theme,
    pub layout: Layout,
    pub mode: Mode,
}

/// Declared animated element, used for build-time validation only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementDecl {
    pub id: &'static str,
    /// Entrance delay in frames from scene start.
    pub delay: u64,
}

pub trait Scene: Send + Sync {
    fn id(&self) -> &'static str;
    fn accent(&self) -> AccentColor;
    /// Every animated element with its entrance delay.
    fn elements(&self) -> Vec<ElementDecl>;
    /// Derive the node tree for a scene-local frame.
    fn sample(&self, local_frame: u64, ctx: &SceneCtx) -> Vec<GraphNode>;
}

/// Device mockup chrome shared by all scenes: panel rect plus a title bar.
pub fn mockup_frame(ctx: &SceneCtx, title: &str, style: NodeStyle) -> GraphNode {
    let m = ctx.layout.mockup;
    GraphNode::new(
        "mockup",
        NodeKind::Rect {
            width: m.width,
            height: m.height,
            corner_radius: 16.0,
        },
        NodeStyle {
            position: crate::core::Vec2::new(m.x, m.y),
            fill: Some(ctx.theme.background.secondary),
            ..style
        },
    )
    .child(GraphNode::new(
        "mockup-title",
        NodeKind::Text {
            text: title.to_string(),
            font: FontRole::Mono,
            size: ctx.layout.title.font_size * 0.5,
        },
        NodeStyle::at(24.0, 28.0).fill(ctx.theme.text.secondary),
    ))
}

/// Capability badge row, centered under the mockup.
pub fn badge_row(
    ctx: &SceneCtx,
    labels: &[&str],
    accent: AccentColor,
    opacity: f64,
) -> Vec<GraphNode> {
    let color = ctx.theme.accent(accent);
    let center_x = f64::from(ctx.layout.canvas.width) / 2.0;
    let gap = ctx.layout.badges.gap;
    let slot = 160.0 + gap;
    let row_width = slot * labels.len() as f64 - gap;

    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = center_x - row_width / 2.0 + slot * i as f64;
            GraphNode::new(
                format!("badge-{i}"),
                NodeKind::Badge {
                    text: (*label).to_string(),
                },
                NodeStyle::at(x, ctx.layout.badges.y)
                    .opacity(opacity)
                    .stroke(color),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SceneCtx {
        SceneCtx {
            fps: Fps { num: 30, den: 1 },
            theme: Theme::DEFAULT,
            layout: Mode::Desktop.layout(),
            mode: Mode::Desktop,
        }
    }

    #[test]
    fn mockup_frame_sits_at_layout_position() {
        let node = mockup_frame(&ctx(), "AI Assistant", NodeStyle::default());
        assert_eq!(node.style.position.x, 360.0);
        assert_eq!(node.style.position.y, 190.0);
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn badge_row_is_centered() {
        let row = badge_row(&ctx(), &["A", "B", "C"], AccentColor::Cyan, 1.0);
        assert_eq!(row.len(), 3);
        // Badge slots are 160 wide; the midpoints of the outer badges must
        // straddle the canvas center line symmetrically.
        let first_mid = row[0].style.position.x + 80.0;
        let last_mid = row[2].style.position.x + 80.0;
        assert!(((first_mid + last_mid) / 2.0 - 960.0).abs() < 1e-9);
        assert_eq!(row[1].style.position.y, 950.0);
    }
}
