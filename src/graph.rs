//! Styled node tree handed to the rendering host.
//!
//! The host owns rasterization; this crate only says what is visible at a
//! frame, where, and with which style attributes. The whole tree is derived
//! per frame and serializes to JSON.

use crate::{
    core::{Canvas, FrameIndex, Rgba8, Vec2},
    icon::IconKind,
    theme::AccentColor,
};

#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameGraph {
    pub frame: FrameIndex,
    pub canvas: Canvas,
    pub background: Rgba8,
    /// Ascending scene index defines z-order.
    pub scenes: Vec<SceneLayer>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneLayer {
    pub scene_id: String,
    pub accent: AccentColor,
    /// Cross-fade opacity applied over the whole layer.
    pub opacity: f64,
    pub nodes: Vec<GraphNode>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub style: NodeStyle,
    /// Child positions are relative to this node; opacity and scale compound.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GraphNode>,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Group,
    Rect {
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    Circle {
        radius: f64,
    },
    Text {
        text: String,
        font: FontRole,
        size: f64,
    },
    Path {
        d: String,
        stroke_width: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        dash_array: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        dash_offset: Option<f64>,
    },
    Icon {
        icon: IconKind,
        size: f64,
    },
    Badge {
        text: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Display,
    Body,
    Mono,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct NodeStyle {
    pub opacity: f64,
    pub position: Vec2,
    pub translate: Vec2,
    pub scale: f64,
    pub rotation_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgba8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Rgba8>,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            position: Vec2::ZERO,
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
            fill: None,
            stroke: None,
        }
    }
}

impl NodeStyle {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..Self::default()
        }
    }

    pub fn opacity(mut self, o: f64) -> Self {
        self.opacity = o.clamp(0.0, 1.0);
        self
    }

    pub fn translate(mut self, v: Vec2) -> Self {
        self.translate = v;
        self
    }

    pub fn scale(mut self, s: f64) -> Self {
        self.scale = s;
        self
    }

    pub fn rotation_deg(mut self, deg: f64) -> Self {
        self.rotation_deg = deg;
        self
    }

    pub fn fill(mut self, c: Rgba8) -> Self {
        self.fill = Some(c);
        self
    }

    pub fn stroke(mut self, c: Rgba8) -> Self {
        self.stroke = Some(c);
        self
    }
}

impl GraphNode {
    pub fn new(id: impl Into<String>, kind: NodeKind, style: NodeStyle) -> Self {
        Self {
            id: id.into(),
            kind,
            style,
            children: Vec::new(),
        }
    }

    pub fn group(id: impl Into<String>, style: NodeStyle, children: Vec<GraphNode>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Group,
            style,
            children,
        }
    }

    pub fn child(mut self, node: GraphNode) -> Self {
        self.children.push(node);
        self
    }

    /// Node ids in this subtree, depth-first.
    pub fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.id);
        for c in &self.children {
            c.collect_ids(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_opacity_is_clamped() {
        assert_eq!(NodeStyle::default().opacity(1.7).opacity, 1.0);
        assert_eq!(NodeStyle::default().opacity(-0.2).opacity, 0.0);
    }

    #[test]
    fn collect_ids_walks_depth_first() {
        let tree = GraphNode::group(
            "root",
            NodeStyle::default(),
            vec![
                GraphNode::new("a", NodeKind::Circle { radius: 1.0 }, NodeStyle::default())
                    .child(GraphNode::new(
                        "a1",
                        NodeKind::Circle { radius: 1.0 },
                        NodeStyle::default(),
                    )),
                GraphNode::new("b", NodeKind::Circle { radius: 1.0 }, NodeStyle::default()),
            ],
        );
        let mut ids = Vec::new();
        tree.collect_ids(&mut ids);
        assert_eq!(ids, ["root", "a", "a1", "b"]);
    }

    #[test]
    fn node_kind_serializes_with_tag() {
        let n = GraphNode::new(
            "dot",
            NodeKind::Circle { radius: 5.0 },
            NodeStyle::at(10.0, 20.0),
        );
        let v = serde_json::to_value(&n).unwrap();
        assert_eq!(v["kind"]["type"], "circle");
        assert_eq!(v["style"]["position"]["x"], 10.0);
    }
}
