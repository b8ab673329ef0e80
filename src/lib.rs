#![forbid(unsafe_code)]

pub mod compose;
pub mod contact;
pub mod core;
pub mod ease;
pub mod entrance;
pub mod error;
pub mod flowpath;
pub mod graph;
pub mod icon;
pub mod interp;
pub mod layout;
pub mod mail;
pub mod scene;
pub mod scenes;
pub mod sequencer;
#[cfg(feature = "server")]
pub mod server;
pub mod spring;
pub mod theme;
pub mod timeline;

pub use compose::Composition;
pub use core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8};
pub use ease::Ease;
pub use entrance::{ElementStyle, EntranceKind, Oscillation};
pub use error::{ShowreelError, ShowreelResult};
pub use flowpath::{FlowPath, FlowPathState};
pub use graph::{FrameGraph, GraphNode, NodeKind, NodeStyle, SceneLayer};
pub use interp::{interpolate, interpolate_eased, interpolate_multi};
pub use layout::{Layout, Mode};
pub use sequencer::{LoopStyle, SceneSample, Sequencer};
pub use spring::{SpringConfig, spring_progress};
pub use theme::Theme;
pub use timeline::{SceneBoundaries, Timeline};
