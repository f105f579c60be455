//! Layout engine implementation.
//!
//! This crate sizes and places a tree of UI elements: fixed/fit/grow/percent
//! sizing per axis, row and column flow with alignment, and floating
//! elements positioned against attach points.

pub mod builder;
pub mod config;
pub mod engine;
pub mod floating;
pub mod id;
pub mod layout_box;
pub mod position;
pub mod sizing;
pub mod text;
pub mod tree;

pub use builder::{IntoElementId, TreeBuilder};
pub use config::{
    AlignX, AlignY, AttachPoint, AttachTo, BackgroundConfig, BorderConfig, BorderWidth,
    ChildAlignment, ClipAxes, ClipConfig, ClipTo, ElementDecl, FloatingConfig, ImageData,
    LayoutConfig, LayoutDirection, PointerCapture, Sizing, SizingAxis, SizingKind, TextAlign,
    TextConfig, TextWrap,
};
pub use engine::{LaidOutTree, LayoutEngine};
pub use floating::calculate_floating_position;
pub use id::ElementId;
pub use layout_box::{BoxContent, LayoutBox, LayoutBoxId};
pub use position::BoxGeometry;
pub use sizing::TextLayout;
pub use text::{MeasuredText, MonospaceMeasurer, TextLine, TextMeasurer};
pub use tree::LayoutTree;
