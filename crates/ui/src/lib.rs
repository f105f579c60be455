//! Immediate-mode UI layout.
//!
//! This crate ties the workspace together:
//! - `UiConfig` for viewport, culling and element limits
//! - `UiContext`, which lays out a declared tree, generates render commands
//!   and tracks the pointer against the last frame
//!
//! The lower-level crates are re-exported for callers that want to drive the
//! passes themselves.

pub mod config;
pub mod context;

pub use config::UiConfig;
pub use context::UiContext;

pub use common::{Axis, Color, CornerRadius, Padding, Point, Rect, Size, UiError, UiResult};
pub use input::{PointerData, PointerInteraction, PointerState};
pub use layout::{
    AlignX, AlignY, AttachPoint, AttachTo, BorderWidth, ClipAxes, ClipConfig, ClipTo, ElementDecl,
    ElementId, FloatingConfig, ImageData, LaidOutTree, LayoutConfig, LayoutDirection,
    LayoutEngine, LayoutTree, PointerCapture, SizingAxis, TextAlign, TextConfig, TextMeasurer,
    TextWrap, TreeBuilder,
};
pub use render::{Painter, RenderCommand, RenderCommandKind, RenderCommandList};
