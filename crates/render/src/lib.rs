//! Render-command generation.
//!
//! This crate turns a laid-out tree into an ordered list of draw commands:
//! - Rectangles, borders, text lines and images per element
//! - Clip begin/end pairs around clipping containers
//! - Stable ordering by z-index so floating layers paint last

pub mod commands;
pub mod painter;

pub use commands::{
    BorderCommand, ImageCommand, RectangleCommand, RenderCommand, RenderCommandKind,
    RenderCommandList, TextCommand,
};
pub use painter::Painter;
