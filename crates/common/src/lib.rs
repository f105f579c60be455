//! Common types shared by the layout, render and input crates.

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::{UiError, UiResult};
pub use geometry::{Axis, CornerRadius, Padding, Point, Rect, Size};
