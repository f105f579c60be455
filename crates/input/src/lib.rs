//! Pointer input for laid-out trees.
//!
//! Hit testing respects clipping and floating layers; results are ordered
//! topmost first. [`PointerState`] is a plain value the caller threads from
//! one frame to the next.

pub mod pointer;

pub use hit_test::{boxes_at_point, element_at_point, elements_at_point, PointerState};
pub use pointer::{PointerData, PointerInteraction};
