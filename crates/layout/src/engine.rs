//! Main layout engine.

use crate::id::ElementId;
use crate::layout_box::{LayoutBox, LayoutBoxId};
use crate::position::{compute_positions, BoxGeometry};
use crate::sizing::{compute_sizes, TextLayout};
use crate::text::{MonospaceMeasurer, TextMeasurer};
use crate::tree::LayoutTree;
use common::{Rect, Size};
use slotmap::SecondaryMap;
use tracing::debug;

/// The layout engine.
///
/// Turns a declared [`LayoutTree`] into a [`LaidOutTree`] with a box for
/// every element. The engine holds no per-frame state; the same engine can
/// lay out any number of trees.
pub struct LayoutEngine {
    viewport: Size,
    measurer: Box<dyn TextMeasurer + Send + Sync>,
}

impl LayoutEngine {
    /// Engine with a fixed-advance text measurer.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self::with_measurer(
            Size::new(viewport_width, viewport_height),
            MonospaceMeasurer::default(),
        )
    }

    pub fn with_measurer(viewport: Size, measurer: impl TextMeasurer + Send + Sync + 'static) -> Self {
        Self {
            viewport,
            measurer: Box::new(measurer),
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Set viewport dimensions.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
    }

    pub fn set_measurer(&mut self, measurer: impl TextMeasurer + Send + Sync + 'static) {
        self.measurer = Box::new(measurer);
    }

    /// Size and place every element reachable from the root.
    pub fn layout(&self, tree: LayoutTree) -> LaidOutTree {
        let sizes = compute_sizes(&tree, self.measurer.as_ref(), self.viewport);
        let geometry = compute_positions(&tree, &sizes, self.viewport);
        debug!(
            elements = tree.len(),
            placed = geometry.len(),
            width = self.viewport.width,
            height = self.viewport.height,
            "layout complete"
        );
        LaidOutTree {
            tree,
            geometry,
            text: sizes.text,
            viewport: self.viewport,
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A layout tree with final geometry. Only obtainable from
/// [`LayoutEngine::layout`], so bounds are never read before they exist.
#[derive(Clone, Debug)]
pub struct LaidOutTree {
    tree: LayoutTree,
    geometry: SecondaryMap<LayoutBoxId, BoxGeometry>,
    text: SecondaryMap<LayoutBoxId, TextLayout>,
    viewport: Size,
}

impl LaidOutTree {
    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    pub fn root(&self) -> Option<LayoutBoxId> {
        self.tree.root()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn get(&self, id: LayoutBoxId) -> Option<&LayoutBox> {
        self.tree.get(id)
    }

    /// Geometry of a box. `None` for boxes not attached under the root.
    pub fn geometry(&self, id: LayoutBoxId) -> Option<&BoxGeometry> {
        self.geometry.get(id)
    }

    pub fn bounds(&self, id: LayoutBoxId) -> Option<Rect> {
        self.geometry.get(id).map(|g| g.bounds)
    }

    /// Bounding box of the element with the given id.
    pub fn element_bounds(&self, id: ElementId) -> Option<Rect> {
        self.tree.find(id).and_then(|key| self.bounds(key))
    }

    /// Effective z-index; 0 for boxes in normal flow.
    pub fn z_index(&self, id: LayoutBoxId) -> i16 {
        self.geometry.get(id).map(|g| g.z_index).unwrap_or_default()
    }

    /// Wrapped lines of a text element.
    pub fn text_layout(&self, id: LayoutBoxId) -> Option<&TextLayout> {
        self.text.get(id)
    }

    /// Boxes with geometry, parents before children.
    pub fn pre_order(&self) -> impl Iterator<Item = LayoutBoxId> + '_ {
        self.tree
            .pre_order()
            .filter(|&id| self.geometry.contains_key(id))
    }

    /// Drop the geometry and get the declared tree back.
    pub fn into_tree(self) -> LayoutTree {
        self.tree
    }
}
