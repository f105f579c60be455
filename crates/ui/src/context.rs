//! Frame driver: layout, render commands and pointer state for one UI.

use crate::config::UiConfig;
use common::{Point, Rect, Size, UiError, UiResult};
use input::{PointerData, PointerState};
use layout::{ElementId, LaidOutTree, LayoutEngine, LayoutTree, MonospaceMeasurer, TextMeasurer, TreeBuilder};
use render::{Painter, RenderCommand, RenderCommandList};
use tracing::{debug, info};

/// Ties the layout engine, the painter and the pointer state together.
///
/// Each frame the caller declares a tree, hands it to [`UiContext::layout`]
/// and draws the returned commands. Pointer updates are hit-tested against
/// the most recent frame.
pub struct UiContext {
    config: UiConfig,
    engine: LayoutEngine,
    painter: Painter,
    frame: LaidOutTree,
    commands: RenderCommandList,
    pointer: PointerState,
}

impl UiContext {
    /// Create a context using the built-in fixed-advance text measurer.
    pub fn new(config: UiConfig) -> UiResult<Self> {
        let measurer = MonospaceMeasurer {
            line_height_ratio: config.default_line_height_ratio,
            ..MonospaceMeasurer::default()
        };
        Self::with_measurer(config, measurer)
    }

    pub fn with_measurer(
        config: UiConfig,
        measurer: impl TextMeasurer + Send + Sync + 'static,
    ) -> UiResult<Self> {
        config.validate()?;
        let viewport = Size::new(config.viewport_width, config.viewport_height);
        let engine = LayoutEngine::with_measurer(viewport, measurer);
        let frame = engine.layout(LayoutTree::new());
        info!(
            width = viewport.width,
            height = viewport.height,
            culling = config.culling_enabled,
            "ui context created"
        );
        Ok(Self {
            painter: Painter::with_culling(config.culling_enabled),
            config,
            engine,
            frame,
            commands: RenderCommandList::new(),
            pointer: PointerState::new(),
        })
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Start declaring a frame.
    pub fn begin(&self) -> TreeBuilder {
        TreeBuilder::new()
    }

    /// Set viewport dimensions; applies from the next call to `layout`.
    /// Negative or non-finite dimensions are rejected and leave the current
    /// viewport in place.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> UiResult<()> {
        let config = self.config.clone().with_viewport(width, height);
        config.validate()?;
        self.config = config;
        self.engine.set_viewport(width, height);
        Ok(())
    }

    pub fn set_culling(&mut self, enabled: bool) {
        self.config.culling_enabled = enabled;
        self.painter = Painter::with_culling(enabled);
    }

    /// Lay out `tree` and generate its render commands. The result replaces
    /// the previous frame.
    pub fn layout(&mut self, tree: LayoutTree) -> UiResult<&[RenderCommand]> {
        let count = tree.len();
        if count > self.config.max_element_count {
            return Err(UiError::ElementLimitExceeded {
                count,
                limit: self.config.max_element_count,
            });
        }

        let frame = self.engine.layout(tree);
        self.commands = self.painter.paint(&frame);
        self.frame = frame;
        debug!(elements = count, commands = self.commands.len(), "frame complete");
        Ok(self.commands.commands())
    }

    /// Commands of the most recent frame.
    pub fn render_commands(&self) -> &[RenderCommand] {
        self.commands.commands()
    }

    /// The most recent frame.
    pub fn frame(&self) -> &LaidOutTree {
        &self.frame
    }

    /// Bounding box of an element in the most recent frame.
    pub fn element_bounds(&self, id: ElementId) -> Option<Rect> {
        self.frame.element_bounds(id)
    }

    /// Advance the pointer state against the most recent frame.
    pub fn set_pointer_state(&mut self, position: Point, is_down: bool) {
        let previous = std::mem::take(&mut self.pointer);
        self.pointer = previous.set_pointer_state(&self.frame, position, is_down);
    }

    pub fn pointer(&self) -> PointerData {
        self.pointer.pointer()
    }

    pub fn pointer_state(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_over(&self, id: ElementId) -> bool {
        self.pointer.pointer_over(id)
    }

    pub fn pointer_over_ids(&self) -> &[ElementId] {
        self.pointer.pointer_over_ids()
    }

    /// Topmost element at an arbitrary point of the most recent frame.
    pub fn element_at_point(&self, point: Point) -> Option<ElementId> {
        input::element_at_point(&self.frame, point)
    }

    pub fn elements_at_point(&self, point: Point) -> Vec<ElementId> {
        input::elements_at_point(&self.frame, point)
    }
}
