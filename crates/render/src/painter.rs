//! Painter - generates render commands from a laid-out tree.

use crate::commands::{
    BorderCommand, ImageCommand, RectangleCommand, RenderCommand, RenderCommandKind,
    RenderCommandList, TextCommand,
};
use common::{CornerRadius, Point, Rect};
use layout::{BoxContent, LaidOutTree, LayoutBox, LayoutBoxId, TextAlign};
use std::collections::VecDeque;
use tracing::debug;

enum Visit {
    Enter(LayoutBoxId),
    Exit(LayoutBoxId),
}

/// Painter for generating render commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct Painter {
    /// Skip drawing commands for boxes entirely outside the viewport.
    culling: bool,
}

impl Painter {
    pub fn new() -> Self {
        Self { culling: false }
    }

    pub fn with_culling(culling: bool) -> Self {
        Self { culling }
    }

    /// Walk the in-flow tree depth-first and emit each box's commands, then
    /// each floating subtree as a root of its own in placement order. The
    /// list is finally sorted by z-index.
    pub fn paint(&self, laid_out: &LaidOutTree) -> RenderCommandList {
        let mut list = RenderCommandList::new();
        let viewport = Rect::from_origin_size(Point::ZERO, laid_out.viewport());
        let mut floating = VecDeque::new();
        let mut culled = 0usize;

        if let Some(root) = laid_out.root() {
            culled += self.paint_subtree(laid_out, root, &viewport, &mut floating, &mut list);
        }

        while let Some(id) = floating.pop_front() {
            let Some(geometry) = laid_out.geometry(id).copied() else { continue };
            // A floating root clipped by its attach target gets that clip
            // re-opened in its own z layer.
            let clip = geometry.clip_ancestor.and_then(|ancestor| {
                let ancestor_box = laid_out.get(ancestor)?;
                let config = ancestor_box.clip?;
                Some((ancestor_box.id, laid_out.bounds(ancestor)?, config.axes))
            });

            if let Some((clip_id, bounds, axes)) = clip {
                list.push(RenderCommand::new(
                    clip_id,
                    bounds,
                    geometry.z_index,
                    RenderCommandKind::ClipBegin(axes),
                ));
            }
            culled += self.paint_subtree(laid_out, id, &viewport, &mut floating, &mut list);
            if let Some((clip_id, bounds, _)) = clip {
                list.push(RenderCommand::new(
                    clip_id,
                    bounds,
                    geometry.z_index,
                    RenderCommandKind::ClipEnd,
                ));
            }
        }

        list.sort_by_z();
        debug!(commands = list.len(), culled, "generated render commands");
        list
    }

    /// Emit `start` and its in-flow descendants. Floating children are
    /// queued instead. Returns the number of culled boxes.
    fn paint_subtree(
        &self,
        laid_out: &LaidOutTree,
        start: LayoutBoxId,
        viewport: &Rect,
        floating: &mut VecDeque<LayoutBoxId>,
        list: &mut RenderCommandList,
    ) -> usize {
        let mut culled = 0;
        let mut stack = vec![Visit::Enter(start)];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(id) => {
                    let (Some(layout_box), Some(geometry)) = (laid_out.get(id), laid_out.geometry(id))
                    else {
                        continue;
                    };
                    let bounds = geometry.bounds;
                    let z_index = geometry.z_index;
                    let visible = !self.culling || bounds.intersects(viewport);
                    if !visible {
                        culled += 1;
                    }

                    if let Some(clip) = layout_box.clip {
                        list.push(RenderCommand::new(
                            layout_box.id,
                            bounds,
                            z_index,
                            RenderCommandKind::ClipBegin(clip.axes),
                        ));
                        stack.push(Visit::Exit(id));
                    }
                    if visible {
                        self.paint_box(laid_out, id, layout_box, bounds, z_index, viewport, list);
                    }

                    let (floating_children, in_flow): (Vec<LayoutBoxId>, Vec<LayoutBoxId>) = layout_box
                        .children
                        .iter()
                        .copied()
                        .partition(|&child| laid_out.get(child).is_some_and(|b| b.is_floating()));
                    floating.extend(floating_children);
                    stack.extend(in_flow.into_iter().rev().map(Visit::Enter));
                }
                Visit::Exit(id) => {
                    if let (Some(layout_box), Some(geometry)) = (laid_out.get(id), laid_out.geometry(id)) {
                        list.push(RenderCommand::new(
                            layout_box.id,
                            geometry.bounds,
                            geometry.z_index,
                            RenderCommandKind::ClipEnd,
                        ));
                    }
                }
            }
        }
        culled
    }

    /// Background, border, then text or image content.
    #[allow(clippy::too_many_arguments)]
    fn paint_box(
        &self,
        laid_out: &LaidOutTree,
        id: LayoutBoxId,
        layout_box: &LayoutBox,
        bounds: Rect,
        z_index: i16,
        viewport: &Rect,
        list: &mut RenderCommandList,
    ) {
        if let Some(background) = layout_box.background {
            list.push(RenderCommand::new(
                layout_box.id,
                bounds,
                z_index,
                RenderCommandKind::Rectangle(RectangleCommand {
                    color: background.color,
                    corner_radius: background.corner_radius,
                }),
            ));
        }

        if let Some(border) = layout_box.border {
            list.push(RenderCommand::new(
                layout_box.id,
                bounds,
                z_index,
                RenderCommandKind::Border(BorderCommand {
                    color: border.color,
                    width: border.width,
                    corner_radius: border.corner_radius,
                }),
            ));
        }

        match &layout_box.content {
            BoxContent::Container => {}
            BoxContent::Image(image) => {
                let corner_radius = layout_box
                    .background
                    .map(|b| b.corner_radius)
                    .unwrap_or(CornerRadius::ZERO);
                list.push(RenderCommand::new(
                    layout_box.id,
                    bounds,
                    z_index,
                    RenderCommandKind::Image(ImageCommand {
                        key: image.key,
                        corner_radius,
                    }),
                ));
            }
            BoxContent::Text { content, config } => {
                let Some(text) = laid_out.text_layout(id) else { return };
                for (index, line) in text.lines.iter().enumerate() {
                    if line.range.is_empty() {
                        continue;
                    }
                    let free = bounds.width - line.width;
                    let dx = match config.align {
                        TextAlign::Left => 0.0,
                        TextAlign::Center => free / 2.0,
                        TextAlign::Right => free,
                    };
                    let line_bounds = Rect::new(
                        bounds.x + dx,
                        bounds.y + index as f32 * text.line_height,
                        line.width,
                        text.line_height,
                    );
                    if self.culling && !line_bounds.intersects(viewport) {
                        continue;
                    }
                    list.push(RenderCommand::new(
                        layout_box.id,
                        line_bounds,
                        z_index,
                        RenderCommandKind::Text(TextCommand {
                            content: content.get(line.range.clone()).unwrap_or_default().to_string(),
                            font_id: config.font_id,
                            font_size: config.font_size,
                            letter_spacing: config.letter_spacing,
                            line_height: text.line_height,
                            color: config.color,
                        }),
                    ));
                }
            }
        }
    }
}
