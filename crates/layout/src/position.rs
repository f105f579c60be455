//! Position engine.
//!
//! Places sized boxes in root-relative coordinates. In-flow children advance
//! along their parent's main axis; floating boxes are placed afterwards
//! against their attach target and carry their own z-index down to their
//! subtree.

use crate::config::{AttachTo, ClipTo};
use crate::floating::{calculate_floating_position, floating_box};
use crate::layout_box::LayoutBoxId;
use crate::sizing::ComputedSizes;
use crate::tree::LayoutTree;
use common::{Axis, Point, Rect, Size};
use slotmap::SecondaryMap;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Placement of a single box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxGeometry {
    /// Final box, including any floating `expand`.
    pub bounds: Rect,
    /// Z-index of the nearest floating ancestor-or-self, 0 in normal flow.
    pub z_index: i16,
    /// Nearest strict ancestor with a clip config, if its clipping applies.
    pub clip_ancestor: Option<LayoutBoxId>,
    /// Nearest floating ancestor-or-self.
    pub floating_root: Option<LayoutBoxId>,
}

struct PositionPass<'a> {
    tree: &'a LayoutTree,
    sizes: &'a ComputedSizes,
    root_box: Rect,
    geometry: SecondaryMap<LayoutBoxId, BoxGeometry>,
    /// Boxes children are laid out in; differs from `bounds` only by `expand`.
    frames: SecondaryMap<LayoutBoxId, Rect>,
}

/// Assign a position to every sized box.
pub fn compute_positions(
    tree: &LayoutTree,
    sizes: &ComputedSizes,
    viewport: Size,
) -> SecondaryMap<LayoutBoxId, BoxGeometry> {
    let root_box = Rect::from_origin_size(Point::ZERO, viewport);
    let mut pass = PositionPass {
        tree,
        sizes,
        root_box,
        geometry: SecondaryMap::new(),
        frames: SecondaryMap::new(),
    };

    let Some(root) = tree.root() else {
        return pass.geometry;
    };
    pass.frames.insert(root, root_box);
    pass.geometry.insert(
        root,
        BoxGeometry {
            bounds: root_box,
            ..BoxGeometry::default()
        },
    );

    let mut floating = VecDeque::new();
    pass.place_subtree(root, &mut floating);
    while let Some(id) = floating.pop_front() {
        if pass.place_floating(id) {
            pass.place_subtree(id, &mut floating);
        }
    }

    debug!(boxes = pass.geometry.len(), "positioned layout tree");
    pass.geometry
}

impl<'a> PositionPass<'a> {
    /// Place the in-flow descendants of `start`, which must already be placed.
    /// Floating descendants are queued in declaration order.
    fn place_subtree(&mut self, start: LayoutBoxId, floating: &mut VecDeque<LayoutBoxId>) {
        let tree = self.tree;
        let mut stack = vec![start];

        while let Some(parent) = stack.pop() {
            let Some(parent_box) = tree.get(parent) else { continue };
            if parent_box.is_leaf() {
                continue;
            }
            let (Some(frame), Some(parent_geometry)) =
                (self.frames.get(parent).copied(), self.geometry.get(parent).copied())
            else {
                continue;
            };

            let layout = &parent_box.layout;
            let main = layout.main_axis();
            let cross = main.cross();
            let gap = layout.child_gap as f32;
            let padding = layout.padding;
            let scroll = parent_box.clip.map(|c| c.child_offset).unwrap_or(Point::ZERO);

            let origin = Point::new(
                frame.x + padding.left as f32 + scroll.x,
                frame.y + padding.top as f32 + scroll.y,
            );
            let content = Size::new(
                frame.width - padding.horizontal(),
                frame.height - padding.vertical(),
            );

            let children: Vec<LayoutBoxId> = parent_box
                .children
                .iter()
                .copied()
                .filter(|&c| tree.get(c).is_some_and(|b| !b.is_floating()))
                .collect();
            let used = children
                .iter()
                .map(|&c| self.sizes.size(c).along(main))
                .sum::<f32>()
                + gap * children.len().saturating_sub(1) as f32;

            let clip_ancestor = if parent_box.clip.is_some() {
                Some(parent)
            } else {
                parent_geometry.clip_ancestor
            };

            let mut cursor = layout
                .child_alignment
                .offset(main, (content.along(main) - used).max(0.0));
            for &child in &children {
                let size = self.sizes.size(child);
                let cross_offset = layout
                    .child_alignment
                    .offset(cross, content.along(cross) - size.along(cross));
                let (dx, dy) = match main {
                    Axis::Horizontal => (cursor, cross_offset),
                    Axis::Vertical => (cross_offset, cursor),
                };
                let rect = Rect::from_origin_size(Point::new(origin.x + dx, origin.y + dy), size);

                self.frames.insert(child, rect);
                self.geometry.insert(
                    child,
                    BoxGeometry {
                        bounds: rect,
                        z_index: parent_geometry.z_index,
                        clip_ancestor,
                        floating_root: parent_geometry.floating_root,
                    },
                );
                cursor += size.along(main) + gap;
            }

            floating.extend(
                parent_box
                    .children
                    .iter()
                    .copied()
                    .filter(|&c| tree.get(c).is_some_and(|b| b.is_floating())),
            );
            for &child in children.iter().rev() {
                if tree.get(child).is_some_and(|b| !b.is_leaf()) {
                    stack.push(child);
                }
            }
        }
    }

    /// Place a floating box against its attach target. Returns false if the
    /// box could not be placed (its parent was never positioned).
    fn place_floating(&mut self, id: LayoutBoxId) -> bool {
        let tree = self.tree;
        let Some(layout_box) = tree.get(id) else { return false };
        let Some(config) = layout_box.floating else { return false };
        let Some(parent) = layout_box.parent else { return false };
        let Some(parent_frame) = self.frames.get(parent).copied() else { return false };

        let (target_box, target) = match config.attach_to {
            AttachTo::Root => (self.root_box, tree.root()),
            AttachTo::Element(element) => {
                match tree
                    .find(element)
                    .and_then(|key| self.frames.get(key).map(|frame| (*frame, Some(key))))
                {
                    Some(found) => found,
                    None => {
                        warn!(
                            element = ?element,
                            floating = ?layout_box.id,
                            "attach target is not placed, attaching to parent instead"
                        );
                        (parent_frame, Some(parent))
                    }
                }
            }
            AttachTo::Parent | AttachTo::None => (parent_frame, Some(parent)),
        };

        let dims = self.sizes.size(id);
        let Some(origin) = calculate_floating_position(&config, dims, target_box, self.root_box)
        else {
            return false;
        };

        let clip_ancestor = match (config.clip_to, target) {
            (ClipTo::AttachedParent, Some(target)) => {
                if tree.get(target).is_some_and(|t| t.clip.is_some()) {
                    Some(target)
                } else {
                    self.geometry.get(target).and_then(|g| g.clip_ancestor)
                }
            }
            _ => None,
        };

        self.frames.insert(id, Rect::from_origin_size(origin, dims));
        self.geometry.insert(
            id,
            BoxGeometry {
                bounds: floating_box(&config, origin, dims),
                z_index: config.z_index,
                clip_ancestor,
                floating_root: Some(id),
            },
        );
        true
    }
}
