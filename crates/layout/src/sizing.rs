//! Sizing engine.
//!
//! Resolves a width and height for every box, one axis at a time (width
//! first, so text can wrap before heights are computed). Each axis runs:
//!
//! 1. a fixed pass: `Fixed` boxes take their clamped value, `Grow` boxes start
//!    at their `min`;
//! 2. a bottom-up fit pass: `Fit` boxes wrap their in-flow children (or their
//!    intrinsic size for text and images);
//! 3. a top-down pass resolving `Percent` children against the parent's
//!    content box and sharing leftover main-axis space among `Grow` children.
//!    On the cross axis a `Grow` child simply fills the parent's content box.
//!
//! Floating boxes take no space in their parent. Their `Grow`/`Percent` rules
//! resolve against the box they attach to, after the in-flow pass.

use crate::config::{AttachTo, SizingAxis, SizingKind};
use crate::layout_box::{BoxContent, LayoutBox, LayoutBoxId};
use crate::text::{measure_text, MeasuredText, TextLine, TextMeasurer};
use crate::tree::LayoutTree;
use common::{Axis, Size};
use slotmap::SecondaryMap;
use smallvec::SmallVec;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Leftover space below this is treated as fully distributed.
const EPSILON: f32 = 0.01;

/// Measured and wrapped text of a text box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    pub measured: MeasuredText,
    pub lines: Vec<TextLine>,
    pub line_height: f32,
}

/// Output of the sizing engine.
#[derive(Clone, Debug, Default)]
pub struct ComputedSizes {
    pub sizes: SecondaryMap<LayoutBoxId, Size>,
    pub text: SecondaryMap<LayoutBoxId, TextLayout>,
}

impl ComputedSizes {
    #[inline]
    pub fn size(&self, id: LayoutBoxId) -> Size {
        self.sizes.get(id).copied().unwrap_or_default()
    }
}

struct SizingPass<'a> {
    tree: &'a LayoutTree,
    viewport: Size,
    out: ComputedSizes,
}

/// Resolve the size of every box reachable from the root. The root always
/// takes the viewport size.
pub fn compute_sizes(tree: &LayoutTree, measurer: &dyn TextMeasurer, viewport: Size) -> ComputedSizes {
    let mut pass = SizingPass {
        tree,
        viewport,
        out: ComputedSizes::default(),
    };

    pass.measure_text(measurer);
    pass.size_axis(Axis::Horizontal);
    pass.wrap_text();
    pass.size_axis(Axis::Vertical);

    debug!(boxes = pass.out.sizes.len(), "sized layout tree");
    pass.out
}

impl<'a> SizingPass<'a> {
    fn measure_text(&mut self, measurer: &dyn TextMeasurer) {
        let tree = self.tree;
        for id in tree.pre_order() {
            self.out.sizes.insert(id, Size::ZERO);
            if let Some(BoxContent::Text { content, config }) = tree.get(id).map(|b| &b.content) {
                let measured = measure_text(measurer, content, config);
                let line_height = measured.line_height(config);
                self.out.text.insert(
                    id,
                    TextLayout {
                        measured,
                        lines: Vec::new(),
                        line_height,
                    },
                );
            }
        }
    }

    fn wrap_text(&mut self) {
        let tree = self.tree;
        for (id, layout) in self.out.text.iter_mut() {
            let width = self.out.sizes.get(id).map(|s| s.width).unwrap_or_default();
            if let Some(BoxContent::Text { content, config }) = tree.get(id).map(|b| &b.content) {
                layout.lines = layout.measured.wrap(content, config, width);
            }
        }
    }

    #[inline]
    fn get(&self, id: LayoutBoxId, axis: Axis) -> f32 {
        self.out.size(id).along(axis)
    }

    #[inline]
    fn set(&mut self, id: LayoutBoxId, axis: Axis, value: f32) {
        if let Some(size) = self.out.sizes.get_mut(id) {
            size.set_along(axis, value);
        }
    }

    fn in_flow_children(&self, layout_box: &LayoutBox) -> SmallVec<[LayoutBoxId; 8]> {
        layout_box
            .children
            .iter()
            .copied()
            .filter(|&c| self.tree.get(c).is_some_and(|child| !child.is_floating()))
            .collect()
    }

    fn size_axis(&mut self, axis: Axis) {
        self.fixed_pass(axis);
        self.fit_pass(axis);
        self.expand_pass(axis);
    }

    fn fixed_pass(&mut self, axis: Axis) {
        let tree = self.tree;
        let root = tree.root();
        for id in tree.pre_order() {
            let Some(layout_box) = tree.get(id) else { continue };
            let rule = layout_box.layout.sizing.along(axis);
            let initial = if Some(id) == root {
                self.viewport.along(axis)
            } else {
                match rule.kind {
                    SizingKind::Fixed => rule.clamp(rule.value),
                    SizingKind::Grow => rule.min,
                    SizingKind::Fit | SizingKind::Percent => 0.0,
                }
            };
            self.set(id, axis, initial);
        }
    }

    fn fit_pass(&mut self, axis: Axis) {
        let tree = self.tree;
        let root = tree.root();
        for id in tree.post_order() {
            if Some(id) == root {
                continue;
            }
            let Some(layout_box) = tree.get(id) else { continue };
            let rule = layout_box.layout.sizing.along(axis);
            if rule.kind != SizingKind::Fit {
                continue;
            }
            let content = self.fit_content(id, layout_box, axis);
            self.set(id, axis, rule.clamp(content));
        }
    }

    /// Natural size of a box along `axis`, padding included.
    fn fit_content(&self, id: LayoutBoxId, layout_box: &LayoutBox, axis: Axis) -> f32 {
        match &layout_box.content {
            BoxContent::Text { .. } => self.text_extent(id, axis),
            BoxContent::Image(image) => match axis {
                Axis::Horizontal => image.intrinsic.width,
                Axis::Vertical => image
                    .aspect()
                    .map(|aspect| self.get(id, Axis::Horizontal) * aspect)
                    .unwrap_or(image.intrinsic.height),
            },
            BoxContent::Container => {
                let layout = &layout_box.layout;
                let padding = layout.padding.along(axis);
                let children = self.in_flow_children(layout_box);
                if children.is_empty() {
                    return padding;
                }
                let sizes = children.iter().map(|&c| self.get(c, axis));
                if layout.main_axis() == axis {
                    let gaps = layout.child_gap as f32 * (children.len() - 1) as f32;
                    sizes.sum::<f32>() + gaps + padding
                } else {
                    sizes.fold(0.0, f32::max) + padding
                }
            }
        }
    }

    fn text_extent(&self, id: LayoutBoxId, axis: Axis) -> f32 {
        let Some(text) = self.out.text.get(id) else { return 0.0 };
        match axis {
            Axis::Horizontal => {
                let config = match self.tree.get(id).map(|b| &b.content) {
                    Some(BoxContent::Text { config, .. }) => config,
                    _ => return text.measured.width,
                };
                text.measured.fit_width(config)
            }
            Axis::Vertical => text.lines.len().max(1) as f32 * text.line_height,
        }
    }

    /// Top-down resolution of percent and grow children, in-flow tree first,
    /// then each floating subtree once its attach target is sized.
    fn expand_pass(&mut self, axis: Axis) {
        let Some(root) = self.tree.root() else { return };
        let mut floating = VecDeque::new();
        self.expand_subtree(root, axis, &mut floating);

        while let Some(id) = floating.pop_front() {
            self.size_floating(id, axis);
            self.expand_subtree(id, axis, &mut floating);
        }
    }

    fn expand_subtree(&mut self, start: LayoutBoxId, axis: Axis, floating: &mut VecDeque<LayoutBoxId>) {
        let tree = self.tree;
        let mut stack = vec![start];

        while let Some(parent) = stack.pop() {
            let Some(parent_box) = tree.get(parent) else { continue };
            if parent_box.is_leaf() {
                continue;
            }

            let layout = &parent_box.layout;
            let content_size = self.get(parent, axis) - layout.padding.along(axis);
            let children = self.in_flow_children(parent_box);

            for &child in &children {
                if let Some(rule) = tree.get(child).map(|c| *c.layout.sizing.along(axis)) {
                    if rule.kind == SizingKind::Percent {
                        self.set(child, axis, rule.clamp(rule.value * content_size));
                    }
                }
            }

            if layout.main_axis() == axis {
                let gaps = layout.child_gap as f32 * children.len().saturating_sub(1) as f32;
                let used: f32 = children.iter().map(|&c| self.get(c, axis)).sum();
                self.distribute_grow(parent, &children, axis, content_size - used - gaps);
            } else {
                for &child in &children {
                    if let Some(rule) = tree.get(child).map(|c| *c.layout.sizing.along(axis)) {
                        if rule.kind == SizingKind::Grow {
                            self.set(child, axis, rule.clamp(content_size));
                        }
                    }
                }
            }

            for &child in parent_box.children.iter().rev() {
                match tree.get(child) {
                    Some(c) if c.is_floating() => floating.push_back(child),
                    Some(c) if !c.is_leaf() => stack.push(child),
                    _ => {}
                }
            }
        }
    }

    /// Water-filling: every still-growable child receives an equal share;
    /// children whose `max` is reached are clamped and their unused share is
    /// handed to the rest in the next round.
    fn distribute_grow(
        &mut self,
        parent: LayoutBoxId,
        children: &[LayoutBoxId],
        axis: Axis,
        mut available: f32,
    ) {
        let tree = self.tree;
        let mut growable: SmallVec<[(LayoutBoxId, SizingAxis); 8]> = children
            .iter()
            .filter_map(|&c| {
                let rule = *tree.get(c)?.layout.sizing.along(axis);
                (rule.kind == SizingKind::Grow && self.get(c, axis) < rule.max).then_some((c, rule))
            })
            .collect();

        if growable.is_empty() || available <= EPSILON {
            return;
        }
        trace!(?parent, ?axis, available, children = growable.len(), "distributing grow space");

        let mut rounds = 0;
        while available > EPSILON && !growable.is_empty() {
            rounds += 1;
            let share = available / growable.len() as f32;
            let before = growable.len();
            let sizes = &mut self.out.sizes;

            growable.retain(|(child, rule)| {
                let Some(size) = sizes.get_mut(*child) else { return false };
                let current = size.along(axis);
                let room = rule.max - current;
                if room <= share {
                    size.set_along(axis, rule.max);
                    available -= room;
                    false
                } else {
                    true
                }
            });

            if growable.len() == before {
                for (child, _) in &growable {
                    if let Some(size) = sizes.get_mut(*child) {
                        let current = size.along(axis);
                        size.set_along(axis, current + share);
                    }
                }
                available = 0.0;
            }
        }
        trace!(?parent, rounds, leftover = available, "grow distribution settled");
    }

    fn size_floating(&mut self, id: LayoutBoxId, axis: Axis) {
        let tree = self.tree;
        let Some(layout_box) = tree.get(id) else { return };
        let Some(floating) = layout_box.floating else { return };
        let rule = *layout_box.layout.sizing.along(axis);

        let target = match floating.attach_to {
            AttachTo::Root => Some(self.viewport.along(axis)),
            AttachTo::Element(element) => tree
                .find(element)
                .or(layout_box.parent)
                .map(|t| self.get(t, axis)),
            AttachTo::Parent | AttachTo::None => layout_box.parent.map(|p| self.get(p, axis)),
        };
        let Some(target) = target else { return };

        match rule.kind {
            SizingKind::Grow => self.set(id, axis, rule.clamp(target)),
            SizingKind::Percent => self.set(id, axis, rule.clamp(rule.value * target)),
            SizingKind::Fit | SizingKind::Fixed => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TreeBuilder;
    use crate::config::{
        ElementDecl, FloatingConfig, ImageData, LayoutConfig, LayoutDirection, TextConfig,
    };
    use crate::id::ElementId;
    use crate::text::MonospaceMeasurer;
    use common::Padding;

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    fn measurer() -> MonospaceMeasurer {
        MonospaceMeasurer::new(0.5, 1.5)
    }

    fn layout(width: SizingAxis, height: SizingAxis) -> LayoutConfig {
        LayoutConfig::new().width(width).height(height)
    }

    fn sized(ui: TreeBuilder) -> (LayoutTree, ComputedSizes) {
        let tree = ui.finish().unwrap();
        let sizes = compute_sizes(&tree, &measurer(), VIEWPORT);
        (tree, sizes)
    }

    fn size_of(tree: &LayoutTree, sizes: &ComputedSizes, name: &str) -> Size {
        sizes.size(tree.find(ElementId::new(name)).unwrap())
    }

    #[test]
    fn test_root_takes_viewport() {
        let (tree, sizes) = sized(TreeBuilder::new());
        assert_eq!(sizes.size(tree.root().unwrap()), VIEWPORT);
    }

    #[test]
    fn test_fixed_is_clamped() {
        let mut ui = TreeBuilder::new();
        ui.open("a", ElementDecl::new(layout(SizingAxis::fixed(50.0).min(80.0), SizingAxis::fixed(500.0).max(120.0))))
            .unwrap();
        ui.open("child", ElementDecl::new(layout(SizingAxis::fixed(300.0), SizingAxis::fixed(300.0))))
            .unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "a"), Size::new(80.0, 120.0));
    }

    #[test]
    fn test_fit_sums_main_axis() {
        let mut ui = TreeBuilder::new();
        ui.open("row", ElementDecl::new(LayoutConfig::new().gap(10))).unwrap();
        for name in ["a", "b"] {
            ui.open(name, ElementDecl::new(layout(SizingAxis::fixed(100.0), SizingAxis::fixed(20.0))))
                .unwrap();
            ui.close().unwrap();
        }
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "row"), Size::new(210.0, 20.0));
    }

    #[test]
    fn test_fit_max_on_cross_axis_with_padding() {
        let mut ui = TreeBuilder::new();
        let column = LayoutConfig::new()
            .direction(LayoutDirection::TopToBottom)
            .padding(Padding::new(5, 10, 5, 10))
            .gap(4);
        ui.open("column", ElementDecl::new(column)).unwrap();
        ui.open("a", ElementDecl::new(layout(SizingAxis::fixed(40.0), SizingAxis::fixed(10.0)))).unwrap();
        ui.close().unwrap();
        ui.open("b", ElementDecl::new(layout(SizingAxis::fixed(70.0), SizingAxis::fixed(10.0)))).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "column"), Size::new(90.0, 34.0));
    }

    #[test]
    fn test_empty_fit_container_is_padding() {
        let mut ui = TreeBuilder::new();
        ui.open("empty", ElementDecl::new(LayoutConfig::new().padding(Padding::all(6)))).unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "empty"), Size::new(12.0, 12.0));
    }

    #[test]
    fn test_percent_of_content_box() {
        let mut ui = TreeBuilder::new();
        ui.open("parent", ElementDecl::new(layout(SizingAxis::fixed(200.0), SizingAxis::fixed(100.0))))
            .unwrap();
        ui.open("half", ElementDecl::new(layout(SizingAxis::percent(0.5), SizingAxis::fit()))).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();

        let padded = LayoutConfig::new()
            .width(SizingAxis::fixed(200.0))
            .padding(Padding::new(0, 50, 0, 50));
        ui.open("padded", ElementDecl::new(padded)).unwrap();
        ui.open("full", ElementDecl::new(layout(SizingAxis::percent(1.0), SizingAxis::fit()))).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();

        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "half").width, 100.0);
        assert_eq!(size_of(&tree, &sizes, "full").width, 100.0);
    }

    #[test]
    fn test_grow_equal_split() {
        let mut ui = TreeBuilder::new();
        ui.open("row", ElementDecl::new(layout(SizingAxis::fixed(400.0), SizingAxis::fixed(50.0))))
            .unwrap();
        for name in ["a", "b"] {
            ui.open(name, ElementDecl::new(layout(SizingAxis::grow(), SizingAxis::grow()))).unwrap();
            ui.close().unwrap();
        }
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "a"), Size::new(200.0, 50.0));
        assert_eq!(size_of(&tree, &sizes, "b"), Size::new(200.0, 50.0));
    }

    #[test]
    fn test_grow_respects_max_and_leaves_space() {
        let mut ui = TreeBuilder::new();
        ui.open("row", ElementDecl::new(layout(SizingAxis::fixed(400.0), SizingAxis::fixed(50.0))))
            .unwrap();
        ui.open("a", ElementDecl::new(layout(SizingAxis::grow().max(100.0), SizingAxis::fit()))).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "a").width, 100.0);
    }

    #[test]
    fn test_grow_water_filling_with_tiers() {
        // 600px shared by four children capped at 50, 100, unbounded, unbounded.
        let mut ui = TreeBuilder::new();
        ui.open("row", ElementDecl::new(layout(SizingAxis::fixed(600.0), SizingAxis::fixed(10.0))))
            .unwrap();
        let rules = [
            ("a", SizingAxis::grow().max(50.0)),
            ("b", SizingAxis::grow().max(100.0)),
            ("c", SizingAxis::grow()),
            ("d", SizingAxis::grow().min(20.0)),
        ];
        for (name, rule) in rules {
            ui.open(name, ElementDecl::new(layout(rule, SizingAxis::fit()))).unwrap();
            ui.close().unwrap();
        }
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);

        // 580 free: share 145 caps a (50) and b (100); the remaining 430
        // splits evenly between c and d on top of their starting sizes.
        assert_eq!(size_of(&tree, &sizes, "a").width, 50.0);
        assert_eq!(size_of(&tree, &sizes, "b").width, 100.0);
        assert_eq!(size_of(&tree, &sizes, "c").width, 215.0);
        assert_eq!(size_of(&tree, &sizes, "d").width, 235.0);
    }

    #[test]
    fn test_grow_takes_remaining_after_fixed_and_gaps() {
        let mut ui = TreeBuilder::new();
        ui.open("row", ElementDecl::new(layout(SizingAxis::fixed(300.0), SizingAxis::fixed(10.0)).gap(10)))
            .unwrap();
        ui.open("fixed", ElementDecl::new(layout(SizingAxis::fixed(100.0), SizingAxis::fit()))).unwrap();
        ui.close().unwrap();
        ui.open("grow", ElementDecl::new(layout(SizingAxis::grow(), SizingAxis::fit()))).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "grow").width, 190.0);
    }

    #[test]
    fn test_overflow_is_not_clamped() {
        let mut ui = TreeBuilder::new();
        ui.open("row", ElementDecl::new(layout(SizingAxis::fixed(100.0), SizingAxis::fixed(10.0))))
            .unwrap();
        ui.open("wide", ElementDecl::new(layout(SizingAxis::fixed(150.0), SizingAxis::fit()))).unwrap();
        ui.close().unwrap();
        ui.open("grow", ElementDecl::new(layout(SizingAxis::grow().min(5.0), SizingAxis::fit()))).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "row").width, 100.0);
        assert_eq!(size_of(&tree, &sizes, "wide").width, 150.0);
        assert_eq!(size_of(&tree, &sizes, "grow").width, 5.0);
    }

    #[test]
    fn test_grow_inside_fit_stays_at_min() {
        let mut ui = TreeBuilder::new();
        ui.open("fit", ElementDecl::default()).unwrap();
        ui.open("fixed", ElementDecl::new(layout(SizingAxis::fixed(40.0), SizingAxis::fixed(10.0)))).unwrap();
        ui.close().unwrap();
        ui.open("grow", ElementDecl::new(layout(SizingAxis::grow().min(8.0), SizingAxis::fit()))).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "fit").width, 48.0);
        assert_eq!(size_of(&tree, &sizes, "grow").width, 8.0);
    }

    #[test]
    fn test_cross_axis_grow_fills_content_box() {
        let mut ui = TreeBuilder::new();
        let row = layout(SizingAxis::fixed(300.0), SizingAxis::fixed(100.0)).padding(Padding::all(10));
        ui.open("row", ElementDecl::new(row)).unwrap();
        ui.open("tall", ElementDecl::new(layout(SizingAxis::fixed(10.0), SizingAxis::grow()))).unwrap();
        ui.close().unwrap();
        ui.open("capped", ElementDecl::new(layout(SizingAxis::fixed(10.0), SizingAxis::grow().max(30.0))))
            .unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "tall").height, 80.0);
        assert_eq!(size_of(&tree, &sizes, "capped").height, 30.0);
    }

    #[test]
    fn test_fit_text_keeps_natural_width() {
        let mut ui = TreeBuilder::new();
        let col = layout(SizingAxis::fixed(40.0), SizingAxis::fit()).direction(LayoutDirection::TopToBottom);
        ui.open("col", ElementDecl::new(col)).unwrap();
        ui.text("words", "one two three", TextConfig::default().font_size(10)).unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);

        // A fit-width text element is as wide as its unwrapped content and
        // overflows the 40px column on a single line.
        let words = tree.find(ElementId::new("words")).unwrap();
        assert_eq!(sizes.size(words), Size::new(65.0, 15.0));
        assert_eq!(sizes.text[words].lines.len(), 1);
        assert_eq!(size_of(&tree, &sizes, "col").height, 15.0);
    }

    #[test]
    fn test_growing_text_wraps() {
        let mut ui = TreeBuilder::new();
        let col = layout(SizingAxis::fixed(40.0), SizingAxis::fit()).direction(LayoutDirection::TopToBottom);
        ui.open("col", ElementDecl::new(col)).unwrap();
        ui.open("cell", ElementDecl::new(layout(SizingAxis::grow(), SizingAxis::fit()))).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let mut tree = ui.finish().unwrap();
        let text = tree
            .create_text(ElementId::new("t"), "one two three", TextConfig::default().font_size(10))
            .unwrap();
        if let Some(t) = tree.get_mut(text) {
            t.layout.sizing.width = SizingAxis::grow();
        }
        let col = tree.find(ElementId::new("col")).unwrap();
        tree.append_child(col, text).unwrap();

        let sizes = compute_sizes(&tree, &measurer(), VIEWPORT);
        assert_eq!(sizes.size(text).width, 40.0);
        assert_eq!(sizes.text[text].lines.len(), 2);
        assert_eq!(sizes.size(text).height, 30.0);
        assert_eq!(sizes.size(col).height, 30.0);
    }

    #[test]
    fn test_image_keeps_aspect_ratio() {
        let mut ui = TreeBuilder::new();
        ui.image("natural", ImageData::new(1, 200.0, 100.0), LayoutConfig::new()).unwrap();
        ui.image(
            "scaled",
            ImageData::new(2, 200.0, 100.0),
            LayoutConfig::new().width(SizingAxis::fixed(50.0)),
        )
        .unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "natural"), Size::new(200.0, 100.0));
        assert_eq!(size_of(&tree, &sizes, "scaled"), Size::new(50.0, 25.0));
    }

    #[test]
    fn test_floating_takes_no_space_and_grows_to_target() {
        let mut ui = TreeBuilder::new();
        ui.open("row", ElementDecl::new(layout(SizingAxis::fit(), SizingAxis::fixed(40.0)))).unwrap();
        ui.open("a", ElementDecl::new(layout(SizingAxis::fixed(30.0), SizingAxis::fixed(10.0)))).unwrap();
        ui.close().unwrap();
        let popup = ElementDecl::new(layout(SizingAxis::percent(0.5), SizingAxis::grow()))
            .floating(FloatingConfig::attached(AttachTo::Root));
        ui.open("popup", popup).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let (tree, sizes) = sized(ui);
        assert_eq!(size_of(&tree, &sizes, "row").width, 30.0);
        assert_eq!(size_of(&tree, &sizes, "popup"), Size::new(500.0, 800.0));
    }

    #[test]
    fn test_sizing_is_deterministic() {
        let mut ui = TreeBuilder::new();
        ui.open("row", ElementDecl::new(layout(SizingAxis::fixed(333.0), SizingAxis::fixed(10.0)))).unwrap();
        for i in 0..3 {
            ui.open(ElementId::indexed("g", i), ElementDecl::new(layout(SizingAxis::grow(), SizingAxis::fit())))
                .unwrap();
            ui.close().unwrap();
        }
        ui.close().unwrap();
        let tree = ui.finish().unwrap();
        let first = compute_sizes(&tree, &measurer(), VIEWPORT);
        let second = compute_sizes(&tree, &measurer(), VIEWPORT);
        for (id, size) in first.sizes.iter() {
            assert_eq!(size.width.to_bits(), second.size(id).width.to_bits());
            assert_eq!(size.height.to_bits(), second.size(id).height.to_bits());
        }
    }
}
