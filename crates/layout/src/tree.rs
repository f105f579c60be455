//! Layout tree structure.

use crate::config::{ElementDecl, ImageData, LayoutConfig, TextConfig};
use crate::id::ElementId;
use crate::layout_box::{LayoutBox, LayoutBoxId};
use common::{UiError, UiResult};
use slotmap::SlotMap;
use std::collections::HashMap;

/// The declared element tree. Owns every box; boxes refer to each other by key.
///
/// A `LayoutTree` carries no geometry. Run it through
/// [`LayoutEngine::layout`](crate::engine::LayoutEngine::layout) to obtain a
/// [`LaidOutTree`](crate::engine::LaidOutTree).
#[derive(Clone, Debug, Default)]
pub struct LayoutTree {
    /// All layout boxes.
    boxes: SlotMap<LayoutBoxId, LayoutBox>,
    /// Root box.
    root: Option<LayoutBoxId>,
    /// Element id lookup.
    ids: HashMap<ElementId, LayoutBoxId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            boxes: SlotMap::with_key(),
            root: None,
            ids: HashMap::new(),
        }
    }

    /// Get root box.
    pub fn root(&self) -> Option<LayoutBoxId> {
        self.root
    }

    /// Set root box.
    pub fn set_root(&mut self, box_id: LayoutBoxId) {
        self.root = Some(box_id);
    }

    fn insert(
        &mut self,
        id: ElementId,
        make: impl FnOnce(LayoutBoxId) -> LayoutBox,
    ) -> UiResult<LayoutBoxId> {
        if self.ids.contains_key(&id) {
            return Err(UiError::DuplicateId(id.raw()));
        }
        let key = self.boxes.insert_with_key(make);
        self.ids.insert(id, key);
        Ok(key)
    }

    /// Create a container box.
    pub fn create_container(&mut self, id: ElementId, decl: ElementDecl) -> UiResult<LayoutBoxId> {
        decl.layout.validate()?;
        self.insert(id, |key| LayoutBox::container(key, id, decl))
    }

    /// Create a text box.
    pub fn create_text(
        &mut self,
        id: ElementId,
        content: impl Into<String>,
        config: TextConfig,
    ) -> UiResult<LayoutBoxId> {
        let content = content.into();
        self.insert(id, |key| LayoutBox::text(key, id, content, config))
    }

    /// Create an image box.
    pub fn create_image(
        &mut self,
        id: ElementId,
        image: ImageData,
        layout: LayoutConfig,
    ) -> UiResult<LayoutBoxId> {
        layout.validate()?;
        self.insert(id, |key| LayoutBox::image(key, id, image, layout))
    }

    /// Get a box by ID.
    pub fn get(&self, id: LayoutBoxId) -> Option<&LayoutBox> {
        self.boxes.get(id)
    }

    /// Get a mutable box by ID.
    pub fn get_mut(&mut self, id: LayoutBoxId) -> Option<&mut LayoutBox> {
        self.boxes.get_mut(id)
    }

    /// Find a box by element id.
    pub fn find(&self, id: ElementId) -> Option<LayoutBoxId> {
        self.ids.get(&id).copied()
    }

    /// Append child to parent.
    pub fn append_child(&mut self, parent: LayoutBoxId, child: LayoutBoxId) -> UiResult<()> {
        match self.boxes.get(parent) {
            None => return Err(UiError::tree("parent box does not exist")),
            Some(p) if p.is_leaf() => {
                return Err(UiError::tree(format!(
                    "{:?} is a text or image element and cannot have children",
                    p.id
                )))
            }
            Some(_) => {}
        }
        let child_box = self
            .boxes
            .get_mut(child)
            .ok_or_else(|| UiError::tree("child box does not exist"))?;
        if child_box.parent.is_some() || self.root == Some(child) || parent == child {
            return Err(UiError::tree(format!("{:?} already has a parent", child_box.id)));
        }
        child_box.parent = Some(parent);
        if let Some(parent_box) = self.boxes.get_mut(parent) {
            parent_box.children.push(child);
        }
        Ok(())
    }

    /// Get parent box.
    pub fn parent(&self, box_id: LayoutBoxId) -> Option<LayoutBoxId> {
        self.boxes.get(box_id).and_then(|b| b.parent)
    }

    /// Get children.
    pub fn children(&self, box_id: LayoutBoxId) -> impl Iterator<Item = LayoutBoxId> + '_ {
        self.boxes
            .get(box_id)
            .into_iter()
            .flat_map(|b| b.children.iter().copied())
    }

    /// Get all boxes.
    pub fn iter(&self) -> impl Iterator<Item = (LayoutBoxId, &LayoutBox)> {
        self.boxes.iter()
    }

    /// Get number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Check if tree is empty.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Boxes reachable from the root, parents before children.
    pub fn pre_order(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    /// Boxes reachable from the root, children before parents.
    pub fn post_order(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Clear the tree.
    pub fn clear(&mut self) {
        self.boxes.clear();
        self.ids.clear();
        self.root = None;
    }
}

/// Pre-order traversal; children are yielded in declaration order.
pub struct PreOrderIterator<'a> {
    tree: &'a LayoutTree,
    stack: Vec<LayoutBoxId>,
}

impl<'a> PreOrderIterator<'a> {
    pub fn new(tree: &'a LayoutTree) -> Self {
        let stack = tree.root().into_iter().collect();
        Self { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = LayoutBoxId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(layout_box) = self.tree.get(id) {
            // Add children in reverse order
            for &child in layout_box.children.iter().rev() {
                self.stack.push(child);
            }
        }
        Some(id)
    }
}

/// Post-order iterator.
pub struct PostOrderIterator<'a> {
    tree: &'a LayoutTree,
    stack: Vec<(LayoutBoxId, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    pub fn new(tree: &'a LayoutTree) -> Self {
        let stack = tree.root().map(|id| (id, false)).into_iter().collect();
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = LayoutBoxId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, visited) = self.stack.pop()?;

            if visited {
                return Some(id);
            }

            self.stack.push((id, true));

            if let Some(layout_box) = self.tree.get(id) {
                for &child in layout_box.children.iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (LayoutTree, [LayoutBoxId; 4]) {
        let mut tree = LayoutTree::new();
        let root = tree.create_container(ElementId::ROOT, ElementDecl::default()).unwrap();
        tree.set_root(root);
        let a = tree.create_container(ElementId::new("a"), ElementDecl::default()).unwrap();
        let b = tree.create_container(ElementId::new("b"), ElementDecl::default()).unwrap();
        let c = tree
            .create_text(ElementId::new("c"), "text", TextConfig::default())
            .unwrap();
        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();
        tree.append_child(a, c).unwrap();
        (tree, [root, a, b, c])
    }

    #[test]
    fn test_layout_tree() {
        let (tree, [root, a, _, c]) = sample();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.find(ElementId::new("c")), Some(c));
    }

    #[test]
    fn test_traversal_orders() {
        let (tree, [root, a, b, c]) = sample();
        assert_eq!(tree.pre_order().collect::<Vec<_>>(), vec![root, a, c, b]);
        assert_eq!(tree.post_order().collect::<Vec<_>>(), vec![c, a, b, root]);
    }

    #[test]
    fn test_leaf_rejects_children() {
        let (mut tree, [_, _, _, c]) = sample();
        let d = tree.create_container(ElementId::new("d"), ElementDecl::default()).unwrap();
        assert!(matches!(tree.append_child(c, d), Err(UiError::Tree(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let (mut tree, _) = sample();
        let err = tree
            .create_container(ElementId::new("a"), ElementDecl::default())
            .unwrap_err();
        assert_eq!(err, UiError::DuplicateId(ElementId::new("a").raw()));
    }

    #[test]
    fn test_reparenting_rejected() {
        let (mut tree, [_, a, b, _]) = sample();
        assert!(tree.append_child(a, b).is_err());
    }
}
