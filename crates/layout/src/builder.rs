//! Immediate-mode tree declaration.
//!
//! Callers describe their UI every frame by opening and closing elements in
//! document order:
//!
//! ```ignore
//! let mut ui = TreeBuilder::new();
//! ui.open("sidebar", ElementDecl::new(LayoutConfig::new().width(SizingAxis::fixed(200.0))))?;
//! ui.text(None, "Inbox", TextConfig::default())?;
//! ui.close()?;
//! let tree = ui.finish()?;
//! ```

use crate::config::{ElementDecl, ImageData, LayoutConfig, TextConfig};
use crate::id::ElementId;
use crate::layout_box::LayoutBoxId;
use crate::tree::LayoutTree;
use common::{UiError, UiResult};
use tracing::debug;

/// Anything that can name an element: a name, an explicit id, or nothing.
pub trait IntoElementId {
    fn into_element_id(self) -> Option<ElementId>;
}

impl IntoElementId for ElementId {
    fn into_element_id(self) -> Option<ElementId> {
        Some(self)
    }
}

impl IntoElementId for Option<ElementId> {
    fn into_element_id(self) -> Option<ElementId> {
        self
    }
}

impl IntoElementId for &str {
    fn into_element_id(self) -> Option<ElementId> {
        Some(ElementId::new(self))
    }
}

/// Builds a [`LayoutTree`] from open/close calls.
pub struct TreeBuilder {
    tree: LayoutTree,
    open: Vec<LayoutBoxId>,
}

impl TreeBuilder {
    /// Start a tree whose root lays children out left to right.
    pub fn new() -> Self {
        Self::with_root(ElementDecl::default())
    }

    /// Start a tree with an explicit root declaration. The root is always
    /// sized to the viewport, whatever its sizing rules say.
    pub fn with_root(decl: ElementDecl) -> Self {
        let mut tree = LayoutTree::new();
        let mut decl = decl;
        decl.floating = None;
        // The root id is reserved, so this cannot collide; fall back to an
        // empty tree rather than panic.
        let open = match tree.create_container(ElementId::ROOT, decl) {
            Ok(root) => {
                tree.set_root(root);
                vec![root]
            }
            Err(_) => Vec::new(),
        };
        Self { tree, open }
    }

    fn current(&self) -> UiResult<LayoutBoxId> {
        self.open
            .last()
            .copied()
            .ok_or_else(|| UiError::tree("no open element"))
    }

    fn resolve_id(&self, id: Option<ElementId>, parent: LayoutBoxId) -> ElementId {
        id.unwrap_or_else(|| {
            let (parent_id, index) = self
                .tree
                .get(parent)
                .map(|p| (p.id, p.children.len() as u32))
                .unwrap_or((ElementId::ROOT, 0));
            ElementId::child_of(parent_id, index)
        })
    }

    /// Open a container as the last child of the current element.
    pub fn open(&mut self, id: impl IntoElementId, decl: ElementDecl) -> UiResult<ElementId> {
        let parent = self.current()?;
        let id = self.resolve_id(id.into_element_id(), parent);
        let key = self.tree.create_container(id, decl)?;
        self.tree.append_child(parent, key)?;
        self.open.push(key);
        Ok(id)
    }

    /// Close the most recently opened container.
    pub fn close(&mut self) -> UiResult<()> {
        if self.open.len() <= 1 {
            return Err(UiError::tree("close() without a matching open()"));
        }
        self.open.pop();
        Ok(())
    }

    /// Add a text leaf to the current element.
    pub fn text(
        &mut self,
        id: impl IntoElementId,
        content: impl Into<String>,
        config: TextConfig,
    ) -> UiResult<ElementId> {
        let parent = self.current()?;
        let id = self.resolve_id(id.into_element_id(), parent);
        let key = self.tree.create_text(id, content, config)?;
        self.tree.append_child(parent, key)?;
        Ok(id)
    }

    /// Add an image leaf to the current element.
    pub fn image(
        &mut self,
        id: impl IntoElementId,
        image: ImageData,
        layout: LayoutConfig,
    ) -> UiResult<ElementId> {
        let parent = self.current()?;
        let id = self.resolve_id(id.into_element_id(), parent);
        let key = self.tree.create_image(id, image, layout)?;
        self.tree.append_child(parent, key)?;
        Ok(id)
    }

    /// Number of elements declared so far, root included.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Finish the frame's declaration.
    pub fn finish(self) -> UiResult<LayoutTree> {
        match self.open.len() {
            0 => Err(UiError::tree("tree has no root")),
            1 => {
                debug!(elements = self.tree.len(), "tree declared");
                Ok(self.tree)
            }
            n => Err(UiError::tree(format!("{} element(s) left open", n - 1))),
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizingAxis;

    #[test]
    fn test_nested_declaration() {
        let mut ui = TreeBuilder::new();
        ui.open("outer", ElementDecl::default()).unwrap();
        ui.open("inner", ElementDecl::default()).unwrap();
        ui.text(None, "hello", TextConfig::default()).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();
        let tree = ui.finish().unwrap();

        let outer = tree.find(ElementId::new("outer")).unwrap();
        let inner = tree.find(ElementId::new("inner")).unwrap();
        assert_eq!(tree.parent(outer), tree.root());
        assert_eq!(tree.parent(inner), Some(outer));
        assert_eq!(tree.children(inner).count(), 1);
    }

    #[test]
    fn test_anonymous_ids_are_positional() {
        let mut ui = TreeBuilder::new();
        ui.open("list", ElementDecl::default()).unwrap();
        let first = ui.open(None, ElementDecl::default()).unwrap();
        ui.close().unwrap();
        let second = ui.open(None, ElementDecl::default()).unwrap();
        ui.close().unwrap();
        ui.close().unwrap();

        assert_eq!(first, ElementId::child_of(ElementId::new("list"), 0));
        assert_eq!(second, ElementId::child_of(ElementId::new("list"), 1));
    }

    #[test]
    fn test_unbalanced_close() {
        let mut ui = TreeBuilder::new();
        assert!(ui.close().is_err());
    }

    #[test]
    fn test_unclosed_element() {
        let mut ui = TreeBuilder::new();
        ui.open("a", ElementDecl::default()).unwrap();
        assert!(matches!(ui.finish(), Err(UiError::Tree(_))));
    }

    #[test]
    fn test_invalid_sizing_rejected() {
        let mut ui = TreeBuilder::new();
        let decl = ElementDecl::new(LayoutConfig::new().width(SizingAxis::grow().min(5.0).max(1.0)));
        assert!(matches!(ui.open("bad", decl), Err(UiError::InvalidSizing(_))));
    }
}
