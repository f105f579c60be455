//! Layout box representation.

use crate::config::{
    BackgroundConfig, BorderConfig, ClipConfig, ElementDecl, FloatingConfig, ImageData,
    LayoutConfig, TextConfig,
};
use crate::id::ElementId;
use slotmap::new_key_type;
use smallvec::SmallVec;

new_key_type! {
    /// Arena key of a layout box. Only meaningful within one tree.
    pub struct LayoutBoxId;
}

/// What a box holds.
#[derive(Clone, Debug, PartialEq)]
pub enum BoxContent {
    /// A container of child boxes.
    Container,
    /// A run of text; always a leaf.
    Text { content: String, config: TextConfig },
    /// An image; always a leaf.
    Image(ImageData),
}

/// A box in the layout tree.
#[derive(Clone, Debug)]
pub struct LayoutBox {
    /// Arena key.
    pub key: LayoutBoxId,
    /// Stable element id.
    pub id: ElementId,
    pub layout: LayoutConfig,
    pub content: BoxContent,
    pub background: Option<BackgroundConfig>,
    pub border: Option<BorderConfig>,
    pub clip: Option<ClipConfig>,
    pub floating: Option<FloatingConfig>,
    pub parent: Option<LayoutBoxId>,
    pub children: SmallVec<[LayoutBoxId; 8]>,
}

impl LayoutBox {
    pub fn container(key: LayoutBoxId, id: ElementId, decl: ElementDecl) -> Self {
        Self {
            key,
            id,
            layout: decl.layout,
            content: BoxContent::Container,
            background: decl.background,
            border: decl.border,
            clip: decl.clip,
            floating: decl.floating.filter(FloatingConfig::is_floating),
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn text(key: LayoutBoxId, id: ElementId, content: String, config: TextConfig) -> Self {
        let mut text_box = Self::container(key, id, ElementDecl::default());
        text_box.content = BoxContent::Text { content, config };
        text_box
    }

    pub fn image(key: LayoutBoxId, id: ElementId, image: ImageData, layout: LayoutConfig) -> Self {
        let mut image_box = Self::container(key, id, ElementDecl::new(layout));
        image_box.content = BoxContent::Image(image);
        image_box
    }

    /// Leaves cannot hold children.
    pub fn is_leaf(&self) -> bool {
        !matches!(self.content, BoxContent::Container)
    }

    /// Floating boxes are out of flow: they take no space in their parent.
    pub fn is_floating(&self) -> bool {
        self.floating.is_some()
    }
}
