//! Render commands handed to the caller's renderer.

use common::{Color, CornerRadius, Rect};
use layout::{BorderWidth, ClipAxes, ElementId};

/// Draw commands for one frame, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderCommandList {
    commands: Vec<RenderCommand>,
}

impl RenderCommandList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Stable sort by ascending z-index. Commands with equal z keep their
    /// emission order, so clip pairs of one layer stay nested.
    pub fn sort_by_z(&mut self) {
        self.commands.sort_by_key(|c| c.z_index);
    }
}

impl IntoIterator for RenderCommandList {
    type Item = RenderCommand;
    type IntoIter = std::vec::IntoIter<RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a RenderCommandList {
    type Item = &'a RenderCommand;
    type IntoIter = std::slice::Iter<'a, RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// A single render command.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderCommand {
    /// Element the command was generated for.
    pub id: ElementId,
    pub bounds: Rect,
    pub z_index: i16,
    pub kind: RenderCommandKind,
}

impl RenderCommand {
    pub fn new(id: ElementId, bounds: Rect, z_index: i16, kind: RenderCommandKind) -> Self {
        Self {
            id,
            bounds,
            z_index,
            kind,
        }
    }

    pub fn is_clip(&self) -> bool {
        matches!(
            self.kind,
            RenderCommandKind::ClipBegin(_) | RenderCommandKind::ClipEnd
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommandKind {
    /// Fill the bounds.
    Rectangle(RectangleCommand),
    /// Stroke the inside edges of the bounds.
    Border(BorderCommand),
    /// One laid-out line of text; the bounds cover that line.
    Text(TextCommand),
    Image(ImageCommand),
    /// Start clipping subsequent commands to the bounds.
    ClipBegin(ClipAxes),
    /// Stop the clip started by the matching `ClipBegin`.
    ClipEnd,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangleCommand {
    pub color: Color,
    pub corner_radius: CornerRadius,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderCommand {
    pub color: Color,
    pub width: BorderWidth,
    pub corner_radius: CornerRadius,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextCommand {
    pub content: String,
    pub font_id: u16,
    pub font_size: u16,
    pub letter_spacing: u16,
    pub line_height: f32,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageCommand {
    /// Caller's handle for the image.
    pub key: u64,
    pub corner_radius: CornerRadius,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(z_index: i16, kind: RenderCommandKind) -> RenderCommand {
        RenderCommand::new(ElementId::new("x"), Rect::ZERO, z_index, kind)
    }

    #[test]
    fn test_sort_by_z_is_stable() {
        let mut list = RenderCommandList::new();
        list.push(command(3, RenderCommandKind::ClipEnd));
        list.push(command(0, RenderCommandKind::ClipBegin(ClipAxes::all())));
        list.push(command(3, RenderCommandKind::ClipBegin(ClipAxes::HORIZONTAL)));
        list.push(command(0, RenderCommandKind::ClipEnd));
        list.sort_by_z();

        let kinds: Vec<_> = list.iter().map(|c| (c.z_index, c.kind.clone())).collect();
        assert_eq!(
            kinds,
            vec![
                (0, RenderCommandKind::ClipBegin(ClipAxes::all())),
                (0, RenderCommandKind::ClipEnd),
                (3, RenderCommandKind::ClipEnd),
                (3, RenderCommandKind::ClipBegin(ClipAxes::HORIZONTAL)),
            ]
        );
    }

    #[test]
    fn test_is_clip() {
        assert!(command(0, RenderCommandKind::ClipEnd).is_clip());
        let rect = RenderCommandKind::Rectangle(RectangleCommand {
            color: Color::WHITE,
            corner_radius: CornerRadius::ZERO,
        });
        assert!(!command(0, rect).is_clip());
    }
}
