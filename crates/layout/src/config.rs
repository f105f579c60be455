//! Per-element configuration: sizing, direction, alignment and decorations.

use crate::id::ElementId;
use bitflags::bitflags;
use common::{Axis, Color, CornerRadius, Padding, Point, Size, UiError, UiResult};

/// How an element's size along one axis is determined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizingKind {
    /// Wrap the content (children or intrinsic size).
    #[default]
    Fit,
    /// Start at `min` and take a share of the parent's leftover space.
    Grow,
    /// A fraction of the parent's content box.
    Percent,
    /// Exactly `value`.
    Fixed,
}

/// Sizing rule for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizingAxis {
    pub kind: SizingKind,
    /// Pixel size for `Fixed`, fraction in `[0, 1]` for `Percent`, unused otherwise.
    pub value: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for SizingAxis {
    fn default() -> Self {
        Self::fit()
    }
}

impl SizingAxis {
    const fn with_kind(kind: SizingKind, value: f32) -> Self {
        Self {
            kind,
            value,
            min: 0.0,
            max: f32::MAX,
        }
    }

    pub const fn fit() -> Self {
        Self::with_kind(SizingKind::Fit, 0.0)
    }

    pub const fn grow() -> Self {
        Self::with_kind(SizingKind::Grow, 0.0)
    }

    pub const fn fixed(value: f32) -> Self {
        Self::with_kind(SizingKind::Fixed, value)
    }

    /// `fraction` of the parent's content size, e.g. `0.5` for half.
    pub const fn percent(fraction: f32) -> Self {
        Self::with_kind(SizingKind::Percent, fraction)
    }

    pub const fn min(mut self, min: f32) -> Self {
        self.min = min;
        self
    }

    pub const fn max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Reject rules no layout could satisfy.
    pub fn validate(&self) -> UiResult<()> {
        if self.min.is_nan() || self.max.is_nan() || self.value.is_nan() {
            return Err(UiError::invalid_sizing("NaN in sizing rule"));
        }
        if self.min < 0.0 {
            return Err(UiError::invalid_sizing(format!("negative min {}", self.min)));
        }
        if self.min > self.max {
            return Err(UiError::invalid_sizing(format!(
                "min {} > max {}",
                self.min, self.max
            )));
        }
        match self.kind {
            SizingKind::Fixed if self.value < 0.0 => Err(UiError::invalid_sizing(format!(
                "negative fixed size {}",
                self.value
            ))),
            SizingKind::Percent if !(0.0..=1.0).contains(&self.value) => Err(
                UiError::invalid_sizing(format!("percent {} outside [0, 1]", self.value)),
            ),
            _ => Ok(()),
        }
    }
}

/// Sizing rules for both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sizing {
    pub width: SizingAxis,
    pub height: SizingAxis,
}

impl Sizing {
    pub const fn new(width: SizingAxis, height: SizingAxis) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> &SizingAxis {
        match axis {
            Axis::Horizontal => &self.width,
            Axis::Vertical => &self.height,
        }
    }
}

/// Direction children are laid out in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    TopToBottom,
}

impl LayoutDirection {
    #[inline]
    pub fn main_axis(self) -> Axis {
        match self {
            LayoutDirection::LeftToRight => Axis::Horizontal,
            LayoutDirection::TopToBottom => Axis::Vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlignX {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlignY {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Placement of children inside a container's content box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChildAlignment {
    pub x: AlignX,
    pub y: AlignY,
}

impl ChildAlignment {
    pub const fn new(x: AlignX, y: AlignY) -> Self {
        Self { x, y }
    }

    /// Offset of an item inside `free` space along `axis`.
    pub fn offset(&self, axis: Axis, free: f32) -> f32 {
        let factor = match axis {
            Axis::Horizontal => match self.x {
                AlignX::Left => 0.0,
                AlignX::Center => 0.5,
                AlignX::Right => 1.0,
            },
            Axis::Vertical => match self.y {
                AlignY::Top => 0.0,
                AlignY::Center => 0.5,
                AlignY::Bottom => 1.0,
            },
        };
        free * factor
    }
}

/// Box layout configuration of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutConfig {
    pub sizing: Sizing,
    pub padding: Padding,
    pub child_gap: u16,
    pub child_alignment: ChildAlignment,
    pub direction: LayoutDirection,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: SizingAxis) -> Self {
        self.sizing.width = width;
        self
    }

    pub fn height(mut self, height: SizingAxis) -> Self {
        self.sizing.height = height;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.child_gap = gap;
        self
    }

    pub fn align(mut self, x: AlignX, y: AlignY) -> Self {
        self.child_alignment = ChildAlignment::new(x, y);
        self
    }

    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    pub fn main_axis(&self) -> Axis {
        self.direction.main_axis()
    }

    pub fn validate(&self) -> UiResult<()> {
        self.sizing.width.validate()?;
        self.sizing.height.validate()
    }
}

/// Filled background behind an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BackgroundConfig {
    pub color: Color,
    pub corner_radius: CornerRadius,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderWidth {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl BorderWidth {
    pub const fn all(width: u16) -> Self {
        Self {
            top: width,
            right: width,
            bottom: width,
            left: width,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderConfig {
    pub color: Color,
    pub width: BorderWidth,
    pub corner_radius: CornerRadius,
}

bitflags! {
    /// Axes along which a container clips its content.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ClipAxes: u8 {
        const HORIZONTAL = 1;
        const VERTICAL = 1 << 1;
    }
}

/// Clips descendants to the element's box; `child_offset` scrolls them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipConfig {
    pub axes: ClipAxes,
    pub child_offset: Point,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            axes: ClipAxes::all(),
            child_offset: Point::ZERO,
        }
    }
}

/// Named anchor on a box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttachPoint {
    #[default]
    LeftTop,
    LeftCenter,
    LeftBottom,
    CenterTop,
    CenterCenter,
    CenterBottom,
    RightTop,
    RightCenter,
    RightBottom,
}

/// What a floating element is positioned against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttachTo {
    /// Not floating: the element stays in normal flow.
    #[default]
    None,
    Parent,
    Root,
    Element(ElementId),
}

/// Whether a floating subtree inherits its parent's clipping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipTo {
    #[default]
    None,
    AttachedParent,
}

/// Whether pointer hits on a floating subtree hide the layers beneath it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerCapture {
    #[default]
    Capture,
    Passthrough,
}

/// Out-of-flow placement of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatingConfig {
    pub attach_to: AttachTo,
    pub element_point: AttachPoint,
    pub parent_point: AttachPoint,
    pub offset: Point,
    /// Grows the placed box outward by this much on each side.
    pub expand: Size,
    pub z_index: i16,
    pub clip_to: ClipTo,
    pub pointer_capture: PointerCapture,
}

impl FloatingConfig {
    pub fn attached(attach_to: AttachTo) -> Self {
        Self {
            attach_to,
            ..Self::default()
        }
    }

    pub fn points(mut self, element_point: AttachPoint, parent_point: AttachPoint) -> Self {
        self.element_point = element_point;
        self.parent_point = parent_point;
        self
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Point::new(x, y);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn expand(mut self, width: f32, height: f32) -> Self {
        self.expand = Size::new(width, height);
        self
    }

    pub fn clip_to(mut self, clip_to: ClipTo) -> Self {
        self.clip_to = clip_to;
        self
    }

    pub fn passthrough(mut self) -> Self {
        self.pointer_capture = PointerCapture::Passthrough;
        self
    }

    #[inline]
    pub fn is_floating(&self) -> bool {
        self.attach_to != AttachTo::None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextWrap {
    /// Break lines at word boundaries and at newlines.
    #[default]
    Words,
    /// Break only at explicit newlines.
    Newlines,
    /// Never break; newlines stay in the single line.
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font and paint settings of a text element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextConfig {
    pub font_id: u16,
    pub font_size: u16,
    pub letter_spacing: u16,
    /// Line advance in pixels; 0 uses the measured height.
    pub line_height: u16,
    pub color: Color,
    pub wrap: TextWrap,
    pub align: TextAlign,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_id: 0,
            font_size: 16,
            letter_spacing: 0,
            line_height: 0,
            color: Color::BLACK,
            wrap: TextWrap::Words,
            align: TextAlign::Left,
        }
    }
}

impl TextConfig {
    pub fn font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    pub fn line_height(mut self, height: u16) -> Self {
        self.line_height = height;
        self
    }

    pub fn wrap(mut self, wrap: TextWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Opaque image handle plus its natural size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageData {
    pub key: u64,
    pub intrinsic: Size,
}

impl ImageData {
    pub const fn new(key: u64, width: f32, height: f32) -> Self {
        Self {
            key,
            intrinsic: Size::new(width, height),
        }
    }

    /// Height over width, if the image has a usable width.
    pub fn aspect(&self) -> Option<f32> {
        (self.intrinsic.width > 0.0).then(|| self.intrinsic.height / self.intrinsic.width)
    }
}

/// Everything that can be declared on a container element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementDecl {
    pub layout: LayoutConfig,
    pub background: Option<BackgroundConfig>,
    pub border: Option<BorderConfig>,
    pub clip: Option<ClipConfig>,
    pub floating: Option<FloatingConfig>,
}

impl ElementDecl {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(BackgroundConfig {
            color,
            corner_radius: CornerRadius::ZERO,
        });
        self
    }

    pub fn border(mut self, color: Color, width: BorderWidth) -> Self {
        self.border = Some(BorderConfig {
            color,
            width,
            corner_radius: CornerRadius::ZERO,
        });
        self
    }

    pub fn clip(mut self, clip: ClipConfig) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn floating(mut self, floating: FloatingConfig) -> Self {
        self.floating = Some(floating);
        self
    }
}
