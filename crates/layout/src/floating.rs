//! Placement of floating (out-of-flow) elements.

use crate::config::{AttachPoint, AttachTo, FloatingConfig};
use common::{Point, Rect, Size};

impl AttachPoint {
    /// Horizontal factor of the anchor: 0 for left, 0.5 for center, 1 for right.
    fn x_factor(self) -> f32 {
        match self {
            AttachPoint::LeftTop | AttachPoint::LeftCenter | AttachPoint::LeftBottom => 0.0,
            AttachPoint::CenterTop | AttachPoint::CenterCenter | AttachPoint::CenterBottom => 0.5,
            AttachPoint::RightTop | AttachPoint::RightCenter | AttachPoint::RightBottom => 1.0,
        }
    }

    fn y_factor(self) -> f32 {
        match self {
            AttachPoint::LeftTop | AttachPoint::CenterTop | AttachPoint::RightTop => 0.0,
            AttachPoint::LeftCenter | AttachPoint::CenterCenter | AttachPoint::RightCenter => 0.5,
            AttachPoint::LeftBottom | AttachPoint::CenterBottom | AttachPoint::RightBottom => 1.0,
        }
    }

    /// Coordinates of this anchor on `rect`.
    pub fn resolve(self, rect: Rect) -> Point {
        Point::new(
            rect.x + rect.width * self.x_factor(),
            rect.y + rect.height * self.y_factor(),
        )
    }
}

/// Top-left corner of a floating element of size `dims`.
///
/// `parent_box` is the box the element attaches to when `attach_to` is
/// `Parent` or `Element` (the caller resolves which box that is);
/// `root_box` is used for `Root`. Returns `None` for elements that are not
/// floating.
pub fn calculate_floating_position(
    config: &FloatingConfig,
    dims: Size,
    parent_box: Rect,
    root_box: Rect,
) -> Option<Point> {
    let target = match config.attach_to {
        AttachTo::None => return None,
        AttachTo::Parent | AttachTo::Element(_) => parent_box,
        AttachTo::Root => root_box,
    };
    let target_attach = config.parent_point.resolve(target);
    let element_attach = config
        .element_point
        .resolve(Rect::from_origin_size(Point::ZERO, dims));
    Some(target_attach - element_attach + config.offset)
}

/// Final box of a floating element: placed at `origin`, then grown outward by
/// the configured `expand` on each side.
pub fn floating_box(config: &FloatingConfig, origin: Point, dims: Size) -> Rect {
    Rect::from_origin_size(origin, dims).inflate(config.expand.width, config.expand.height)
}
