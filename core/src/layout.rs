//! Geometry and the two-phase measurement contract.
//!
//! All values are logical points. Hosts scale to physical pixels with their
//! display density.

use core::fmt::Debug;

use alloc::vec::Vec;

/// A child as seen by a [`Layout`] while it measures.
///
/// A layout may ask the same child several times with different proposals;
/// `ProposalSize::UNSPECIFIED` asks for the ideal size. Answers must not
/// depend on anything but the proposal.
pub trait SubView {
    /// Size the child would take for `proposal`.
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;
}

/// Arranges children in two passes.
///
/// [`size_that_fits`](Self::size_that_fits) answers how large the container
/// wants to be for a proposal; [`place`](Self::place) then hands out one
/// frame per child inside the final bounds.
pub trait Layout: Debug {
    /// Size the container wants for `proposal`.
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// One rect per child, in child order.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// A rect at `origin` with `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// A rect from its left, top, width and height.
    #[must_use]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Left edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Left edge.
    #[must_use]
    pub const fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Top edge.
    #[must_use]
    pub const fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Right edge.
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Whether `point` lies inside. Left and top edges are inclusive, right
    /// and bottom exclusive, so adjacent cells never both claim a point.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Shrinks each edge inward. The size never goes negative.
    #[must_use]
    pub fn inset(&self, top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self::from_xywh(
            self.origin.x + leading,
            self.origin.y + top,
            (self.size.width - leading - trailing).max(0.0),
            (self.size.height - top - bottom).max(0.0),
        )
    }

    /// Shrinks every edge by `amount`.
    #[must_use]
    pub fn inset_all(&self, amount: f32) -> Self {
        self.inset(amount, amount, amount, amount)
    }
}

/// Width and height in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// A size of `width` by `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The empty size.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A position in the coordinate space of the host's frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// A point at `x`, `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What a parent offers a child while measuring.
///
/// `None` in a dimension asks for the child's ideal extent; `Some` suggests
/// one. Children may answer with any size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposalSize {
    /// Suggested width, if any.
    pub width: Option<f32>,
    /// Suggested height, if any.
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Asks for the ideal size in both dimensions.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// A proposal from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_origin_and_size() {
        let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 70.0);
    }

    #[test]
    fn inset_shrinks_and_clamps() {
        let rect = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);

        assert_eq!(
            rect.inset(10.0, 10.0, 20.0, 20.0),
            Rect::from_xywh(20.0, 10.0, 60.0, 80.0)
        );

        let collapsed = Rect::from_xywh(0.0, 0.0, 6.0, 6.0).inset_all(4.0);
        assert_eq!(collapsed.width(), 0.0);
        assert_eq!(collapsed.height(), 0.0);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);

        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.9, 9.9)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, -0.1)));
    }

    #[test]
    fn proposal_accepts_plain_and_optional_values() {
        assert_eq!(
            ProposalSize::new(100.0, None),
            ProposalSize {
                width: Some(100.0),
                height: None,
            }
        );
        assert_eq!(ProposalSize::new(None, None), ProposalSize::UNSPECIFIED);
    }
}
