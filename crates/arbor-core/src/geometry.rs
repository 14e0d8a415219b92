//! Points, sizes and rectangles in diagram space.
//!
//! Coordinates follow SVG: `x` grows to the right and `y` grows downward.
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Tree nodes are anchored at their top-left corner. A node placed at
//! `(x, y)` with size `(w, h)` covers `(x, y)` to `(x + w, y + h)`.

/// A position in diagram space.
///
/// ```
/// # use arbor_core::geometry::{Point, Size};
/// let node = Point::new(40.0, 40.0).to_bounds(Size::new(60.0, 20.0));
/// assert_eq!(node.max_x(), 100.0);
/// assert_eq!(node.max_y(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// The rectangle of `size` whose top-left corner is this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds {
            min: self,
            max: Point::new(self.x + size.width, self.y + size.height),
        }
    }
}

/// Width and height of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Same height, different width.
    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    /// Grows the size by the insets on every side.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }
}

/// An axis-aligned rectangle given by its two extreme corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    pub fn min_x(self) -> f32 {
        self.min.x
    }

    pub fn min_y(self) -> f32 {
        self.min.y
    }

    pub fn max_x(self) -> f32 {
        self.max.x
    }

    pub fn max_y(self) -> f32 {
        self.max.y
    }

    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Top-left corner.
    pub fn min_point(self) -> Point {
        self.min
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Space kept free inside a box, per side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Insets in CSS order: top, right, bottom, left.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` above and below, `horizontal` left and right.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_to_bounds_is_top_left_anchored() {
        let bounds = Point::new(40.0, 40.0).to_bounds(Size::new(60.0, 20.0));
        assert_eq!(bounds.min_point(), Point::new(40.0, 40.0));
        assert_approx_eq!(f32, bounds.max_x(), 100.0);
        assert_approx_eq!(f32, bounds.max_y(), 60.0);
        assert_eq!(bounds.to_size(), Size::new(60.0, 20.0));
    }

    #[test]
    fn test_add_padding() {
        let size = Size::new(50.0, 20.0).add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_approx_eq!(f32, size.width(), 56.0);
        assert_approx_eq!(f32, size.height(), 24.0);
    }

    #[test]
    fn test_with_width_keeps_height() {
        assert_eq!(
            Size::new(50.0, 20.0).with_width(80.0),
            Size::new(80.0, 20.0)
        );
    }

    #[test]
    fn test_symmetric_insets() {
        let insets = Insets::symmetric(2.0, 6.0);
        assert_approx_eq!(f32, insets.top(), 2.0);
        assert_approx_eq!(f32, insets.right(), 6.0);
        assert_approx_eq!(f32, insets.horizontal_sum(), 12.0);
        assert_approx_eq!(f32, insets.vertical_sum(), 4.0);
        assert_eq!(Insets::uniform(3.0), Insets::new(3.0, 3.0, 3.0, 3.0));
    }
}
