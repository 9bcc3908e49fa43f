//! Scalar and vector types shared by every layout pass.

/// The numeric type used for every coordinate, size, and margin.
///
/// The reference implementation allows swapping this for a fixed-point or
/// integer type at compile time; this port fixes it to `f32` and leaves the
/// door open for a future feature-gated alternative without touching any
/// other module, since all axis access goes through [`Axis`] indexing rather
/// than field names.
pub type Scalar = f32;

/// Which of the two layout axes a pass currently operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    pub const fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A 2-component vector indexed by [`Axis`]: `[x, y]`.
pub type Vec2 = [Scalar; 2];

/// A box-model inset or rectangle, always 4 components.
///
/// Two distinct index conventions are used depending on what the Vec4
/// represents, matching the data model exactly:
/// - Box-model insets (margin/padding/border): `LEFT=0, TOP=1, RIGHT=2, BOTTOM=3`.
/// - Rectangles: `X=0, Y=1, W=2, H=3`.
pub type Vec4 = [Scalar; 4];

pub const LEFT: usize = 0;
pub const TOP: usize = 1;
pub const RIGHT: usize = 2;
pub const BOTTOM: usize = 3;

pub const RECT_X: usize = 0;
pub const RECT_Y: usize = 1;
pub const RECT_W: usize = 2;
pub const RECT_H: usize = 3;

/// Leading inset on `axis` (left for X, top for Y).
pub fn leading(insets: Vec4, axis: Axis) -> Scalar {
    match axis {
        Axis::X => insets[LEFT],
        Axis::Y => insets[TOP],
    }
}

/// Trailing inset on `axis` (right for X, bottom for Y).
pub fn trailing(insets: Vec4, axis: Axis) -> Scalar {
    match axis {
        Axis::X => insets[RIGHT],
        Axis::Y => insets[BOTTOM],
    }
}

/// Position component of a rect on `axis`.
pub fn rect_pos(rect: Vec4, axis: Axis) -> Scalar {
    match axis {
        Axis::X => rect[RECT_X],
        Axis::Y => rect[RECT_Y],
    }
}

/// Size component of a rect on `axis`.
pub fn rect_size(rect: Vec4, axis: Axis) -> Scalar {
    match axis {
        Axis::X => rect[RECT_W],
        Axis::Y => rect[RECT_H],
    }
}

pub fn set_rect_pos(rect: &mut Vec4, axis: Axis, value: Scalar) {
    match axis {
        Axis::X => rect[RECT_X] = value,
        Axis::Y => rect[RECT_Y] = value,
    }
}

pub fn set_rect_size(rect: &mut Vec4, axis: Axis, value: Scalar) {
    match axis {
        Axis::X => rect[RECT_W] = value,
        Axis::Y => rect[RECT_H] = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_cross_is_involutive() {
        assert_eq!(Axis::X.cross(), Axis::Y);
        assert_eq!(Axis::Y.cross(), Axis::X);
        assert_eq!(Axis::X.cross().cross(), Axis::X);
    }

    #[test]
    fn trbl_indices_match_spec_order() {
        let insets: Vec4 = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(leading(insets, Axis::X), 1.0);
        assert_eq!(leading(insets, Axis::Y), 2.0);
        assert_eq!(trailing(insets, Axis::X), 3.0);
        assert_eq!(trailing(insets, Axis::Y), 4.0);
    }

    #[test]
    fn rect_accessors_roundtrip() {
        let mut rect: Vec4 = [0.0; 4];
        set_rect_pos(&mut rect, Axis::X, 10.0);
        set_rect_size(&mut rect, Axis::Y, 20.0);
        assert_eq!(rect_pos(rect, Axis::X), 10.0);
        assert_eq!(rect_size(rect, Axis::Y), 20.0);
    }
}
