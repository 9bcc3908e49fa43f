//! Style enums and the packed boolean item-state flags.
//!
//! The enum-valued style groups (display, direction, wrap, justify, the
//! three alignment axes) are plain Rust enums rather than bit ranges inside
//! one `u32` — the reference source packs them for density, but that packing
//! is explicitly not part of the contract (see `SPEC_FULL.md` §9). The
//! boolean markers (inserted, fixed-size, forced line break, scrollbar
//! presence) are true independent bits and stay packed via `bitflags`,
//! mirroring how this crate already packs terminal cell attributes.

bitflags::bitflags! {
    /// Boolean item state, independent of any enum-valued style group.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ItemFlags: u32 {
        const NONE = 0;
        /// Set once the item is linked into a tree via prepend/append/insert_after.
        const INSERTED = 1 << 0;
        /// Width was set explicitly (non-zero); calc pass must not recompute it.
        const SIZE_FIXED_WIDTH = 1 << 1;
        /// Height was set explicitly (non-zero); calc pass must not recompute it.
        const SIZE_FIXED_HEIGHT = 1 << 2;
        /// Forces (or records) a line break before this item in wrapped layouts.
        const BREAK = 1 << 3;
        const HAS_VSCROLLBAR = 1 << 4;
        const HAS_HSCROLLBAR = 1 << 5;
    }
}

/// How an item's children are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Flex,
    Block,
    Inline,
    InlineBlock,
}

impl Display {
    /// Flex participates in the four-strategy calc table and the
    /// stacked/overlay arrange routines driven by `flex_direction`. Block and
    /// inline route through the same routines with an implied direction
    /// (see `SPEC_FULL.md` §4.8).
    pub fn is_flex(self) -> bool {
        matches!(self, Display::Flex)
    }
}

/// Main-axis identity and direction for flex containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn main_axis(self) -> crate::geom::Axis {
        match self {
            FlexDirection::Row | FlexDirection::RowReverse => crate::geom::Axis::X,
            FlexDirection::Column | FlexDirection::ColumnReverse => crate::geom::Axis::Y,
        }
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
}

impl FlexWrap {
    pub fn wraps(self) -> bool {
        matches!(self, FlexWrap::Wrap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    FlexStart,
    Center,
    FlexEnd,
    #[default]
    Stretch,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignContent {
    FlexStart,
    Center,
    FlexEnd,
    #[default]
    Stretch,
    Baseline,
}

/// Per-child override of the container's `align-items`. `Auto` defers to the
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignSelf {
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
    Baseline,
}

impl AlignSelf {
    /// Resolve against a container's `align-items`, honouring `Auto`.
    pub fn resolve(self, container: AlignItems) -> AlignItems {
        match self {
            AlignSelf::Auto => container,
            AlignSelf::FlexStart => AlignItems::FlexStart,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::FlexEnd => AlignItems::FlexEnd,
            AlignSelf::Stretch => AlignItems::Stretch,
            AlignSelf::Baseline => AlignItems::Baseline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
}

impl Overflow {
    pub fn is_visible(self) -> bool {
        matches!(self, Overflow::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_self_auto_defers_to_container() {
        assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
        assert_eq!(AlignSelf::FlexEnd.resolve(AlignItems::Center), AlignItems::FlexEnd);
    }

    #[test]
    fn flex_direction_main_axis() {
        assert_eq!(FlexDirection::Row.main_axis(), crate::geom::Axis::X);
        assert_eq!(FlexDirection::Column.main_axis(), crate::geom::Axis::Y);
    }

    #[test]
    fn item_flags_pack_independently() {
        let f = ItemFlags::INSERTED | ItemFlags::BREAK;
        assert!(f.contains(ItemFlags::INSERTED));
        assert!(f.contains(ItemFlags::BREAK));
        assert!(!f.contains(ItemFlags::SIZE_FIXED_WIDTH));
    }
}
