//! The per-item record and its book-keeping.

use std::any::Any;
use std::rc::Rc;

use crate::flags::{AlignContent, AlignItems, AlignSelf, Display, FlexDirection, FlexWrap, ItemFlags, Justify, Overflow};
use crate::geom::{Scalar, Vec2, Vec4};
use crate::id::ItemId;

/// Caller-supplied text measurement callback (`SPEC_FULL.md` §9).
///
/// Invoked with the opaque user data, whether this call is a wrapping query,
/// and the width available for wrapping; returns `(width, height)`. Must be
/// pure with respect to the tree and must not reach back into the context
/// that is mid-layout.
pub type MeasureTextFn = Rc<dyn Fn(Option<&dyn Any>, bool, Scalar) -> (Scalar, Scalar)>;

/// One node in the layout tree.
///
/// Mirrors the reference `layx_item_t`, but with enum-valued style groups as
/// plain typed fields rather than bit ranges (see `flags` module docs), and
/// the text-measurement callback as an `Rc<dyn Fn>` rather than a raw
/// function pointer plus `void*`.
#[derive(Clone)]
pub struct Item {
    pub(crate) flags: ItemFlags,

    pub(crate) display: Display,
    pub(crate) flex_direction: FlexDirection,
    pub(crate) flex_wrap: FlexWrap,
    pub(crate) justify_content: Justify,
    pub(crate) align_items: AlignItems,
    pub(crate) align_content: AlignContent,
    pub(crate) align_self: AlignSelf,

    pub(crate) parent: ItemId,
    pub(crate) first_child: ItemId,
    pub(crate) next_sibling: ItemId,

    pub(crate) size: Vec2,
    pub(crate) min_size: Vec2,
    pub(crate) max_size: Vec2,

    pub(crate) margin: Vec4,
    pub(crate) padding: Vec4,
    pub(crate) border: Vec4,

    pub(crate) flex_grow: Scalar,
    pub(crate) flex_shrink: Scalar,
    pub(crate) flex_basis: Scalar,

    pub(crate) overflow_x: Overflow,
    pub(crate) overflow_y: Overflow,

    pub(crate) scroll_offset: Vec2,
    pub(crate) scroll_max: Vec2,
    pub(crate) content_size: Vec2,

    pub(crate) has_baseline: bool,
    pub(crate) baseline: Scalar,

    pub(crate) measure_text: Option<MeasureTextFn>,
    pub(crate) measure_text_user_data: Option<Rc<dyn Any>>,
}

impl Default for Item {
    fn default() -> Self {
        Item {
            flags: ItemFlags::NONE,
            display: Display::default(),
            flex_direction: FlexDirection::default(),
            flex_wrap: FlexWrap::default(),
            justify_content: Justify::default(),
            align_items: AlignItems::default(),
            align_content: AlignContent::default(),
            align_self: AlignSelf::default(),
            parent: ItemId::NONE,
            first_child: ItemId::NONE,
            next_sibling: ItemId::NONE,
            size: [0.0; 2],
            min_size: [0.0; 2],
            max_size: [0.0; 2],
            margin: [0.0; 4],
            padding: [0.0; 4],
            border: [0.0; 4],
            flex_grow: 0.0,
            flex_shrink: 0.0,
            flex_basis: 0.0,
            overflow_x: Overflow::default(),
            overflow_y: Overflow::default(),
            scroll_offset: [0.0; 2],
            scroll_max: [0.0; 2],
            content_size: [0.0; 2],
            has_baseline: false,
            baseline: 0.0,
            measure_text: None,
            measure_text_user_data: None,
        }
    }
}

impl Item {
    pub(crate) fn is_inserted(&self) -> bool {
        self.flags.contains(ItemFlags::INSERTED)
    }

    pub(crate) fn has_fixed_size(&self, axis: crate::geom::Axis) -> bool {
        match axis {
            crate::geom::Axis::X => self.flags.contains(ItemFlags::SIZE_FIXED_WIDTH),
            crate::geom::Axis::Y => self.flags.contains(ItemFlags::SIZE_FIXED_HEIGHT),
        }
    }

    /// Whether this item participates in "fill" distribution on the main
    /// axis: the legacy hfill/vfill flags are not carried by this port
    /// (`SPEC_FULL.md` §9) — `flex_grow > 0` is the sole fill signal.
    pub(crate) fn is_fill(&self) -> bool {
        self.flex_grow > 0.0
    }

    pub(crate) fn is_squeezable(&self) -> bool {
        self.flex_shrink > 0.0
    }

    pub(crate) fn overflow(&self, axis: crate::geom::Axis) -> Overflow {
        match axis {
            crate::geom::Axis::X => self.overflow_x,
            crate::geom::Axis::Y => self.overflow_y,
        }
    }

    pub(crate) fn effective_align(&self, container_align_items: AlignItems) -> AlignItems {
        self.align_self.resolve(container_align_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_item_is_auto_sized_and_unlinked() {
        let item = Item::default();
        assert!(!item.is_inserted());
        assert!(!item.has_fixed_size(crate::geom::Axis::X));
        assert_eq!(item.parent, ItemId::NONE);
    }

    #[test]
    fn fill_and_squeezable_follow_flex_scalars() {
        let mut item = Item::default();
        assert!(!item.is_fill());
        item.flex_grow = 1.0;
        assert!(item.is_fill());
        assert!(!item.is_squeezable());
        item.flex_shrink = 1.0;
        assert!(item.is_squeezable());
    }
}
