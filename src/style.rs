//! Bulk style application (`SPEC_FULL.md` §4.3, §6 "Style convenience").
//!
//! The reference `layx_style` guards every field write behind `if (field !=
//! 0)`, using zero as the "absent" sentinel. That collides with legitimate
//! zero values (a margin of `0` is meaningful, not "unset"). This port uses
//! `Option<T>` per field instead — the idiomatic equivalent of the
//! reference's "present" signal — so `apply_style` only ever overwrites
//! fields the caller actually set.

use crate::context::Context;
use crate::flags::{AlignContent, AlignItems, AlignSelf, Display, FlexDirection, FlexWrap, Justify, Overflow};
use crate::geom::{Scalar, Vec4};
use crate::id::ItemId;

#[derive(Debug, Clone, Default)]
pub struct Style {
    pub display: Option<Display>,
    pub flex_direction: Option<FlexDirection>,
    pub flex_wrap: Option<FlexWrap>,
    pub justify_content: Option<Justify>,
    pub align_items: Option<AlignItems>,
    pub align_content: Option<AlignContent>,
    pub align_self: Option<AlignSelf>,

    pub width: Option<Scalar>,
    pub height: Option<Scalar>,
    pub min_width: Option<Scalar>,
    pub min_height: Option<Scalar>,
    pub max_width: Option<Scalar>,
    pub max_height: Option<Scalar>,

    pub flex_grow: Option<Scalar>,
    pub flex_shrink: Option<Scalar>,
    pub flex_basis: Option<Scalar>,

    pub margin: Option<Vec4>,
    pub padding: Option<Vec4>,
    pub border: Option<Vec4>,

    pub overflow_x: Option<Overflow>,
    pub overflow_y: Option<Overflow>,
}

/// Resets a `Style` record to "nothing set" — equivalent to the reference
/// `layx_style_reset`, provided for parity even though `Style::default()`
/// does the same thing.
pub fn style_reset(style: &mut Style) {
    *style = Style::default();
}

impl Context {
    /// Writes every field of `style` that is `Some(..)` onto `id`.
    pub fn apply_style(&mut self, id: ItemId, style: &Style) {
        if let Some(v) = style.display {
            self.set_display(id, v);
        }
        if let Some(v) = style.flex_direction {
            self.set_flex_direction(id, v);
        }
        if let Some(v) = style.flex_wrap {
            self.set_flex_wrap(id, v);
        }
        if let Some(v) = style.justify_content {
            self.set_justify_content(id, v);
        }
        if let Some(v) = style.align_items {
            self.set_align_items(id, v);
        }
        if let Some(v) = style.align_content {
            self.set_align_content(id, v);
        }
        if let Some(v) = style.align_self {
            self.set_align_self(id, v);
        }
        if let Some(v) = style.width {
            self.set_width(id, v);
        }
        if let Some(v) = style.height {
            self.set_height(id, v);
        }
        if let Some(v) = style.min_width {
            self.set_min_width(id, v);
        }
        if let Some(v) = style.min_height {
            self.set_min_height(id, v);
        }
        if let Some(v) = style.max_width {
            self.set_max_width(id, v);
        }
        if let Some(v) = style.max_height {
            self.set_max_height(id, v);
        }
        if let Some(v) = style.flex_grow {
            self.set_flex_grow(id, v);
        }
        if let Some(v) = style.flex_shrink {
            self.set_flex_shrink(id, v);
        }
        if let Some(v) = style.flex_basis {
            self.set_flex_basis(id, v);
        }
        if let Some(v) = style.margin {
            self.set_margin_trbl(id, v);
        }
        if let Some(v) = style.padding {
            self.set_padding_trbl(id, v);
        }
        if let Some(v) = style.border {
            self.set_border_trbl(id, v);
        }
        if let Some(v) = style.overflow_x {
            self.set_overflow_x(id, v);
        }
        if let Some(v) = style.overflow_y {
            self.set_overflow_y(id, v);
        }
    }

    /// Allocates a new item and applies `style` to it in one step.
    pub fn create_item_with_style(&mut self, style: &Style) -> ItemId {
        let id = self.new_item();
        self.apply_style(id, style);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_style_only_touches_present_fields() {
        let mut ctx = Context::new();
        let id = ctx.new_item();
        ctx.set_width(id, 42.0);

        let style = Style {
            height: Some(10.0),
            ..Default::default()
        };
        ctx.apply_style(id, &style);

        let (w, h) = ctx.get_size(id);
        assert_eq!(w, 42.0, "width was not present in the style, must be untouched");
        assert_eq!(h, 10.0);
    }

    #[test]
    fn create_item_with_style_applies_immediately() {
        let mut ctx = Context::new();
        let style = Style { width: Some(5.0), height: Some(6.0), ..Default::default() };
        let id = ctx.create_item_with_style(&style);
        assert_eq!(ctx.get_size(id), (5.0, 6.0));
    }
}
