//! Typed setters and getters for every layout input (`SPEC_FULL.md` §4.3).
//!
//! Every size setter flips the matching `SIZE_FIXED_*` bit: zero means
//! "auto", any non-zero value is a fixed size the calc pass must not
//! recompute.

use std::any::Any;
use std::rc::Rc;

use crate::context::Context;
use crate::flags::{AlignContent, AlignItems, AlignSelf, Display, FlexDirection, FlexWrap, ItemFlags, Justify, Overflow};
use crate::geom::{Axis, Scalar, Vec4, BOTTOM, LEFT, RIGHT, TOP};
use crate::id::ItemId;
use crate::item::MeasureTextFn;

impl Context {
    pub fn set_display(&mut self, id: ItemId, value: Display) {
        self.item_mut(id).display = value;
    }

    pub fn display(&self, id: ItemId) -> Display {
        self.item(id).display
    }

    pub fn set_flex_direction(&mut self, id: ItemId, value: FlexDirection) {
        self.item_mut(id).flex_direction = value;
    }

    pub fn flex_direction(&self, id: ItemId) -> FlexDirection {
        self.item(id).flex_direction
    }

    pub fn set_flex_wrap(&mut self, id: ItemId, value: FlexWrap) {
        self.item_mut(id).flex_wrap = value;
    }

    pub fn flex_wrap(&self, id: ItemId) -> FlexWrap {
        self.item(id).flex_wrap
    }

    pub fn set_justify_content(&mut self, id: ItemId, value: Justify) {
        self.item_mut(id).justify_content = value;
    }

    pub fn justify_content(&self, id: ItemId) -> Justify {
        self.item(id).justify_content
    }

    pub fn set_align_items(&mut self, id: ItemId, value: AlignItems) {
        self.item_mut(id).align_items = value;
    }

    pub fn align_items(&self, id: ItemId) -> AlignItems {
        self.item(id).align_items
    }

    pub fn set_align_content(&mut self, id: ItemId, value: AlignContent) {
        self.item_mut(id).align_content = value;
    }

    pub fn align_content(&self, id: ItemId) -> AlignContent {
        self.item(id).align_content
    }

    pub fn set_align_self(&mut self, id: ItemId, value: AlignSelf) {
        self.item_mut(id).align_self = value;
    }

    pub fn align_self(&self, id: ItemId) -> AlignSelf {
        self.item(id).align_self
    }

    pub fn set_width(&mut self, id: ItemId, value: Scalar) {
        self.set_axis_size(id, Axis::X, value);
    }

    pub fn set_height(&mut self, id: ItemId, value: Scalar) {
        self.set_axis_size(id, Axis::Y, value);
    }

    pub fn set_size(&mut self, id: ItemId, width: Scalar, height: Scalar) {
        self.set_width(id, width);
        self.set_height(id, height);
    }

    fn set_axis_size(&mut self, id: ItemId, axis: Axis, value: Scalar) {
        let item = self.item_mut(id);
        item.size[axis.index()] = value;
        let bit = match axis {
            Axis::X => ItemFlags::SIZE_FIXED_WIDTH,
            Axis::Y => ItemFlags::SIZE_FIXED_HEIGHT,
        };
        item.flags.set(bit, value != 0.0);
    }

    pub fn get_size(&self, id: ItemId) -> (Scalar, Scalar) {
        let item = self.item(id);
        (item.size[0], item.size[1])
    }

    pub fn set_min_width(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).min_size[Axis::X.index()] = value;
    }

    pub fn set_min_height(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).min_size[Axis::Y.index()] = value;
    }

    pub fn set_max_width(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).max_size[Axis::X.index()] = value;
    }

    pub fn set_max_height(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).max_size[Axis::Y.index()] = value;
    }

    pub fn set_flex_grow(&mut self, id: ItemId, value: Scalar) {
        assert!(value >= 0.0, "flex_grow must be >= 0");
        self.item_mut(id).flex_grow = value;
    }

    pub fn set_flex_shrink(&mut self, id: ItemId, value: Scalar) {
        assert!(value >= 0.0, "flex_shrink must be >= 0");
        self.item_mut(id).flex_shrink = value;
    }

    pub fn set_flex_basis(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).flex_basis = value;
    }

    /// Registers a text-measurement callback on `id`, consulted by the calc
    /// pass instead of the content-derived strategies (`SPEC_FULL.md` §4.4).
    pub fn set_measure_text(&mut self, id: ItemId, callback: MeasureTextFn, user_data: Option<Rc<dyn Any>>) {
        let item = self.item_mut(id);
        item.measure_text = Some(callback);
        item.measure_text_user_data = user_data;
    }

    pub fn clear_measure_text(&mut self, id: ItemId) {
        let item = self.item_mut(id);
        item.measure_text = None;
        item.measure_text_user_data = None;
    }

    pub fn set_margin_trbl(&mut self, id: ItemId, insets: Vec4) {
        self.item_mut(id).margin = insets;
    }

    pub fn set_margin_left(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).margin[LEFT] = value;
    }

    pub fn set_margin_top(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).margin[TOP] = value;
    }

    pub fn set_margin_right(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).margin[RIGHT] = value;
    }

    pub fn set_margin_bottom(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).margin[BOTTOM] = value;
    }

    pub fn get_margin_trbl(&self, id: ItemId) -> Vec4 {
        self.item(id).margin
    }

    pub fn set_padding_trbl(&mut self, id: ItemId, insets: Vec4) {
        self.item_mut(id).padding = insets;
    }

    pub fn set_padding_left(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).padding[LEFT] = value;
    }

    pub fn set_padding_top(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).padding[TOP] = value;
    }

    pub fn set_padding_right(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).padding[RIGHT] = value;
    }

    pub fn set_padding_bottom(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).padding[BOTTOM] = value;
    }

    pub fn get_padding_trbl(&self, id: ItemId) -> Vec4 {
        self.item(id).padding
    }

    pub fn set_border_trbl(&mut self, id: ItemId, insets: Vec4) {
        self.item_mut(id).border = insets;
    }

    pub fn set_border_left(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).border[LEFT] = value;
    }

    pub fn set_border_top(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).border[TOP] = value;
    }

    pub fn set_border_right(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).border[RIGHT] = value;
    }

    pub fn set_border_bottom(&mut self, id: ItemId, value: Scalar) {
        self.item_mut(id).border[BOTTOM] = value;
    }

    pub fn get_border_trbl(&self, id: ItemId) -> Vec4 {
        self.item(id).border
    }

    pub fn set_overflow_x(&mut self, id: ItemId, value: Overflow) {
        self.item_mut(id).overflow_x = value;
    }

    pub fn set_overflow_y(&mut self, id: ItemId, value: Overflow) {
        self.item_mut(id).overflow_y = value;
    }

    pub fn set_overflow(&mut self, id: ItemId, x: Overflow, y: Overflow) {
        self.set_overflow_x(id, x);
        self.set_overflow_y(id, y);
    }

    pub fn overflow_x(&self, id: ItemId) -> Overflow {
        self.item(id).overflow_x
    }

    pub fn overflow_y(&self, id: ItemId) -> Overflow {
        self.item(id).overflow_y
    }

    /// Final rect relative to the root's origin.
    pub fn get_rect(&self, id: ItemId) -> (Scalar, Scalar, Scalar, Scalar) {
        let r = self.rect(id);
        (r[0], r[1], r[2], r[3])
    }

    /// Content box: the rect with padding and border subtracted.
    pub fn get_rect_inner_xywh(&self, id: ItemId) -> (Scalar, Scalar, Scalar, Scalar) {
        let r = self.rect(id);
        let item = self.item(id);
        let x = r[0] + item.padding[LEFT] + item.border[LEFT];
        let y = r[1] + item.padding[TOP] + item.border[TOP];
        let w = (r[2] - item.padding[LEFT] - item.padding[RIGHT] - item.border[LEFT] - item.border[RIGHT]).max(0.0);
        let h = (r[3] - item.padding[TOP] - item.padding[BOTTOM] - item.border[TOP] - item.border[BOTTOM]).max(0.0);
        (x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_nonzero_size_flips_fixed_bit() {
        let mut ctx = Context::new();
        let id = ctx.new_item();
        ctx.set_width(id, 100.0);
        assert!(ctx.item(id).has_fixed_size(Axis::X));
        ctx.set_width(id, 0.0);
        assert!(!ctx.item(id).has_fixed_size(Axis::X));
    }

    #[test]
    fn rect_inner_subtracts_padding_and_border() {
        let mut ctx = Context::new();
        let id = ctx.new_item();
        ctx.set_padding_trbl(id, [5.0, 5.0, 5.0, 5.0]);
        ctx.set_border_trbl(id, [2.0, 2.0, 2.0, 2.0]);
        *ctx.rect_mut(id) = [0.0, 0.0, 100.0, 50.0];
        let (x, y, w, h) = ctx.get_rect_inner_xywh(id);
        assert_eq!((x, y, w, h), (7.0, 7.0, 86.0, 36.0));
    }
}
