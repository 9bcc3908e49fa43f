//! Content size, scrollbar detection, scroll operations, and metrics
//! (`SPEC_FULL.md` §4.6, §4.7).
//!
//! `client_size` is defined once, as `outer_size − padding − border` on an
//! axis, and reused both for `scroll_max` and for the `client_width/height`
//! read-back metric — see `DESIGN.md` for why this port follows §4.6 and the
//! original `layx_get_visible_content_rect` rather than the looser
//! "outer − border" wording in the §4.7 table.

use crate::context::Context;
use crate::flags::{ItemFlags, Overflow};
use crate::geom::{leading, trailing, Axis, Scalar};
use crate::id::ItemId;

fn client_size(ctx: &Context, id: ItemId, axis: Axis) -> Scalar {
    let item = ctx.item(id);
    let outer = ctx.rect_size(id, axis);
    (outer - leading(item.padding, axis) - trailing(item.padding, axis) - leading(item.border, axis) - trailing(item.border, axis)).max(0.0)
}

/// Recomputes `content_size`, scrollbar flags, and `scroll_max` for `id` on
/// `axis`, from its children's already-arranged rects. Invoked by the public
/// entry after each arrange half-pass (`SPEC_FULL.md` §4.6, §4.10).
pub(crate) fn update_content_and_scroll(ctx: &mut Context, id: ItemId, axis: Axis) {
    let item = ctx.item(id);
    let content_offset = ctx.rect_pos(id, axis) + leading(item.padding, axis) + leading(item.border, axis);

    // The maximum far edge of any child, relative to the content origin.
    // §4.6's "(plus the parent's trailing padding/border)" parenthetical is
    // reconciled against the worked scenario in §8 (content height = 200 for
    // four 50-tall children, not 210) by NOT adding it here — see
    // `DESIGN.md`. Padding/border instead enter through `client_size`'s own
    // subtraction when `scroll_max` is derived below.
    let content_size = ctx
        .children(id)
        .map(|child| ctx.rect_pos(child, axis) + ctx.rect_size(child, axis) - content_offset)
        .fold(0.0, Scalar::max);

    ctx.item_mut(id).content_size[axis.index()] = content_size;

    let overflow = ctx.item(id).overflow(axis);
    let client = client_size(ctx, id, axis);

    let has_scrollbar = match overflow {
        Overflow::Visible | Overflow::Hidden => false,
        Overflow::Scroll => true,
        Overflow::Auto => content_size > client,
    };
    let bit = match axis {
        Axis::X => ItemFlags::HAS_HSCROLLBAR,
        Axis::Y => ItemFlags::HAS_VSCROLLBAR,
    };
    ctx.item_mut(id).flags.set(bit, has_scrollbar);

    let scroll_max = if overflow.is_visible() { 0.0 } else { (content_size - client).max(0.0) };
    ctx.item_mut(id).scroll_max[axis.index()] = scroll_max;

    let clamped_offset = ctx.item(id).scroll_offset[axis.index()].clamp(0.0, scroll_max);
    ctx.item_mut(id).scroll_offset[axis.index()] = clamped_offset;
}

impl Context {
    /// Sets `scroll_offset`, clamped to `[0, scroll_max]` per axis.
    pub fn scroll_to(&mut self, id: ItemId, x: Scalar, y: Scalar) {
        let item = self.item_mut(id);
        item.scroll_offset[0] = x.clamp(0.0, item.scroll_max[0]);
        item.scroll_offset[1] = y.clamp(0.0, item.scroll_max[1]);
    }

    /// Delegates to [`scroll_to`](Context::scroll_to) with `offset + delta`.
    pub fn scroll_by(&mut self, id: ItemId, dx: Scalar, dy: Scalar) {
        let (x, y) = (self.item(id).scroll_offset[0] + dx, self.item(id).scroll_offset[1] + dy);
        self.scroll_to(id, x, y);
    }

    pub fn get_scroll_offset(&self, id: ItemId) -> (Scalar, Scalar) {
        let item = self.item(id);
        (item.scroll_offset[0], item.scroll_offset[1])
    }

    pub fn get_scroll_max(&self, id: ItemId) -> (Scalar, Scalar) {
        let item = self.item(id);
        (item.scroll_max[0], item.scroll_max[1])
    }

    pub fn get_content_size(&self, id: ItemId) -> (Scalar, Scalar) {
        let item = self.item(id);
        (item.content_size[0], item.content_size[1])
    }

    pub fn has_vertical_scrollbar(&self, id: ItemId) -> bool {
        self.item(id).flags.contains(ItemFlags::HAS_VSCROLLBAR)
    }

    pub fn has_horizontal_scrollbar(&self, id: ItemId) -> bool {
        self.item(id).flags.contains(ItemFlags::HAS_HSCROLLBAR)
    }

    pub fn offset_width(&self, id: ItemId) -> Scalar {
        self.rect_size(id, Axis::X)
    }

    pub fn offset_height(&self, id: ItemId) -> Scalar {
        self.rect_size(id, Axis::Y)
    }

    pub fn client_width(&self, id: ItemId) -> Scalar {
        client_size(self, id, Axis::X)
    }

    pub fn client_height(&self, id: ItemId) -> Scalar {
        client_size(self, id, Axis::Y)
    }

    pub fn scroll_width(&self, id: ItemId) -> Scalar {
        self.item(id).content_size[0]
    }

    pub fn scroll_height(&self, id: ItemId) -> Scalar {
        self.item(id).content_size[1]
    }

    /// The visible content rect in the item's own scrolled coordinate space:
    /// `[scroll_offset, scroll_offset + client_size)` per axis.
    pub fn get_visible_content_rect(&self, id: ItemId) -> (Scalar, Scalar, Scalar, Scalar) {
        let item = self.item(id);
        let left = item.scroll_offset[0];
        let top = item.scroll_offset[1];
        let right = left + self.client_width(id);
        let bottom = top + self.client_height(id);
        (left, top, right, bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Display;

    fn layout_column_with_overflow(ctx: &mut Context) -> (ItemId, Vec<ItemId>) {
        let root = ctx.new_item();
        ctx.set_display(root, Display::Flex);
        ctx.set_flex_direction(root, crate::flags::FlexDirection::Column);
        ctx.set_width(root, 200.0);
        ctx.set_height(root, 150.0);
        ctx.set_padding_trbl(root, [10.0, 10.0, 10.0, 10.0]);
        ctx.set_overflow(root, Overflow::Auto, Overflow::Auto);

        let mut children = Vec::new();
        for _ in 0..4 {
            let c = ctx.new_item();
            ctx.set_width(c, 100.0);
            ctx.set_height(c, 50.0);
            ctx.append(root, c);
            children.push(c);
        }
        crate::run::run_item(ctx, root);
        (root, children)
    }

    #[test]
    fn scrollbar_and_scroll_max_from_overflowing_content() {
        let mut ctx = Context::new();
        let (root, _children) = layout_column_with_overflow(&mut ctx);

        assert_eq!(ctx.scroll_height(root), 200.0);
        assert_eq!(ctx.client_height(root), 130.0);
        assert_eq!(ctx.get_scroll_max(root).1, 70.0);
        assert!(ctx.has_vertical_scrollbar(root));
    }

    #[test]
    fn scroll_to_beyond_max_clamps() {
        let mut ctx = Context::new();
        let root = ctx.new_item();
        ctx.set_width(root, 200.0);
        ctx.set_height(root, 150.0);
        ctx.set_overflow(root, Overflow::Auto, Overflow::Auto);

        let child = ctx.new_item();
        ctx.set_width(child, 300.0);
        ctx.set_height(child, 300.0);
        ctx.append(root, child);
        crate::run::run_item(&mut ctx, root);

        ctx.scroll_to(root, 9999.0, 9999.0);
        assert_eq!(ctx.get_scroll_offset(root), ctx.get_scroll_max(root));
    }

    #[test]
    fn visible_overflow_forces_zero_scroll_max() {
        let mut ctx = Context::new();
        let root = ctx.new_item();
        ctx.set_width(root, 100.0);
        ctx.set_height(root, 100.0);

        let child = ctx.new_item();
        ctx.set_width(child, 500.0);
        ctx.set_height(child, 500.0);
        ctx.append(root, child);
        crate::run::run_item(&mut ctx, root);

        assert_eq!(ctx.get_scroll_max(root), (0.0, 0.0));
        assert!(!ctx.has_horizontal_scrollbar(root));
    }
}
