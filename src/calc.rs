//! Size-calculation pass (`SPEC_FULL.md` §4.4).
//!
//! Post-order per axis: every child's outer size is settled before its
//! parent's. A container's own size on this axis is either the fixed value
//! the caller set, the caller-provided text measurement, or one of four
//! content-derived summarisation strategies selected by display model,
//! main-axis identity, and wrap flag.

use crate::context::Context;
use crate::flags::{Display, ItemFlags};
use crate::geom::{leading, trailing, Axis, Scalar};
use crate::id::ItemId;

/// `(is_flex, main_axis, wraps)` for the purposes of the four-strategy
/// table. Block is main=Y/no-wrap; inline and inline-block are main=X/wrap,
/// unified with flex per `SPEC_FULL.md` §4.8.
pub(crate) fn layout_model(display: Display, flex_main_axis: Axis, flex_wraps: bool) -> (bool, Axis, bool) {
    match display {
        Display::Flex => (true, flex_main_axis, flex_wraps),
        Display::Block => (false, Axis::Y, false),
        Display::Inline | Display::InlineBlock => (false, Axis::X, true),
    }
}

pub(crate) fn calc_size(ctx: &mut Context, id: ItemId, axis: Axis) {
    let children: Vec<ItemId> = ctx.children(id).collect();
    for child in &children {
        calc_size(ctx, *child, axis);
    }

    let margin = ctx.item(id).margin;
    let leading_margin = leading(margin, axis);
    crate::geom::set_rect_pos(ctx.rect_mut(id), axis, leading_margin);

    if ctx.item(id).has_fixed_size(axis) {
        let fixed = ctx.item(id).size[axis.index()];
        crate::geom::set_rect_size(ctx.rect_mut(id), axis, fixed);
        return;
    }

    let content = if let Some(cb) = ctx.item(id).measure_text.clone() {
        measure_text_content_size(ctx, id, axis, cb)
    } else {
        content_derived_size(ctx, id, axis, &children)
    };

    let padding = ctx.item(id).padding;
    let border = ctx.item(id).border;
    let mut outer = content + leading(padding, axis) + trailing(padding, axis) + leading(border, axis) + trailing(border, axis);

    let item = ctx.item(id);
    let min = item.min_size[axis.index()];
    let max = item.max_size[axis.index()];
    if min > 0.0 {
        outer = outer.max(min);
    }
    if max > 0.0 {
        outer = outer.min(max);
    }

    crate::geom::set_rect_size(ctx.rect_mut(id), axis, outer);
}

fn measure_text_content_size(
    ctx: &Context,
    id: ItemId,
    axis: Axis,
    callback: crate::item::MeasureTextFn,
) -> Scalar {
    let item = ctx.item(id);
    let user_data = item.measure_text_user_data.as_deref();
    let is_wrap = axis == Axis::Y;
    let wrap_width = if is_wrap { item.size[Axis::X.index()] } else { 0.0 };
    let (w, h) = callback(user_data, is_wrap, wrap_width);
    match axis {
        Axis::X => w,
        Axis::Y => h,
    }
}

fn content_derived_size(ctx: &mut Context, id: ItemId, axis: Axis, children: &[ItemId]) -> Scalar {
    let item = ctx.item(id);
    let flex_main_axis = item.flex_direction.main_axis();
    let flex_wraps = item.flex_wrap.wraps();
    let (_is_flex, main_axis, wraps) = layout_model(item.display, flex_main_axis, flex_wraps);
    let is_main = axis == main_axis;

    match (is_main, wraps) {
        (true, _) => stacked_sum(ctx, children, axis),
        (false, false) => overlayed_max(ctx, children, axis),
        (false, true) => wrapped_overlayed_sum(ctx, id, children, axis),
    }
}

/// Sum of child outer sizes plus collapsed inter-sibling gaps.
///
/// Used for both the non-wrapping main-axis strategy and — per
/// `SPEC_FULL.md` §4.4's resolution of the wrapped-stacked case — as the
/// content-derived size for a wrapping main axis too: wrapping decisions
/// need a known available space, which by construction does not exist yet
/// while an auto-sized container is still computing its own intrinsic size
/// (see `DESIGN.md`). A single unwrapped line is therefore the correct
/// intrinsic measurement.
fn stacked_sum(ctx: &Context, children: &[ItemId], axis: Axis) -> Scalar {
    let mut total = 0.0;
    let mut prev_trailing_margin: Option<Scalar> = None;
    for &child in children {
        let margin = ctx.item(child).margin;
        let lead = leading(margin, axis);
        let gap = match prev_trailing_margin {
            Some(prev) => lead.max(prev),
            None => lead,
        };
        total += gap + ctx.rect_size(child, axis);
        prev_trailing_margin = Some(trailing(margin, axis));
    }
    if let Some(last) = prev_trailing_margin {
        total += last;
    }
    total
}

/// Max of child outer sizes (no margin collapsing on the cross axis).
fn overlayed_max(ctx: &Context, children: &[ItemId], axis: Axis) -> Scalar {
    children
        .iter()
        .map(|&child| {
            let margin = ctx.item(child).margin;
            leading(margin, axis) + ctx.rect_size(child, axis) + trailing(margin, axis)
        })
        .fold(0.0, Scalar::max)
}

/// Sum of per-line maxima, grouping children by the `BREAK` marker the
/// sibling main-axis arrange pass already set.
///
/// For a row-direction wrap, this runs on the Y axis in calc-Y, after
/// calc-X/arrange-X have already grouped children into lines and set
/// `BREAK` — the flags are current. For a column-direction wrap this runs on
/// the X axis in calc-X, the very first half-pass of `run_item`, before
/// arrange-Y (the pass that sets `BREAK` for a column wrap) has run at all —
/// so on a tree's first `run_item` call this reads whatever `BREAK` state
/// preceded it (unset on a fresh tree, collapsing to a single line, same as
/// `stacked_sum`'s documented single-line degeneration). `arrange::arrange`'s
/// extra cross-axis re-pass during arrange-Y leaves `BREAK` at its converged
/// value by the end of that `run_item` call, so every `run_item` call after
/// the first reads settled flags here and the two passes agree.
fn wrapped_overlayed_sum(ctx: &Context, _id: ItemId, children: &[ItemId], axis: Axis) -> Scalar {
    let mut total = 0.0;
    let mut line_max: Scalar = 0.0;
    let mut any_in_line = false;
    for &child in children {
        let starts_new_line = ctx.item(child).flags.contains(ItemFlags::BREAK);
        if starts_new_line && any_in_line {
            total += line_max;
            line_max = 0.0;
            any_in_line = false;
        }
        let margin = ctx.item(child).margin;
        let extent = leading(margin, axis) + ctx.rect_size(child, axis) + trailing(margin, axis);
        line_max = line_max.max(extent);
        any_in_line = true;
    }
    if any_in_line {
        total += line_max;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::FlexDirection;

    #[test]
    fn stacked_sum_collapses_adjacent_margins() {
        let mut ctx = Context::new();
        let root = ctx.new_item();
        ctx.set_display(root, Display::Block);
        ctx.set_width(root, 400.0);

        let children: Vec<ItemId> = (0..3)
            .map(|_| {
                let c = ctx.new_item();
                ctx.set_height(c, 50.0);
                ctx.append(root, c);
                c
            })
            .collect();
        ctx.set_margin_bottom(children[0], 20.0);
        ctx.set_margin_top(children[1], 15.0);
        ctx.set_margin_bottom(children[1], 10.0);
        ctx.set_margin_top(children[2], 5.0);

        calc_size(&mut ctx, root, Axis::Y);
        // 50 + max(20,15) + 50 + max(10,5) + 50 = 190
        assert_eq!(ctx.rect_size(root, Axis::Y), 190.0);
    }

    #[test]
    fn overlayed_max_takes_the_widest_child() {
        let mut ctx = Context::new();
        let root = ctx.new_item();
        ctx.set_display(root, Display::Flex);
        ctx.set_flex_direction(root, FlexDirection::Row);
        ctx.set_height(root, 10.0);

        let a = ctx.new_item();
        ctx.set_height(a, 20.0);
        ctx.append(root, a);
        let b = ctx.new_item();
        ctx.set_height(b, 50.0);
        ctx.append(root, b);

        calc_size(&mut ctx, root, Axis::Y);
        assert_eq!(ctx.rect_size(root, Axis::Y), 50.0);
    }

    #[test]
    fn min_and_max_size_clamp_content_derived_size() {
        let mut ctx = Context::new();
        let root = ctx.new_item();
        ctx.set_display(root, Display::Block);
        ctx.set_width(root, 400.0);
        ctx.set_min_height(root, 500.0);

        let child = ctx.new_item();
        ctx.set_height(child, 10.0);
        ctx.append(root, child);

        calc_size(&mut ctx, root, Axis::Y);
        assert_eq!(ctx.rect_size(root, Axis::Y), 500.0);
    }
}
