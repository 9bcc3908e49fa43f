//! Arrange pass (`SPEC_FULL.md` §4.5).
//!
//! Pre-order per axis: an item places its children, then recurses. The
//! available space and content offset are derived from the item's own rect,
//! already finalised by the matching calc pass for this axis.

use crate::calc::layout_model;
use crate::context::Context;
use crate::flags::{AlignItems, ItemFlags, Justify};
use crate::geom::{leading, trailing, Axis, Scalar};
use crate::id::ItemId;

pub(crate) fn arrange(ctx: &mut Context, id: ItemId, axis: Axis) {
    let children: Vec<ItemId> = ctx.children(id).collect();
    if !children.is_empty() {
        let item = ctx.item(id);
        let flex_main_axis = item.flex_direction.main_axis();
        let flex_wraps = item.flex_wrap.wraps();
        let (_is_flex, main_axis, wraps) = layout_model(item.display, flex_main_axis, flex_wraps);
        let is_main = axis == main_axis;

        match (is_main, wraps) {
            (true, false) => arrange_stacked(ctx, id, axis, &children),
            (true, true) => {
                arrange_wrapped_stacked(ctx, id, axis, &children);
                if main_axis == Axis::Y {
                    // The cross axis (X) was arranged in the pass that ran
                    // before this one, using BREAK flags from a previous
                    // `run_item` (or none at all) — this pass just wrote the
                    // current ones. Redo the cross-axis placement now so a
                    // single `run_item` call converges, mirroring the
                    // original `layx_arrange`'s dim==1 branch, which chains
                    // `layx_arrange_stacked(item,1,true)` straight into
                    // `layx_arrange_wrapped_overlay_squeezed(item,0)`.
                    arrange_wrapped_overlay_squeezed(ctx, id, axis.cross(), &children);
                }
            }
            (false, false) => arrange_overlay(ctx, id, axis, &children),
            (false, true) => arrange_wrapped_overlay_squeezed(ctx, id, axis, &children),
        }
    }

    for child in children {
        arrange(ctx, child, axis);
    }
}

/// Available space and content offset on `axis` for placing `id`'s children.
///
/// The content offset adds the item's own leading margin on top of its rect
/// position, matching `SPEC_FULL.md` §4.5 and the reference
/// `layx_get_content_offset` exactly. By the time an item's own arrange call
/// runs, its rect position was already set (by its parent's arrange call) to
/// the cursor position *before* this item's leading margin was added — the
/// margin is added here, once, to step from that slot into the item's actual
/// border box. A root item, whose rect position is never overwritten by a
/// parent, is offset by its own leading margin here too, consistently with
/// every other item.
fn content_box(ctx: &Context, id: ItemId, axis: Axis) -> (Scalar, Scalar) {
    let item = ctx.item(id);
    let lead_margin = leading(item.margin, axis);
    let lead_pb = leading(item.padding, axis) + leading(item.border, axis);
    let trail_pb = trailing(item.padding, axis) + trailing(item.border, axis);
    let outer = ctx.rect_size(id, axis);
    let available = (outer - lead_pb - trail_pb).max(0.0);
    let content_offset = ctx.rect_pos(id, axis) + lead_margin + lead_pb;
    (available, content_offset)
}

/// The "effective basis": `flex_basis` when the child is auto-sized on this
/// axis and a basis was set, otherwise the size the calc pass already
/// settled on (`SPEC_FULL.md` §9 Open Questions).
fn effective_basis(ctx: &Context, child: ItemId, axis: Axis) -> Scalar {
    let item = ctx.item(child);
    if !item.has_fixed_size(axis) && item.flex_basis != 0.0 {
        item.flex_basis
    } else {
        ctx.rect_size(child, axis)
    }
}

/// Steps 1-4 of the stacked arrangement algorithm, applied to one line's
/// worth of children starting at `content_offset`.
fn place_line(ctx: &mut Context, children: &[ItemId], axis: Axis, available: Scalar, content_offset: Scalar, justify: Justify) {
    if children.is_empty() {
        return;
    }

    // First scan.
    let mut used = 0.0;
    let mut fill_count = 0usize;
    let mut squeezable_count = 0usize;
    let mut prev_trailing_margin: Option<Scalar> = None;
    for &child in children {
        let margin = ctx.item(child).margin;
        let lead = leading(margin, axis);
        let gap = prev_trailing_margin.map_or(lead, |p| lead.max(p));
        used += gap + effective_basis(ctx, child, axis);
        if ctx.item(child).is_fill() {
            fill_count += 1;
        }
        if ctx.item(child).is_squeezable() {
            squeezable_count += 1;
        }
        prev_trailing_margin = Some(trailing(margin, axis));
    }
    if let Some(last) = prev_trailing_margin {
        used += last;
    }

    let extra_space = available - used;

    let mut filler = 0.0;
    let mut leading_extra = 0.0;
    let mut spacer = 0.0;

    if extra_space > 0.0 && fill_count > 0 {
        filler = extra_space / fill_count as Scalar;
    } else if extra_space > 0.0 {
        let n = children.len() as Scalar;
        match justify {
            Justify::FlexStart => {}
            Justify::FlexEnd => leading_extra = extra_space,
            Justify::Center => leading_extra = extra_space / 2.0,
            Justify::SpaceBetween => {
                if children.len() > 1 {
                    spacer = extra_space / (n - 1.0);
                }
            }
            Justify::SpaceAround => {
                spacer = extra_space / n;
                leading_extra = spacer / 2.0;
            }
            Justify::SpaceEvenly => {
                spacer = extra_space / (n + 1.0);
                leading_extra = spacer;
            }
        }
    }

    let eater = if extra_space < 0.0 && squeezable_count > 0 {
        extra_space / squeezable_count as Scalar
    } else {
        0.0
    };

    // Second scan.
    let mut cursor = content_offset + leading_extra;
    let mut prev_trailing_margin: Option<Scalar> = None;
    for (idx, &child) in children.iter().enumerate() {
        let margin = ctx.item(child).margin;
        let lead = leading(margin, axis);
        let gap = prev_trailing_margin.map_or(lead, |p| lead.max(p));
        cursor += gap;

        crate::geom::set_rect_pos(ctx.rect_mut(child), axis, cursor);

        let basis = effective_basis(ctx, child, axis);
        let size = if filler != 0.0 && ctx.item(child).is_fill() {
            basis + filler
        } else if eater != 0.0 && ctx.item(child).is_squeezable() {
            (basis + eater).max(0.0)
        } else {
            basis
        };
        crate::geom::set_rect_size(ctx.rect_mut(child), axis, size);

        cursor += size;
        prev_trailing_margin = Some(trailing(margin, axis));
        if idx + 1 < children.len() {
            cursor += spacer;
        }
    }
}

fn arrange_stacked(ctx: &mut Context, id: ItemId, axis: Axis, children: &[ItemId]) {
    let (available, content_offset) = content_box(ctx, id, axis);
    let justify = ctx.item(id).justify_content;
    place_line(ctx, children, axis, available, content_offset, justify);
}

/// Greedily groups `children` into lines that fit `available`, marking the
/// first child of every line after the first with `ItemFlags::BREAK`, then
/// arranges each line independently along the main axis. Cross-axis
/// placement of the lines themselves is handled later by the cross-axis
/// pass (`arrange_wrapped_overlay_squeezed`).
fn arrange_wrapped_stacked(ctx: &mut Context, id: ItemId, axis: Axis, children: &[ItemId]) {
    let (available, content_offset) = content_box(ctx, id, axis);
    let justify = ctx.item(id).justify_content;

    let lines = group_into_lines(ctx, children, axis, available, true);
    for line in &lines {
        place_line(ctx, line, axis, available, content_offset, justify);
    }
}

/// Shared line-grouping logic used by both the wrapped-stacked arrange
/// routine (which performs the actual wrap decision and writes `BREAK`) and
/// the wrapped-overlayed calc strategy / wrapped-overlay-squeezed arrange
/// routine (which only reads `BREAK` already written by the sibling
/// main-axis pass this half-cycle).
fn group_into_lines(ctx: &mut Context, children: &[ItemId], axis: Axis, available: Scalar, write_break_flags: bool) -> Vec<Vec<ItemId>> {
    let mut lines: Vec<Vec<ItemId>> = Vec::new();
    let mut current: Vec<ItemId> = Vec::new();
    let mut current_extent: Scalar = 0.0;
    let mut prev_trailing: Option<Scalar> = None;

    for &child in children {
        let margin = ctx.item(child).margin;
        let lead = leading(margin, axis);
        let trail = trailing(margin, axis);
        let size = ctx.rect_size(child, axis);
        let gap = prev_trailing.map_or(lead, |p| lead.max(p));
        let projected = current_extent + gap + size;

        if !current.is_empty() && projected > available {
            lines.push(std::mem::take(&mut current));
            if write_break_flags {
                ctx.item_mut(child).flags.insert(ItemFlags::BREAK);
            }
            current_extent = lead + size;
            prev_trailing = Some(trail);
            current.push(child);
        } else {
            if write_break_flags {
                ctx.item_mut(child).flags.remove(ItemFlags::BREAK);
            }
            current_extent = projected;
            prev_trailing = Some(trail);
            current.push(child);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Groups by the already-written `BREAK` markers rather than re-deciding
/// wrap points — used on the cross axis, where the main-axis pass already
/// made the wrap decision this half-cycle.
fn group_by_break_flags(ctx: &Context, children: &[ItemId]) -> Vec<Vec<ItemId>> {
    let mut lines: Vec<Vec<ItemId>> = Vec::new();
    let mut current: Vec<ItemId> = Vec::new();
    for &child in children {
        if ctx.item(child).flags.contains(ItemFlags::BREAK) && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current.push(child);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn place_cross_child(ctx: &mut Context, child: ItemId, axis: Axis, content_offset: Scalar, available: Scalar, container_align: AlignItems) {
    let margin = ctx.item(child).margin;
    let lead = leading(margin, axis);
    let trail = trailing(margin, axis);
    let align = ctx.item(child).effective_align(container_align);

    match align {
        AlignItems::FlexStart => {
            crate::geom::set_rect_pos(ctx.rect_mut(child), axis, content_offset);
        }
        AlignItems::Baseline => {
            crate::geom::set_rect_pos(ctx.rect_mut(child), axis, content_offset);
            ctx.item_mut(child).has_baseline = true;
            ctx.item_mut(child).baseline = content_offset;
        }
        AlignItems::Center => {
            let size = ctx.rect_size(child, axis);
            let pos = content_offset + (available - size) / 2.0 - trail;
            crate::geom::set_rect_pos(ctx.rect_mut(child), axis, pos);
        }
        AlignItems::FlexEnd => {
            let size = ctx.rect_size(child, axis);
            let pos = content_offset + available - size - lead - trail;
            crate::geom::set_rect_pos(ctx.rect_mut(child), axis, pos);
        }
        AlignItems::Stretch => {
            let new_size = (available - lead - trail).max(0.0);
            crate::geom::set_rect_size(ctx.rect_mut(child), axis, new_size);
            crate::geom::set_rect_pos(ctx.rect_mut(child), axis, content_offset);
        }
    }
}

fn arrange_overlay(ctx: &mut Context, id: ItemId, axis: Axis, children: &[ItemId]) {
    let (available, content_offset) = content_box(ctx, id, axis);
    let container_align = ctx.item(id).align_items;
    for &child in children {
        place_cross_child(ctx, child, axis, content_offset, available, container_align);
    }
}

/// Each line is aligned within its own cross-axis extent (not the whole
/// container), and lines stack by their cumulative extent — the "squeezed"
/// variant named in `SPEC_FULL.md` §4.5. Does not update the container's own
/// cross-axis size (§9 Open Questions: left to the caller).
fn arrange_wrapped_overlay_squeezed(ctx: &mut Context, id: ItemId, axis: Axis, children: &[ItemId]) {
    let (_available, content_offset) = content_box(ctx, id, axis);
    let container_align = ctx.item(id).align_items;
    let lines = group_by_break_flags(ctx, children);

    let mut cumulative = 0.0;
    for line in &lines {
        let line_extent = line
            .iter()
            .map(|&child| {
                let margin = ctx.item(child).margin;
                leading(margin, axis) + ctx.rect_size(child, axis) + trailing(margin, axis)
            })
            .fold(0.0, Scalar::max);

        let line_offset = content_offset + cumulative;
        for &child in line {
            place_cross_child(ctx, child, axis, line_offset, line_extent, container_align);
        }
        cumulative += line_extent;
    }
}
