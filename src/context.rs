//! The arena that owns every item and its computed rect.

use std::rc::Rc;

use crate::geom::{Axis, Scalar, Vec4};
use crate::id::ItemId;
use crate::item::Item;

/// Caller-registered screen→local coordinate transform for hit testing
/// (`SPEC_FULL.md` §4.9).
pub type ScreenToLocalFn = Rc<dyn Fn(Scalar, Scalar) -> (Scalar, Scalar)>;

/// Owns the item arena and the parallel rect array.
///
/// The reference implementation colocates items and rects in one allocation
/// and threads its free list through destroyed items' `next_sibling` slot.
/// This port keeps two plain `Vec`s and a dedicated free-list `Vec<ItemId>`
/// instead (`SPEC_FULL.md` §4.1, §9) — idiomatic ownership, no unsafe
/// pointer arithmetic, same amortised cost.
#[derive(Default)]
pub struct Context {
    pub(crate) items: Vec<Item>,
    pub(crate) rects: Vec<Vec4>,
    pub(crate) free_list: Vec<ItemId>,
    pub(crate) screen_to_local: Option<ScreenToLocalFn>,
}

impl Context {
    /// Equivalent to the reference `layx_init_context`.
    pub fn new() -> Self {
        Context::default()
    }

    /// Guarantees the arena can hold at least `n` items without
    /// reallocating, without invalidating any existing id.
    pub fn reserve(&mut self, n: usize) {
        if n > self.items.len() {
            let additional = n - self.items.len();
            self.items.reserve(additional);
            self.rects.reserve(additional);
        }
    }

    /// Truncates the item count to zero while preserving the allocated
    /// capacity. Every previously issued [`ItemId`] becomes invalid.
    pub fn reset(&mut self) {
        self.items.clear();
        self.rects.clear();
        self.free_list.clear();
    }

    /// Registers a screen-to-local transform used by [`hit_test`](crate::hit_test::hit_test).
    pub fn register_screen_to_local(&mut self, f: ScreenToLocalFn) {
        self.screen_to_local = Some(f);
    }

    /// Allocates a fresh, zero-initialised, unlinked item.
    ///
    /// Reuses a destroyed id from the free list before growing the arena,
    /// matching the reference allocator's policy (`SPEC_FULL.md` §4.1).
    pub fn new_item(&mut self) -> ItemId {
        if let Some(id) = self.free_list.pop() {
            self.items[id.index()] = Item::default();
            self.rects[id.index()] = [0.0; 4];
            return id;
        }
        let index = self.items.len();
        self.items.push(Item::default());
        self.rects.push([0.0; 4]);
        ItemId::new(index as u32)
    }

    /// Unlinks `id` from its parent (if inserted), clears its flags, and
    /// returns the id to the free list. Non-recursive: children are not
    /// destroyed (`SPEC_FULL.md` §3 Lifecycle).
    pub fn destroy_item(&mut self, id: ItemId) {
        assert!(self.is_valid(id), "destroy_item: invalid id {id:?}");
        if self.item(id).is_inserted() {
            crate::tree::remove(self, id);
        }
        self.items[id.index()] = Item::default();
        self.free_list.push(id);
    }

    /// Clears a forced or recorded line break on `id` before the next
    /// `run_item`.
    pub fn clear_item_break(&mut self, id: ItemId) {
        assert!(self.is_valid(id), "clear_item_break: invalid id {id:?}");
        self.items[id.index()].flags.remove(crate::flags::ItemFlags::BREAK);
    }

    pub fn items_count(&self) -> usize {
        self.items.len() - self.free_list.len()
    }

    pub fn items_capacity(&self) -> usize {
        self.items.capacity()
    }

    pub(crate) fn is_valid(&self, id: ItemId) -> bool {
        id.is_some() && id.index() < self.items.len()
    }

    pub(crate) fn item(&self, id: ItemId) -> &Item {
        assert!(self.is_valid(id), "invalid item id {id:?}");
        &self.items[id.index()]
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> &mut Item {
        assert!(self.is_valid(id), "invalid item id {id:?}");
        &mut self.items[id.index()]
    }

    pub(crate) fn rect(&self, id: ItemId) -> Vec4 {
        assert!(self.is_valid(id), "invalid item id {id:?}");
        self.rects[id.index()]
    }

    pub(crate) fn rect_mut(&mut self, id: ItemId) -> &mut Vec4 {
        assert!(self.is_valid(id), "invalid item id {id:?}");
        &mut self.rects[id.index()]
    }

    pub(crate) fn rect_pos(&self, id: ItemId, axis: Axis) -> Scalar {
        crate::geom::rect_pos(self.rect(id), axis)
    }

    pub(crate) fn rect_size(&self, id: ItemId, axis: Axis) -> Scalar {
        crate::geom::rect_size(self.rect(id), axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_grows_and_reuses_free_list() {
        let mut ctx = Context::new();
        let a = ctx.new_item();
        let b = ctx.new_item();
        assert_ne!(a, b);
        assert_eq!(ctx.items_count(), 2);

        ctx.destroy_item(a);
        assert_eq!(ctx.items_count(), 1);

        let c = ctx.new_item();
        assert_eq!(c, a, "destroyed id should be recycled before growing");
        assert_eq!(ctx.items_count(), 2);
    }

    #[test]
    fn reset_preserves_capacity_but_truncates_count() {
        let mut ctx = Context::new();
        ctx.reserve(16);
        let cap_before = ctx.items_capacity();
        ctx.new_item();
        ctx.new_item();
        ctx.reset();
        assert_eq!(ctx.items_count(), 0);
        assert!(ctx.items_capacity() >= cap_before);
    }

    #[test]
    #[should_panic]
    fn invalid_id_panics() {
        let ctx = Context::new();
        let _ = ctx.item(ItemId::new(0));
    }
}
