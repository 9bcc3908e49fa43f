//! Parent/child/sibling link mutators (`SPEC_FULL.md` §4.2).

use crate::context::Context;
use crate::flags::ItemFlags;
use crate::id::ItemId;

impl Context {
    /// Links `child` as `parent`'s last child.
    pub fn append(&mut self, parent: ItemId, child: ItemId) {
        self.assert_insertable(parent, child);
        match self.last_child(parent) {
            Some(last) => self.items[last.index()].next_sibling = child,
            None => self.items[parent.index()].first_child = child,
        }
        self.link(parent, child);
    }

    /// Links `child` as `parent`'s first child.
    pub fn prepend(&mut self, parent: ItemId, child: ItemId) {
        self.assert_insertable(parent, child);
        let old_first = self.items[parent.index()].first_child;
        self.items[child.index()].next_sibling = old_first;
        self.items[parent.index()].first_child = child;
        self.link(parent, child);
    }

    /// Links `new` immediately after `sibling` under `sibling`'s parent.
    pub fn insert_after(&mut self, sibling: ItemId, new: ItemId) {
        assert!(self.is_valid(sibling), "insert_after: invalid sibling {sibling:?}");
        let parent = self.item(sibling).parent;
        assert!(parent.is_some(), "insert_after: sibling {sibling:?} has no parent");
        self.assert_insertable(parent, new);
        let next = self.items[sibling.index()].next_sibling;
        self.items[sibling.index()].next_sibling = new;
        self.items[new.index()].next_sibling = next;
        self.link(parent, new);
    }

    /// Unlinks `child` from its parent. The item remains alive and may be
    /// reinserted elsewhere.
    pub fn remove(&mut self, child: ItemId) {
        remove(self, child);
    }

    pub fn is_inserted(&self, id: ItemId) -> bool {
        self.item(id).is_inserted()
    }

    pub fn first_child(&self, id: ItemId) -> ItemId {
        self.item(id).first_child
    }

    pub fn next_sibling(&self, id: ItemId) -> ItemId {
        self.item(id).next_sibling
    }

    pub fn parent(&self, id: ItemId) -> ItemId {
        self.item(id).parent
    }

    pub fn last_child(&self, id: ItemId) -> Option<ItemId> {
        let mut cur = self.item(id).first_child;
        if cur.is_none() {
            return None;
        }
        loop {
            let next = self.item(cur).next_sibling;
            if next.is_none() {
                return Some(cur);
            }
            cur = next;
        }
    }

    /// Iterates `id`'s children in sibling-link order.
    pub(crate) fn children(&self, id: ItemId) -> ChildIter<'_> {
        ChildIter { ctx: self, next: self.item(id).first_child }
    }

    fn assert_insertable(&self, parent: ItemId, child: ItemId) {
        assert!(self.is_valid(parent), "invalid parent id {parent:?}");
        assert!(self.is_valid(child), "invalid child id {child:?}");
        assert_ne!(parent, child, "an item cannot be inserted as its own child");
        assert!(!self.item(child).is_inserted(), "item {child:?} is already inserted");
        assert!(!self.is_ancestor_of(child, parent), "inserting {child:?} would create a cycle");
    }

    fn is_ancestor_of(&self, maybe_ancestor: ItemId, id: ItemId) -> bool {
        let mut cur = self.item(id).parent;
        while cur.is_some() {
            if cur == maybe_ancestor {
                return true;
            }
            cur = self.item(cur).parent;
        }
        false
    }

    fn link(&mut self, parent: ItemId, child: ItemId) {
        self.items[child.index()].parent = parent;
        self.items[child.index()].flags.insert(ItemFlags::INSERTED);
    }
}

/// Standalone so [`Context::destroy_item`] can call it without a `&mut self`
/// borrow conflict against the method of the same name.
pub(crate) fn remove(ctx: &mut Context, child: ItemId) {
    assert!(ctx.is_valid(child), "remove: invalid id {child:?}");
    let parent = ctx.item(child).parent;
    assert!(parent.is_some(), "remove: {child:?} is not inserted");

    let first = ctx.item(parent).first_child;
    if first == child {
        let next = ctx.item(child).next_sibling;
        ctx.items[parent.index()].first_child = next;
    } else {
        let mut cur = first;
        loop {
            assert!(cur.is_some(), "remove: {child:?} not found among {parent:?}'s children");
            let next = ctx.item(cur).next_sibling;
            if next == child {
                let after = ctx.item(child).next_sibling;
                ctx.items[cur.index()].next_sibling = after;
                break;
            }
            cur = next;
        }
    }

    let item = &mut ctx.items[child.index()];
    item.parent = ItemId::NONE;
    item.next_sibling = ItemId::NONE;
    item.flags.remove(ItemFlags::INSERTED);
}

pub(crate) struct ChildIter<'a> {
    ctx: &'a Context,
    next: ItemId,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = ItemId;

    fn next(&mut self) -> Option<ItemId> {
        if self.next.is_none() {
            return None;
        }
        let current = self.next;
        self.next = self.ctx.item(current).next_sibling;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_prepend_order_children() {
        let mut ctx = Context::new();
        let parent = ctx.new_item();
        let a = ctx.new_item();
        let b = ctx.new_item();
        let c = ctx.new_item();

        ctx.append(parent, a);
        ctx.append(parent, b);
        ctx.prepend(parent, c);

        let order: Vec<ItemId> = ctx.children(parent).collect();
        assert_eq!(order, vec![c, a, b]);
    }

    #[test]
    fn insert_after_splices_in_the_middle() {
        let mut ctx = Context::new();
        let parent = ctx.new_item();
        let a = ctx.new_item();
        let b = ctx.new_item();
        let mid = ctx.new_item();
        ctx.append(parent, a);
        ctx.append(parent, b);
        ctx.insert_after(a, mid);

        let order: Vec<ItemId> = ctx.children(parent).collect();
        assert_eq!(order, vec![a, mid, b]);
    }

    #[test]
    fn remove_unlinks_but_keeps_item_alive() {
        let mut ctx = Context::new();
        let parent = ctx.new_item();
        let child = ctx.new_item();
        ctx.append(parent, child);
        ctx.remove(child);

        assert!(!ctx.is_inserted(child));
        assert_eq!(ctx.first_child(parent), ItemId::NONE);
        ctx.append(parent, child);
        assert!(ctx.is_inserted(child));
    }

    #[test]
    #[should_panic(expected = "already inserted")]
    fn double_insert_panics() {
        let mut ctx = Context::new();
        let parent = ctx.new_item();
        let child = ctx.new_item();
        ctx.append(parent, child);
        ctx.append(parent, child);
    }

    #[test]
    #[should_panic(expected = "cycle")]
    fn inserting_ancestor_as_child_panics() {
        let mut ctx = Context::new();
        let grandparent = ctx.new_item();
        let parent = ctx.new_item();
        ctx.append(grandparent, parent);
        ctx.append(parent, grandparent);
    }

    #[test]
    fn destroy_item_then_new_item_reuses_id_non_recursively() {
        let mut ctx = Context::new();
        let grandparent = ctx.new_item();
        let parent = ctx.new_item();
        let child = ctx.new_item();
        ctx.append(grandparent, parent);
        ctx.append(parent, child);

        // destroying `parent` unlinks it from its own parent (grandparent);
        // `child` is not recursively destroyed or touched.
        ctx.destroy_item(parent);
        assert_eq!(ctx.first_child(grandparent), ItemId::NONE);

        let reused = ctx.new_item();
        assert_eq!(reused, parent);
    }
}
