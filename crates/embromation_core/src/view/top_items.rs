//! Top-N view synchronizer.
//!
//! # Responsibility
//! - Keep a bounded "visible" prefix view consistent with an unbounded
//!   backing sequence, one change at a time.
//!
//! # Invariants
//! - After `apply`, the view equals `backing[..min(limit, backing.len())]`,
//!   provided it did before the change.
//! - Every position check is a strict `< limit`; changes entirely outside
//!   the window leave the view untouched.
//! - `backing` is always the state after the change.

use crate::observable::list::{ListChange, ObservableList};
use log::warn;

/// Default bound for group top-item views.
pub const DEFAULT_TOP_ITEMS_LIMIT: usize = 12;

/// Minimal mutable-sequence surface needed by the synchronizer.
///
/// Callers guarantee indexes are in range.
pub trait SequenceMut<T> {
    fn seq_len(&self) -> usize;
    fn seq_insert(&mut self, index: usize, item: T);
    fn seq_remove(&mut self, index: usize);
    fn seq_push(&mut self, item: T);
    fn seq_move(&mut self, from: usize, to: usize);
    fn seq_set(&mut self, index: usize, item: T);
    fn seq_clear(&mut self);
}

impl<T> SequenceMut<T> for Vec<T> {
    fn seq_len(&self) -> usize {
        self.len()
    }

    fn seq_insert(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }

    fn seq_remove(&mut self, index: usize) {
        self.remove(index);
    }

    fn seq_push(&mut self, item: T) {
        self.push(item);
    }

    fn seq_move(&mut self, from: usize, to: usize) {
        let item = self.remove(from);
        self.insert(to, item);
    }

    fn seq_set(&mut self, index: usize, item: T) {
        self[index] = item;
    }

    fn seq_clear(&mut self) {
        self.clear();
    }
}

impl<T> SequenceMut<T> for ObservableList<T> {
    fn seq_len(&self) -> usize {
        self.len()
    }

    fn seq_insert(&mut self, index: usize, item: T) {
        if let Err(err) = self.insert(index, item) {
            warn!("event=top_items_sync module=view status=error op=insert error={err}");
        }
    }

    fn seq_remove(&mut self, index: usize) {
        if let Err(err) = self.remove_at(index) {
            warn!("event=top_items_sync module=view status=error op=remove error={err}");
        }
    }

    fn seq_push(&mut self, item: T) {
        self.push(item);
    }

    fn seq_move(&mut self, from: usize, to: usize) {
        if let Err(err) = self.move_item(from, to) {
            warn!("event=top_items_sync module=view status=error op=move error={err}");
        }
    }

    fn seq_set(&mut self, index: usize, item: T) {
        if let Err(err) = self.set(index, item) {
            warn!("event=top_items_sync module=view status=error op=set error={err}");
        }
    }

    fn seq_clear(&mut self) {
        self.clear();
    }
}

/// Applies one backing-sequence change to the bounded view.
pub fn apply<T, V>(view: &mut V, change: ListChange, backing: &[T], limit: usize)
where
    T: Clone,
    V: SequenceMut<T> + ?Sized,
{
    match change {
        ListChange::Insert { index } => {
            if index < limit && index <= view.seq_len() {
                if let Some(item) = backing.get(index) {
                    view.seq_insert(index, item.clone());
                    trim_to::<T, V>(view, limit);
                }
            }
        }
        ListChange::Move { from, to } => {
            if from < limit && to < limit {
                if from < view.seq_len() && to < view.seq_len() {
                    view.seq_move(from, to);
                }
            } else if from < limit {
                // Leaving the window: the old element at `limit` slides in.
                if from < view.seq_len() {
                    view.seq_remove(from);
                }
                if let Some(item) = backing.get(limit - 1) {
                    view.seq_push(item.clone());
                }
            } else if to < limit && to <= view.seq_len() {
                if let Some(item) = backing.get(to) {
                    view.seq_insert(to, item.clone());
                    trim_to::<T, V>(view, limit);
                }
            }
        }
        ListChange::Remove { index } => {
            if index < limit && index < view.seq_len() {
                view.seq_remove(index);
                if backing.len() >= limit {
                    view.seq_push(backing[limit - 1].clone());
                }
            }
        }
        ListChange::Replace { index } => {
            if index < limit && index < view.seq_len() {
                if let Some(item) = backing.get(index) {
                    view.seq_set(index, item.clone());
                }
            }
        }
        ListChange::Reset => rebuild(view, backing, limit),
    }
}

/// Clears the view and refills it from the head of `backing`.
pub fn rebuild<T, V>(view: &mut V, backing: &[T], limit: usize)
where
    T: Clone,
    V: SequenceMut<T> + ?Sized,
{
    view.seq_clear();
    for item in backing.iter().take(limit) {
        view.seq_push(item.clone());
    }
}

fn trim_to<T, V>(view: &mut V, limit: usize)
where
    V: SequenceMut<T> + ?Sized,
{
    while view.seq_len() > limit {
        view.seq_remove(limit);
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, rebuild, DEFAULT_TOP_ITEMS_LIMIT};
    use crate::observable::list::ListChange;

    const LIMIT: usize = DEFAULT_TOP_ITEMS_LIMIT;

    fn head(backing: &[u32]) -> Vec<u32> {
        backing.iter().take(LIMIT).copied().collect()
    }

    #[test]
    fn insert_inside_window_pushes_last_element_out() {
        let mut backing: Vec<u32> = (0..12).collect();
        let mut view = head(&backing);

        backing.insert(3, 100);
        apply(&mut view, ListChange::Insert { index: 3 }, &backing, LIMIT);

        assert_eq!(view.len(), 12);
        assert_eq!(view, head(&backing));
        assert!(!view.contains(&11));
    }

    #[test]
    fn insert_outside_window_is_ignored() {
        let mut backing: Vec<u32> = (0..15).collect();
        let mut view = head(&backing);

        backing.insert(12, 100);
        apply(&mut view, ListChange::Insert { index: 12 }, &backing, LIMIT);

        assert_eq!(view, head(&backing));
    }

    #[test]
    fn move_out_of_window_pulls_in_next_element() {
        let mut backing: Vec<u32> = (0..14).collect();
        let mut view = head(&backing);

        let moved = backing.remove(2);
        backing.insert(13, moved);
        apply(&mut view, ListChange::Move { from: 2, to: 13 }, &backing, LIMIT);

        assert_eq!(view, head(&backing));
        assert_eq!(view.last(), Some(&12));
    }

    #[test]
    fn move_into_window_drops_last_visible_element() {
        let mut backing: Vec<u32> = (0..14).collect();
        let mut view = head(&backing);

        let moved = backing.remove(13);
        backing.insert(0, moved);
        apply(&mut view, ListChange::Move { from: 13, to: 0 }, &backing, LIMIT);

        assert_eq!(view, head(&backing));
        assert_eq!(view[0], 13);
    }

    #[test]
    fn remove_refills_only_when_backing_still_covers_window() {
        let mut backing: Vec<u32> = (0..13).collect();
        let mut view = head(&backing);

        backing.remove(0);
        apply(&mut view, ListChange::Remove { index: 0 }, &backing, LIMIT);
        assert_eq!(view, head(&backing));
        assert_eq!(view.len(), 12);

        backing.remove(5);
        apply(&mut view, ListChange::Remove { index: 5 }, &backing, LIMIT);
        assert_eq!(view, head(&backing));
        assert_eq!(view.len(), 11);
    }

    #[test]
    fn replace_overwrites_visible_slot_only() {
        let mut backing: Vec<u32> = (0..20).collect();
        let mut view = head(&backing);

        backing[4] = 400;
        apply(&mut view, ListChange::Replace { index: 4 }, &backing, LIMIT);
        backing[15] = 1500;
        apply(&mut view, ListChange::Replace { index: 15 }, &backing, LIMIT);

        assert_eq!(view, head(&backing));
    }

    #[test]
    fn reset_refills_up_to_limit() {
        let backing: Vec<u32> = (0..30).collect();
        let mut view = vec![99, 98];

        apply(&mut view, ListChange::Reset, &backing, LIMIT);
        assert_eq!(view, head(&backing));

        rebuild(&mut view, &backing[..3], LIMIT);
        assert_eq!(view, vec![0, 1, 2]);
    }

    #[test]
    fn respects_custom_limit() {
        let mut backing: Vec<u32> = (0..5).collect();
        let mut view: Vec<u32> = backing.iter().take(3).copied().collect();

        backing.insert(1, 50);
        apply(&mut view, ListChange::Insert { index: 1 }, &backing, 3);

        assert_eq!(view, vec![0, 50, 1]);
    }
}
