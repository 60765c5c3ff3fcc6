//! Observable ordered list.
//!
//! # Responsibility
//! - Own an ordered sequence and expose read access to it.
//! - Notify subscribers with a structured change descriptor on every
//!   insert, move, remove, replace and reset.
//!
//! # Invariants
//! - Mutations with an out-of-range index are rejected before any state
//!   change and never notify.
//! - The event handed to subscribers always reflects the list state after
//!   the mutation.

use crate::observable::SubscriptionId;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Position-only description of one list mutation.
///
/// Indexes refer to the list state after the mutation, except `Remove`
/// whose index is the slot the removed element used to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    Insert { index: usize },
    Move { from: usize, to: usize },
    Remove { index: usize },
    Replace { index: usize },
    Reset,
}

impl ListChange {
    /// Index the change affected before it happened, when meaningful.
    pub fn old_index(self) -> Option<usize> {
        match self {
            Self::Move { from, .. } => Some(from),
            Self::Remove { index } | Self::Replace { index } => Some(index),
            Self::Insert { .. } | Self::Reset => None,
        }
    }

    /// Index the change affected after it happened, when meaningful.
    pub fn new_index(self) -> Option<usize> {
        match self {
            Self::Insert { index } | Self::Replace { index } => Some(index),
            Self::Move { to, .. } => Some(to),
            Self::Remove { .. } | Self::Reset => None,
        }
    }
}

/// Change descriptor delivered to list subscribers.
#[derive(Debug)]
pub struct ChangeEvent<'a, T> {
    pub change: ListChange,
    /// Element that left its slot (`Remove`, `Replace`).
    pub old_item: Option<&'a T>,
    /// Element that now occupies the affected slot (`Insert`, `Move`, `Replace`).
    pub new_item: Option<&'a T>,
}

/// Rejected list mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListIndexError {
    pub index: usize,
    pub len: usize,
}

impl Display for ListIndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "list index {} out of range for length {}",
            self.index, self.len
        )
    }
}

impl Error for ListIndexError {}

type ChangeHandler<T> = Box<dyn FnMut(&ChangeEvent<'_, T>) + Send>;

/// Ordered sequence with synchronous change notification.
pub struct ObservableList<T> {
    items: Vec<T>,
    handlers: Vec<(SubscriptionId, ChangeHandler<T>)>,
    next_subscription: SubscriptionId,
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for ObservableList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &self.items)
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

impl<T> ObservableList<T> {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Wraps existing elements without emitting any event.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items,
            handlers: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable access to one element. Does not notify.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutable iteration over elements. Does not notify.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    /// Registers a change handler.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent<'_, T>) + Send + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a change handler. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    /// Appends one element.
    pub fn push(&mut self, item: T) -> ListChange {
        self.items.push(item);
        let index = self.items.len() - 1;
        let change = ListChange::Insert { index };
        notify(
            &mut self.handlers,
            &ChangeEvent {
                change,
                old_item: None,
                new_item: self.items.get(index),
            },
        );
        change
    }

    /// Inserts one element at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, item: T) -> Result<ListChange, ListIndexError> {
        if index > self.items.len() {
            return Err(self.index_error(index));
        }
        self.items.insert(index, item);
        let change = ListChange::Insert { index };
        notify(
            &mut self.handlers,
            &ChangeEvent {
                change,
                old_item: None,
                new_item: self.items.get(index),
            },
        );
        Ok(change)
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListIndexError> {
        if index >= self.items.len() {
            return Err(self.index_error(index));
        }
        let removed = self.items.remove(index);
        notify(
            &mut self.handlers,
            &ChangeEvent {
                change: ListChange::Remove { index },
                old_item: Some(&removed),
                new_item: None,
            },
        );
        Ok(removed)
    }

    /// Moves the element at `from` so that it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<ListChange, ListIndexError> {
        let len = self.items.len();
        if from >= len {
            return Err(self.index_error(from));
        }
        if to >= len {
            return Err(self.index_error(to));
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        let change = ListChange::Move { from, to };
        notify(
            &mut self.handlers,
            &ChangeEvent {
                change,
                old_item: None,
                new_item: self.items.get(to),
            },
        );
        Ok(change)
    }

    /// Overwrites the element at `index` and returns the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, ListIndexError> {
        if index >= self.items.len() {
            return Err(self.index_error(index));
        }
        let previous = std::mem::replace(&mut self.items[index], item);
        notify(
            &mut self.handlers,
            &ChangeEvent {
                change: ListChange::Replace { index },
                old_item: Some(&previous),
                new_item: self.items.get(index),
            },
        );
        Ok(previous)
    }

    /// Removes every element.
    pub fn clear(&mut self) -> ListChange {
        self.items.clear();
        self.notify_reset()
    }

    /// Replaces the whole content in one step.
    pub fn reset(&mut self, items: Vec<T>) -> ListChange {
        self.items = items;
        self.notify_reset()
    }

    fn notify_reset(&mut self) -> ListChange {
        notify(
            &mut self.handlers,
            &ChangeEvent {
                change: ListChange::Reset,
                old_item: None,
                new_item: None,
            },
        );
        ListChange::Reset
    }

    fn index_error(&self, index: usize) -> ListIndexError {
        ListIndexError {
            index,
            len: self.items.len(),
        }
    }
}

impl<T: Clone> ObservableList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<'a, T> IntoIterator for &'a ObservableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn notify<T>(handlers: &mut [(SubscriptionId, ChangeHandler<T>)], event: &ChangeEvent<'_, T>) {
    for (_, handler) in handlers.iter_mut() {
        handler(event);
    }
}

#[cfg(test)]
mod tests {
    use super::{ListChange, ListIndexError, ObservableList};
    use std::sync::{Arc, Mutex};

    fn recording_list() -> (ObservableList<&'static str>, Arc<Mutex<Vec<ListChange>>>) {
        let mut list = ObservableList::from_vec(vec!["a", "b", "c"]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        list.subscribe(move |event| sink.lock().unwrap().push(event.change));
        (list, seen)
    }

    #[test]
    fn mutations_emit_matching_change_descriptors() {
        let (mut list, seen) = recording_list();

        list.push("d");
        list.insert(0, "z").unwrap();
        list.move_item(0, 2).unwrap();
        list.set(1, "B").unwrap();
        list.remove_at(3).unwrap();
        list.clear();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                ListChange::Insert { index: 3 },
                ListChange::Insert { index: 0 },
                ListChange::Move { from: 0, to: 2 },
                ListChange::Replace { index: 1 },
                ListChange::Remove { index: 3 },
                ListChange::Reset,
            ]
        );
        assert!(list.is_empty());
    }

    #[test]
    fn move_item_places_element_at_target_index() {
        let mut list = ObservableList::from_vec(vec![1, 2, 3, 4]);
        list.move_item(0, 3).unwrap();
        assert_eq!(list.as_slice(), &[2, 3, 4, 1]);
        list.move_item(3, 1).unwrap();
        assert_eq!(list.as_slice(), &[2, 1, 3, 4]);
    }

    #[test]
    fn out_of_range_mutations_are_rejected_without_events() {
        let (mut list, seen) = recording_list();

        assert_eq!(
            list.insert(9, "x").unwrap_err(),
            ListIndexError { index: 9, len: 3 }
        );
        assert!(list.remove_at(3).is_err());
        assert!(list.move_item(0, 3).is_err());
        assert!(list.set(5, "x").is_err());

        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(list.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn events_carry_affected_values() {
        let mut list = ObservableList::from_vec(vec![10, 20]);
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&values);
        list.subscribe(move |event| {
            sink.lock()
                .unwrap()
                .push((event.old_item.copied(), event.new_item.copied()));
        });

        list.set(0, 11).unwrap();
        list.remove_at(1).unwrap();
        list.push(30);

        assert_eq!(
            *values.lock().unwrap(),
            vec![(Some(10), Some(11)), (Some(20), None), (None, Some(30))]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let (mut list, seen) = recording_list();
        let extra = list.subscribe(|_| {});
        assert_eq!(list.subscriber_count(), 2);

        assert!(list.unsubscribe(extra));
        assert!(!list.unsubscribe(extra));
        assert_eq!(list.subscriber_count(), 1);

        list.push("d");
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn change_indexes_follow_collection_semantics() {
        assert_eq!(ListChange::Insert { index: 2 }.new_index(), Some(2));
        assert_eq!(ListChange::Insert { index: 2 }.old_index(), None);
        assert_eq!(ListChange::Move { from: 1, to: 4 }.old_index(), Some(1));
        assert_eq!(ListChange::Move { from: 1, to: 4 }.new_index(), Some(4));
        assert_eq!(ListChange::Remove { index: 0 }.new_index(), None);
        assert_eq!(ListChange::Reset.old_index(), None);
    }
}
