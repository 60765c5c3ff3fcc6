//! Catalog group model.
//!
//! # Responsibility
//! - Own the ordered item list of one category.
//! - Keep the bounded `top_items` view in step with every item mutation.
//!
//! # Invariants
//! - `top_items` always equals the first `min(top_items_limit, items.len())`
//!   elements of `items`, after each individual mutation.
//! - Item mutations only go through `Group` methods, so no change can
//!   bypass the top-items synchronizer.
//!
//! # See also
//! - `crate::view::top_items`

use crate::model::entry::{Entry, EntryMeta};
use crate::model::item::Item;
use crate::observable::list::{ChangeEvent, ListChange, ListIndexError, ObservableList};
use crate::observable::property::{NotifyPropertyChanged, PropertyObservers};
use crate::observable::SubscriptionId;
use crate::view::top_items::{self, DEFAULT_TOP_ITEMS_LIMIT};
use log::debug;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Shared handle to an item; `items` and `top_items` hold the same handles.
pub type ItemRef = Arc<Item>;

/// Named collection of items.
#[derive(Debug)]
pub struct Group {
    meta: EntryMeta,
    items: ObservableList<ItemRef>,
    top_items: ObservableList<ItemRef>,
    top_items_limit: usize,
}

impl Group {
    pub fn new(meta: EntryMeta) -> Self {
        Self::with_top_items_limit(meta, DEFAULT_TOP_ITEMS_LIMIT)
    }

    pub fn with_top_items_limit(meta: EntryMeta, top_items_limit: usize) -> Self {
        Self {
            meta,
            items: ObservableList::new(),
            top_items: ObservableList::new(),
            top_items_limit,
        }
    }

    pub fn items(&self) -> &ObservableList<ItemRef> {
        &self.items
    }

    /// Bounded head of `items`, for grid-style overviews.
    pub fn top_items(&self) -> &ObservableList<ItemRef> {
        &self.top_items
    }

    pub fn top_items_limit(&self) -> usize {
        self.top_items_limit
    }

    pub fn subscribe_items<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent<'_, ItemRef>) + Send + 'static,
    {
        self.items.subscribe(handler)
    }

    pub fn unsubscribe_items(&mut self, id: SubscriptionId) -> bool {
        self.items.unsubscribe(id)
    }

    pub fn subscribe_top_items<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent<'_, ItemRef>) + Send + 'static,
    {
        self.top_items.subscribe(handler)
    }

    pub fn unsubscribe_top_items(&mut self, id: SubscriptionId) -> bool {
        self.top_items.unsubscribe(id)
    }

    /// Looks up a direct child item by id.
    pub fn find_item(&self, item_id: &str) -> Option<&ItemRef> {
        self.items.iter().find(|item| item.unique_id() == item_id)
    }

    /// Appends an item and returns its shared handle.
    pub fn add_item(&mut self, item: Item) -> ItemRef {
        let item = Arc::new(item);
        let change = self.items.push(Arc::clone(&item));
        self.sync_top_items(change);
        item
    }

    pub fn insert_item(&mut self, index: usize, item: Item) -> Result<ItemRef, ListIndexError> {
        let item = Arc::new(item);
        let change = self.items.insert(index, Arc::clone(&item))?;
        self.sync_top_items(change);
        Ok(item)
    }

    pub fn remove_item(&mut self, index: usize) -> Result<ItemRef, ListIndexError> {
        let removed = self.items.remove_at(index)?;
        self.sync_top_items(ListChange::Remove { index });
        Ok(removed)
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListIndexError> {
        let change = self.items.move_item(from, to)?;
        self.sync_top_items(change);
        Ok(())
    }

    /// Swaps in a new item at `index` and returns the previous handle.
    pub fn replace_item(&mut self, index: usize, item: Item) -> Result<ItemRef, ListIndexError> {
        let previous = self.items.set(index, Arc::new(item))?;
        self.sync_top_items(ListChange::Replace { index });
        Ok(previous)
    }

    /// Edits the item at `index` copy-on-write and publishes it as a replace.
    ///
    /// Property observers registered on the item keep receiving the setter
    /// notifications made inside `edit`.
    pub fn edit_item<F>(&mut self, index: usize, edit: F) -> Result<ItemRef, ListIndexError>
    where
        F: FnOnce(&mut Item),
    {
        let Some(current) = self.items.get(index) else {
            return Err(ListIndexError {
                index,
                len: self.items.len(),
            });
        };
        let mut edited = Item::clone(current);
        edit(&mut edited);
        let edited = Arc::new(edited);
        self.items.set(index, Arc::clone(&edited))?;
        self.sync_top_items(ListChange::Replace { index });
        Ok(edited)
    }

    /// Replaces every item in one step.
    pub fn reset_items(&mut self, items: Vec<Item>) {
        let change = self
            .items
            .reset(items.into_iter().map(Arc::new).collect());
        self.sync_top_items(change);
    }

    pub fn clear_items(&mut self) {
        let change = self.items.clear();
        self.sync_top_items(change);
    }

    fn sync_top_items(&mut self, change: ListChange) {
        top_items::apply(
            &mut self.top_items,
            change,
            self.items.as_slice(),
            self.top_items_limit,
        );
        debug!(
            "event=top_items_sync module=model status=ok group_id={} change={:?} items={} top_items={}",
            self.meta.unique_id(),
            change,
            self.items.len(),
            self.top_items.len()
        );
    }
}

impl Entry for Group {
    fn meta(&self) -> &EntryMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntryMeta {
        &mut self.meta
    }
}

impl NotifyPropertyChanged for Group {
    fn property_observers(&self) -> &PropertyObservers {
        self.meta.property_observers()
    }

    fn property_observers_mut(&mut self) -> &mut PropertyObservers {
        self.meta.property_observers_mut()
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.meta, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Group;
    use crate::model::entry::{Entry, EntryMeta};
    use crate::model::item::{FixedContent, Item};
    use std::sync::Arc;

    fn item(id: &str) -> Item {
        Item::new(
            EntryMeta::new(id, id, "", ""),
            "g",
            Arc::new(FixedContent(String::new())),
        )
    }

    fn top_ids(group: &Group) -> Vec<String> {
        group
            .top_items()
            .iter()
            .map(|item| item.unique_id().to_string())
            .collect()
    }

    #[test]
    fn top_items_share_handles_with_items() {
        let mut group = Group::new(EntryMeta::new("g", "G", "", ""));
        let added = group.add_item(item("a"));

        assert!(Arc::ptr_eq(&added, &group.top_items().as_slice()[0]));
        assert!(Arc::ptr_eq(&added, &group.items().as_slice()[0]));
    }

    #[test]
    fn edit_item_replaces_visible_handle() {
        let mut group = Group::new(EntryMeta::new("g", "G", "", ""));
        group.add_item(item("a"));

        let edited = group
            .edit_item(0, |item| {
                item.meta_mut().set_title("renamed");
            })
            .unwrap();

        assert_eq!(group.top_items().as_slice()[0].title(), "renamed");
        assert!(Arc::ptr_eq(&edited, &group.top_items().as_slice()[0]));
    }

    #[test]
    fn small_limit_keeps_only_head() {
        let mut group = Group::with_top_items_limit(EntryMeta::new("g", "G", "", ""), 2);
        for id in ["a", "b", "c"] {
            group.add_item(item(id));
        }
        group.insert_item(0, item("z")).unwrap();

        assert_eq!(top_ids(&group), vec!["z", "a"]);
        assert!(group.edit_item(9, |_| {}).is_err());
    }
}
