//! In-memory bookmark store
//!
//! The `BookmarkStore` is the single source of truth for which restaurants
//! are bookmarked. It is an ordinary owned value: create one per session and
//! pass it by reference to whatever needs it.
//!
//! ## Observing changes
//!
//! Observers can either register a callback with [`BookmarkStore::subscribe`]
//! or poll [`BookmarkStore::revision`], which increases once per effective
//! mutation. Adding an existing bookmark or removing a missing one is a
//! no-op: nothing is notified and the revision stays the same.
//!
//! ## Usage
//!
//! ```
//! use bitemark_core::{BookmarkStore, RestaurantId};
//!
//! let mut store = BookmarkStore::new();
//! let id = RestaurantId::from("r1");
//!
//! store.add_bookmark(&id);
//! assert!(store.is_bookmarked(&id));
//!
//! store.remove_bookmark(&id);
//! assert!(!store.is_bookmarked(&id));
//! ```

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::models::{BookmarkRecord, RestaurantId};

/// A change applied to the bookmark collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkChange {
    Added(RestaurantId),
    Removed(RestaurantId),
}

impl BookmarkChange {
    /// The restaurant this change refers to
    pub fn restaurant_id(&self) -> &RestaurantId {
        match self {
            BookmarkChange::Added(id) | BookmarkChange::Removed(id) => id,
        }
    }
}

/// Handle returned by [`BookmarkStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&BookmarkChange)>;

/// Process-local collection of bookmarks
#[derive(Default)]
pub struct BookmarkStore {
    /// Records in insertion order
    records: Vec<BookmarkRecord>,
    /// Membership index over `records`
    index: HashSet<RestaurantId>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    revision: u64,
}

impl BookmarkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Queries ====================

    /// Check whether a restaurant is bookmarked
    pub fn is_bookmarked(&self, id: &RestaurantId) -> bool {
        self.index.contains(id)
    }

    /// List bookmarked restaurant IDs in insertion order
    pub fn list_bookmarks(&self) -> Vec<RestaurantId> {
        self.records
            .iter()
            .map(|record| record.restaurant_id.clone())
            .collect()
    }

    /// Get all bookmark records in insertion order
    pub fn records(&self) -> &[BookmarkRecord] {
        &self.records
    }

    /// Get count of bookmarks
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of effective mutations applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ==================== Mutations ====================

    /// Bookmark a restaurant
    ///
    /// Returns `true` if the bookmark was added, `false` if it already
    /// existed.
    pub fn add_bookmark(&mut self, id: &RestaurantId) -> bool {
        if !self.index.insert(id.clone()) {
            trace!(restaurant_id = %id, "bookmark already present");
            return false;
        }

        self.records.push(BookmarkRecord::new(id.clone()));
        debug!(restaurant_id = %id, total = self.records.len(), "bookmark added");
        self.publish(BookmarkChange::Added(id.clone()));
        true
    }

    /// Remove a restaurant's bookmark
    ///
    /// Returns `true` if a bookmark was removed, `false` if there was none.
    pub fn remove_bookmark(&mut self, id: &RestaurantId) -> bool {
        if !self.index.remove(id) {
            trace!(restaurant_id = %id, "bookmark not present");
            return false;
        }

        self.records.retain(|record| &record.restaurant_id != id);
        debug!(restaurant_id = %id, total = self.records.len(), "bookmark removed");
        self.publish(BookmarkChange::Removed(id.clone()));
        true
    }

    /// Remove every bookmark, notifying once per removed record
    pub fn clear(&mut self) {
        let records = std::mem::take(&mut self.records);
        self.index.clear();

        for record in records {
            debug!(restaurant_id = %record.restaurant_id, "bookmark cleared");
            self.publish(BookmarkChange::Removed(record.restaurant_id));
        }
    }

    // ==================== Observers ====================

    /// Register a callback run after every effective mutation
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&BookmarkChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        trace!(subscription = id.0, "subscriber registered");
        id
    }

    /// Drop a subscription
    ///
    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription);
        self.subscribers.len() != before
    }

    fn publish(&mut self, change: BookmarkChange) {
        self.revision += 1;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&change);
        }
    }
}

impl fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("records", &self.records)
            .field("subscribers", &self.subscribers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn id(s: &str) -> RestaurantId {
        RestaurantId::from(s)
    }

    /// Subscribe a recorder that collects every change
    fn record_changes(store: &mut BookmarkStore) -> (SubscriptionId, Rc<RefCell<Vec<BookmarkChange>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = store.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        (sub, seen)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = BookmarkStore::new();
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
        assert!(!store.is_bookmarked(&id("r1")));
        assert!(store.list_bookmarks().is_empty());
    }

    #[test]
    fn test_add_remove_scenario() {
        let mut store = BookmarkStore::new();
        let r1 = id("r1");

        assert!(!store.is_bookmarked(&r1));

        assert!(store.add_bookmark(&r1));
        assert!(store.is_bookmarked(&r1));

        assert!(!store.add_bookmark(&r1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records(), &[BookmarkRecord::new(r1.clone())]);

        assert!(store.remove_bookmark(&r1));
        assert!(!store.is_bookmarked(&r1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_never_added_is_noop() {
        let mut store = BookmarkStore::new();
        assert!(!store.remove_bookmark(&id("ghost")));
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_bookmarks_are_independent() {
        let mut store = BookmarkStore::new();
        store.add_bookmark(&id("r1"));
        store.add_bookmark(&id("r2"));

        store.remove_bookmark(&id("r1"));

        assert!(!store.is_bookmarked(&id("r1")));
        assert!(store.is_bookmarked(&id("r2")));
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut store = BookmarkStore::new();
        for key in ["c", "a", "b"] {
            store.add_bookmark(&id(key));
        }
        store.remove_bookmark(&id("a"));
        store.add_bookmark(&id("a"));

        assert_eq!(store.list_bookmarks(), vec![id("c"), id("b"), id("a")]);
    }

    #[test]
    fn test_subscribers_see_effective_changes_only() {
        let mut store = BookmarkStore::new();
        let (_, seen) = record_changes(&mut store);

        store.add_bookmark(&id("r1"));
        store.add_bookmark(&id("r1"));
        store.remove_bookmark(&id("r2"));
        store.remove_bookmark(&id("r1"));

        assert_eq!(
            *seen.borrow(),
            vec![
                BookmarkChange::Added(id("r1")),
                BookmarkChange::Removed(id("r1")),
            ]
        );
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = BookmarkStore::new();
        let (sub, seen) = record_changes(&mut store);

        store.add_bookmark(&id("r1"));
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add_bookmark(&id("r2"));

        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_clear_notifies_each_record() {
        let mut store = BookmarkStore::new();
        store.add_bookmark(&id("r1"));
        store.add_bookmark(&id("r2"));
        let (_, seen) = record_changes(&mut store);

        store.clear();

        assert!(store.is_empty());
        assert!(!store.is_bookmarked(&id("r1")));
        assert_eq!(
            *seen.borrow(),
            vec![
                BookmarkChange::Removed(id("r1")),
                BookmarkChange::Removed(id("r2")),
            ]
        );
        assert_eq!(store.revision(), 4);
    }

    #[test]
    fn test_change_restaurant_id() {
        assert_eq!(BookmarkChange::Added(id("x")).restaurant_id(), &id("x"));
        assert_eq!(BookmarkChange::Removed(id("y")).restaurant_id(), &id("y"));
    }
}
