//! Circulation service: borrow, return, availability and overdue queries
//!
//! All operations, reads included, serialize on one mutex over the whole
//! [`CatalogStore`]. The invariant (an item is available XOR held by exactly
//! one user) spans both partitions, so it has to be protected as a unit;
//! under two racing borrows of the same unique id exactly one caller wins.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::{
    models::{Item, User},
    store::CatalogStore,
};

/// Loan period applied to every borrow
pub const LOAN_PERIOD_DAYS: i64 = 7;

/// Shared handle over the catalog; cloning shares the same store
#[derive(Clone)]
pub struct CirculationService {
    store: Arc<Mutex<CatalogStore>>,
}

impl CirculationService {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Borrow an available item for a user.
    ///
    /// Returns false when the unique id is unknown or the item is already
    /// borrowed; the caller cannot tell the two apart. On success the item
    /// gets `due_date = today + 7 days`, records the holder, and moves into
    /// the user's loan set.
    pub fn borrow(&self, unique_id: i32, user: &User) -> bool {
        tracing::info!(unique_id, user = %user, "attempting to borrow item");

        let mut store = self.store.lock();
        let Some(mut item) = store.remove_available(unique_id) else {
            tracing::info!(unique_id, user = %user, "item not available, borrow failed");
            return false;
        };

        let due_date = Local::now().date_naive() + Duration::days(LOAN_PERIOD_DAYS);
        item.due_date = Some(due_date);
        item.borrowed_by = Some(user.clone());
        tracing::info!(unique_id, %due_date, "due date set for borrowed item");

        store.add_loan(user, item);
        tracing::info!(unique_id, user = %user, "item borrowed");
        true
    }

    /// Return a borrowed item.
    ///
    /// Returns false when the user does not hold an item with this unique
    /// id. The item moves back to the available partition; its due date and
    /// holder are left stale on purpose, the next borrow overwrites them.
    pub fn return_item(&self, unique_id: i32, user: &User) -> bool {
        let mut store = self.store.lock();
        let Some(item) = store.remove_loan(user, unique_id) else {
            tracing::info!(unique_id, user = %user, "item not held by user, return failed");
            return false;
        };

        store.restore_available(item);
        tracing::info!(unique_id, user = %user, "item returned");
        true
    }

    /// Would something borrowed on `borrowed_date` be overdue today?
    ///
    /// Pure date arithmetic, strictly more than the loan period. This takes
    /// a date rather than an item; [`overdue_items`](Self::overdue_items)
    /// is the per-item check.
    pub fn is_overdue(&self, borrowed_date: NaiveDate) -> bool {
        let days = (Local::now().date_naive() - borrowed_date).num_days();
        tracing::info!(%borrowed_date, days, "overdue check");
        days > LOAN_PERIOD_DAYS
    }

    /// Snapshot of the available partition, keyed by unique id
    pub fn items(&self) -> IndexMap<i32, Item> {
        self.store.lock().available().clone()
    }

    /// Currently available items (no due date set), in insertion order
    pub fn current_inventory(&self) -> Vec<Item> {
        self.store
            .lock()
            .available()
            .values()
            .filter(|item| item.due_date.is_none())
            .cloned()
            .collect()
    }

    /// Distinct titles across available items, first-occurrence order
    pub fn inventory(&self) -> Vec<String> {
        let store = self.store.lock();
        let mut titles: Vec<String> = Vec::new();
        for item in store.available().values() {
            if !titles.contains(&item.title) {
                titles.push(item.title.clone());
            }
        }
        titles
    }

    /// Items currently held by a user; empty for an unknown user
    pub fn borrowed_items(&self, user: &User) -> Vec<Item> {
        tracing::info!(user = %user, "fetching borrowed items");

        let store = self.store.lock();
        match store.user_loans(user) {
            Some(items) => items.to_vec(),
            None => Vec::new(),
        }
    }

    /// Every borrowed item whose due date is strictly before today
    pub fn overdue_items(&self) -> Vec<Item> {
        tracing::info!("fetching all overdue items");

        let today = Local::now().date_naive();
        let store = self.store.lock();

        let mut overdue = Vec::new();
        for (user, items) in store.loans() {
            for item in items {
                if item.due_date.is_some_and(|due| due < today) {
                    tracing::info!(title = %item.title, user = %user, "item is overdue");
                    overdue.push(item.clone());
                }
            }
        }

        tracing::info!(count = overdue.len(), "overdue items found");
        overdue
    }

    /// True iff the item exists among available items and has no due date
    pub fn is_available(&self, unique_id: i32) -> bool {
        let store = self.store.lock();
        match store.lookup_available(unique_id) {
            Some(item) => item.due_date.is_none(),
            None => false,
        }
    }
}
