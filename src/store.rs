//! Catalog store: the single source of truth for item placement
//!
//! Two partitions: items available for loan, keyed by unique id, and the
//! per-user loan index. Every ingested unique id lives in exactly one of
//! the two at any time; borrow and return only move items between them.
//! The store itself does no locking; [`CirculationService`] serializes all
//! access behind one mutex.
//!
//! [`CirculationService`]: crate::services::CirculationService

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{Item, User},
};

/// In-memory catalog holding available items and active loans
#[derive(Debug, Default)]
pub struct CatalogStore {
    available: IndexMap<i32, Item>,
    loans: HashMap<User, Vec<Item>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a newly ingested item into the available partition.
    /// Duplicate unique ids are a caller error and are rejected.
    pub fn add_item(&mut self, item: Item) -> AppResult<()> {
        if self.available.contains_key(&item.unique_id) {
            return Err(AppError::Duplicate(item.unique_id));
        }
        self.available.insert(item.unique_id, item);
        Ok(())
    }

    /// Look up an available item by unique id
    pub fn lookup_available(&self, unique_id: i32) -> Option<&Item> {
        self.available.get(&unique_id)
    }

    /// Remove and return an available item, if present.
    /// `shift_remove` keeps the insertion order of the remaining items.
    pub fn remove_available(&mut self, unique_id: i32) -> Option<Item> {
        self.available.shift_remove(&unique_id)
    }

    /// Put an item back into the available partition under its unique id
    pub fn restore_available(&mut self, item: Item) {
        self.available.insert(item.unique_id, item);
    }

    /// Add an item to a user's loan set, creating the set on first loan
    pub fn add_loan(&mut self, user: &User, item: Item) {
        self.loans.entry(user.clone()).or_default().push(item);
    }

    /// Remove the item with the given unique id from a user's loan set.
    /// Matches by id, not value equality: copies can share title and kind.
    pub fn remove_loan(&mut self, user: &User, unique_id: i32) -> Option<Item> {
        let items = self.loans.get_mut(user)?;
        let pos = items.iter().position(|item| item.unique_id == unique_id)?;
        Some(items.remove(pos))
    }

    /// Read-only view of the available partition, in insertion order
    pub fn available(&self) -> &IndexMap<i32, Item> {
        &self.available
    }

    /// Read-only view of the loan index
    pub fn loans(&self) -> &HashMap<User, Vec<Item>> {
        &self.loans
    }

    /// Items currently held by a user, if any
    pub fn user_loans(&self, user: &User) -> Option<&[Item]> {
        self.loans.get(user).map(Vec::as_slice)
    }
}
