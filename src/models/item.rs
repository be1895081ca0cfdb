//! Item (circulating unit) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::user::User;

/// Media kind codes for catalog items.
/// The set is closed: ingestion drops records with any other code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Book,
    Dvd,
    Vhs,
    Cd,
}

impl ItemKind {
    /// Parse the ingestion code for a kind. Unknown codes yield `None`,
    /// which ingestion treats as "skip the record", not as an error.
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "Book" => Some(ItemKind::Book),
            "DVD" => Some(ItemKind::Dvd),
            "VHS" => Some(ItemKind::Vhs),
            "CD" => Some(ItemKind::Cd),
            _ => None,
        }
    }

    /// Return the legacy string code for this kind
    pub fn as_code(&self) -> &'static str {
        match self {
            ItemKind::Book => "Book",
            ItemKind::Dvd => "DVD",
            ItemKind::Vhs => "VHS",
            ItemKind::Cd => "CD",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// One physical circulating unit.
///
/// `unique_id` distinguishes individual copies and never changes after
/// ingestion. `item_id` groups copies of the same logical work and is not
/// unique. `due_date` and `borrowed_by` are set together when the item is
/// borrowed; a return deliberately leaves both stale (the next borrow
/// overwrites them), so which partition holds the item is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub unique_id: i32,
    pub item_id: i32,
    pub kind: ItemKind,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub borrowed_by: Option<User>,
}

impl Item {
    /// Create a new available item (no due date, no holder)
    pub fn new(unique_id: i32, item_id: i32, kind: ItemKind, title: impl Into<String>) -> Self {
        Self {
            unique_id,
            item_id,
            kind,
            title: title.into(),
            due_date: None,
            borrowed_by: None,
        }
    }
}
