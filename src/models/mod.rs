//! Data models for the circulation system

pub mod item;
pub mod user;

// Re-export commonly used types
pub use item::{Item, ItemKind};
pub use user::User;
