//! Circulib - small library circulation system
//!
//! An in-memory circulation core: a catalog of loanable items, per-user
//! loans with due dates, and overdue tracking. Inventory is loaded from a
//! CSV file at startup; everything else lives for the process lifetime.

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use models::{Item, ItemKind, User};
pub use services::CirculationService;
pub use store::CatalogStore;
