//! CSV inventory ingestion
//!
//! Loads the startup inventory into a [`CatalogStore`]. The format is one
//! header line followed by `uniqueId,itemId,kind,title` records. A record
//! with an unrecognized kind code is dropped; a malformed record aborts the
//! whole load, since a partially loaded catalog is not guaranteed consistent.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{Item, ItemKind},
    store::CatalogStore,
};

/// Load inventory records from any buffered reader.
/// Returns the number of items added to the store.
pub fn load_inventory<R: BufRead>(store: &mut CatalogStore, reader: R) -> AppResult<usize> {
    let mut loaded = 0;

    // Line 1 is the header
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = line?;

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 4 {
            return Err(AppError::Ingestion {
                line: line_no,
                reason: format!("expected 4 fields, got {}", fields.len()),
            });
        }

        let unique_id: i32 = fields[0].parse().map_err(|_| AppError::Ingestion {
            line: line_no,
            reason: format!("invalid uniqueId: {:?}", fields[0]),
        })?;
        let item_id: i32 = fields[1].parse().map_err(|_| AppError::Ingestion {
            line: line_no,
            reason: format!("invalid itemId: {:?}", fields[1]),
        })?;

        let Some(kind) = ItemKind::from_code(fields[2]) else {
            tracing::debug!(line = line_no, kind = fields[2], "skipping record with unknown kind");
            continue;
        };

        store.add_item(Item::new(unique_id, item_id, kind, fields[3]))?;
        loaded += 1;
    }

    Ok(loaded)
}

/// Load inventory from a CSV file on disk
pub fn load_inventory_from_path(
    store: &mut CatalogStore,
    path: impl AsRef<Path>,
) -> AppResult<usize> {
    let file = File::open(path)?;
    load_inventory(store, BufReader::new(file))
}
