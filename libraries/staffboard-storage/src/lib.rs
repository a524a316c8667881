//! Staffboard Storage
//!
//! Record store backends for job postings.
//!
//! # Architecture
//!
//! - **Whole-document persistence**: every operation loads the full
//!   collection, mutates it, and writes the full collection back
//! - **Swappable backends**: one `JobStore` trait, with the implementation
//!   chosen once at startup by [`open_store`]
//! - **No concurrency control**: concurrent writers to the file backend can
//!   lose updates; this is a known simplification, not an indexed or
//!   transactional store
//!
//! # Example
//!
//! ```rust,no_run
//! use staffboard_core::JobStore;
//! use staffboard_storage::{open_store, StorageBackend};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = open_store(StorageBackend::File, "./data/jobs.json", true).await?;
//! let jobs = store.list_all().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod json_file;
mod memory;
mod seed;

pub use error::{Result, StorageError};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use seed::seed_document;

use serde::{Deserialize, Serialize};
use staffboard_core::{JobDocument, JobStore};
use std::path::Path;
use std::sync::Arc;

/// Which record store implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON document on disk
    File,
    /// Process memory only
    Memory,
}

/// Open the selected backend
///
/// `data_path` is only used by the file backend. With `seed` set, a new store
/// starts with the sample postings; otherwise it starts empty.
pub async fn open_store(
    backend: StorageBackend,
    data_path: impl AsRef<Path>,
    seed: bool,
) -> Result<Arc<dyn JobStore>> {
    let initial = if seed {
        seed_document()
    } else {
        JobDocument::default()
    };

    let store: Arc<dyn JobStore> = match backend {
        StorageBackend::File => {
            Arc::new(JsonFileStore::open(data_path.as_ref().to_path_buf(), initial).await?)
        }
        StorageBackend::Memory => Arc::new(MemoryStore::new(initial)),
    };

    tracing::info!("Opened {:?} job store", backend);
    Ok(store)
}
