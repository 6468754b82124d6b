//! Record store for userledger
//!
//! A generic persistence layer over JSON files with atomic writes. Each
//! entity type gets one `Repository` instantiation; the `Store` bundles
//! them behind a single handle.

pub mod entity;
pub mod file_io;
pub mod repository;
pub mod seed;

pub use entity::{ActiveEntity, Entity, EntityId};
pub use file_io::{read_json, write_json_atomic};
pub use repository::Repository;
pub use seed::seed_users;

use crate::config::StorePaths;
use crate::error::LedgerError;
use crate::models::{ActionLog, User};

/// Main store that provides access to all repositories
pub struct Store {
    paths: StorePaths,
    pub users: Repository<User>,
    pub action_logs: Repository<ActionLog>,
}

impl Store {
    /// Open the store, creating directories and loading existing data
    pub fn open(paths: StorePaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        let store = Self {
            users: Repository::new(paths.users_file()),
            action_logs: Repository::new(paths.action_logs_file()),
            paths,
        };

        store.users.load()?;
        store.action_logs.load()?;

        Ok(store)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }
}
