//! User service
//!
//! Business-facing operations over user records: the canonical
//! active-capable instantiation of the store contract.

use tracing::{debug, info};

use crate::error::LedgerResult;
use crate::models::User;
use crate::store::{EntityId, Store};

/// Service for managing users
pub struct UserService<'a> {
    store: &'a Store,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Get all users
    pub fn get_all(&self) -> LedgerResult<Vec<User>> {
        let users = self.store.users.get_all()?;
        debug!(count = users.len(), "retrieved users");
        Ok(users)
    }

    /// Get all active or inactive users
    pub fn filter_by_active(&self, is_active: bool) -> LedgerResult<Vec<User>> {
        self.store.users.get_active(is_active)
    }

    /// Get a user by id, failing with `NotFound` when absent
    pub fn get_by_id(&self, id: EntityId) -> LedgerResult<User> {
        self.store.users.get_by_id(id)
    }

    /// Create a new user, returning it with its assigned id
    pub fn create(&self, user: User) -> LedgerResult<User> {
        let created = self.store.users.create(user)?;
        info!(id = created.id, "created user");
        Ok(created)
    }

    /// Update an existing user
    pub fn update(&self, user: User) -> LedgerResult<()> {
        self.store.users.update(user)
    }

    /// Delete a user
    pub fn delete(&self, user: &User) -> LedgerResult<()> {
        self.store.users.delete(user)
    }
}
