//! Audit recorder
//!
//! Turns a pair of record snapshots into an immutable `ActionLog` entry
//! and persists it through the record store.

use serde::Serialize;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::ActionLog;
use crate::store::{Entity, EntityId, Store};

use super::diff::{diff_records, render_details};

/// Service for recording and reading user action logs
pub struct ActionLogService<'a> {
    store: &'a Store,
}

impl<'a> ActionLogService<'a> {
    /// Create a new action log service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Record an action performed by a user
    ///
    /// Diffs `original` against `updated` and persists one log entry with
    /// the rendered field changes, stamped with the current UTC instant.
    /// Pass `None` for `original` on creation events; the entry is still
    /// written, it simply carries no field-change detail. The diff runs
    /// before anything is written, so a diff failure writes nothing.
    ///
    /// The entity mutation being documented and this log write are two
    /// separate commits; callers sequence them, entity first.
    pub fn log_action<T: Serialize>(
        &self,
        user_id: EntityId,
        action: &str,
        original: Option<&T>,
        updated: &T,
    ) -> LedgerResult<ActionLog> {
        let details = match original {
            Some(original) => render_details(&diff_records(original, updated)?),
            None => String::new(),
        };

        let log = ActionLog::new(user_id, action, details);
        self.store.action_logs.create(log)
    }

    /// Get all log entries for a specific user
    pub fn get_for_user(&self, user_id: EntityId) -> LedgerResult<Vec<ActionLog>> {
        let all = self.store.action_logs.get_all()?;
        Ok(all.into_iter().filter(|log| log.user_id == user_id).collect())
    }

    /// Get a log entry by its id
    ///
    /// Fails with `NotFound` when no entry matches, so callers can tell
    /// absence apart from an entry with empty details.
    pub fn get_by_id(&self, id: EntityId) -> LedgerResult<ActionLog> {
        let all = self.store.action_logs.get_all()?;
        all.into_iter()
            .find(|log| log.id == Some(id))
            .ok_or_else(|| LedgerError::not_found(ActionLog::ENTITY_TYPE, id))
    }

    /// Get all log entries
    pub fn get_all(&self) -> LedgerResult<Vec<ActionLog>> {
        let logs = self.store.action_logs.get_all()?;
        info!(count = logs.len(), "retrieved action logs");
        Ok(logs)
    }

    /// List log entries matching a filter, one page at a time
    pub fn list(
        &self,
        filter: &super::query::LogFilter,
        page: usize,
        page_size: usize,
    ) -> LedgerResult<super::query::LogPage> {
        let logs = self.store.action_logs.get_all()?;
        Ok(super::query::filter_logs(logs, filter, page, page_size))
    }
}
