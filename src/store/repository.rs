//! Generic JSON-backed repository
//!
//! One `Repository<T>` instance manages one entity type in one JSON file.
//! Every public operation is a single atomic commit: the new state is
//! written to disk (temp file + rename) before the in-memory map is
//! swapped, so a failed write leaves both memory and disk untouched.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

use super::entity::{ActiveEntity, Entity, EntityId};
use super::file_io::{read_json, write_json_atomic};

/// On-disk representation of a repository's contents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
struct RecordData<T: Entity> {
    records: Vec<T>,
}

impl<T: Entity> Default for RecordData<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

/// Repository for persisting one entity type
pub struct Repository<T: Entity> {
    path: PathBuf,
    data: RwLock<BTreeMap<EntityId, T>>,
}

impl<T: Entity> Repository<T> {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load records from disk, replacing the in-memory state
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: RecordData<T> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in file_data.records {
            let id = record.id().ok_or_else(|| {
                LedgerError::Storage(format!(
                    "{} record on disk has no id: {}",
                    T::ENTITY_TYPE,
                    self.path.display()
                ))
            })?;
            data.insert(id, record);
        }

        Ok(())
    }

    /// Get all records, in id order
    pub fn get_all(&self) -> LedgerResult<Vec<T>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().cloned().collect())
    }

    /// Create a record, assigning the next id if none is set
    ///
    /// Returns the record as persisted. It is visible to `get_all` and
    /// `get_by_id` as soon as this call returns.
    pub fn create(&self, mut entity: T) -> LedgerResult<T> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = match entity.id() {
            Some(id) => {
                if data.contains_key(&id) {
                    return Err(LedgerError::InvalidArgument(format!(
                        "{} with id {} already exists",
                        T::ENTITY_TYPE,
                        id
                    )));
                }
                id
            }
            None => {
                let id = data.keys().next_back().map_or(1, |max| max + 1);
                entity.set_id(id);
                id
            }
        };

        let mut next = data.clone();
        next.insert(id, entity.clone());
        self.persist(&next)?;
        *data = next;

        Ok(entity)
    }

    /// Overwrite the record matching the entity's id
    ///
    /// Fails with `NotFound` rather than silently inserting when the id
    /// does not exist.
    pub fn update(&self, entity: T) -> LedgerResult<()> {
        let id = entity.id().ok_or_else(|| {
            LedgerError::InvalidArgument(format!("{} has no id to update", T::ENTITY_TYPE))
        })?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if !data.contains_key(&id) {
            return Err(LedgerError::not_found(T::ENTITY_TYPE, id));
        }

        let mut next = data.clone();
        next.insert(id, entity);
        self.persist(&next)?;
        *data = next;

        Ok(())
    }

    /// Remove the record matching the entity's id
    pub fn delete(&self, entity: &T) -> LedgerResult<()> {
        let id = entity.id().ok_or_else(|| {
            LedgerError::InvalidArgument(format!("{} has no id to delete", T::ENTITY_TYPE))
        })?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if !data.contains_key(&id) {
            return Err(LedgerError::not_found(T::ENTITY_TYPE, id));
        }

        let mut next = data.clone();
        next.remove(&id);
        self.persist(&next)?;
        *data = next;

        Ok(())
    }

    /// Check if a record with the given id exists
    pub fn exists(&self, id: EntityId) -> LedgerResult<bool> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Count records
    pub fn count(&self) -> LedgerResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Write the given state to disk atomically
    fn persist(&self, data: &BTreeMap<EntityId, T>) -> LedgerResult<()> {
        let file_data = RecordData {
            records: data.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }
}

impl<T: ActiveEntity> Repository<T> {
    /// Get all records whose active flag equals `is_active`
    pub fn get_active(&self, is_active: bool) -> LedgerResult<Vec<T>> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|e| e.is_active() == is_active).collect())
    }

    /// Get the record with the given id
    ///
    /// Fails with `NotFound` when no record matches, so callers can branch
    /// on absence instead of receiving a silent default.
    pub fn get_by_id(&self, id: EntityId) -> LedgerResult<T> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        data.get(&id)
            .cloned()
            .ok_or_else(|| LedgerError::not_found(T::ENTITY_TYPE, id))
    }
}
