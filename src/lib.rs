//! userledger - user record management core with change auditing
//!
//! This library provides the record-keeping core of a small administrative
//! user-management application: a generic JSON-backed record store, a
//! structural diff engine, an audit recorder, and log query/filtering.
//! Presentation concerns (routing, views, input validation) belong to the
//! caller.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: path resolution for the data directory
//! - `error`: custom error types
//! - `models`: the stored entities (users, action logs)
//! - `store`: generic JSON file persistence with atomic commits
//! - `audit`: structural diffing, audit recording, and log queries
//! - `services`: typed business operations per entity
//!
//! # Example
//!
//! ```rust,ignore
//! use userledger::audit::ActionLogService;
//! use userledger::config::StorePaths;
//! use userledger::services::UserService;
//! use userledger::store::{seed_users, Store};
//!
//! let store = Store::open(StorePaths::new()?)?;
//! seed_users(&store)?;
//!
//! let users = UserService::new(&store);
//! let recorder = ActionLogService::new(&store);
//!
//! let original = users.get_by_id(1)?;
//! let mut updated = original.clone();
//! updated.email = "new@example.com".into();
//!
//! users.update(updated.clone())?;
//! recorder.log_action(1, "EditUser", Some(&original), &updated)?;
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{LedgerError, LedgerResult};
