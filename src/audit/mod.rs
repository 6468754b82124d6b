//! Change auditing for userledger
//!
//! Records who changed what, field by field, in immutable action logs.
//!
//! # Architecture
//!
//! The audit system consists of three components:
//!
//! - `diff`: a pure structural diff over two same-shaped record snapshots,
//!   yielding ordered field-level change descriptors.
//! - `ActionLogService`: renders descriptors into log text and persists the
//!   resulting `ActionLog` through the record store.
//! - `query`: filtering and pagination over persisted logs for display.
//!
//! # Example
//!
//! ```rust,ignore
//! use userledger::audit::{ActionLogService, LogFilter};
//!
//! let recorder = ActionLogService::new(&store);
//!
//! // Log an edit with a field-level diff
//! recorder.log_action(user_id, "EditUser", Some(&original), &updated)?;
//!
//! // Log a creation (nothing to diff)
//! recorder.log_action(user_id, "AddNewUser", None, &created)?;
//!
//! // List page 1 of that user's entries
//! let page = recorder.list(&LogFilter::default().for_user(user_id), 1, 10)?;
//! ```

pub mod diff;
pub mod query;
pub mod recorder;

pub use diff::{diff_records, render_details, FieldChange};
pub use query::{filter_logs, LogFilter, LogPage};
pub use recorder::ActionLogService;
