//! Core data models for userledger
//!
//! The entities the store persists: user records and the immutable action
//! logs the audit recorder writes about them.

pub mod action_log;
pub mod user;

pub use action_log::ActionLog;
pub use user::User;
