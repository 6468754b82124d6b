//! Service layer for userledger
//!
//! Business logic on top of the store: typed operations per entity,
//! leaving presentation concerns to the caller.

pub mod user;

pub use user::UserService;
