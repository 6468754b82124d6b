//! Configuration module for userledger
//!
//! Provides XDG-compliant path resolution for the data files the store
//! persists to.

pub mod paths;

pub use paths::StorePaths;
