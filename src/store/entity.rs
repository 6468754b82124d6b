//! Capability contracts for stored entities
//!
//! The store is agnostic to everything about a record except what these
//! traits expose: an identifier slot, and optionally an active flag.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Store-assigned identifier for any entity
pub type EntityId = i64;

/// Minimal contract for a record the store can persist
///
/// The id is `None` until the store assigns one on create. Everything else
/// about the record is an opaque bag of named fields as far as the store
/// is concerned.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Human-readable label used in error messages
    const ENTITY_TYPE: &'static str;

    /// The entity's identifier, if one has been assigned
    fn id(&self) -> Option<EntityId>;

    /// Set the entity's identifier (called by the store on create)
    fn set_id(&mut self, id: EntityId);
}

/// Contract for entities that carry an active/inactive flag
///
/// Only active-capable entities may be filtered by active status or fetched
/// through the typed id-lookup path.
pub trait ActiveEntity: Entity {
    /// Whether the entity is currently active
    fn is_active(&self) -> bool;
}
