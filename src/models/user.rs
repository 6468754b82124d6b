//! User model
//!
//! Represents a user record in the management system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::{ActiveEntity, Entity, EntityId};

/// A user record
///
/// Field order matters: the diff engine reports changes in declaration
/// order, so reordering fields reorders audit text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store on create
    pub id: Option<EntityId>,

    /// Forename of the user
    pub forename: String,

    /// Surname of the user
    pub surname: String,

    /// Email address of the user
    pub email: String,

    /// Date of birth of the user
    pub date_of_birth: Option<NaiveDate>,

    /// Whether the user is active
    pub is_active: bool,
}

impl User {
    /// Create a new user without an id
    pub fn new(
        forename: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            forename: forename.into(),
            surname: surname.into(),
            email: email.into(),
            date_of_birth: None,
            is_active: true,
        }
    }

    /// Set the date of birth (builder style)
    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Set the active flag (builder style)
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

impl Entity for User {
    const ENTITY_TYPE: &'static str = "User";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl ActiveEntity for User {
    fn is_active(&self) -> bool {
        self.is_active
    }
}
