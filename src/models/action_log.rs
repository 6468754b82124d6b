//! Action log model
//!
//! An immutable entry describing who did what and which fields changed.
//! Entries are created once by the audit recorder and never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Entity, EntityId};

/// A single audit log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLog {
    /// Unique identifier, assigned by the store on create
    pub id: Option<EntityId>,

    /// Id of the user who performed the action
    pub user_id: EntityId,

    /// Label of the action performed (e.g. "EditUser")
    pub action: String,

    /// When the action completed, in UTC. Assigned at write time.
    pub action_date: DateTime<Utc>,

    /// Multi-line field-change text, one line per changed field.
    /// Empty for actions with nothing to diff (e.g. creations).
    pub details: String,
}

impl ActionLog {
    /// Create a new log entry stamped with the current UTC instant
    pub fn new(user_id: EntityId, action: impl Into<String>, details: String) -> Self {
        Self {
            id: None,
            user_id,
            action: action.into(),
            action_date: Utc::now(),
            details,
        }
    }
}

impl Entity for ActionLog {
    const ENTITY_TYPE: &'static str = "ActionLog";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_stamped() {
        let before = Utc::now();
        let log = ActionLog::new(1, "AddNewUser", String::new());
        let after = Utc::now();

        assert_eq!(log.id, None);
        assert_eq!(log.user_id, 1);
        assert_eq!(log.action, "AddNewUser");
        assert!(log.details.is_empty());
        assert!(log.action_date >= before && log.action_date <= after);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut log = ActionLog::new(2, "EditUser", "Field email changed from a to b\n".into());
        log.set_id(9);

        let json = serde_json::to_string(&log).unwrap();
        let back: ActionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
