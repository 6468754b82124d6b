//! Store initialization
//!
//! Handles first-run seeding with the stock sample users so a fresh store
//! has something to show.

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::User;

use super::Store;

/// Check if the store needs seeding (no users yet)
pub fn needs_seeding(store: &Store) -> LedgerResult<bool> {
    Ok(store.users.count()? == 0)
}

/// Seed the store with the default sample users
///
/// Does nothing when users already exist, so calling this on every startup
/// is safe.
pub fn seed_users(store: &Store) -> LedgerResult<()> {
    if !needs_seeding(store)? {
        return Ok(());
    }

    for user in sample_users() {
        store.users.create(user)?;
    }

    Ok(())
}

fn sample_users() -> Vec<User> {
    let dob = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    vec![
        User::new("Peter", "Loew", "ploew@example.com").with_date_of_birth(dob(1990, 1, 1)),
        User::new("Benjamin Franklin", "Gates", "bfgates@example.com")
            .with_date_of_birth(dob(1999, 1, 31)),
        User::new("Castor", "Troy", "ctroy@example.com")
            .with_date_of_birth(dob(1994, 3, 26))
            .with_active(false),
        User::new("Memphis", "Raines", "mraines@example.com")
            .with_date_of_birth(dob(1991, 8, 23)),
        User::new("Stanley", "Goodspeed", "sgodspeed@example.com")
            .with_date_of_birth(dob(2000, 1, 28)),
        User::new("H.I.", "McDunnough", "himcdunnough@example.com")
            .with_date_of_birth(dob(2000, 1, 28)),
        User::new("Cameron", "Poe", "cpoe@example.com")
            .with_date_of_birth(dob(2000, 1, 28))
            .with_active(false),
        User::new("Edward", "Malus", "emalus@example.com")
            .with_date_of_birth(dob(2000, 1, 28))
            .with_active(false),
        User::new("Damon", "Macready", "dmacready@example.com")
            .with_date_of_birth(dob(2000, 1, 28))
            .with_active(false),
        User::new("Johnny", "Blaze", "jblaze@example.com").with_date_of_birth(dob(2000, 1, 28)),
        User::new("Robin", "Feld", "rfeld@example.com").with_date_of_birth(dob(2000, 1, 28)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorePaths;
    use tempfile::TempDir;

    fn open_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::open(paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_seed_populates_empty_store() {
        let (_temp_dir, store) = open_test_store();

        assert!(needs_seeding(&store).unwrap());
        seed_users(&store).unwrap();

        assert!(!needs_seeding(&store).unwrap());
        assert_eq!(store.users.count().unwrap(), 11);

        // Seeded ids are sequential from 1
        let first = store.users.get_by_id(1).unwrap();
        assert_eq!(first.surname, "Loew");
    }

    #[test]
    fn test_seed_is_idempotent() {
        let (_temp_dir, store) = open_test_store();

        seed_users(&store).unwrap();
        seed_users(&store).unwrap();

        assert_eq!(store.users.count().unwrap(), 11);
    }

    #[test]
    fn test_seed_mixes_active_flags() {
        let (_temp_dir, store) = open_test_store();
        seed_users(&store).unwrap();

        let active = store.users.get_active(true).unwrap();
        let inactive = store.users.get_active(false).unwrap();
        assert_eq!(active.len(), 7);
        assert_eq!(inactive.len(), 4);
    }
}
