//! Mock sign-in and persistence of the signed-in user.
//!
//! There is no backend: any non-empty phone number signs in with the chosen
//! role. The resulting [`User`] is kept as JSON under [`USER_STORAGE_KEY`] so
//! a reload restores the session.

use chrono::{DateTime, Utc};

use crate::error::{FormError, StorageError};
use crate::kv::{get_json, set_json, KeyValueStore};
use crate::models::{Role, User};

/// Storage key for the signed-in user.
pub const USER_STORAGE_KEY: &str = "sportClubUser";

/// Trim and require a phone number.
pub fn validate_phone(phone: &str) -> Result<String, FormError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(FormError::MissingPhone);
    }
    Ok(phone.to_string())
}

/// Build the account returned by the simulated sign-in.
pub fn mock_user(phone: &str, role: Role, now: DateTime<Utc>) -> User {
    let name = match role {
        Role::Coach => "المدرب أحمد",
        Role::Parent => "ولي الأمر محمد",
    };
    User {
        id: format!("{}_{}", role.as_str(), now.timestamp_millis()),
        name: name.to_string(),
        phone: phone.to_string(),
        email: Some(format!("{phone}@example.com")),
        role,
        avatar: None,
    }
}

pub fn save_user(store: &impl KeyValueStore, user: &User) -> Result<(), StorageError> {
    set_json(store, USER_STORAGE_KEY, user)
}

/// Restore a previously saved user. Malformed data counts as signed out.
pub fn load_user(store: &impl KeyValueStore) -> Option<User> {
    get_json(store, USER_STORAGE_KEY)
}

pub fn clear_user(store: &impl KeyValueStore) {
    store.remove(USER_STORAGE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone(""), Err(FormError::MissingPhone));
        assert_eq!(validate_phone("   "), Err(FormError::MissingPhone));
        assert_eq!(validate_phone(" 0501234567 ").unwrap(), "0501234567");
    }

    #[test]
    fn test_mock_user_shape() {
        let coach = mock_user("0501234567", Role::Coach, at(1_700_000_000_000));
        assert_eq!(coach.id, "coach_1700000000000");
        assert_eq!(coach.name, "المدرب أحمد");
        assert_eq!(coach.email.as_deref(), Some("0501234567@example.com"));
        assert_eq!(coach.role, Role::Coach);

        let parent = mock_user("0507654321", Role::Parent, at(5));
        assert_eq!(parent.id, "parent_5");
        assert_eq!(parent.name, "ولي الأمر محمد");
    }

    #[test]
    fn test_session_persists_across_reload() {
        let store = MemoryStore::new();
        assert!(load_user(&store).is_none());

        let user = mock_user("0500000000", Role::Parent, at(42));
        save_user(&store, &user).unwrap();

        // A fresh handle on the same storage sees the same user
        let reloaded = store.clone();
        assert_eq!(load_user(&reloaded), Some(user));

        clear_user(&store);
        assert!(load_user(&store).is_none());
    }

    #[test]
    fn test_malformed_session_is_signed_out() {
        let store = MemoryStore::new();
        store.set(USER_STORAGE_KEY, "{\"id\": 3}").unwrap();
        assert!(load_user(&store).is_none());
    }
}
