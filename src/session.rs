//! Current-user session record.
//!
//! No credential check happens here: the session is a convenience record
//! shared across business contexts, written to both storage scopes so it is
//! found again whichever tier survived.

use crate::errors::AppResult;
use crate::store::{KeyValueStore, Scope};
use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};

const CURRENT_USER_KEY: &str = "currentUser";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub login_time: String,
    #[serde(default)]
    pub session_id: String,
}

pub fn login(store: &KeyValueStore, username: &str, role: &str) -> AppResult<CurrentUser> {
    let user = CurrentUser {
        username: username.to_string(),
        role: role.to_string(),
        login_time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        session_id: generate_session_id(),
    };
    // both scopes, so the record survives whichever tier is flaky
    store.save(CURRENT_USER_KEY, &user, Scope::Session)?;
    store.save(CURRENT_USER_KEY, &user, Scope::Durable)?;
    Ok(user)
}

/// Session scope first, then durable.
pub fn current_user(store: &KeyValueStore) -> Option<CurrentUser> {
    store
        .load(CURRENT_USER_KEY, Scope::Session)
        .or_else(|| store.load(CURRENT_USER_KEY, Scope::Durable))
}

pub fn logout(store: &KeyValueStore) {
    store.remove(CURRENT_USER_KEY, Scope::Session);
    store.remove(CURRENT_USER_KEY, Scope::Durable);
}

fn generate_session_id() -> String {
    let suffix: u64 = rand::thread_rng().r#gen();
    format!("session_{:016x}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn test_store(name: &str) -> KeyValueStore {
        let base = env::temp_dir().join(format!("medialedger_session_{name}"));
        let _ = fs::remove_dir_all(&base);
        KeyValueStore::with_dirs(base.join("durable"), base.join("session"))
    }

    #[test]
    fn login_then_logout() {
        let store = test_store("cycle");
        assert!(current_user(&store).is_none());

        let user = login(&store, "chisomo", "admin").unwrap();
        assert!(user.session_id.starts_with("session_"));

        let found = current_user(&store).unwrap();
        assert_eq!(found.username, "chisomo");
        assert_eq!(found.role, "admin");

        logout(&store);
        assert!(current_user(&store).is_none());
    }
}
