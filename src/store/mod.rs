//! Layered key-value persistence.
//!
//! Values are stored as textual JSON under two file-backed tiers, a durable
//! tier inside the data directory and a session tier under the OS temp dir,
//! with an in-process map as the last resort. Tier availability is probed
//! once at construction; a tier that cannot be written falls out of the
//! chain and the store keeps working.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Which tier a caller intends the value to live in. A value written under
/// either scope is discoverable from either, thanks to the cross-tier read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Durable,
    Session,
}

pub struct KeyValueStore {
    durable_dir: PathBuf,
    session_dir: PathBuf,
    durable_available: bool,
    session_available: bool,
    memory: RefCell<HashMap<String, String>>,
}

impl KeyValueStore {
    /// Open the store for a data directory. The session tier lives under
    /// the OS temp dir, keyed by the data directory so that parallel
    /// invocations against different data dirs do not share it.
    pub fn open(data_dir: &Path) -> Self {
        let mut hasher = DefaultHasher::new();
        data_dir.hash(&mut hasher);
        let session_dir =
            std::env::temp_dir().join(format!("medialedger-session-{:016x}", hasher.finish()));
        Self::with_dirs(data_dir.join("store"), session_dir)
    }

    pub fn with_dirs(durable_dir: PathBuf, session_dir: PathBuf) -> Self {
        let durable_available = probe_tier(&durable_dir);
        let session_available = probe_tier(&session_dir);
        if !durable_available {
            warning(format!(
                "Durable storage not available at {}, using fallback",
                durable_dir.display()
            ));
        }
        if !session_available {
            warning("Session storage not available, using fallback");
        }
        Self {
            durable_dir,
            session_dir,
            durable_available,
            session_available,
            memory: RefCell::new(HashMap::new()),
        }
    }

    pub fn durable_dir(&self) -> &Path {
        &self.durable_dir
    }

    /// Serialize and write under the tier matching `scope`, falling back to
    /// the other tier and finally to the in-process map when tiers are
    /// unavailable. The value is staged to a sibling temp file and renamed
    /// over the target, so a failed write leaves the previous blob intact.
    pub fn save<T: Serialize>(&self, key: &str, value: &T, scope: Scope) -> AppResult<()> {
        let text = serde_json::to_string(value)?;
        match self.tier_for(scope) {
            Some(dir) => {
                let staging = dir.join(format!("{key}.json.tmp"));
                fs::write(&staging, &text)
                    .and_then(|()| fs::rename(&staging, key_path(dir, key)))
                    .map_err(|e| {
                        let _ = fs::remove_file(&staging);
                        AppError::StorageWrite(key.to_string(), e.to_string())
                    })
            }
            None => {
                self.memory.borrow_mut().insert(key.to_string(), text);
                Ok(())
            }
        }
    }

    /// Read the tier matching `scope` first, then the other tier, then the
    /// in-process map. Missing keys and undecodable values both come back as
    /// `None`; a decode failure is logged, never surfaced as an error.
    pub fn load<T: DeserializeOwned>(&self, key: &str, scope: Scope) -> Option<T> {
        let text = self.raw_load(key, scope)?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warning(format!("Failed to decode stored value '{}': {}", key, e));
                None
            }
        }
    }

    /// Remove the key everywhere: both tiers and the in-process map.
    pub fn remove(&self, key: &str, _scope: Scope) {
        let _ = fs::remove_file(key_path(&self.durable_dir, key));
        let _ = fs::remove_file(key_path(&self.session_dir, key));
        self.memory.borrow_mut().remove(key);
    }

    fn raw_load(&self, key: &str, scope: Scope) -> Option<String> {
        for (dir, available) in self.read_order(scope) {
            if available {
                if let Ok(text) = fs::read_to_string(key_path(dir, key)) {
                    return Some(text);
                }
            }
        }
        self.memory.borrow().get(key).cloned()
    }

    /// Write target for a scope: preferred tier if available, else the
    /// other one, else `None` (memory).
    fn tier_for(&self, scope: Scope) -> Option<&Path> {
        let [(first, first_ok), (second, second_ok)] = self.read_order(scope);
        if first_ok {
            Some(first)
        } else if second_ok {
            Some(second)
        } else {
            None
        }
    }

    fn read_order(&self, scope: Scope) -> [(&Path, bool); 2] {
        let durable = (self.durable_dir.as_path(), self.durable_available);
        let session = (self.session_dir.as_path(), self.session_available);
        match scope {
            Scope::Durable => [durable, session],
            Scope::Session => [session, durable],
        }
    }
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

fn probe_tier(dir: &Path) -> bool {
    if fs::create_dir_all(dir).is_err() {
        return false;
    }
    let probe = dir.join(".probe");
    if fs::write(&probe, b"probe").is_err() {
        return false;
    }
    fs::remove_file(&probe).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dirs(name: &str) -> (PathBuf, PathBuf) {
        let base = env::temp_dir().join(format!("medialedger_store_{name}"));
        let _ = fs::remove_dir_all(&base);
        (base.join("durable"), base.join("session"))
    }

    /// A path below a regular file can never be created, which makes the
    /// tier probe fail.
    fn blocked_dir(name: &str) -> PathBuf {
        let file = env::temp_dir().join(format!("medialedger_block_{name}"));
        fs::write(&file, b"x").unwrap();
        file.join("nested")
    }

    #[test]
    fn save_and_load_round_trip() {
        let (durable, session) = temp_dirs("round_trip");
        let store = KeyValueStore::with_dirs(durable, session);
        store
            .save("testKey", &vec!["a".to_string(), "b".to_string()], Scope::Durable)
            .unwrap();
        let back: Vec<String> = store.load("testKey", Scope::Durable).unwrap();
        assert_eq!(back, vec!["a", "b"]);
    }

    #[test]
    fn missing_key_loads_as_none() {
        let (durable, session) = temp_dirs("missing");
        let store = KeyValueStore::with_dirs(durable, session);
        let got: Option<Vec<String>> = store.load("nothing", Scope::Durable);
        assert!(got.is_none());
    }

    #[test]
    fn decode_failure_is_swallowed() {
        let (durable, session) = temp_dirs("decode");
        let store = KeyValueStore::with_dirs(durable.clone(), session);
        fs::write(durable.join("bad.json"), b"{not json").unwrap();
        let got: Option<Vec<String>> = store.load("bad", Scope::Durable);
        assert!(got.is_none());
    }

    #[test]
    fn durable_unavailable_falls_back_to_session_and_reads_across() {
        let (_, session) = temp_dirs("fallback");
        let store = KeyValueStore::with_dirs(blocked_dir("fallback"), session.clone());
        store.save("sharedKey", &42_u32, Scope::Durable).unwrap();
        assert!(session.join("sharedKey.json").exists());
        // the value written to the session tier is discoverable from the
        // durable scope
        let got: Option<u32> = store.load("sharedKey", Scope::Durable);
        assert_eq!(got, Some(42));
    }

    #[test]
    fn failed_save_leaves_previous_blob_intact() {
        let (durable, session) = temp_dirs("atomic");
        let store = KeyValueStore::with_dirs(durable.clone(), session);
        store
            .save("guarded", &vec![1_u8, 2], Scope::Durable)
            .unwrap();

        // a directory squatting on the staging path makes the write fail
        fs::create_dir(durable.join("guarded.json.tmp")).unwrap();
        let result = store.save("guarded", &vec![9_u8], Scope::Durable);
        assert!(matches!(result, Err(AppError::StorageWrite(_, _))));

        let back: Vec<u8> = store.load("guarded", Scope::Durable).unwrap();
        assert_eq!(back, vec![1, 2]);
    }

    #[test]
    fn both_tiers_unavailable_uses_memory() {
        let store = KeyValueStore::with_dirs(blocked_dir("mem_a"), blocked_dir("mem_b"));
        store.save("memKey", &"v".to_string(), Scope::Session).unwrap();
        let got: Option<String> = store.load("memKey", Scope::Session);
        assert_eq!(got.as_deref(), Some("v"));
    }

    #[test]
    fn remove_clears_both_tiers() {
        let (durable, session) = temp_dirs("remove");
        let store = KeyValueStore::with_dirs(durable, session);
        store.save("gone", &1_u8, Scope::Durable).unwrap();
        store.save("gone", &2_u8, Scope::Session).unwrap();
        store.remove("gone", Scope::Durable);
        let got: Option<u8> = store.load("gone", Scope::Session);
        assert!(got.is_none());
    }
}
