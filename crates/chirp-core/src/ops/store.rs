use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::{ChirpError, Result};
use crate::model::{User, UserId};

/// In-memory user store with get-or-create semantics
///
/// Users live in an arena (`Vec<User>`) and are addressed by `UserId` handles.
/// A case-folded index maps names to handles, so "Alice" and "alice" resolve
/// to the same record. Users are never removed.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    /// Arena of users, indexed by `UserId`
    users: Vec<User>,
    /// Lower-cased name to handle
    index: HashMap<String, UserId>,
    /// Last issued post sequence number
    last_post_seq: u64,
}

impl UserStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            index: HashMap::new(),
            last_post_seq: 0,
        }
    }

    /// Resolve a user by name, creating it on first reference
    ///
    /// The first call for a given name (ignoring case) fixes the display name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUserName` if the name is empty or whitespace-only.
    pub fn get_or_create(&mut self, name: &str) -> Result<UserId> {
        validate_user_name(name)?;

        let key = name.to_lowercase();
        if let Some(id) = self.index.get(&key) {
            return Ok(*id);
        }

        let id = UserId(self.users.len());
        self.users.push(User::new(id, name));
        self.index.insert(key, id);
        tracing::debug!(user = name, user_id = %id, "user created");

        Ok(id)
    }

    /// Look a user up by name without creating it
    pub fn find(&self, name: &str) -> Option<UserId> {
        self.index.get(&name.to_lowercase()).copied()
    }

    /// Get a user by handle
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the handle was not issued by this store.
    pub fn user(&self, id: UserId) -> Result<&User> {
        self.users.get(id.0).ok_or_else(|| ChirpError::UserNotFound {
            user_id: id.to_string(),
        })
    }

    /// Get a mutable reference to a user by handle
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the handle was not issued by this store.
    pub fn user_mut(&mut self, id: UserId) -> Result<&mut User> {
        self.users
            .get_mut(id.0)
            .ok_or_else(|| ChirpError::UserNotFound {
                user_id: id.to_string(),
            })
    }

    /// Issue the next post sequence number
    pub fn next_post_seq(&mut self) -> u64 {
        self.last_post_seq += 1;
        self.last_post_seq
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn validate_user_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ChirpError::InvalidUserName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// A user store shared between services
///
/// One global lock guards every read-modify-write sequence, such as
/// get-or-create followed by an append or a follow-set check.
pub type SharedStore = Arc<RwLock<UserStore>>;

/// Wrap a store for sharing between services
pub fn shared_store(store: UserStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

/// Acquire the store for reading
///
/// # Errors
///
/// Returns `StoreLockPoisoned` if a writer panicked while holding the lock.
pub fn read_store(store: &SharedStore) -> Result<RwLockReadGuard<'_, UserStore>> {
    store.read().map_err(|_| ChirpError::StoreLockPoisoned)
}

/// Acquire the store for writing
///
/// # Errors
///
/// Returns `StoreLockPoisoned` if a writer panicked while holding the lock.
pub fn write_store(store: &SharedStore) -> Result<RwLockWriteGuard<'_, UserStore>> {
    store.write().map_err(|_| ChirpError::StoreLockPoisoned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store() {
        let store = UserStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_get_or_create_returns_same_handle() {
        let mut store = UserStore::new();
        let a = store.get_or_create("Alice").unwrap();
        let b = store.get_or_create("Alice").unwrap();

        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_or_create_is_case_insensitive_and_keeps_first_casing() {
        let mut store = UserStore::new();
        let a = store.get_or_create("Alice").unwrap();
        let b = store.get_or_create("ALICE").unwrap();
        let c = store.get_or_create("alice").unwrap();

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(store.user(a).unwrap().name, "Alice");
    }

    #[test]
    fn test_get_or_create_rejects_blank_names() {
        let mut store = UserStore::new();
        for name in ["", "   ", "\t\n"] {
            let result = store.get_or_create(name);
            assert!(matches!(result, Err(ChirpError::InvalidUserName { .. })));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_does_not_create() {
        let mut store = UserStore::new();
        assert!(store.find("bob").is_none());
        assert!(store.is_empty());

        let id = store.get_or_create("Bob").unwrap();
        assert_eq!(store.find("bob"), Some(id));
    }

    #[test]
    fn test_foreign_handle_is_not_found() {
        let mut other = UserStore::new();
        other.get_or_create("a").unwrap();
        let foreign = other.get_or_create("b").unwrap();

        let store = UserStore::new();
        assert!(matches!(
            store.user(foreign),
            Err(ChirpError::UserNotFound { .. })
        ));
    }

    #[test]
    fn test_post_seq_strictly_increases() {
        let mut store = UserStore::new();
        let first = store.next_post_seq();
        let second = store.next_post_seq();
        assert!(second > first);
    }

    #[test]
    fn test_shared_store_lock_helpers() {
        let shared = shared_store(UserStore::new());
        write_store(&shared).unwrap().get_or_create("carol").unwrap();
        assert_eq!(read_store(&shared).unwrap().len(), 1);
    }
}
