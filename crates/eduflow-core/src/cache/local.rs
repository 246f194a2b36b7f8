use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::models::{AssignmentBook, Attendance, Identity};
use crate::store::KvStore;

pub const USER_KEY: &str = "eduflow_user";
pub const ASSIGNMENTS_KEY: &str = "assignments";
pub const ATTENDANCE_KEY: &str = "attendance";

/// Per-user progress key.
pub fn progress_key(user_id: &str) -> String {
    format!("progress_{}", user_id)
}

pub struct LocalCache<S> {
    store: S,
}

impl<S: KvStore> LocalCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Value stored under `key`, or `fallback` if it is missing, unreadable
    /// or does not deserialize into `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(e) => {
                debug!(key, error = %e, "Failed to read cached value, using fallback");
                fallback
            }
        }
    }

    /// Store `value` under `key`. Failures are swallowed.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            debug!(key, error = %e, "Failed to write cached value");
        }
    }

    /// Delete `key`. Failures are swallowed.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            debug!(key, error = %e, "Failed to remove cached value");
        }
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.read(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(value)?;
        self.store.write(key, &raw)
    }

    // ===== Signed-in user =====

    pub fn load_user(&self) -> Option<Identity> {
        self.get(USER_KEY, None)
    }

    pub fn save_user(&self, identity: &Identity) {
        self.set(USER_KEY, identity)
    }

    /// Signing out stores an explicit `null` rather than deleting the key.
    pub fn clear_user(&self) {
        self.set(USER_KEY, &None::<Identity>)
    }

    // ===== Progress =====

    pub fn load_progress(&self, user_id: &str) -> Option<f64> {
        self.get::<Option<f64>>(&progress_key(user_id), None)
            .map(|p| p.clamp(0.0, 1.0))
    }

    pub fn save_progress(&self, user_id: &str, progress: f64) {
        self.set(&progress_key(user_id), &progress.clamp(0.0, 1.0))
    }

    // ===== Assignments =====

    pub fn load_assignments(&self) -> AssignmentBook {
        self.get(ASSIGNMENTS_KEY, AssignmentBook::default())
    }

    pub fn save_assignments(&self, book: &AssignmentBook) {
        self.set(ASSIGNMENTS_KEY, book)
    }

    // ===== Attendance =====

    pub fn load_attendance(&self) -> Attendance {
        self.get(ATTENDANCE_KEY, Attendance::default())
    }

    pub fn save_attendance(&self, attendance: &Attendance) {
        self.set(ATTENDANCE_KEY, attendance)
    }
}

// ============================================================================
// Tests
// ============================================================================
