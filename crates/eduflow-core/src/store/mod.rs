//! Raw key-value storage backends.
//!
//! A store maps string keys to serialized JSON text. It knows nothing about
//! types or fallbacks; that is the job of [`crate::cache::LocalCache`].
//!
//! - `FileStore`: one `<encoded key>.json` file per key under a data directory
//! - `MemoryStore`: process-local map, used by tests and `--ephemeral` runs

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

pub trait KvStore {
    /// Raw text stored under `key`, or `None` if the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        (**self).write(key, raw)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        (**self).write(key, raw)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }
}

/// Remove every key from `store`. Returns how many keys were removed.
pub fn clear<S: KvStore + ?Sized>(store: &S) -> Result<usize, StoreError> {
    let keys = store.keys()?;
    for key in &keys {
        store.remove(key)?;
    }
    Ok(keys.len())
}
