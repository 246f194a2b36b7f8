//! EduFlow core: mocked education dashboards over a local key-value store.
//!
//! - `store`: raw key-value backends (JSON files, in-memory)
//! - `cache`: typed get/set with fallbacks; failures never surface
//! - `router`: identity and view state, role-gated screen dispatch
//! - `session`: router state bound to the cache
//! - `dashboard`: student, teacher and admin actions
//! - `mock`: the demo dataset

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod mock;
pub mod models;
pub mod router;
pub mod session;
pub mod store;

pub use cache::LocalCache;
pub use config::Config;
pub use error::{DashboardError, RouterError, StoreError};
pub use router::{RouterState, Screen, View};
pub use session::Session;
pub use store::{FileStore, KvStore, MemoryStore};
