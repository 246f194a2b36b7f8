//! Guarded local persistence.
//!
//! `LocalCache` wraps a [`crate::store::KvStore`] and stores JSON values under
//! string keys. Reads fall back to a caller-supplied default and writes are
//! best-effort: failures are logged at debug level and never surfaced.
//!
//! Well-known keys:
//! - `eduflow_user`: the signed-in identity, or `null`
//! - `progress_<userId>`: lesson progress in `[0, 1]`
//! - `assignments`: teacher assignments, newest first
//! - `attendance`: presence flags by student id

pub mod local;

pub use local::{progress_key, LocalCache, ASSIGNMENTS_KEY, ATTENDANCE_KEY, USER_KEY};
