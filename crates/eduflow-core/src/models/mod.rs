//! Data models for EduFlow entities.
//!
//! - `Identity`, `Role`: the signed-in mock user and which dashboard it sees
//! - `Course`: static catalog entries
//! - `Assignment`, `AssignmentBook`: teacher assignments, newest first
//! - `Attendance`: presence flags keyed by student id

pub mod assignment;
pub mod attendance;
pub mod course;
pub mod identity;

pub use assignment::{Assignment, AssignmentBook, MAX_TITLE_LENGTH};
pub use attendance::Attendance;
pub use course::Course;
pub use identity::{Identity, Role};
