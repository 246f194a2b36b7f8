//! Screen content, one module per screen family.

pub mod admin;
pub mod home;
pub mod signin;
pub mod student;
pub mod teacher;
