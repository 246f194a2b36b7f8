use thiserror::Error;

use crate::models::Role;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("No demo account is available for the {0} role")]
    NoIdentityForRole(Role),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Assignment title cannot be empty")]
    EmptyTitle,

    #[error("Maximum length for assignment titles is {max} characters")]
    TitleTooLong { max: usize },
}
