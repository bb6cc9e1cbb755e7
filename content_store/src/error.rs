//! Error types for store operations.

use content_model::ValidationErrors;
use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Which unique key collided when registering a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKey {
    Email,
    Nickname,
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserKey::Email => f.write_str("email"),
            UserKey::Nickname => f.write_str("nickname"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user already exists: {field} {value:?} is taken")]
    DuplicateUser { field: UserKey, value: String },

    #[error("no user with email {0:?}")]
    UserNotFound(String),

    #[error("invalid login or password")]
    InvalidCredentials,

    #[error("news ids exhausted: the largest stored id is {}", u64::MAX)]
    NewsIdsExhausted,

    #[error("stored record under {key} is malformed, refusing to overwrite it: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("registration form rejected: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to encode record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type StoreResult<T> = Result<T, StoreError>;
