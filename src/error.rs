use thiserror::Error;

/// Error type shared by every fallible operation in the crate.
///
/// All of these are local and recoverable: the worst case is a rejected
/// mutation or a failed optional feature. Dangling entry references are not
/// errors at all; they resolve to a placeholder label at read time.
#[derive(Error, Debug)]
pub enum WfmError {
    /// A policy or input check rejected the attempted mutation. The store is
    /// left untouched.
    #[error("{0}")]
    Validation(String),

    /// Login failed. Deliberately indistinguishable between an unknown user
    /// id and a wrong password.
    #[error("Invalid credentials. Please contact your administrator.")]
    InvalidCredentials,

    #[error("Forbidden: {0}")]
    Forbidden(&'static str),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("External service error: {service} - {message}")]
    ExternalService {
        service: &'static str,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, WfmError>;
