//! Error types for snack controller operations.

use std::error::Error;
use std::fmt;

use crate::patch::PatchError;
use crate::repository::RepositoryError;

/// Error type for controller operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Caller-supplied input is inconsistent or cannot be applied.
    BadRequest(String),
    /// The referenced snack does not exist.
    NotFound(String),
    /// Repository error.
    Repository(RepositoryError),
}

impl ControllerError {
    pub(crate) fn snack_not_found(id: i32) -> Self {
        ControllerError::NotFound(format!("Snack '{}' not found.", id))
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ControllerError::BadRequest(_) => 400,
            ControllerError::NotFound(_) => 404,
            ControllerError::Repository(_) => 500,
        }
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::BadRequest(msg) => write!(f, "{}", msg),
            ControllerError::NotFound(msg) => write!(f, "{}", msg),
            ControllerError::Repository(e) => write!(f, "repository error: {}", e),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ControllerError::Repository(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RepositoryError> for ControllerError {
    fn from(err: RepositoryError) -> Self {
        ControllerError::Repository(err)
    }
}

impl From<PatchError> for ControllerError {
    fn from(err: PatchError) -> Self {
        ControllerError::BadRequest(err.to_string())
    }
}
