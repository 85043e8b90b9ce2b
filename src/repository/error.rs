use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    LockPoisoned(&'static str),
    NotFound(i32),
    IdMismatch { id: i32, snack_id: i32 },
    IdsExhausted,
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::LockPoisoned(operation) => {
                write!(f, "repository lock poisoned during {}", operation)
            }
            RepositoryError::NotFound(id) => write!(f, "no snack stored with id {}", id),
            RepositoryError::IdMismatch { id, snack_id } => write!(
                f,
                "cannot store snack {} in place of snack {}",
                snack_id, id
            ),
            RepositoryError::IdsExhausted => write!(f, "no snack ids left to assign"),
        }
    }
}

impl std::error::Error for RepositoryError {}
