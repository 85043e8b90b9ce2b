use crate::snack::{Snack, SnackFilters};

use super::error::RepositoryError;

/// List snacks matching the filters, ordered by ascending id.
pub trait List {
    fn list(&self, filters: &SnackFilters) -> Result<Vec<Snack>, RepositoryError>;
}

/// Get a single snack by id.
pub trait Get {
    fn get(&self, id: i32) -> Result<Option<Snack>, RepositoryError>;

    fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.get(id)?.is_some())
    }
}

/// Insert a snack under a freshly assigned id.
pub trait Insert {
    /// Any id carried by `snack` is overwritten.
    fn insert(&self, snack: Snack) -> Result<Snack, RepositoryError>;
}

/// Replace the snack stored under `id`.
pub trait Replace {
    /// Fails with `NotFound` if `id` is absent and with `IdMismatch` if
    /// `snack.id != id`.
    fn replace(&self, id: i32, snack: Snack) -> Result<Snack, RepositoryError>;
}

/// Delete the snack stored under `id`.
pub trait Delete {
    /// Fails with `NotFound` if `id` is absent.
    fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

/// Full repository trait combining all capabilities.
pub trait SnackRepository: List + Get + Insert + Replace + Delete + Send + Sync {}

// Blanket implementation: anything implementing all traits is a SnackRepository
impl<T> SnackRepository for T where T: List + Get + Insert + Replace + Delete + Send + Sync {}
