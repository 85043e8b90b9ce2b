//! Snacks controller - CRUD operations over a `SnackRepository`.
//!
//! The controller checks preconditions (matching ids, existence) before
//! touching the repository and reports failures as [`ControllerError`]s
//! that map onto HTTP status codes. It is transport-agnostic; the axum
//! routes in `http` are a thin layer over it.
//!
//! ## Example
//!
//! ```ignore
//! use snacks_api::{InMemorySnackRepository, Snack, SnackFilters, SnacksController};
//!
//! let controller = SnacksController::new(InMemorySnackRepository::seeded());
//! let created = controller.create(Snack::new("Trail Mix", 210))?;
//! assert_eq!(created.id, 6);
//! let light = controller.list(&SnackFilters::max_calories(180))?;
//! ```

mod error;

pub use error::ControllerError;

use tracing::{debug, info, warn};

use crate::patch::{self, PatchOperation};
use crate::repository::SnackRepository;
use crate::snack::{Snack, SnackFilters};

/// CRUD controller for snacks.
pub struct SnacksController<R> {
    repository: R,
}

impl<R: SnackRepository> SnacksController<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Snacks matching `filters`, ordered by id.
    pub fn list(&self, filters: &SnackFilters) -> Result<Vec<Snack>, ControllerError> {
        let snacks = self.repository.list(filters)?;
        debug!(max_calories = ?filters.max_calories, count = snacks.len(), "listed snacks");
        Ok(snacks)
    }

    pub fn get(&self, id: i32) -> Result<Snack, ControllerError> {
        self.existing(id)
    }

    /// Store `snack` under a new id. Identical submissions create
    /// distinct snacks.
    pub fn create(&self, snack: Snack) -> Result<Snack, ControllerError> {
        let created = self.repository.insert(snack)?;
        info!(id = created.id, name = %created.name, "created snack");
        Ok(created)
    }

    /// Overwrite the name and calories of snack `id` with those of `snack`.
    ///
    /// `snack.id` must equal `id`.
    pub fn update(&self, id: i32, snack: Snack) -> Result<Snack, ControllerError> {
        if id != snack.id {
            warn!(id, snack_id = snack.id, "rejected update with mismatched ids");
            return Err(ControllerError::BadRequest(format!(
                "The Id '{}' does not match the Snack Id '{}'",
                id, snack.id
            )));
        }

        let mut stored = self.existing(id)?;
        stored.name = snack.name;
        stored.calories = snack.calories;

        let updated = self.repository.replace(id, stored)?;
        info!(id, "updated snack");
        Ok(updated)
    }

    /// Apply `operations` in order to snack `id`.
    ///
    /// The patch is all-or-nothing: if any operation fails the snack is
    /// left unchanged and the failure is reported as a bad request.
    pub fn patch(
        &self,
        id: i32,
        operations: &[PatchOperation],
    ) -> Result<Snack, ControllerError> {
        let stored = self.existing(id)?;

        let patched = patch::apply_to_snack(&stored, operations).map_err(|e| {
            let ops: Vec<&str> = operations.iter().map(PatchOperation::name).collect();
            warn!(id, ?ops, error = %e, "rejected patch");
            ControllerError::from(e)
        })?;

        let updated = self.repository.replace(id, patched)?;
        info!(id, operations = operations.len(), "patched snack");
        Ok(updated)
    }

    pub fn delete(&self, id: i32) -> Result<(), ControllerError> {
        self.existing(id)?;
        self.repository.delete(id)?;
        info!(id, "deleted snack");
        Ok(())
    }

    fn existing(&self, id: i32) -> Result<Snack, ControllerError> {
        match self.repository.get(id)? {
            Some(snack) => Ok(snack),
            None => {
                debug!(id, "snack not found");
                Err(ControllerError::snack_not_found(id))
            }
        }
    }
}
