//! InMemorySnackRepository - Vec-backed snack store.

use std::sync::{Arc, RwLock};

use crate::snack::{Snack, SnackFilters};

use super::error::RepositoryError;
use super::repository::{Delete, Get, Insert, List, Replace};

struct SnackTable {
    snacks: Vec<Snack>,
    /// Highest id ever assigned, so ids are not reused after a delete.
    last_id: i32,
}

/// In-memory snack store. Lookups are linear scans.
///
/// Clone-friendly via Arc: clones share the same table.
#[derive(Clone)]
pub struct InMemorySnackRepository {
    table: Arc<RwLock<SnackTable>>,
}

impl Default for InMemorySnackRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySnackRepository {
    /// Create an empty store. The first inserted snack gets id 1.
    pub fn new() -> Self {
        Self::with_snacks(Vec::new())
    }

    /// Create a store holding the five seed snacks, ids 1 to 5.
    pub fn seeded() -> Self {
        Self::with_snacks(vec![
            Snack::with_id(1, "Apple Slices with Peanut Butter", 200),
            Snack::with_id(2, "Greek Yogurt Parfait", 250),
            Snack::with_id(3, "Mixed Nuts", 180),
            Snack::with_id(4, "Hummus and Veggie Sticks", 125),
            Snack::with_id(5, "Dark Chocolate", 175),
        ])
    }

    /// Create a store holding `snacks` as given.
    ///
    /// Later snacks with an id already present are dropped.
    pub fn with_snacks(snacks: Vec<Snack>) -> Self {
        let mut table = SnackTable {
            snacks: Vec::with_capacity(snacks.len()),
            last_id: 0,
        };
        for snack in snacks {
            if table.snacks.iter().any(|s| s.id == snack.id) {
                continue;
            }
            table.last_id = table.last_id.max(snack.id);
            table.snacks.push(snack);
        }
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Number of stored snacks.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(table.snacks.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl List for InMemorySnackRepository {
    fn list(&self, filters: &SnackFilters) -> Result<Vec<Snack>, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        let mut snacks: Vec<Snack> = table
            .snacks
            .iter()
            .filter(|snack| filters.matches(snack))
            .cloned()
            .collect();
        snacks.sort_by_key(|snack| snack.id);
        Ok(snacks)
    }
}

impl Get for InMemorySnackRepository {
    fn get(&self, id: i32) -> Result<Option<Snack>, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(table.snacks.iter().find(|snack| snack.id == id).cloned())
    }
}

impl Insert for InMemorySnackRepository {
    fn insert(&self, mut snack: Snack) -> Result<Snack, RepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        let max_id = table.snacks.iter().map(|s| s.id).max().unwrap_or(0);
        snack.id = table
            .last_id
            .max(max_id)
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;
        table.last_id = snack.id;
        table.snacks.push(snack.clone());
        Ok(snack)
    }
}

impl Replace for InMemorySnackRepository {
    fn replace(&self, id: i32, snack: Snack) -> Result<Snack, RepositoryError> {
        if snack.id != id {
            return Err(RepositoryError::IdMismatch {
                id,
                snack_id: snack.id,
            });
        }
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        let slot = table
            .snacks
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        *slot = snack.clone();
        Ok(snack)
    }
}

impl Delete for InMemorySnackRepository {
    fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        let index = table
            .snacks
            .iter()
            .position(|s| s.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        table.snacks.remove(index);
        Ok(())
    }
}
