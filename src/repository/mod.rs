//! Repository - storage for snack records.
//!
//! Capabilities are split into small traits (`List`, `Get`, `Insert`,
//! `Replace`, `Delete`); anything implementing all of them is a
//! `SnackRepository`. `InMemorySnackRepository` is the process-lifetime
//! store the server is built on.

mod error;
mod in_memory;
mod repository;

pub use error::RepositoryError;
pub use in_memory::InMemorySnackRepository;
pub use repository::{Delete, Get, Insert, List, Replace, SnackRepository};
