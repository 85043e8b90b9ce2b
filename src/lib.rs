mod config;
mod controller;
mod docs;
mod patch;
mod repository;
mod snack;
mod telemetry;

#[cfg(feature = "http")]
pub mod http;

pub use config::{ServerConfig, DEFAULT_ADDR, DEFAULT_LOG_FILTER};
pub use controller::{ControllerError, SnacksController};
pub use docs::{annotate, HttpVerbResponses};
pub use patch::{apply as apply_patch, apply_to_snack, PatchError, PatchOperation};
pub use repository::{
    Delete, Get, InMemorySnackRepository, Insert, List, Replace, RepositoryError, SnackRepository,
};
pub use snack::{Snack, SnackFilters};
pub use telemetry::init_tracing;
