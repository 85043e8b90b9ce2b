//! Server configuration, read from command-line flags or the environment.

use clap::Parser;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for the snacks server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "snacks", version, about = "In-memory Snack CRUD REST API")]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "SNACKS_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Tracing filter directives, e.g. `info` or `snacks_api=debug`.
    #[arg(long = "log", env = "SNACKS_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
