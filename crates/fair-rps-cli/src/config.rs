//! Runtime configuration from the command line and environment.

use std::env;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Play one game with these moves, in cycle order
    Play { moves: Vec<String> },
    /// Check a revealed key and move against a digest
    Verify(VerifyRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    pub key: String,
    pub chosen_move: String,
    pub hmac: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub mode: Mode,
    pub log_filter: String,
}

impl CliConfig {
    /// Combine the parsed mode with settings from the environment
    pub fn new(mode: Mode) -> Self {
        Self::with_log_filter(mode, env::var("RUST_LOG").ok())
    }

    fn with_log_filter(mode: Mode, rust_log: Option<String>) -> Self {
        let log_filter = rust_log
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self { mode, log_filter }
    }
}
