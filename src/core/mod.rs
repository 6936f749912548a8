//! Core infrastructure: shared types, defaults, errors and logging setup.
//!
//! - [`types`]: index and value type aliases
//! - [`constants`]: configuration defaults
//! - [`error`]: the crate error type and `Result` alias

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{Result, SplitterError};
pub use types::*;

/// Initialize the `env_logger` backend for the `log` facade.
///
/// Defaults to the `info` level when `RUST_LOG` is unset. Calling it more
/// than once is harmless.
pub fn initialize_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
