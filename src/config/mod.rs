//! Configuration management for the split search.
//!
//! [`SplitterConfig`] carries the knobs the orchestrator reads (parallelism,
//! active-set size, thread count). It is serializable so it can live in the
//! same TOML or JSON file as the rest of a boosting run's settings.

pub mod core;

pub use self::core::{SplitterConfig, SplitterConfigBuilder};
