//! Default values for the split search configuration.

/// Default size of the active feature subset kept after a full scan.
pub const DEFAULT_NUM_ACTIVE_FEATURES: usize = 100;

/// Default for running per-feature evaluations on the rayon pool.
pub const DEFAULT_PARALLEL: bool = true;

/// Thread count meaning "use the global rayon pool".
pub const USE_GLOBAL_POOL: usize = 0;

/// Upper bound on a dedicated pool's thread count.
pub const MAX_NUM_THREADS: usize = 4096;

/// Crate version.
pub const BOOST_SPLITTER_VERSION: &str = env!("CARGO_PKG_VERSION");
