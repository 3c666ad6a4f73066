//! Unified prelude — everything needed to run pheromone updates.
//!
//! ```rust
//! use formica::prelude::*;
//! ```

pub use formica_runtime::prelude::*;
