//! Events layer
//!
//! Every governance outcome is published for observability collaborators.
//! Events are informational; correctness never depends on them.

mod published;

pub use published::*;
