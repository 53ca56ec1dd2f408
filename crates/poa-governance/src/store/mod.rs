//! Typed storage over the `KeyValueStore` port
//!
//! - `keys`: key layout of the registry, the pools and params
//! - `staged`: read-your-writes overlay committed as one atomic batch
//! - `registry`: typed accessors for validators, states, ballots and params

mod keys;
mod registry;
mod staged;

pub use keys::*;
pub use registry::*;
pub use staged::*;
