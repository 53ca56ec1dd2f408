//! Adapters layer (Hexagonal Architecture)
//!
//! - `memory`: ordered in-memory `KeyValueStore`
//! - `event_sink`: in-memory and logging `EventSink` implementations

mod event_sink;
mod memory;

pub use event_sink::*;
pub use memory::*;
