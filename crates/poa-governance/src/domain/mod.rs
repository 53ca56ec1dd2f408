//! Domain layer for the governance subsystem
//!
//! Pure types and rules: identities, validators and their lifecycle states,
//! ballots with quorum evaluation, params, genesis and commands.

mod address;
mod command;
mod error;
mod genesis;
mod params;
mod validator;
mod vote;

pub use address::*;
pub use command::*;
pub use error::*;
pub use genesis::*;
pub use params::*;
pub use validator::*;
pub use vote::*;
