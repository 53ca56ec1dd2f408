//! # poa-governance
//!
//! Proof-of-Authority validator-set governance.
//!
//! ## Architecture
//!
//! Seated validators decide by quorum vote who joins and who is expelled.
//! Decisions only mark lifecycle states; the consensus layer sees the change
//! at the next epoch boundary, when `end_epoch` turns states into validator
//! updates:
//!
//! ```text
//! SubmitApplication ──→ [Application pool] ──VoteApplication──→ [Registry: JOINING]
//! ProposeKick ────────→ [Kick pool] ───────VoteKickProposal──→ [Registry: LEAVING]
//! LeaveValidatorSet ──────────────────────────────────────────→ [Registry: LEAVING]
//!                                                                      │
//!                                   end_epoch ──→ Vec<ValidatorUpdate> ┘
//! ```
//!
//! Every command is atomic: its writes are staged and flushed with a single
//! `atomic_batch_write` only if it succeeds. A registry entry without a
//! lifecycle state is a fatal `InvariantViolation`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use poa_governance::{GovernanceApi, GovernanceService, InMemoryEventSink, InMemoryKVStore};
//!
//! let mut service = GovernanceService::new(InMemoryKVStore::new(), Arc::new(InMemoryEventSink::new()));
//! let updates = service.init_genesis(&GenesisState::load("genesis.json")?)?;
//!
//! service.submit_application(candidate)?;
//! service.vote_application(voter, candidate_addr, true)?;
//!
//! // At the epoch boundary
//! let updates = service.end_epoch()?;
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod store;

// Re-export main types
pub use adapters::{InMemoryEventSink, InMemoryKVStore, LoggingEventSink};
pub use domain::{
    BallotKind, ConsensusAddress, ConsensusPubKey, Description, GenesisState, GovernanceCommand,
    GovernanceError, GovernanceResult, OperatorAddress, Params, QuorumStatus, StoreError,
    Validator, ValidatorState, ValidatorUpdate, Vote,
};
pub use events::GovernanceEvent;
pub use ports::{
    BatchOperation, CommandResult, EventSink, GovernanceApi, GovernanceQueryApi, KeyValueStore,
    QueryRequest,
};
pub use service::GovernanceService;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_default() {
        let params = Params::default();
        assert_eq!(params.max_validators, 15);
        assert_eq!(params.quorum, 66);
        assert!(params.validate().is_ok());
    }
}
