//! Driving ports (Inbound API)

use crate::domain::{
    GovernanceCommand, GovernanceResult, OperatorAddress, Params, Validator, ValidatorState,
    ValidatorUpdate, Vote,
};
use crate::events::GovernanceEvent;
use serde::{Deserialize, Serialize};

/// Events emitted by one successfully committed command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub events: Vec<GovernanceEvent>,
}

/// Primary governance API
///
/// Every method is one atomic step: either all of its writes are committed or
/// none are.
pub trait GovernanceApi {
    /// Dispatch a command to its handler after stateless validation
    fn handle(&mut self, command: GovernanceCommand) -> GovernanceResult<CommandResult>;

    /// Apply to join the validator set
    fn submit_application(&mut self, candidate: Validator) -> GovernanceResult<CommandResult>;

    /// Vote on a pending application. The electorate is the whole registry.
    fn vote_application(
        &mut self,
        voter: OperatorAddress,
        candidate: OperatorAddress,
        approve: bool,
    ) -> GovernanceResult<CommandResult>;

    /// Propose to expel a seated validator
    fn propose_kick(
        &mut self,
        candidate: OperatorAddress,
        proposer: OperatorAddress,
    ) -> GovernanceResult<CommandResult>;

    /// Vote on a pending kick proposal. The candidate is excluded from the
    /// electorate.
    fn vote_kick_proposal(
        &mut self,
        voter: OperatorAddress,
        candidate: OperatorAddress,
        approve: bool,
    ) -> GovernanceResult<CommandResult>;

    /// Leave the validator set voluntarily
    fn leave_validator_set(&mut self, validator: OperatorAddress)
        -> GovernanceResult<CommandResult>;

    /// Reconcile lifecycle states at an epoch boundary.
    ///
    /// # Errors
    /// A registry entry without state yields a fatal `InvariantViolation`;
    /// nothing is committed in that case.
    fn end_epoch(&mut self) -> GovernanceResult<Vec<ValidatorUpdate>>;
}

/// Read-only queries over registry and pool state
pub trait GovernanceQueryApi {
    fn params(&self) -> GovernanceResult<Params>;

    /// Validators in registry order, paginated. `page` starts at 1; a `limit`
    /// of 0 means `max_validators`.
    fn validators(&self, page: u32, limit: u32) -> GovernanceResult<Vec<Validator>>;

    fn validator(&self, operator: &OperatorAddress) -> GovernanceResult<Validator>;

    fn validator_state(&self, operator: &OperatorAddress)
        -> GovernanceResult<Option<ValidatorState>>;

    fn applications(&self) -> GovernanceResult<Vec<Vote>>;

    fn kick_proposals(&self) -> GovernanceResult<Vec<Vote>>;

    /// JSON endpoint used by the query collaborator
    fn query(&self, request: &QueryRequest) -> GovernanceResult<Vec<u8>>;
}

/// Query endpoints
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "path", rename_all = "kebab-case")]
pub enum QueryRequest {
    Validators {
        #[serde(default = "first_page")]
        page: u32,
        #[serde(default)]
        limit: u32,
    },
    Validator {
        validator_addr: OperatorAddress,
    },
    Params,
    Applications,
    KickProposals,
}

fn first_page() -> u32 {
    1
}
