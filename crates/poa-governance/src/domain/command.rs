//! Governance commands
//!
//! The command/auth collaborator authenticates the submitter and places the
//! verified identity in the command before it reaches the service.

use super::{GovernanceError, GovernanceResult, OperatorAddress, Validator};
use serde::{Deserialize, Serialize};

/// One variant per governance command
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceCommand {
    /// Candidate applies to join the validator set
    SubmitApplication { candidate: Validator },
    /// Seated validator votes on a pending application
    VoteApplication {
        voter: OperatorAddress,
        candidate: OperatorAddress,
        approve: bool,
    },
    /// Seated validator proposes to expel another one
    ProposeKick {
        candidate: OperatorAddress,
        proposer: OperatorAddress,
    },
    /// Seated validator votes on a pending kick proposal
    VoteKickProposal {
        voter: OperatorAddress,
        candidate: OperatorAddress,
        approve: bool,
    },
    /// Validator leaves the set voluntarily
    LeaveValidatorSet { validator: OperatorAddress },
}

impl GovernanceCommand {
    /// Identity that must have signed the command
    pub fn signer(&self) -> OperatorAddress {
        match self {
            GovernanceCommand::SubmitApplication { candidate } => candidate.operator(),
            GovernanceCommand::VoteApplication { voter, .. }
            | GovernanceCommand::VoteKickProposal { voter, .. } => *voter,
            GovernanceCommand::ProposeKick { proposer, .. } => *proposer,
            GovernanceCommand::LeaveValidatorSet { validator } => *validator,
        }
    }

    /// Stable name used in logs and metrics
    pub fn name(&self) -> &'static str {
        match self {
            GovernanceCommand::SubmitApplication { .. } => "submit_application",
            GovernanceCommand::VoteApplication { .. } => "vote_application",
            GovernanceCommand::ProposeKick { .. } => "propose_kick",
            GovernanceCommand::VoteKickProposal { .. } => "vote_kick_proposal",
            GovernanceCommand::LeaveValidatorSet { .. } => "leave_validator_set",
        }
    }

    /// Stateless checks, independent of the registry
    pub fn validate_basic(&self) -> GovernanceResult<()> {
        match self {
            GovernanceCommand::SubmitApplication { candidate } => candidate.check_valid(),
            GovernanceCommand::VoteApplication {
                voter, candidate, ..
            }
            | GovernanceCommand::VoteKickProposal {
                voter, candidate, ..
            } => {
                if voter.is_empty() || candidate.is_empty() {
                    return Err(GovernanceError::InvalidCommand {
                        reason: "missing address",
                    });
                }
                Ok(())
            }
            GovernanceCommand::ProposeKick {
                candidate,
                proposer,
            } => {
                if proposer.is_empty() || candidate.is_empty() {
                    return Err(GovernanceError::InvalidCommand {
                        reason: "missing address",
                    });
                }
                Ok(())
            }
            GovernanceCommand::LeaveValidatorSet { validator } => {
                if validator.is_empty() {
                    return Err(GovernanceError::InvalidCommand {
                        reason: "missing address",
                    });
                }
                Ok(())
            }
        }
    }
}
