//! Published events (Outgoing)

use crate::domain::OperatorAddress;
use serde::{Deserialize, Serialize};

/// Event type names
pub mod event_types {
    pub const SUBMIT_APPLICATION: &str = "submit_application";
    pub const APPEND_VALIDATOR: &str = "append_validator";
    pub const PROPOSE_KICK: &str = "propose_kick";
    pub const KICK_VALIDATOR: &str = "kick_validator";
    pub const LEAVE_VALIDATOR_SET: &str = "leave_validator_set";
    pub const APPROVE_APPLICATION: &str = "approve_application";
    pub const REJECT_APPLICATION: &str = "reject_application";
    pub const REJECT_VALIDATOR: &str = "reject_validator";
    pub const APPROVE_KICK_PROPOSAL: &str = "approve_kick_proposal";
    pub const REJECT_KICK_PROPOSAL: &str = "reject_kick_proposal";
    pub const KEEP_VALIDATOR: &str = "keep_validator";
}

/// Attribute value shared by every event of this subsystem
pub const EVENT_CATEGORY: &str = "poa";

/// Outcome of a governance command
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GovernanceEvent {
    /// Application ballot opened
    SubmitApplication { candidate: OperatorAddress },
    /// Candidate seated with state Joining
    AppendValidator { candidate: OperatorAddress },
    /// Kick ballot opened
    ProposeKick {
        validator: OperatorAddress,
        proposer: OperatorAddress,
    },
    /// Validator marked Leaving by kick
    KickValidator { validator: OperatorAddress },
    /// Validator marked Leaving at its own request
    LeaveValidatorSet { validator: OperatorAddress },
    ApproveApplication {
        voter: OperatorAddress,
        candidate: OperatorAddress,
    },
    RejectApplication {
        voter: OperatorAddress,
        candidate: OperatorAddress,
    },
    /// Application ballot resolved as rejected
    RejectValidator { candidate: OperatorAddress },
    ApproveKickProposal {
        voter: OperatorAddress,
        validator: OperatorAddress,
    },
    RejectKickProposal {
        voter: OperatorAddress,
        validator: OperatorAddress,
    },
    /// Kick ballot resolved as rejected
    KeepValidator { validator: OperatorAddress },
}

impl GovernanceEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            GovernanceEvent::SubmitApplication { .. } => event_types::SUBMIT_APPLICATION,
            GovernanceEvent::AppendValidator { .. } => event_types::APPEND_VALIDATOR,
            GovernanceEvent::ProposeKick { .. } => event_types::PROPOSE_KICK,
            GovernanceEvent::KickValidator { .. } => event_types::KICK_VALIDATOR,
            GovernanceEvent::LeaveValidatorSet { .. } => event_types::LEAVE_VALIDATOR_SET,
            GovernanceEvent::ApproveApplication { .. } => event_types::APPROVE_APPLICATION,
            GovernanceEvent::RejectApplication { .. } => event_types::REJECT_APPLICATION,
            GovernanceEvent::RejectValidator { .. } => event_types::REJECT_VALIDATOR,
            GovernanceEvent::ApproveKickProposal { .. } => event_types::APPROVE_KICK_PROPOSAL,
            GovernanceEvent::RejectKickProposal { .. } => event_types::REJECT_KICK_PROPOSAL,
            GovernanceEvent::KeepValidator { .. } => event_types::KEEP_VALIDATOR,
        }
    }

    /// Vote cast on an application ballot
    pub fn application_vote(
        voter: OperatorAddress,
        candidate: OperatorAddress,
        approve: bool,
    ) -> Self {
        if approve {
            GovernanceEvent::ApproveApplication { voter, candidate }
        } else {
            GovernanceEvent::RejectApplication { voter, candidate }
        }
    }

    /// Vote cast on a kick ballot
    pub fn kick_vote(voter: OperatorAddress, validator: OperatorAddress, approve: bool) -> Self {
        if approve {
            GovernanceEvent::ApproveKickProposal { voter, validator }
        } else {
            GovernanceEvent::RejectKickProposal { voter, validator }
        }
    }
}
