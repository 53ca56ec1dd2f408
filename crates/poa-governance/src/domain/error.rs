//! Error types for the governance subsystem
//!
//! Every precondition failure of a governance command is a typed, non-fatal
//! error. `InvariantViolation` is the single fatal category: it means the
//! registry is already corrupt and the enclosing unit of work must abort.

use super::OperatorAddress;
use thiserror::Error;

/// Errors raised by the key-value storage collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Storage backend error: {message}")]
    Backend { message: String },

    #[error("Atomic batch rejected: {message}")]
    BatchRejected { message: String },
}

/// Governance error types
#[derive(Debug, Error)]
pub enum GovernanceError {
    // === Command preconditions ===
    #[error("Maximum number of validators reached")]
    MaxValidatorsReached,

    #[error("Candidate is already a validator")]
    AlreadyValidator,

    #[error("Candidate already has a pending application")]
    AlreadyApplying,

    #[error("Voter is not a validator")]
    VoterNotValidator,

    #[error("No application found for {0}")]
    NoApplicationFound(OperatorAddress),

    #[error("Voter has already voted")]
    AlreadyVoted,

    #[error("Proposer cannot be the candidate of its own kick proposal")]
    ProposerIsCandidate,

    #[error("Proposer is not a validator")]
    ProposerNotValidator,

    #[error("Not a validator: {0}")]
    NotValidator(OperatorAddress),

    #[error("Validator is already leaving the validator set")]
    ValidatorLeaving,

    #[error("Validator already has a pending kick proposal")]
    AlreadyInKickProposal,

    #[error("Voter cannot vote on its own kick proposal")]
    VoterIsCandidate,

    #[error("No kick proposal found for {0}")]
    NoKickProposalFound(OperatorAddress),

    #[error("The last validator cannot leave the validator set")]
    OnlyOneValidator,

    // === Quorum engine ===
    #[error("Quorum must be a percentage, got {0}")]
    InvalidQuorumValue(u64),

    #[error("Voter pool size {pool} is smaller than the {total} votes already cast")]
    InvalidVoterPoolSize { pool: u64, total: u64 },

    // === Stateless validation ===
    #[error("No validator found")]
    NoValidatorFound,

    #[error("Invalid validator: {reason}")]
    InvalidValidator { reason: &'static str },

    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: &'static str },

    #[error("Invalid params: {reason}")]
    InvalidParams { reason: String },

    #[error("Invalid genesis: {reason}")]
    InvalidGenesis { reason: String },

    // === Collaborators ===
    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("Codec error: {0}")]
    Codec(String),

    // === Fatal ===
    #[error("Registry invariant violated for {operator}: {reason}")]
    InvariantViolation {
        operator: OperatorAddress,
        reason: &'static str,
    },
}

impl GovernanceError {
    /// Fatal errors signal registry corruption; callers must stop processing
    /// rather than retry or continue with the next command.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GovernanceError::InvariantViolation { .. })
    }

    /// Short stable label, used for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            GovernanceError::MaxValidatorsReached => "max_validators_reached",
            GovernanceError::AlreadyValidator => "already_validator",
            GovernanceError::AlreadyApplying => "already_applying",
            GovernanceError::VoterNotValidator => "voter_not_validator",
            GovernanceError::NoApplicationFound(_) => "no_application_found",
            GovernanceError::AlreadyVoted => "already_voted",
            GovernanceError::ProposerIsCandidate => "proposer_is_candidate",
            GovernanceError::ProposerNotValidator => "proposer_not_validator",
            GovernanceError::NotValidator(_) => "not_validator",
            GovernanceError::ValidatorLeaving => "validator_leaving",
            GovernanceError::AlreadyInKickProposal => "already_in_kick_proposal",
            GovernanceError::VoterIsCandidate => "voter_is_candidate",
            GovernanceError::NoKickProposalFound(_) => "no_kick_proposal_found",
            GovernanceError::OnlyOneValidator => "only_one_validator",
            GovernanceError::InvalidQuorumValue(_) => "invalid_quorum_value",
            GovernanceError::InvalidVoterPoolSize { .. } => "invalid_voter_pool_size",
            GovernanceError::NoValidatorFound => "no_validator_found",
            GovernanceError::InvalidValidator { .. } => "invalid_validator",
            GovernanceError::InvalidCommand { .. } => "invalid_command",
            GovernanceError::InvalidParams { .. } => "invalid_params",
            GovernanceError::InvalidGenesis { .. } => "invalid_genesis",
            GovernanceError::Storage(_) => "storage",
            GovernanceError::Codec(_) => "codec",
            GovernanceError::InvariantViolation { .. } => "invariant_violation",
        }
    }
}

impl From<bincode::Error> for GovernanceError {
    fn from(e: bincode::Error) -> Self {
        GovernanceError::Codec(e.to_string())
    }
}

impl From<serde_json::Error> for GovernanceError {
    fn from(e: serde_json::Error) -> Self {
        GovernanceError::Codec(e.to_string())
    }
}

/// Result type for governance operations
pub type GovernanceResult<T> = Result<T, GovernanceError>;
