//! Validator domain entities

use super::{ConsensusAddress, ConsensusPubKey, GovernanceError, GovernanceResult, OperatorAddress};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Voting power given to every seated validator. PoA membership is binary.
pub const VALIDATOR_POWER: u64 = 1;

/// Display metadata of a validator, not operationally significant
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
}

impl Description {
    pub fn new(
        moniker: impl Into<String>,
        identity: impl Into<String>,
        website: impl Into<String>,
        security_contact: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            moniker: moniker.into(),
            identity: identity.into(),
            website: website.into(),
            security_contact: security_contact.into(),
            details: details.into(),
        }
    }

    /// Description with only a moniker set
    pub fn with_moniker(moniker: impl Into<String>) -> Self {
        Self {
            moniker: moniker.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Identity and metadata of one authority-set member
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub operator_address: OperatorAddress,
    pub consensus_pubkey: ConsensusPubKey,
    pub description: Description,
}

impl Validator {
    pub fn new(
        operator_address: OperatorAddress,
        consensus_pubkey: ConsensusPubKey,
        description: Description,
    ) -> Self {
        Self {
            operator_address,
            consensus_pubkey,
            description,
        }
    }

    pub fn operator(&self) -> OperatorAddress {
        self.operator_address
    }

    pub fn consensus_address(&self) -> ConsensusAddress {
        self.consensus_pubkey.address()
    }

    /// Stateless validity check, run before a candidate record is accepted
    pub fn check_valid(&self) -> GovernanceResult<()> {
        if self.operator_address.is_empty() {
            return Err(GovernanceError::InvalidValidator {
                reason: "missing validator address",
            });
        }
        if self.consensus_pubkey.is_empty() {
            return Err(GovernanceError::InvalidValidator {
                reason: "missing consensus pubkey",
            });
        }
        if self.description.is_empty() {
            return Err(GovernanceError::InvalidValidator {
                reason: "empty description",
            });
        }
        Ok(())
    }

    /// Update giving this validator full voting power
    pub fn update_append(&self) -> ValidatorUpdate {
        ValidatorUpdate::new(self, VALIDATOR_POWER)
    }

    /// Update removing this validator's voting power
    pub fn update_remove(&self) -> ValidatorUpdate {
        ValidatorUpdate::new(self, 0)
    }
}

/// Lifecycle state of a seated validator
///
/// State Machine:
/// ```text
/// (apply / vote) ──→ [JOINING] ──epoch──→ [JOINED] ──kick / leave──→ [LEAVING] ──epoch──→ (removed)
///                        │                                               ↑
///                        └──────────────── kick / leave ─────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidatorState {
    /// Admitted, not yet effective in consensus
    Joining,
    /// Effective in consensus
    Joined,
    /// Marked for removal at the next epoch boundary
    Leaving,
}

impl ValidatorState {
    /// Single-byte storage encoding
    pub fn as_byte(self) -> u8 {
        match self {
            ValidatorState::Joining => 0,
            ValidatorState::Joined => 1,
            ValidatorState::Leaving => 2,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(ValidatorState::Joining),
            1 => Some(ValidatorState::Joined),
            2 => Some(ValidatorState::Leaving),
            _ => None,
        }
    }
}

impl fmt::Display for ValidatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidatorState::Joining => "joining",
            ValidatorState::Joined => "joined",
            ValidatorState::Leaving => "leaving",
        };
        f.write_str(s)
    }
}

/// Voting power change consumed by the consensus layer
///
/// `power == 1` adds or confirms, `power == 0` removes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorUpdate {
    pub consensus_address: ConsensusAddress,
    pub pub_key: ConsensusPubKey,
    pub power: u64,
}

impl ValidatorUpdate {
    fn new(validator: &Validator, power: u64) -> Self {
        Self {
            consensus_address: validator.consensus_address(),
            pub_key: validator.consensus_pubkey,
            power,
        }
    }

    pub fn is_removal(&self) -> bool {
        self.power == 0
    }
}
