//! Storage key layout
//!
//! Every key is a one-byte prefix followed by the raw identifier bytes.

use crate::domain::{BallotKind, ConsensusAddress, OperatorAddress};

/// Key prefixes of the governance store
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPrefix {
    /// `0x20` -> Params
    Params,
    /// `0x21 ++ operator` -> Validator
    Validator,
    /// `0x22 ++ consensus address` -> operator address
    ValidatorByConsAddr,
    /// `0x23 ++ operator` -> one-byte ValidatorState
    ValidatorState,
    /// `0x24 ++ operator` -> application Vote
    Application,
    /// `0x25 ++ consensus address` -> operator address
    ApplicationByConsAddr,
    /// `0x26 ++ operator` -> kick proposal Vote
    KickProposal,
}

impl KeyPrefix {
    pub const fn as_byte(self) -> u8 {
        match self {
            KeyPrefix::Params => 0x20,
            KeyPrefix::Validator => 0x21,
            KeyPrefix::ValidatorByConsAddr => 0x22,
            KeyPrefix::ValidatorState => 0x23,
            KeyPrefix::Application => 0x24,
            KeyPrefix::ApplicationByConsAddr => 0x25,
            KeyPrefix::KickProposal => 0x26,
        }
    }

    pub fn as_bytes(self) -> Vec<u8> {
        vec![self.as_byte()]
    }

    /// Pool holding ballots of the given kind
    pub fn ballot_pool(kind: BallotKind) -> Self {
        match kind {
            BallotKind::Application => KeyPrefix::Application,
            BallotKind::KickProposal => KeyPrefix::KickProposal,
        }
    }

    fn key(self, id: &[u8]) -> Vec<u8> {
        let mut key = Vec::with_capacity(1 + id.len());
        key.push(self.as_byte());
        key.extend_from_slice(id);
        key
    }

    pub fn params_key() -> Vec<u8> {
        KeyPrefix::Params.as_bytes()
    }

    pub fn validator_key(operator: &OperatorAddress) -> Vec<u8> {
        KeyPrefix::Validator.key(operator.as_bytes())
    }

    pub fn validator_by_cons_addr_key(addr: &ConsensusAddress) -> Vec<u8> {
        KeyPrefix::ValidatorByConsAddr.key(addr.as_bytes())
    }

    pub fn validator_state_key(operator: &OperatorAddress) -> Vec<u8> {
        KeyPrefix::ValidatorState.key(operator.as_bytes())
    }

    pub fn ballot_key(kind: BallotKind, operator: &OperatorAddress) -> Vec<u8> {
        KeyPrefix::ballot_pool(kind).key(operator.as_bytes())
    }

    pub fn application_by_cons_addr_key(addr: &ConsensusAddress) -> Vec<u8> {
        KeyPrefix::ApplicationByConsAddr.key(addr.as_bytes())
    }
}
