//! Typed accessors for the validator registry, the ballot pools and params

use super::keys::KeyPrefix;
use crate::domain::{
    BallotKind, ConsensusAddress, GovernanceError, GovernanceResult, OperatorAddress, Params,
    Validator, ValidatorState, Vote,
};
use crate::ports::outbound::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Registry and pool keeper over any `KeyValueStore`
///
/// Records are bincode-encoded. Consensus-address indexes hold the raw
/// operator address bytes.
pub struct GovernanceStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> GovernanceStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn into_inner(self) -> S {
        self.kv
    }

    fn read<T: DeserializeOwned>(&self, key: &[u8]) -> GovernanceResult<Option<T>> {
        match self.kv.get(key)? {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&mut self, key: &[u8], value: &T) -> GovernanceResult<()> {
        let bytes = bincode::serialize(value)?;
        self.kv.put(key, &bytes)?;
        Ok(())
    }

    fn read_index(&self, key: &[u8]) -> GovernanceResult<Option<OperatorAddress>> {
        match self.kv.get(key)? {
            Some(bytes) => OperatorAddress::from_slice(&bytes)
                .map(Some)
                .ok_or_else(|| GovernanceError::Codec("malformed operator address index".into())),
            None => Ok(None),
        }
    }

    // =========================================================================
    // PARAMS
    // =========================================================================

    /// Stored params, or the defaults if genesis never wrote any
    pub fn params(&self) -> GovernanceResult<Params> {
        Ok(self.read(&KeyPrefix::params_key())?.unwrap_or_default())
    }

    pub fn set_params(&mut self, params: &Params) -> GovernanceResult<()> {
        self.write(&KeyPrefix::params_key(), params)
    }

    // =========================================================================
    // VALIDATOR REGISTRY
    // =========================================================================

    pub fn get_validator(&self, operator: &OperatorAddress) -> GovernanceResult<Option<Validator>> {
        self.read(&KeyPrefix::validator_key(operator))
    }

    pub fn get_validator_by_consensus_address(
        &self,
        addr: &ConsensusAddress,
    ) -> GovernanceResult<Option<Validator>> {
        match self.read_index(&KeyPrefix::validator_by_cons_addr_key(addr))? {
            Some(operator) => self.get_validator(&operator),
            None => Ok(None),
        }
    }

    /// Record and consensus index. State is written separately.
    pub fn set_validator(&mut self, validator: &Validator) -> GovernanceResult<()> {
        let operator = validator.operator();
        self.write(&KeyPrefix::validator_key(&operator), validator)?;
        self.kv.put(
            &KeyPrefix::validator_by_cons_addr_key(&validator.consensus_address()),
            operator.as_bytes(),
        )?;
        Ok(())
    }

    pub fn get_validator_state(
        &self,
        operator: &OperatorAddress,
    ) -> GovernanceResult<Option<ValidatorState>> {
        match self.kv.get(&KeyPrefix::validator_state_key(operator))? {
            Some(bytes) => match bytes.as_slice() {
                [byte] => ValidatorState::from_byte(*byte)
                    .map(Some)
                    .ok_or_else(|| GovernanceError::Codec(format!("unknown validator state {byte}"))),
                _ => Err(GovernanceError::Codec("malformed validator state".into())),
            },
            None => Ok(None),
        }
    }

    pub fn set_validator_state(
        &mut self,
        operator: &OperatorAddress,
        state: ValidatorState,
    ) -> GovernanceResult<()> {
        self.kv
            .put(&KeyPrefix::validator_state_key(operator), &[state.as_byte()])?;
        Ok(())
    }

    /// Seat a validator in state `Joining`
    pub fn append_validator(&mut self, validator: &Validator) -> GovernanceResult<()> {
        self.set_validator(validator)?;
        self.set_validator_state(&validator.operator(), ValidatorState::Joining)
    }

    /// Delete the record, its consensus index and its state. No-op if absent.
    pub fn remove_validator(&mut self, operator: &OperatorAddress) -> GovernanceResult<()> {
        if let Some(validator) = self.get_validator(operator)? {
            self.kv
                .delete(&KeyPrefix::validator_by_cons_addr_key(&validator.consensus_address()))?;
        }
        self.kv.delete(&KeyPrefix::validator_key(operator))?;
        self.kv.delete(&KeyPrefix::validator_state_key(operator))?;
        Ok(())
    }

    /// Registry entries in operator-key order.
    ///
    /// The key range is snapshotted when called; records decode lazily.
    pub fn validators(
        &self,
    ) -> GovernanceResult<impl Iterator<Item = GovernanceResult<Validator>>> {
        let entries = self.kv.prefix_scan(&KeyPrefix::Validator.as_bytes())?;
        Ok(entries
            .into_iter()
            .map(|(_, bytes)| bincode::deserialize(&bytes).map_err(GovernanceError::from)))
    }

    pub fn all_validators(&self) -> GovernanceResult<Vec<Validator>> {
        self.validators()?.collect()
    }

    pub fn validator_count(&self) -> GovernanceResult<u64> {
        let entries = self.kv.prefix_scan(&KeyPrefix::Validator.as_bytes())?;
        Ok(entries.len() as u64)
    }

    // =========================================================================
    // BALLOT POOLS
    // =========================================================================

    /// Ballot keyed by the operator address of its subject
    pub fn get_ballot(
        &self,
        kind: BallotKind,
        operator: &OperatorAddress,
    ) -> GovernanceResult<Option<Vote>> {
        self.read(&KeyPrefix::ballot_key(kind, operator))
    }

    pub fn get_application_by_consensus_address(
        &self,
        addr: &ConsensusAddress,
    ) -> GovernanceResult<Option<Vote>> {
        match self.read_index(&KeyPrefix::application_by_cons_addr_key(addr))? {
            Some(operator) => self.get_ballot(BallotKind::Application, &operator),
            None => Ok(None),
        }
    }

    pub fn set_ballot(&mut self, kind: BallotKind, vote: &Vote) -> GovernanceResult<()> {
        let subject = vote.subject();
        let operator = subject.operator();
        self.write(&KeyPrefix::ballot_key(kind, &operator), vote)?;
        if kind == BallotKind::Application {
            self.kv.put(
                &KeyPrefix::application_by_cons_addr_key(&subject.consensus_address()),
                operator.as_bytes(),
            )?;
        }
        Ok(())
    }

    /// Open a fresh zero-vote ballot on `subject`
    pub fn append_ballot(&mut self, kind: BallotKind, subject: Validator) -> GovernanceResult<()> {
        self.set_ballot(kind, &Vote::new(subject))
    }

    /// Delete a ballot and, for applications, its consensus index. No-op if
    /// absent.
    pub fn remove_ballot(
        &mut self,
        kind: BallotKind,
        operator: &OperatorAddress,
    ) -> GovernanceResult<()> {
        if kind == BallotKind::Application {
            if let Some(vote) = self.get_ballot(kind, operator)? {
                self.kv.delete(&KeyPrefix::application_by_cons_addr_key(
                    &vote.subject().consensus_address(),
                ))?;
            }
        }
        self.kv.delete(&KeyPrefix::ballot_key(kind, operator))?;
        Ok(())
    }

    /// Pool contents in operator-key order
    pub fn ballots(&self, kind: BallotKind) -> GovernanceResult<impl Iterator<Item = GovernanceResult<Vote>>> {
        let entries = self
            .kv
            .prefix_scan(&KeyPrefix::ballot_pool(kind).as_bytes())?;
        Ok(entries
            .into_iter()
            .map(|(_, bytes)| bincode::deserialize(&bytes).map_err(GovernanceError::from)))
    }

    pub fn all_ballots(&self, kind: BallotKind) -> GovernanceResult<Vec<Vote>> {
        self.ballots(kind)?.collect()
    }
}
