//! Read-only queries

use super::GovernanceService;
use crate::domain::{
    BallotKind, GovernanceError, GovernanceResult, OperatorAddress, Params, Validator,
    ValidatorState, Vote,
};
use crate::ports::inbound::{GovernanceQueryApi, QueryRequest};
use crate::ports::outbound::{EventSink, KeyValueStore};

impl<KV, E> GovernanceQueryApi for GovernanceService<KV, E>
where
    KV: KeyValueStore,
    E: EventSink,
{
    fn params(&self) -> GovernanceResult<Params> {
        self.reader().params()
    }

    fn validators(&self, page: u32, limit: u32) -> GovernanceResult<Vec<Validator>> {
        if page == 0 {
            return Ok(Vec::new());
        }

        let store = self.reader();
        let limit = match limit {
            0 => usize::from(store.params()?.max_validators),
            n => n as usize,
        };
        let start = (page as usize - 1).saturating_mul(limit);

        store.validators()?.skip(start).take(limit).collect()
    }

    fn validator(&self, operator: &OperatorAddress) -> GovernanceResult<Validator> {
        self.reader()
            .get_validator(operator)?
            .ok_or(GovernanceError::NoValidatorFound)
    }

    fn validator_state(
        &self,
        operator: &OperatorAddress,
    ) -> GovernanceResult<Option<ValidatorState>> {
        self.reader().get_validator_state(operator)
    }

    fn applications(&self) -> GovernanceResult<Vec<Vote>> {
        self.reader().all_ballots(BallotKind::Application)
    }

    fn kick_proposals(&self) -> GovernanceResult<Vec<Vote>> {
        self.reader().all_ballots(BallotKind::KickProposal)
    }

    fn query(&self, request: &QueryRequest) -> GovernanceResult<Vec<u8>> {
        let bytes = match request {
            QueryRequest::Validators { page, limit } => {
                serde_json::to_vec(&self.validators(*page, *limit)?)?
            }
            QueryRequest::Validator { validator_addr } => {
                serde_json::to_vec(&self.validator(validator_addr)?)?
            }
            QueryRequest::Params => serde_json::to_vec(&self.params()?)?,
            QueryRequest::Applications => serde_json::to_vec(&self.applications()?)?,
            QueryRequest::KickProposals => serde_json::to_vec(&self.kick_proposals()?)?,
        };
        Ok(bytes)
    }
}
