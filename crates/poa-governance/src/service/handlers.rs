//! Governance command handlers
//!
//! Each handler checks its preconditions in a fixed order, mutates the
//! staged store and returns the events to publish once committed.

use crate::domain::{
    BallotKind, GovernanceError, GovernanceResult, OperatorAddress, QuorumStatus, Validator,
    ValidatorState,
};
use crate::events::GovernanceEvent;
use crate::ports::outbound::KeyValueStore;
use crate::store::GovernanceStore;
use tracing::debug;

pub(super) fn submit_application<S: KeyValueStore>(
    store: &mut GovernanceStore<S>,
    candidate: Validator,
) -> GovernanceResult<Vec<GovernanceEvent>> {
    let params = store.params()?;
    if store.validator_count()? >= u64::from(params.max_validators) {
        return Err(GovernanceError::MaxValidatorsReached);
    }

    let operator = candidate.operator();
    let cons_addr = candidate.consensus_address();
    if store.get_validator(&operator)?.is_some()
        || store.get_validator_by_consensus_address(&cons_addr)?.is_some()
    {
        return Err(GovernanceError::AlreadyValidator);
    }

    if params.is_instant() {
        store.append_validator(&candidate)?;
        return Ok(vec![GovernanceEvent::AppendValidator {
            candidate: operator,
        }]);
    }

    if store.get_ballot(BallotKind::Application, &operator)?.is_some()
        || store
            .get_application_by_consensus_address(&cons_addr)?
            .is_some()
    {
        return Err(GovernanceError::AlreadyApplying);
    }

    store.append_ballot(BallotKind::Application, candidate)?;
    Ok(vec![GovernanceEvent::SubmitApplication {
        candidate: operator,
    }])
}

pub(super) fn vote_application<S: KeyValueStore>(
    store: &mut GovernanceStore<S>,
    voter: OperatorAddress,
    candidate: OperatorAddress,
    approve: bool,
) -> GovernanceResult<Vec<GovernanceEvent>> {
    let params = store.params()?;
    let validator_count = store.validator_count()?;
    // A full registry freezes every pending application
    if validator_count >= u64::from(params.max_validators) {
        return Err(GovernanceError::MaxValidatorsReached);
    }

    if store.get_validator(&voter)?.is_none() {
        return Err(GovernanceError::VoterNotValidator);
    }

    let mut application = store
        .get_ballot(BallotKind::Application, &candidate)?
        .ok_or(GovernanceError::NoApplicationFound(candidate))?;

    if application.add_vote(voter, approve) {
        return Err(GovernanceError::AlreadyVoted);
    }

    let mut events = vec![GovernanceEvent::application_vote(voter, candidate, approve)];

    let status = application.check_quorum(validator_count, u64::from(params.quorum))?;
    debug!(
        %voter,
        %candidate,
        approve,
        approvals = application.approvals(),
        total = application.total(),
        pool = validator_count,
        ?status,
        "[poa] application vote"
    );

    match status {
        QuorumStatus::Approved => {
            store.remove_ballot(BallotKind::Application, &candidate)?;
            store.append_validator(application.subject())?;
            events.push(GovernanceEvent::AppendValidator { candidate });
        }
        QuorumStatus::Rejected => {
            store.remove_ballot(BallotKind::Application, &candidate)?;
            events.push(GovernanceEvent::RejectValidator { candidate });
        }
        QuorumStatus::Pending => {
            store.set_ballot(BallotKind::Application, &application)?;
        }
    }

    Ok(events)
}

pub(super) fn propose_kick<S: KeyValueStore>(
    store: &mut GovernanceStore<S>,
    candidate: OperatorAddress,
    proposer: OperatorAddress,
) -> GovernanceResult<Vec<GovernanceEvent>> {
    if proposer == candidate {
        return Err(GovernanceError::ProposerIsCandidate);
    }

    if store.get_validator(&proposer)?.is_none() {
        return Err(GovernanceError::ProposerNotValidator);
    }

    let validator = store
        .get_validator(&candidate)?
        .ok_or(GovernanceError::NotValidator(candidate))?;

    let state = store
        .get_validator_state(&candidate)?
        .ok_or(GovernanceError::InvariantViolation {
            operator: candidate,
            reason: "seated validator has no lifecycle state",
        })?;
    if state == ValidatorState::Leaving {
        return Err(GovernanceError::ValidatorLeaving);
    }

    if store.params()?.is_instant() {
        store.set_validator_state(&candidate, ValidatorState::Leaving)?;
        return Ok(vec![GovernanceEvent::KickValidator {
            validator: candidate,
        }]);
    }

    if store
        .get_ballot(BallotKind::KickProposal, &candidate)?
        .is_some()
    {
        return Err(GovernanceError::AlreadyInKickProposal);
    }

    store.append_ballot(BallotKind::KickProposal, validator)?;
    Ok(vec![GovernanceEvent::ProposeKick {
        validator: candidate,
        proposer,
    }])
}

pub(super) fn vote_kick_proposal<S: KeyValueStore>(
    store: &mut GovernanceStore<S>,
    voter: OperatorAddress,
    candidate: OperatorAddress,
    approve: bool,
) -> GovernanceResult<Vec<GovernanceEvent>> {
    if voter == candidate {
        return Err(GovernanceError::VoterIsCandidate);
    }

    if store.get_validator(&voter)?.is_none() {
        return Err(GovernanceError::VoterNotValidator);
    }

    let mut proposal = store
        .get_ballot(BallotKind::KickProposal, &candidate)?
        .ok_or(GovernanceError::NoKickProposalFound(candidate))?;

    if proposal.add_vote(voter, approve) {
        return Err(GovernanceError::AlreadyVoted);
    }

    let mut events = vec![GovernanceEvent::kick_vote(voter, candidate, approve)];

    // The candidate does not vote on its own expulsion
    let pool = store.validator_count()?.saturating_sub(1);
    let status = proposal.check_quorum(pool, u64::from(store.params()?.quorum))?;
    debug!(
        %voter,
        %candidate,
        approve,
        approvals = proposal.approvals(),
        total = proposal.total(),
        pool,
        ?status,
        "[poa] kick proposal vote"
    );

    match status {
        QuorumStatus::Approved => {
            store.remove_ballot(BallotKind::KickProposal, &candidate)?;
            store.set_validator_state(&candidate, ValidatorState::Leaving)?;
            events.push(GovernanceEvent::KickValidator {
                validator: candidate,
            });
        }
        QuorumStatus::Rejected => {
            store.remove_ballot(BallotKind::KickProposal, &candidate)?;
            events.push(GovernanceEvent::KeepValidator {
                validator: candidate,
            });
        }
        QuorumStatus::Pending => {
            store.set_ballot(BallotKind::KickProposal, &proposal)?;
        }
    }

    Ok(events)
}

pub(super) fn leave_validator_set<S: KeyValueStore>(
    store: &mut GovernanceStore<S>,
    validator: OperatorAddress,
) -> GovernanceResult<Vec<GovernanceEvent>> {
    if store.get_validator(&validator)?.is_none() {
        return Err(GovernanceError::NotValidator(validator));
    }

    if store.validator_count()? == 1 {
        return Err(GovernanceError::OnlyOneValidator);
    }

    store.remove_ballot(BallotKind::KickProposal, &validator)?;
    store.set_validator_state(&validator, ValidatorState::Leaving)?;

    Ok(vec![GovernanceEvent::LeaveValidatorSet { validator }])
}
