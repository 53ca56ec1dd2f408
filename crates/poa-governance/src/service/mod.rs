//! # Governance Service
//!
//! The main service implementing the governance API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `GovernanceApi` for commands and epoch reconciliation
//! 2. Implements `GovernanceQueryApi` for read-only queries
//! 3. Runs every step against a `StagedStore` and commits it with a single
//!    `atomic_batch_write`, so a failed step writes nothing
//! 4. Publishes events only after the commit succeeded

mod epoch;
mod genesis;
mod handlers;
mod queries;

use crate::domain::{
    GovernanceCommand, GovernanceError, GovernanceResult, OperatorAddress, Validator,
    ValidatorUpdate,
};
use crate::events::GovernanceEvent;
use crate::metrics;
use crate::ports::inbound::{CommandResult, GovernanceApi};
use crate::ports::outbound::{EventSink, KeyValueStore};
use crate::store::{GovernanceStore, StagedStore};
use std::sync::Arc;
use tracing::{error, info, warn};

/// The Governance Service.
///
/// Owns the store handle; commands take `&mut self`, so at most one command
/// or reconciliation is in flight at a time.
pub struct GovernanceService<KV, E>
where
    KV: KeyValueStore,
    E: EventSink,
{
    /// Key-value store for persistence.
    pub(crate) kv_store: KV,
    /// Sink receiving events of committed commands.
    pub(crate) event_sink: Arc<E>,
}

impl<KV, E> GovernanceService<KV, E>
where
    KV: KeyValueStore,
    E: EventSink,
{
    pub fn new(kv_store: KV, event_sink: Arc<E>) -> Self {
        Self {
            kv_store,
            event_sink,
        }
    }

    pub fn kv_store(&self) -> &KV {
        &self.kv_store
    }

    pub fn event_sink(&self) -> &Arc<E> {
        &self.event_sink
    }

    pub fn into_kv_store(self) -> KV {
        self.kv_store
    }

    /// Read-only typed view over the committed state
    pub(crate) fn reader(&self) -> GovernanceStore<StagedStore<'_, KV>> {
        GovernanceStore::new(StagedStore::new(&self.kv_store))
    }

    /// Run `step` against a staged view and flush its writes atomically.
    ///
    /// Nothing reaches the store if `step` fails.
    pub(crate) fn commit<T, F>(&mut self, step: F) -> GovernanceResult<T>
    where
        F: for<'s> FnOnce(&mut GovernanceStore<StagedStore<'s, KV>>) -> GovernanceResult<T>,
    {
        let (value, operations) = {
            let mut store = GovernanceStore::new(StagedStore::new(&self.kv_store));
            let value = step(&mut store)?;
            (value, store.into_inner().into_operations())
        };

        if !operations.is_empty() {
            self.kv_store.atomic_batch_write(operations)?;
        }
        Ok(value)
    }

    /// Commit a command handler, then publish its events
    fn run_command<F>(&mut self, name: &'static str, handler: F) -> GovernanceResult<CommandResult>
    where
        F: for<'s> FnOnce(
            &mut GovernanceStore<StagedStore<'s, KV>>,
        ) -> GovernanceResult<Vec<GovernanceEvent>>,
    {
        match self.commit(handler) {
            Ok(events) => {
                for event in &events {
                    self.event_sink.publish(event);
                }
                metrics::record_command(name, "ok");
                info!(command = name, events = events.len(), "[poa] command committed");
                Ok(CommandResult { events })
            }
            Err(e) => {
                metrics::record_command(name, e.kind());
                log_failure(name, &e);
                Err(e)
            }
        }
    }
}

fn log_failure(step: &str, e: &GovernanceError) {
    if e.is_fatal() {
        metrics::record_invariant_violation();
        error!(step, error = %e, "[poa] registry invariant violated");
    } else {
        warn!(step, kind = e.kind(), error = %e, "[poa] step rejected");
    }
}

impl<KV, E> GovernanceApi for GovernanceService<KV, E>
where
    KV: KeyValueStore,
    E: EventSink,
{
    fn handle(&mut self, command: GovernanceCommand) -> GovernanceResult<CommandResult> {
        if let Err(e) = command.validate_basic() {
            metrics::record_command(command.name(), e.kind());
            warn!(command = command.name(), error = %e, "[poa] malformed command");
            return Err(e);
        }

        match command {
            GovernanceCommand::SubmitApplication { candidate } => {
                self.submit_application(candidate)
            }
            GovernanceCommand::VoteApplication {
                voter,
                candidate,
                approve,
            } => self.vote_application(voter, candidate, approve),
            GovernanceCommand::ProposeKick {
                candidate,
                proposer,
            } => self.propose_kick(candidate, proposer),
            GovernanceCommand::VoteKickProposal {
                voter,
                candidate,
                approve,
            } => self.vote_kick_proposal(voter, candidate, approve),
            GovernanceCommand::LeaveValidatorSet { validator } => {
                self.leave_validator_set(validator)
            }
        }
    }

    fn submit_application(&mut self, candidate: Validator) -> GovernanceResult<CommandResult> {
        self.run_command("submit_application", |store| {
            handlers::submit_application(store, candidate)
        })
    }

    fn vote_application(
        &mut self,
        voter: OperatorAddress,
        candidate: OperatorAddress,
        approve: bool,
    ) -> GovernanceResult<CommandResult> {
        self.run_command("vote_application", |store| {
            handlers::vote_application(store, voter, candidate, approve)
        })
    }

    fn propose_kick(
        &mut self,
        candidate: OperatorAddress,
        proposer: OperatorAddress,
    ) -> GovernanceResult<CommandResult> {
        self.run_command("propose_kick", |store| {
            handlers::propose_kick(store, candidate, proposer)
        })
    }

    fn vote_kick_proposal(
        &mut self,
        voter: OperatorAddress,
        candidate: OperatorAddress,
        approve: bool,
    ) -> GovernanceResult<CommandResult> {
        self.run_command("vote_kick_proposal", |store| {
            handlers::vote_kick_proposal(store, voter, candidate, approve)
        })
    }

    fn leave_validator_set(
        &mut self,
        validator: OperatorAddress,
    ) -> GovernanceResult<CommandResult> {
        self.run_command("leave_validator_set", |store| {
            handlers::leave_validator_set(store, validator)
        })
    }

    fn end_epoch(&mut self) -> GovernanceResult<Vec<ValidatorUpdate>> {
        match self.commit(|store| epoch::reconcile(store)) {
            Ok(updates) => {
                let removed = updates.iter().filter(|u| u.is_removal()).count() as u64;
                let added = updates.len() as u64 - removed;
                metrics::record_epoch_updates(added, removed);
                if !updates.is_empty() {
                    info!(added, removed, "[poa] epoch reconciled");
                }
                Ok(updates)
            }
            Err(e) => {
                log_failure("end_epoch", &e);
                Err(e)
            }
        }
    }
}
