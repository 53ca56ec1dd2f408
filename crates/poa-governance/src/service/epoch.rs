//! Epoch boundary reconciliation

use crate::domain::{GovernanceError, GovernanceResult, ValidatorState, ValidatorUpdate};
use crate::ports::outbound::KeyValueStore;
use crate::store::GovernanceStore;
use tracing::debug;

/// Settle every lifecycle transition decided since the last epoch.
///
/// Joining validators become Joined with power 1, Leaving validators are
/// removed with power 0, Joined validators are untouched. Entries are visited
/// once, in operator-key order.
pub(super) fn reconcile<S: KeyValueStore>(
    store: &mut GovernanceStore<S>,
) -> GovernanceResult<Vec<ValidatorUpdate>> {
    let mut updates = Vec::new();

    for entry in store.validators()? {
        let validator = entry?;
        let operator = validator.operator();

        let state = store
            .get_validator_state(&operator)?
            .ok_or(GovernanceError::InvariantViolation {
                operator,
                reason: "registry entry has no lifecycle state",
            })?;

        match state {
            ValidatorState::Joined => {}
            ValidatorState::Joining => {
                debug!(%operator, "[poa] validator joined");
                store.set_validator_state(&operator, ValidatorState::Joined)?;
                updates.push(validator.update_append());
            }
            ValidatorState::Leaving => {
                debug!(%operator, "[poa] validator removed");
                store.remove_validator(&operator)?;
                updates.push(validator.update_remove());
            }
        }
    }

    Ok(updates)
}
