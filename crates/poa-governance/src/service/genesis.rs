//! Genesis import/export and params updates

use super::GovernanceService;
use crate::domain::{GenesisState, GovernanceResult, Params, ValidatorState, ValidatorUpdate};
use crate::ports::outbound::{EventSink, KeyValueStore};
use tracing::info;

impl<KV, E> GovernanceService<KV, E>
where
    KV: KeyValueStore,
    E: EventSink,
{
    /// Seat the genesis validators as Joined and store the params.
    ///
    /// Returns one power-1 update per genesis validator. The document is
    /// validated first; nothing is written if it is rejected.
    pub fn init_genesis(&mut self, genesis: &GenesisState) -> GovernanceResult<Vec<ValidatorUpdate>> {
        genesis.validate()?;

        let updates = self.commit(|store| {
            store.set_params(&genesis.params)?;
            let mut updates = Vec::with_capacity(genesis.validators.len());
            for validator in &genesis.validators {
                store.set_validator(validator)?;
                store.set_validator_state(&validator.operator(), ValidatorState::Joined)?;
                updates.push(validator.update_append());
            }
            Ok(updates)
        })?;

        info!(
            validators = updates.len(),
            params = %genesis.params,
            "[poa] genesis initialized"
        );
        Ok(updates)
    }

    /// Current params and every registry entry, whatever its state
    pub fn export_genesis(&self) -> GovernanceResult<GenesisState> {
        let store = self.reader();
        Ok(GenesisState::new(store.params()?, store.all_validators()?))
    }

    /// Replace the stored params after validating them
    pub fn set_params(&mut self, params: Params) -> GovernanceResult<()> {
        params.validate()?;
        self.commit(|store| store.set_params(&params))?;
        info!(%params, "[poa] params updated");
        Ok(())
    }
}
