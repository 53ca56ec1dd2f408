//! Genesis document for the governance subsystem

use super::{GovernanceError, GovernanceResult, Params, Validator};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Params and the initial validator set
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
    #[serde(default)]
    pub validators: Vec<Validator>,
}

impl GenesisState {
    pub fn new(params: Params, validators: Vec<Validator>) -> Self {
        Self { params, validators }
    }

    /// Parse a JSON genesis document
    pub fn from_json(bytes: &[u8]) -> GovernanceResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| GovernanceError::InvalidGenesis {
            reason: e.to_string(),
        })
    }

    /// Read and parse a JSON genesis file
    pub fn load(path: impl AsRef<Path>) -> GovernanceResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| GovernanceError::InvalidGenesis {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_json(&bytes)
    }

    pub fn to_json(&self) -> GovernanceResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Reject duplicate identities, invalid validators and invalid params
    pub fn validate(&self) -> GovernanceResult<()> {
        let mut consensus_keys = HashSet::with_capacity(self.validators.len());
        let mut operators = HashSet::with_capacity(self.validators.len());

        for validator in &self.validators {
            validator.check_valid()?;

            if !consensus_keys.insert(validator.consensus_pubkey) {
                return Err(GovernanceError::InvalidGenesis {
                    reason: format!(
                        "duplicate validator in genesis state: moniker {}, address {}",
                        validator.description.moniker,
                        validator.consensus_address()
                    ),
                });
            }
            if !operators.insert(validator.operator_address) {
                return Err(GovernanceError::InvalidGenesis {
                    reason: format!(
                        "duplicate operator in genesis state: {}",
                        validator.operator_address
                    ),
                });
            }
        }

        if self.validators.len() > usize::from(self.params.max_validators) {
            return Err(GovernanceError::InvalidGenesis {
                reason: format!(
                    "{} validators exceed max validators {}",
                    self.validators.len(),
                    self.params.max_validators
                ),
            });
        }

        self.params.validate()
    }
}
