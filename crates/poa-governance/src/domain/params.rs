//! Governance parameters

use super::{GovernanceError, GovernanceResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum number of validators
pub const DEFAULT_MAX_VALIDATORS: u16 = 15;

/// Default quorum percentage
pub const DEFAULT_QUORUM: u16 = 66;

/// Parameters read by every governance command
///
/// Owned by the configuration collaborator; the handlers only read them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Cap on the registry size. Must be positive.
    pub max_validators: u16,
    /// Percentage of the electorate whose approval decides a ballot (0-100).
    /// Zero disables balloting: applications and kicks take effect immediately.
    pub quorum: u16,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_validators: DEFAULT_MAX_VALIDATORS,
            quorum: DEFAULT_QUORUM,
        }
    }
}

impl Params {
    pub fn new(max_validators: u16, quorum: u16) -> Self {
        Self {
            max_validators,
            quorum,
        }
    }

    /// Set the maximum number of validators.
    pub fn with_max_validators(mut self, max_validators: u16) -> Self {
        self.max_validators = max_validators;
        self
    }

    /// Set the quorum percentage.
    pub fn with_quorum(mut self, quorum: u16) -> Self {
        self.quorum = quorum;
        self
    }

    /// Balloting is skipped entirely when the quorum is zero
    pub fn is_instant(&self) -> bool {
        self.quorum == 0
    }

    pub fn validate(&self) -> GovernanceResult<()> {
        if self.max_validators == 0 {
            return Err(GovernanceError::InvalidParams {
                reason: format!("max validators must be positive: {}", self.max_validators),
            });
        }
        if self.quorum > 100 {
            return Err(GovernanceError::InvalidParams {
                reason: format!("quorum must be a percentage: {}", self.quorum),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Max validators: {}, quorum: {}%",
            self.max_validators, self.quorum
        )
    }
}
