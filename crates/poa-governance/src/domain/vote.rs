//! Ballot tracking and quorum evaluation
//!
//! One `Vote` type backs both candidate applications and kick proposals; the
//! pool a ballot lives in is selected by `BallotKind`.

use super::{GovernanceError, GovernanceResult, OperatorAddress, Validator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pool a ballot belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallotKind {
    /// Candidate asking to join the validator set
    Application,
    /// Proposal to expel a seated validator
    KickProposal,
}

impl fmt::Display for BallotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallotKind::Application => f.write_str("application"),
            BallotKind::KickProposal => f.write_str("kick_proposal"),
        }
    }
}

/// Outcome of a quorum check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuorumStatus {
    /// Outcome still depends on votes not yet cast
    Pending,
    /// Enough approvals have been cast
    Approved,
    /// Remaining voters can no longer reach the required approvals
    Rejected,
}

impl QuorumStatus {
    pub fn is_reached(self) -> bool {
        !matches!(self, QuorumStatus::Pending)
    }

    pub fn is_approved(self) -> bool {
        matches!(self, QuorumStatus::Approved)
    }
}

/// Approvals required out of `voter_pool_size` for a `quorum` percentage,
/// rounded up.
pub fn necessary_approvals(voter_pool_size: u64, quorum: u64) -> u64 {
    (voter_pool_size * quorum).div_ceil(100)
}

/// In-progress tally on one subject
///
/// INVARIANT: `total == voters.len()` and no voter appears twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    subject: Validator,
    approvals: u64,
    total: u64,
    voters: Vec<OperatorAddress>,
}

impl Vote {
    /// Fresh ballot with no votes
    pub fn new(subject: Validator) -> Self {
        Self {
            subject,
            approvals: 0,
            total: 0,
            voters: Vec::new(),
        }
    }

    pub fn subject(&self) -> &Validator {
        &self.subject
    }

    pub fn approvals(&self) -> u64 {
        self.approvals
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn voters(&self) -> &[OperatorAddress] {
        &self.voters
    }

    pub fn has_voted(&self, voter: &OperatorAddress) -> bool {
        self.voters.contains(voter)
    }

    /// Record a vote. Returns `true` and leaves the ballot untouched if the
    /// voter already voted.
    pub fn add_vote(&mut self, voter: OperatorAddress, approve: bool) -> bool {
        if self.has_voted(&voter) {
            return true;
        }

        self.voters.push(voter);
        self.total += 1;
        if approve {
            self.approvals += 1;
        }
        false
    }

    /// Decide whether the outcome is already determined.
    ///
    /// The ballot is approved as soon as approvals reach the quorum, and
    /// rejected as soon as the voters who have not yet voted could no longer
    /// bring approvals up to the quorum even if they all approved. A ballot can
    /// therefore be rejected long before every eligible voter has voted.
    pub fn check_quorum(&self, voter_pool_size: u64, quorum: u64) -> GovernanceResult<QuorumStatus> {
        if quorum > 100 {
            return Err(GovernanceError::InvalidQuorumValue(quorum));
        }
        if voter_pool_size < self.total {
            return Err(GovernanceError::InvalidVoterPoolSize {
                pool: voter_pool_size,
                total: self.total,
            });
        }

        let necessary = necessary_approvals(voter_pool_size, quorum);
        if self.approvals >= necessary {
            return Ok(QuorumStatus::Approved);
        }

        let remaining = voter_pool_size - self.total;
        if self.approvals + remaining >= necessary {
            Ok(QuorumStatus::Pending)
        } else {
            Ok(QuorumStatus::Rejected)
        }
    }
}
