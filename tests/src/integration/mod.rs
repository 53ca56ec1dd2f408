//! Cross-component governance flows: commands, votes, epoch boundaries and
//! genesis files driven through the public API only.

pub mod fixtures;

mod epoch_reconciliation;
mod governance_flows;
