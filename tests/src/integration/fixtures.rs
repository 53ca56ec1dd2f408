//! Shared test fixtures

use poa_governance::{
    ConsensusPubKey, Description, GenesisState, GovernanceService, InMemoryEventSink,
    InMemoryKVStore, OperatorAddress, Params, Validator,
};
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

pub type TestService = GovernanceService<InMemoryKVStore, InMemoryEventSink>;

static TRACING: Once = Once::new();

/// Install a test subscriber once; `RUST_LOG=poa_governance=debug` shows votes.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

pub fn operator(seed: u8) -> OperatorAddress {
    OperatorAddress::new([seed; 20])
}

pub fn validator(seed: u8) -> Validator {
    let mut pubkey = [seed; 32];
    pubkey[0] = 0xed;
    Validator::new(
        operator(seed),
        ConsensusPubKey::new(pubkey),
        Description::new(
            format!("node-{seed}"),
            "",
            format!("https://node-{seed}.example"),
            format!("ops@node-{seed}.example"),
            "",
        ),
    )
}

pub fn genesis(params: Params, seated: u8) -> GenesisState {
    GenesisState::new(params, (1..=seated).map(validator).collect())
}

/// Service initialised from `genesis(params, seated)`
pub fn service(params: Params, seated: u8) -> TestService {
    init_tracing();
    let mut service = GovernanceService::new(
        InMemoryKVStore::new(),
        Arc::new(InMemoryEventSink::new()),
    );
    service
        .init_genesis(&genesis(params, seated))
        .expect("genesis must be valid");
    service
}
