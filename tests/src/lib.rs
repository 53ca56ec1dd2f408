//! # PoA Governance Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/           # Multi-step governance flows
//!     ├── fixtures.rs        # Shared validators, services, tracing setup
//!     ├── governance_flows.rs
//!     └── epoch_reconciliation.rs
//!
//! tests/benches/
//! └── governance_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p poa-tests
//!
//! # By category
//! cargo test -p poa-tests integration::governance_flows::
//! cargo test -p poa-tests integration::epoch_reconciliation::
//!
//! # Benchmarks
//! cargo bench -p poa-tests
//! ```

pub mod integration;
