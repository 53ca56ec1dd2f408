//! Identity types for validators
//!
//! Operator addresses identify the account submitting governance commands.
//! Consensus addresses are derived from the consensus public key and are what
//! the consensus layer attributes voting power to.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as, IfIsHumanReadable};
use sha2::{Digest, Sha256};
use std::fmt;

/// Length of operator and consensus addresses
pub const ADDRESS_LEN: usize = 20;

/// Length of a consensus public key (ed25519)
pub const PUBKEY_LEN: usize = 32;

/// Fixed-size byte identifiers rendered as hex in human-readable formats
/// (JSON genesis, queries) and as raw bytes in binary formats (bincode).
macro_rules! byte_identifier {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[serde_as]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        pub struct $name(#[serde_as(as = "IfIsHumanReadable<Hex>")] pub [u8; $len]);

        impl $name {
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// An all-zero identifier is treated as missing
            pub fn is_empty(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }

            pub fn from_slice(bytes: &[u8]) -> Option<Self> {
                let array: [u8; $len] = bytes.try_into().ok()?;
                Some(Self(array))
            }

            pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
                let mut bytes = [0u8; $len];
                hex::decode_to_slice(s, &mut bytes)?;
                Ok(Self(bytes))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(self.0))
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }
    };
}

byte_identifier!(
    /// Operator identity of a validator (primary key of the registry)
    OperatorAddress,
    ADDRESS_LEN
);

byte_identifier!(
    /// Consensus identity, derived from the consensus public key
    ConsensusAddress,
    ADDRESS_LEN
);

byte_identifier!(
    /// Consensus public key as handed to the consensus layer
    ConsensusPubKey,
    PUBKEY_LEN
);

impl ConsensusPubKey {
    /// Derive the consensus address: first 20 bytes of SHA-256(pubkey)
    pub fn address(&self) -> ConsensusAddress {
        let digest = Sha256::digest(self.0);
        let mut addr = [0u8; ADDRESS_LEN];
        addr.copy_from_slice(&digest[..ADDRESS_LEN]);
        ConsensusAddress(addr)
    }
}
