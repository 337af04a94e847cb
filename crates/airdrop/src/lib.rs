//! Merkle airdrop engine.
//!
//! Releases a fungible asset to a committed list of `(account, amount)` pairs.
//! A claim pays out only when the caller holds the gating NFT, the reserve
//! covers the amount, the account has not claimed yet, and the supplied proof
//! folds to the current Merkle root.

pub mod address;

pub mod merkle;

pub mod ledger;

pub mod asset;

pub mod oracle;

pub mod events;

pub mod error;

pub mod engine;

// Single-writer wrapper for callers on many threads.
pub mod shared;

pub mod config;

pub mod snapshot;

#[cfg(feature = "metrics")]
pub mod metrics;

#[cfg(not(feature = "metrics"))]
pub mod metrics_shim;

// When metrics feature is off, expose a unified `metrics` via the shim
#[cfg(not(feature = "metrics"))]
pub use self::metrics_shim as metrics;

/// Token quantities handled by the engine (smallest unit).
pub type Amount = u128;

pub use address::{Address, HexParseError};

pub use merkle::{
    format_root, hash_sorted_pair, keccak256, leaf_hash, parse_root, verify, ClaimEntry,
    ClaimTree, Root, TreeError, MAX_PROOF_DEPTH,
};

pub use ledger::ClaimLedger;

pub use asset::{AssetError, AssetRegistry, MemoryAsset};

pub use oracle::{EligibilityOracle, NftRegistry};

pub use events::AirdropEvent;

pub use error::AirdropError;

pub use engine::{AirdropEngine, Deployment};

pub use shared::SerializedEngine;

pub use config::{AirdropConfig, ConfigError};

pub use snapshot::{EngineSnapshot, SnapshotError, SNAPSHOT_VERSION};
