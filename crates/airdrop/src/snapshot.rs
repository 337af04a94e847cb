use crate::merkle::{root_hex, Root};
use crate::{
    Address, AirdropEngine, AirdropError, AssetRegistry, ClaimLedger, Deployment, EligibilityOracle,
};
use serde::{Deserialize, Serialize};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
    #[error("account {0} listed twice in claimed set")]
    DuplicateClaim(Address),
    #[error("snapshot deployment rejected: {0}")]
    Deployment(#[from] AirdropError),
}

/// Persisted state of one deployment.
///
/// The reserve is not stored: it is the engine's live balance in the asset
/// registry and is read from there after a restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub version: u32,
    pub owner: Address,
    pub engine_address: Address,
    pub asset: Address,
    #[serde(with = "root_hex")]
    pub merkle_root: Root,
    /// Sorted by address bytes.
    pub claimed: Vec<Address>,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(txt: &str) -> Result<Self, SnapshotError> {
        let snap: EngineSnapshot = serde_json::from_str(txt)?;
        if snap.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snap.version));
        }
        Ok(snap)
    }

    fn deployment(&self) -> Deployment {
        Deployment {
            owner: self.owner,
            engine_address: self.engine_address,
            asset_reference: self.asset,
            merkle_root: self.merkle_root,
        }
    }
}

impl<A: AssetRegistry, O: EligibilityOracle> AirdropEngine<A, O> {
    pub fn snapshot(&self) -> EngineSnapshot {
        let d = self.deployment();
        EngineSnapshot {
            version: SNAPSHOT_VERSION,
            owner: d.owner,
            engine_address: d.engine_address,
            asset: d.asset_reference,
            merkle_root: d.merkle_root,
            claimed: self.ledger().sorted_accounts(),
        }
    }

    /// Rebuild an engine from `snapshot`, attaching live collaborators.
    pub fn restore(snapshot: EngineSnapshot, asset: A, oracle: O) -> Result<Self, SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        if snapshot.owner == snapshot.engine_address {
            return Err(AirdropError::EngineAccount.into());
        }
        let mut ledger = ClaimLedger::default();
        for who in &snapshot.claimed {
            if !ledger.mark_claimed(*who) {
                return Err(SnapshotError::DuplicateClaim(*who));
            }
        }
        log::info!(
            "airdrop: restored snapshot owner={} claimed={}",
            snapshot.owner,
            ledger.len()
        );
        Ok(Self::from_parts(snapshot.deployment(), ledger, asset, oracle))
    }
}
