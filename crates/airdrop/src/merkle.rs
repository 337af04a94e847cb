// crates/airdrop/src/merkle.rs

use crate::address::decode_fixed;
use crate::{Address, Amount, HexParseError};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// 32-byte Merkle root / node digest.
pub type Root = [u8; 32];

/// Hard upper bound on proof depth (covers up to 2^64 leaves; far above any realistic list).
pub const MAX_PROOF_DEPTH: usize = 64;

#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let out = Keccak256::digest(data);
    let mut node = [0u8; 32];
    node.copy_from_slice(&out);
    node
}

/// Leaf digest for one `(account, amount)` entry.
///
/// Layout hashed with Keccak-256: `account(20) || amount(be 32)`, i.e. the
/// packed `(address, uint256)` encoding. The amount is left-padded to a full
/// 32-byte word so lists built by EVM tooling verify unchanged.
pub fn leaf_hash(account: &Address, amount: Amount) -> [u8; 32] {
    let mut packed = [0u8; 20 + 32];
    packed[..20].copy_from_slice(account.as_bytes());
    packed[36..].copy_from_slice(&amount.to_be_bytes());
    keccak256(&packed)
}

/// Hash two 32-byte nodes with the smaller one first.
#[inline(always)]
pub fn hash_sorted_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (left, right) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    let out = hasher.finalize();
    let mut node = [0u8; 32];
    node.copy_from_slice(&out);
    node
}

/// Verify that `leaf` is committed under `root`.
///
/// `proof` is the list of sibling digests bottom→top. Each step hashes the
/// running digest with its sibling in sorted order, so no index is needed.
/// An empty proof verifies only when the leaf is the root itself.
pub fn verify(root: &Root, leaf: &[u8; 32], proof: &[[u8; 32]]) -> bool {
    if proof.len() > MAX_PROOF_DEPTH {
        log::debug!("merkle: proof depth {} exceeds limit", proof.len());
        return false;
    }
    let computed = proof
        .iter()
        .fold(*leaf, |node, sibling| hash_sorted_pair(&node, sibling));
    log::debug!(
        "merkle: depth={} computed=0x{} expected=0x{}",
        proof.len(),
        hex::encode(&computed[..4]),
        hex::encode(&root[..4])
    );
    computed == *root
}

pub fn parse_root(s: &str) -> Result<Root, HexParseError> {
    decode_fixed::<32>(s)
}

pub fn format_root(root: &Root) -> String {
    format!("0x{}", hex::encode(root))
}

/// Serde adapter storing a [`Root`] as `0x`-prefixed hex.
pub mod root_hex {
    use super::{format_root, parse_root, Root};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(root: &Root, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_root(root))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Root, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_root(&s).map_err(serde::de::Error::custom)
    }
}

/// One line of the committed distribution list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimEntry {
    pub account: Address,
    pub amount: Amount,
}

impl ClaimEntry {
    pub fn new(account: Address, amount: Amount) -> Self {
        Self { account, amount }
    }

    #[inline]
    pub fn leaf(&self) -> [u8; 32] {
        leaf_hash(&self.account, self.amount)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("distribution list is empty")]
    Empty,
    #[error("total amount overflows")]
    Overflow,
}

/// Sorted-pair Merkle tree over a distribution list.
///
/// Leaves stay in input order. Each level hashes adjacent nodes with
/// [`hash_sorted_pair`]; an unpaired last node is carried up unchanged.
#[derive(Clone, Debug)]
pub struct ClaimTree {
    entries: Vec<ClaimEntry>,
    /// levels[0] = leaves, last level = [root]
    levels: Vec<Vec<[u8; 32]>>,
}

impl ClaimTree {
    pub fn new(entries: &[ClaimEntry]) -> Result<Self, TreeError> {
        if entries.is_empty() {
            return Err(TreeError::Empty);
        }
        let mut levels = vec![entries.iter().map(ClaimEntry::leaf).collect::<Vec<_>>()];
        while let Some(level) = levels.last().filter(|l| l.len() > 1) {
            let next: Vec<[u8; 32]> = level
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => hash_sorted_pair(a, b),
                    // odd node out is promoted as is
                    single => single[0],
                })
                .collect();
            levels.push(next);
        }
        Ok(Self {
            entries: entries.to_vec(),
            levels,
        })
    }

    pub fn root(&self) -> Root {
        // levels is never empty and the top level holds exactly one node
        self.levels[self.levels.len() - 1][0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ClaimEntry] {
        &self.entries
    }

    pub fn leaf(&self, index: usize) -> Option<[u8; 32]> {
        self.levels[0].get(index).copied()
    }

    /// Sibling path for `entries()[index]`, bottom→top.
    pub fn proof(&self, index: usize) -> Option<Vec<[u8; 32]>> {
        if index >= self.entries.len() {
            return None;
        }
        let mut proof = Vec::with_capacity(self.levels.len());
        let mut idx = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sib = if idx % 2 == 0 { idx + 1 } else { idx - 1 };
            if let Some(node) = level.get(sib) {
                proof.push(*node);
            }
            idx /= 2;
        }
        Some(proof)
    }

    /// Proof for the first entry matching `(account, amount)`, or `None` if
    /// the pair is not part of the list.
    pub fn proof_for(&self, account: &Address, amount: Amount) -> Option<Vec<[u8; 32]>> {
        let index = self
            .entries
            .iter()
            .position(|e| e.account == *account && e.amount == amount)?;
        self.proof(index)
    }

    /// Sum of all amounts in the list (what the reserve must hold to pay everyone).
    pub fn total_amount(&self) -> Result<Amount, TreeError> {
        self.entries
            .iter()
            .try_fold(0 as Amount, |acc, e| acc.checked_add(e.amount))
            .ok_or(TreeError::Overflow)
    }
}
