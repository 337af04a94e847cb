// crates/airdrop/src/ledger.rs
use crate::Address;
use std::collections::HashSet;

/// Per-account claim flags.
///
/// Accounts absent from the set are unclaimed. An account enters the set once
/// and never leaves it; there is no reset path.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ClaimLedger {
    claimed: HashSet<Address>,
}

impl ClaimLedger {
    #[inline]
    pub fn is_claimed(&self, who: &Address) -> bool {
        self.claimed.contains(who)
    }

    /// Record `who` as claimed. Returns false (and changes nothing) if it already was.
    pub(crate) fn mark_claimed(&mut self, who: Address) -> bool {
        self.claimed.insert(who)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    /// Claimed accounts sorted by address bytes (stable order for snapshots).
    pub fn sorted_accounts(&self) -> Vec<Address> {
        let mut v: Vec<Address> = self.claimed.iter().copied().collect();
        v.sort();
        v
    }
}
