use crate::Address;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// External NFT registry gating who may claim.
///
/// Queried fresh on every claim; the engine never caches an answer.
pub trait EligibilityOracle {
    /// Number of gating tokens held by `who`.
    fn balance_of(&self, who: Address) -> u64;

    fn holds(&self, who: Address) -> bool {
        self.balance_of(who) > 0
    }
}

/// In-memory NFT holdings, shareable across handles.
#[derive(Clone, Debug, Default)]
pub struct NftRegistry {
    inner: Arc<Mutex<HashMap<Address, u64>>>,
}

impl NftRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(&self, who: Address, count: u64) {
        let mut m = self.inner.lock();
        if count == 0 {
            m.remove(&who);
        } else {
            m.insert(who, count);
        }
    }

    pub fn mint(&self, who: Address) {
        let mut m = self.inner.lock();
        let c = m.entry(who).or_default();
        *c = c.saturating_add(1);
    }

    /// Remove one token from `who`. Returns false if it held none.
    pub fn burn(&self, who: Address) -> bool {
        let mut m = self.inner.lock();
        match m.get_mut(&who) {
            Some(c) if *c > 1 => {
                *c -= 1;
                true
            }
            Some(_) => {
                m.remove(&who);
                true
            }
            None => false,
        }
    }
}

impl EligibilityOracle for NftRegistry {
    fn balance_of(&self, who: Address) -> u64 {
        self.inner.lock().get(&who).copied().unwrap_or(0)
    }
}
