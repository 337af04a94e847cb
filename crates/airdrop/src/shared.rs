use crate::merkle::Root;
use crate::{Address, AirdropEngine, AirdropError, AirdropEvent, Amount, AssetRegistry, EligibilityOracle};
use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-shareable handle that serializes every operation on one engine.
///
/// A single mutex guards the whole engine, so each claim, deposit, withdrawal
/// or rotation (including its oracle and asset reads) runs as one unit with
/// respect to all others.
pub struct SerializedEngine<A, O> {
    inner: Arc<Mutex<AirdropEngine<A, O>>>,
}

impl<A, O> Clone for SerializedEngine<A, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: AssetRegistry, O: EligibilityOracle> SerializedEngine<A, O> {
    pub fn new(engine: AirdropEngine<A, O>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn claim(&self, caller: Address, amount: Amount, proof: &[Root]) -> Result<(), AirdropError> {
        self.inner.lock().claim(caller, amount, proof)
    }

    pub fn deposit(&self, caller: Address, amount: Amount) -> Result<(), AirdropError> {
        self.inner.lock().deposit(caller, amount)
    }

    pub fn withdraw_remaining(&self, caller: Address) -> Result<(), AirdropError> {
        self.inner.lock().withdraw_remaining(caller)
    }

    pub fn update_root(&self, caller: Address, new_root: Root) -> Result<(), AirdropError> {
        self.inner.lock().update_root(caller, new_root)
    }

    pub fn current_root(&self) -> Root {
        self.inner.lock().current_root()
    }

    pub fn reserve(&self) -> Amount {
        self.inner.lock().reserve()
    }

    pub fn is_claimed(&self, who: &Address) -> bool {
        self.inner.lock().is_claimed(who)
    }

    pub fn drain_events(&self) -> Vec<AirdropEvent> {
        self.inner.lock().drain_events()
    }

    /// Run `f` against the engine while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&AirdropEngine<A, O>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Recover the engine once no other handle is alive.
    pub fn into_inner(self) -> Result<AirdropEngine<A, O>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
