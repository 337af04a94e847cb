use crate::{Address, Amount};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetError {
    #[error("insufficient balance")]
    InsufficientBalance,
    #[error("account is frozen")]
    Frozen,
    #[error("caller is not the token owner")]
    NotOwner,
    #[error("balance overflow")]
    Overflow,
}

/// The distributable fungible asset, as seen by the engine.
///
/// Failures are reported synchronously and must leave balances untouched.
pub trait AssetRegistry {
    fn balance_of(&self, who: Address) -> Amount;

    /// Move `amount` out of `holder`'s own balance into `to`.
    fn transfer(&mut self, holder: Address, to: Address, amount: Amount) -> Result<(), AssetError>;

    /// Pull `amount` from `from` into `to` on behalf of `spender`.
    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), AssetError>;
}

#[derive(Clone, Debug, Default)]
struct TokenState {
    owner: Address,
    balances: HashMap<Address, Amount>,
    frozen: HashSet<Address>,
    total_supply: Amount,
}

impl TokenState {
    fn balance_of(&self, who: &Address) -> Amount {
        self.balances.get(who).copied().unwrap_or(0)
    }

    /// Debit `from`, credit `to`. All checks run before either side changes.
    fn move_balance(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), AssetError> {
        if self.frozen.contains(&from) || self.frozen.contains(&to) {
            return Err(AssetError::Frozen);
        }
        let from_bal = self.balance_of(&from);
        if from_bal < amount {
            return Err(AssetError::InsufficientBalance);
        }
        if from == to {
            return Ok(());
        }
        let to_bal = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(AssetError::Overflow)?;
        self.balances.insert(from, from_bal - amount);
        self.balances.insert(to, to_bal);
        Ok(())
    }
}

/// In-memory token registry.
///
/// Cloning yields another handle onto the same balances, so a host can keep
/// one handle while the engine owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryAsset {
    inner: Arc<Mutex<TokenState>>,
}

impl MemoryAsset {
    pub fn new(owner: Address) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TokenState {
                owner,
                ..TokenState::default()
            })),
        }
    }

    pub fn owner(&self) -> Address {
        self.inner.lock().owner
    }

    pub fn total_supply(&self) -> Amount {
        self.inner.lock().total_supply
    }

    /// Mint `amount` to the token owner. Only the owner may mint.
    pub fn mint(&self, caller: Address, amount: Amount) -> Result<(), AssetError> {
        let mut st = self.inner.lock();
        if caller != st.owner {
            return Err(AssetError::NotOwner);
        }
        let supply = st
            .total_supply
            .checked_add(amount)
            .ok_or(AssetError::Overflow)?;
        let bal = st
            .balance_of(&caller)
            .checked_add(amount)
            .ok_or(AssetError::Overflow)?;
        st.total_supply = supply;
        st.balances.insert(caller, bal);
        Ok(())
    }

    /// Block every transfer into or out of `who` until [`MemoryAsset::unfreeze`].
    pub fn freeze(&self, who: Address) {
        self.inner.lock().frozen.insert(who);
    }

    pub fn unfreeze(&self, who: Address) {
        self.inner.lock().frozen.remove(&who);
    }

    /// Host-side transfer between two accounts (same rules as [`AssetRegistry::transfer`]).
    pub fn send(&self, from: Address, to: Address, amount: Amount) -> Result<(), AssetError> {
        self.inner.lock().move_balance(from, to, amount)
    }
}

impl AssetRegistry for MemoryAsset {
    fn balance_of(&self, who: Address) -> Amount {
        self.inner.lock().balance_of(&who)
    }

    fn transfer(&mut self, holder: Address, to: Address, amount: Amount) -> Result<(), AssetError> {
        self.inner.lock().move_balance(holder, to, amount)
    }

    // Allowances are not modelled; any spender may pull.
    fn transfer_from(
        &mut self,
        _spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), AssetError> {
        self.inner.lock().move_balance(from, to, amount)
    }
}
