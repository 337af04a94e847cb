// crates/airdrop/src/engine.rs
use crate::merkle::{format_root, leaf_hash, verify, Root};
use crate::{
    metrics, Address, AirdropError, AirdropEvent, Amount, AssetRegistry, ClaimLedger,
    EligibilityOracle,
};
use log::{debug, info, warn};

/// Construction parameters of one deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployment {
    /// Sole account allowed to deposit, withdraw and rotate the root.
    pub owner: Address,
    /// Account under which the reserve is held in the asset registry.
    pub engine_address: Address,
    /// Reference to the distributable asset (informational).
    pub asset_reference: Address,
    pub merkle_root: Root,
}

/// Claim-verification and accounting engine.
///
/// Every state transition takes `&mut self`, so one operation runs at a time
/// and either commits fully or returns an error with nothing changed.
pub struct AirdropEngine<A, O> {
    owner: Address,
    engine_address: Address,
    asset_reference: Address,
    root: Root,
    ledger: ClaimLedger,
    asset: A,
    oracle: O,
    events: Vec<AirdropEvent>,
}

impl<A: AssetRegistry, O: EligibilityOracle> AirdropEngine<A, O> {
    /// Fails with [`AirdropError::EngineAccount`] when the owner is the engine
    /// address: every reserve movement would then be a self-transfer.
    pub fn new(deployment: Deployment, asset: A, oracle: O) -> Result<Self, AirdropError> {
        if deployment.owner == deployment.engine_address {
            warn!(
                "airdrop: deploy rejected owner={} is the engine address",
                deployment.owner
            );
            return Err(AirdropError::EngineAccount);
        }
        info!(
            "airdrop: deployed owner={} engine={} asset={} root={}",
            deployment.owner,
            deployment.engine_address,
            deployment.asset_reference,
            format_root(&deployment.merkle_root)
        );
        Ok(Self::from_parts(deployment, ClaimLedger::default(), asset, oracle))
    }

    pub(crate) fn from_parts(deployment: Deployment, ledger: ClaimLedger, asset: A, oracle: O) -> Self {
        Self {
            owner: deployment.owner,
            engine_address: deployment.engine_address,
            asset_reference: deployment.asset_reference,
            root: deployment.merkle_root,
            ledger,
            asset,
            oracle,
            events: Vec::new(),
        }
    }

    // ── read-only accessors ──────────────────────────────────────

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn asset_reference(&self) -> Address {
        self.asset_reference
    }

    pub fn engine_address(&self) -> Address {
        self.engine_address
    }

    pub fn current_root(&self) -> Root {
        self.root
    }

    pub fn deployment(&self) -> Deployment {
        Deployment {
            owner: self.owner,
            engine_address: self.engine_address,
            asset_reference: self.asset_reference,
            merkle_root: self.root,
        }
    }

    /// Live reserve: the engine's balance in the asset registry, read on every call.
    pub fn reserve(&self) -> Amount {
        self.asset.balance_of(self.engine_address)
    }

    pub fn is_claimed(&self, who: &Address) -> bool {
        self.ledger.is_claimed(who)
    }

    pub fn claimed_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn ledger(&self) -> &ClaimLedger {
        &self.ledger
    }

    pub fn asset(&self) -> &A {
        &self.asset
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> &[AirdropEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<AirdropEvent> {
        std::mem::take(&mut self.events)
    }

    // ── claims ───────────────────────────────────────────────────

    /// Pay `amount` to `caller` if `(caller, amount)` is proven under the current root.
    ///
    /// Checks run in this order and the first failure is returned:
    /// engine account, already claimed, NFT gate, reserve sufficiency, proof.
    pub fn claim(&mut self, caller: Address, amount: Amount, proof: &[Root]) -> Result<(), AirdropError> {
        self.try_claim(caller, amount, proof)
            .map_err(|e| self.rejected("claim", caller, e))
    }

    fn try_claim(&mut self, caller: Address, amount: Amount, proof: &[Root]) -> Result<(), AirdropError> {
        // paying the engine itself would leave the reserve unchanged
        if caller == self.engine_address {
            return Err(AirdropError::EngineAccount);
        }
        if self.ledger.is_claimed(&caller) {
            return Err(AirdropError::AlreadyClaimed);
        }
        if !self.oracle.holds(caller) {
            return Err(AirdropError::NotEligibleAsset);
        }
        if self.reserve() < amount {
            return Err(AirdropError::InsufficientFunds);
        }
        let leaf = leaf_hash(&caller, amount);
        if !verify(&self.root, &leaf, proof) {
            return Err(AirdropError::NotEligibleProof);
        }

        // Pay first: if the registry rejects the transfer nothing below runs.
        self.asset.transfer(self.engine_address, caller, amount)?;
        self.ledger.mark_claimed(caller);

        info!("airdrop: claimed account={caller} amount={amount}");
        metrics::observe_claim(amount);
        self.emit(AirdropEvent::Claimed {
            account: caller,
            amount,
        });
        Ok(())
    }

    // ── reserve ──────────────────────────────────────────────────

    /// Move `amount` from the owner's balance into the reserve.
    pub fn deposit(&mut self, caller: Address, amount: Amount) -> Result<(), AirdropError> {
        self.try_deposit(caller, amount)
            .map_err(|e| self.rejected("deposit", caller, e))
    }

    fn try_deposit(&mut self, caller: Address, amount: Amount) -> Result<(), AirdropError> {
        self.only_owner(caller)?;
        if self.asset.balance_of(caller) < amount {
            return Err(AirdropError::InsufficientSenderBalance);
        }
        self.reserve()
            .checked_add(amount)
            .ok_or(AirdropError::Overflow)?;

        self.asset
            .transfer_from(self.engine_address, caller, self.engine_address, amount)?;

        info!("airdrop: deposit account={caller} amount={amount}");
        metrics::observe_deposit(amount);
        self.emit(AirdropEvent::Deposited {
            account: caller,
            amount,
        });
        Ok(())
    }

    /// Send the entire reserve to the owner.
    pub fn withdraw_remaining(&mut self, caller: Address) -> Result<(), AirdropError> {
        self.try_withdraw_remaining(caller)
            .map_err(|e| self.rejected("withdraw_remaining", caller, e))
    }

    fn try_withdraw_remaining(&mut self, caller: Address) -> Result<(), AirdropError> {
        self.only_owner(caller)?;
        let remaining = self.reserve();
        if remaining == 0 {
            return Err(AirdropError::NoFundsRemaining);
        }

        self.asset
            .transfer(self.engine_address, self.owner, remaining)?;

        info!("airdrop: withdrew remaining={remaining} to owner={}", self.owner);
        metrics::observe_withdrawal(remaining);
        self.emit(AirdropEvent::Withdrawn {
            account: self.owner,
            amount: remaining,
        });
        Ok(())
    }

    // ── administration ───────────────────────────────────────────

    /// Replace the Merkle root. Existing claim records are kept as they are.
    pub fn update_root(&mut self, caller: Address, new_root: Root) -> Result<(), AirdropError> {
        self.only_owner(caller)
            .map_err(|e| self.rejected("update_root", caller, e))?;

        let previous = std::mem::replace(&mut self.root, new_root);
        info!(
            "airdrop: root rotated {} -> {}",
            format_root(&previous),
            format_root(&new_root)
        );
        metrics::observe_root_rotation();
        self.emit(AirdropEvent::RootUpdated {
            previous,
            current: new_root,
        });
        Ok(())
    }

    fn emit(&mut self, event: AirdropEvent) {
        debug!("airdrop: event {}", event.name());
        self.events.push(event);
    }

    #[inline]
    fn only_owner(&self, caller: Address) -> Result<(), AirdropError> {
        if caller != self.owner {
            return Err(AirdropError::NotOwner);
        }
        Ok(())
    }

    fn rejected(&self, op: &'static str, caller: Address, err: AirdropError) -> AirdropError {
        warn!("airdrop: {op} rejected caller={caller} reason={}", err.kind());
        metrics::observe_rejection(err.kind());
        err
    }
}
