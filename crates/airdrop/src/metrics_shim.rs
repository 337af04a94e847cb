// No-op counterparts of `metrics.rs` for builds without the `metrics` feature.
use crate::Amount;

#[inline]
pub fn observe_claim(_amount: Amount) {}

#[inline]
pub fn observe_rejection(_reason: &'static str) {}

#[inline]
pub fn observe_deposit(_amount: Amount) {}

#[inline]
pub fn observe_withdrawal(_amount: Amount) {}

#[inline]
pub fn observe_root_rotation() {}

// When the `metrics` feature is off, provide no-op registration to keep callers simple.
pub fn register_airdrop_metrics() {}
