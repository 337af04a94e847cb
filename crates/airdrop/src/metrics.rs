// crates/airdrop/src/metrics.rs

use crate::Amount;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

//
// Claim + reserve metrics
//

pub static CLAIMS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("airdrop_claims_total", "Successful claims").unwrap()
});

pub static CLAIMED_AMOUNT_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "airdrop_claimed_amount_total",
        "Total units paid out by claims"
    )
    .unwrap()
});

pub static REJECTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "airdrop_rejections_total",
        "Rejected engine operations by reason",
        &["reason"]
    )
    .unwrap()
});

pub static DEPOSITS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("airdrop_deposits_total", "Total units deposited into the reserve")
        .unwrap()
});

pub static WITHDRAWALS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "airdrop_withdrawals_total",
        "Total units withdrawn from the reserve"
    )
    .unwrap()
});

pub static ROOT_ROTATIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("airdrop_root_rotations_total", "Merkle root updates").unwrap()
});

// Counters are u64; clamp instead of wrapping on very large amounts.
#[inline]
fn units(amount: Amount) -> u64 {
    u64::try_from(amount).unwrap_or(u64::MAX)
}

pub fn observe_claim(amount: Amount) {
    CLAIMS_TOTAL.inc();
    CLAIMED_AMOUNT_TOTAL.inc_by(units(amount));
}

pub fn observe_rejection(reason: &'static str) {
    REJECTIONS_TOTAL.with_label_values(&[reason]).inc();
}

pub fn observe_deposit(amount: Amount) {
    DEPOSITS_TOTAL.inc_by(units(amount));
}

pub fn observe_withdrawal(amount: Amount) {
    WITHDRAWALS_TOTAL.inc_by(units(amount));
}

pub fn observe_root_rotation() {
    ROOT_ROTATIONS_TOTAL.inc();
}

/// Force registration so the series show up before the first event.
pub fn register_airdrop_metrics() {
    Lazy::force(&CLAIMS_TOTAL);
    Lazy::force(&CLAIMED_AMOUNT_TOTAL);
    Lazy::force(&REJECTIONS_TOTAL);
    Lazy::force(&DEPOSITS_TOTAL);
    Lazy::force(&WITHDRAWALS_TOTAL);
    Lazy::force(&ROOT_ROTATIONS_TOTAL);
}
