mod support;

use merkle_airdrop::{AirdropError, AssetRegistry, Root};
use support::*;

const OTHER_ROOT: Root = [0x5a; 32];

#[test]
fn non_owner_is_rejected_for_every_admin_operation() {
    let mut f = reference_fixture();
    // give the callers funds so balance checks would otherwise pass
    for who in [addr1(), STRANGER] {
        f.token.send(OWNER, who, 10_000).unwrap();
    }
    let root = f.engine.current_root();

    for caller in [addr1(), addr2(), STRANGER, ENGINE, TOKEN] {
        assert_eq!(f.engine.deposit(caller, 1).unwrap_err(), AirdropError::NotOwner);
        assert_eq!(
            f.engine.withdraw_remaining(caller).unwrap_err(),
            AirdropError::NotOwner
        );
        assert_eq!(
            f.engine.update_root(caller, OTHER_ROOT).unwrap_err(),
            AirdropError::NotOwner
        );
    }

    assert_eq!(f.engine.current_root(), root);
    assert_eq!(f.engine.reserve(), 35_000);
    assert_eq!(f.token.balance_of(addr1()), 10_000);
    assert_eq!(f.token.balance_of(STRANGER), 10_000);
    assert!(f.engine.events().is_empty());
}

#[test]
fn ownership_is_checked_before_anything_else() {
    let mut f = fixture_with_reserve(0);

    // would be InsufficientSenderBalance for the owner
    assert_eq!(
        f.engine.deposit(STRANGER, u128::MAX).unwrap_err(),
        AirdropError::NotOwner
    );
    // would be NoFundsRemaining for the owner
    assert_eq!(
        f.engine.withdraw_remaining(STRANGER).unwrap_err(),
        AirdropError::NotOwner
    );
    assert_eq!(
        f.engine.withdraw_remaining(OWNER).unwrap_err(),
        AirdropError::NoFundsRemaining
    );
}

#[test]
fn owner_may_claim_like_anyone_else() {
    use merkle_airdrop::ClaimEntry;

    let mut entries = reference_entries();
    entries.push(ClaimEntry::new(OWNER, 700));
    let mut f = fixture_for(&entries, 10_000);
    f.nfts.mint(OWNER);

    let before = f.token.balance_of(OWNER);
    let proof = f.proof(OWNER, 700);
    f.engine.claim(OWNER, 700, &proof).unwrap();
    assert_eq!(f.token.balance_of(OWNER), before + 700);
    assert!(f.engine.is_claimed(&OWNER));
}
