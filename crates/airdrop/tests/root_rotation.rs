mod support;

use merkle_airdrop::{AirdropError, AirdropEvent, AssetRegistry, ClaimEntry, ClaimTree};
use support::*;

fn first_list() -> Vec<ClaimEntry> {
    vec![
        ClaimEntry::new(addr1(), 30_000),
        ClaimEntry::new(addr2(), 10_000),
        ClaimEntry::new(ADDR3, 5_000),
    ]
}

fn second_list() -> Vec<ClaimEntry> {
    vec![
        ClaimEntry::new(addr1(), 1),
        ClaimEntry::new(addr2(), 20_000),
        ClaimEntry::new(STRANGER, 7),
    ]
}

#[test]
fn rotation_keeps_claims_and_switches_proof_basis() {
    let mut f = fixture_for(&first_list(), 100_000);
    let first = f.tree.root();
    let second_tree = ClaimTree::new(&second_list()).unwrap();
    let second = second_tree.root();
    assert_ne!(first, second);

    let p1 = f.proof(addr1(), 30_000);
    f.engine.claim(addr1(), 30_000, &p1).unwrap();

    f.engine.update_root(OWNER, second).unwrap();
    assert_eq!(f.engine.current_root(), second);
    assert_eq!(
        f.engine.events().last(),
        Some(&AirdropEvent::RootUpdated {
            previous: first,
            current: second
        })
    );

    // claimed under the old root stays claimed under the new one
    let p1b = second_tree.proof_for(&addr1(), 1).unwrap();
    assert_eq!(
        f.engine.claim(addr1(), 1, &p1b).unwrap_err(),
        AirdropError::AlreadyClaimed
    );

    // proofs against the old root no longer verify
    let p3 = f.proof(ADDR3, 5_000);
    assert_eq!(
        f.engine.claim(ADDR3, 5_000, &p3).unwrap_err(),
        AirdropError::NotEligibleProof
    );
    let p2 = f.proof(addr2(), 10_000);
    assert_eq!(
        f.engine.claim(addr2(), 10_000, &p2).unwrap_err(),
        AirdropError::NotEligibleProof
    );

    // the new allocation is claimable
    let p2b = second_tree.proof_for(&addr2(), 20_000).unwrap();
    f.engine.claim(addr2(), 20_000, &p2b).unwrap();
    assert_eq!(f.token.balance_of(addr2()), 20_000);

    // rotating back re-enables the first list for accounts not yet claimed
    f.engine.update_root(OWNER, first).unwrap();
    f.engine.claim(ADDR3, 5_000, &p3).unwrap();
    assert_eq!(
        f.engine.claim(addr2(), 10_000, &p2).unwrap_err(),
        AirdropError::AlreadyClaimed
    );
    assert_eq!(f.engine.claimed_count(), 3);
    assert_eq!(f.engine.reserve(), 100_000 - 30_000 - 20_000 - 5_000);
}

#[test]
fn rotating_to_the_same_root_still_emits() {
    let mut f = reference_fixture();
    let root = f.engine.current_root();
    f.engine.update_root(OWNER, root).unwrap();
    assert_eq!(f.engine.current_root(), root);
    assert_eq!(
        f.engine.drain_events(),
        vec![AirdropEvent::RootUpdated {
            previous: root,
            current: root
        }]
    );
    assert!(f.engine.events().is_empty());
}
