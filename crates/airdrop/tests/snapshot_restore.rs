mod support;

use merkle_airdrop::{
    format_root, AirdropEngine, AirdropError, EngineSnapshot, SnapshotError, SNAPSHOT_VERSION,
};
use support::*;

#[test]
fn claims_survive_snapshot_and_restore() {
    let mut f = reference_fixture();
    let proof = f.proof(addr1(), 30_000);
    f.engine.claim(addr1(), 30_000, &proof).unwrap();

    let snap = f.engine.snapshot();
    assert_eq!(snap.version, SNAPSHOT_VERSION);
    assert_eq!(snap.claimed, vec![addr1()]);

    let json = snap.to_json().unwrap();
    assert!(json.contains(&format_root(&f.engine.current_root())));
    assert!(json.contains("0xe2a83b15fc300d8457eb9e176f98d92a8ff40a49"));

    let back = EngineSnapshot::from_json(&json).unwrap();
    assert_eq!(back, snap);

    let mut restored =
        AirdropEngine::restore(back, f.token.clone(), f.nfts.clone()).unwrap();
    assert_eq!(restored.deployment(), f.engine.deployment());
    assert_eq!(restored.reserve(), 5_000);
    assert!(restored.is_claimed(&addr1()));
    assert!(restored.events().is_empty());

    assert_eq!(
        restored.claim(addr1(), 30_000, &proof).unwrap_err(),
        AirdropError::AlreadyClaimed
    );
    let p3 = f.proof(ADDR3, 5_000);
    restored.claim(ADDR3, 5_000, &p3).unwrap();
    assert_eq!(restored.claimed_count(), 2);
}

#[test]
fn claimed_list_is_sorted() {
    let mut f = fixture_with_reserve(50_000);
    for who in [ADDR3, addr1(), addr2()] {
        let amount = reference_entries()
            .into_iter()
            .find(|e| e.account == who)
            .unwrap()
            .amount;
        let proof = f.proof(who, amount);
        f.engine.claim(who, amount, &proof).unwrap();
    }
    let claimed = f.engine.snapshot().claimed;
    let mut sorted = claimed.clone();
    sorted.sort();
    assert_eq!(claimed, sorted);
    assert_eq!(claimed.len(), 3);
}

#[test]
fn unknown_version_is_rejected() {
    let f = reference_fixture();
    let mut snap = f.engine.snapshot();
    snap.version = SNAPSHOT_VERSION + 1;

    let json = serde_json::to_string(&snap).unwrap();
    assert!(matches!(
        EngineSnapshot::from_json(&json),
        Err(SnapshotError::UnsupportedVersion(v)) if v == SNAPSHOT_VERSION + 1
    ));
    assert!(matches!(
        AirdropEngine::restore(snap, f.token.clone(), f.nfts.clone()),
        Err(SnapshotError::UnsupportedVersion(_))
    ));
}

#[test]
fn duplicate_claim_entries_are_rejected() {
    let f = reference_fixture();
    let mut snap = f.engine.snapshot();
    snap.claimed = vec![addr2(), addr2()];
    assert!(matches!(
        AirdropEngine::restore(snap, f.token.clone(), f.nfts.clone()),
        Err(SnapshotError::DuplicateClaim(a)) if a == addr2()
    ));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        EngineSnapshot::from_json("{\"version\": 1, \"owner\": \"0x12\"}"),
        Err(SnapshotError::Json(_))
    ));
}
