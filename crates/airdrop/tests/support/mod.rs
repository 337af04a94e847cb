// crates/airdrop/tests/support/mod.rs
#![allow(dead_code)]

use merkle_airdrop::{
    AirdropEngine, Address, Amount, ClaimEntry, ClaimTree, Deployment, MemoryAsset, NftRegistry,
    Root,
};

pub const OWNER: Address = Address::from_bytes([0x0a; 20]);
pub const ENGINE: Address = Address::from_bytes([0xee; 20]);
pub const TOKEN: Address = Address::from_bytes([0x70; 20]);
pub const ADDR3: Address = Address::from_bytes([0x33; 20]);
/// In the distribution list but holds no NFT.
pub const NO_NFT: Address = Address::from_bytes([0x44; 20]);
/// Neither listed nor holding anything.
pub const STRANGER: Address = Address::from_bytes([0x55; 20]);

/// Owner's token balance right after setup, before the reserve is funded.
pub const OWNER_SUPPLY: Amount = 1_000_000;

pub type Engine = AirdropEngine<MemoryAsset, NftRegistry>;

pub fn addr1() -> Address {
    "0xe2A83b15FC300D8457eB9E176f98d92a8FF40a49".parse().expect("addr1")
}

pub fn addr2() -> Address {
    "0x6b4DF334368b09f87B3722449703060EEf284126".parse().expect("addr2")
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// (addr1, 30000), (addr2, 10000), (addr3, 5000), (no-NFT account, 5000)
pub fn reference_entries() -> Vec<ClaimEntry> {
    vec![
        ClaimEntry::new(addr1(), 30_000),
        ClaimEntry::new(addr2(), 10_000),
        ClaimEntry::new(ADDR3, 5_000),
        ClaimEntry::new(NO_NFT, 5_000),
    ]
}

pub struct Fixture {
    pub engine: Engine,
    pub token: MemoryAsset,
    pub nfts: NftRegistry,
    pub tree: ClaimTree,
}

impl Fixture {
    pub fn proof(&self, who: Address, amount: Amount) -> Vec<Root> {
        self.tree.proof_for(&who, amount).expect("entry is in the list")
    }
}

/// Deploy over `entries` with the reserve funded by a direct transfer of `reserve`.
/// addr1, addr2 and addr3 hold the gating NFT.
pub fn fixture_for(entries: &[ClaimEntry], reserve: Amount) -> Fixture {
    init_logging();
    let token = MemoryAsset::new(OWNER);
    token.mint(OWNER, OWNER_SUPPLY).expect("mint owner supply");
    token.send(OWNER, ENGINE, reserve).expect("fund reserve");

    let nfts = NftRegistry::new();
    for who in [addr1(), addr2(), ADDR3] {
        nfts.mint(who);
    }

    let tree = ClaimTree::new(entries).expect("tree");
    let deployment = Deployment {
        owner: OWNER,
        engine_address: ENGINE,
        asset_reference: TOKEN,
        merkle_root: tree.root(),
    };
    let engine = AirdropEngine::new(deployment, token.clone(), nfts.clone()).expect("deploy");
    Fixture {
        engine,
        token,
        nfts,
        tree,
    }
}

pub fn fixture_with_reserve(reserve: Amount) -> Fixture {
    fixture_for(&reference_entries(), reserve)
}

pub fn reference_fixture() -> Fixture {
    fixture_with_reserve(35_000)
}
