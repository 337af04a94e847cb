use crate::merkle::{root_hex, Root};
use crate::{Address, AirdropEngine, AirdropError, AssetRegistry, Deployment, EligibilityOracle};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Asset reference used by the reference deployment.
pub const REFERENCE_ASSET: Address = Address::from_bytes([
    0xa2, 0xec, 0x96, 0xb3, 0xcc, 0x03, 0x18, 0xf5, 0xa3, 0x31, 0x14, 0xe9, 0x96, 0xfb, 0x9a,
    0x6a, 0x6f, 0xae, 0x3a, 0xdc,
]);

/// Merkle root used by the reference deployment.
pub const REFERENCE_ROOT: Root = [
    0x60, 0x46, 0x15, 0xd8, 0x16, 0xd1, 0xf7, 0x28, 0x97, 0x19, 0xe8, 0x7a, 0xc6, 0x82, 0x71,
    0xb7, 0x64, 0x18, 0x14, 0x16, 0xd4, 0x05, 0x76, 0x99, 0xd7, 0xf3, 0xc8, 0x25, 0x0c, 0x67,
    0x4e, 0x19,
];

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML in config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config: {0}")]
    Invalid(&'static str),
}

/// Deployment parameters, loaded from TOML.
///
/// ```toml
/// owner          = "0x…"
/// engine_address = "0x…"
/// asset          = "0x…"   # optional
/// merkle_root    = "0x…"   # optional
/// log_level      = "info"  # optional
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirdropConfig {
    pub owner: Address,
    pub engine_address: Address,
    #[serde(default = "AirdropConfig::reference_asset")]
    pub asset: Address,
    #[serde(default = "AirdropConfig::reference_root", with = "root_hex")]
    pub merkle_root: Root,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl AirdropConfig {
    pub fn reference_asset() -> Address {
        REFERENCE_ASSET
    }

    pub fn reference_root() -> Root {
        REFERENCE_ROOT
    }

    pub fn from_toml_str(txt: &str) -> Result<Self, ConfigError> {
        let cfg: AirdropConfig = toml::from_str(txt)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let txt = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&txt)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.is_zero() {
            return Err(ConfigError::Invalid("'owner' cannot be the zero address"));
        }
        if self.engine_address.is_zero() {
            return Err(ConfigError::Invalid("'engine_address' cannot be the zero address"));
        }
        if self.asset.is_zero() {
            return Err(ConfigError::Invalid("'asset' cannot be the zero address"));
        }
        if self.owner == self.engine_address {
            return Err(ConfigError::Invalid("'owner' and 'engine_address' must differ"));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::Invalid("'log_level' must be one of off|error|warn|info|debug|trace"))
    }

    pub fn deployment(&self) -> Deployment {
        Deployment {
            owner: self.owner,
            engine_address: self.engine_address,
            asset_reference: self.asset,
            merkle_root: self.merkle_root,
        }
    }

    pub fn deploy<A: AssetRegistry, O: EligibilityOracle>(
        &self,
        asset: A,
        oracle: O,
    ) -> Result<AirdropEngine<A, O>, AirdropError> {
        AirdropEngine::new(self.deployment(), asset, oracle)
    }
}
