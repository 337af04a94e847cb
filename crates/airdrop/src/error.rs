use crate::AssetError;

/// Rejection of a single engine operation. Every variant leaves state untouched.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirdropError {
    #[error("caller is not the owner")]
    NotOwner,
    #[error("sender balance is below the deposit amount")]
    InsufficientSenderBalance,
    #[error("caller does not hold the required NFT")]
    NotEligibleAsset,
    #[error("reserve cannot cover the claim")]
    InsufficientFunds,
    #[error("account has already claimed")]
    AlreadyClaimed,
    #[error("proof does not match the current merkle root")]
    NotEligibleProof,
    #[error("no funds remaining to withdraw")]
    NoFundsRemaining,
    #[error("deposit would overflow the reserve")]
    Overflow,
    #[error("engine account cannot act as owner or claimant")]
    EngineAccount,
    #[error("asset transfer failed: {0}")]
    Transfer(#[from] AssetError),
}

impl AirdropError {
    /// Stable label for logs and the `reason` metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            AirdropError::NotOwner => "not_owner",
            AirdropError::InsufficientSenderBalance => "insufficient_sender_balance",
            AirdropError::NotEligibleAsset => "not_eligible_asset",
            AirdropError::InsufficientFunds => "insufficient_funds",
            AirdropError::AlreadyClaimed => "already_claimed",
            AirdropError::NotEligibleProof => "not_eligible_proof",
            AirdropError::NoFundsRemaining => "no_funds_remaining",
            AirdropError::Overflow => "overflow",
            AirdropError::EngineAccount => "engine_account",
            AirdropError::Transfer(_) => "transfer_failed",
        }
    }
}
