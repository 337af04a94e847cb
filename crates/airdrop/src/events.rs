use crate::merkle::{root_hex, Root};
use crate::{Address, Amount};
use serde::{Deserialize, Serialize};

/// Record of a committed state transition, appended in execution order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirdropEvent {
    /// Owner moved `amount` into the reserve.
    Deposited { account: Address, amount: Amount },
    /// `account` claimed its allocation.
    Claimed { account: Address, amount: Amount },
    /// Owner pulled the whole remaining reserve.
    Withdrawn { account: Address, amount: Amount },
    RootUpdated {
        #[serde(with = "root_hex")]
        previous: Root,
        #[serde(with = "root_hex")]
        current: Root,
    },
}

impl AirdropEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AirdropEvent::Deposited { .. } => "deposited",
            AirdropEvent::Claimed { .. } => "claimed",
            AirdropEvent::Withdrawn { .. } => "withdrawn",
            AirdropEvent::RootUpdated { .. } => "root_updated",
        }
    }
}
