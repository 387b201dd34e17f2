//! Quorum Vault domain types
//!
//! The types here hold the vault's governance state: members and roles,
//! proposals and votes, treasury balances and spending controls. They are
//! data structures, not execution engines; the runtime crate wraps them
//! with authorization checks and audit trails.

#![deny(unsafe_code)]

pub mod audit;
pub mod error;
pub mod member;
pub mod proposal;
pub mod treasury;

pub use audit::{AuditJournal, ReceiptKind, VaultReceipt};
pub use error::{VaultError, VaultResult};
pub use member::{Member, MemberRoster, Role};
pub use proposal::{Proposal, ProposalId, ProposalKind, ProposalStatus, Vote};
pub use treasury::{
    SpendingLimit, SpendingPolicy, TransactionId, TransactionRecord, TreasuryState,
};

use serde::{Deserialize, Serialize};

/// Blocks per spending-limit day window.
pub const BLOCKS_PER_DAY: u64 = 144;
/// Blocks per spending-limit month window.
pub const BLOCKS_PER_MONTH: u64 = 4320;

/// Opaque principal handle for a vault participant.
///
/// The execution environment authenticates callers; the vault only ever
/// compares and stores these handles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quantity of treasury value.
///
/// All arithmetic is checked: overflow and underflow surface as errors at
/// the operation boundary, never wrap.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(pub u64);

impl Amount {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The vault's monotonic time source, expressed as a block counter.
///
/// The core reads heights, never advances them; the environment owns the
/// counter. Spending windows are derived by integer division.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// Index of the spending-limit day this height falls in.
    pub fn day_index(&self) -> u64 {
        self.0 / BLOCKS_PER_DAY
    }

    /// Index of the spending-limit month this height falls in.
    pub fn month_index(&self) -> u64 {
        self.0 / BLOCKS_PER_MONTH
    }

    pub fn saturating_add(self, blocks: u64) -> BlockHeight {
        BlockHeight(self.0.saturating_add(blocks))
    }
}

impl std::fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_checked_arithmetic() {
        let a = Amount::new(u64::MAX);
        assert_eq!(a.checked_add(Amount::new(1)), None);
        assert_eq!(Amount::new(5).checked_sub(Amount::new(7)), None);
        assert_eq!(
            Amount::new(5).checked_add(Amount::new(7)),
            Some(Amount::new(12))
        );
        assert_eq!(
            Amount::new(7).checked_sub(Amount::new(5)),
            Some(Amount::new(2))
        );
    }

    #[test]
    fn test_height_windows() {
        let h = BlockHeight::new(300);
        assert_eq!(h.day_index(), 2);
        assert_eq!(h.month_index(), 0);
        assert_eq!(BlockHeight::new(4320).month_index(), 1);
        assert_eq!(BlockHeight::new(143).day_index(), 0);
    }

    #[test]
    fn test_member_id_display() {
        assert_eq!(format!("{}", MemberId::new("wallet-1")), "wallet-1");
    }
}
