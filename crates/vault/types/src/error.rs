//! Error taxonomy for vault operations
//!
//! Every fallible operation returns one of these kinds. The numeric codes
//! are the compatibility surface observed by external callers and must not
//! change; the variants themselves carry richer context for diagnostics.

use crate::proposal::ProposalId;
use crate::{Amount, MemberId};
use thiserror::Error;

/// Result alias used across the vault crates.
pub type VaultResult<T> = Result<T, VaultError>;

/// Vault operation failures.
///
/// Spending-limit and spending-policy violations deliberately surface as
/// `Unauthorized`: limit enforcement is an access-control boundary, not a
/// balance problem.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VaultError {
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    #[error("signature threshold must be at least 1")]
    InvalidThreshold,

    #[error("role level {0} is outside the valid range 1..=3")]
    InvalidRole(u8),

    #[error("member already registered: {0}")]
    MemberExists(MemberId),

    #[error("member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("proposal not found: {0}")]
    ProposalNotFound(ProposalId),

    #[error("member {voter} already voted on proposal {proposal}")]
    AlreadyVoted {
        proposal: ProposalId,
        voter: MemberId,
    },

    #[error("proposal {0} has expired")]
    ProposalExpired(ProposalId),

    #[error("proposal has {have} affirmative votes, needs {need}")]
    InsufficientVotes { have: u32, need: u32 },

    #[error("invalid amount: {0}")]
    InvalidAmount(Amount),

    #[error("proposal {0} was already executed")]
    ExecutionFailed(ProposalId),
}

impl VaultError {
    /// The numeric error code observed by external callers.
    ///
    /// `InvalidThreshold` and `InvalidRole` share a code, as do all
    /// authorization failures including limit violations.
    pub fn code(&self) -> u32 {
        match self {
            VaultError::Unauthorized => 100,
            VaultError::InvalidThreshold | VaultError::InvalidRole(_) => 101,
            VaultError::MemberExists(_) => 102,
            VaultError::MemberNotFound(_) => 103,
            VaultError::ProposalNotFound(_) => 104,
            VaultError::AlreadyVoted { .. } => 105,
            VaultError::ProposalExpired(_) => 106,
            VaultError::InsufficientVotes { .. } => 107,
            VaultError::InvalidAmount(_) => 108,
            VaultError::ExecutionFailed(_) => 109,
        }
    }
}
