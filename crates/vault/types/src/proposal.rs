//! Proposal and vote records
//!
//! A proposal is a pending request to move treasury value. Its lifecycle is
//! driven entirely by vote tallies and the height counter; the structs here
//! only answer questions about state, they never mutate the vault.

use crate::{Amount, BlockHeight, MemberId};
use serde::{Deserialize, Serialize};

/// Dense, monotonic proposal identifier starting at 0.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProposalId(pub u64);

impl std::fmt::Display for ProposalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a proposal asks the vault to do.
///
/// Only value transfer exists today; the enum is the seam for future
/// proposal kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProposalKind {
    #[default]
    Transfer,
}

impl ProposalKind {
    /// The category label used for spending-policy lookups.
    pub fn category(&self) -> &'static str {
        match self {
            ProposalKind::Transfer => "TRANSFER",
        }
    }
}

impl std::fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category())
    }
}

/// Lifecycle state derived from a proposal and the current height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Collecting votes, threshold not yet met.
    Active,
    /// Threshold met and not expired; awaiting execution.
    Executable,
    /// Executed. Terminal.
    Executed,
    /// Passed its expiry height without execution. Terminal.
    Expired,
}

/// A pending or settled treasury proposal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub proposer: MemberId,
    pub kind: ProposalKind,
    pub recipient: MemberId,
    pub amount: Amount,
    pub description: String,
    pub votes_for: u32,
    pub votes_against: u32,
    /// Terminal once true; a second execution attempt must fail.
    pub executed: bool,
    pub created_at: BlockHeight,
    /// Last height at which the proposal may be voted on or executed.
    pub expiry: BlockHeight,
    /// Signature threshold snapshotted at creation. Later threshold
    /// changes do not affect this proposal.
    pub threshold_required: u32,
}

impl Proposal {
    /// True once the height counter has passed the expiry height.
    pub fn is_expired(&self, now: BlockHeight) -> bool {
        now > self.expiry
    }

    /// True iff the proposal could be executed right now: not yet
    /// executed, not expired, and enough affirmative votes.
    pub fn is_executable(&self, now: BlockHeight) -> bool {
        !self.executed && now <= self.expiry && self.votes_for >= self.threshold_required
    }

    /// Derive the lifecycle state at the given height.
    pub fn status(&self, now: BlockHeight) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if self.is_expired(now) {
            ProposalStatus::Expired
        } else if self.votes_for >= self.threshold_required {
            ProposalStatus::Executable
        } else {
            ProposalStatus::Active
        }
    }
}

/// An immutable vote record. At most one exists per (proposal, voter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// true = for, false = against.
    pub choice: bool,
    pub voted_at: BlockHeight,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal(threshold: u32) -> Proposal {
        Proposal {
            id: ProposalId(0),
            proposer: MemberId::new("proposer"),
            kind: ProposalKind::Transfer,
            recipient: MemberId::new("payee"),
            amount: Amount::new(1000),
            description: "Payment for services".into(),
            votes_for: 0,
            votes_against: 0,
            executed: false,
            created_at: BlockHeight::new(10),
            expiry: BlockHeight::new(154),
            threshold_required: threshold,
        }
    }

    #[test]
    fn test_status_transitions() {
        let mut p = proposal(2);
        let now = BlockHeight::new(20);

        assert_eq!(p.status(now), ProposalStatus::Active);
        assert!(!p.is_executable(now));

        p.votes_for = 2;
        assert_eq!(p.status(now), ProposalStatus::Executable);
        assert!(p.is_executable(now));

        p.executed = true;
        assert_eq!(p.status(now), ProposalStatus::Executed);
        assert!(!p.is_executable(now));
    }

    #[test]
    fn test_expiry_boundary() {
        let mut p = proposal(1);
        p.votes_for = 1;

        // Executable exactly at expiry, expired one block past it.
        assert!(p.is_executable(BlockHeight::new(154)));
        assert!(!p.is_expired(BlockHeight::new(154)));
        assert!(p.is_expired(BlockHeight::new(155)));
        assert_eq!(p.status(BlockHeight::new(155)), ProposalStatus::Expired);
    }

    #[test]
    fn test_opposing_votes_do_not_block_execution() {
        // Approval threshold, not majority rule.
        let mut p = proposal(1);
        p.votes_for = 1;
        p.votes_against = 3;
        assert!(p.is_executable(BlockHeight::new(20)));
    }

    #[test]
    fn test_kind_category() {
        assert_eq!(ProposalKind::Transfer.category(), "TRANSFER");
        assert_eq!(format!("{}", ProposalKind::Transfer), "TRANSFER");
    }
}
