//! Audit journal: append-only receipts for every state mutation
//!
//! Each mutating vault operation logs one receipt. The journal is a
//! best-effort accountability surface and never participates in
//! authorization decisions.

use crate::{BlockHeight, MemberId};
use serde::{Deserialize, Serialize};

/// What kind of mutation a receipt records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptKind {
    MemberAdded,
    MemberRemoved,
    RoleUpdated,
    ThresholdUpdated,
    PauseToggled,
    Deposit,
    SpendingLimitSet,
    SpendingPolicySet,
    ProposalCreated,
    VoteCast,
    ProposalExecuted,
}

/// A single audit record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VaultReceipt {
    /// Position in the journal, dense from 0.
    pub seq: u64,
    pub kind: ReceiptKind,
    /// Who performed the operation.
    pub actor: MemberId,
    pub details: String,
    pub height: BlockHeight,
}

/// Append-only receipt log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuditJournal {
    receipts: Vec<VaultReceipt>,
}

impl AuditJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(
        &mut self,
        kind: ReceiptKind,
        actor: MemberId,
        details: impl Into<String>,
        height: BlockHeight,
    ) {
        let seq = self.receipts.len() as u64;
        self.receipts.push(VaultReceipt {
            seq,
            kind,
            actor,
            details: details.into(),
            height,
        });
    }

    pub fn receipts(&self) -> &[VaultReceipt] {
        &self.receipts
    }

    pub fn receipt_count(&self) -> usize {
        self.receipts.len()
    }

    /// The most recent `n` receipts, newest first.
    pub fn recent(&self, n: usize) -> Vec<&VaultReceipt> {
        self.receipts.iter().rev().take(n).collect()
    }
}
