//! Proposal engine: lifecycle and vote tallying
//!
//! Owns every proposal and vote record. Proposals move Created -> voting ->
//! executed or expired; the engine enforces one vote per (proposal, voter)
//! and never lets a terminal state revert. Authorization happens upstream.

use std::collections::HashMap;
use tracing::{debug, info};
use vault_types::{
    Amount, AuditJournal, BlockHeight, MemberId, Proposal, ProposalId, ProposalKind, ReceiptKind,
    VaultError, VaultResult, Vote,
};

/// Manages proposal records and votes.
pub struct ProposalEngine {
    proposals: HashMap<ProposalId, Proposal>,
    votes: HashMap<(ProposalId, MemberId), Vote>,
    next_id: u64,
}

impl ProposalEngine {
    pub fn new() -> Self {
        Self {
            proposals: HashMap::new(),
            votes: HashMap::new(),
            next_id: 0,
        }
    }

    /// Create a proposal and return its id.
    ///
    /// The signature threshold is snapshotted here; later threshold changes
    /// never affect an existing proposal.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        proposer: MemberId,
        kind: ProposalKind,
        recipient: MemberId,
        amount: Amount,
        description: String,
        duration: u64,
        threshold_snapshot: u32,
        now: BlockHeight,
        journal: &mut AuditJournal,
    ) -> VaultResult<ProposalId> {
        if amount.is_zero() {
            return Err(VaultError::InvalidAmount(amount));
        }
        if duration == 0 {
            return Err(VaultError::InvalidAmount(amount));
        }

        let id = ProposalId(self.next_id);
        self.next_id += 1;

        let proposal = Proposal {
            id,
            proposer: proposer.clone(),
            kind,
            recipient,
            amount,
            description,
            votes_for: 0,
            votes_against: 0,
            executed: false,
            created_at: now,
            expiry: now.saturating_add(duration),
            threshold_required: threshold_snapshot,
        };

        info!(
            proposal = %id,
            proposer = %proposer,
            amount = %amount,
            threshold = threshold_snapshot,
            "proposal created"
        );

        self.proposals.insert(id, proposal);
        journal.log(
            ReceiptKind::ProposalCreated,
            proposer,
            format!("created proposal {}", id),
            now,
        );
        Ok(id)
    }

    /// Record a vote. Votes are immutable once cast.
    pub fn vote(
        &mut self,
        voter: MemberId,
        id: ProposalId,
        choice: bool,
        now: BlockHeight,
        journal: &mut AuditJournal,
    ) -> VaultResult<()> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(VaultError::ProposalNotFound(id))?;

        if proposal.is_expired(now) {
            return Err(VaultError::ProposalExpired(id));
        }

        let key = (id, voter.clone());
        if self.votes.contains_key(&key) {
            return Err(VaultError::AlreadyVoted {
                proposal: id,
                voter,
            });
        }

        self.votes.insert(
            key,
            Vote {
                choice,
                voted_at: now,
            },
        );
        if choice {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }

        debug!(
            proposal = %id,
            voter = %voter,
            choice,
            votes_for = proposal.votes_for,
            votes_against = proposal.votes_against,
            "vote recorded"
        );

        journal.log(
            ReceiptKind::VoteCast,
            voter,
            format!(
                "voted {} on proposal {}",
                if choice { "for" } else { "against" },
                id
            ),
            now,
        );
        Ok(())
    }

    /// Pure executability predicate. Unknown ids are simply not executable.
    pub fn check_executable(&self, id: ProposalId, now: BlockHeight) -> bool {
        self.proposals
            .get(&id)
            .map(|p| p.is_executable(now))
            .unwrap_or(false)
    }

    /// Flip a proposal to its terminal executed state. The controller has
    /// already run the full precondition ladder.
    pub fn mark_executed(&mut self, id: ProposalId) -> VaultResult<()> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(VaultError::ProposalNotFound(id))?;
        proposal.executed = true;
        Ok(())
    }

    // --- Query methods ---

    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    pub fn vote_record(&self, id: ProposalId, voter: &MemberId) -> Option<&Vote> {
        self.votes.get(&(id, voter.clone()))
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    pub fn proposals(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.values()
    }

    /// Proposals still collecting votes at `now`.
    pub fn active_proposals(&self, now: BlockHeight) -> Vec<&Proposal> {
        self.proposals
            .values()
            .filter(|p| !p.executed && !p.is_expired(now))
            .collect()
    }

    /// Votes cast by a member across all proposals.
    pub fn votes_by(&self, member: &MemberId) -> usize {
        self.votes.keys().filter(|(_, voter)| voter == member).count()
    }
}

impl Default for ProposalEngine {
    fn default() -> Self {
        Self::new()
    }
}
