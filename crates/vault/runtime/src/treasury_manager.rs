//! Treasury manager: funds, spending controls, transaction log
//!
//! Wraps the treasury state with the all-or-nothing debit protocol. The
//! spending-limit check rolls counters forward, validates every ceiling and
//! the category policy, and only then commits; a violation leaves no trace.

use tracing::{info, warn};
use vault_types::{
    Amount, AuditJournal, BlockHeight, MemberId, ProposalId, ReceiptKind, SpendingLimit,
    SpendingPolicy, TransactionId, TransactionRecord, TreasuryState, VaultError, VaultResult,
};

/// Manages the vault's financial state.
pub struct TreasuryManager {
    state: TreasuryState,
}

impl TreasuryManager {
    pub fn new() -> Self {
        Self {
            state: TreasuryState::new(),
        }
    }

    /// Accept a deposit. Open to any caller; the controller gates only on
    /// the pause flag.
    pub fn deposit(
        &mut self,
        depositor: &MemberId,
        amount: Amount,
        now: BlockHeight,
        journal: &mut AuditJournal,
    ) -> VaultResult<Amount> {
        self.state.credit(amount)?;

        info!(depositor = %depositor, amount = %amount, "deposit accepted");

        journal.log(
            ReceiptKind::Deposit,
            depositor.clone(),
            format!("deposited {}", amount),
            now,
        );
        Ok(amount)
    }

    /// Install or overwrite a member's spending limit with zeroed counters
    /// and reset markers taken from the current height.
    pub fn set_spending_limit(
        &mut self,
        actor: &MemberId,
        target: MemberId,
        daily: Option<Amount>,
        monthly: Option<Amount>,
        total: Option<Amount>,
        now: BlockHeight,
        journal: &mut AuditJournal,
    ) {
        let limit = SpendingLimit::new(daily, monthly, total, now);
        self.state.set_limit(target.clone(), limit);

        info!(member = %target, "spending limit set");

        journal.log(
            ReceiptKind::SpendingLimitSet,
            actor.clone(),
            format!("limit set for {}", target),
            now,
        );
    }

    /// Upsert the policy for a spending category.
    pub fn set_spending_policy(
        &mut self,
        actor: &MemberId,
        category: String,
        policy: SpendingPolicy,
        now: BlockHeight,
        journal: &mut AuditJournal,
    ) {
        info!(category = %category, "spending policy set");

        self.state.set_policy(category.clone(), policy);
        journal.log(
            ReceiptKind::SpendingPolicySet,
            actor.clone(),
            format!("policy set for category {}", category),
            now,
        );
    }

    /// Validate a spend against the spender's limits and the category
    /// policy, then commit the counters. All-or-nothing: any violation
    /// returns `Unauthorized` and mutates nothing.
    ///
    /// `votes_for` is the originating proposal's affirmative tally, checked
    /// against policies that require approval.
    pub fn check_and_debit(
        &mut self,
        spender: &MemberId,
        category: &str,
        amount: Amount,
        votes_for: u32,
        now: BlockHeight,
    ) -> VaultResult<()> {
        // Phase 1: validate against rolled-over views. Nothing is written.
        let rolled = self.state.limit(spender).map(|l| l.rolled_over(now));
        if let Some(limit) = rolled {
            if !limit.allows(amount) {
                warn!(spender = %spender, amount = %amount, "spend exceeds member limit");
                return Err(VaultError::Unauthorized);
            }
        }

        if let Some(policy) = self.state.policy(category) {
            if amount > policy.max_amount {
                warn!(category = %category, amount = %amount, "spend exceeds category maximum");
                return Err(VaultError::Unauthorized);
            }
            if policy.requires_approval && votes_for < policy.min_signers {
                warn!(
                    category = %category,
                    votes = votes_for,
                    required = policy.min_signers,
                    "spend lacks required approvals"
                );
                return Err(VaultError::Unauthorized);
            }
            if policy.cooldown_period > 0 {
                if let Some(last) = self.state.last_category_spend(category) {
                    if now < last.saturating_add(policy.cooldown_period) {
                        warn!(category = %category, "spend within category cooldown");
                        return Err(VaultError::Unauthorized);
                    }
                }
            }
        }

        // Phase 2: commit. Every check passed, so these writes cannot fail
        // partway.
        if let Some(mut limit) = rolled {
            limit.record_spend(amount)?;
            self.state.set_limit(spender.clone(), limit);
        }
        self.state.stamp_category_spend(category.to_string(), now);
        Ok(())
    }

    /// Release funds for an executed proposal. The caller has already
    /// verified the balance covers the amount.
    pub fn withdraw(&mut self, amount: Amount) -> VaultResult<()> {
        self.state.debit(amount)
    }

    /// Append an executed transfer to the log.
    pub fn record_transaction(
        &mut self,
        proposal_id: ProposalId,
        recipient: MemberId,
        amount: Amount,
        now: BlockHeight,
    ) -> TransactionId {
        let id = self
            .state
            .append_transaction(proposal_id, recipient.clone(), amount, now);

        info!(tx = %id, proposal = %proposal_id, recipient = %recipient, amount = %amount, "transfer recorded");

        id
    }

    // --- Query methods ---

    pub fn balance(&self) -> Amount {
        self.state.balance()
    }

    /// A member's limit as it stands at `now`, with due resets applied.
    pub fn spending_limit(&self, member: &MemberId, now: BlockHeight) -> Option<SpendingLimit> {
        self.state.limit(member).map(|l| l.rolled_over(now))
    }

    pub fn spending_policy(&self, category: &str) -> Option<&SpendingPolicy> {
        self.state.policy(category)
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&TransactionRecord> {
        self.state.transaction(id)
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        self.state.transactions()
    }

    pub fn transaction_count(&self) -> usize {
        self.state.transaction_count()
    }
}

impl Default for TreasuryManager {
    fn default() -> Self {
        Self::new()
    }
}
