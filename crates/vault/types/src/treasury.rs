//! Treasury state: balance, spending controls, transaction log
//!
//! These types hold the vault's financial state. They are data structures,
//! not an execution engine: the runtime's treasury manager layers the
//! all-or-nothing debit protocol and audit trail on top.

use crate::{Amount, BlockHeight, MemberId, ProposalId, VaultError, VaultResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dense, monotonic transaction identifier starting at 0.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TransactionId(pub u64);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An executed transfer, appended to the log and never rewritten.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub proposal_id: ProposalId,
    pub recipient: MemberId,
    pub amount: Amount,
    pub height: BlockHeight,
}

/// Per-member rolling spending caps.
///
/// Spent counters reset lazily: whenever the current day or month index has
/// advanced past the stored marker, the counter is zeroed before any
/// comparison. A `None` ceiling leaves that tier unconstrained; the total
/// tier never resets.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SpendingLimit {
    pub daily_limit: Option<Amount>,
    pub monthly_limit: Option<Amount>,
    pub total_limit: Option<Amount>,
    pub daily_spent: Amount,
    pub monthly_spent: Amount,
    pub total_spent: Amount,
    pub last_reset_day: u64,
    pub last_reset_month: u64,
}

impl SpendingLimit {
    /// A fresh limit with zeroed counters and reset markers taken from the
    /// current height.
    pub fn new(
        daily_limit: Option<Amount>,
        monthly_limit: Option<Amount>,
        total_limit: Option<Amount>,
        now: BlockHeight,
    ) -> Self {
        Self {
            daily_limit,
            monthly_limit,
            total_limit,
            daily_spent: Amount::zero(),
            monthly_spent: Amount::zero(),
            total_spent: Amount::zero(),
            last_reset_day: now.day_index(),
            last_reset_month: now.month_index(),
        }
    }

    /// The limit as it stands at `now`, with any due period resets applied.
    pub fn rolled_over(&self, now: BlockHeight) -> SpendingLimit {
        let mut rolled = *self;
        if now.day_index() > rolled.last_reset_day {
            rolled.daily_spent = Amount::zero();
            rolled.last_reset_day = now.day_index();
        }
        if now.month_index() > rolled.last_reset_month {
            rolled.monthly_spent = Amount::zero();
            rolled.last_reset_month = now.month_index();
        }
        rolled
    }

    /// Whether a further spend of `amount` fits under every configured
    /// ceiling. Call on a rolled-over value. Overflow counts as a violation.
    pub fn allows(&self, amount: Amount) -> bool {
        let fits = |spent: Amount, ceiling: Option<Amount>| match ceiling {
            Some(max) => spent
                .checked_add(amount)
                .map(|next| next <= max)
                .unwrap_or(false),
            None => true,
        };
        fits(self.daily_spent, self.daily_limit)
            && fits(self.monthly_spent, self.monthly_limit)
            && fits(self.total_spent, self.total_limit)
    }

    /// Accumulate a spend into every tier. Call on a rolled-over value
    /// after `allows` succeeded; unconstrained tiers still accumulate.
    pub fn record_spend(&mut self, amount: Amount) -> VaultResult<()> {
        self.daily_spent = self
            .daily_spent
            .checked_add(amount)
            .ok_or(VaultError::InvalidAmount(amount))?;
        self.monthly_spent = self
            .monthly_spent
            .checked_add(amount)
            .ok_or(VaultError::InvalidAmount(amount))?;
        self.total_spent = self
            .total_spent
            .checked_add(amount)
            .ok_or(VaultError::InvalidAmount(amount))?;
        Ok(())
    }
}

/// Per-category rule overlay applied at execution time, on top of the base
/// signature threshold.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SpendingPolicy {
    /// Largest single transfer the category permits.
    pub max_amount: Amount,
    /// When set, the originating proposal needs `min_signers` affirmative
    /// votes even if the base threshold is lower.
    pub requires_approval: bool,
    pub min_signers: u32,
    /// Blocks that must elapse between executions in this category.
    pub cooldown_period: u64,
}

/// The vault's financial state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TreasuryState {
    balance: Amount,
    limits: HashMap<MemberId, SpendingLimit>,
    policies: HashMap<String, SpendingPolicy>,
    log: Vec<TransactionRecord>,
    /// Height of the most recent executed transfer per category, for
    /// cooldown enforcement.
    last_category_spend: HashMap<String, BlockHeight>,
}

impl TreasuryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Add funds. Overflow is fatal to the call and leaves state untouched.
    pub fn credit(&mut self, amount: Amount) -> VaultResult<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(VaultError::InvalidAmount(amount))?;
        Ok(())
    }

    /// Remove funds. The balance can never go negative.
    pub fn debit(&mut self, amount: Amount) -> VaultResult<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(VaultError::InvalidAmount(amount))?;
        Ok(())
    }

    pub fn set_limit(&mut self, member: MemberId, limit: SpendingLimit) {
        self.limits.insert(member, limit);
    }

    pub fn limit(&self, member: &MemberId) -> Option<&SpendingLimit> {
        self.limits.get(member)
    }

    pub fn limit_mut(&mut self, member: &MemberId) -> Option<&mut SpendingLimit> {
        self.limits.get_mut(member)
    }

    pub fn set_policy(&mut self, category: String, policy: SpendingPolicy) {
        self.policies.insert(category, policy);
    }

    pub fn policy(&self, category: &str) -> Option<&SpendingPolicy> {
        self.policies.get(category)
    }

    pub fn last_category_spend(&self, category: &str) -> Option<BlockHeight> {
        self.last_category_spend.get(category).copied()
    }

    pub fn stamp_category_spend(&mut self, category: String, now: BlockHeight) {
        self.last_category_spend.insert(category, now);
    }

    /// Append an executed transfer with the next sequential id.
    pub fn append_transaction(
        &mut self,
        proposal_id: ProposalId,
        recipient: MemberId,
        amount: Amount,
        height: BlockHeight,
    ) -> TransactionId {
        let id = TransactionId(self.log.len() as u64);
        self.log.push(TransactionRecord {
            id,
            proposal_id,
            recipient,
            amount,
            height,
        });
        id
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&TransactionRecord> {
        self.log.get(id.0 as usize)
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.log
    }

    pub fn transaction_count(&self) -> usize {
        self.log.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_debit_checked() {
        let mut treasury = TreasuryState::new();
        treasury.credit(Amount::new(1000)).unwrap();
        assert_eq!(treasury.balance(), Amount::new(1000));

        treasury.debit(Amount::new(400)).unwrap();
        assert_eq!(treasury.balance(), Amount::new(600));

        // Overdraw fails and leaves the balance untouched.
        let err = treasury.debit(Amount::new(601)).unwrap_err();
        assert_eq!(err.code(), 108);
        assert_eq!(treasury.balance(), Amount::new(600));
    }

    #[test]
    fn test_credit_overflow_is_invalid_amount() {
        let mut treasury = TreasuryState::new();
        treasury.credit(Amount::new(u64::MAX)).unwrap();
        let err = treasury.credit(Amount::new(1)).unwrap_err();
        assert_eq!(err, VaultError::InvalidAmount(Amount::new(1)));
        assert_eq!(treasury.balance(), Amount::new(u64::MAX));
    }

    #[test]
    fn test_limit_rollover_resets_day_and_month() {
        let start = BlockHeight::new(100);
        let mut limit = SpendingLimit::new(
            Some(Amount::new(500)),
            Some(Amount::new(5000)),
            Some(Amount::new(20000)),
            start,
        );
        limit.record_spend(Amount::new(500)).unwrap();
        assert!(!limit.allows(Amount::new(1)));

        // Next day: daily counter resets, monthly persists.
        let next_day = BlockHeight::new(100 + crate::BLOCKS_PER_DAY);
        let rolled = limit.rolled_over(next_day);
        assert_eq!(rolled.daily_spent, Amount::zero());
        assert_eq!(rolled.monthly_spent, Amount::new(500));
        assert_eq!(rolled.total_spent, Amount::new(500));
        assert!(rolled.allows(Amount::new(500)));

        // Next month: both period counters reset, total never does.
        let next_month = BlockHeight::new(100 + crate::BLOCKS_PER_MONTH);
        let rolled = limit.rolled_over(next_month);
        assert_eq!(rolled.monthly_spent, Amount::zero());
        assert_eq!(rolled.total_spent, Amount::new(500));
    }

    #[test]
    fn test_missing_tier_is_unconstrained() {
        let limit = SpendingLimit::new(None, None, Some(Amount::new(100)), BlockHeight::new(0));
        assert!(limit.allows(Amount::new(100)));
        assert!(!limit.allows(Amount::new(101)));
    }

    #[test]
    fn test_transaction_log_ids_are_dense() {
        let mut treasury = TreasuryState::new();
        let a = treasury.append_transaction(
            ProposalId(0),
            MemberId::new("payee"),
            Amount::new(10),
            BlockHeight::new(5),
        );
        let b = treasury.append_transaction(
            ProposalId(1),
            MemberId::new("payee"),
            Amount::new(20),
            BlockHeight::new(6),
        );
        assert_eq!(a, TransactionId(0));
        assert_eq!(b, TransactionId(1));
        assert_eq!(treasury.transaction(a).unwrap().amount, Amount::new(10));
        assert_eq!(treasury.transaction_count(), 2);
    }
}
