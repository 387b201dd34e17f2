//! Membership manager: roster lifecycle with audit trail
//!
//! Wraps the roster with invariant checks, structured logging, and
//! receipts. Caller authorization happens in the controller before any of
//! these methods run.

use tracing::{info, warn};
use vault_types::{
    AuditJournal, BlockHeight, Member, MemberId, MemberRoster, ReceiptKind, Role, VaultResult,
};

/// Manages the membership roster.
pub struct MembershipManager {
    roster: MemberRoster,
}

impl MembershipManager {
    /// Bootstrap a roster with the deploying identity as sole Admin.
    pub fn bootstrap(deployer: MemberId, now: BlockHeight) -> Self {
        let mut roster = MemberRoster::new();
        roster
            .insert(deployer.clone(), Role::Admin, now)
            .expect("empty roster accepts the deployer");

        info!(deployer = %deployer, "membership roster bootstrapped");

        Self { roster }
    }

    /// Register a new member.
    pub fn add_member(
        &mut self,
        actor: &MemberId,
        target: MemberId,
        role: Role,
        now: BlockHeight,
        journal: &mut AuditJournal,
    ) -> VaultResult<()> {
        self.roster.insert(target.clone(), role, now)?;

        info!(member = %target, role = %role, "member added");

        journal.log(
            ReceiptKind::MemberAdded,
            actor.clone(),
            format!("added {} as {}", target, role),
            now,
        );
        Ok(())
    }

    /// Deactivate a member. Role and timestamps are retained.
    pub fn remove_member(
        &mut self,
        actor: &MemberId,
        target: &MemberId,
        now: BlockHeight,
        journal: &mut AuditJournal,
    ) -> VaultResult<()> {
        self.roster.deactivate(target)?;

        warn!(member = %target, "member deactivated");

        journal.log(
            ReceiptKind::MemberRemoved,
            actor.clone(),
            format!("deactivated {}", target),
            now,
        );
        Ok(())
    }

    /// Overwrite a member's role.
    pub fn update_role(
        &mut self,
        actor: &MemberId,
        target: &MemberId,
        role: Role,
        now: BlockHeight,
        journal: &mut AuditJournal,
    ) -> VaultResult<()> {
        self.roster.set_role(target, role)?;

        info!(member = %target, role = %role, "member role updated");

        journal.log(
            ReceiptKind::RoleUpdated,
            actor.clone(),
            format!("set {} to {}", target, role),
            now,
        );
        Ok(())
    }

    /// Refresh a member's last-activity height.
    pub fn touch(&mut self, member: &MemberId, now: BlockHeight) {
        self.roster.touch(member, now);
    }

    // --- Query methods (delegate to the roster) ---

    pub fn roster(&self) -> &MemberRoster {
        &self.roster
    }

    pub fn get_member(&self, id: &MemberId) -> Option<&Member> {
        self.roster.get(id)
    }

    pub fn is_authorized(&self, id: &MemberId) -> bool {
        self.roster.is_authorized(id)
    }

    pub fn active_member_count(&self) -> usize {
        self.roster.active_member_count()
    }

    pub fn admin_count(&self) -> usize {
        self.roster.admin_count()
    }
}
