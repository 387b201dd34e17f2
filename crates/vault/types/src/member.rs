//! Membership roster: who belongs to the vault
//!
//! The roster is the source of truth for members, their roles, and their
//! activity status. Removal deactivates a member but never deletes the
//! record; history stays available for audit.

use crate::{BlockHeight, MemberId, VaultError, VaultResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Privilege tier of a member, ordered from least to most privileged.
///
/// The ordering is a capability ordering: an operation that requires
/// `Signer` is satisfied by `Signer` or `Admin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Read-only access to vault state.
    Viewer = 1,
    /// May create proposals, vote, and execute approved proposals.
    Signer = 2,
    /// May manage membership, thresholds, limits, policies, and the pause flag.
    Admin = 3,
}

impl Role {
    /// Map an external numeric level to a role.
    pub fn from_level(level: u8) -> Option<Role> {
        match level {
            1 => Some(Role::Viewer),
            2 => Some(Role::Signer),
            3 => Some(Role::Admin),
            _ => None,
        }
    }

    /// The external numeric level for this role.
    pub fn level(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Viewer => "viewer",
            Role::Signer => "signer",
            Role::Admin => "admin",
        };
        write!(f, "{}", name)
    }
}

/// A record for a single vault member.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    /// The member's identity.
    pub id: MemberId,
    /// Current privilege tier. Retained for audit even after deactivation.
    pub role: Role,
    /// Height at which the member was registered.
    pub added_at: BlockHeight,
    /// Height of the member's most recent vault activity.
    pub last_activity: BlockHeight,
    /// Whether the member may act. Inactive members fail every
    /// authorization check regardless of stored role.
    pub active: bool,
}

impl Member {
    pub fn new(id: MemberId, role: Role, now: BlockHeight) -> Self {
        Self {
            id,
            role,
            added_at: now,
            last_activity: now,
            active: true,
        }
    }
}

/// The membership roster.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemberRoster {
    members: HashMap<MemberId, Member>,
}

impl MemberRoster {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }

    /// Register a new member.
    ///
    /// Re-registering an identity is rejected even when the existing record
    /// is inactive: the audit trail stays intact and operators reactivate
    /// through a role update instead.
    pub fn insert(&mut self, id: MemberId, role: Role, now: BlockHeight) -> VaultResult<()> {
        if self.members.contains_key(&id) {
            return Err(VaultError::MemberExists(id));
        }
        self.members.insert(id.clone(), Member::new(id, role, now));
        Ok(())
    }

    /// Deactivate a member, keeping role and timestamps for audit.
    pub fn deactivate(&mut self, id: &MemberId) -> VaultResult<()> {
        let member = self
            .members
            .get_mut(id)
            .ok_or_else(|| VaultError::MemberNotFound(id.clone()))?;
        member.active = false;
        Ok(())
    }

    /// Overwrite a member's role. Activity status is untouched.
    pub fn set_role(&mut self, id: &MemberId, role: Role) -> VaultResult<()> {
        let member = self
            .members
            .get_mut(id)
            .ok_or_else(|| VaultError::MemberNotFound(id.clone()))?;
        member.role = role;
        Ok(())
    }

    /// Refresh a member's last-activity height. No-op for unknown ids.
    pub fn touch(&mut self, id: &MemberId, now: BlockHeight) {
        if let Some(member) = self.members.get_mut(id) {
            member.last_activity = now;
        }
    }

    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.get(id)
    }

    /// True iff the identity is a registered, active member with at least
    /// the given role.
    pub fn has_role(&self, id: &MemberId, required: Role) -> bool {
        self.members
            .get(id)
            .map(|m| m.active && m.role >= required)
            .unwrap_or(false)
    }

    /// True iff the identity may participate in governance (active Signer
    /// or above).
    pub fn is_authorized(&self, id: &MemberId) -> bool {
        self.has_role(id, Role::Signer)
    }

    pub fn active_member_count(&self) -> usize {
        self.members.values().filter(|m| m.active).count()
    }

    pub fn admin_count(&self) -> usize {
        self.members
            .values()
            .filter(|m| m.active && m.role == Role::Admin)
            .count()
    }

    pub fn members_with_role(&self, role: Role) -> Vec<&Member> {
        self.members
            .values()
            .filter(|m| m.active && m.role == role)
            .collect()
    }
}
