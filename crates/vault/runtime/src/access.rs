//! Access control policy
//!
//! A stateless evaluator over (roster, caller, required role, pause flag).
//! The pause flag is a global emergency brake: while set, every gated
//! operation is denied. Plain reads are never routed through here.

use vault_types::{MemberId, MemberRoster, Role, VaultError, VaultResult};

/// Authorize a gated operation.
///
/// Denies while the vault is paused, and otherwise requires the caller to
/// be a registered, active member holding at least `required`.
pub fn authorize(
    roster: &MemberRoster,
    caller: &MemberId,
    required: Role,
    paused: bool,
) -> VaultResult<()> {
    if paused {
        return Err(VaultError::Unauthorized);
    }
    authorize_unpausable(roster, caller, required)
}

/// Authorize without consulting the pause flag.
///
/// Only pause toggling itself uses this: the emergency brake must remain
/// releasable while engaged.
pub fn authorize_unpausable(
    roster: &MemberRoster,
    caller: &MemberId,
    required: Role,
) -> VaultResult<()> {
    if roster.has_role(caller, required) {
        Ok(())
    } else {
        Err(VaultError::Unauthorized)
    }
}
