//! Quorum Vault runtime
//!
//! The runtime turns the passive domain types into a governed treasury:
//! specialized managers own each slice of state, and the `VaultController`
//! composes them behind a single authorization boundary. Every external
//! call is one sequential, atomic transition; no operation can observe
//! another's partial mutation.

#![deny(unsafe_code)]

pub mod access;
pub mod clock;
pub mod controller;
pub mod membership;
pub mod proposal_engine;
pub mod shared;
pub mod treasury_manager;

pub use access::{authorize, authorize_unpausable};
pub use clock::{BlockClock, ManualClock};
pub use controller::{MemberAnalytics, TreasuryAnalytics, VaultController, VaultStats};
pub use membership::MembershipManager;
pub use proposal_engine::ProposalEngine;
pub use shared::SharedVault;
pub use treasury_manager::TreasuryManager;
