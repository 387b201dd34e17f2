//! Shared vault handle: the mutex transaction boundary
//!
//! The controller's `&mut self` surface already makes each call a
//! sequential transition for a single owner. `SharedVault` extends that
//! guarantee to shared handles: every `transact` closure runs under one
//! exclusive lock, so no caller observes a partially-applied mutation.

use crate::controller::VaultController;
use std::sync::{Arc, Mutex};

/// A cloneable, thread-safe handle to a vault.
#[derive(Clone)]
pub struct SharedVault {
    inner: Arc<Mutex<VaultController>>,
}

impl SharedVault {
    pub fn new(controller: VaultController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Run one operation as an exclusive transaction over the vault.
    ///
    /// A poisoned lock means a panic escaped a prior transaction; the state
    /// machine itself never panics, so the poison is propagated.
    pub fn transact<T>(&self, op: impl FnOnce(&mut VaultController) -> T) -> T {
        let mut guard = self.inner.lock().expect("vault lock poisoned");
        op(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use vault_types::{Amount, MemberId};

    #[test]
    fn test_transactions_serialize_across_clones() {
        let deployer = MemberId::new("deployer");
        let vault = SharedVault::new(VaultController::new(
            deployer.clone(),
            Box::new(ManualClock::new()),
        ));

        let handle = vault.clone();
        handle.transact(|v| v.deposit(&deployer, Amount::new(500))).unwrap();
        vault.transact(|v| v.deposit(&deployer, Amount::new(250))).unwrap();

        assert_eq!(vault.transact(|v| v.balance()), Amount::new(750));
    }

    #[test]
    fn test_concurrent_deposits_all_land() {
        let deployer = MemberId::new("deployer");
        let vault = SharedVault::new(VaultController::new(
            deployer,
            Box::new(ManualClock::new()),
        ));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let vault = vault.clone();
                std::thread::spawn(move || {
                    let caller = MemberId::new(format!("depositor-{}", i));
                    vault
                        .transact(|v| v.deposit(&caller, Amount::new(100)))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(vault.transact(|v| v.balance()), Amount::new(800));
    }
}
