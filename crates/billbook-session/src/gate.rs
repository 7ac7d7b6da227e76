//! # Access Gate
//!
//! Password gate over the history and report views.
//!
//! ## Why
//! Daily billing needs no credential, but past sales and revenue figures
//! are sensitive on a counter machine that shop staff share. One password,
//! set during business setup, unlocks both views for the rest of the
//! session.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Access Gate States                                │
//! │                                                                         │
//! │            attempt_login(correct password)                              │
//! │   LOCKED ─────────────────────────────────────► UNLOCKED                │
//! │     ▲                                               │                   │
//! │     │          lock() / logout                      │                   │
//! │     └───────────────────────────────────────────────┘                   │
//! │                                                                         │
//! │   A FAILED attempt leaves the state unchanged: an operator who is       │
//! │   already unlocked and mistypes while re-verifying stays unlocked.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stored credential is an argon2 PHC string. The plaintext password
//! is never persisted and never held beyond the verifying call.

use tracing::{debug, warn};

use crate::error::SessionError;

/// In-memory gate state for the current session.
///
/// Always starts locked; unlock status never survives a restart.
#[derive(Debug, Default)]
pub struct AccessGate {
    logged_in: bool,
}

impl AccessGate {
    /// Creates a locked gate.
    pub fn new() -> Self {
        AccessGate { logged_in: false }
    }

    /// Whether the gated views are currently accessible.
    pub fn is_unlocked(&self) -> bool {
        self.logged_in
    }

    /// Verifies a candidate password against the stored hash.
    ///
    /// ## Returns
    /// `true` and unlocks the gate on a match. `false` on a mismatch,
    /// on a missing credential (setup never ran), or on a malformed
    /// stored hash - without touching the current state.
    pub fn attempt_login(&mut self, candidate: &str, stored_hash: Option<&str>) -> bool {
        let candidate = candidate.trim();

        let Some(hash) = stored_hash else {
            warn!("Login attempted before any credential was set");
            return false;
        };

        if verify_password(candidate, hash) {
            self.logged_in = true;
            debug!("Access gate unlocked");
            true
        } else {
            debug!("Login attempt rejected");
            false
        }
    }

    /// Relocks the gate.
    pub fn lock(&mut self) {
        self.logged_in = false;
        debug!("Access gate locked");
    }
}

/// Hashes a password for storage.
pub fn hash_password(password: &str) -> Result<String, SessionError> {
    use argon2::{
        password_hash::{rand_core::OsRng, SaltString},
        Argon2, PasswordHasher,
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SessionError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against its stored hash.
fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};

    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_password_unlocks() {
        let hash = hash_password("letmein").unwrap();
        let mut gate = AccessGate::new();

        assert!(!gate.is_unlocked());
        assert!(gate.attempt_login("letmein", Some(&hash)));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let hash = hash_password("letmein").unwrap();
        let mut gate = AccessGate::new();

        assert!(!gate.attempt_login("wrong", Some(&hash)));
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_candidate_is_trimmed_before_verification() {
        let hash = hash_password("letmein").unwrap();
        let mut gate = AccessGate::new();

        assert!(gate.attempt_login("  letmein  ", Some(&hash)));
    }

    #[test]
    fn test_missing_credential_always_fails() {
        let mut gate = AccessGate::new();
        assert!(!gate.attempt_login("anything", None));
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_failed_attempt_keeps_existing_grant() {
        let hash = hash_password("letmein").unwrap();
        let mut gate = AccessGate::new();
        gate.attempt_login("letmein", Some(&hash));

        assert!(!gate.attempt_login("typo", Some(&hash)));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_malformed_stored_hash_is_rejected_not_panicked() {
        let mut gate = AccessGate::new();
        assert!(!gate.attempt_login("letmein", Some("not-a-phc-string")));
    }

    #[test]
    fn test_lock_relocks() {
        let hash = hash_password("letmein").unwrap();
        let mut gate = AccessGate::new();
        gate.attempt_login("letmein", Some(&hash));

        gate.lock();
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash_password("letmein").unwrap();
        let b = hash_password("letmein").unwrap();
        assert_ne!(a, b);
    }
}
