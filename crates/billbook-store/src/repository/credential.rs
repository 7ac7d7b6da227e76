//! # Credential Repository
//!
//! Load/save for the access-gate credential.
//!
//! The stored value is an argon2 PHC string, never the password itself.
//! Hashing and verification live in the session crate; this repository
//! only moves the opaque string in and out of the store.

use tracing::debug;

use crate::error::StoreResult;
use crate::store::{Store, PASSWORD_KEY};

/// Repository for the password hash.
#[derive(Debug)]
pub struct CredentialRepository<'a, S: Store> {
    store: &'a mut S,
}

impl<'a, S: Store> CredentialRepository<'a, S> {
    /// Creates a repository over the given store.
    pub fn new(store: &'a mut S) -> Self {
        CredentialRepository { store }
    }

    /// Loads the stored hash; `None` until setup has run.
    pub fn load(&self) -> StoreResult<Option<String>> {
        self.store.get_doc(PASSWORD_KEY)
    }

    /// Saves the hash, replacing any previous credential.
    pub fn save(&mut self, hash: &str) -> StoreResult<()> {
        debug!("Saving access credential");
        self.store.set_doc(PASSWORD_KEY, &hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_missing_credential_is_none() {
        let mut store = MemoryStore::new();
        assert!(CredentialRepository::new(&mut store)
            .load()
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_round_trip_is_opaque() {
        let mut store = MemoryStore::new();
        let phc = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$hash";

        CredentialRepository::new(&mut store).save(phc).unwrap();
        assert_eq!(
            CredentialRepository::new(&mut store).load().unwrap(),
            Some(phc.to_string())
        );
    }
}
