//! # Profile Repository
//!
//! Load/save for the single [`BusinessProfile`] document.

use tracing::debug;

use crate::error::StoreResult;
use crate::store::{Store, BUSINESS_KEY};
use billbook_core::BusinessProfile;

/// Repository for the business profile.
///
/// One instance per installation; saving overwrites wholesale, which is
/// exactly the re-run-setup semantics.
#[derive(Debug)]
pub struct ProfileRepository<'a, S: Store> {
    store: &'a mut S,
}

impl<'a, S: Store> ProfileRepository<'a, S> {
    /// Creates a repository over the given store.
    pub fn new(store: &'a mut S) -> Self {
        ProfileRepository { store }
    }

    /// Loads the profile, if setup has been completed.
    pub fn load(&self) -> StoreResult<Option<BusinessProfile>> {
        self.store.get_doc(BUSINESS_KEY)
    }

    /// Saves the profile, replacing any previous one.
    pub fn save(&mut self, profile: &BusinessProfile) -> StoreResult<()> {
        debug!(business_name = %profile.business_name, "Saving business profile");
        self.store.set_doc(BUSINESS_KEY, profile)
    }
}
