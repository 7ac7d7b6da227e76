//! # History Repository
//!
//! Persistence for the billing history collection.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Billing History Lifecycle                            │
//! │                                                                         │
//! │  finalize ──► append(bill) ──► history grows at the tail               │
//! │                                (chronological ascending)                │
//! │                                                                         │
//! │  delete(id) ──► whole-record removal, NotFound when absent             │
//! │                                                                         │
//! │  clear() ──► empty collection (still present, just [])                 │
//! │                                                                         │
//! │  Bills are otherwise IMMUTABLE: no operation edits a stored bill.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::store::{Store, HISTORY_KEY};
use billbook_core::Bill;

/// Repository for billing history.
#[derive(Debug)]
pub struct HistoryRepository<'a, S: Store> {
    store: &'a mut S,
}

impl<'a, S: Store> HistoryRepository<'a, S> {
    /// Creates a repository over the given store.
    pub fn new(store: &'a mut S) -> Self {
        HistoryRepository { store }
    }

    /// Lists all bills, chronological ascending as stored.
    ///
    /// Display layers may reverse for latest-first rendering; that is a
    /// view concern, not a storage one.
    pub fn list(&self) -> StoreResult<Vec<Bill>> {
        Ok(self.store.get_doc(HISTORY_KEY)?.unwrap_or_default())
    }

    /// Appends a finalized bill to history.
    pub fn append(&mut self, bill: &Bill) -> StoreResult<()> {
        let mut history = self.list()?;
        history.push(bill.clone());
        self.store.set_doc(HISTORY_KEY, &history)?;

        debug!(bill_id = %bill.bill_id, count = history.len(), "Appended bill to history");
        Ok(())
    }

    /// Deletes the bill with the given id.
    ///
    /// ## Returns
    /// - `Ok(())` when exactly one record was removed and persisted
    /// - `Err(StoreError::NotFound)` when no bill has that id; history
    ///   is left untouched
    pub fn delete(&mut self, bill_id: &str) -> StoreResult<()> {
        let mut history = self.list()?;
        let initial_len = history.len();

        history.retain(|bill| bill.bill_id != bill_id);
        if history.len() == initial_len {
            return Err(StoreError::not_found("Bill", bill_id));
        }

        self.store.set_doc(HISTORY_KEY, &history)?;
        info!(bill_id = %bill_id, "Deleted bill from history");
        Ok(())
    }

    /// Replaces the collection with an empty sequence.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.store.set_doc(HISTORY_KEY, &Vec::<Bill>::new())?;
        info!("Cleared all billing history");
        Ok(())
    }
}
