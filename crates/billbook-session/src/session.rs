//! # Application Session
//!
//! One [`Session`] owns every piece of mutable application state: the
//! store handle, the cached profile and catalog, the bill draft, and the
//! access gate. Nothing billing-related lives outside it.
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session<S: Store>                                │
//! │                                                                         │
//! │   store: S                 the only persistence handle                  │
//! │   profile: Option<..>      cache of business_setup                      │
//! │   catalog: Vec<Product>    cache of products, insertion order           │
//! │   draft: BillDraft         transient, never persisted                   │
//! │   gate: AccessGate         locked on every construction                 │
//! │                                                                         │
//! │   Cache discipline: caches change ONLY after the matching store write  │
//! │   succeeds. A rejected write leaves memory and disk at the prior       │
//! │   state, so a retry sees no phantom data.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## User Workflow
//! ```text
//! bootstrap ──► submit_setup (once) ──► add_product* ──► add_item* ──►
//!   finalize ──► receipt ──► attempt_login ──► history / sales_report
//! ```

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use billbook_core::{
    compute_report, validation, Bill, BillDraft, BillLineItem, BusinessProfile, Money, Product,
    SalesReport, ValidationError, DEFAULT_UNIT,
};
use billbook_store::{
    to_document, CredentialRepository, HistoryRepository, ProductRepository, ProfileRepository,
    Store, BUSINESS_KEY, PASSWORD_KEY,
};

use crate::error::{SessionError, SessionResult};
use crate::gate::{hash_password, AccessGate};
use crate::receipt::Receipt;

// =============================================================================
// Input / Output Types
// =============================================================================

/// Everything the setup form collects.
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub business_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

/// Outcome of finalizing a bill.
///
/// `history_saved` is `false` when the bill was produced but the history
/// append failed; the sale still happened and the receipt must still
/// print, so a persistence failure is reported rather than raised.
#[derive(Debug, Clone)]
pub struct FinalizedBill {
    pub bill: Bill,
    pub receipt: Receipt,
    pub history_saved: bool,
}

// =============================================================================
// Session
// =============================================================================

/// The running application session.
#[derive(Debug)]
pub struct Session<S: Store> {
    store: S,
    profile: Option<BusinessProfile>,
    catalog: Vec<Product>,
    draft: BillDraft,
    gate: AccessGate,
}

impl<S: Store> Session<S> {
    /// Opens a session over the given store, loading the persisted
    /// profile and catalog into the in-memory caches.
    pub fn bootstrap(mut store: S) -> SessionResult<Self> {
        let profile = ProfileRepository::new(&mut store).load()?;
        let catalog = ProductRepository::new(&mut store).list()?;

        info!(
            setup_complete = profile.is_some(),
            products = catalog.len(),
            "Session bootstrapped"
        );

        Ok(Session {
            store,
            profile,
            catalog,
            draft: BillDraft::new(),
            gate: AccessGate::new(),
        })
    }

    // =========================================================================
    // Business Setup
    // =========================================================================

    /// Whether setup has been completed on this installation.
    pub fn is_setup_complete(&self) -> bool {
        self.profile.is_some()
    }

    /// The business profile, once setup has run.
    pub fn business_profile(&self) -> Option<&BusinessProfile> {
        self.profile.as_ref()
    }

    /// Runs the one-time business setup.
    ///
    /// Profile and credential land in a single atomic write: either both
    /// persist or neither does. Re-running setup overwrites both.
    pub fn submit_setup(&mut self, form: SetupForm) -> SessionResult<()> {
        let business_name = validation::validate_required("Business Name", &form.business_name)?;
        let address = validation::validate_required("Address", &form.address)?;
        let password = validation::validate_required("Password", &form.password)?;

        let profile = BusinessProfile {
            business_name,
            address,
            phone: validation::normalize_optional(form.phone.as_deref()),
            email: validation::normalize_optional(form.email.as_deref()),
            created_at: chrono::Utc::now(),
        };
        let hash = hash_password(&password)?;

        self.store.set_many(vec![
            (BUSINESS_KEY.to_string(), to_document(&profile)?),
            (PASSWORD_KEY.to_string(), to_document(&hash)?),
        ])?;

        info!(business_name = %profile.business_name, "Business setup completed");
        self.profile = Some(profile);
        Ok(())
    }

    // =========================================================================
    // Product Catalog
    // =========================================================================

    /// The catalog in insertion order.
    pub fn list_products(&self) -> &[Product] {
        &self.catalog
    }

    /// Adds a product to the catalog and persists the whole collection.
    ///
    /// A blank unit defaults to [`DEFAULT_UNIT`]. Duplicate names are
    /// allowed; the id is what distinguishes entries.
    pub fn add_product(
        &mut self,
        name: &str,
        price: Decimal,
        unit: &str,
    ) -> SessionResult<&Product> {
        let name = validation::validate_required("Product Name", name)?;
        let price = Money::new(price);
        validation::validate_price(price)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            unit: validation::normalize_or_default(unit, DEFAULT_UNIT),
            created_at: chrono::Utc::now(),
        };

        self.catalog.push(product);
        if let Err(e) = ProductRepository::new(&mut self.store).save(&self.catalog) {
            // Roll the cache back so memory matches what is on disk.
            self.catalog.pop();
            return Err(e.into());
        }

        debug!(count = self.catalog.len(), "Product added to catalog");
        // Just pushed and not rolled back, so last() is present.
        Ok(self.catalog.last().expect("product was just pushed"))
    }

    // =========================================================================
    // Bill Builder
    // =========================================================================

    /// Lines on the current draft, insertion order.
    pub fn bill_items(&self) -> &[BillLineItem] {
        self.draft.items()
    }

    /// Running total of the current draft.
    pub fn current_total(&self) -> Money {
        self.draft.current_total()
    }

    /// Adds a catalog product to the draft.
    pub fn add_item(&mut self, product_id: &str, quantity: Decimal) -> SessionResult<BillLineItem> {
        let product = self
            .catalog
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| ValidationError::UnknownProduct {
                id: product_id.to_string(),
            })?
            .clone();

        let line = self.draft.add_item(&product, quantity)?.clone();
        debug!(product = %product.name, %quantity, "Line added to draft");
        Ok(line)
    }

    /// Removes a draft line; `true` when one was removed.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        self.draft.remove_item(item_id)
    }

    /// Discards the current draft.
    pub fn reset_bill(&mut self) {
        self.draft.clear();
        debug!("Draft reset");
    }

    /// Finalizes the draft into a bill, appends it to history, and builds
    /// the receipt payload.
    ///
    /// ## Behavior
    /// - Fails with [`SessionError::SetupRequired`] before setup
    /// - Empty draft fails validation; the draft is kept
    /// - A failed history append does NOT fail the sale: the receipt is
    ///   still returned with `history_saved = false`
    /// - The draft is cleared once a bill is produced
    pub fn finalize(
        &mut self,
        customer_name: &str,
        customer_phone: &str,
    ) -> SessionResult<FinalizedBill> {
        let profile = self.profile.as_ref().ok_or(SessionError::SetupRequired)?;

        let bill = self.draft.finalize(customer_name, customer_phone)?;
        let receipt = Receipt::from_bill(profile, &bill);

        let history_saved = match HistoryRepository::new(&mut self.store).append(&bill) {
            Ok(()) => true,
            Err(e) => {
                warn!(bill_id = %bill.bill_id, error = %e, "Bill could not be saved to history");
                false
            }
        };

        self.draft.clear();
        info!(
            bill_id = %bill.bill_id,
            total = %bill.grand_total,
            history_saved,
            "Bill finalized"
        );

        Ok(FinalizedBill {
            bill,
            receipt,
            history_saved,
        })
    }

    // =========================================================================
    // Access Gate
    // =========================================================================

    /// Whether history and report views are currently accessible.
    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    /// Attempts to unlock the gated views.
    ///
    /// A store failure while reading the credential is treated as a
    /// failed login, never as a panic at the counter.
    pub fn attempt_login(&mut self, candidate: &str) -> bool {
        let stored = match CredentialRepository::new(&mut self.store).load() {
            Ok(hash) => hash,
            Err(e) => {
                warn!(error = %e, "Credential could not be read");
                return false;
            }
        };

        self.gate.attempt_login(candidate, stored.as_deref())
    }

    /// Relocks the gated views without touching any data.
    pub fn lock(&mut self) {
        self.gate.lock();
    }

    // =========================================================================
    // History and Reports (gated)
    // =========================================================================

    /// All bills, chronological ascending.
    pub fn history(&mut self) -> SessionResult<Vec<Bill>> {
        self.require_unlocked()?;
        Ok(HistoryRepository::new(&mut self.store).list()?)
    }

    /// Per-product sales aggregation over the full history.
    pub fn sales_report(&mut self) -> SessionResult<SalesReport> {
        self.require_unlocked()?;
        let history = HistoryRepository::new(&mut self.store).list()?;
        Ok(compute_report(&history))
    }

    /// Deletes one bill from history.
    ///
    /// Destructive-intent confirmation is the UI's concern; this method
    /// deletes unconditionally.
    pub fn delete_bill(&mut self, bill_id: &str) -> SessionResult<()> {
        self.require_unlocked()?;
        HistoryRepository::new(&mut self.store).delete(bill_id)?;
        Ok(())
    }

    /// Deletes all billing history.
    pub fn clear_history(&mut self) -> SessionResult<()> {
        self.require_unlocked()?;
        HistoryRepository::new(&mut self.store).clear()?;
        Ok(())
    }

    // =========================================================================
    // Factory Reset
    // =========================================================================

    /// Wipes every persisted collection and resets the session to its
    /// first-run state: no profile, empty catalog, empty draft, locked
    /// gate. The next operation sees a fresh installation.
    pub fn logout_and_wipe(&mut self) -> SessionResult<()> {
        self.store.clear()?;

        self.profile = None;
        self.catalog.clear();
        self.draft.clear();
        self.gate.lock();

        info!("Session wiped to first-run state");
        Ok(())
    }

    fn require_unlocked(&self) -> SessionResult<()> {
        if self.gate.is_unlocked() {
            Ok(())
        } else {
            Err(SessionError::AuthRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billbook_store::MemoryStore;

    fn setup_form(password: &str) -> SetupForm {
        SetupForm {
            business_name: "Sharma General Store".to_string(),
            address: "MG Road, Pune".to_string(),
            phone: Some("98765 43210".to_string()),
            email: None,
            password: password.to_string(),
        }
    }

    fn session_with_setup() -> Session<MemoryStore> {
        let mut session = Session::bootstrap(MemoryStore::new()).unwrap();
        session.submit_setup(setup_form("letmein")).unwrap();
        session
    }

    #[test]
    fn test_bootstrap_on_empty_store_is_first_run() {
        let session = Session::bootstrap(MemoryStore::new()).unwrap();
        assert!(!session.is_setup_complete());
        assert!(session.list_products().is_empty());
        assert!(!session.is_unlocked());
    }

    #[test]
    fn test_setup_rejects_blank_required_fields() {
        let mut session = Session::bootstrap(MemoryStore::new()).unwrap();
        let mut form = setup_form("letmein");
        form.business_name = "   ".to_string();

        let err = session.submit_setup(form).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::Required { .. })
        ));
        assert!(!session.is_setup_complete());
    }

    #[test]
    fn test_setup_failure_writes_nothing() {
        let mut store = MemoryStore::new();
        store.reject_writes(true);
        let mut session = Session::bootstrap(store).unwrap();

        let err = session.submit_setup(setup_form("letmein")).unwrap_err();
        assert!(matches!(err, SessionError::Store(_)));
        assert!(!session.is_setup_complete());
        // Neither the profile nor the credential may exist after failure.
        assert!(!session.attempt_login("letmein"));
    }

    #[test]
    fn test_add_product_rolls_back_cache_on_rejected_write() {
        let mut session = session_with_setup();
        session
            .add_product("Rice", Decimal::from(82), "Kg")
            .unwrap();

        // Simulate quota exhaustion mid-session.
        // MemoryStore is consumed by the session, so route through a new
        // session whose store rejects writes from the start.
        let mut store = MemoryStore::new();
        store.reject_writes(true);
        let mut rejected = Session::bootstrap(store).unwrap();

        let err = rejected
            .add_product("Oil", Decimal::from(5), "")
            .unwrap_err();
        assert!(matches!(err, SessionError::Store(_)));
        assert!(rejected.list_products().is_empty());

        // The healthy session is unaffected.
        assert_eq!(session.list_products().len(), 1);
    }

    #[test]
    fn test_add_item_unknown_product_fails() {
        let mut session = session_with_setup();
        let err = session.add_item("no-such-id", Decimal::ONE).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::UnknownProduct { .. })
        ));
    }

    #[test]
    fn test_finalize_before_setup_fails() {
        let mut session = Session::bootstrap(MemoryStore::new()).unwrap();
        let err = session.finalize("", "").unwrap_err();
        assert!(matches!(err, SessionError::SetupRequired));
    }

    #[test]
    fn test_finalize_clears_draft_and_saves_history() {
        let mut session = session_with_setup();
        let rice = session
            .add_product("Rice", Decimal::from(10), "Kg")
            .unwrap()
            .id
            .clone();
        session.add_item(&rice, Decimal::from(2)).unwrap();

        let outcome = session.finalize("", "").unwrap();
        assert!(outcome.history_saved);
        assert_eq!(outcome.bill.grand_total, Money::from_major_minor(20, 0));
        assert_eq!(outcome.receipt.business_name, "Sharma General Store");
        assert!(session.bill_items().is_empty());
    }

    #[test]
    fn test_gated_views_require_login() {
        let mut session = session_with_setup();

        assert!(matches!(
            session.history().unwrap_err(),
            SessionError::AuthRequired
        ));
        assert!(matches!(
            session.sales_report().unwrap_err(),
            SessionError::AuthRequired
        ));
        assert!(matches!(
            session.delete_bill("any").unwrap_err(),
            SessionError::AuthRequired
        ));
        assert!(matches!(
            session.clear_history().unwrap_err(),
            SessionError::AuthRequired
        ));

        assert!(session.attempt_login("letmein"));
        assert!(session.history().unwrap().is_empty());
    }

    #[test]
    fn test_wipe_returns_to_first_run() {
        let mut session = session_with_setup();
        session
            .add_product("Rice", Decimal::from(10), "Kg")
            .unwrap();
        session.attempt_login("letmein");

        session.logout_and_wipe().unwrap();

        assert!(!session.is_setup_complete());
        assert!(session.list_products().is_empty());
        assert!(!session.is_unlocked());
        assert!(!session.attempt_login("letmein"));
    }
}
