//! End-to-end session tests over real and in-memory store backends.
//!
//! These walk the full counter workflow the way an operator would:
//! setup, catalog building, billing, login, history, reports, wipe.

use rust_decimal::Decimal;
use serde_json::Value;

use billbook_core::Money;
use billbook_session::{ErrorCode, Session, SessionError, SetupForm};
use billbook_store::{JsonFileStore, MemoryStore, Store, StoreResult, HISTORY_KEY};

fn setup_form() -> SetupForm {
    SetupForm {
        business_name: "Sharma General Store".to_string(),
        address: "MG Road, Pune".to_string(),
        phone: Some("98765 43210".to_string()),
        email: Some("shop@example.com".to_string()),
        password: "letmein".to_string(),
    }
}

fn memory_session() -> Session<MemoryStore> {
    let mut session = Session::bootstrap(MemoryStore::new()).unwrap();
    session.submit_setup(setup_form()).unwrap();
    session
}

#[test]
fn test_full_counter_flow_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("billbook.json");

    // Day one: setup, stock the catalog, sell one bill.
    {
        let store = JsonFileStore::open(&path).unwrap();
        let mut session = Session::bootstrap(store).unwrap();
        session.submit_setup(setup_form()).unwrap();

        let rice = session
            .add_product("Rice", Decimal::from(10), "Kg")
            .unwrap()
            .id
            .clone();
        let oil = session
            .add_product("Oil", Decimal::from(5), "Ltr")
            .unwrap()
            .id
            .clone();

        session.add_item(&rice, Decimal::from(2)).unwrap();
        session.add_item(&oil, Decimal::from(3)).unwrap();
        assert_eq!(session.current_total(), Money::from_major_minor(35, 0));

        let outcome = session.finalize("Anita", "98765").unwrap();
        assert!(outcome.history_saved);
        assert_eq!(outcome.bill.grand_total, Money::from_major_minor(35, 0));
        assert_eq!(outcome.receipt.customer_name, "Anita");
    }

    // Day two: a fresh process reopens the same file.
    let store = JsonFileStore::open(&path).unwrap();
    let mut session = Session::bootstrap(store).unwrap();

    assert!(session.is_setup_complete());
    assert_eq!(
        session.business_profile().unwrap().business_name,
        "Sharma General Store"
    );
    assert_eq!(session.list_products().len(), 2);
    assert_eq!(session.list_products()[0].name, "Rice");

    // The gate never survives a restart.
    assert!(!session.is_unlocked());
    assert!(session.attempt_login("letmein"));

    let history = session.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].grand_total, Money::from_major_minor(35, 0));
}

#[test]
fn test_sales_report_groups_across_bills() {
    let mut session = memory_session();
    let rice = session
        .add_product("Rice", Decimal::from(10), "Kg")
        .unwrap()
        .id
        .clone();
    let oil = session
        .add_product("Oil", Decimal::from(5), "Ltr")
        .unwrap()
        .id
        .clone();

    session.add_item(&rice, Decimal::from(2)).unwrap();
    session.finalize("", "").unwrap();

    session.add_item(&rice, Decimal::from(3)).unwrap();
    session.add_item(&oil, Decimal::from(1)).unwrap();
    session.finalize("", "").unwrap();

    assert!(session.attempt_login("letmein"));
    let report = session.sales_report().unwrap();

    assert_eq!(report.rows.len(), 2);
    // Rice: 5 units for 50.00 - the top earner comes first.
    assert_eq!(report.rows[0].name, "Rice");
    assert_eq!(report.rows[0].total_quantity, Decimal::from(5));
    assert_eq!(report.rows[0].total_income, Money::from_major_minor(50, 0));
    assert_eq!(report.grand_total_revenue, Money::from_major_minor(55, 0));
}

#[test]
fn test_cleared_history_yields_empty_report() {
    let mut session = memory_session();
    let rice = session
        .add_product("Rice", Decimal::from(10), "Kg")
        .unwrap()
        .id
        .clone();
    session.add_item(&rice, Decimal::from(2)).unwrap();
    session.finalize("", "").unwrap();

    assert!(session.attempt_login("letmein"));
    session.clear_history().unwrap();

    let report = session.sales_report().unwrap();
    assert!(report.rows.is_empty());
    assert_eq!(report.grand_total_revenue, Money::zero());
}

#[test]
fn test_delete_missing_bill_maps_to_not_found_code() {
    let mut session = memory_session();
    assert!(session.attempt_login("letmein"));

    let err = session.delete_bill("no-such-bill").unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test]
fn test_delete_removes_only_the_named_bill() {
    let mut session = memory_session();
    let rice = session
        .add_product("Rice", Decimal::from(10), "Kg")
        .unwrap()
        .id
        .clone();

    session.add_item(&rice, Decimal::ONE).unwrap();
    let first = session.finalize("", "").unwrap().bill.bill_id;
    session.add_item(&rice, Decimal::ONE).unwrap();
    let second = session.finalize("", "").unwrap().bill.bill_id;

    assert!(session.attempt_login("letmein"));
    session.delete_bill(&first).unwrap();

    let history = session.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].bill_id, second);
}

#[test]
fn test_login_before_setup_always_fails() {
    let mut session = Session::bootstrap(MemoryStore::new()).unwrap();
    assert!(!session.attempt_login(""));
    assert!(!session.attempt_login("anything"));
    assert!(matches!(
        session.history().unwrap_err(),
        SessionError::AuthRequired
    ));
}

#[test]
fn test_wipe_resets_the_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("billbook.json");

    {
        let store = JsonFileStore::open(&path).unwrap();
        let mut session = Session::bootstrap(store).unwrap();
        session.submit_setup(setup_form()).unwrap();
        session
            .add_product("Rice", Decimal::from(10), "Kg")
            .unwrap();

        session.logout_and_wipe().unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    let session = Session::bootstrap(store).unwrap();
    assert!(!session.is_setup_complete());
    assert!(session.list_products().is_empty());
}

// =============================================================================
// Degraded-storage behavior
// =============================================================================

/// Store that accepts everything except writes to the history collection.
///
/// Models a medium that fills up mid-day: setup and catalog landed fine
/// earlier, but the next history append fails.
struct FullDiskStore {
    inner: MemoryStore,
    fail_history: bool,
}

impl FullDiskStore {
    fn new() -> Self {
        FullDiskStore {
            inner: MemoryStore::new(),
            fail_history: false,
        }
    }
}

impl Store for FullDiskStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> StoreResult<()> {
        if self.fail_history && key == HISTORY_KEY {
            return Err(billbook_store::StoreError::write_rejected(
                "storage quota exceeded",
            ));
        }
        self.inner.set(key, value)
    }

    fn set_many(&mut self, entries: Vec<(String, Value)>) -> StoreResult<()> {
        self.inner.set_many(entries)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.inner.remove(key)
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.inner.clear()
    }
}

#[test]
fn test_failed_history_append_still_produces_receipt() {
    let mut store = FullDiskStore::new();
    store.fail_history = true;

    let mut session = Session::bootstrap(store).unwrap();
    session.submit_setup(setup_form()).unwrap();
    let rice = session
        .add_product("Rice", Decimal::from(10), "Kg")
        .unwrap()
        .id
        .clone();
    session.add_item(&rice, Decimal::from(2)).unwrap();

    let outcome = session.finalize("", "").unwrap();

    // The sale happened: the customer gets a receipt either way.
    assert!(!outcome.history_saved);
    assert_eq!(outcome.receipt.grand_total, Money::from_major_minor(20, 0));
    assert!(session.bill_items().is_empty());

    // Nothing was appended.
    assert!(session.attempt_login("letmein"));
    assert!(session.history().unwrap().is_empty());
}
