//! # billbook-session: Application Session for BillBook
//!
//! The orchestration layer: owns the session state and exposes every
//! operation the UI layer invokes, wiring `billbook-core` logic to
//! `billbook-store` persistence.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        BillBook Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI layer (external)                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ billbook-session (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  session  │  │   gate    │  │  receipt  │  │   error   │  │   │
//! │  │   │  Session  │  │  argon2   │  │  payload  │  │ ErrorCode │  │   │
//! │  │   │  <Store>  │  │  verify   │  │  builder  │  │  status   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────┬───────────────────────────┬─────────────────┘   │
//! │                    │                           │                      │
//! │         ┌──────────▼──────────┐     ┌──────────▼──────────┐          │
//! │         │    billbook-core    │     │   billbook-store    │          │
//! │         │    (pure logic)     │     │   (persistence)     │          │
//! │         └─────────────────────┘     └─────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//! ```rust
//! use billbook_session::{Session, SetupForm};
//! use billbook_store::MemoryStore;
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), billbook_session::SessionError> {
//! let mut session = Session::bootstrap(MemoryStore::new())?;
//! session.submit_setup(SetupForm {
//!     business_name: "Sharma General Store".into(),
//!     address: "MG Road, Pune".into(),
//!     phone: None,
//!     email: None,
//!     password: "letmein".into(),
//! })?;
//!
//! let rice = session.add_product("Rice", Decimal::from(82), "Kg")?.id.clone();
//! session.add_item(&rice, Decimal::from(2))?;
//! let outcome = session.finalize("", "")?;
//! assert!(outcome.history_saved);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gate;
pub mod paths;
pub mod receipt;
pub mod session;

pub use error::{ErrorCode, ErrorStatus, SessionError, SessionResult};
pub use gate::AccessGate;
pub use paths::default_store_path;
pub use receipt::{Receipt, ReceiptLine};
pub use session::{FinalizedBill, Session, SetupForm};

/// Initializes tracing for the application process.
///
/// Respects `RUST_LOG` when set; otherwise defaults to info globally
/// with debug for the billbook crates.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,billbook=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
