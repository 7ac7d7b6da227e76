//! # billbook-store: Persistence Layer for BillBook
//!
//! Owns every read and write of the four persisted collections.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storage Model                                      │
//! │                                                                         │
//! │  One namespace, four named JSON documents:                              │
//! │                                                                         │
//! │    business_setup   → BusinessProfile                                   │
//! │    products         → [Product, ...]          (insertion order)         │
//! │    secret_password  → "argon2 PHC string"                               │
//! │    billing_history  → [Bill, ...]             (chronological)           │
//! │                                                                         │
//! │  Session layer            Store trait              Backends             │
//! │  ─────────────            ───────────              ────────             │
//! │  repositories   ───────►  get / set /    ───────►  JsonFileStore        │
//! │  (typed)                  set_many /               (snapshot file)      │
//! │                           remove / clear           MemoryStore (tests)  │
//! │                                                                         │
//! │  `set_many` is atomic: either every key lands or none do. The setup    │
//! │  flow writes profile + credential through it so a quota failure can    │
//! │  never strand half the setup.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod file;
pub mod repository;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use repository::{
    CredentialRepository, HistoryRepository, ProductRepository, ProfileRepository,
};
pub use store::{to_document, MemoryStore, Store};
pub use store::{BUSINESS_KEY, HISTORY_KEY, PASSWORD_KEY, PRODUCTS_KEY};
