//! # Repositories
//!
//! Typed access to the four persisted collections, one repository per
//! collection, all sitting on the [`Store`](crate::Store) trait.
//!
//! ## Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layer                                     │
//! │                                                                         │
//! │  Session operation                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository::new(&mut store).save(&catalog)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::set("products", <JSON array>)                                  │
//! │                                                                         │
//! │  Collections are persisted WHOLE. There is no partial-update API:      │
//! │  appending a product rewrites the products document, deleting a bill   │
//! │  rewrites the history document. Collections are shop-sized; the        │
//! │  simplicity is worth more than a delta protocol.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod credential;
mod history;
mod product;
mod profile;

pub use credential::CredentialRepository;
pub use history::HistoryRepository;
pub use product::ProductRepository;
pub use profile::ProfileRepository;
