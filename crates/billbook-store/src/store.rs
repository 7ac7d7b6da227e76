//! # Store Abstraction
//!
//! The key→JSON document contract every backend implements, plus the
//! in-memory backend used by tests.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Contract                                    │
//! │                                                                         │
//! │  get(key)        → Ok(Some(doc)) | Ok(None) | Err(read failure)        │
//! │                    Missing keys are NOT errors.                         │
//! │                                                                         │
//! │  set(key, doc)   → Ok(()) | Err(write failure)                         │
//! │                    On Err the store keeps its previous contents.        │
//! │                                                                         │
//! │  set_many(pairs) → atomic: all keys land or none do                    │
//! │                                                                         │
//! │  remove / clear  → destructive, used only by the global logout wipe    │
//! │                                                                         │
//! │  Round-trip guarantee: set(k, d) then get(k) yields a value deeply     │
//! │  equal to d (JSON is the canonical representation).                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Collection Keys
// =============================================================================

/// Key for the business profile document.
pub const BUSINESS_KEY: &str = "business_setup";

/// Key for the product catalog collection.
pub const PRODUCTS_KEY: &str = "products";

/// Key for the access-gate credential (argon2 PHC string).
pub const PASSWORD_KEY: &str = "secret_password";

/// Key for the billing history collection.
pub const HISTORY_KEY: &str = "billing_history";

// =============================================================================
// Store Trait
// =============================================================================

/// A synchronous key→JSON document store.
///
/// Backends: [`MemoryStore`] for tests, [`crate::JsonFileStore`] for the
/// real per-user data file. The session layer is generic over this trait,
/// so every operation can be exercised against memory.
pub trait Store {
    /// Reads the document under `key`. Missing keys yield `Ok(None)`.
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Writes the document under `key`.
    ///
    /// On `Err` the store keeps its previous contents; callers must keep
    /// their in-memory state intact and surface the failure.
    fn set(&mut self, key: &str, value: Value) -> StoreResult<()>;

    /// Writes several documents atomically: all keys land or none do.
    fn set_many(&mut self, entries: Vec<(String, Value)>) -> StoreResult<()>;

    /// Removes the document under `key`. Removing a missing key is a no-op.
    fn remove(&mut self, key: &str) -> StoreResult<()>;

    /// Removes every document in the namespace. Irreversible.
    fn clear(&mut self) -> StoreResult<()>;

    /// Typed read: deserializes the document under `key`.
    fn get_doc<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Typed write: serializes `doc` and stores it under `key`.
    fn set_doc<T: Serialize>(&mut self, key: &str, doc: &T) -> StoreResult<()>
    where
        Self: Sized,
    {
        self.set(key, serde_json::to_value(doc)?)
    }
}

/// Serializes a document into a storable JSON value.
///
/// Helper for assembling `set_many` batches of mixed document types.
pub fn to_document<T: Serialize>(doc: &T) -> StoreResult<Value> {
    Ok(serde_json::to_value(doc)?)
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory store backend.
///
/// ## Usage
/// Unit and integration tests, including failure-path tests: flipping
/// [`MemoryStore::reject_writes`] simulates the quota-exceeded condition
/// of a real storage medium, so "leave prior state intact" behavior is
/// testable without filesystem tricks.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
    reject_writes: bool,
}

impl MemoryStore {
    /// Creates an empty memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Simulates the medium accepting or rejecting all further writes.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Number of stored documents (diagnostics and tests).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the namespace is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.reject_writes {
            return Err(StoreError::write_rejected("storage quota exceeded"));
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> StoreResult<()> {
        self.check_writable()?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn set_many(&mut self, entries: Vec<(String, Value)>) -> StoreResult<()> {
        self.check_writable()?;
        for (key, value) in entries {
            self.entries.insert(key, value);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.check_writable()?;
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.check_writable()?;
        self.entries.clear();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
