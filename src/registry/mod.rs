//! # Registry Store
//!
//! Owns the persisted list of player names. The whole list lives in a single host
//! slot (key [`REGISTRY_KEY`]) as a JSON array of strings, and every operation reads
//! or rewrites that one value. There is no in-memory cache: each read decodes the
//! slot afresh so the store can never drift from what is persisted.
//!
//! Reads and writes come in two flavours:
//!
//! - [`RegistryStore::load_checked`] / [`RegistryStore::save_checked`] return the
//!   underlying [`RegistryError`].
//! - [`RegistryStore::load`] / [`RegistryStore::save`] degrade instead: a bad slot
//!   reads as an empty list and a failed write is logged and dropped. Command
//!   handling always goes through these, so a corrupted slot cannot break it.
//!
//! ```rust
//! use playerdb::registry::{MemoryProperties, RegistryStore};
//!
//! let mut store = RegistryStore::new(MemoryProperties::new());
//! store.add("Alice");
//! store.add("Alice");
//! assert_eq!(store.list(), vec!["Alice".to_string()]);
//! ```

pub mod errors;
pub mod properties;

use log::{debug, warn};

pub use errors::RegistryError;
pub use properties::{DynamicProperties, MemoryProperties, SledProperties, SlotValue};

/// The one slot the registry is serialized into.
pub const REGISTRY_KEY: &str = "list";

pub struct RegistryStore<P: DynamicProperties> {
    properties: P,
}

impl<P: DynamicProperties> RegistryStore<P> {
    pub fn new(properties: P) -> Self {
        Self { properties }
    }

    /// Borrow the backing slots (e.g. to inspect them in tests).
    pub fn properties(&self) -> &P {
        &self.properties
    }

    /// Decode the slot. An absent or empty-text slot is an empty registry, not an error.
    pub fn load_checked(&self) -> Result<Vec<String>, RegistryError> {
        match self.properties.get_property(REGISTRY_KEY)? {
            None => Ok(Vec::new()),
            Some(SlotValue::Text(raw)) if raw.is_empty() => Ok(Vec::new()),
            Some(SlotValue::Text(raw)) => Ok(serde_json::from_str::<Vec<String>>(&raw)?),
            Some(other) => Err(RegistryError::NotAString {
                found: other.type_name(),
            }),
        }
    }

    pub fn load(&self) -> Vec<String> {
        match self.load_checked() {
            Ok(names) => {
                if names.is_empty() {
                    debug!("Registry slot '{}' is empty or absent", REGISTRY_KEY);
                }
                names
            }
            Err(e) => {
                warn!("Failed to load registry: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save_checked(&mut self, names: &[String]) -> Result<(), RegistryError> {
        let encoded = serde_json::to_string(names)?;
        self.properties
            .set_property(REGISTRY_KEY, SlotValue::Text(encoded))
    }

    /// Persist `names`. Failures are logged and swallowed; callers must not assume
    /// the write landed.
    pub fn save(&mut self, names: &[String]) {
        if let Err(e) = self.save_checked(names) {
            warn!("Failed to save registry ({} names): {}", names.len(), e);
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.load().iter().any(|n| n == name)
    }

    pub fn add(&mut self, name: &str) {
        let mut names = self.load();
        if names.iter().any(|n| n == name) {
            return;
        }
        names.push(name.to_string());
        self.save(&names);
    }

    /// Remove every exact match. Saves even when nothing matched.
    pub fn delete(&mut self, name: &str) {
        let mut names = self.load();
        names.retain(|n| n != name);
        self.save(&names);
    }

    pub fn list(&self) -> Vec<String> {
        self.load()
    }

    pub fn clear(&mut self) {
        self.save(&[]);
    }

    /// Pretty-printed JSON of the current list, for diagnostics.
    pub fn to_json_pretty(&self) -> String {
        let names = self.list();
        serde_json::to_string_pretty(&names).unwrap_or_else(|_| "[]".to_string())
    }
}
