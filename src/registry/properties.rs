//! Host key-value slots ("dynamic properties") that the registry persists into.
//!
//! A host slot is dynamically typed: it may hold text, a number or a boolean. The
//! registry only ever writes text, but it has to cope with whatever is found there.
use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::registry::errors::RegistryError;

/// Sled tree holding every slot.
pub const TREE_PROPERTIES: &str = "playerdb_properties";

/// Default ceiling for one encoded slot value, matching common host limits.
pub const DEFAULT_MAX_VALUE_BYTES: usize = 32_767;

const TAG_TEXT: u8 = b's';
const TAG_NUMBER: u8 = b'n';
const TAG_BOOLEAN: u8 = b'b';

/// A single value held in a host slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl SlotValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            SlotValue::Text(_) => "string",
            SlotValue::Number(_) => "number",
            SlotValue::Boolean(_) => "boolean",
        }
    }

    /// Tagged byte encoding: one type byte followed by the payload.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            SlotValue::Text(s) => {
                let mut out = Vec::with_capacity(s.len() + 1);
                out.push(TAG_TEXT);
                out.extend_from_slice(s.as_bytes());
                out
            }
            SlotValue::Number(n) => {
                let mut out = Vec::with_capacity(9);
                out.push(TAG_NUMBER);
                out.extend_from_slice(&n.to_be_bytes());
                out
            }
            SlotValue::Boolean(b) => vec![TAG_BOOLEAN, u8::from(*b)],
        }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, RegistryError> {
        let Some((&tag, payload)) = bytes.split_first() else {
            return Err(RegistryError::Corrupt("empty value".into()));
        };
        match tag {
            TAG_TEXT => std::str::from_utf8(payload)
                .map(|s| SlotValue::Text(s.to_string()))
                .map_err(|e| RegistryError::Corrupt(format!("text is not utf-8: {e}"))),
            TAG_NUMBER => {
                let raw: [u8; 8] = payload
                    .try_into()
                    .map_err(|_| RegistryError::Corrupt(format!("number payload of {} bytes", payload.len())))?;
                Ok(SlotValue::Number(f64::from_be_bytes(raw)))
            }
            TAG_BOOLEAN => match payload {
                [0] => Ok(SlotValue::Boolean(false)),
                [1] => Ok(SlotValue::Boolean(true)),
                _ => Err(RegistryError::Corrupt("bad boolean payload".into())),
            },
            other => Err(RegistryError::Corrupt(format!("unknown type tag 0x{other:02X}"))),
        }
    }
}

/// The host capability for reading and writing named slots.
pub trait DynamicProperties {
    fn get_property(&self, key: &str) -> Result<Option<SlotValue>, RegistryError>;
    fn set_property(&mut self, key: &str, value: SlotValue) -> Result<(), RegistryError>;
}

fn check_capacity(encoded: &[u8], limit: usize) -> Result<(), RegistryError> {
    if encoded.len() > limit {
        return Err(RegistryError::CapacityExceeded {
            size: encoded.len(),
            limit,
        });
    }
    Ok(())
}

/// Sled-backed slots, one tree per database.
pub struct SledProperties {
    _db: sled::Db,
    tree: sled::Tree,
    max_value_bytes: usize,
}

impl SledProperties {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        Self::open_with_limit(path, DEFAULT_MAX_VALUE_BYTES)
    }

    pub fn open_with_limit<P: AsRef<Path>>(path: P, max_value_bytes: usize) -> Result<Self, RegistryError> {
        let path_ref = path.as_ref();
        std::fs::create_dir_all(path_ref)?;
        let db = sled::open(path_ref)?;
        let tree = db.open_tree(TREE_PROPERTIES)?;
        debug!("Opened property store at {}", path_ref.display());
        Ok(Self {
            _db: db,
            tree,
            max_value_bytes,
        })
    }
}

impl DynamicProperties for SledProperties {
    fn get_property(&self, key: &str) -> Result<Option<SlotValue>, RegistryError> {
        let Some(bytes) = self.tree.get(key.as_bytes())? else {
            return Ok(None);
        };
        SlotValue::decode(&bytes).map(Some)
    }

    fn set_property(&mut self, key: &str, value: SlotValue) -> Result<(), RegistryError> {
        let encoded = value.encode();
        check_capacity(&encoded, self.max_value_bytes)?;
        self.tree.insert(key.as_bytes(), encoded)?;
        self.tree.flush()?;
        Ok(())
    }
}

/// In-memory slots for hosts that persist elsewhere, and for tests.
#[derive(Debug, Default)]
pub struct MemoryProperties {
    values: HashMap<String, SlotValue>,
    max_value_bytes: Option<usize>,
}

impl MemoryProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_value_bytes: usize) -> Self {
        Self {
            values: HashMap::new(),
            max_value_bytes: Some(max_value_bytes),
        }
    }
}

impl DynamicProperties for MemoryProperties {
    fn get_property(&self, key: &str) -> Result<Option<SlotValue>, RegistryError> {
        Ok(self.values.get(key).cloned())
    }

    fn set_property(&mut self, key: &str, value: SlotValue) -> Result<(), RegistryError> {
        if let Some(limit) = self.max_value_bytes {
            check_capacity(&value.encode(), limit)?;
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
