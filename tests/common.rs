//! Test utilities & fixtures.
//! A recording outbound that can be inspected after the service has taken ownership of it.
#![allow(dead_code)] // not every test binary uses every helper

use std::path::Path;
use std::sync::{Arc, Mutex};

use playerdb::host::{Outbound, Player};
use playerdb::registry::properties::TREE_PROPERTIES;
use playerdb::registry::{MemoryProperties, RegistryStore, SledProperties, SlotValue, REGISTRY_KEY};

#[derive(Debug, Default)]
pub struct Sent {
    pub direct: Vec<(String, String)>,
    pub console: Vec<String>,
}

#[derive(Clone, Default)]
pub struct RecordingOutbound {
    pub sent: Arc<Mutex<Sent>>,
}

impl RecordingOutbound {
    pub fn direct(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().direct.clone()
    }

    pub fn console(&self) -> Vec<String> {
        self.sent.lock().unwrap().console.clone()
    }

    pub fn direct_to(&self, name: &str) -> Vec<String> {
        self.direct()
            .into_iter()
            .filter(|(to, _)| to == name)
            .map(|(_, text)| text)
            .collect()
    }
}

impl Outbound for RecordingOutbound {
    fn send_direct(&mut self, player: &Player, text: &str) {
        self.sent
            .lock()
            .unwrap()
            .direct
            .push((player.name.clone(), text.to_string()));
    }

    fn console(&mut self, text: &str) {
        self.sent.lock().unwrap().console.push(text.to_string());
    }
}

pub fn memory_store() -> RegistryStore<MemoryProperties> {
    RegistryStore::new(MemoryProperties::new())
}

/// A sled-backed store in a fresh temp dir. Keep the `TempDir` alive for the test.
pub fn sled_store() -> (tempfile::TempDir, RegistryStore<SledProperties>) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let props = SledProperties::open(tmp.path().join("registry")).expect("open sled");
    (tmp, RegistryStore::new(props))
}

/// A memory-backed store whose slot already holds `value`, as another writer left it.
pub fn memory_store_with(value: SlotValue) -> RegistryStore<MemoryProperties> {
    use playerdb::registry::DynamicProperties;
    let mut props = MemoryProperties::new();
    props.set_property(REGISTRY_KEY, value).expect("seed slot");
    RegistryStore::new(props)
}

/// Write raw bytes into the registry slot of the sled database at `path`,
/// bypassing the value encoding. The database must not be open elsewhere.
pub fn write_raw_slot(path: &Path, bytes: &[u8]) {
    std::fs::create_dir_all(path).expect("create dir");
    let db = sled::open(path).expect("open sled");
    let tree = db.open_tree(TREE_PROPERTIES).expect("open tree");
    tree.insert(REGISTRY_KEY.as_bytes(), bytes).expect("insert");
    tree.flush().expect("flush");
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
