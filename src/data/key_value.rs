use {eframe::Storage, std::collections::BTreeMap};

/// String key/value storage that outlives the process
/// (`localStorage` in the browser, the eframe state file natively).
///
/// Empty values read back as absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    /// Push pending writes to the backing medium.
    fn flush(&mut self) {}
}

/// Adapter over eframe's persistence. In the browser every key lands in
/// `window.localStorage` under its own name.
pub struct EframeStore<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> EframeStore<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }
}

/// eframe has no delete, so removal writes an empty string.
impl KeyValueStore for EframeStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_string(key).filter(|v| !v.is_empty())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.storage.set_string(key, value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.storage.set_string(key, String::new());
    }

    fn flush(&mut self) {
        self.storage.flush();
    }
}

/// In-process store for tests and for running without persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).filter(|v| !v.is_empty()).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        store.remove("token");
        assert_eq!(store.get("token"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn empty_value_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set("userRole", "");
        assert_eq!(store.get("userRole"), None);
    }
}
