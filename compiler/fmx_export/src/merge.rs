//! Key-ordered merge with overwrite-in-place.
//!
//! Both outputs of an export (the stub table and the reference catalogue)
//! are keyed by the function table key and merge the same way: the first
//! occurrence of a key fixes its position, and whatever the last occurrence
//! says wins. A vacated key keeps its position, so a later value lands
//! where the table has it.

use rustc_hash::FxHashMap;

pub(crate) struct KeyedMerge<T> {
    slots: Vec<(String, Option<T>)>,
    index: FxHashMap<String, usize>,
}

impl<T> KeyedMerge<T> {
    pub(crate) fn new() -> Self {
        KeyedMerge {
            slots: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Insert `value` under `key`; an existing key is overwritten in place.
    pub(crate) fn insert(&mut self, key: &str, value: T) {
        self.set(key, Some(value));
    }

    /// Empty the slot for `key`, reserving it if the key is new.
    pub(crate) fn vacate(&mut self, key: &str) {
        self.set(key, None);
    }

    fn set(&mut self, key: &str, value: Option<T>) {
        if let Some(&pos) = self.index.get(key) {
            self.slots[pos].1 = value;
            return;
        }
        self.index.insert(key.to_string(), self.slots.len());
        self.slots.push((key.to_string(), value));
    }

    /// Occupied slots in first-occurrence order.
    pub(crate) fn into_entries(self) -> Vec<(String, T)> {
        self.slots
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests;
