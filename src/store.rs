//! Shared record storage for concurrent producers and a rendering consumer.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::record::LogRecord;

/// Append-only ordered store of captured records.
///
/// Insertion order is arrival order is display order. Writers (`append`,
/// `clear`) take the lock exclusively for the duration of one vector
/// operation; readers obtain a [`snapshot`](RecordStore::snapshot) and do
/// all further work (filtering, text layout, drawing) without holding the
/// lock, so a slow render pass never serializes producers.
///
/// The store grows without bound; `clear` is the only reclamation path.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<Arc<LogRecord>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record. Exclusive lock, O(1) amortized.
    pub fn append(&self, record: LogRecord) {
        self.records.write().push(Arc::new(record));
    }

    /// Discard all records. Idempotent.
    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Point-in-time view of the store.
    ///
    /// Clones the record handles under the shared lock; appends that land
    /// after the snapshot is taken are invisible to it and show up in the
    /// next one.
    pub fn snapshot(&self) -> Vec<Arc<LogRecord>> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Coloring, Rgba};

    fn record(message: &str) -> LogRecord {
        LogRecord::new(
            "[I] ".to_string(),
            String::new(),
            message.to_string(),
            Coloring::None,
            Rgba::rgb(1.0, 1.0, 1.0),
            false,
        )
    }

    #[test]
    fn test_append_preserves_order() {
        let store = RecordStore::new();
        store.append(record("first"));
        store.append(record("second"));
        store.append(record("third"));

        let snapshot = store.snapshot();
        let messages: Vec<_> = snapshot.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn test_snapshot_is_stable_across_later_appends() {
        let store = RecordStore::new();
        store.append(record("before"));

        let snapshot = store.snapshot();
        store.append(record("after"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = RecordStore::new();
        store.append(record("gone"));

        store.clear();
        assert!(store.snapshot().is_empty());

        store.clear();
        assert!(store.is_empty());
    }
}
