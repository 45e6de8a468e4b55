//! In-memory subscription sink.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::types::{Fingerprint, PushToken, SubscriptionId, SubscriptionRecord};

use super::SubscriptionStore;

/// Append-only in-memory store.
///
/// Reference implementation of [`SubscriptionStore`]; also the test double
/// for callers whose real sink lives behind a network.
pub struct InMemoryStore {
    records: RwLock<Vec<(SubscriptionId, SubscriptionRecord)>>,
    next_id: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Fetch a record by id. Ids are assigned sequentially from 1.
    pub fn get(&self, id: SubscriptionId) -> Option<SubscriptionRecord> {
        self.records
            .read()
            .iter()
            .find(|(stored, _)| *stored == id)
            .map(|(_, record)| record.clone())
    }

    /// Whether any stored record carries this token's fingerprint.
    ///
    /// Dedup is a caller policy, not enforced by `create`.
    pub fn contains_token(&self, token: &PushToken) -> bool {
        let fingerprint = Fingerprint::of_token(token);
        self.records
            .read()
            .iter()
            .any(|(_, record)| record.fingerprint() == fingerprint)
    }
}

impl SubscriptionStore for InMemoryStore {
    fn create(&self, record: &SubscriptionRecord) -> Result<SubscriptionId> {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.records.write().push((id, record.clone()));
        tracing::debug!(id = id.0, "stored subscription");
        Ok(id)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{build_record, validate};
    use crate::types::Timestamp;

    fn make_record(token: &str) -> SubscriptionRecord {
        let token = PushToken::new(token);
        let filters = validate("Google", "new grad", Some(&token)).unwrap();
        build_record(token, filters, Timestamp::now())
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let a = store.create(&make_record("tok-a")).unwrap();
        let b = store.create(&make_record("tok-b")).unwrap();
        assert_eq!(a, SubscriptionId(1));
        assert_eq!(b, SubscriptionId(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_by_id() {
        let store = InMemoryStore::new();
        let record = make_record("tok-a");
        let id = store.create(&record).unwrap();
        assert_eq!(store.get(id), Some(record));
        assert_eq!(store.get(SubscriptionId(99)), None);
    }

    #[test]
    fn test_duplicate_tokens_accepted() {
        // Append-only: repeated subscribes produce independent writes.
        let store = InMemoryStore::new();
        store.create(&make_record("tok-a")).unwrap();
        store.create(&make_record("tok-a")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_contains_token() {
        let store = InMemoryStore::new();
        store.create(&make_record("tok-a")).unwrap();
        assert!(store.contains_token(&PushToken::new("tok-a")));
        assert!(!store.contains_token(&PushToken::new("tok-b")));
    }
}
