//! Subscription persistence.
//!
//! A store is an opaque append-only document sink: [`SubscriptionStore::create`]
//! takes a finished record and returns an assigned id, or an opaque
//! [`StoreError`](crate::error::StoreError). Two sinks are provided:
//!
//! - [`InMemoryStore`] — reference implementation, used by tests and any
//!   caller that wires persistence up elsewhere
//! - [`JournalStore`] — append-only JSON-lines file with exclusive locking,
//!   for local/offline operation
//!
//! Neither sink enforces one-subscription-per-token; see
//! [`SubscriptionRecord::fingerprint`](crate::types::SubscriptionRecord::fingerprint)
//! for the dedup key a caller can use.

mod journal;
mod memory;

pub use journal::{JournalConfig, JournalStore};
pub use memory::InMemoryStore;

use crate::error::Result;
use crate::types::{SubscriptionId, SubscriptionRecord};

/// Append-only sink for subscription records.
pub trait SubscriptionStore {
    /// Persist a record, returning its assigned id.
    fn create(&self, record: &SubscriptionRecord) -> Result<SubscriptionId>;
}
