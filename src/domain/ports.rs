use super::account::AccountRecord;
use std::sync::Arc;

/// Keyed store of account records, safe to share between request handlers.
///
/// Reads return owned copies and writes replace whole records, so no caller
/// ever holds a reference into the store. Operations on the same id are
/// linearizable; operations on different ids are not ordered.
pub trait AccountLedger: Send + Sync {
    /// Snapshot of every stored record, in no particular order.
    fn list_all(&self) -> Vec<AccountRecord>;

    fn get(&self, id: &str) -> Option<AccountRecord>;

    /// Stores `record` as the current value for `id`, replacing any previous one.
    fn upsert(&self, id: &str, record: AccountRecord);

    /// Atomically replaces the record for `id` with `update(current)` and
    /// returns the stored value. No other operation on `id` can interleave.
    fn upsert_with(
        &self,
        id: &str,
        update: &dyn Fn(Option<&AccountRecord>) -> AccountRecord,
    ) -> AccountRecord;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type SharedLedger = Arc<dyn AccountLedger>;
