use crate::domain::account::AccountRecord;
use crate::domain::ports::AccountLedger;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

/// A thread-safe in-memory ledger.
///
/// Uses `Arc<DashMap<String, AccountRecord>>`: the map is sharded, and each
/// operation holds a single shard lock only while it copies or replaces one
/// record. Cloning shares the same underlying map.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    accounts: Arc<DashMap<String, AccountRecord>>,
}

impl InMemoryLedger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountLedger for InMemoryLedger {
    fn list_all(&self) -> Vec<AccountRecord> {
        self.accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn get(&self, id: &str) -> Option<AccountRecord> {
        self.accounts.get(id).map(|entry| entry.value().clone())
    }

    fn upsert(&self, id: &str, record: AccountRecord) {
        self.accounts.insert(id.to_owned(), record);
    }

    fn upsert_with(
        &self,
        id: &str,
        update: &dyn Fn(Option<&AccountRecord>) -> AccountRecord,
    ) -> AccountRecord {
        // The entry keeps the shard write-locked until the new record is in place.
        match self.accounts.entry(id.to_owned()) {
            Entry::Occupied(mut slot) => {
                let next = update(Some(slot.get()));
                slot.insert(next.clone());
                next
            }
            Entry::Vacant(slot) => {
                let next = update(None);
                slot.insert(next.clone());
                next
            }
        }
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
