use crate::domain::account::AccountRecord;
use crate::error::{LedgerError, Result};
use std::io::Read;

/// Reads seed accounts from a CSV source with an `id,name,balance` header.
///
/// Whitespace around fields is trimmed. Rows with an empty id are rejected.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    /// Creates a new `AccountReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes accounts.
    pub fn accounts(self) -> impl Iterator<Item = Result<AccountRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from).and_then(validate))
    }
}

fn validate(account: AccountRecord) -> Result<AccountRecord> {
    if account.id().is_empty() {
        return Err(LedgerError::InvalidSeed(format!(
            "account '{}' has an empty id",
            account.name()
        )));
    }
    Ok(account)
}
