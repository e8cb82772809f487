//! One-time population of a fresh ledger before it serves requests.
//!
//! Seeding writes through [`AccountLedger::upsert`] like any other caller and
//! plays no part in the ledger's steady-state behavior.

use crate::domain::account::{AccountRecord, Balance};
use crate::domain::ports::AccountLedger;
use crate::error::Result;
use crate::interfaces::csv::account_reader::AccountReader;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_SEED_COUNT: usize = 10;

/// Upper bound (exclusive) of a random starting balance.
const MAX_SEED_BALANCE: f64 = 1000.0;

/// Where the startup accounts come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// `count` synthetic accounts `ACC1..ACC{count}` with random balances.
    Random { count: usize },
    /// A CSV file with an `id,name,balance` header.
    File(PathBuf),
}

impl Default for SeedSource {
    fn default() -> Self {
        Self::Random {
            count: DEFAULT_SEED_COUNT,
        }
    }
}

impl SeedSource {
    /// Loads the accounts into `ledger` and returns how many were written.
    pub fn seed(&self, ledger: &dyn AccountLedger) -> Result<usize> {
        let written = match self {
            Self::Random { count } => RandomSeeder::from_entropy(*count).seed(ledger),
            Self::File(path) => {
                let reader = AccountReader::new(File::open(path)?);
                let accounts = reader.accounts().collect::<Result<Vec<_>>>()?;
                seed_from_records(ledger, accounts)
            }
        };
        info!(source = ?self, accounts = written, "ledger seeded");
        Ok(written)
    }
}

/// Generates synthetic accounts with balances uniformly drawn from `[0, 1000)`.
pub struct RandomSeeder<R: Rng> {
    rng: R,
    count: usize,
}

impl RandomSeeder<StdRng> {
    pub fn from_entropy(count: usize) -> Self {
        Self::new(StdRng::from_entropy(), count)
    }
}

impl<R: Rng> RandomSeeder<R> {
    pub fn new(rng: R, count: usize) -> Self {
        Self { rng, count }
    }

    pub fn records(&mut self) -> Vec<AccountRecord> {
        (1..=self.count)
            .map(|i| {
                let balance = self.rng.gen_range(0.0..MAX_SEED_BALANCE);
                AccountRecord::new(format!("ACC{i}"), format!("Account {i}"), Balance::new(balance))
            })
            .collect()
    }

    pub fn seed(mut self, ledger: &dyn AccountLedger) -> usize {
        let records = self.records();
        seed_from_records(ledger, records)
    }
}

/// Writes every record into the ledger; a repeated id keeps the last one.
pub fn seed_from_records<I>(ledger: &dyn AccountLedger, records: I) -> usize
where
    I: IntoIterator<Item = AccountRecord>,
{
    let mut written = 0;
    for record in records {
        let id = record.id().to_owned();
        ledger.upsert(&id, record);
        written += 1;
    }
    written
}
