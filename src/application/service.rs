use crate::domain::account::{AccountRecord, Balance};
use crate::domain::ports::SharedLedger;
use crate::domain::transaction::TransactionPolicy;
use std::cell::Cell;
use tracing::{debug, info};

/// How [`LedgerService::apply_transaction`] combines its read and its write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionMode {
    /// Separate `get` and `upsert`. Two concurrent transactions on the same
    /// account may read the same balance, in which case the last write wins
    /// and the other delta is lost.
    #[default]
    ReadModifyWrite,
    /// A single `upsert_with` per transaction: concurrent deltas on the same
    /// account all land.
    Atomic,
}

/// Balance of one account as reported to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub account_id: String,
    pub balance: Balance,
}

/// Result of a withdrawal or deposit.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionOutcome {
    pub account_id: String,
    pub new_balance: Balance,
}

/// The operations exposed to remote callers.
///
/// `LedgerService` is cheap to clone; every clone talks to the same ledger.
/// None of its operations fail: an unknown account reads as a zero balance
/// and is opened by the first transaction against it.
#[derive(Clone)]
pub struct LedgerService {
    ledger: SharedLedger,
    mode: TransactionMode,
}

impl LedgerService {
    pub fn new(ledger: SharedLedger) -> Self {
        Self::with_mode(ledger, TransactionMode::default())
    }

    pub fn with_mode(ledger: SharedLedger, mode: TransactionMode) -> Self {
        Self { ledger, mode }
    }

    pub fn mode(&self) -> TransactionMode {
        self.mode
    }

    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    pub fn get_all_accounts(&self) -> Vec<AccountRecord> {
        let accounts = self.ledger.list_all();
        debug!(count = accounts.len(), "listed accounts");
        accounts
    }

    pub fn get_account_balance(&self, id: &str) -> AccountBalance {
        let balance = self
            .ledger
            .get(id)
            .map(|account| account.balance())
            .unwrap_or(Balance::ZERO);
        debug!(account_id = id, %balance, "balance queried");

        AccountBalance {
            account_id: id.to_owned(),
            balance,
        }
    }

    /// Applies a signed `amount` to the account and returns its new balance.
    pub fn apply_transaction(&self, id: &str, amount: f64) -> TransactionOutcome {
        let (account, created) = match self.mode {
            TransactionMode::ReadModifyWrite => {
                let existing = self.ledger.get(id);
                let account = TransactionPolicy::apply(id, existing.as_ref(), amount);
                self.ledger.upsert(id, account.clone());
                (account, existing.is_none())
            }
            TransactionMode::Atomic => {
                let created = Cell::new(false);
                let account = self.ledger.upsert_with(id, &|existing| {
                    created.set(existing.is_none());
                    TransactionPolicy::apply(id, existing, amount)
                });
                (account, created.get())
            }
        };

        info!(
            account_id = id,
            %amount,
            new_balance = %account.balance(),
            created,
            "transaction applied"
        );

        TransactionOutcome {
            account_id: id.to_owned(),
            new_balance: account.balance(),
        }
    }
}
