//! Line-delimited JSON messages exchanged with ledger clients.
//!
//! Every request and every response is a single JSON object on its own line.
//! Amounts and balances travel as JSON numbers. JSON cannot carry infinities
//! or NaN, so a non-finite balance is written as `null` and read back as NaN.

use crate::application::service::{AccountBalance, TransactionOutcome};
use crate::domain::account::AccountRecord;
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum Request {
    GetAllAccounts,
    GetAccountBalance {
        #[serde(rename = "accountId")]
        account_id: String,
    },
    WithdrawOrDeposit {
        #[serde(rename = "accountId")]
        account_id: String,
        amount: f64,
    },
}

impl Request {
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(|e| LedgerError::InvalidRequest(e.to_string()))
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// One element of a `GetAllAccounts` stream.
    Account {
        id: String,
        name: String,
        #[serde(deserialize_with = "null_as_nan")]
        balance: f64,
    },
    /// Terminates a `GetAllAccounts` stream.
    StreamEnd,
    AccountBalance {
        #[serde(rename = "accountId")]
        account_id: String,
        #[serde(deserialize_with = "null_as_nan")]
        balance: f64,
    },
    Transaction {
        #[serde(rename = "accountId")]
        account_id: String,
        #[serde(rename = "newBalance", deserialize_with = "null_as_nan")]
        new_balance: f64,
    },
    /// The request line could not be understood.
    Error { message: String },
}

impl Response {
    pub fn parse(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn error(err: &LedgerError) -> Self {
        Self::Error {
            message: err.to_string(),
        }
    }
}

fn null_as_nan<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl From<AccountRecord> for Response {
    fn from(account: AccountRecord) -> Self {
        Self::Account {
            id: account.id().to_owned(),
            name: account.name().to_owned(),
            balance: account.balance().value(),
        }
    }
}

impl From<AccountBalance> for Response {
    fn from(response: AccountBalance) -> Self {
        Self::AccountBalance {
            account_id: response.account_id,
            balance: response.balance.value(),
        }
    }
}

impl From<TransactionOutcome> for Response {
    fn from(outcome: TransactionOutcome) -> Self {
        Self::Transaction {
            account_id: outcome.account_id,
            new_balance: outcome.new_balance.value(),
        }
    }
}
