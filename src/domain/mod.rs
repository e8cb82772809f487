//! Account values, the transaction rule and the ledger port.

pub mod account;
pub mod ports;
pub mod transaction;
