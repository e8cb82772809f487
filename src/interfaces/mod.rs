//! Adapters between the ledger and the outside world: CSV fixtures and the
//! line-delimited JSON transport.

pub mod csv;
pub mod rpc;
