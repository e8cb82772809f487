//! Application layer: the operations callers invoke on the ledger, and the
//! startup seeding that runs before the first request.
//!
//! `LedgerService` holds a shared handle to the ledger and is cloned into
//! every connection task, so requests are served in parallel without a
//! central dispatcher.

pub mod seed;
pub mod service;
