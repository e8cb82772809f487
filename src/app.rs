use crate::application::seed::SeedSource;
use crate::application::service::{LedgerService, TransactionMode};
use crate::config::ServeConfig;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryLedger;
use crate::interfaces::rpc::server::RpcServer;
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Creates an empty ledger, seeds it and wraps it in a service.
pub fn bootstrap(seed: &SeedSource, mode: TransactionMode) -> Result<LedgerService> {
    let ledger = InMemoryLedger::new();
    seed.seed(&ledger)?;
    Ok(LedgerService::with_mode(Arc::new(ledger), mode))
}

/// Seeds the ledger, binds the listener and serves until `shutdown` completes.
pub async fn serve<F>(config: ServeConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let service = bootstrap(&config.seed, config.mode)?;
    let server = RpcServer::bind(config.listen, service.clone()).await?;
    info!(addr = %server.local_addr()?, mode = ?config.mode, "ledger listening");

    server.run_until(shutdown).await?;

    info!(accounts = service.ledger().len(), "ledger stopped");
    Ok(())
}
