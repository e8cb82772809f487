use clap::Parser;
use ledgerd::app;
use ledgerd::application::service::TransactionMode;
use ledgerd::config::{Cli, Command};
use ledgerd::interfaces::csv::account_writer::AccountWriter;
use ledgerd::telemetry;
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            app::serve(args.into_config(), shutdown_signal())
                .await
                .into_diagnostic()?;
        }
        Command::Seed(args) => {
            let service =
                app::bootstrap(&args.source(), TransactionMode::default()).into_diagnostic()?;

            let mut accounts = service.get_all_accounts();
            accounts.sort_by(|a, b| a.id().cmp(b.id()));

            let stdout = io::stdout();
            let mut writer = AccountWriter::new(stdout.lock());
            writer.write_accounts(accounts).into_diagnostic()?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
