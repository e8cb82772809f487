use crate::application::seed::{DEFAULT_SEED_COUNT, SeedSource};
use crate::application::service::TransactionMode;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:50051";

#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory account ledger service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed a ledger and serve it over TCP until interrupted
    Serve(ServeArgs),
    /// Seed a ledger and print it as CSV
    Seed(SeedArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SeedArgs {
    /// Number of random accounts to create at startup
    #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
    pub seed_count: usize,

    /// CSV file (id,name,balance) to load instead of random accounts
    #[arg(long, conflicts_with = "seed_count")]
    pub seed_file: Option<PathBuf>,
}

impl SeedArgs {
    pub fn source(&self) -> SeedSource {
        match &self.seed_file {
            Some(path) => SeedSource::File(path.clone()),
            None => SeedSource::Random {
                count: self.seed_count,
            },
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: SocketAddr,

    #[command(flatten)]
    pub seed: SeedArgs,

    /// Apply each transaction as a single atomic update instead of a
    /// separate read and write
    #[arg(long)]
    pub atomic_transactions: bool,
}

impl ServeArgs {
    pub fn into_config(self) -> ServeConfig {
        ServeConfig {
            listen: self.listen,
            seed: self.seed.source(),
            mode: if self.atomic_transactions {
                TransactionMode::Atomic
            } else {
                TransactionMode::ReadModifyWrite
            },
        }
    }
}

/// Everything `serve` needs, independent of how it was parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ServeConfig {
    pub listen: SocketAddr,
    pub seed: SeedSource,
    pub mode: TransactionMode,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 50051)),
            seed: SeedSource::default(),
            mode: TransactionMode::default(),
        }
    }
}
