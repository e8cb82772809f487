#![allow(dead_code)]

use ledgerd::application::service::{LedgerService, TransactionMode};
use ledgerd::domain::account::{AccountRecord, Balance};
use ledgerd::domain::ports::AccountLedger;
use ledgerd::infrastructure::in_memory::InMemoryLedger;
use ledgerd::interfaces::rpc::protocol::{Request, Response};
use ledgerd::interfaces::rpc::server::RpcServer;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Builds a service over a ledger holding `accounts` as `(id, name, balance)`.
pub fn fixture_service(mode: TransactionMode, accounts: &[(&str, &str, f64)]) -> LedgerService {
    let ledger = InMemoryLedger::new();
    for (id, name, balance) in accounts {
        ledger.upsert(id, AccountRecord::new(*id, *name, Balance::new(*balance)));
    }
    LedgerService::with_mode(Arc::new(ledger), mode)
}

/// A server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<ledgerd::error::Result<()>>,
}

impl TestServer {
    pub async fn start(service: LedgerService) -> Self {
        let server = RpcServer::bind("127.0.0.1:0".parse().unwrap(), service)
            .await
            .expect("Failed to bind test server");
        let addr = server.local_addr().unwrap();
        let (shutdown, signal) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(async {
            let _ = signal.await;
        }));
        Self {
            addr,
            shutdown,
            handle,
        }
    }

    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap().unwrap();
    }
}

pub struct Client {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl Client {
    pub async fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.expect("Failed to connect");
        let (reader, writer) = stream.into_split();
        Self {
            lines: BufReader::new(reader).lines(),
            writer,
        }
    }

    pub async fn send_raw(&mut self, line: &str) {
        self.writer.write_all(line.as_bytes()).await.unwrap();
        self.writer.write_all(b"\n").await.unwrap();
        self.writer.flush().await.unwrap();
    }

    pub async fn next_response(&mut self) -> Response {
        let line = self
            .lines
            .next_line()
            .await
            .unwrap()
            .expect("Connection closed before a response arrived");
        Response::parse(&line).unwrap()
    }

    /// Sends a single-response request and returns its response.
    pub async fn call(&mut self, request: &Request) -> Response {
        self.send_raw(&request.encode().unwrap()).await;
        self.next_response().await
    }

    /// Sends `GetAllAccounts` and collects the stream up to `StreamEnd`.
    pub async fn all_accounts(&mut self) -> Vec<Response> {
        self.send_raw(&Request::GetAllAccounts.encode().unwrap()).await;
        let mut accounts = Vec::new();
        loop {
            match self.next_response().await {
                Response::StreamEnd => return accounts,
                response => accounts.push(response),
            }
        }
    }
}

pub fn balance_request(account_id: &str) -> Request {
    Request::GetAccountBalance {
        account_id: account_id.to_string(),
    }
}

pub fn transaction_request(account_id: &str, amount: f64) -> Request {
    Request::WithdrawOrDeposit {
        account_id: account_id.to_string(),
        amount,
    }
}
