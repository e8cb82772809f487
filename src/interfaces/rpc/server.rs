use super::protocol::{Request, Response};
use crate::application::service::LedgerService;
use crate::error::{LedgerError, Result};
use std::future::Future;
use std::iter;
use std::net::SocketAddr;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// Longest request line accepted, in bytes, not counting the newline.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

/// Accepts TCP connections and serves ledger requests on each of them.
///
/// Every connection runs in its own task with a clone of the service, so
/// requests from different clients are handled in parallel.
pub struct RpcServer {
    listener: TcpListener,
    service: LedgerService,
}

impl RpcServer {
    pub async fn bind(addr: SocketAddr, service: LedgerService) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, service })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves connections until `shutdown` completes.
    ///
    /// Connections already accepted keep running on their own tasks.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested, no longer accepting connections");
                    return Ok(());
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        debug!(%peer, "connection accepted");
                        let service = self.service.clone();
                        tokio::spawn(async move {
                            if let Err(e) = handle_connection(stream, service).await {
                                warn!(%peer, error = %e, "connection closed with error");
                            }
                        });
                    }
                    Err(e) => warn!(error = %e, "failed to accept connection"),
                },
            }
        }
    }
}

/// Reads request lines from `stream` and writes the matching response lines
/// back, in order, until the peer closes its side.
///
/// A line longer than [`MAX_LINE_LENGTH`] is answered with an `Error` line and
/// skipped without being buffered whole.
pub async fn handle_connection<S>(stream: S, service: LedgerService) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::with_capacity(1024);

    loop {
        buf.clear();
        let read = (&mut reader)
            .take(MAX_LINE_LENGTH as u64 + 1)
            .read_until(b'\n', &mut buf)
            .await?;
        if read == 0 {
            return Ok(());
        }

        let responses = if buf.len() > MAX_LINE_LENGTH && !buf.ends_with(b"\n") {
            discard_line(&mut reader).await?;
            let err = LedgerError::InvalidRequest(format!(
                "line exceeds {MAX_LINE_LENGTH} bytes"
            ));
            warn!(error = %err, "rejected request");
            vec![Response::error(&err)]
        } else {
            match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => dispatch(&service, line.trim()),
                Err(e) => {
                    let err = LedgerError::InvalidRequest(e.to_string());
                    warn!(error = %err, "rejected request");
                    vec![Response::error(&err)]
                }
            }
        };

        for response in responses {
            let mut encoded = response.encode()?;
            encoded.push('\n');
            writer.write_all(encoded.as_bytes()).await?;
        }
        writer.flush().await?;
    }
}

/// Consumes input up to and including the next newline, in bounded chunks.
async fn discard_line<R>(reader: &mut R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut skipped = Vec::with_capacity(1024);
    loop {
        skipped.clear();
        let read = (&mut *reader)
            .take(MAX_LINE_LENGTH as u64)
            .read_until(b'\n', &mut skipped)
            .await?;
        if read == 0 || skipped.ends_with(b"\n") {
            return Ok(());
        }
    }
}

/// Turns one request line into the response lines to send back.
pub fn dispatch(service: &LedgerService, line: &str) -> Vec<Response> {
    let request = match Request::parse(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "rejected request");
            return vec![Response::error(&e)];
        }
    };

    match request {
        Request::GetAllAccounts => service
            .get_all_accounts()
            .into_iter()
            .map(Response::from)
            .chain(iter::once(Response::StreamEnd))
            .collect(),
        Request::GetAccountBalance { account_id } => {
            vec![service.get_account_balance(&account_id).into()]
        }
        Request::WithdrawOrDeposit { account_id, amount } => {
            vec![service.apply_transaction(&account_id, amount).into()]
        }
    }
}
