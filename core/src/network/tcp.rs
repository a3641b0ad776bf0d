use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Decides whether a single (host, port) pair accepts connections.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn is_open(&self, addr: IpAddr, port: u16) -> bool;
}

/// Connect-scan prober: one full TCP handshake per probe, no retries.
#[derive(Debug, Clone, Copy)]
pub struct TcpConnectProber {
    probe_timeout: Duration,
}

impl TcpConnectProber {
    pub fn new(probe_timeout: Duration) -> Self {
        Self { probe_timeout }
    }
}

#[async_trait]
impl Prober for TcpConnectProber {
    async fn is_open(&self, addr: IpAddr, port: u16) -> bool {
        is_port_open(addr, port, self.probe_timeout).await
    }
}

/// Returns `true` iff a TCP connection to `addr:port` completes within `probe_timeout`.
///
/// Refused, unreachable and timed out attempts all count as closed. The
/// socket is closed on return in every case.
pub async fn is_port_open(addr: IpAddr, port: u16, probe_timeout: Duration) -> bool {
    let socket_addr: SocketAddr = SocketAddr::new(addr, port);

    match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(_)) | Err(_) => false,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
