//! The host and network scanners.
//!
//! [`Scanner`] drives a [`Prober`] over a port list for one host, or over
//! every usable host of a network. Which prober is used (real TCP connects or
//! a test double) is decided by the caller.
//!
//! By default hosts are scanned one after another. With a concurrency above
//! one, that many hosts are in flight at once; results are still reported in
//! enumeration order. Ports of a single host are always probed sequentially.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::{StreamExt, future, stream};
use netscan_common::config::Config;
use netscan_common::network::host::HostResult;
use netscan_common::network::port::PortList;
use netscan_common::network::range::NetworkSpec;
use netscan_common::network::target::Target;
use netscan_common::report::ScanReport;
use tracing::debug;

use crate::network::tcp::{Prober, TcpConnectProber};

/// Liveness signals emitted while a scan runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// A probe against `addr:port` is about to start.
    PortProbed { addr: IpAddr, port: u16 },
    /// Every port of `addr` has been probed.
    HostFinished { addr: IpAddr, scanned: u64, total: u64 },
}

pub type ProgressCallback = Arc<dyn Fn(ScanEvent) + Send + Sync>;

pub struct Scanner {
    prober: Arc<dyn Prober>,
    concurrency: usize,
    on_progress: Option<ProgressCallback>,
}

impl Scanner {
    pub fn new(prober: Arc<dyn Prober>) -> Self {
        Self {
            prober,
            concurrency: 1,
            on_progress: None,
        }
    }

    /// A TCP connect scanner configured from the user's settings.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Arc::new(TcpConnectProber::new(cfg.timeout))).with_concurrency(cfg.concurrency)
    }

    /// Maximum number of hosts probed at once. Values below one mean one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    fn emit(&self, event: ScanEvent) {
        if let Some(callback) = &self.on_progress {
            callback(event);
        }
    }

    /// Scans any target, resolving [`Target::Lan`] first.
    pub async fn scan(&self, target: &Target, ports: &PortList) -> anyhow::Result<ScanReport> {
        match target.clone().resolve()? {
            Target::Host { addr } => Ok(self.scan_single(addr, ports).await),
            Target::Network { spec } => Ok(self.scan_network(&spec, ports).await),
            Target::Lan => anyhow::bail!("LAN target could not be resolved to a network"),
        }
    }

    /// Probes `ports` against `addr` in the given order, once per entry.
    pub async fn scan_host(&self, addr: IpAddr, ports: &[u16]) -> HostResult {
        let mut result = HostResult::new(addr);

        for &port in ports {
            self.emit(ScanEvent::PortProbed { addr, port });
            let open = self.prober.is_open(addr, port).await;
            result.record(port, open);
        }

        debug!(
            "{addr}: {} open, {} closed",
            result.open_ports.len(),
            result.closed_ports.len()
        );
        result
    }

    /// Scans a single address without enumerating a network.
    pub async fn scan_single(&self, addr: IpAddr, ports: &PortList) -> ScanReport {
        let host = self.scan_host(addr, ports.as_slice()).await;
        self.emit(ScanEvent::HostFinished {
            addr,
            scanned: 1,
            total: 1,
        });

        let hosts = if host.is_reachable() { vec![host] } else { Vec::new() };
        ScanReport::new(addr.to_string(), hosts)
    }

    /// Scans every usable host of `spec`.
    ///
    /// Only hosts with at least one open port end up in the report.
    pub async fn scan_network(&self, spec: &NetworkSpec, ports: &PortList) -> ScanReport {
        let total: u64 = u64::try_from(spec.host_count()).unwrap_or(u64::MAX);
        let counter = AtomicU64::new(0);

        debug!(
            "Scanning {spec} ({total} hosts, {} ports, {} at a time)",
            ports.len(),
            self.concurrency
        );

        let hosts: Vec<HostResult> = stream::iter(spec.hosts())
            .map(|addr| {
                let counter = &counter;
                async move {
                    let host = self.scan_host(addr, ports.as_slice()).await;
                    let scanned = counter.fetch_add(1, Ordering::Relaxed) + 1;
                    self.emit(ScanEvent::HostFinished { addr, scanned, total });
                    host
                }
            })
            .buffered(self.concurrency)
            .filter(|host| future::ready(host.is_reachable()))
            .collect()
            .await;

        ScanReport::new(spec.to_string(), hosts)
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
