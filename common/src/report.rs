use chrono::{DateTime, Local};

use crate::network::host::HostResult;

/// The result of one scan run.
///
/// Each run produces a fresh report, reports are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    /// The scanned network or host as the operator sees it.
    pub target: String,
    /// Capture time of the scan.
    pub timestamp: DateTime<Local>,
    pub hosts: Vec<HostResult>,
}

impl ScanReport {
    pub fn new(target: impl Into<String>, hosts: Vec<HostResult>) -> Self {
        Self {
            target: target.into(),
            timestamp: Local::now(),
            hosts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn open_port_count(&self) -> usize {
        self.hosts.iter().map(|host| host.open_ports.len()).sum()
    }
}
