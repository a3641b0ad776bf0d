use std::net::IpAddr;

/// Outcome of probing one host against a port list.
///
/// Both buckets keep the order in which the ports were probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResult {
    pub addr: IpAddr,
    pub open_ports: Vec<u16>,
    pub closed_ports: Vec<u16>,
}

impl HostResult {
    pub fn new(addr: IpAddr) -> Self {
        Self {
            addr,
            open_ports: Vec::new(),
            closed_ports: Vec::new(),
        }
    }

    pub fn record(&mut self, port: u16, open: bool) {
        if open {
            self.open_ports.push(port);
        } else {
            self.closed_ports.push(port);
        }
    }

    /// A host is reachable once any port accepted a connection.
    pub fn is_reachable(&self) -> bool {
        !self.open_ports.is_empty()
    }
}
