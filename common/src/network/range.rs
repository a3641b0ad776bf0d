//! # Network Ranges
//!
//! Parses CIDR notation into a [`NetworkSpec`] and expands it into the usable
//! host addresses of that network.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::ScanError;
use crate::warn;

/// A parsed, normalized network such as `192.168.1.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkSpec {
    network: IpNetwork,
}

impl NetworkSpec {
    /// Builds a spec from an address and prefix, masking any host bits.
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self, ScanError> {
        let input = format!("{addr}/{prefix}");
        let raw = IpNetwork::new(addr, prefix).map_err(|e| ScanError::invalid_network(&input, e))?;
        let network = IpNetwork::new(raw.network(), prefix)
            .map_err(|e| ScanError::invalid_network(&input, e))?;
        Ok(Self { network })
    }

    /// A network holding exactly one address (`/32` or `/128`).
    pub fn single(addr: IpAddr) -> Self {
        Self {
            network: IpNetwork::from(addr),
        }
    }

    pub fn network_addr(&self) -> IpAddr {
        self.network.network()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    pub fn is_ipv4(&self) -> bool {
        self.network.is_ipv4()
    }

    /// Number of addresses [`NetworkSpec::hosts`] will yield.
    pub fn host_count(&self) -> u128 {
        let (first, last) = self.host_bounds();
        last - first + 1
    }

    /// Usable host addresses in ascending order.
    ///
    /// IPv4 networks exclude the network and broadcast addresses, IPv6
    /// networks exclude the subnet-router anycast address. Point-to-point
    /// (`/31`, `/127`) and single-address networks yield every address.
    pub fn hosts(&self) -> impl Iterator<Item = IpAddr> + Send + 'static {
        let (first, last) = self.host_bounds();
        let is_v4 = self.is_ipv4();
        (first..=last).map(move |n| to_addr(n, is_v4))
    }

    fn host_bounds(&self) -> (u128, u128) {
        let prefix = u32::from(self.prefix());
        let (network, last, bits) = match self.network.network() {
            IpAddr::V4(addr) => {
                let network = u32::from(addr);
                let host_mask = u32::MAX.checked_shr(prefix).unwrap_or(0);
                (u128::from(network), u128::from(network | host_mask), 32)
            }
            IpAddr::V6(addr) => {
                let network = u128::from(addr);
                let host_mask = u128::MAX.checked_shr(prefix).unwrap_or(0);
                (network, network | host_mask, 128)
            }
        };

        match bits - prefix {
            0 | 1 => (network, last),
            _ if self.is_ipv4() => (network + 1, last - 1),
            _ => (network + 1, last),
        }
    }
}

fn to_addr(n: u128, is_v4: bool) -> IpAddr {
    if is_v4 {
        // Bounded by a u32 network in `host_bounds`.
        IpAddr::V4(Ipv4Addr::from(n as u32))
    } else {
        IpAddr::V6(Ipv6Addr::from(n))
    }
}

impl FromStr for NetworkSpec {
    type Err = ScanError;

    /// Parses `address/prefix`. A bare address is a single-host network.
    ///
    /// Host bits below the prefix are cleared with a warning, so
    /// `192.168.1.77/24` scans `192.168.1.0/24`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            let addr = s
                .parse::<IpAddr>()
                .map_err(|e| ScanError::invalid_network(s, e))?;
            return Ok(Self::single(addr));
        };

        let addr = ip_str
            .trim()
            .parse::<IpAddr>()
            .map_err(|e| ScanError::invalid_network(s, format!("bad address '{ip_str}': {e}")))?;

        let prefix = prefix_str
            .trim()
            .parse::<u8>()
            .map_err(|e| ScanError::invalid_network(s, format!("bad prefix '{prefix_str}': {e}")))?;

        let spec = Self::new(addr, prefix)?;
        if spec.network_addr() != addr {
            warn!("{s} has host bits set, scanning {spec} instead");
        }
        Ok(spec)
    }
}

impl fmt::Display for NetworkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network.network(), self.network.prefix())
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
