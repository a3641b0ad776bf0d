//! # Scan Target Model
//!
//! Defines the possible inputs for a scan.
//!
//! A target is one of:
//! * A single IP address (host), e.g. the public address of this machine.
//! * A CIDR block (e.g., `192.168.1.0/24`).
//! * The local LAN, i.e. the `/24` around this machine's primary IPv4 address.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::ScanError;
use crate::info;
use crate::network::interface;
use crate::network::range::NetworkSpec;

/// Represents a distinct target to be scanned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Scan this machine's own `/24`.
    Lan,
    /// Scan a single specific host.
    Host { addr: IpAddr },
    /// Scan every usable address of a network.
    Network { spec: NetworkSpec },
}

impl FromStr for Target {
    type Err = ScanError;

    /// Parses a string into a `Target`.
    ///
    /// Supported formats:
    /// * **Keyword**: "lan" (case-insensitive).
    /// * **Host**: Single IPv4/IPv6 address (e.g., "192.168.1.5").
    /// * **CIDR**: "Network/Prefix" (e.g., "192.168.1.0/24").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("lan") {
            return Ok(Target::Lan);
        }

        if let Some(target) = parse_host(s) {
            return Ok(target);
        }

        if s.contains('/') {
            let spec = s.parse::<NetworkSpec>()?;
            return Ok(Target::Network { spec });
        }

        Err(ScanError::invalid_network(s, "expected CIDR notation, an address or 'lan'"))
    }
}

impl Target {
    /// Replaces [`Target::Lan`] with the concrete local network.
    pub fn resolve(self) -> anyhow::Result<Target> {
        match self {
            Target::Lan => {
                let spec = interface::own_network()?;
                info!("Own network resolved to {spec}");
                Ok(Target::Network { spec })
            }
            other => Ok(other),
        }
    }
}

/// Parses a single IP address.
fn parse_host(s: &str) -> Option<Target> {
    s.parse::<IpAddr>().ok().map(|addr| Target::Host { addr })
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Lan => write!(f, "lan"),
            Target::Host { addr } => write!(f, "{addr}"),
            Target::Network { spec } => write!(f, "{spec}"),
        }
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
