//! Local addressing lookups used by the own-network scan.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use pnet::datalink::{self, NetworkInterface};

use crate::error::ScanError;
use crate::network::range::NetworkSpec;
use crate::utils::interface::NetworkInterfaceExtension;

/// Any globally routed address works; no packet is ever sent to it.
const ROUTE_PROBE_ADDR: Ipv4Addr = Ipv4Addr::new(1, 1, 1, 1);
const OWN_NETWORK_PREFIX: u8 = 24;

/// Finds this machine's `/24` network.
pub fn own_network() -> anyhow::Result<NetworkSpec> {
    let ip = primary_ipv4()?;
    Ok(subnet_24(ip)?)
}

/// The `/24` that contains `ip`.
pub fn subnet_24(ip: Ipv4Addr) -> Result<NetworkSpec, ScanError> {
    NetworkSpec::new(IpAddr::V4(ip), OWN_NETWORK_PREFIX)
}

/// Returns the IPv4 address the OS would use as source for outbound traffic.
///
/// Falls back to the first usable interface when there is no default route.
pub fn primary_ipv4() -> anyhow::Result<Ipv4Addr> {
    if let Some(ip) = resolve_route_source_ip() {
        return Ok(ip);
    }

    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    match select_interface_ipv4(&interfaces) {
        Some(ip) => Ok(ip),
        None => anyhow::bail!("No interface with a usable IPv4 address found"),
    }
}

fn resolve_route_source_ip() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect((ROUTE_PROBE_ADDR, 53)).ok()?;

    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) if !ip.is_unspecified() && !ip.is_loopback() => Some(ip),
        _ => None,
    }
}

/// Picks an IPv4 address from the interface list, wired interfaces first.
fn select_interface_ipv4(interfaces: &[NetworkInterface]) -> Option<Ipv4Addr> {
    let mut candidates: Vec<&NetworkInterface> = interfaces
        .iter()
        .filter(|intf| intf.is_scan_candidate())
        .collect();

    // Approximated by name: "eth0", "enp9s0", "eno1".
    candidates.sort_by_key(|intf| if intf.name.starts_with('e') { 0 } else { 1 });

    candidates
        .into_iter()
        .find_map(|intf| intf.get_ipv4_range())
        .map(|net| net.ip())
}
