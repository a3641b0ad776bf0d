use crate::terminal::colors;
use crate::terminal::lang::Texts;
use colored::*;
use netscan_common::network::host::HostResult;
use std::net::IpAddr;

pub type Detail = (String, ColoredString);

pub fn addr_to_colored(addr: &IpAddr) -> ColoredString {
    match addr {
        IpAddr::V4(ipv4_addr) => ipv4_addr.to_string().color(colors::IPV4_ADDR),
        IpAddr::V6(ipv6_addr) => ipv6_addr.to_string().color(colors::IPV6_ADDR),
    }
}

/// One `Port N: open` line per open port, then closed ports if requested.
pub fn ports_to_details(host: &HostResult, texts: &Texts, show_closed: bool) -> Vec<Detail> {
    let open = host
        .open_ports
        .iter()
        .map(|port| (format!("Port {port}"), texts.open.color(colors::PORT_OPEN).bold()));

    let closed = host
        .closed_ports
        .iter()
        .filter(|_| show_closed)
        .map(|port| (format!("Port {port}"), texts.closed.color(colors::PORT_CLOSED)));

    open.chain(closed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::lang::EN;
    use std::net::Ipv4Addr;

    fn host() -> HostResult {
        let mut host = HostResult::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
        host.record(443, true);
        host.record(22, false);
        host.record(80, true);
        host
    }

    #[test]
    fn open_ports_keep_probe_order() {
        let keys: Vec<String> = ports_to_details(&host(), &EN, false)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["Port 443", "Port 80"]);
    }

    #[test]
    fn closed_ports_follow_when_requested() {
        let details = ports_to_details(&host(), &EN, true);
        assert_eq!(details.len(), 3);
        assert_eq!(details[2].0, "Port 22");
        assert!(details[2].1.to_string().contains("closed"));
    }
}
