use netscan_common::network::port::PortList;
use netscan_common::network::range::NetworkSpec;
use netscan_common::network::target::Target;
use netscan_core::scanner::Scanner;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::utils::{listen_on, released_port};

const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

fn loopback_scanner() -> Scanner {
    Scanner::from_config(&netscan_common::config::Config {
        timeout: Duration::from_millis(500),
        ..Default::default()
    })
}

/// A single host with one listening and one released port is reported with
/// exactly that split.
#[tokio::test]
async fn single_host_partitions_ports() {
    let (_listener, open) = listen_on(LOCALHOST).await.expect("bind on localhost");
    let closed = released_port(LOCALHOST).await;

    let ports = PortList::new(vec![closed, open]);
    let report = loopback_scanner()
        .scan(&Target::Host { addr: LOCALHOST }, &ports)
        .await
        .unwrap();

    assert_eq!(report.hosts.len(), 1);
    let host = &report.hosts[0];
    assert_eq!(host.addr, LOCALHOST);
    assert_eq!(host.open_ports, vec![open]);
    assert_eq!(host.closed_ports, vec![closed]);
}

/// Only the loopback address with a listener shows up when scanning a /30.
#[tokio::test]
#[cfg(target_os = "linux")]
async fn network_scan_reports_only_reachable_hosts() {
    let listening: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2));
    let (_listener, open) = listen_on(listening).await.expect("bind on 127.0.0.2");
    let closed = released_port(listening).await;

    let spec: NetworkSpec = "127.0.0.0/30".parse().unwrap();
    let ports = PortList::new(vec![open, closed]);
    let report = loopback_scanner()
        .scan(&Target::Network { spec }, &ports)
        .await
        .unwrap();

    assert_eq!(report.target, "127.0.0.0/30");
    assert_eq!(report.hosts.len(), 1, "hosts: {:?}", report.hosts);
    assert_eq!(report.hosts[0].addr, listening);
    assert_eq!(report.hosts[0].open_ports, vec![open]);
    assert!(report.hosts.iter().all(|host| !host.open_ports.is_empty()));
}

#[tokio::test]
#[cfg(target_os = "linux")]
async fn concurrent_network_scan_keeps_host_order() {
    let first: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
    let second: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2));
    let (_a, port_a) = listen_on(first).await.expect("bind on 127.0.0.1");
    let (_b, port_b) = listen_on(second).await.expect("bind on 127.0.0.2");

    let spec: NetworkSpec = "127.0.0.0/30".parse().unwrap();
    let ports = PortList::new(vec![port_a, port_b]);
    let report = loopback_scanner()
        .with_concurrency(4)
        .scan(&Target::Network { spec }, &ports)
        .await
        .unwrap();

    let addrs: Vec<IpAddr> = report.hosts.iter().map(|host| host.addr).collect();
    assert_eq!(addrs, vec![first, second]);
}

#[tokio::test]
async fn nothing_listening_gives_an_empty_report() {
    let closed = released_port(LOCALHOST).await;

    let report = loopback_scanner()
        .scan(&Target::Host { addr: LOCALHOST }, &PortList::new(vec![closed]))
        .await
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.open_port_count(), 0);
}
