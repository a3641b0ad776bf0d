use netscan_common::network::port::PortList;
use netscan_common::network::target::Target;
use netscan_core::report::ReportWriter;
use netscan_core::scanner::Scanner;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tempfile::TempDir;

use crate::utils::{listen_on, released_port};

const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

fn scanner() -> Scanner {
    Scanner::from_config(&netscan_common::config::Config {
        timeout: Duration::from_millis(500),
        ..Default::default()
    })
}

#[tokio::test]
async fn empty_scan_writes_header_only_file() {
    let temp = TempDir::new().unwrap();
    let closed = released_port(LOCALHOST).await;

    let report = scanner()
        .scan(&Target::Host { addr: LOCALHOST }, &PortList::new(vec![closed]))
        .await
        .unwrap();
    let path = ReportWriter::new(temp.path()).write(&report).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("scan_results_") && name.ends_with(".txt"), "{name}");
    assert_eq!(fs::read_to_string(path).unwrap(), "Scan results for 127.0.0.1\n");
}

#[tokio::test]
async fn open_port_lands_in_the_file() {
    let temp = TempDir::new().unwrap();
    let (_listener, open) = listen_on(LOCALHOST).await.expect("bind on localhost");
    let closed = released_port(LOCALHOST).await;

    // Closed ports never reach the file.
    let report = scanner()
        .scan(&Target::Host { addr: LOCALHOST }, &PortList::new(vec![open, closed]))
        .await
        .unwrap();
    let path = ReportWriter::new(temp.path().join("nested")).write(&report).unwrap();

    let body = fs::read_to_string(path).unwrap();
    assert_eq!(
        body,
        format!("Scan results for 127.0.0.1\nHost: 127.0.0.1\n  Port {open} is open\n")
    );
}

#[tokio::test]
async fn rewriting_a_report_keeps_both_files() {
    let temp = TempDir::new().unwrap();
    let (_listener, open) = listen_on(LOCALHOST).await.expect("bind on localhost");

    let report = scanner()
        .scan(&Target::Host { addr: LOCALHOST }, &PortList::new(vec![open]))
        .await
        .unwrap();
    let writer = ReportWriter::new(temp.path());

    let first_path = writer.write(&report).unwrap();
    let second_path = writer.write(&report).unwrap();

    assert_ne!(first_path, second_path);
    assert_eq!(fs::read(&first_path).unwrap(), fs::read(&second_path).unwrap());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 2);
}
