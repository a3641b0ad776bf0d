use std::time::Duration;

use colored::*;
use netscan_common::network::host::HostResult;
use netscan_common::report::ScanReport;
use netscan_common::success;

use crate::mprint;
use crate::terminal::format::{self, Detail};
use crate::terminal::lang::Texts;
use crate::terminal::{colors, print};

pub struct RenderOptions {
    pub show_closed: bool,
    pub quiet: u8,
}

/// Shows a finished scan on the console.
pub fn scan_ends(report: &ScanReport, total_time: Duration, texts: &Texts, opts: &RenderOptions) {
    if report.is_empty() {
        no_hosts_found(report, texts, opts);
        return;
    }

    print::header(&format!("{} {}", report.target, texts.results_header), opts.quiet);
    print_hosts(&report.hosts, texts, opts);
    print_summary(report, total_time, texts, opts);
}

fn no_hosts_found(report: &ScanReport, texts: &Texts, opts: &RenderOptions) {
    print::header(&format!("{} {}", report.target, texts.results_header), opts.quiet);
    if opts.quiet == 0 {
        print::no_results();
    }
    print::print_status(texts.no_open_ports);
}

fn print_hosts(hosts: &[HostResult], texts: &Texts, opts: &RenderOptions) {
    for (idx, host) in hosts.iter().enumerate() {
        print::tree_head(idx, &format::addr_to_colored(&host.addr).to_string());
        let details: Vec<Detail> = format::ports_to_details(host, texts, opts.show_closed);
        print::as_tree_one_level(details);

        if idx + 1 != hosts.len() {
            mprint!();
        }
    }
}

fn print_summary(report: &ScanReport, total_time: Duration, texts: &Texts, opts: &RenderOptions) {
    let hosts: ColoredString = format!("{} {}", report.hosts.len(), texts.hosts_found).bold().green();
    let ports: ColoredString = format!("{} {}", report.open_port_count(), texts.open).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("{}: {hosts} ({ports}) in {total_time}", texts.scan_complete)
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match opts.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
