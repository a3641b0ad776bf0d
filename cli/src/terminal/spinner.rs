use std::sync::Arc;

use indicatif::ProgressStyle;
use netscan_core::scanner::{ProgressCallback, ScanEvent};
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::lang::Texts;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn scan_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} [{bar:24.green/bright_black}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICK_STRINGS)
}

/// Turns `span` into a progress bar over `total_hosts` hosts.
pub fn prepare_scan_span(span: &Span, total_hosts: u64) {
    span.pb_set_style(&scan_style());
    span.pb_set_length(total_hosts);
}

/// Forwards scanner events to the progress bar of the current span.
///
/// Port events replace the message, host events move the bar, so a long
/// subnet scan always shows which probe is in flight.
pub fn scan_progress(texts: &'static Texts) -> ProgressCallback {
    Arc::new(move |event: ScanEvent| {
        let span = Span::current();
        match event {
            ScanEvent::PortProbed { addr, port } => {
                span.pb_set_message(&format!(
                    "{} {port} {} {addr}",
                    texts.scanning_port, texts.on_host
                ));
            }
            ScanEvent::HostFinished { scanned, total, .. } => {
                span.pb_set_length(total);
                span.pb_set_position(scanned);
            }
        }
    })
}
