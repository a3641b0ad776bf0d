//! # Interactive Scan Session
//!
//! A session owns the port list for one scan target and loops:
//!
//! ```text
//! AwaitingPorts -> Scanning -> ShowingResults -> AwaitingNextAction
//!                     ^                                 |
//!                     +----- (1) add port, (2) rescan --+--> (3) back
//! ```
//!
//! Invalid choices re-prompt without changing state. End of input ends the
//! session like "back to menu" does.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use netscan_common::network::port::{PortList, parse_port};
use netscan_common::network::target::Target;
use netscan_common::report::ScanReport;
use netscan_common::success;
use netscan_core::report::ReportWriter;
use netscan_core::scanner::Scanner;
use tracing::{Instrument, error, info_span};

use crate::commands::results::{self, RenderOptions};
use crate::terminal::lang::Texts;
use crate::terminal::print;
use crate::terminal::prompt::Console;
use crate::terminal::spinner;

#[derive(Debug)]
enum SessionState {
    AwaitingPorts,
    Scanning,
    ShowingResults { report: ScanReport, elapsed: Duration },
    AwaitingNextAction,
    Finished,
}

/// Choices offered after every scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    AddPort,
    Rescan,
    Back,
}

impl NextAction {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(NextAction::AddPort),
            "2" => Some(NextAction::Rescan),
            "3" | "0" => Some(NextAction::Back),
            _ => None,
        }
    }
}

pub struct ScanSession<'a, R, W> {
    console: &'a mut Console<R, W>,
    scanner: &'a Scanner,
    texts: &'static Texts,
    target: Target,
    ports: PortList,
    report_writer: Option<ReportWriter>,
    render: RenderOptions,
}

impl<'a, R: BufRead, W: Write> ScanSession<'a, R, W> {
    pub fn new(
        console: &'a mut Console<R, W>,
        scanner: &'a Scanner,
        texts: &'static Texts,
        target: Target,
    ) -> Self {
        Self {
            console,
            scanner,
            texts,
            target,
            ports: PortList::default(),
            report_writer: None,
            render: RenderOptions {
                show_closed: false,
                quiet: 0,
            },
        }
    }

    /// Starts with these ports instead of asking for them.
    pub fn with_ports(mut self, ports: Option<PortList>) -> Self {
        self.ports = ports.unwrap_or_default();
        self
    }

    pub fn with_report_writer(mut self, report_writer: Option<ReportWriter>) -> Self {
        self.report_writer = report_writer;
        self
    }

    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut state = if self.ports.is_empty() {
            SessionState::AwaitingPorts
        } else {
            SessionState::Scanning
        };

        loop {
            state = match state {
                SessionState::AwaitingPorts => self.await_ports()?,
                SessionState::Scanning => self.scan().await,
                SessionState::ShowingResults { report, elapsed } => self.show_results(&report, elapsed),
                SessionState::AwaitingNextAction => self.next_action()?,
                SessionState::Finished => return Ok(()),
            };
        }
    }

    fn await_ports(&mut self) -> anyhow::Result<SessionState> {
        let texts = self.texts;
        let ports = self
            .console
            .ask_parsed(texts.ports_prompt, texts.invalid_ports, |s| s.parse::<PortList>())?;

        Ok(match ports {
            Some(ports) => {
                self.ports = ports;
                SessionState::Scanning
            }
            None => SessionState::Finished,
        })
    }

    async fn scan(&mut self) -> SessionState {
        print::print_status(format!(
            "{} {} {} {}",
            self.texts.scanning, self.target, self.texts.with_ports, self.ports
        ));

        let span = info_span!("scan", indicatif.pb_show = true);
        spinner::prepare_scan_span(&span, expected_hosts(&self.target));

        let start_time: Instant = Instant::now();
        let result = self
            .scanner
            .scan(&self.target, &self.ports)
            .instrument(span)
            .await;

        match result {
            Ok(report) => SessionState::ShowingResults {
                report,
                elapsed: start_time.elapsed(),
            },
            Err(e) => {
                error!("{e:#}");
                SessionState::Finished
            }
        }
    }

    /// Prints first, then persists, so a failed write never hides results.
    fn show_results(&mut self, report: &ScanReport, elapsed: Duration) -> SessionState {
        results::scan_ends(report, elapsed, self.texts, &self.render);

        if let Some(writer) = &self.report_writer {
            match writer.write(report) {
                Ok(path) => success!("{} {}", self.texts.report_saved, path.display()),
                Err(e) => error!("{}: {e}", self.texts.report_failed),
            }
        }

        SessionState::AwaitingNextAction
    }

    fn next_action(&mut self) -> anyhow::Result<SessionState> {
        let texts = self.texts;
        let Some(choice) = self.console.ask(texts.next_action)? else {
            return Ok(SessionState::Finished);
        };

        let state = match NextAction::parse(&choice) {
            Some(NextAction::AddPort) => {
                match self.console.ask_parsed(texts.port_prompt, texts.invalid_ports, parse_port)? {
                    Some(port) => {
                        self.ports.push(port);
                        self.console.say(&format!("{} {port}", texts.added_port))?;
                        SessionState::Scanning
                    }
                    None => SessionState::Finished,
                }
            }
            Some(NextAction::Rescan) => SessionState::Scanning,
            Some(NextAction::Back) => SessionState::Finished,
            None => {
                self.console.warn(texts.invalid_option)?;
                SessionState::AwaitingNextAction
            }
        };

        Ok(state)
    }
}

fn expected_hosts(target: &Target) -> u64 {
    match target {
        Target::Network { spec } => u64::try_from(spec.host_count()).unwrap_or(u64::MAX),
        Target::Host { .. } | Target::Lan => 1,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::lang::EN;
    use async_trait::async_trait;
    use netscan_core::network::tcp::Prober;
    use std::fs;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    const HOST: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));

    /// Every port is closed; probes are recorded in call order.
    #[derive(Default)]
    struct RecordingProber {
        calls: Mutex<Vec<u16>>,
    }

    #[async_trait]
    impl Prober for RecordingProber {
        async fn is_open(&self, _addr: IpAddr, port: u16) -> bool {
            self.calls.lock().unwrap().push(port);
            false
        }
    }

    async fn run_session(input: &str, ports: Option<PortList>) -> (Vec<u16>, String) {
        let prober = Arc::new(RecordingProber::default());
        let scanner = Scanner::new(prober.clone());
        let mut console = Console::new(input.as_bytes(), Vec::new());

        ScanSession::new(&mut console, &scanner, &EN, Target::Host { addr: HOST })
            .with_ports(ports)
            .run()
            .await
            .unwrap();

        let calls = prober.calls.lock().unwrap().clone();
        let output = String::from_utf8_lossy(console.output()).to_string();
        (calls, output)
    }

    #[test]
    fn next_action_parsing() {
        assert_eq!(NextAction::parse("1"), Some(NextAction::AddPort));
        assert_eq!(NextAction::parse(" 2 "), Some(NextAction::Rescan));
        assert_eq!(NextAction::parse("3"), Some(NextAction::Back));
        assert_eq!(NextAction::parse("0"), Some(NextAction::Back));
        assert_eq!(NextAction::parse("4"), None);
        assert_eq!(NextAction::parse(""), None);
    }

    #[tokio::test]
    async fn added_port_is_appended_for_the_next_scan() {
        let (calls, output) = run_session("1\n443\n3\n", Some(PortList::new(vec![22, 80]))).await;

        assert_eq!(calls, vec![22, 80, 22, 80, 443]);
        assert!(output.contains("Added port to scan: 443"));
    }

    #[tokio::test]
    async fn rescan_keeps_the_port_list() {
        let (calls, _) = run_session("2\n3\n", Some(PortList::new(vec![22, 80]))).await;
        assert_eq!(calls, vec![22, 80, 22, 80]);
    }

    #[tokio::test]
    async fn invalid_choice_reprompts_without_scanning() {
        let (calls, output) = run_session("x\n9\n3\n", Some(PortList::new(vec![22]))).await;

        assert_eq!(calls, vec![22]);
        assert_eq!(output.matches(EN.invalid_option).count(), 2);
    }

    #[tokio::test]
    async fn ports_are_asked_for_and_validated_first() {
        let (calls, output) = run_session("22, abc\n22, 80\n3\n", None).await;

        assert_eq!(calls, vec![22, 80]);
        assert!(output.contains(EN.invalid_ports));
    }

    #[tokio::test]
    async fn invalid_added_port_is_asked_again() {
        let (calls, output) = run_session("1\n99999\n8080\n3\n", Some(PortList::new(vec![22]))).await;

        assert_eq!(calls, vec![22, 22, 8080]);
        assert!(output.contains(EN.invalid_ports));
    }

    /// Port 22 answers on the first scan only.
    #[derive(Default)]
    struct FlakyProber {
        probed: AtomicBool,
    }

    #[async_trait]
    impl Prober for FlakyProber {
        async fn is_open(&self, _addr: IpAddr, port: u16) -> bool {
            port == 22 && !self.probed.swap(true, Ordering::SeqCst)
        }
    }

    #[tokio::test]
    async fn rescan_keeps_the_earlier_report_file() {
        let temp = TempDir::new().unwrap();
        let scanner = Scanner::new(Arc::new(FlakyProber::default()));
        let mut console = Console::new("2\n3\n".as_bytes(), Vec::new());

        ScanSession::new(&mut console, &scanner, &EN, Target::Host { addr: HOST })
            .with_ports(Some(PortList::new(vec![22])))
            .with_report_writer(Some(ReportWriter::new(temp.path())))
            .run()
            .await
            .unwrap();

        let mut bodies: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| fs::read_to_string(entry.unwrap().path()).unwrap())
            .collect();
        bodies.sort();

        assert_eq!(
            bodies,
            vec![
                "Scan results for 10.0.0.1\n".to_string(),
                "Scan results for 10.0.0.1\nHost: 10.0.0.1\n  Port 22 is open\n".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn end_of_input_ends_the_session() {
        let (calls, _) = run_session("", Some(PortList::new(vec![22]))).await;
        assert_eq!(calls, vec![22]);

        let (calls, _) = run_session("", None).await;
        assert!(calls.is_empty());
    }
}
