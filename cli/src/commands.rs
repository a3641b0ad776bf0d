pub mod menu;
pub mod results;
pub mod scan;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use netscan_common::config::Config;
use netscan_common::network::port::PortList;
use netscan_common::network::target::Target;

use crate::terminal::lang::Language;

#[derive(Parser)]
#[command(name = "netscan", version)]
#[command(about = "A TCP connect scanner for networks and single hosts.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Connect timeout per probe, in milliseconds
    #[arg(long, global = true, default_value_t = 1000)]
    pub timeout_ms: u64,

    /// Number of hosts probed at the same time (1 = strictly sequential)
    #[arg(long, global = true, default_value_t = 1)]
    pub concurrency: usize,

    /// Directory for report files [default: ~/Desktop]
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Do not write report files
    #[arg(long, global = true)]
    pub no_report: bool,

    /// Also list closed ports of hosts with open ports
    #[arg(long, global = true)]
    pub show_closed: bool,

    /// Language of prompts and labels
    #[arg(long, global = true, value_enum, default_value_t = Language::En)]
    pub lang: Language,

    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output; repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a network (CIDR), a single host, or "lan"
    #[command(alias = "s")]
    Scan {
        target: Option<Target>,
        /// Comma-separated ports or ranges, e.g. 22,80,8000-8100
        #[arg(short, long)]
        ports: Option<PortList>,
    },
    /// Scan the /24 network of this machine
    #[command(alias = "l")]
    Lan {
        #[arg(short, long)]
        ports: Option<PortList>,
    },
    /// Scan the public IP address of this machine
    #[command(alias = "v")]
    Vuln {
        #[arg(short, long)]
        ports: Option<PortList>,
    },
    /// Show the public IP address of this machine
    Ip,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            timeout: Duration::from_millis(self.timeout_ms),
            concurrency: self.concurrency.max(1),
            output_dir: self.output_dir.clone(),
            no_report: self.no_report,
            show_closed: self.show_closed,
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_sequential_one_second_scan() {
        let cli = CommandLine::try_parse_from(["netscan"]).unwrap();
        let cfg = cli.config();

        assert!(cli.command.is_none());
        assert_eq!(cfg.timeout, Duration::from_secs(1));
        assert_eq!(cfg.concurrency, 1);
        assert_eq!(cli.lang, Language::En);
    }

    #[test]
    fn scan_subcommand_parses_target_and_ports() {
        let cli = CommandLine::try_parse_from([
            "netscan", "s", "192.168.1.0/24", "-p", "22,80", "--timeout-ms", "250", "--lang", "pt",
        ])
        .unwrap();
        let cfg = cli.config();

        match cli.command {
            Some(Commands::Scan { target, ports }) => {
                assert_eq!(target.unwrap().to_string(), "192.168.1.0/24");
                assert_eq!(ports.unwrap().as_slice(), &[22, 80]);
            }
            _ => panic!("expected scan command"),
        }
        assert_eq!(cfg.timeout, Duration::from_millis(250));
        assert_eq!(cli.lang, Language::Pt);
    }

    #[test]
    fn malformed_arguments_are_rejected() {
        assert!(CommandLine::try_parse_from(["netscan", "scan", "256.0.0.0/24"]).is_err());
        assert!(CommandLine::try_parse_from(["netscan", "lan", "--ports", "22,abc"]).is_err());
    }
}
