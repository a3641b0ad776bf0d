use std::io::{BufRead, Write};

use netscan_common::config::Config;
use netscan_common::network::port::PortList;
use netscan_common::network::target::Target;
use netscan_common::warn;
use netscan_core::public_ip;
use netscan_core::report::ReportWriter;
use netscan_core::scanner::Scanner;

use crate::commands::results::RenderOptions;
use crate::session::ScanSession;
use crate::terminal::lang::Texts;
use crate::terminal::print;
use crate::terminal::prompt::Console;
use crate::terminal::spinner;

/// Scans a network or host given by the user, asking for it when missing.
pub async fn manual<R: BufRead, W: Write>(
    target: Option<Target>,
    ports: Option<PortList>,
    cfg: &Config,
    texts: &'static Texts,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let target = match target {
        Some(target) => target,
        None => match console.ask_parsed(texts.network_prompt, texts.invalid_network, |s| {
            s.parse::<Target>()
        })? {
            Some(target) => target,
            None => return Ok(()),
        },
    };

    let target = target.resolve()?;
    run_session(target, ports, cfg, texts, console).await
}

/// Scans the /24 around this machine's primary IPv4 address.
pub async fn own_network<R: BufRead, W: Write>(
    ports: Option<PortList>,
    cfg: &Config,
    texts: &'static Texts,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let target = Target::Lan.resolve()?;
    print::print_status(format!("{} {target}", texts.own_network));
    run_session(target, ports, cfg, texts, console).await
}

/// Scans this machine's public address as a single host.
pub async fn vulnerability<R: BufRead, W: Write>(
    ports: Option<PortList>,
    cfg: &Config,
    texts: &'static Texts,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let addr = public_ip::fetch_public_ip().await?;
    print::aligned_line(texts.public_ip, addr.to_string());
    run_session(Target::Host { addr }, ports, cfg, texts, console).await
}

pub async fn show_public_ip(texts: &Texts) -> anyhow::Result<()> {
    let addr = public_ip::fetch_public_ip().await?;
    print::aligned_line(texts.public_ip, addr.to_string());
    Ok(())
}

async fn run_session<R: BufRead, W: Write>(
    target: Target,
    ports: Option<PortList>,
    cfg: &Config,
    texts: &'static Texts,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let scanner = Scanner::from_config(cfg).with_progress(spinner::scan_progress(texts));

    ScanSession::new(console, &scanner, texts, target)
        .with_ports(ports)
        .with_report_writer(report_writer(cfg))
        .with_render_options(RenderOptions {
            show_closed: cfg.show_closed,
            quiet: cfg.quiet,
        })
        .run()
        .await
}

fn report_writer(cfg: &Config) -> Option<ReportWriter> {
    if cfg.no_report {
        return None;
    }

    match &cfg.output_dir {
        Some(dir) => Some(ReportWriter::new(dir)),
        None => match ReportWriter::desktop() {
            Ok(writer) => Some(writer),
            Err(e) => {
                warn!("{e}, results will not be saved");
                None
            }
        },
    }
}
