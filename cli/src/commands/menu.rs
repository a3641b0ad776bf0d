use std::io::{BufRead, Write};

use netscan_common::config::Config;
use netscan_common::success;
use tracing::error;

use crate::commands::scan;
use crate::terminal::lang::Texts;
use crate::terminal::print;
use crate::terminal::prompt::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ManualScan,
    OwnNetwork,
    Vulnerability,
    PublicIp,
    Exit,
}

impl MenuChoice {
    fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuChoice::ManualScan),
            "2" => Some(MenuChoice::OwnNetwork),
            "3" => Some(MenuChoice::Vulnerability),
            "4" => Some(MenuChoice::PublicIp),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Runs the numbered entry menu until the user exits or input ends.
///
/// Errors of a single mode are reported and the menu is shown again.
pub async fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
    texts: &'static Texts,
) -> anyhow::Result<()> {
    loop {
        print_menu(texts, cfg.quiet);

        let Some(answer) = console.ask(texts.menu_choose)? else {
            break;
        };

        let outcome = match MenuChoice::parse(&answer) {
            Some(MenuChoice::ManualScan) => scan::manual(None, None, cfg, texts, console).await,
            Some(MenuChoice::OwnNetwork) => scan::own_network(None, cfg, texts, console).await,
            Some(MenuChoice::Vulnerability) => scan::vulnerability(None, cfg, texts, console).await,
            Some(MenuChoice::PublicIp) => scan::show_public_ip(texts).await,
            Some(MenuChoice::Exit) => break,
            None => {
                console.warn(texts.invalid_option)?;
                continue;
            }
        };

        if let Err(e) = outcome {
            error!("{e:#}");
        }
    }

    success!("{}", texts.goodbye);
    Ok(())
}

fn print_menu(texts: &Texts, q_level: u8) {
    print::header(texts.menu_title, q_level);
    for (idx, option) in texts.menu_options.iter().enumerate() {
        print::tree_head(idx + 1, option);
    }
    print::tree_head(0, texts.menu_exit);
}
