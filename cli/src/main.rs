mod commands;
mod session;
mod terminal;

use commands::{CommandLine, Commands, menu, scan};
use netscan_common::config::Config;
use terminal::lang::Texts;
use terminal::logging;
use terminal::print;
use terminal::prompt::Console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();
    let texts: &'static Texts = commands.lang.texts();

    logging::init_logging(cfg.quiet);

    if commands.command.is_none() {
        print::clear_screen();
    }
    print::banner(cfg.no_banner, cfg.quiet);

    let mut console = Console::stdio();

    match commands.command {
        None => menu::main_menu(&mut console, &cfg, texts).await,
        Some(Commands::Scan { target, ports }) => {
            print::header(texts.menu_options[0], cfg.quiet);
            scan::manual(target, ports, &cfg, texts, &mut console).await
        }
        Some(Commands::Lan { ports }) => {
            print::header(texts.menu_options[1], cfg.quiet);
            scan::own_network(ports, &cfg, texts, &mut console).await
        }
        Some(Commands::Vuln { ports }) => {
            print::header(texts.menu_options[2], cfg.quiet);
            scan::vulnerability(ports, &cfg, texts, &mut console).await
        }
        Some(Commands::Ip) => {
            print::header(texts.menu_options[3], cfg.quiet);
            scan::show_public_ip(texts).await
        }
    }
}
