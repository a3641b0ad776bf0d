use colored::*;
use rand::Rng;

use crate::terminal::print;

const BANNER_0: &str = r#"
     _   _      _   ____
    | \ | | ___| |_/ ___|  ___ __ _ _ __
    |  \| |/ _ \ __\___ \ / __/ _` | '_ \
    | |\  |  __/ |_ ___) | (_| (_| | | | |
    |_| \_|\___|\__|____/ \___\__,_|_| |_|
"#;

const BANNER_1: &str = r#"
     ███╗   ██╗███████╗████████╗███████╗ ██████╗ █████╗ ███╗   ██╗
     ████╗  ██║██╔════╝╚══██╔══╝██╔════╝██╔════╝██╔══██╗████╗  ██║
     ██╔██╗ ██║█████╗     ██║   ███████╗██║     ███████║██╔██╗ ██║
     ██║╚██╗██║██╔══╝     ██║   ╚════██║██║     ██╔══██║██║╚██╗██║
     ██║ ╚████║███████╗   ██║   ███████║╚██████╗██║  ██║██║ ╚████║
     ╚═╝  ╚═══╝╚══════╝   ╚═╝   ╚══════╝ ╚═════╝╚═╝  ╚═╝╚═╝  ╚═══╝
"#;

const BANNERS: [&str; 2] = [BANNER_0, BANNER_1];

pub fn print() {
    let idx: usize = rand::rng().random_range(0..BANNERS.len());
    print::print(&format!("{}", BANNERS[idx].bright_green()));
}
