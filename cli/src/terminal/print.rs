//! Console rendering. Every line goes out through [`print`], so progress bars
//! and log lines stay in order.

use std::fmt::Display;
use std::io;

use crate::terminal::{banner, colors};
use colored::*;
use crossterm::{cursor, execute, terminal};
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 10;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: "netscan::print", "{msg}");
}

pub fn clear_screen() {
    let _ = execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );
}

/// Left and right fill around a label of `label_width` columns.
fn split_fill(label_width: usize) -> (usize, usize) {
    let fill = TOTAL_WIDTH.saturating_sub(label_width);
    (fill / 2, fill - fill / 2)
}

/// A full-width rule of `fill` with `label` in the middle.
fn labelled_rule(fill: &str, label: ColoredString) -> String {
    let (left, right) = split_fill(UnicodeWidthStr::width(&*label));
    format!(
        "{}{}{}",
        fill.repeat(left).bright_black(),
        label,
        fill.repeat(right).bright_black()
    )
}

/// Dots that pad `key` to `width` columns before the colon.
fn key_padding(key: &str, width: usize) -> String {
    ".".repeat((width + 1).saturating_sub(key.chars().count()))
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("⟦ NETSCAN v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    print(&labelled_rule("═", title.bright_green().bold()));
    banner::print();
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&labelled_rule("─", title.bright_green()));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).bright_black().to_string());
}

/// `key.......: value`, keys aligned to a fixed column.
pub fn aligned_line(key: &str, value: impl Display) {
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        key_padding(key, KEY_WIDTH).color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.to_string().color(colors::TEXT_DEFAULT)
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

/// `[idx] name`, the root of a one-level tree or a menu entry.
pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Prints `key: value` leaves under the last [`tree_head`].
pub fn as_tree_one_level(leaves: Vec<(String, ColoredString)>) {
    let width: usize = leaves.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);

    for (i, (key, value)) in leaves.iter().enumerate() {
        let branch = if i + 1 == leaves.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            key_padding(key, width).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let (left, _) = split_fill(console::measure_text_width(msg));
    print(&format!("{}{msg}", " ".repeat(left)));
}

const NO_OPEN_PORTS: &str = r#"
         _   _  ___     ___  ____  _____ _   _
        | \ | |/ _ \   / _ \|  _ \| ____| \ | |
        |  \| | | | | | | | | |_) |  _| |  \| |
        | |\  | |_| | | |_| |  __/| |___| |\  |
        |_| \_|\___/   \___/|_|   |_____|_| \_|
"#;

pub fn no_results() {
    print(&NO_OPEN_PORTS.red().bold().to_string());
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

    #[test]
    fn fill_is_split_around_the_label() {
        assert_eq!(split_fill(10), (27, 27));
        assert_eq!(split_fill(11), (26, 27));
        assert_eq!(split_fill(TOTAL_WIDTH + 5), (0, 0));
    }

    #[test]
    fn rule_spans_the_full_width() {
        let rule = labelled_rule("─", "⟦ MAIN MENU ⟧".bright_green());
        let plain = console::strip_ansi_codes(&rule);
        assert_eq!(UnicodeWidthStr::width(&*plain), TOTAL_WIDTH);
        assert!(plain.starts_with('─') && plain.ends_with('─'));
    }

    #[test]
    fn keys_are_padded_to_a_common_column() {
        assert_eq!(key_padding("Port 22", 8), "..");
        assert_eq!(key_padding("Port 8080", 9), ".");
        assert_eq!(key_padding("a very long key", 3), "");
    }
}
