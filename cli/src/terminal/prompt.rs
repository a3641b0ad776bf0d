use std::io::{self, BufRead, Stdout, StdinLock, Write};

use colored::*;
use netscan_common::error::ScanError;

use crate::terminal::colors;

/// Line-based question and answer over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and reads one trimmed line. `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", question.color(colors::PRIMARY))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Repeats `question` until `parse` accepts the answer.
    pub fn ask_parsed<T>(
        &mut self,
        question: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Result<T, ScanError>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };

            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.warn(&format!("{invalid} {e}"))?,
            }
        }
    }

    pub fn say(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    pub fn warn(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{} {}", "[-]".red().bold(), msg)
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netscan_common::network::port::{PortList, parse_port};

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn written(console: &Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).to_string()
    }

    #[test]
    fn ask_trims_the_answer() {
        let mut console = console("  22, 80 \n");
        assert_eq!(console.ask("Ports?").unwrap(), Some("22, 80".to_string()));
        assert!(written(&console).contains("Ports?"));
    }

    #[test]
    fn ask_returns_none_at_end_of_input() {
        let mut console = console("");
        assert_eq!(console.ask("Ports?").unwrap(), None);
    }

    #[test]
    fn ask_parsed_reprompts_until_valid() {
        let mut console = console("abc\n70000\n8080\n");

        let port = console.ask_parsed("Port?", "Invalid port.", parse_port).unwrap();

        assert_eq!(port, Some(8080));
        let output = written(&console);
        assert_eq!(output.matches("Invalid port.").count(), 2);
        assert_eq!(output.matches("Port?").count(), 3);
    }

    #[test]
    fn ask_parsed_gives_up_at_end_of_input() {
        let mut console = console("22,abc\n");
        let ports = console
            .ask_parsed("Ports?", "Invalid port.", |s| s.parse::<PortList>())
            .unwrap();
        assert_eq!(ports, None);
    }
}
