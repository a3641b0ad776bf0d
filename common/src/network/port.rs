use std::fmt;
use std::str::FromStr;

use crate::error::ScanError;

/// Ordered list of TCP ports to probe.
///
/// Order is kept exactly as entered and duplicates are allowed; every entry
/// is probed once per scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortList {
    ports: Vec<u16>,
}

impl PortList {
    pub fn new(ports: Vec<u16>) -> Self {
        Self { ports }
    }

    /// Appends a port to the end of the list.
    pub fn push(&mut self, port: u16) {
        self.ports.push(port);
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.ports
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

/// Parses a single port in `1..=65535`.
pub fn parse_port(token: &str) -> Result<u16, ScanError> {
    let token = token.trim();
    let value = token
        .parse::<u32>()
        .map_err(|_| ScanError::invalid_port(token, "not a number"))?;

    match u16::try_from(value) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ScanError::invalid_port(token, "must be between 1 and 65535")),
    }
}

/// Parses `start-end` into the inclusive list of ports.
fn parse_port_range(token: &str, start_str: &str, end_str: &str) -> Result<Vec<u16>, ScanError> {
    let start = parse_port(start_str)?;
    let end = parse_port(end_str)?;

    if start > end {
        return Err(ScanError::invalid_port(token, "range start is above its end"));
    }

    Ok((start..=end).collect())
}

impl FromStr for PortList {
    type Err = ScanError;

    /// Parses a comma-separated list like `22, 80,443` or `1-1024,8080`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ports = Vec::new();

        for token in s.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            match token.split_once('-') {
                Some((start, end)) => ports.extend(parse_port_range(token, start, end)?),
                None => ports.push(parse_port(token)?),
            }
        }

        if ports.is_empty() {
            return Err(ScanError::invalid_port(s.trim(), "no ports given"));
        }

        Ok(Self { ports })
    }
}

impl fmt::Display for PortList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.ports.iter().map(u16::to_string).collect();
        write!(f, "{}", joined.join(","))
    }
}
