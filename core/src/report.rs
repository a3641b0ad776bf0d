//! Persists scan reports as plain text files.

use std::fmt::Write as _;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use netscan_common::error::ScanError;
use netscan_common::report::ScanReport;
use tracing::debug;

const FILE_PREFIX: &str = "scan_results_";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes reports into a single directory, creating it when needed.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A writer targeting the user's desktop directory.
    pub fn desktop() -> anyhow::Result<Self> {
        Ok(Self::new(desktop_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `report` to `scan_results_<YYYYMMDD_HHMMSS>.txt` and returns its path.
    ///
    /// Existing files are never touched: a report captured in the same second
    /// as an earlier one goes to `scan_results_<YYYYMMDD_HHMMSS>_<n>.txt`.
    pub fn write(&self, report: &ScanReport) -> Result<PathBuf, ScanError> {
        fs::create_dir_all(&self.dir).map_err(|source| ScanError::ReportWrite {
            path: self.dir.clone(),
            source,
        })?;

        let (path, mut file) = self.create_unique(&report.timestamp)?;
        file.write_all(render(report).as_bytes())
            .map_err(|source| ScanError::ReportWrite {
                path: path.clone(),
                source,
            })?;

        debug!("Report written to {}", path.display());
        Ok(path)
    }

    fn create_unique(&self, timestamp: &DateTime<Local>) -> Result<(PathBuf, File), ScanError> {
        let mut attempt: u32 = 0;
        loop {
            let path = self.dir.join(numbered_file_name(timestamp, attempt));
            match create_new(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(source) => return Err(ScanError::ReportWrite { path, source }),
            }
        }
    }
}

fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// `%USERPROFILE%\Desktop` on Windows, `~/Desktop` everywhere else.
pub fn desktop_dir() -> anyhow::Result<PathBuf> {
    match dirs::home_dir() {
        Some(home) => Ok(home.join("Desktop")),
        None => anyhow::bail!("Could not determine the home directory"),
    }
}

pub fn file_name(timestamp: &DateTime<Local>) -> String {
    numbered_file_name(timestamp, 0)
}

fn numbered_file_name(timestamp: &DateTime<Local>, attempt: u32) -> String {
    match attempt {
        0 => format!("{FILE_PREFIX}{}.txt", timestamp.format(TIMESTAMP_FORMAT)),
        n => format!("{FILE_PREFIX}{}_{n}.txt", timestamp.format(TIMESTAMP_FORMAT)),
    }
}

/// Renders the file body. The timestamp only appears in the file name, so the
/// same report always renders to the same bytes.
pub fn render(report: &ScanReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scan results for {}", report.target);

    for host in &report.hosts {
        let _ = writeln!(out, "Host: {}", host.addr);
        for port in &host.open_ports {
            let _ = writeln!(out, "  Port {port} is open");
        }
    }

    out
}
