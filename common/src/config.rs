use std::path::PathBuf;
use std::time::Duration;

/// Per-probe timeout used when none is given. Matches one second per connect.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound for a single connect attempt.
    ///
    /// There is no per-host or per-scan deadline.
    pub timeout: Duration,
    /// Number of hosts probed at the same time. `1` keeps scans strictly sequential.
    pub concurrency: usize,
    /// Directory for report files. `None` means the user's desktop.
    pub output_dir: Option<PathBuf>,
    /// Skips writing report files entirely.
    pub no_report: bool,
    /// Also lists closed ports of reported hosts on the console.
    pub show_closed: bool,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            concurrency: 1,
            output_dir: None,
            no_report: false,
            show_closed: false,
            no_banner: false,
            quiet: 0,
        }
    }
}
