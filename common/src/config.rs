use std::path::PathBuf;
use std::time::Duration;

use crate::network::target::Target;

/// Report written when no `--output` is given.
pub const DEFAULT_REPORT_PATH: &str = "printer_ctf_flags.html";

/// Run log, always appended in the working directory.
pub const LOG_FILE_NAME: &str = "printer_ctf_config.log";

/// Which part of the pipeline a run executes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Every step, from connectivity to verification.
    #[default]
    Full,
    /// Connectivity probe and configuration verification only.
    VerifyOnly,
    /// Report generation only. No network traffic.
    FlagsOnly,
}

/// Upper bound for each kind of network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeouts {
    pub web: Duration,
    pub tcp_connect: Duration,
    pub snmp: Duration,
    /// Connect and read budget of one printing-port command.
    pub pjl: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            web: Duration::from_secs(5),
            tcp_connect: Duration::from_secs(5),
            snmp: Duration::from_secs(3),
            pjl: Duration::from_secs(10),
        }
    }
}

/// Deliberate pauses on the printing port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Gap between two commands of the weakening sequence.
    pub between_commands: Duration,
    /// Wait after sending a command before reading the reply.
    pub response_settle: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            between_commands: Duration::from_millis(500),
            response_settle: Duration::from_secs(1),
        }
    }
}

impl Pacing {
    /// No pauses at all.
    pub fn none() -> Self {
        Self {
            between_commands: Duration::ZERO,
            response_settle: Duration::ZERO,
        }
    }
}

pub struct Config {
    pub target: Target,
    pub timeouts: Timeouts,
    pub pacing: Pacing,
    pub mode: RunMode,
    /// Where the HTML flag report is written. Overwritten on every run.
    pub report_path: PathBuf,
    pub log_path: PathBuf,
    /// Also POST an empty admin password to the settings endpoint while
    /// weakening protocols.
    ///
    /// Off unless asked for on the command line.
    pub disable_web_auth: bool,
}

impl Config {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            timeouts: Timeouts::default(),
            pacing: Pacing::default(),
            mode: RunMode::default(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            log_path: PathBuf::from(LOG_FILE_NAME),
            disable_web_auth: false,
        }
    }
}
