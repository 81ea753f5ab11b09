use std::path::PathBuf;

use clap::Parser;
use ctfprint_common::config::{Config, DEFAULT_REPORT_PATH, RunMode};
use ctfprint_common::network::target::{
    FTP_PORT, PJL_PORT, PrinterHost, Ports, SNMP_PORT, Scheme, TELNET_PORT, Target,
};

const EXAMPLES: &str = "\
Examples:
  ctfprint 192.168.1.100
  ctfprint 192.168.1.100 --pin 12345678
  ctfprint 192.168.1.100 --https --pin 12345678

WARNING: Only use on isolated networks for educational purposes!";

#[derive(Parser)]
#[command(name = "ctfprint")]
#[command(about = "Turns a network printer into a deliberately vulnerable CTF target.")]
#[command(version, after_help = EXAMPLES)]
pub struct CommandLine {
    /// Address of the printer to configure
    pub printer: PrinterHost,

    /// Admin PIN, if one is currently set
    #[arg(long)]
    pub pin: Option<String>,

    /// Use HTTPS instead of HTTP for the web interface
    #[arg(long)]
    pub https: bool,

    /// Only verify connectivity and configuration, change nothing
    #[arg(long)]
    pub verify_only: bool,

    /// Only generate the flag report
    #[arg(long)]
    pub flags_only: bool,

    /// Also try to clear the web admin password
    #[arg(long)]
    pub disable_web_auth: bool,

    /// Where to write the HTML flag report
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Web interface port [default: 80, or 443 with --https]
    #[arg(long)]
    pub http_port: Option<u16>,

    /// Raw printing (PJL) port
    #[arg(long, default_value_t = PJL_PORT)]
    pub pjl_port: u16,

    /// SNMP agent port
    #[arg(long, default_value_t = SNMP_PORT)]
    pub snmp_port: u16,

    #[arg(long, default_value_t = TELNET_PORT, hide = true)]
    pub telnet_port: u16,

    #[arg(long, default_value_t = FTP_PORT, hide = true)]
    pub ftp_port: u16,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// `--verify-only` wins when both mode flags are given.
    pub fn mode(&self) -> RunMode {
        if self.verify_only {
            RunMode::VerifyOnly
        } else if self.flags_only {
            RunMode::FlagsOnly
        } else {
            RunMode::Full
        }
    }

    pub fn into_config(self) -> Config {
        let mode = self.mode();
        let scheme = if self.https { Scheme::Https } else { Scheme::Http };

        let ports = Ports {
            http: self.http_port.unwrap_or(scheme.default_port()),
            pjl: self.pjl_port,
            snmp: self.snmp_port,
            telnet: self.telnet_port,
            ftp: self.ftp_port,
        };
        let target = Target::new(self.printer, self.pin, scheme).with_ports(ports);

        Config {
            mode,
            report_path: self.output,
            disable_web_auth: self.disable_web_auth,
            ..Config::new(target)
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
