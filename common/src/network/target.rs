//! # Printer Target Model
//!
//! Defines the single printer a run is aimed at.
//!
//! The host can be given as:
//! * An IPv4 address (e.g., `192.168.1.100`).
//! * An IPv6 address (e.g., `fe80::1`).
//! * A DNS hostname (e.g., `printer.lab.local`).
//!
//! A [`Target`] is immutable once built; the port set is derived from the
//! transport scheme and can only be replaced wholesale through
//! [`Target::with_ports`].

use std::fmt;
use std::net::{IpAddr, Ipv6Addr};
use std::str::FromStr;

pub const HTTP_PORT: u16 = 80;
pub const HTTPS_PORT: u16 = 443;
pub const PJL_PORT: u16 = 9100;
pub const SNMP_PORT: u16 = 161;
pub const TELNET_PORT: u16 = 23;
pub const FTP_PORT: u16 = 21;

/// Host part of a target, validated at parse time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrinterHost {
    Ip(IpAddr),
    Name(String),
}

impl FromStr for PrinterHost {
    type Err = String;

    /// Parses a string into a `PrinterHost`.
    ///
    /// Literal IP addresses win over hostnames, so `10.0.0.1` is never
    /// treated as a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(host) = parse_ip(s) {
            return Ok(host);
        }

        if let Some(host) = parse_hostname(s)? {
            return Ok(host);
        }

        Err(format!("invalid printer address: {s}"))
    }
}

impl fmt::Display for PrinterHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrinterHost::Ip(ip) => write!(f, "{ip}"),
            PrinterHost::Name(name) => f.write_str(name),
        }
    }
}

/// Parses a bare IP address, accepting bracketed IPv6 (`[::1]`) as well.
fn parse_ip(s: &str) -> Option<PrinterHost> {
    let unbracketed = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);

    unbracketed.parse::<IpAddr>().ok().map(PrinterHost::Ip)
}

/// Parses a DNS hostname made of letters, digits, hyphens and dots.
fn parse_hostname(s: &str) -> Result<Option<PrinterHost>, String> {
    if s.is_empty() {
        return Err("printer address cannot be empty".to_string());
    }
    if s.len() > 253 {
        return Ok(None);
    }

    // Dotted all-numeric strings that failed IP parsing are bad addresses, not names.
    if s.split('.').all(|label| label.chars().all(|c| c.is_ascii_digit())) {
        return Err(format!("invalid IP address: {s}"));
    }

    let valid = s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    Ok(valid.then(|| PrinterHost::Name(s.to_ascii_lowercase())))
}

/// Transport used for the web interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => HTTP_PORT,
            Scheme::Https => HTTPS_PORT,
        }
    }
}

/// Ports used to reach each surface of the printer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ports {
    pub http: u16,
    pub pjl: u16,
    pub snmp: u16,
    pub telnet: u16,
    pub ftp: u16,
}

impl Ports {
    /// Well-known ports, with the web port picked by `scheme`.
    pub fn for_scheme(scheme: Scheme) -> Self {
        Self {
            http: scheme.default_port(),
            pjl: PJL_PORT,
            snmp: SNMP_PORT,
            telnet: TELNET_PORT,
            ftp: FTP_PORT,
        }
    }
}

/// The printer being configured.
#[derive(Clone, Debug)]
pub struct Target {
    host: PrinterHost,
    admin_pin: Option<String>,
    scheme: Scheme,
    ports: Ports,
}

impl Target {
    /// Builds a target. An empty PIN is the same as no PIN.
    pub fn new(host: PrinterHost, admin_pin: Option<String>, scheme: Scheme) -> Self {
        Self {
            host,
            admin_pin: admin_pin.filter(|pin| !pin.is_empty()),
            scheme,
            ports: Ports::for_scheme(scheme),
        }
    }

    /// Returns a copy of this target using `ports` instead of the derived set.
    pub fn with_ports(self, ports: Ports) -> Self {
        Self { ports, ..self }
    }

    pub fn host(&self) -> &PrinterHost {
        &self.host
    }

    pub fn admin_pin(&self) -> Option<&str> {
        self.admin_pin.as_deref()
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn ports(&self) -> Ports {
        self.ports
    }

    /// `host:port` form usable for socket connects. IPv6 hosts are bracketed.
    pub fn authority(&self, port: u16) -> String {
        match &self.host {
            PrinterHost::Ip(IpAddr::V6(v6)) => format_v6_authority(v6, port),
            host => format!("{host}:{port}"),
        }
    }

    /// Root URL of the web interface. The port is omitted when it is the
    /// scheme's default.
    pub fn base_url(&self) -> String {
        let host = match &self.host {
            PrinterHost::Ip(IpAddr::V6(v6)) => format!("[{v6}]"),
            host => host.to_string(),
        };

        if self.ports.http == self.scheme.default_port() {
            format!("{}://{}", self.scheme.as_str(), host)
        } else {
            format!("{}://{}:{}", self.scheme.as_str(), host, self.ports.http)
        }
    }
}

fn format_v6_authority(addr: &Ipv6Addr, port: u16) -> String {
    format!("[{addr}]:{port}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
