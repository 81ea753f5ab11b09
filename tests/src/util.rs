use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use ctfprint_common::config::{Config, Pacing, RunMode, Timeouts};
use ctfprint_common::error::SurfaceError;
use ctfprint_common::network::target::{Ports, Scheme, Target};
use ctfprint_core::network::{PrinterSurfaces, WebAuth};

/// One call made against the fake printer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    HttpGet(String, WebAuth),
    HttpPost(String, WebAuth),
    Pjl(String),
    Snmp,
    TcpOpen(u16),
}

/// Scripted printer that records every call it receives.
///
/// A surface left as `None` fails the way an unreachable device would.
#[derive(Default)]
pub struct RecordingSurfaces {
    calls: Mutex<Vec<Call>>,
    web_status: Option<u16>,
    pjl_reply: Option<String>,
    sys_descr: Option<String>,
    open_ports: Vec<u16>,
}

impl RecordingSurfaces {
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn with_web(self, status: u16) -> Self {
        Self { web_status: Some(status), ..self }
    }

    pub fn with_pjl(self, reply: &str) -> Self {
        Self { pjl_reply: Some(reply.to_string()), ..self }
    }

    pub fn with_snmp(self, sys_descr: &str) -> Self {
        Self { sys_descr: Some(sys_descr.to_string()), ..self }
    }

    pub fn with_open_port(mut self, port: u16) -> Self {
        self.open_ports.push(port);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pjl_commands(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Pjl(command) => Some(command),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PrinterSurfaces for RecordingSurfaces {
    async fn http_get(&self, path: &str, auth: WebAuth) -> Result<u16, SurfaceError> {
        self.record(Call::HttpGet(path.to_string(), auth));
        self.web_status
            .ok_or_else(|| SurfaceError::Http("connection refused".to_string()))
    }

    async fn http_post_form(
        &self,
        path: &str,
        _form: &[(&str, &str)],
        auth: WebAuth,
    ) -> Result<u16, SurfaceError> {
        self.record(Call::HttpPost(path.to_string(), auth));
        self.web_status
            .ok_or_else(|| SurfaceError::Http("connection refused".to_string()))
    }

    async fn pjl(&self, command: &str) -> Result<String, SurfaceError> {
        self.record(Call::Pjl(command.to_string()));
        self.pjl_reply.clone().ok_or_else(|| {
            SurfaceError::Io(std::io::Error::from(std::io::ErrorKind::ConnectionRefused))
        })
    }

    async fn snmp_sys_descr(&self) -> Result<String, SurfaceError> {
        self.record(Call::Snmp);
        self.sys_descr
            .clone()
            .ok_or(SurfaceError::Timeout(Duration::from_secs(3)))
    }

    async fn tcp_open(&self, port: u16) -> Result<bool, SurfaceError> {
        self.record(Call::TcpOpen(port));
        Ok(self.open_ports.contains(&port))
    }
}

/// Config aimed at `127.0.0.1` with no pacing, short timeouts and the
/// report written to `report_path`.
pub fn test_config(mode: RunMode, report_path: &Path, ports: Option<Ports>) -> Config {
    let target = Target::new("127.0.0.1".parse().unwrap(), Some("1234".to_string()), Scheme::Http);
    let target = match ports {
        Some(ports) => target.with_ports(ports),
        None => target,
    };

    Config {
        mode,
        report_path: report_path.to_path_buf(),
        pacing: Pacing::none(),
        timeouts: Timeouts {
            web: Duration::from_secs(2),
            tcp_connect: Duration::from_millis(500),
            snmp: Duration::from_millis(300),
            pjl: Duration::from_secs(2),
        },
        ..Config::new(target)
    }
}

/// A local port nobody listens on.
pub async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
