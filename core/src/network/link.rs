use async_trait::async_trait;
use ctfprint_common::config::{Config, Pacing, Timeouts};
use ctfprint_common::error::SurfaceError;
use ctfprint_common::network::target::Target;
use tracing::error;

use super::web::WebClient;
use super::{PrinterSurfaces, WebAuth, pjl, snmp, tcp};

/// Real connection to the printer.
///
/// Owns the run's single HTTP session. Printing-port commands, SNMP reads
/// and connect probes each open and close their own socket.
///
/// A session that cannot be built only takes the web surface down; every
/// web call then fails on its own.
pub struct PrinterLink {
    target: Target,
    timeouts: Timeouts,
    pacing: Pacing,
    web: Option<WebClient>,
}

impl PrinterLink {
    pub fn new(config: &Config) -> Self {
        let web = match WebClient::new(&config.target, &config.timeouts) {
            Ok(client) => Some(client),
            Err(e) => {
                error!("Cannot set up the HTTP session: {e}");
                None
            }
        };

        Self {
            target: config.target.clone(),
            timeouts: config.timeouts,
            pacing: config.pacing,
            web,
        }
    }

    fn web(&self) -> Result<&WebClient, SurfaceError> {
        self.web
            .as_ref()
            .ok_or_else(|| SurfaceError::Http("no HTTP session".to_string()))
    }
}

#[async_trait]
impl PrinterSurfaces for PrinterLink {
    async fn http_get(&self, path: &str, auth: WebAuth) -> Result<u16, SurfaceError> {
        self.web()?.get(path, auth).await
    }

    async fn http_post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        auth: WebAuth,
    ) -> Result<u16, SurfaceError> {
        self.web()?.post_form(path, form, auth).await
    }

    async fn pjl(&self, command: &str) -> Result<String, SurfaceError> {
        let authority = self.target.authority(self.target.ports().pjl);
        pjl::send_command(&authority, command, self.timeouts.pjl, self.pacing.response_settle).await
    }

    async fn snmp_sys_descr(&self) -> Result<String, SurfaceError> {
        let authority = self.target.authority(self.target.ports().snmp);
        snmp::read_sys_descr(authority, self.timeouts.snmp).await
    }

    async fn tcp_open(&self, port: u16) -> Result<bool, SurfaceError> {
        let authority = self.target.authority(port);
        tcp::connect_probe(&authority, self.timeouts.tcp_connect).await
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
