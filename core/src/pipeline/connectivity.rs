//! Connectivity Prober: one attempt per surface, each independent of the
//! others.

use async_trait::async_trait;
use ctfprint_common::network::surface::{Surface, SurfaceStatus};
use ctfprint_common::network::target::Target;
use ctfprint_common::outcome::Outcome;
use tracing::{debug, error, info, warn};

use super::{RunState, Step, StepContext, StepReport};
use crate::network::{PrinterSurfaces, WebAuth};

/// Status codes that prove the web server is up, even if it wants a login.
pub const REACHABLE_WEB_STATUSES: [u16; 3] = [200, 401, 403];

pub struct ConnectivityStep;

#[async_trait]
impl Step for ConnectivityStep {
    fn name(&self) -> &'static str {
        "Connectivity verification"
    }

    async fn run(&self, ctx: &StepContext<'_>, state: RunState) -> StepReport {
        let (status, web_reachable) =
            verify_connectivity(ctx.surfaces, &ctx.config.target, state.status).await;

        let outcome = if web_reachable {
            Outcome::Completed("web interface reachable".to_string())
        } else {
            Outcome::Degraded("web interface unreachable".to_string())
        };

        StepReport {
            state: RunState { status, ..state },
            result: Ok(outcome),
        }
    }
}

/// Probes web, printing port and SNMP once each.
///
/// Returns the updated status and whether the web surface answered.
pub async fn verify_connectivity(
    surfaces: &dyn PrinterSurfaces,
    target: &Target,
    status: SurfaceStatus,
) -> (SurfaceStatus, bool) {
    info!("Verifying printer connectivity...");

    let status = status
        .merge(probe_web(surfaces).await)
        .merge(probe_printing_port(surfaces, target).await)
        .merge(probe_snmp(surfaces).await);

    (status, status.is_reachable(Surface::Web))
}

async fn probe_web(surfaces: &dyn PrinterSurfaces) -> SurfaceStatus {
    let seen = SurfaceStatus::default();

    match surfaces.http_get("/", WebAuth::Anonymous).await {
        Ok(code) if REACHABLE_WEB_STATUSES.contains(&code) => {
            info!("Web interface accessible (HTTP {code})");
            seen.mark(Surface::Web)
        }
        Ok(code) => {
            warn!("Web interface answered with unexpected status {code}");
            seen
        }
        Err(e) => {
            error!("Cannot reach web interface: {e}");
            seen
        }
    }
}

async fn probe_printing_port(surfaces: &dyn PrinterSurfaces, target: &Target) -> SurfaceStatus {
    let seen = SurfaceStatus::default();
    let port = target.ports().pjl;

    match surfaces.tcp_open(port).await {
        Ok(true) => {
            info!("PJL port {port} accessible");
            seen.mark(Surface::PrintingPort)
        }
        Ok(false) => {
            warn!("PJL port {port} not accessible");
            seen
        }
        Err(e) => {
            error!("Cannot test PJL port: {e}");
            seen
        }
    }
}

async fn probe_snmp(surfaces: &dyn PrinterSurfaces) -> SurfaceStatus {
    let seen = SurfaceStatus::default();

    match surfaces.snmp_sys_descr().await {
        Ok(descr) => {
            info!("SNMP accessible");
            debug!("sysDescr.0 = {descr}");
            seen.mark(Surface::Snmp)
        }
        Err(e) => {
            warn!("SNMP not responding with 'public' community: {e}");
            seen
        }
    }
}
