//! # Configuration Verifier
//!
//! Re-probes the printer after configuration and records pass/fail per
//! check. The results form their own set; they never feed back into the
//! run's [`SurfaceStatus`](ctfprint_common::network::surface::SurfaceStatus).

use async_trait::async_trait;
use ctfprint_common::network::target::Target;
use ctfprint_common::outcome::Outcome;
use tracing::{info, warn};

use super::{RunState, Step, StepContext, StepReport};
use crate::network::{PrinterSurfaces, WebAuth, pjl};

const RULE: &str = "============================================================";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub checks: Vec<Check>,
}

impl VerificationReport {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|check| check.passed).count()
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.checks
            .iter()
            .find(|check| check.name == name)
            .map(|check| check.passed)
    }

    pub fn summary(&self) -> String {
        format!("{}/{} checks passed", self.passed(), self.total())
    }

    fn record(&mut self, name: &'static str, label: &str, passed: bool) {
        if passed {
            info!("{label}: PASS");
        } else {
            warn!("{label}: FAIL");
        }
        self.checks.push(Check { name, passed });
    }
}

pub struct VerificationStep;

#[async_trait]
impl Step for VerificationStep {
    fn name(&self) -> &'static str {
        "Configuration verification"
    }

    async fn run(&self, ctx: &StepContext<'_>, state: RunState) -> StepReport {
        let report = verify_configuration(ctx.surfaces, &ctx.config.target, state.auth).await;
        StepReport::unchanged(state, Ok(Outcome::Completed(report.summary())))
    }
}

/// Runs every check once, in a fixed order. Individual failures are
/// recorded, never raised.
pub async fn verify_configuration(
    surfaces: &dyn PrinterSurfaces,
    target: &Target,
    auth: WebAuth,
) -> VerificationReport {
    info!("{RULE}");
    info!("VERIFICATION REPORT");
    info!("{RULE}");

    let ports = target.ports();
    let mut report = VerificationReport::default();

    let snmp = surfaces.snmp_sys_descr().await.is_ok();
    report.record("snmp_public", "SNMP 'public' read", snmp);

    let pjl = surfaces
        .pjl(pjl::INFO_STATUS)
        .await
        .is_ok_and(|reply| !reply.is_empty());
    report.record("pjl_access", "PJL command access", pjl);

    let web = matches!(surfaces.http_get("/", auth).await, Ok(200));
    report.record("web_access", "Web interface access", web);

    let telnet = surfaces.tcp_open(ports.telnet).await.unwrap_or(false);
    report.record("telnet", &format!("Telnet port {}", ports.telnet), telnet);

    let ftp = surfaces.tcp_open(ports.ftp).await.unwrap_or(false);
    report.record("ftp", &format!("FTP port {}", ports.ftp), ftp);

    info!("{RULE}");
    info!("Overall Status: {}", report.summary());
    info!("{RULE}");

    report
}
