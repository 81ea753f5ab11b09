use async_trait::async_trait;
use ctfprint_common::network::surface::Surface;
use ctfprint_common::outcome::Outcome;
use tracing::{error, info};

use super::{RunState, Step, StepContext, StepReport};

/// Settings the printer is expected to carry. They are applied by hand (web
/// interface or service menu); this step only records them and checks the
/// agent still answers.
pub const INTENDED_SNMP_SETTINGS: [&str; 4] = [
    "Setting read community: 'public'",
    "Setting write community: 'private'",
    "Enabling SNMPv1 and SNMPv2c",
    "Disabling SNMPv3 authentication",
];

pub struct SnmpConfigurationStep;

#[async_trait]
impl Step for SnmpConfigurationStep {
    fn name(&self) -> &'static str {
        "SNMP configuration"
    }

    async fn run(&self, ctx: &StepContext<'_>, state: RunState) -> StepReport {
        info!("Configuring SNMP vulnerabilities...");
        for setting in INTENDED_SNMP_SETTINGS {
            info!("  {setting}");
        }

        match ctx.surfaces.snmp_sys_descr().await {
            Ok(_) => {
                info!("SNMP configured and accessible");
                let status = state.status.mark(Surface::Snmp);
                StepReport {
                    state: RunState { status, ..state },
                    result: Ok(Outcome::Completed("SNMP answers with 'public'".to_string())),
                }
            }
            Err(e) => {
                error!("SNMP verification failed: {e}");
                StepReport::unchanged(state, Ok(Outcome::Degraded(format!("SNMP not confirmed: {e}"))))
            }
        }
    }
}
