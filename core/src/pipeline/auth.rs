//! Web Authenticator.

use async_trait::async_trait;
use ctfprint_common::outcome::{Outcome, StepResult};
use tracing::{info, warn};

use super::{RunState, Step, StepContext, StepReport};
use crate::network::{PrinterSurfaces, WebAuth};

/// Administrative page used to check the credential.
pub const ADMIN_PATH: &str = "/hp/device/this.LCDispatcher";

pub struct WebAuthStep;

#[async_trait]
impl Step for WebAuthStep {
    fn name(&self) -> &'static str {
        "Web authentication"
    }

    async fn run(&self, ctx: &StepContext<'_>, state: RunState) -> StepReport {
        let result = authenticate_web(ctx.surfaces).await;

        // The PIN stays attached for the rest of the run whether or not it
        // was accepted.
        let state = RunState {
            auth: WebAuth::Admin,
            ..state
        };

        StepReport { state, result }
    }
}

/// Fetches [`ADMIN_PATH`] with the admin credential attached.
///
/// `200` means authenticated and `401` means the PIN was rejected. Any other
/// status is taken as a reason to carry on.
pub async fn authenticate_web(surfaces: &dyn PrinterSurfaces) -> StepResult {
    info!("Attempting web authentication...");

    let code = surfaces.http_get(ADMIN_PATH, WebAuth::Admin).await?;

    let outcome = match code {
        200 => {
            info!("Authenticated to web interface");
            Outcome::Completed("authenticated".to_string())
        }
        401 => {
            warn!("Authentication required but credentials failed");
            warn!("Please provide correct admin PIN or reset printer");
            Outcome::Degraded("admin credentials rejected".to_string())
        }
        other => {
            info!("Web interface returned status {other}");
            Outcome::Completed(format!("proceeding after HTTP {other}"))
        }
    };

    Ok(outcome)
}
