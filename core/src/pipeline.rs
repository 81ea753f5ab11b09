//! # Configuration Pipeline
//!
//! A fixed, strictly sequential list of [`Step`]s run against one printer.
//!
//! Steps do not share mutable state. Each one receives the current
//! [`RunState`] by value and hands back the state it observed together with
//! its [`StepResult`]. The [`Orchestrator`] folds those states together
//! (reachability only ever grows), logs each result and always runs every
//! step, whatever the previous ones returned.

use async_trait::async_trait;
use ctfprint_common::config::{Config, RunMode};
use ctfprint_common::network::surface::SurfaceStatus;
use ctfprint_common::outcome::{Outcome, StepResult};
use tracing::{error, info, warn};

use crate::network::{PrinterSurfaces, WebAuth};

pub mod auth;
pub mod connectivity;
pub mod planter;
pub mod publish;
pub mod snmp_setup;
pub mod verify;
pub mod weaken;

/// What the run knows so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunState {
    pub status: SurfaceStatus,
    /// Credential mode for web calls. Switches to [`WebAuth::Admin`] once
    /// the authenticator has attached the PIN.
    pub auth: WebAuth,
}

impl RunState {
    /// Folds a step's observation into the run. Reachability is merged, never
    /// replaced.
    #[must_use]
    pub fn advance(self, observed: RunState) -> Self {
        Self {
            status: self.status.merge(observed.status),
            auth: observed.auth,
        }
    }
}

/// Everything a step may use. Read-only.
pub struct StepContext<'a> {
    pub surfaces: &'a dyn PrinterSurfaces,
    pub config: &'a Config,
}

pub struct StepReport {
    pub state: RunState,
    pub result: StepResult,
}

impl StepReport {
    pub fn unchanged(state: RunState, result: StepResult) -> Self {
        Self { state, result }
    }
}

#[async_trait]
pub trait Step: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: &StepContext<'_>, state: RunState) -> StepReport;
}

/// Steps executed for `mode`, in order.
pub fn steps_for(mode: RunMode) -> Vec<Box<dyn Step>> {
    match mode {
        RunMode::Full => vec![
            Box::new(connectivity::ConnectivityStep),
            Box::new(auth::WebAuthStep),
            Box::new(weaken::ProtocolEnablementStep),
            Box::new(snmp_setup::SnmpConfigurationStep),
            Box::new(planter::FlagDeploymentStep),
            Box::new(publish::ReportStep),
            Box::new(verify::VerificationStep),
        ],
        RunMode::VerifyOnly => vec![
            Box::new(connectivity::ConnectivityStep),
            Box::new(verify::VerificationStep),
        ],
        RunMode::FlagsOnly => vec![Box::new(publish::ReportStep)],
    }
}

pub struct StepRecord {
    pub name: &'static str,
    pub result: StepResult,
}

pub struct RunSummary {
    pub state: RunState,
    pub steps: Vec<StepRecord>,
}

impl RunSummary {
    pub fn result_of(&self, name: &str) -> Option<&StepResult> {
        self.steps
            .iter()
            .find(|record| record.name == name)
            .map(|record| &record.result)
    }
}

pub struct Orchestrator<'a> {
    ctx: StepContext<'a>,
    steps: Vec<Box<dyn Step>>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(surfaces: &'a dyn PrinterSurfaces, config: &'a Config) -> Self {
        Self::with_steps(surfaces, config, steps_for(config.mode))
    }

    pub fn with_steps(
        surfaces: &'a dyn PrinterSurfaces,
        config: &'a Config,
        steps: Vec<Box<dyn Step>>,
    ) -> Self {
        Self {
            ctx: StepContext { surfaces, config },
            steps,
        }
    }

    /// Runs every step once, in order. Never fails.
    pub async fn run(&self) -> RunSummary {
        let mut state = RunState::default();
        let mut records = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let name = step.name();
            info!("--- {name} ---");

            let report = step.run(&self.ctx, state).await;
            state = state.advance(report.state);

            log_result(name, &report.result);
            records.push(StepRecord {
                name,
                result: report.result,
            });
        }

        if self.ctx.config.mode == RunMode::Full {
            closing_checklist(self.ctx.config);
        }

        RunSummary {
            state,
            steps: records,
        }
    }
}

fn log_result(name: &str, result: &StepResult) {
    match result {
        Ok(Outcome::Completed(msg)) => info!("{name} completed successfully ({msg})"),
        Ok(Outcome::Degraded(msg)) => warn!("{name} completed with warnings ({msg})"),
        Err(e) => error!("{name} failed: {e}"),
    }
}

fn closing_checklist(config: &Config) {
    info!("CONFIGURATION COMPLETE");
    info!("Next steps:");
    info!("1. Review {} for all flag locations", config.report_path.display());
    info!("2. Verify printer is on isolated network");
    info!("3. Test with PRET: ./pret.py {} pjl", config.target.host());
    info!("4. Provide flag report to CTF scoring system");
    warn!("REMEMBER: Factory reset printer after CTF completion!");
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
