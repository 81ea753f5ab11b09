//! # Flag Planter
//!
//! Places part of the catalogue on every surface the run has seen.
//!
//! Only the printing-port writes touch the printer. The SNMP and web
//! placements are simulated: they log where each flag is meant to go and
//! leave the device alone, since no model-independent write path exists for
//! either. The advanced scenarios are documentation only.

use std::fmt;

use async_trait::async_trait;
use ctfprint_common::flags::{self, ADVANCED_SCENARIOS, SNMP_FLAG_SUBTREE, WEB_LOCATIONS};
use ctfprint_common::network::surface::{Surface, SurfaceStatus};
use ctfprint_common::outcome::Outcome;
use tracing::{debug, error, info, warn};

use super::{RunState, Step, StepContext, StepReport};
use crate::network::{PrinterSurfaces, pjl};

/// A category of places flags were associated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagSite {
    SnmpMib,
    PrinterFilesystem,
    WebInterface,
    AdvancedScenarios,
}

impl FlagSite {
    pub fn label(&self) -> &'static str {
        match self {
            FlagSite::SnmpMib => "SNMP MIB values",
            FlagSite::PrinterFilesystem => "PJL filesystem",
            FlagSite::WebInterface => "Web interface",
            FlagSite::AdvancedScenarios => "Advanced exploitation scenarios",
        }
    }
}

impl fmt::Display for FlagSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Default)]
pub struct PlantingReport {
    pub sites: Vec<FlagSite>,
    /// Printing-port writes the printer answered.
    pub acknowledged_writes: usize,
}

pub struct FlagDeploymentStep;

#[async_trait]
impl Step for FlagDeploymentStep {
    fn name(&self) -> &'static str {
        "Flag deployment"
    }

    async fn run(&self, ctx: &StepContext<'_>, state: RunState) -> StepReport {
        let report = plant_flags(ctx.surfaces, state.status).await;

        let outcome = if report.sites.is_empty() {
            Outcome::Degraded("no flags placed".to_string())
        } else {
            let joined = join_sites(&report.sites);
            Outcome::Completed(format!("flags placed in: {joined}"))
        };

        StepReport::unchanged(state, Ok(outcome))
    }
}

pub async fn plant_flags(surfaces: &dyn PrinterSurfaces, status: SurfaceStatus) -> PlantingReport {
    info!("Planting CTF flags...");
    let mut report = PlantingReport::default();

    if status.is_reachable(Surface::Snmp) {
        info!("Planting flags via SNMP...");
        plant_snmp_flags(&flags::snmp_subset());
        report.sites.push(FlagSite::SnmpMib);
    }

    if status.is_reachable(Surface::PrintingPort) {
        info!("Planting flags via PJL filesystem...");
        report.acknowledged_writes =
            plant_printing_port_flags(surfaces, &flags::printing_port_subset()).await;
        report.sites.push(FlagSite::PrinterFilesystem);
    }

    if status.is_reachable(Surface::Web) {
        info!("Planting flags in web interface...");
        plant_web_flags(&flags::web_subset());
        report.sites.push(FlagSite::WebInterface);
    }

    info!("Configuring advanced flag scenarios...");
    describe_advanced_flags(&flags::advanced_subset());
    report.sites.push(FlagSite::AdvancedScenarios);

    info!("Flags planted in: {}", join_sites(&report.sites));
    report
}

/// OID a SNMP flag is meant to live under, numbered from 1.
pub fn snmp_flag_oid(number: usize) -> String {
    format!("{SNMP_FLAG_SUBTREE}.{number}")
}

/// Name of the printer file holding the `number`th printing-port flag.
pub fn flag_file_name(number: usize) -> String {
    format!("flag{number}.txt")
}

/// Web site a web flag goes to, cycling through [`WEB_LOCATIONS`].
pub fn web_location(idx: usize) -> &'static str {
    WEB_LOCATIONS[idx % WEB_LOCATIONS.len()]
}

fn plant_snmp_flags(flags: &[&str]) {
    for (idx, flag) in flags.iter().enumerate() {
        info!("  Flag {}: {flag} -> OID {}", idx + 1, snmp_flag_oid(idx + 1));
    }
}

/// One upload header per flag, each on its own connection. Returns how
/// many got a non-empty answer.
async fn plant_printing_port_flags(surfaces: &dyn PrinterSurfaces, flags: &[&str]) -> usize {
    let mut acknowledged = 0;

    for (idx, flag) in flags.iter().enumerate() {
        let file_name = flag_file_name(idx + 1);
        let command = pjl::fsupload_command(&file_name, flag);

        match surfaces.pjl(&command).await {
            Ok(reply) if !reply.is_empty() => {
                info!("  Flag {}: {flag} -> 0:/{file_name}", idx + 1);
                acknowledged += 1;
            }
            Ok(_) => warn!("  PJL write may have failed for flag {}", idx + 1),
            Err(e) => error!("  Failed to plant PJL flag {}: {e}", idx + 1),
        }
    }

    acknowledged
}

fn plant_web_flags(flags: &[&str]) {
    for (idx, flag) in flags.iter().enumerate() {
        info!("  Flag {}: {flag} -> {}", idx + 1, web_location(idx));
    }
}

fn describe_advanced_flags(flags: &[&str]) {
    for (idx, flag) in flags.iter().enumerate() {
        match ADVANCED_SCENARIOS.get(idx) {
            Some((scenario, description)) => {
                info!("  Flag {}: {flag} -> {scenario} ({description})", idx + 1)
            }
            None => debug!("  Flag {}: {flag} has no scripted scenario", idx + 1),
        }
    }
}

fn join_sites(sites: &[FlagSite]) -> String {
    sites
        .iter()
        .map(FlagSite::label)
        .collect::<Vec<_>>()
        .join(", ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
