use std::path::Path;

use async_trait::async_trait;
use ctfprint_common::error::StepError;
use ctfprint_common::network::target::Target;
use ctfprint_common::outcome::{Outcome, StepResult};
use tracing::info;

use super::{RunState, Step, StepContext, StepReport};
use crate::report;

pub struct ReportStep;

#[async_trait]
impl Step for ReportStep {
    fn name(&self) -> &'static str {
        "Report generation"
    }

    async fn run(&self, ctx: &StepContext<'_>, state: RunState) -> StepReport {
        let generated_at = chrono::Local::now().format(report::TIMESTAMP_FORMAT).to_string();
        let result = generate_flag_report(&ctx.config.target, &ctx.config.report_path, &generated_at).await;
        StepReport::unchanged(state, result)
    }
}

/// Renders the report for `target` and writes it to `path`.
pub async fn generate_flag_report(target: &Target, path: &Path, generated_at: &str) -> StepResult {
    info!("Generating flag report: {}", path.display());

    let host = target.host().to_string();
    let html = report::render(&host, generated_at);

    report::write_report(path, &html)
        .await
        .map_err(|source| StepError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Flag report generated: {}", path.display());
    Ok(Outcome::Completed(format!("report written to {}", path.display())))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
