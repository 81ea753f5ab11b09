mod commands;
mod terminal;

use commands::CommandLine;
use ctfprint_common::config::{Config, RunMode};
use ctfprint_core::network::link::PrinterLink;
use ctfprint_core::pipeline::Orchestrator;
use terminal::{logging, print};
use tracing::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.into_config();

    logging::init_logging(&cfg.log_path);
    print::banner();
    print::isolation_warning();

    match cfg.mode {
        RunMode::Full => print::header("hp printer ctf configuration - starting"),
        RunMode::VerifyOnly => print::header("verifying printer"),
        RunMode::FlagsOnly => print::header("generating flag report"),
    }

    run(&cfg).await;

    print::end_of_program();
    Ok(())
}

/// Errors end up in the log, never in the exit status.
async fn run(cfg: &Config) {
    info!("Initialized configurator for printer at {}", cfg.target.host());

    let link = PrinterLink::new(cfg);
    let summary = Orchestrator::new(&link, cfg).run().await;

    let reachable: Vec<&str> = summary.state.status.reachable().map(|s| s.label()).collect();
    debug!("Reachable surfaces at end of run: {reachable:?}");
}
