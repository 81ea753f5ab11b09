use ctfprint_common::config::RunMode;
use ctfprint_common::flags;
use ctfprint_common::network::surface::Surface;
use ctfprint_common::outcome::Outcome;
use ctfprint_core::network::{WebAuth, pjl};
use ctfprint_core::pipeline::Orchestrator;

use crate::util::{Call, RecordingSurfaces, test_config};

fn healthy_printer() -> RecordingSurfaces {
    RecordingSurfaces::offline()
        .with_web(200)
        .with_pjl("@PJL INFO STATUS\r\nCODE=10001\r\n")
        .with_snmp("HP LaserJet M507")
        .with_open_port(9100)
}

fn fsupload_count(surfaces: &RecordingSurfaces) -> usize {
    surfaces
        .pjl_commands()
        .iter()
        .filter(|command| command.starts_with("@PJL FSUPLOAD"))
        .count()
}

#[tokio::test]
async fn full_run_configures_plants_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("flags.html");
    let cfg = test_config(RunMode::Full, &report_path, None);
    let surfaces = healthy_printer();

    let summary = Orchestrator::new(&surfaces, &cfg).run().await;

    assert_eq!(summary.steps.len(), 7);
    assert!(summary.steps.iter().all(|record| record.result.is_ok()));
    assert_eq!(summary.state.auth, WebAuth::Admin);
    for surface in Surface::ALL {
        assert!(summary.state.status.is_reachable(surface));
    }

    let commands = surfaces.pjl_commands();
    for command in pjl::WEAKENING_SEQUENCE {
        assert!(commands.iter().any(|sent| sent == command));
    }
    assert_eq!(fsupload_count(&surfaces), flags::printing_port_subset().len());

    let html = std::fs::read_to_string(&report_path).unwrap();
    assert!(html.contains("127.0.0.1"));
    for entry in flags::catalogue() {
        assert!(html.contains(entry.flag));
    }

    // Telnet and FTP stay closed on the fake.
    let verification = summary.result_of("Configuration verification").unwrap();
    assert_eq!(
        verification.as_ref().unwrap(),
        &Outcome::Completed("3/5 checks passed".to_string())
    );
}

#[tokio::test]
async fn verify_only_leaves_the_printer_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("flags.html");
    let cfg = test_config(RunMode::VerifyOnly, &report_path, None);
    let surfaces = healthy_printer();

    let summary = Orchestrator::new(&surfaces, &cfg).run().await;

    let names: Vec<&str> = summary.steps.iter().map(|record| record.name).collect();
    assert_eq!(names, vec!["Connectivity verification", "Configuration verification"]);
    assert_eq!(surfaces.pjl_commands(), vec![pjl::INFO_STATUS.to_string()]);
    assert!(!surfaces.calls().iter().any(|c| matches!(c, Call::HttpPost(..))));
    assert!(!report_path.exists());
}

#[tokio::test]
async fn flags_only_writes_the_report_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("flags.html");
    let cfg = test_config(RunMode::FlagsOnly, &report_path, None);
    let surfaces = healthy_printer();

    let summary = Orchestrator::new(&surfaces, &cfg).run().await;

    assert_eq!(summary.steps.len(), 1);
    assert!(surfaces.calls().is_empty());
    assert!(report_path.exists());
}

#[tokio::test]
async fn dead_printer_still_runs_every_step() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("flags.html");
    let cfg = test_config(RunMode::Full, &report_path, None);
    let surfaces = RecordingSurfaces::offline();

    let summary = Orchestrator::new(&surfaces, &cfg).run().await;

    assert_eq!(summary.steps.len(), 7);
    assert!(matches!(
        summary.result_of("Connectivity verification"),
        Some(Ok(Outcome::Degraded(_)))
    ));
    assert!(matches!(summary.result_of("Web authentication"), Some(Err(_))));
    assert!(matches!(
        summary.result_of("SNMP configuration"),
        Some(Ok(Outcome::Degraded(_)))
    ));
    assert!(matches!(
        summary.result_of("Report generation"),
        Some(Ok(Outcome::Completed(_)))
    ));
    assert_eq!(
        summary.result_of("Configuration verification").unwrap().as_ref().unwrap(),
        &Outcome::Completed("0/5 checks passed".to_string())
    );
    assert_eq!(fsupload_count(&surfaces), 0);
    assert!(report_path.exists());
}

#[tokio::test]
async fn unwritable_report_fails_only_its_own_step() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("missing").join("flags.html");
    let cfg = test_config(RunMode::Full, &report_path, None);
    let surfaces = healthy_printer();

    let summary = Orchestrator::new(&surfaces, &cfg).run().await;

    assert!(matches!(summary.result_of("Report generation"), Some(Err(_))));
    assert!(summary.result_of("Configuration verification").unwrap().is_ok());
}
