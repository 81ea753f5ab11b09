use ctfprint_common::config::RunMode;
use ctfprint_common::network::surface::{Surface, SurfaceStatus};
use ctfprint_common::outcome::Outcome;
use ctfprint_core::network::{WebAuth, pjl};
use ctfprint_core::pipeline::auth::{ADMIN_PATH, authenticate_web};
use ctfprint_core::pipeline::planter::{FlagSite, plant_flags};
use ctfprint_core::pipeline::verify::verify_configuration;
use ctfprint_core::pipeline::weaken::{SETTINGS_PATH, enable_vulnerable_protocols};
use ctfprint_core::pipeline::RunState;

use crate::util::{Call, RecordingSurfaces, test_config};

#[tokio::test]
async fn authenticator_reads_status_codes() {
    let ok = authenticate_web(&RecordingSurfaces::offline().with_web(200)).await;
    assert!(matches!(ok, Ok(Outcome::Completed(_))));

    let rejected = authenticate_web(&RecordingSurfaces::offline().with_web(401)).await;
    assert!(matches!(rejected, Ok(Outcome::Degraded(_))));

    let other = authenticate_web(&RecordingSurfaces::offline().with_web(302)).await;
    assert!(matches!(other, Ok(Outcome::Completed(_))));

    let unreachable = authenticate_web(&RecordingSurfaces::offline()).await;
    assert!(unreachable.is_err());
}

#[tokio::test]
async fn authenticator_uses_admin_credential_on_admin_path() {
    let surfaces = RecordingSurfaces::offline().with_web(200);
    authenticate_web(&surfaces).await.unwrap();

    assert_eq!(
        surfaces.calls(),
        vec![Call::HttpGet(ADMIN_PATH.to_string(), WebAuth::Admin)]
    );
}

#[tokio::test]
async fn weakener_sends_the_sequence_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(RunMode::Full, &dir.path().join("r.html"), None);
    let surfaces = RecordingSurfaces::offline().with_pjl("");

    let result = enable_vulnerable_protocols(&surfaces, &cfg, RunState::default()).await;

    assert_eq!(result.unwrap(), Outcome::Completed("enabled protocols: PJL".to_string()));
    assert_eq!(surfaces.pjl_commands(), pjl::WEAKENING_SEQUENCE.to_vec());
}

#[tokio::test]
async fn weakener_survives_a_dead_printing_port() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(RunMode::Full, &dir.path().join("r.html"), None);
    let surfaces = RecordingSurfaces::offline();
    let state = RunState {
        status: SurfaceStatus::default().mark(Surface::Snmp),
        ..RunState::default()
    };

    let result = enable_vulnerable_protocols(&surfaces, &cfg, state).await;

    assert_eq!(
        result.unwrap(),
        Outcome::Completed("enabled protocols: SNMP, PJL".to_string())
    );
    assert_eq!(surfaces.pjl_commands().len(), pjl::WEAKENING_SEQUENCE.len());
}

#[tokio::test]
async fn web_password_removal_is_opt_in() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = test_config(RunMode::Full, &dir.path().join("r.html"), None);
    let state = RunState {
        auth: WebAuth::Admin,
        ..RunState::default()
    };

    let surfaces = RecordingSurfaces::offline().with_web(200).with_pjl("");
    enable_vulnerable_protocols(&surfaces, &cfg, state).await.unwrap();
    assert!(!surfaces.calls().iter().any(|c| matches!(c, Call::HttpPost(..))));

    cfg.disable_web_auth = true;
    let surfaces = RecordingSurfaces::offline().with_web(200).with_pjl("");
    let result = enable_vulnerable_protocols(&surfaces, &cfg, state).await;

    assert_eq!(
        result.unwrap(),
        Outcome::Completed("enabled protocols: PJL, Web".to_string())
    );
    assert!(surfaces
        .calls()
        .contains(&Call::HttpPost(SETTINGS_PATH.to_string(), WebAuth::Admin)));
}

#[tokio::test]
async fn planter_only_touches_reachable_surfaces() {
    let surfaces = RecordingSurfaces::offline().with_pjl("@PJL FSUPLOAD\r\n");

    let report = plant_flags(&surfaces, SurfaceStatus::default()).await;

    assert_eq!(report.sites, vec![FlagSite::AdvancedScenarios]);
    assert!(surfaces.calls().is_empty());
}

#[tokio::test]
async fn planter_writes_one_file_per_printing_port_flag() {
    let surfaces = RecordingSurfaces::offline().with_pjl("ok");
    let status = SurfaceStatus::default()
        .mark(Surface::PrintingPort)
        .mark(Surface::Web)
        .mark(Surface::Snmp);

    let report = plant_flags(&surfaces, status).await;

    assert_eq!(
        report.sites,
        vec![
            FlagSite::SnmpMib,
            FlagSite::PrinterFilesystem,
            FlagSite::WebInterface,
            FlagSite::AdvancedScenarios,
        ]
    );
    assert_eq!(report.acknowledged_writes, 5);
    assert_eq!(
        surfaces.pjl_commands(),
        vec![
            "@PJL FSUPLOAD NAME=\"0:/flag1.txt\" SIZE=20",
            "@PJL FSUPLOAD NAME=\"0:/flag2.txt\" SIZE=20",
            "@PJL FSUPLOAD NAME=\"0:/flag3.txt\" SIZE=18",
            "@PJL FSUPLOAD NAME=\"0:/flag4.txt\" SIZE=23",
            "@PJL FSUPLOAD NAME=\"0:/flag5.txt\" SIZE=20",
        ]
    );
    // SNMP and web placements are simulated and never reach the printer.
    assert!(!surfaces.calls().contains(&Call::Snmp));
    assert!(!surfaces.calls().iter().any(|c| matches!(c, Call::HttpGet(..) | Call::HttpPost(..))));
}

#[tokio::test]
async fn silent_printer_leaves_writes_unacknowledged() {
    let surfaces = RecordingSurfaces::offline().with_pjl("");
    let status = SurfaceStatus::default().mark(Surface::PrintingPort);

    let report = plant_flags(&surfaces, status).await;

    assert_eq!(report.acknowledged_writes, 0);
    assert!(report.sites.contains(&FlagSite::PrinterFilesystem));
}

#[tokio::test]
async fn verifier_records_every_check_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(RunMode::VerifyOnly, &dir.path().join("r.html"), None);
    let surfaces = RecordingSurfaces::offline()
        .with_web(401)
        .with_pjl("CODE=10001")
        .with_open_port(23);

    let report = verify_configuration(&surfaces, &cfg.target, WebAuth::Anonymous).await;

    let names: Vec<&str> = report.checks.iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["snmp_public", "pjl_access", "web_access", "telnet", "ftp"]);
    assert_eq!(report.get("snmp_public"), Some(false));
    assert_eq!(report.get("pjl_access"), Some(true));
    // Only a plain 200 passes the web check.
    assert_eq!(report.get("web_access"), Some(false));
    assert_eq!(report.get("telnet"), Some(true));
    assert_eq!(report.get("ftp"), Some(false));
    assert_eq!(report.summary(), "2/5 checks passed");
}

#[tokio::test]
async fn verifier_probes_legacy_ports() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(RunMode::VerifyOnly, &dir.path().join("r.html"), None);
    let surfaces = RecordingSurfaces::offline();

    verify_configuration(&surfaces, &cfg.target, WebAuth::Anonymous).await;

    let calls = surfaces.calls();
    assert!(calls.contains(&Call::TcpOpen(23)));
    assert!(calls.contains(&Call::TcpOpen(21)));
    assert!(calls.contains(&Call::Pjl(pjl::INFO_STATUS.to_string())));
}
