use ctfprint_common::config::RunMode;
use ctfprint_common::network::surface::{Surface, SurfaceStatus};
use ctfprint_core::pipeline::connectivity::verify_connectivity;

use crate::util::{Call, RecordingSurfaces, test_config};

#[tokio::test]
async fn unauthorized_web_counts_as_reachable() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(RunMode::Full, &dir.path().join("r.html"), None);
    let surfaces = RecordingSurfaces::offline().with_web(401);

    let (status, web_ok) = verify_connectivity(&surfaces, &cfg.target, SurfaceStatus::default()).await;

    assert!(web_ok);
    assert!(status.is_reachable(Surface::Web));
    assert!(!status.is_reachable(Surface::PrintingPort));
    assert!(!status.is_reachable(Surface::Snmp));
}

#[tokio::test]
async fn forbidden_and_ok_are_reachable_but_server_errors_are_not() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(RunMode::Full, &dir.path().join("r.html"), None);

    for (code, expected) in [(200, true), (403, true), (404, false), (500, false)] {
        let surfaces = RecordingSurfaces::offline().with_web(code);
        let (_, web_ok) = verify_connectivity(&surfaces, &cfg.target, SurfaceStatus::default()).await;
        assert_eq!(web_ok, expected, "HTTP {code}");
    }
}

#[tokio::test]
async fn failed_web_probe_does_not_stop_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(RunMode::Full, &dir.path().join("r.html"), None);
    let surfaces = RecordingSurfaces::offline()
        .with_open_port(9100)
        .with_snmp("HP Color LaserJet Pro MFP 4301");

    let (status, web_ok) = verify_connectivity(&surfaces, &cfg.target, SurfaceStatus::default()).await;

    assert!(!web_ok);
    assert!(status.is_reachable(Surface::PrintingPort));
    assert!(status.is_reachable(Surface::Snmp));
    assert_eq!(surfaces.calls().len(), 3);
    assert!(surfaces.calls().contains(&Call::TcpOpen(9100)));
}

#[tokio::test]
async fn probe_keeps_previously_seen_surfaces() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(RunMode::Full, &dir.path().join("r.html"), None);
    let surfaces = RecordingSurfaces::offline();
    let before = SurfaceStatus::default().mark(Surface::Snmp);

    let (after, _) = verify_connectivity(&surfaces, &cfg.target, before).await;

    assert!(after.is_reachable(Surface::Snmp));
}
