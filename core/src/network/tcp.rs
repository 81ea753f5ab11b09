use std::io::ErrorKind;
use std::time::Duration;

use ctfprint_common::error::SurfaceError;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Plain connect check. The connection is dropped right away.
///
/// Refused and timed-out connects mean "closed" and come back as `Ok(false)`.
/// Anything else (name resolution, unreachable network) is an error.
pub async fn connect_probe(authority: &str, probe_timeout: Duration) -> Result<bool, SurfaceError> {
    match timeout(probe_timeout, TcpStream::connect(authority)).await {
        Ok(Ok(_stream)) => Ok(true),
        Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => {
            debug!("{authority} refused the connection");
            Ok(false)
        }
        Ok(Err(e)) => Err(SurfaceError::Io(e)),
        Err(_elapsed) => {
            debug!("connect to {authority} timed out after {probe_timeout:?}");
            Ok(false)
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
