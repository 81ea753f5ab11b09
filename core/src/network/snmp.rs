//! One-shot SNMPv2c reads.
//!
//! `snmp2` only offers a blocking session here, so the query runs on the
//! blocking pool and is awaited before anything else happens.

use std::time::Duration;

use ctfprint_common::error::SurfaceError;
use snmp2::{Oid, SyncSession, Value};
use tracing::debug;

/// `SNMPv2-MIB::sysDescr.0`
pub const SYS_DESCR: &[u64] = &[1, 3, 6, 1, 2, 1, 1, 1, 0];

pub const READ_COMMUNITY: &str = "public";

pub async fn read_sys_descr(authority: String, query_timeout: Duration) -> Result<String, SurfaceError> {
    tokio::task::spawn_blocking(move || blocking_get_sys_descr(&authority, query_timeout))
        .await
        .map_err(|e| SurfaceError::Snmp(format!("query task aborted: {e}")))?
}

fn blocking_get_sys_descr(authority: &str, query_timeout: Duration) -> Result<String, SurfaceError> {
    let mut session = SyncSession::new_v2c(authority, READ_COMMUNITY.as_bytes(), Some(query_timeout), 0)?;
    let oid = Oid::from(SYS_DESCR).map_err(|e| SurfaceError::Snmp(format!("bad oid: {e:?}")))?;

    let response = session
        .get(&oid)
        .map_err(|e| SurfaceError::Snmp(format!("{e:?}")))?;

    if response.error_status != 0 {
        return Err(SurfaceError::Snmp(format!(
            "agent answered with error status {}",
            response.error_status
        )));
    }

    // Any clean answer proves the agent is there, even `noSuchObject`.
    match response.varbinds.into_iter().next() {
        Some((_, Value::OctetString(bytes))) => Ok(String::from_utf8_lossy(bytes).trim().to_string()),
        Some((_, other)) => {
            debug!("sysDescr.0 holds no text: {other:?}");
            Ok(String::new())
        }
        None => Ok(String::new()),
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
