//! The central **abstraction** over the printer's network surfaces.
//!
//! Pipeline steps only ever talk to a [`PrinterSurfaces`] implementation.
//! [`link::PrinterLink`] is the one that opens real sockets; tests swap in
//! recording fakes.
//!
//! Every method performs exactly one attempt bounded by its configured
//! timeout. Nothing here retries.

use async_trait::async_trait;
use ctfprint_common::error::SurfaceError;

pub mod link;
pub mod pjl;
pub mod snmp;
pub mod tcp;
pub mod web;

/// Whether a web request carries the admin credential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WebAuth {
    #[default]
    Anonymous,
    /// Attach `admin:<pin>` as basic auth. Without a PIN this sends nothing.
    Admin,
}

#[async_trait]
pub trait PrinterSurfaces: Send + Sync {
    /// GETs `path` on the web interface and returns the final status code.
    async fn http_get(&self, path: &str, auth: WebAuth) -> Result<u16, SurfaceError>;

    /// POSTs `form` url-encoded to `path` and returns the final status code.
    async fn http_post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        auth: WebAuth,
    ) -> Result<u16, SurfaceError>;

    /// Sends one framed PJL command on a fresh connection and returns the
    /// printer's reply, empty if it closed without answering.
    async fn pjl(&self, command: &str) -> Result<String, SurfaceError>;

    /// Reads `sysDescr.0` with the `public` community.
    async fn snmp_sys_descr(&self) -> Result<String, SurfaceError>;

    /// Tries a plain TCP connect to `port`.
    async fn tcp_open(&self, port: u16) -> Result<bool, SurfaceError>;
}
