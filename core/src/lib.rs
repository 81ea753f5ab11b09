//! # ctfprint core
//!
//! Talks to the printer and runs the configuration pipeline.
//!
//! * **[`network`]**: the [`network::PrinterSurfaces`] seam and its
//!   production implementation, [`network::link::PrinterLink`].
//! * **[`pipeline`]**: the ordered steps and the orchestrator running them.
//! * **[`report`]**: the static HTML flag report.

pub mod network;
pub mod pipeline;
pub mod report;
