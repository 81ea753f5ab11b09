//! Shared data model for `ctfprint`.
//!
//! Everything in here is plain data: the printer [`network::target::Target`],
//! the run [`config::Config`], the reachability record
//! ([`network::surface::SurfaceStatus`]), the fixed flag catalogue and the
//! step result types. No module in this crate performs I/O.

pub mod config;
pub mod error;
pub mod flags;
pub mod network;
pub mod outcome;
