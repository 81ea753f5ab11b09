//! Reachability record for the printer's network surfaces.
//!
//! A [`SurfaceStatus`] is a small `Copy` value. Steps never mutate it in
//! place; they return a new one built with [`SurfaceStatus::mark`] or
//! [`SurfaceStatus::merge`]. Neither operation can clear a flag, so once a
//! surface has been seen reachable it stays reachable for the whole run.

use std::fmt;

/// A network-facing part of the printer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Embedded web server (HTTP or HTTPS).
    Web,
    /// Raw printing port accepting PJL commands.
    PrintingPort,
    /// SNMP agent answering the `public` community.
    Snmp,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Web, Surface::PrintingPort, Surface::Snmp];

    pub fn label(&self) -> &'static str {
        match self {
            Surface::Web => "web",
            Surface::PrintingPort => "printing-port",
            Surface::Snmp => "snmp",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceStatus {
    web: bool,
    printing_port: bool,
    snmp: bool,
}

impl SurfaceStatus {
    pub fn is_reachable(&self, surface: Surface) -> bool {
        match surface {
            Surface::Web => self.web,
            Surface::PrintingPort => self.printing_port,
            Surface::Snmp => self.snmp,
        }
    }

    /// Returns a status with `surface` marked reachable.
    #[must_use]
    pub fn mark(self, surface: Surface) -> Self {
        match surface {
            Surface::Web => Self { web: true, ..self },
            Surface::PrintingPort => Self { printing_port: true, ..self },
            Surface::Snmp => Self { snmp: true, ..self },
        }
    }

    /// Union of two observations.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            web: self.web || other.web,
            printing_port: self.printing_port || other.printing_port,
            snmp: self.snmp || other.snmp,
        }
    }

    pub fn reachable(&self) -> impl Iterator<Item = Surface> + '_ {
        Surface::ALL.into_iter().filter(|surface| self.is_reachable(*surface))
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
