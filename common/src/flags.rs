//! # Flag Catalogue
//!
//! The fixed set of marker strings planted on the printer, split into three
//! difficulty tiers. Each tier pairs its flags with a [`Placement`] table by
//! position. Both sides are fixed-size arrays of the same length, so a tier
//! cannot gain a flag without also gaining a placement.

use std::fmt;

/// Where a flag lives and how a participant is expected to reach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub location: &'static str,
    pub technique: &'static str,
    pub points: u32,
}

const fn placement(location: &'static str, technique: &'static str, points: u32) -> Placement {
    Placement { location, technique, points }
}

pub const EASY_FLAGS: [&str; 10] = [
    "FLAG{LUKE87654321}",
    "FLAG{LEIA98765432}",
    "FLAG{HAN12345678}",
    "FLAG{CHEWIE23456789}",
    "FLAG{OBIWAN34567890}",
    "FLAG{YODA45678901}",
    "FLAG{R2D256789012}",
    "FLAG{C3PO67890123}",
    "FLAG{PADME78901234}",
    "FLAG{ANAKIN89012345}",
];

pub const MEDIUM_FLAGS: [&str; 7] = [
    "FLAG{MACEWINDU90123456}",
    "FLAG{QUIGON01234567}",
    "FLAG{DARTHMAUL12345098}",
    "FLAG{COUNTDOOKU23456109}",
    "FLAG{GRIEVOUS34567210}",
    "FLAG{JANGO45678321}",
    "FLAG{BOBAFETT56789432}",
];

pub const HARD_FLAGS: [&str; 5] = [
    "FLAG{PALPATINE67890543}",
    "FLAG{DARTHVADER78901654}",
    "FLAG{REVAN89012765}",
    "FLAG{MALAGUS90123876}",
    "FLAG{THRAWN01234987}",
];

pub const EASY_PLACEMENTS: [Placement; 10] = [
    placement("SNMP sysContact field", "SNMP enumeration", 10),
    placement("SNMP sysLocation field", "SNMP enumeration", 10),
    placement("SNMP custom OID 1.3.6.1.4.1.9999.1.1.1", "SNMP MIB walking", 15),
    placement("PJL filesystem: 0:/flag1.txt", "PJL FSDIRLIST", 15),
    placement("PJL INFO STATUS response", "PJL command injection", 20),
    placement("Web HTML comment on /index.html", "Web source inspection", 10),
    placement("HTTP header X-Printer-Flag", "HTTP header analysis", 15),
    placement("Telnet banner message", "Service enumeration", 10),
    placement("FTP welcome banner", "FTP anonymous login", 10),
    placement("Default admin credentials", "Authentication bypass", 20),
];

pub const MEDIUM_PLACEMENTS: [Placement; 7] = [
    placement("SNMP write community string test", "SNMP SET operations", 25),
    placement("PJL filesystem: 0:/../../../flag2.txt", "PJL path traversal", 30),
    placement("Web configuration file /config/settings.xml", "Directory traversal", 30),
    placement("Print job metadata capture", "Job interception", 35),
    placement("LDAP pass-back attack", "Credential capture", 40),
    placement("PostScript file read exploit", "PostScript exploitation", 35),
    placement("IPP attribute manipulation", "IPP protocol abuse", 30),
];

pub const HARD_PLACEMENTS: [Placement; 5] = [
    placement("SMTP credential capture (pass-back)", "Advanced pass-back attack", 50),
    placement("PostScript persistent capture", "Job interception persistence", 45),
    placement("Firmware extraction and analysis", "Binary reverse engineering", 50),
    placement("CORS spoofing attack", "Advanced web exploitation", 45),
    placement("Combined multi-stage attack", "Full exploitation chain", 50),
];

/// Web sites a web-surface flag is assigned to, cycled in order.
pub const WEB_LOCATIONS: [&str; 5] = [
    "HTML comments",
    "JavaScript variables",
    "Hidden form fields",
    "Cookie values",
    "HTTP headers",
];

/// Named attack scenarios for the flags that need real exploitation.
pub const ADVANCED_SCENARIOS: [(&str, &str); 5] = [
    ("Pass-back attack", "LDAP/SMTP credential capture"),
    ("LSASS memory", "Simulated credential dump"),
    ("Print job capture", "Document interception"),
    ("Firmware extraction", "Binary analysis"),
    ("PostScript execution", "Code execution scenario"),
];

/// Enterprise subtree the SNMP flags are meant to live under.
pub const SNMP_FLAG_SUBTREE: &str = "1.3.6.1.4.1.9999.1.1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
        }
    }

    /// CSS class used by the report for this tier.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        }
    }

    pub fn flags(&self) -> &'static [&'static str] {
        match self {
            Tier::Easy => &EASY_FLAGS,
            Tier::Medium => &MEDIUM_FLAGS,
            Tier::Hard => &HARD_FLAGS,
        }
    }

    pub fn placements(&self) -> &'static [Placement] {
        match self {
            Tier::Easy => &EASY_PLACEMENTS,
            Tier::Medium => &MEDIUM_PLACEMENTS,
            Tier::Hard => &HARD_PLACEMENTS,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the catalogue, numbered from 1 across all tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub id: usize,
    pub flag: &'static str,
    pub tier: Tier,
    pub placement: &'static Placement,
}

/// Every flag in report order: easy, then medium, then hard.
pub fn catalogue() -> Vec<CatalogueEntry> {
    Tier::ALL
        .into_iter()
        .flat_map(|tier| {
            tier.flags()
                .iter()
                .zip(tier.placements())
                .map(move |(flag, placement)| (tier, *flag, placement))
        })
        .enumerate()
        .map(|(idx, (tier, flag, placement))| CatalogueEntry {
            id: idx + 1,
            flag,
            tier,
            placement,
        })
        .collect()
}

pub fn total_flags() -> usize {
    Tier::ALL.iter().map(|tier| tier.flags().len()).sum()
}

/// Flags meant for the SNMP MIB: easy 1-3.
pub fn snmp_subset() -> Vec<&'static str> {
    EASY_FLAGS[..3].to_vec()
}

/// Flags written to the printer filesystem: easy 4-6 and medium 1-2.
pub fn printing_port_subset() -> Vec<&'static str> {
    EASY_FLAGS[3..6].iter().chain(&MEDIUM_FLAGS[..2]).copied().collect()
}

/// Flags hidden in the web interface: easy 7-10 and medium 3-4.
pub fn web_subset() -> Vec<&'static str> {
    EASY_FLAGS[6..].iter().chain(&MEDIUM_FLAGS[2..4]).copied().collect()
}

/// Flags that need an exploitation scenario: medium 5-7 and all hard flags.
pub fn advanced_subset() -> Vec<&'static str> {
    MEDIUM_FLAGS[4..].iter().chain(&HARD_FLAGS).copied().collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
