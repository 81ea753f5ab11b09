//! # Flag Report
//!
//! Renders the static HTML document handed to organisers: statistics, one
//! table row per flag and fixed methodology/tooling/safety sections.
//!
//! Table columns are, in order: ID, Flag, Difficulty, Location/Technique,
//! Points. Scoring tools parse that layout, so it must not change.
//!
//! Rendering is pure. The only varying input is the `generated_at` text.

use std::fmt;
use std::io;
use std::path::Path;

use ctfprint_common::flags::{self, CatalogueEntry, Tier};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>HP Printer CTF Flag Report</title>
    <style>
        body { font-family: Arial; margin: 20px; background: #f0f0f0; }
        .container { max-width: 1200px; margin: 0 auto; background: white; padding: 20px; border-radius: 10px; }
        h1 { color: #333; border-bottom: 3px solid #4CAF50; padding-bottom: 10px; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th { background: #4CAF50; color: white; padding: 12px; text-align: left; }
        td { padding: 10px; border-bottom: 1px solid #ddd; }
        tr:hover { background: #f5f5f5; }
        .easy { color: green; font-weight: bold; }
        .medium { color: orange; font-weight: bold; }
        .hard { color: red; font-weight: bold; }
        .flag-code { font-family: 'Courier New'; background: #f0f0f0; padding: 2px 5px; border-radius: 3px; }
        .stats { background: #e8f5e9; padding: 15px; border-radius: 5px; margin: 20px 0; }
    </style>
</head>
<body>
    <div class="container">
        <h1>🖨️ HP Color LaserJet Pro MFP 4301 CTF - Star Wars Edition</h1>
"#;

const TABLE_HEAD: &str = r#"
        <h2>Flag Details</h2>
        <table>
            <thead>
                <tr>
                    <th>ID</th>
                    <th>Flag</th>
                    <th>Difficulty</th>
                    <th>Location/Technique</th>
                    <th>Points</th>
                </tr>
            </thead>
            <tbody>"#;

const TAIL: &str = r#"
            </tbody>
        </table>

        <h2>Attack Methodology</h2>
        <h3>Phase 1: Reconnaissance (Easy Flags)</h3>
        <ul>
            <li>Network scanning: nmap -p 21,23,80,161,515,631,9100</li>
            <li>SNMP enumeration: snmpwalk -v2c -c public [IP]</li>
            <li>Service banner grabbing: nc [IP] [PORT]</li>
            <li>Web interface inspection: curl and browser DevTools</li>
        </ul>

        <h3>Phase 2: Exploitation (Medium Flags)</h3>
        <ul>
            <li>PJL exploitation: PRET framework or manual netcat</li>
            <li>Directory traversal: Test ../ in file paths</li>
            <li>Pass-back attacks: Modify LDAP/SMTP settings, capture with Responder</li>
            <li>Print job capture: PostScript operator redefinition</li>
        </ul>

        <h3>Phase 3: Advanced Attacks (Hard Flags)</h3>
        <ul>
            <li>Persistent compromise: PostScript malware injection</li>
            <li>Firmware analysis: Extract, reverse engineer with binwalk</li>
            <li>Multi-stage attacks: Combine multiple vulnerabilities</li>
            <li>Network pivoting: Use printer as attack platform</li>
        </ul>

        <h2>Required Tools</h2>
        <ul>
            <li><strong>PRET:</strong> Printer Exploitation Toolkit (primary tool)</li>
            <li><strong>nmap:</strong> Network scanning and enumeration</li>
            <li><strong>snmpwalk/snmpget:</strong> SNMP enumeration</li>
            <li><strong>Responder:</strong> Credential capture for pass-back attacks</li>
            <li><strong>Metasploit:</strong> Automated printer exploitation modules</li>
            <li><strong>netcat:</strong> Manual protocol testing</li>
            <li><strong>curl/wget:</strong> Web interface testing</li>
        </ul>

        <h2>Safety Reminders</h2>
        <div style="background: #fff3cd; padding: 15px; border-left: 4px solid #ffc107; margin: 20px 0;">
            <strong>⚠️ WARNING:</strong> This printer is intentionally vulnerable and must only be used in isolated networks.
            <ul>
                <li>Never connect to production networks</li>
                <li>Use dedicated VLAN or air-gapped network</li>
                <li>Factory reset after CTF completion</li>
                <li>Update firmware to latest version post-event</li>
            </ul>
        </div>
    </div>
</body>
</html>
"#;

/// The report for one printer. Render it with `to_string()`.
pub struct FlagReport<'a> {
    host: &'a str,
    generated_at: &'a str,
    entries: Vec<CatalogueEntry>,
}

impl<'a> FlagReport<'a> {
    pub fn new(host: &'a str, generated_at: &'a str) -> Self {
        Self {
            host,
            generated_at,
            entries: flags::catalogue(),
        }
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    fn write_stats(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, r#"        <div class="stats">"#)?;
        writeln!(f, "            <h2>Statistics</h2>")?;
        writeln!(f, "            <p><strong>Printer IP:</strong> {}</p>", escape_html(self.host))?;
        writeln!(f, "            <p><strong>Total Flags:</strong> {}</p>", self.entries.len())?;
        for tier in Tier::ALL {
            writeln!(
                f,
                "            <p><strong>{} Flags:</strong> {}</p>",
                tier.label(),
                tier.flags().len()
            )?;
        }
        writeln!(
            f,
            "            <p><strong>Configuration Date:</strong> {}</p>",
            escape_html(self.generated_at)
        )?;
        writeln!(f, "        </div>")
    }

    fn write_row(f: &mut fmt::Formatter<'_>, entry: &CatalogueEntry) -> fmt::Result {
        let placement = entry.placement;
        write!(
            f,
            r#"
                <tr>
                    <td>{:03}</td>
                    <td class="flag-code">{}</td>
                    <td class="{}">{}</td>
                    <td>{} - {}</td>
                    <td>{}</td>
                </tr>"#,
            entry.id,
            escape_html(entry.flag),
            entry.tier.css_class(),
            entry.tier.label(),
            escape_html(placement.location),
            escape_html(placement.technique),
            placement.points,
        )
    }
}

impl fmt::Display for FlagReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEAD)?;
        self.write_stats(f)?;
        f.write_str(TABLE_HEAD)?;
        for entry in &self.entries {
            Self::write_row(f, entry)?;
        }
        f.write_str(TAIL)
    }
}

/// Renders the full document.
pub fn render(host: &str, generated_at: &str) -> String {
    FlagReport::new(host, generated_at).to_string()
}

/// Writes `html` to `path`, replacing whatever was there.
pub async fn write_report(path: &Path, html: &str) -> io::Result<()> {
    tokio::fs::write(path, html).await
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
