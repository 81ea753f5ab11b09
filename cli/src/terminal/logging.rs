use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{self as fmt_layer, FmtContext, FormatEvent};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use super::print::{PRINT_TARGET, Tone};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// `<timestamp> - <LEVEL> - <symbol> <message>`
///
/// Only the terminal variant emits colour. Messages always arrive plain;
/// lines from [`PRINT_TARGET`] are painted here according to their tone.
pub struct CtfFormatter {
    ansi: bool,
}

impl CtfFormatter {
    pub fn terminal() -> Self {
        Self { ansi: true }
    }

    pub fn plain() -> Self {
        Self { ansi: false }
    }
}

/// Message and tone of a [`PRINT_TARGET`] event.
struct PrintLine {
    message: String,
    tone: Tone,
}

impl Default for PrintLine {
    fn default() -> Self {
        Self {
            message: String::new(),
            tone: Tone::Plain,
        }
    }
}

impl Visit for PrintLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "tone" {
            self.tone = Tone::from_name(value).unwrap_or(Tone::Plain);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

fn paint(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Title => text.bright_green().bold(),
        Tone::Rule => text.bright_black(),
        Tone::Warning => text.yellow().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for CtfFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{timestamp} - {:<5} - ", meta.level())?;

        if self.ansi {
            write!(writer, "{} ", color_func(symbol.into()))?;
        } else {
            write!(writer, "{symbol} ")?;
        }

        if meta.target() == PRINT_TARGET {
            let mut line = PrintLine::default();
            event.record(&mut line);

            if self.ansi {
                write!(writer, "{}", paint(line.tone, &line.message))?;
            } else {
                write!(writer, "{}", line.message)?;
            }
        } else {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
        }

        writeln!(writer)
    }
}

fn open_log_file(log_path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(log_path)
}

/// Sends every event to stdout and appends it to `log_path`.
///
/// A log file that cannot be opened is reported and skipped; stdout logging
/// still works.
pub fn init_logging(log_path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let terminal_layer = fmt_layer::layer().event_format(CtfFormatter::terminal());

    let (file_layer, file_error) = match open_log_file(log_path) {
        Ok(file) => {
            let layer = fmt_layer::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .event_format(CtfFormatter::plain());
            (Some(layer), None)
        }
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(terminal_layer)
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!("Cannot open log file {}: {e}; logging to stdout only", log_path.display());
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
