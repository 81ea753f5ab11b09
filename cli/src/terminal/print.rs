use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Target of every line written by this module. The formatter colours these
/// by [`Tone`] on the terminal and leaves them plain in the log file.
pub const PRINT_TARGET: &str = "ctfprint::print";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    Rule,
    Warning,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Plain => "plain",
            Tone::Title => "title",
            Tone::Rule => "rule",
            Tone::Warning => "warning",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Tone::Plain),
            "title" => Some(Tone::Title),
            "rule" => Some(Tone::Rule),
            "warning" => Some(Tone::Warning),
            _ => None,
        }
    }
}

pub fn print(msg: &str, tone: Tone) {
    info!(target: PRINT_TARGET, tone = tone.as_str(), "{msg}");
}

pub fn banner() {
    let text = format!("⟦ CTFPRINT v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let sep = "═".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(&text)) / 2);

    print(&format!("{sep}{text}{sep}"), Tone::Title);
}

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg.to_uppercase());
    let dash_count = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&formatted));
    let left = dash_count / 2;
    let right = dash_count - left;

    print(&format!("{}{formatted}{}", "─".repeat(left), "─".repeat(right)), Tone::Title);
}

pub fn centerln(msg: &str, tone: Tone) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}{space}"), tone);
}

/// Shown before anything touches the network.
pub fn isolation_warning() {
    centerln("Only use in isolated networks. Never against production.", Tone::Warning);
}

pub fn end_of_program() {
    print(&"═".repeat(TOTAL_WIDTH), Tone::Rule);
}
