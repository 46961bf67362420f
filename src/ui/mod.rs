//! CLI UI utilities for terminal output.
//!
//! Colored status lines, result rendering (table, plain, JSON) and a
//! spinner that doubles as the search progress sink.

pub use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::time::Duration;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::conferences::ConferenceRegistry;
use crate::models::{PaperRecord, SearchReport};
use crate::utils::ProgressSink;

/// Get the current terminal width.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(100)
}

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
        Status::Search => "🔍",
    }
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Search,
}

/// Print a styled status message to stderr.
#[macro_export]
macro_rules! print_status {
    ($status:expr, $msg:expr) => {{
        use $crate::ui::{status_icon, OwoColorize, Status};
        let icon = status_icon($status);
        match $status {
            Status::Success => eprintln!("{} {}", icon.green().bold(), $msg),
            Status::Error => eprintln!("{} {}", icon.red().bold(), $msg),
            Status::Warning => eprintln!("{} {}", icon.yellow().bold(), $msg),
            Status::Info => eprintln!("{} {}", icon.cyan().bold(), $msg),
            Status::Search => eprintln!("{} {}", icon.yellow(), $msg),
        }
    }};
}

/// Format a number with commas.
pub fn format_number(n: usize) -> String {
    n.to_string()
        .chars()
        .rev()
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect()
}

/// Truncate text to fit within the specified width using unicode-aware truncation.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width <= 3 {
        return "...".to_string();
    }

    let total_width: usize = text
        .chars()
        .map(|c| unicode_width::UnicodeWidthChar::width(c).unwrap_or(1))
        .sum();
    if total_width <= max_width {
        return text.to_string();
    }

    let budget = max_width - 3;
    let mut width = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(1);
        if width + w > budget {
            break;
        }
        width += w;
        truncated.push(c);
    }

    format!("{}...", truncated)
}

/// Render papers as a table sized to `width` columns
pub fn render_table(records: &[PaperRecord], width: usize) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(width.min(u16::MAX as usize) as u16);
    table.set_header(vec!["Conference", "Year", "Title"]);

    // room left for the title after the two narrow columns and borders
    let title_width = width.saturating_sub(24).max(20);
    for record in records {
        table.add_row(vec![
            Cell::new(record.conference.to_uppercase()).add_attribute(Attribute::Bold),
            Cell::new(record.year),
            Cell::new(truncate_with_ellipsis(&record.title, title_width)),
        ]);
    }
    table.to_string()
}

/// Render papers one per line as `[VENUE YEAR] title`
pub fn render_plain(records: &[PaperRecord]) -> String {
    records
        .iter()
        .map(|record| format!("{}\n", record))
        .collect()
}

/// Render papers as pretty-printed JSON
pub fn render_json(records: &[PaperRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Render the conference catalog, optionally followed by the alias table
pub fn render_conferences(registry: &ConferenceRegistry, with_aliases: bool) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Abbreviation", "Name", "DBLP key"]);
    for entry in registry.entries() {
        table.add_row(vec![
            Cell::new(&entry.abbreviation).add_attribute(Attribute::Bold),
            Cell::new(&entry.display_name),
            Cell::new(&entry.dblp_key),
        ]);
    }

    let mut out = table.to_string();
    if with_aliases {
        let mut aliases = Table::new();
        aliases.load_preset(comfy_table::presets::UTF8_FULL);
        aliases.set_header(vec!["Alias", "Resolves to", "Known"]);
        for alias in registry.aliases() {
            let known = if registry.has(&alias.target) { "yes" } else { "no" };
            aliases.add_row(vec![
                Cell::new(&alias.alias),
                Cell::new(&alias.target),
                Cell::new(known),
            ]);
        }
        out.push('\n');
        out.push_str(&aliases.to_string());
    }
    out
}

/// Print a one-line summary of a finished search to stderr
pub fn print_report_summary(report: &SearchReport, duration: Duration) {
    let failed = report.failed_pairs().count();
    eprintln!(
        "{} Found {} matching papers out of {} crawled across {} searches in {:.2}s",
        status_icon(Status::Search).yellow().bold(),
        format_number(report.records.len()).green().bold(),
        format_number(report.total_titles()),
        report.pairs.len(),
        duration.as_secs_f64()
    );
    if failed > 0 {
        for pair in report.failed_pairs() {
            crate::print_status!(
                Status::Warning,
                format!(
                    "{} {}: {}",
                    pair.conference.to_uppercase(),
                    pair.year,
                    pair.error.as_deref().unwrap_or_default()
                )
            );
        }
    }
    if report.cancelled {
        crate::print_status!(Status::Warning, "Search cancelled; results are partial");
    }
}

/// Spinner that shows search progress on stderr.
///
/// Headers and routine lines replace the spinner message; outcome lines
/// (counts, missing data, errors) are printed above it and stay visible.
pub struct SpinnerProgress {
    pb: indicatif::ProgressBar,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .expect("static progress template")
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    /// A spinner that draws nothing
    pub fn hidden() -> Self {
        Self {
            pb: indicatif::ProgressBar::hidden(),
        }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for SpinnerProgress {
    fn report(&self, message: &str) {
        let message = message.trim();
        if message.starts_with("Error") {
            self.pb.println(format!("  {} {}", status_icon(Status::Error).red(), message.red()));
        } else if message.starts_with("Crawled") {
            self.pb.println(format!("  {} {}", status_icon(Status::Success).green(), message));
        } else if message.starts_with("No ") {
            self.pb.println(format!("  {} {}", status_icon(Status::Warning).yellow(), message.dimmed()));
        } else if message.starts_with("=====") {
            self.pb.println(message.bold().to_string());
            self.pb.set_message(message.trim_matches(|c| c == '=' || c == ' ').to_string());
        } else {
            self.pb.set_message(message.to_string());
        }
    }
}
