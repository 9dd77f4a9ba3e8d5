//! ASCII-art rendering of a decoded card.

use std::fmt::Write;

use punchcard_core::{CARD_COLUMNS, CARD_ROWS};

use crate::result::CardReadResult;

/// What each hole position shows in a dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpFormat {
    /// `O` for a hole, `.` otherwise.
    Markers,
    /// Measured run length as `(n)`, `.` otherwise.
    Raw,
}

impl DumpFormat {
    fn label(self) -> &'static str {
        match self {
            DumpFormat::Markers => "Dump",
            DumpFormat::Raw => "Raw",
        }
    }
}

/// Render `result` as a framed card picture.
///
/// `id` names the source (typically the image path) in the header line.
pub fn render_dump(result: &CardReadResult, id: &str, format: DumpFormat) -> String {
    let ruler: String = "123456789-".repeat(CARD_COLUMNS / 10);
    let text = result.text();
    let pad = CARD_COLUMNS.saturating_sub(text.chars().count());

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        " Card Dump of Image file: {} Format {} threshold= {} trials= {}",
        id,
        format.label(),
        result.threshold,
        result.trial_count()
    );
    let _ = writeln!(out, " {ruler}");
    let _ = writeln!(out, " {} ", "_".repeat(CARD_COLUMNS));
    let _ = writeln!(out, "/{}{}|", text, "_".repeat(pad));
    for row in 0..CARD_ROWS {
        out.push('|');
        match format {
            DumpFormat::Markers => {
                for pattern in &result.decoded.patterns {
                    out.push(if pattern.has_hole(row) { 'O' } else { '.' });
                }
            }
            DumpFormat::Raw => {
                for widths in &result.decoded.surface {
                    match widths[row] {
                        0 => out.push('.'),
                        w => {
                            let _ = write!(out, "({w})");
                        }
                    }
                }
            }
        }
        out.push_str("|\n");
    }
    let _ = writeln!(out, "`{}'", "-".repeat(CARD_COLUMNS));
    let _ = writeln!(out, " {ruler}");
    out.push('\n');
    out
}
