//! Hole map to text.

use punchcard_codes::{CodeTable, HolePattern};
use punchcard_core::{CARD_COLUMNS, CARD_ROWS};
use serde::Serialize;

use crate::scan::HoleMap;

/// Character written for a column whose pattern is not in the code table.
pub const SENTINEL: char = '@';

/// One fully decoded card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedCard {
    /// Always 80 characters.
    pub text: String,
    /// Hole pattern of each column.
    pub patterns: Vec<HolePattern>,
    /// Measured run length per column and row, zero where no hole was found.
    pub surface: Vec<[u32; CARD_ROWS]>,
    /// Columns decoded as [`SENTINEL`] because their pattern is unknown.
    pub invalid: usize,
}

impl DecodedCard {
    /// A card nothing was read from: every column invalid.
    pub fn unread() -> Self {
        Self {
            text: std::iter::repeat(SENTINEL).take(CARD_COLUMNS).collect(),
            patterns: vec![HolePattern::EMPTY; CARD_COLUMNS],
            surface: vec![[0; CARD_ROWS]; CARD_COLUMNS],
            invalid: CARD_COLUMNS,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Decode every column of `holes` with `table`. Never fails.
pub fn decode_holes(holes: &HoleMap, table: &CodeTable) -> DecodedCard {
    let mut text = String::with_capacity(CARD_COLUMNS);
    let mut patterns = Vec::with_capacity(CARD_COLUMNS);
    let mut surface = Vec::with_capacity(CARD_COLUMNS);
    let mut invalid = 0;

    for col in 0..CARD_COLUMNS {
        let mut pattern = HolePattern::EMPTY;
        let mut widths = [0u32; CARD_ROWS];
        for (row, width) in widths.iter_mut().enumerate() {
            if let Some(run) = holes.get(col, row) {
                pattern.punch(row);
                *width = run;
            }
        }
        match table.decode(pattern) {
            Some(ch) => text.push(ch),
            None => {
                text.push(SENTINEL);
                invalid += 1;
            }
        }
        patterns.push(pattern);
        surface.push(widths);
    }

    DecodedCard {
        text,
        patterns,
        surface,
        invalid,
    }
}
