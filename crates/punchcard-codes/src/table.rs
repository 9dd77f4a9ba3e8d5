//! Pattern ↔ character lookup built from a keypunch reference diagram.

use std::collections::HashMap;

use punchcard_core::CARD_ROWS;

use crate::HolePattern;

/// First diagram column holding a character; columns before it are row labels
/// and the frame.
const FIRST_CHAR_COLUMN: usize = 5;

/// Bidirectional mapping between hole patterns and characters.
#[derive(Clone, Debug)]
pub struct CodeTable {
    name: &'static str,
    by_pattern: HashMap<HolePattern, char>,
    by_char: HashMap<char, HolePattern>,
    /// Characters in diagram order.
    order: Vec<char>,
}

impl CodeTable {
    /// Parse an ASCII-art keypunch diagram.
    ///
    /// The first line lists the characters, the following twelve lines mark
    /// holes with `O` for rows `12, 11, 0 … 9`. Character columns run from the
    /// sixth column up to (excluding) the closing frame character of the
    /// header line. Short lines read as unpunched. If two columns share a
    /// pattern the later one wins.
    pub fn from_diagram(name: &'static str, diagram: &str) -> Self {
        let lines: Vec<Vec<char>> = diagram
            .trim_start_matches('\n')
            .lines()
            .map(|l| l.chars().collect())
            .collect();

        let mut table = Self {
            name,
            by_pattern: HashMap::new(),
            by_char: HashMap::new(),
            order: Vec::new(),
        };
        let Some(header) = lines.first() else {
            return table;
        };

        let end = header.len().saturating_sub(1);
        for col in FIRST_CHAR_COLUMN..end {
            let ch = header[col];
            let mut pattern = HolePattern::EMPTY;
            for row in 0..CARD_ROWS {
                let punched = lines
                    .get(row + 1)
                    .and_then(|line| line.get(col))
                    .is_some_and(|&c| c == 'O');
                if punched {
                    pattern.punch(row);
                }
            }
            if let Some(prev) = table.by_pattern.insert(pattern, ch) {
                table.by_char.remove(&prev);
                table.order.retain(|&c| c != prev);
            }
            table.by_char.insert(ch, pattern);
            table.order.push(ch);
        }
        table
    }

    /// Human-readable name (for debugging/logging).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Character punched as `pattern`, if the table knows it.
    #[inline]
    pub fn decode(&self, pattern: HolePattern) -> Option<char> {
        self.by_pattern.get(&pattern).copied()
    }

    /// Pattern that punches `ch`, if the table knows it.
    #[inline]
    pub fn encode(&self, ch: char) -> Option<HolePattern> {
        self.by_char.get(&ch).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(char, pattern)` entries in diagram order.
    pub fn iter(&self) -> impl Iterator<Item = (char, HolePattern)> + '_ {
        self.order.iter().map(move |&c| (c, self.by_char[&c]))
    }
}
