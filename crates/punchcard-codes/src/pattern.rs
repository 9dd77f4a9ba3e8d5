//! Per-column hole patterns.

use std::fmt;

use punchcard_core::CARD_ROWS;
use serde::{Deserialize, Serialize};

/// Holes punched in one card column, one bit per row.
///
/// Bit `r` is row index `r` in top-to-bottom order (`12, 11, 0, 1, …, 9`).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct HolePattern(u16);

impl HolePattern {
    /// A column with no holes (blank).
    pub const EMPTY: HolePattern = HolePattern(0);

    const MASK: u16 = (1 << CARD_ROWS) - 1;

    /// Build from raw bits; bits above row 11 are dropped.
    #[inline]
    pub fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Build from the row indices that carry a hole. Out-of-range rows are ignored.
    pub fn from_rows<I: IntoIterator<Item = usize>>(rows: I) -> Self {
        let mut p = Self::EMPTY;
        for r in rows {
            p.punch(r);
        }
        p
    }

    #[inline]
    pub fn has_hole(self, row: usize) -> bool {
        row < CARD_ROWS && (self.0 >> row) & 1 == 1
    }

    #[inline]
    pub fn punch(&mut self, row: usize) {
        if row < CARD_ROWS {
            self.0 |= 1 << row;
        }
    }

    #[inline]
    pub fn hole_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Row indices carrying a hole, top to bottom.
    pub fn rows(self) -> impl Iterator<Item = usize> {
        (0..CARD_ROWS).filter(move |&r| self.has_hole(r))
    }
}

impl fmt::Display for HolePattern {
    /// Conventional punch notation, e.g. `12-3-8`; blank columns print as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::EMPTY {
            return f.write_str("-");
        }
        let mut first = true;
        for r in self.rows() {
            if !first {
                f.write_str("-")?;
            }
            f.write_str(punchcard_core::ROW_LABELS[r])?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_ignores_out_of_range_rows() {
        let p = HolePattern::from_rows([0, 5, 12, 40]);
        assert_eq!(p.rows().collect::<Vec<_>>(), vec![0, 5]);
        assert_eq!(p.hole_count(), 2);
    }

    #[test]
    fn display_uses_punch_notation() {
        assert_eq!(HolePattern::from_rows([0, 5, 10]).to_string(), "12-3-8");
        assert_eq!(HolePattern::from_rows([2, 3]).to_string(), "0-1");
        assert_eq!(HolePattern::EMPTY.to_string(), "-");
    }

    #[test]
    fn from_bits_masks_high_bits() {
        assert_eq!(HolePattern::from_bits(0xF001).bits(), 0x0001);
    }
}
