//! Embedded keypunch code tables.
//!
//! The source-of-truth lives in `punchcard-codes/data/*.txt`.

use std::sync::OnceLock;

use crate::CodeTable;

/// IBM Model 029 keypunch reference diagram.
pub const IBM_029_DIAGRAM: &str = include_str!("../data/ibm029.txt");

/// Shared IBM 029 code table, parsed on first use.
pub fn ibm029() -> &'static CodeTable {
    static TABLE: OnceLock<CodeTable> = OnceLock::new();
    TABLE.get_or_init(|| CodeTable::from_diagram("IBM_029", IBM_029_DIAGRAM))
}

/// Look up a built-in table by name.
pub fn builtin_table(name: &str) -> Option<&'static CodeTable> {
    match name {
        "IBM_029" | "ibm029" | "029" => Some(ibm029()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HolePattern;
    use std::collections::HashSet;

    fn rows(labels: &[&str]) -> HolePattern {
        HolePattern::from_rows(labels.iter().map(|l| {
            punchcard_core::ROW_LABELS
                .iter()
                .position(|r| r == l)
                .expect("row label")
        }))
    }

    #[test]
    fn ibm029_has_64_distinct_characters() {
        let table = ibm029();
        assert_eq!(table.len(), 64);
        let patterns: HashSet<HolePattern> = table.iter().map(|(_, p)| p).collect();
        assert_eq!(patterns.len(), 64);
    }

    #[test]
    fn ibm029_round_trips_every_entry() {
        let table = ibm029();
        for (ch, pattern) in table.iter() {
            assert_eq!(table.decode(pattern), Some(ch), "char {ch:?}");
            assert_eq!(table.encode(ch), Some(pattern), "pattern {pattern}");
        }
    }

    #[test]
    fn ibm029_matches_known_punches() {
        let table = ibm029();
        assert_eq!(table.decode(HolePattern::EMPTY), Some(' '));
        assert_eq!(table.decode(rows(&["12"])), Some('&'));
        assert_eq!(table.decode(rows(&["11"])), Some('-'));
        assert_eq!(table.decode(rows(&["12", "1"])), Some('A'));
        assert_eq!(table.decode(rows(&["11", "9"])), Some('R'));
        assert_eq!(table.decode(rows(&["0", "1"])), Some('/'));
        assert_eq!(table.decode(rows(&["0", "9"])), Some('Z'));
        assert_eq!(table.decode(rows(&["4", "8"])), Some('@'));
        assert_eq!(table.decode(rows(&["12", "3", "8"])), Some('.'));
        assert_eq!(table.decode(rows(&["0", "7", "8"])), Some('?'));
    }

    #[test]
    fn unknown_patterns_are_not_decoded() {
        let table = ibm029();
        assert_eq!(table.decode(rows(&["12", "8"])), None);
        assert_eq!(table.decode(rows(&["12", "11", "0"])), None);
        assert_eq!(table.encode('a'), None);
    }

    #[test]
    fn builtin_lookup_by_name() {
        assert!(builtin_table("IBM_029").is_some());
        assert!(builtin_table("IBM_026").is_none());
    }
}
