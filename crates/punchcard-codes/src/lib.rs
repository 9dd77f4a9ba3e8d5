//! Keypunch code tables for 80-column punched cards.
//!
//! This crate focuses on:
//! - the per-column [`HolePattern`] (one bit per card row),
//! - [`CodeTable`], a bidirectional pattern ↔ character lookup parsed from an
//!   ASCII-art keypunch reference diagram,
//! - the embedded IBM 029 table, parsed once and shared process-wide.

pub mod builtins;
mod pattern;
mod table;

pub use builtins::ibm029;
pub use pattern::HolePattern;
pub use table::CodeTable;
