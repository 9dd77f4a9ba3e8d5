//! High-level facade for the `punchcard-*` workspace.
//!
//! This crate provides:
//! - re-exports of the underlying crates,
//! - reader configuration files (JSON [`ReaderParams`](reader::ReaderParams)),
//! - (feature `image`) helpers reading cards straight from image files, and an
//!   annotated debug image renderer,
//! - (feature `cli`) the `punchcard` command line tool.
//!
//! ## Quickstart
//!
//! ```no_run
//! use punchcard::detect;
//! use punchcard::reader::ReaderParams;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! for card in detect::read_cards_in_file("deck-0001.jpg", &ReaderParams::default())? {
//!     println!("{}", card.summary_line());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `punchcard::core`: pixel views and the physical card layout.
//! - `punchcard::codes`: hole patterns and the IBM 029 code table.
//! - `punchcard::reader`: calibration, hole scanning, decoding and the threshold search.
//! - `punchcard::print`: synthetic card photographs for tests and fixtures.
//! - `punchcard::detect` (feature `image`): end-to-end helpers from `image::RgbImage`.
//! - `punchcard::debug_image` (feature `image`): [`ScanObserver`](reader::ScanObserver)
//!   drawing what each pass measured.

pub use punchcard_codes as codes;
pub use punchcard_core as core;
pub use punchcard_print as print;
pub use punchcard_reader as reader;

pub use punchcard_reader::{CardReadResult, CardReader, ReaderParams};

pub mod config;
mod error;

pub use error::ReadError;

#[cfg(feature = "image")]
pub mod debug_image;
#[cfg(feature = "image")]
pub mod detect;
