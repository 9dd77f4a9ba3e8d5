//! Core types for punched card reading.
//!
//! This crate is intentionally small: a borrowed RGB pixel view, the physical
//! layout of an 80-column card expressed as resolution-independent ratios, and
//! logger setup. It does *not* depend on any image decoding library.

mod image;
pub mod layout;
mod logger;

pub use image::{RgbImage, RgbImageView};
pub use layout::{HorizontalMetrics, VerticalMetrics, CARD_COLUMNS, CARD_ROWS, ROW_LABELS};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_for_debug};
