//! Physical layout of an 80-column card.
//!
//! Measurements are taken from the IBM card specification (inches) and are only
//! used as ratios of the measured card width/height, so the geometry is
//! independent of the image resolution.

use serde::{Deserialize, Serialize};

pub const CARD_COLUMNS: usize = 80;
pub const CARD_ROWS: usize = 12;

pub const CARD_WIDTH_IN: f64 = 7.0 + 3.0 / 8.0;
pub const CARD_HEIGHT_IN: f64 = 3.25;
pub const CARD_COL_WIDTH_IN: f64 = 0.087;
/// IBM; Control Data cards use 0.056.
pub const CARD_HOLE_WIDTH_IN: f64 = 0.055;
/// Nominal pitch is 0.250; the extra 0.005 compensates drift seen on scans.
pub const CARD_ROW_HEIGHT_IN: f64 = 0.255;
pub const CARD_HOLE_HEIGHT_IN: f64 = 0.125;
pub const CARD_TOPBOT_MARGIN_IN: f64 = 3.0 / 16.0;
pub const CARD_SIDE_MARGIN_IN: f64 = 0.2235;

pub const CARD_SIDE_MARGIN_RATIO: f64 = CARD_SIDE_MARGIN_IN / CARD_WIDTH_IN;
pub const CARD_TOP_MARGIN_RATIO: f64 = CARD_TOPBOT_MARGIN_IN / CARD_HEIGHT_IN;
pub const CARD_ROW_HEIGHT_RATIO: f64 = CARD_ROW_HEIGHT_IN / CARD_HEIGHT_IN;
pub const CARD_COL_WIDTH_RATIO: f64 = CARD_COL_WIDTH_IN / CARD_WIDTH_IN;
pub const CARD_HOLE_HEIGHT_RATIO: f64 = CARD_HOLE_HEIGHT_IN / CARD_HEIGHT_IN;
pub const CARD_HOLE_WIDTH_RATIO: f64 = CARD_HOLE_WIDTH_IN / CARD_WIDTH_IN;

/// Row labels in top-to-bottom order, as printed on the card.
pub const ROW_LABELS: [&str; CARD_ROWS] =
    ["12", "11", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Vertical measurements derived from a measured card height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalMetrics {
    /// Distance from the top edge to the top of the first hole row.
    pub top_margin: i32,
    pub hole_height: i32,
    /// Pitch between consecutive hole rows.
    pub row_height: i32,
}

impl VerticalMetrics {
    pub fn from_card_height(card_height: i32) -> Self {
        let h = card_height as f64;
        Self {
            top_margin: (h * CARD_TOP_MARGIN_RATIO) as i32,
            hole_height: (h * CARD_HOLE_HEIGHT_RATIO) as i32,
            row_height: (h * CARD_ROW_HEIGHT_RATIO) as i32,
        }
    }

    /// Offset from the top edge to the center of the first hole row.
    #[inline]
    pub fn first_row_offset(&self) -> i32 {
        self.top_margin + self.hole_height / 2
    }
}

/// Horizontal measurements derived from a measured card width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HorizontalMetrics {
    /// Distance from the left edge to the start of column 0.
    pub side_margin: i32,
    /// Width of all 80 columns together.
    pub data_width: i32,
    pub col_width: f64,
    pub hole_width: f64,
}

impl HorizontalMetrics {
    pub fn from_card_width(card_width: i32) -> Self {
        let w = card_width as f64;
        Self {
            side_margin: (w * CARD_SIDE_MARGIN_RATIO) as i32,
            data_width: (CARD_COLUMNS as f64 * w * CARD_COL_WIDTH_IN / CARD_WIDTH_IN) as i32,
            col_width: w * CARD_COL_WIDTH_RATIO,
            hole_width: w * CARD_HOLE_WIDTH_RATIO,
        }
    }
}
