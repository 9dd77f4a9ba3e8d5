//! Card border detection and the row/column geometry derived from it.
//!
//! The card is expected to be darker than its surroundings (it is photographed
//! against a light source), so a border is the first non-bright pixel met when
//! walking from the edge of the search window towards its center.

use punchcard_core::{HorizontalMetrics, RgbImageView, VerticalMetrics, CARD_ROWS};
use serde::{Deserialize, Serialize};

use crate::brightness::BrightnessTest;
use crate::observer::ScanObserver;
use crate::params::BORDER_TOLERANCE_PX;
use crate::CardRegion;

/// Vertical geometry for one scan pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalGeometry {
    pub top_border: i32,
    pub bottom_border: i32,
    pub metrics: VerticalMetrics,
    /// Center line of the first hole row.
    pub data_top_y: i32,
    /// Center line of the last hole row.
    pub data_bottom_y: i32,
}

impl VerticalGeometry {
    pub fn card_height(&self) -> i32 {
        self.bottom_border - self.top_border
    }

    /// Center line of hole row `row`, where the holes are scanned.
    #[inline]
    pub fn row_y(&self, row: usize) -> i32 {
        self.data_top_y + row as i32 * self.metrics.row_height
    }

    /// Line on which the side borders for `row` are measured.
    ///
    /// The first and last rows borrow the line one row inward: real cards
    /// have a clipped corner there.
    #[inline]
    pub fn border_probe_y(&self, row: usize) -> i32 {
        let y = self.row_y(row);
        if row == 0 {
            y + self.metrics.row_height
        } else if row == CARD_ROWS - 1 {
            y - self.metrics.row_height
        } else {
            y
        }
    }
}

/// Horizontal geometry measured on one probe row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowGeometry {
    pub probe_y: i32,
    pub left_border: i32,
    pub right_border: i32,
    pub metrics: HorizontalMetrics,
    /// First pixel of column 0.
    pub data_left_x: i32,
    /// One past the last pixel of column 79.
    pub data_right_x: i32,
}

impl RowGeometry {
    pub fn card_width(&self) -> i32 {
        self.right_border - self.left_border
    }

    #[inline]
    pub fn col_width(&self) -> f64 {
        self.metrics.col_width
    }

    #[inline]
    pub fn hole_width(&self) -> f64 {
        self.metrics.hole_width
    }
}

/// Side borders of the previous probe row, used to reject implausible jumps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BorderTracker {
    previous: Option<(i32, i32)>,
}

impl BorderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous row; the next row is accepted as measured.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn previous(&self) -> Option<(i32, i32)> {
        self.previous
    }

    /// Accept a measured `(left, right)` pair.
    ///
    /// A side that moved more than [`BORDER_TOLERANCE_PX`] from the previous
    /// row keeps the previous value. The accepted pair becomes the new reference.
    pub fn accept(&mut self, left: i32, right: i32) -> (i32, i32) {
        let accepted = match self.previous {
            Some((prev_left, prev_right)) => (
                if (left - prev_left).abs() > BORDER_TOLERANCE_PX {
                    prev_left
                } else {
                    left
                },
                if (right - prev_right).abs() > BORDER_TOLERANCE_PX {
                    prev_right
                } else {
                    right
                },
            ),
            None => (left, right),
        };
        self.previous = Some(accepted);
        accepted
    }
}

/// Find the top and bottom card borders along the vertical probe column and
/// derive the row geometry from the card height.
///
/// Missing borders fall back to the window edges.
pub fn find_vertical_geometry(
    img: &RgbImageView<'_>,
    region: &CardRegion,
    test: &BrightnessTest,
    observer: &mut dyn ScanObserver,
) -> VerticalGeometry {
    let midx = region.midx();
    let midy = region.midy();
    let is_dark = |y: i32| !test.is_bright(img.pixel(midx, y));

    let top_border = (region.ymin..midy).find(|&y| is_dark(y)).unwrap_or(region.ymin);
    let bottom_border = ((midy + 1)..region.ymax)
        .rev()
        .find(|&y| is_dark(y))
        .unwrap_or(region.ymax);

    let metrics = VerticalMetrics::from_card_height(bottom_border - top_border);
    let data_top_y = top_border + metrics.first_row_offset();
    let geometry = VerticalGeometry {
        top_border,
        bottom_border,
        metrics,
        data_top_y,
        data_bottom_y: data_top_y + metrics.row_height * (CARD_ROWS as i32 - 1),
    };
    log::trace!(
        "vertical borders top={} bottom={} row_height={} hole_height={}",
        top_border,
        bottom_border,
        metrics.row_height,
        metrics.hole_height
    );
    observer.vertical_borders(region, &geometry);
    geometry
}

/// Find the left and right card borders on `probe_y` and derive the column
/// geometry from the card width at that line.
///
/// Borders are measured per row because photographs may be skewed. Missing
/// borders fall back to the window edges; jumps are filtered by `tracker`.
pub fn find_row_geometry(
    img: &RgbImageView<'_>,
    region: &CardRegion,
    test: &BrightnessTest,
    probe_y: i32,
    tracker: &mut BorderTracker,
    observer: &mut dyn ScanObserver,
) -> RowGeometry {
    let midx = region.midx();
    let is_dark = |x: i32| !test.is_bright(img.pixel(x, probe_y));

    let left = (region.xmin..midx).find(|&x| is_dark(x)).unwrap_or(region.xmin);
    let right = ((midx + 1)..region.xmax)
        .rev()
        .find(|&x| is_dark(x))
        .unwrap_or(region.xmax - 1);
    let (left_border, right_border) = tracker.accept(left, right);

    let metrics = HorizontalMetrics::from_card_width(right_border - left_border);
    let data_left_x = left_border + metrics.side_margin;
    let row = RowGeometry {
        probe_y,
        left_border,
        right_border,
        metrics,
        data_left_x,
        data_right_x: data_left_x + metrics.data_width,
    };
    observer.row_borders(region, &row);
    row
}
