//! Hole detection along each row's scan line.

use std::collections::BTreeMap;

use punchcard_core::{RgbImageView, CARD_COLUMNS, CARD_ROWS};

use crate::brightness::BrightnessTest;
use crate::calibrate::{
    find_row_geometry, find_vertical_geometry, BorderTracker, RowGeometry, VerticalGeometry,
};
use crate::observer::ScanObserver;
use crate::params::{COLUMN_ROUNDING_BIAS, HOLE_WIDTH_THRESHOLD};
use crate::CardRegion;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Detected holes keyed by `(column, row)`, valued by the measured run length
/// in pixels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleMap {
    holes: BTreeMap<(usize, usize), u32>,
}

impl HoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hole; a later hole at the same position replaces the earlier one.
    pub fn insert(&mut self, col: usize, row: usize, run_length: u32) {
        self.holes.insert((col, row), run_length);
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<u32> {
        self.holes.get(&(col, row)).copied()
    }

    #[inline]
    pub fn contains(&self, col: usize, row: usize) -> bool {
        self.holes.contains_key(&(col, row))
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// `((column, row), run_length)` in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), u32)> + '_ {
        self.holes.iter().map(|(&k, &v)| (k, v))
    }
}

/// Output of one scan pass.
#[derive(Clone, Debug, PartialEq)]
pub struct HoleScan {
    pub holes: HoleMap,
    pub vertical: VerticalGeometry,
    /// Horizontal geometry for each of the 12 rows.
    pub rows: Vec<RowGeometry>,
}

/// Calibrate the card inside `region` and collect its holes at one threshold.
///
/// A pure function of its inputs: side-border tracking restarts with every call.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(img, region, observer), fields(threshold = test.threshold))
)]
pub fn scan_holes(
    img: &RgbImageView<'_>,
    region: &CardRegion,
    test: &BrightnessTest,
    observer: &mut dyn ScanObserver,
) -> HoleScan {
    let vertical = find_vertical_geometry(img, region, test, observer);
    let mut tracker = BorderTracker::new();
    let mut holes = HoleMap::new();
    let mut rows = Vec::with_capacity(CARD_ROWS);

    for row in 0..CARD_ROWS {
        let y = vertical.row_y(row);
        let geom = find_row_geometry(
            img,
            region,
            test,
            vertical.border_probe_y(row),
            &mut tracker,
            observer,
        );
        scan_row(img, test, &geom, row, y, &mut holes, observer);
        observer.expected_holes(y, &geom, &vertical);
        log::trace!(
            "row {} y={} borders=({}, {}) data=[{}, {}) col_width={:.2}",
            row,
            y,
            geom.left_border,
            geom.right_border,
            geom.data_left_x,
            geom.data_right_x,
            geom.col_width()
        );
        rows.push(geom);
    }

    HoleScan {
        holes,
        vertical,
        rows,
    }
}

/// Walk scan line `y` across the data area and record every bright run wide
/// enough to be a hole.
fn scan_row(
    img: &RgbImageView<'_>,
    test: &BrightnessTest,
    geom: &RowGeometry,
    row: usize,
    y: i32,
    holes: &mut HoleMap,
    observer: &mut dyn ScanObserver,
) {
    if geom.col_width() <= 0.0 {
        return;
    }
    let min_run = geom.hole_width() * HOLE_WIDTH_THRESHOLD;
    let mut run_start: Option<i32> = None;

    for x in geom.data_left_x..geom.data_right_x {
        if test.is_bright(img.pixel(x, y)) {
            if run_start.is_none() {
                run_start = Some(x);
            }
            observer.bright_pixel(x, y);
        } else if let Some(start) = run_start.take() {
            let run = x - start;
            if run as f64 >= min_run {
                if let Some(col) = column_index(geom, start, run) {
                    holes.insert(col, row, run as u32);
                }
            }
        }
    }
}

/// Column whose pitch cell contains the center of the run `[start, start + run)`.
///
/// Returns `None` for centers past the last column.
pub fn column_index(geom: &RowGeometry, start: i32, run: i32) -> Option<usize> {
    let center = start as f64 + run as f64 / 2.0;
    let col = (center - geom.data_left_x as f64) / geom.col_width() + COLUMN_ROUNDING_BIAS;
    if !col.is_finite() || col < 0.0 {
        return None;
    }
    let col = col as usize;
    (col < CARD_COLUMNS).then_some(col)
}
