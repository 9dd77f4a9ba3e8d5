//! Annotated copy of a card photograph showing what a scan pass measured.
//!
//! The canvas is reset at the start of every pass, so after a read it shows
//! the final pass: card borders and probe marks in red, pixels classified as
//! bright on the hole scan lines in green, expected hole boxes in blue.

use std::path::Path;

use ::image::{Rgb, RgbImage};

use crate::reader::{CardRegion, DecodedCard, RowGeometry, ScanObserver, VerticalGeometry};
use crate::ReadError;

const BORDER: Rgb<u8> = Rgb([255, 0, 0]);
const EXPECTED_HOLE: Rgb<u8> = Rgb([0, 0, 255]);

/// [`ScanObserver`] drawing onto a copy of the scanned image.
pub struct DebugCanvas {
    source: RgbImage,
    canvas: RgbImage,
    window: Option<CardRegion>,
    passes: usize,
}

impl DebugCanvas {
    pub fn new(source: &RgbImage) -> Self {
        Self {
            source: source.clone(),
            canvas: source.clone(),
            window: None,
            passes: 0,
        }
    }

    /// The annotated image.
    pub fn image(&self) -> &RgbImage {
        &self.canvas
    }

    /// Number of passes drawn since creation.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReadError> {
        let path = path.as_ref();
        self.canvas.save(path).map_err(|source| ReadError::Save {
            path: path.to_path_buf(),
            source,
        })
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.canvas.width() && (y as u32) < self.canvas.height()
        {
            self.canvas.put_pixel(x as u32, y as u32, color);
        }
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb<u8>) {
        for x in x0..x1 {
            self.put(x, y, color);
        }
    }

    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgb<u8>) {
        for y in y0..y1 {
            self.put(x, y, color);
        }
    }
}

impl ScanObserver for DebugCanvas {
    fn search_window(&mut self, region: &CardRegion) {
        self.window = Some(*region);
    }

    fn begin_pass(&mut self, _threshold: i32) {
        self.canvas.clone_from(&self.source);
        self.passes += 1;
    }

    fn vertical_borders(&mut self, region: &CardRegion, geometry: &VerticalGeometry) {
        self.hline(region.xmin, region.xmax - 1, geometry.top_border, BORDER);
        self.hline(region.xmin, region.xmax - 1, geometry.bottom_border, BORDER);

        // Search window limits around the probe column, and the probe column
        // outside the window.
        let midx = region.midx();
        let reach = self.source.width() as i32 / 20;
        self.hline(midx - reach, midx + reach, region.ymin, BORDER);
        self.hline(midx - reach, midx + reach, region.ymax - 1, BORDER);
        self.vline(midx, 0, region.ymin, BORDER);
        self.vline(midx, region.ymax - 1, self.source.height() as i32 - 1, BORDER);
    }

    fn row_borders(&mut self, region: &CardRegion, row: &RowGeometry) {
        let reach = self.source.height() as i32 / 100;
        let y = row.probe_y;
        let left = row.left_border.max(0);
        let right = row.right_border.min(region.xmax - 1);
        self.vline(left, y - reach, y + reach, BORDER);
        self.vline(right, y - reach, y + reach, BORDER);
        for dx in 1..(region.width() / 200) {
            self.put(row.left_border + dx, y, BORDER);
            self.put(row.right_border - dx, y, BORDER);
        }
    }

    fn bright_pixel(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x as u32 >= self.source.width() || y as u32 >= self.source.height() {
            return;
        }
        let peak = self.source.get_pixel(x as u32, y as u32).0.into_iter().max().unwrap_or(0);
        self.put(x, y, Rgb([0, peak, 0]));
    }

    fn expected_holes(&mut self, y: i32, row: &RowGeometry, vertical: &VerticalGeometry) {
        let half = vertical.metrics.hole_height / 2;
        let (top, bottom) = (y - half, y + half);
        let hole_width = row.hole_width();
        let col_width = row.col_width();
        if col_width <= 0.0 {
            return;
        }
        let mut left = row.data_left_x as f64;
        while left < (row.data_right_x - 1) as f64 {
            let (x0, x1) = (left as i32, (left + hole_width) as i32);
            for y_plot in (top..bottom).step_by(2) {
                self.put(x0, y_plot, EXPECTED_HOLE);
                self.put(x1, y_plot, EXPECTED_HOLE);
            }
            self.hline(x0, x1, top, EXPECTED_HOLE);
            self.hline(x0, x1, bottom, EXPECTED_HOLE);
            left += col_width;
        }
    }

    fn end_pass(&mut self, threshold: i32, decoded: &DecodedCard) {
        if let Some(window) = self.window {
            log::trace!(
                "debug canvas pass {} threshold {} window y=[{}, {}) invalid {}",
                self.passes,
                threshold,
                window.ymin,
                window.ymax,
                decoded.invalid
            );
        }
    }
}
