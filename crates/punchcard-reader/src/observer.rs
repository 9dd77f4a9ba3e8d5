//! Diagnostic hooks into a scan.
//!
//! The reader reports what it measured through [`ScanObserver`]; it never
//! waits on the observer. Rendering, saving or displaying an annotated image
//! is up to the implementation.

use crate::calibrate::{RowGeometry, VerticalGeometry};
use crate::decode::DecodedCard;
use crate::CardRegion;

/// Receives calibration and scan events. Every method defaults to a no-op.
pub trait ScanObserver {
    /// A read of `region` is starting.
    fn search_window(&mut self, _region: &CardRegion) {}

    /// A scan pass at `threshold` is starting.
    fn begin_pass(&mut self, _threshold: i32) {}

    /// Top/bottom borders found along the vertical probe column.
    fn vertical_borders(&mut self, _region: &CardRegion, _geometry: &VerticalGeometry) {}

    /// Left/right borders found on one probe row.
    fn row_borders(&mut self, _region: &CardRegion, _row: &RowGeometry) {}

    /// A pixel on a hole scan line classified as bright.
    fn bright_pixel(&mut self, _x: i32, _y: i32) {}

    /// Hole scan line `y` finished; `row` and `vertical` describe where holes
    /// were expected.
    fn expected_holes(&mut self, _y: i32, _row: &RowGeometry, _vertical: &VerticalGeometry) {}

    /// A scan pass finished and was decoded.
    fn end_pass(&mut self, _threshold: i32, _decoded: &DecodedCard) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
