//! Card search windows.

use serde::{Deserialize, Serialize};

use crate::RegionBounds;

/// Rectangular window holding one card, `[xmin, xmax) × [ymin, ymax)` in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRegion {
    pub xmin: i32,
    pub xmax: i32,
    pub ymin: i32,
    pub ymax: i32,
    /// Shift of the vertical probe column from the window center.
    pub xadjust: i32,
}

impl CardRegion {
    /// The whole image.
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            xmin: 0,
            xmax: width as i32,
            ymin: 0,
            ymax: height as i32,
            xadjust: 0,
        }
    }

    /// Resolve caller bounds against the image size.
    ///
    /// Zero stop values extend to the image edge; everything is clamped into
    /// the image so the window never reaches past it.
    pub fn from_bounds(bounds: &RegionBounds, width: usize, height: usize) -> Self {
        let (xmin, xmax) = resolve_axis(bounds.xstart, bounds.xstop, width as i32);
        let (ymin, ymax) = resolve_axis(bounds.ystart, bounds.ystop, height as i32);
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
            xadjust: bounds.xadjust,
        }
    }

    /// Column of the vertical border probe.
    pub fn midx(&self) -> i32 {
        let mid = self.xmin + (self.xmax - self.xmin) / 2 + self.xadjust;
        mid.clamp(self.xmin, (self.xmax - 1).max(self.xmin))
    }

    /// Row from which the top and bottom border searches start.
    pub fn midy(&self) -> i32 {
        self.ymin + (self.ymax - self.ymin) / 2
    }

    pub fn width(&self) -> i32 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> i32 {
        self.ymax - self.ymin
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

fn resolve_axis(start: i32, stop: i32, size: i32) -> (i32, i32) {
    let hi = if stop > 0 { stop.min(size) } else { size };
    let lo = start.clamp(0, hi.max(0));
    (lo, hi.max(lo))
}

/// Split the search window into `count` equal-height bands, one card each.
///
/// Bands share the x range and x adjustment of `bounds`. Any remainder rows at
/// the bottom are left out of every band.
pub fn card_bands(
    bounds: &RegionBounds,
    width: usize,
    height: usize,
    count: usize,
) -> Vec<CardRegion> {
    if count == 0 {
        return Vec::new();
    }
    let window = CardRegion::from_bounds(bounds, width, height);
    let step = window.height() / count as i32;
    (0..count as i32)
        .map(|i| CardRegion {
            ymin: window.ymin + i * step,
            ymax: window.ymin + (i + 1) * step,
            ..window
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bounds_cover_the_image() {
        let r = CardRegion::from_bounds(&RegionBounds::default(), 640, 480);
        assert_eq!(r, CardRegion::full(640, 480));
        assert_eq!(r.midx(), 320);
        assert_eq!(r.midy(), 240);
    }

    #[test]
    fn bounds_are_clamped_to_the_image() {
        let bounds = RegionBounds {
            xstart: -5,
            xstop: 1000,
            ystart: 10,
            ystop: 50,
            xadjust: 0,
        };
        let r = CardRegion::from_bounds(&bounds, 200, 100);
        assert_eq!((r.xmin, r.xmax, r.ymin, r.ymax), (0, 200, 10, 50));
    }

    #[test]
    fn xadjust_moves_probe_but_stays_inside() {
        let mut r = CardRegion::full(100, 10);
        r.xadjust = 7;
        assert_eq!(r.midx(), 57);
        r.xadjust = 500;
        assert_eq!(r.midx(), 99);
        r.xadjust = -500;
        assert_eq!(r.midx(), 0);
    }

    #[test]
    fn bands_split_window_evenly() {
        let bounds = RegionBounds {
            xstart: 5,
            ystart: 10,
            xadjust: 3,
            ..RegionBounds::default()
        };
        let bands = card_bands(&bounds, 100, 311, 3);
        assert_eq!(bands.len(), 3);
        assert_eq!((bands[0].ymin, bands[0].ymax), (10, 110));
        assert_eq!((bands[1].ymin, bands[1].ymax), (110, 210));
        assert_eq!((bands[2].ymin, bands[2].ymax), (210, 310));
        for b in &bands {
            assert_eq!((b.xmin, b.xmax, b.xadjust), (5, 100, 3));
        }
    }

    #[test]
    fn bands_respect_explicit_ystop() {
        let bounds = RegionBounds {
            ystop: 200,
            ..RegionBounds::default()
        };
        let bands = card_bands(&bounds, 100, 1000, 2);
        assert_eq!((bands[1].ymin, bands[1].ymax), (100, 200));
    }

    #[test]
    fn zero_bands_is_empty() {
        assert!(card_bands(&RegionBounds::default(), 10, 10, 0).is_empty());
    }
}
