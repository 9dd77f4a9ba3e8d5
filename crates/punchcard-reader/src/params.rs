use serde::{Deserialize, Serialize};

use crate::ParamsError;

/// Default starting (brightest) hole threshold.
pub const BRIGHTNESS_PRACTICAL_MAX: i32 = 250;
/// Default lower bound of the threshold search.
pub const BRIGHTNESS_PRACTICAL_MIN: i32 = 150;
/// Threshold decrement between search trials.
pub const THRESHOLD_STEP: i32 = 3;
/// Thresholds are compared against 8-bit channel values.
pub const THRESHOLD_RANGE: std::ops::RangeInclusive<i32> = 0..=255;
/// Maximum border jump between consecutive probe rows before the jump is
/// treated as detection noise.
pub const BORDER_TOLERANCE_PX: i32 = 10;
/// Minimum bright run, as a fraction of the expected hole width, to count as a hole.
pub const HOLE_WIDTH_THRESHOLD: f64 = 0.55;
/// Added before truncating the column index; holes tend to measure narrow.
pub const COLUMN_ROUNDING_BIAS: f64 = 0.25;

/// Search window inside the image. Zero `xstop`/`ystop` mean "to the image edge".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionBounds {
    pub xstart: i32,
    pub xstop: i32,
    pub ystart: i32,
    pub ystop: i32,
    /// Shift of the vertical probe column away from the window's center (pixels).
    pub xadjust: i32,
}

/// Configuration for [`CardReader`](crate::CardReader).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderParams {
    /// First threshold tried.
    pub brightest: i32,
    /// The search stops before going at or below this threshold.
    pub dimmest: i32,
    /// Require every channel to pass the threshold instead of the channel mean.
    pub prefer_white: bool,
    pub bounds: RegionBounds,
    /// Number of cards stacked vertically in each image.
    pub cards_per_image: usize,
}

impl Default for ReaderParams {
    fn default() -> Self {
        Self {
            brightest: BRIGHTNESS_PRACTICAL_MAX,
            dimmest: BRIGHTNESS_PRACTICAL_MIN,
            prefer_white: false,
            bounds: RegionBounds::default(),
            cards_per_image: 1,
        }
    }
}

impl ReaderParams {
    /// Check the configuration. Readers accept invalid parameters anyway (an
    /// inverted range simply yields no trials); callers decide whether to warn.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.cards_per_image == 0 {
            return Err(ParamsError::ZeroCards);
        }
        for (name, value) in [("brightest", self.brightest), ("dimmest", self.dimmest)] {
            if !THRESHOLD_RANGE.contains(&value) {
                return Err(ParamsError::ThresholdOutOfRange { name, value });
            }
        }
        if self.brightest < self.dimmest {
            return Err(ParamsError::InvertedThresholds {
                brightest: self.brightest,
                dimmest: self.dimmest,
            });
        }
        Ok(())
    }

    /// Thresholds tried by the search, brightest first.
    pub fn thresholds(&self) -> impl Iterator<Item = i32> {
        threshold_schedule(self.brightest, self.dimmest)
    }
}

/// `brightest, brightest - 3, …` while above `dimmest`.
///
/// Equal bounds yield the single value `brightest`; inverted bounds yield nothing.
pub fn threshold_schedule(brightest: i32, dimmest: i32) -> impl Iterator<Item = i32> {
    let floor = if brightest == dimmest {
        i64::from(dimmest) - 1
    } else {
        i64::from(dimmest)
    };
    // Every value lies in `dimmest..=brightest`, so narrowing back is lossless.
    ((floor + 1)..=i64::from(brightest))
        .rev()
        .step_by(THRESHOLD_STEP as usize)
        .map(|t| t as i32)
}
