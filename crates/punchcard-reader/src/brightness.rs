//! Bright/dark pixel classification.

/// Classifies pixels against one threshold for the duration of a scan pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrightnessTest {
    pub threshold: i32,
    /// Every channel must reach the threshold (white/grey holes), instead of
    /// the channel mean.
    pub prefer_white: bool,
}

impl BrightnessTest {
    pub fn new(threshold: i32, prefer_white: bool) -> Self {
        Self {
            threshold,
            prefer_white,
        }
    }

    #[inline]
    pub fn is_bright(&self, px: [u8; 3]) -> bool {
        if self.prefer_white {
            return px.iter().all(|&c| c as i32 >= self.threshold);
        }
        // mean >= threshold, kept in integers
        px.iter().map(|&c| i64::from(c)).sum::<i64>() >= 3 * i64::from(self.threshold)
    }
}
