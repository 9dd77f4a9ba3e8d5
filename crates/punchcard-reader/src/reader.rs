//! Threshold search driving calibration, scanning and decoding.

use punchcard_codes::{ibm029, CodeTable};
use punchcard_core::RgbImageView;

use crate::brightness::BrightnessTest;
use crate::decode::{decode_holes, DecodedCard};
use crate::observer::{NoopObserver, ScanObserver};
use crate::region::card_bands;
use crate::result::{CardReadResult, SearchStatus, TrialRecord};
use crate::scan::{scan_holes, HoleScan};
use crate::{CardRegion, ReaderParams};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Reads punched cards from RGB images.
///
/// Each read tries thresholds from `brightest` downwards and stops as soon as
/// two consecutive trials decode to the same text with no invalid columns.
pub struct CardReader {
    params: ReaderParams,
    table: &'static CodeTable,
}

/// One calibrated, scanned and decoded pass.
#[derive(Clone, Debug)]
pub struct PassOutcome {
    pub scan: HoleScan,
    pub decoded: DecodedCard,
}

impl CardReader {
    /// Reader using the IBM 029 code table.
    pub fn new(params: ReaderParams) -> Self {
        Self {
            params,
            table: ibm029(),
        }
    }

    pub fn with_table(mut self, table: &'static CodeTable) -> Self {
        self.table = table;
        self
    }

    pub fn params(&self) -> &ReaderParams {
        &self.params
    }

    pub fn table(&self) -> &'static CodeTable {
        self.table
    }

    /// One calibration + scan + decode at a fixed threshold.
    pub fn read_pass(
        &self,
        img: &RgbImageView<'_>,
        region: &CardRegion,
        threshold: i32,
        observer: &mut dyn ScanObserver,
    ) -> PassOutcome {
        let test = BrightnessTest::new(threshold, self.params.prefer_white);
        let scan = scan_holes(img, region, &test, observer);
        let decoded = decode_holes(&scan.holes, self.table);
        PassOutcome { scan, decoded }
    }

    /// Read the card inside `region`.
    pub fn read(&self, img: &RgbImageView<'_>, region: &CardRegion) -> CardReadResult {
        self.read_observed(img, region, &mut NoopObserver)
    }

    /// Read the card inside `region`, reporting every pass to `observer`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, img, observer), fields(width = img.width, height = img.height))
    )]
    pub fn read_observed(
        &self,
        img: &RgbImageView<'_>,
        region: &CardRegion,
        observer: &mut dyn ScanObserver,
    ) -> CardReadResult {
        observer.search_window(region);

        let mut trials: Vec<TrialRecord> = Vec::new();
        let mut last: Option<(i32, DecodedCard)> = None;
        let mut status = SearchStatus::Exhausted;

        for threshold in self.params.thresholds() {
            observer.begin_pass(threshold);
            let decoded = self.read_pass(img, region, threshold, observer).decoded;
            observer.end_pass(threshold, &decoded);

            let previous_text = trials.last().map(|t| t.text.as_str());
            let stable = decoded.invalid == 0 && previous_text == Some(decoded.text.as_str());
            log::debug!(
                "text: {} trial {} invalid chars {} threshold {} {}",
                decoded.text,
                trials.len() + 1,
                decoded.invalid,
                threshold,
                if stable { "STOP" } else { "RETRY" }
            );

            trials.push(TrialRecord {
                threshold,
                text: decoded.text.clone(),
                invalid: decoded.invalid,
            });
            last = Some((threshold, decoded));
            if stable {
                status = SearchStatus::Stable;
                break;
            }
        }

        let (threshold, decoded) = last.unwrap_or_else(|| {
            log::warn!(
                "no thresholds between {} and {}; nothing scanned",
                self.params.brightest,
                self.params.dimmest
            );
            (self.params.brightest, DecodedCard::unread())
        });

        CardReadResult {
            region: *region,
            decoded,
            threshold,
            status,
            trials,
        }
    }

    /// Read every card of the image: the configured window split into
    /// `cards_per_image` equal bands, top to bottom.
    pub fn read_image(&self, img: &RgbImageView<'_>) -> Vec<CardReadResult> {
        self.read_image_observed(img, &mut NoopObserver)
    }

    pub fn read_image_observed(
        &self,
        img: &RgbImageView<'_>,
        observer: &mut dyn ScanObserver,
    ) -> Vec<CardReadResult> {
        card_bands(
            &self.params.bounds,
            img.width,
            img.height,
            self.params.cards_per_image,
        )
        .iter()
        .map(|region| self.read_observed(img, region, observer))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use punchcard_core::RgbImage;

    fn dark_image() -> RgbImage {
        RgbImage::filled(400, 200, [30, 30, 30])
    }

    fn read_with(brightest: i32, dimmest: i32) -> CardReadResult {
        let img = dark_image();
        let reader = CardReader::new(ReaderParams {
            brightest,
            dimmest,
            ..ReaderParams::default()
        });
        reader.read(&img.view(), &CardRegion::full(img.width, img.height))
    }

    #[test]
    fn equal_bounds_run_a_single_trial() {
        let res = read_with(200, 200);
        assert_eq!(res.trial_count(), 1);
        assert_eq!(res.status, SearchStatus::Exhausted);
        assert_eq!(res.threshold, 200);
        assert_eq!(res.decoded.text, " ".repeat(80));
    }

    #[test]
    fn two_matching_valid_trials_stop_the_search() {
        let res = read_with(250, 150);
        assert_eq!(res.status, SearchStatus::Stable);
        assert_eq!(
            res.trials.iter().map(|t| t.threshold).collect::<Vec<_>>(),
            vec![250, 247]
        );
        assert_eq!(res.threshold, 247);
    }

    #[test]
    fn empty_schedule_leaves_the_card_unread() {
        let res = read_with(100, 200);
        assert_eq!(res.trial_count(), 0);
        assert_eq!(res.status, SearchStatus::Exhausted);
        assert_eq!(res.decoded, DecodedCard::unread());
    }

    #[test]
    fn huge_thresholds_read_without_overflow() {
        let res = read_with(900_000_000, 899_999_990);
        assert_eq!(res.status, SearchStatus::Stable);
        assert_eq!(res.threshold, 899_999_997);
        assert_eq!(res.decoded.invalid, 0);
    }
}
