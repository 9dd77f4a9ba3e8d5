//! Punched card reader: turns a photograph of an 80-column card into text.
//!
//! Pipeline, per card:
//! - find the card's top/bottom borders along a vertical probe column and
//!   derive the row geometry from the card height,
//! - for each of the 12 rows, find the left/right borders (per row, so skewed
//!   pictures still work) and derive the column geometry from the card width,
//! - walk each row's scan line collecting bright runs wide enough to be holes,
//! - decode the 80 columns through a keypunch code table,
//! - repeat with a lower brightness threshold until two consecutive trials
//!   agree with no undecodable columns.
//!
//! Nothing in the pipeline fails: missing borders fall back to the search
//! window, unknown columns decode as [`SENTINEL`] and are counted.
//!
//! ```no_run
//! use punchcard_core::RgbImage;
//! use punchcard_reader::{CardReader, ReaderParams};
//!
//! let img = RgbImage::filled(1600, 800, [255, 255, 255]);
//! let reader = CardReader::new(ReaderParams::default());
//! for card in reader.read_image(&img.view()) {
//!     println!("{}", card.summary_line());
//! }
//! ```

pub mod brightness;
pub mod calibrate;
mod decode;
mod dump;
mod error;
mod observer;
mod params;
mod reader;
mod region;
mod result;
pub mod scan;

pub use brightness::BrightnessTest;
pub use calibrate::{BorderTracker, RowGeometry, VerticalGeometry};
pub use decode::{decode_holes, DecodedCard, SENTINEL};
pub use dump::{render_dump, DumpFormat};
pub use error::ParamsError;
pub use observer::{NoopObserver, ScanObserver};
pub use params::{
    threshold_schedule, ReaderParams, RegionBounds, BORDER_TOLERANCE_PX,
    BRIGHTNESS_PRACTICAL_MAX, BRIGHTNESS_PRACTICAL_MIN, COLUMN_ROUNDING_BIAS,
    HOLE_WIDTH_THRESHOLD, THRESHOLD_RANGE, THRESHOLD_STEP,
};
pub use reader::{CardReader, PassOutcome};
pub use region::{card_bands, CardRegion};
pub use result::{CardReadResult, SearchStatus, TrialRecord};
pub use scan::{HoleMap, HoleScan};
