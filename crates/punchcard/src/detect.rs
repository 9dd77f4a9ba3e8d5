//! End-to-end helpers from `image` crate buffers and image files.

use std::path::Path;

use crate::core::{RgbImage, RgbImageView};
use crate::reader::{CardReadResult, CardReader, ReaderParams, ScanObserver};
use crate::ReadError;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Borrow an `image::RgbImage` as the lightweight `punchcard-core` view type.
pub fn rgb_view(img: &::image::RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Copy a `punchcard-core` image into an `image::RgbImage`.
pub fn to_image_rgb(img: &RgbImage) -> Option<::image::RgbImage> {
    ::image::RgbImage::from_raw(img.width as u32, img.height as u32, img.data.clone())
}

/// Open and decode an image file, converting it to 8-bit RGB.
pub fn load_rgb(path: impl AsRef<Path>) -> Result<::image::RgbImage, ReadError> {
    let path = path.as_ref();
    let img = ::image::open(path).map_err(|source| ReadError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Read every card of `img` (`params.cards_per_image` bands, top to bottom).
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn read_cards(img: &::image::RgbImage, params: &ReaderParams) -> Vec<CardReadResult> {
    CardReader::new(params.clone()).read_image(&rgb_view(img))
}

/// Like [`read_cards`], reporting every pass to `observer`.
pub fn read_cards_observed(
    img: &::image::RgbImage,
    params: &ReaderParams,
    observer: &mut dyn ScanObserver,
) -> Vec<CardReadResult> {
    CardReader::new(params.clone()).read_image_observed(&rgb_view(img), observer)
}

/// Load `path` and read every card in it.
pub fn read_cards_in_file(
    path: impl AsRef<Path>,
    params: &ReaderParams,
) -> Result<Vec<CardReadResult>, ReadError> {
    let img = load_rgb(path)?;
    Ok(read_cards(&img, params))
}
