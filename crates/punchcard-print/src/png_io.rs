use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use punchcard_core::RgbImage;

use crate::PrintError;

fn encode_into<W: Write>(out: W, img: &RgbImage) -> Result<(), PrintError> {
    let mut encoder = png::Encoder::new(out, img.width as u32, img.height as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&img.data)?;
    writer.finish()?;
    Ok(())
}

/// Encode `img` as an 8-bit RGB PNG.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, PrintError> {
    let mut bytes = Vec::new();
    encode_into(&mut bytes, img)?;
    Ok(bytes)
}

/// Write `img` to `path` as an 8-bit RGB PNG.
pub fn write_png(path: impl AsRef<Path>, img: &RgbImage) -> Result<(), PrintError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    encode_into(&mut out, img)?;
    out.flush()?;
    Ok(())
}
