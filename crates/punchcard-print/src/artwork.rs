use std::collections::BTreeMap;

use punchcard_codes::{ibm029, CodeTable};
use punchcard_core::{HorizontalMetrics, RgbImage, VerticalMetrics, CARD_COLUMNS, CARD_ROWS};

use crate::{CardRenderSpec, PrintError};

/// Pixel rectangle `[x0, x1) × [y0, y1)` relative to the card's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl HoleRect {
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

/// A card being punched.
///
/// Hole positions come from the same layout ratios the reader calibrates
/// with, applied to the card size the reader will measure: borders are found
/// on the first and last card pixel, so that size is one less than the drawn one.
#[derive(Clone, Debug)]
pub struct CardArtwork {
    spec: CardRenderSpec,
    /// Punched positions keyed by `(column, row)`; the value overrides the hole width.
    holes: BTreeMap<(usize, usize), Option<i32>>,
}

impl CardArtwork {
    pub fn new(spec: CardRenderSpec) -> Self {
        Self {
            spec,
            holes: BTreeMap::new(),
        }
    }

    pub fn spec(&self) -> &CardRenderSpec {
        &self.spec
    }

    /// Number of punched positions.
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn punch(&mut self, column: usize, row: usize) -> Result<&mut Self, PrintError> {
        check_position(column, row)?;
        self.holes.insert((column, row), None);
        Ok(self)
    }

    /// Punch a hole of a specific width, keeping it centered on its column.
    pub fn punch_with_width(
        &mut self,
        column: usize,
        row: usize,
        width_px: i32,
    ) -> Result<&mut Self, PrintError> {
        check_position(column, row)?;
        self.holes.insert((column, row), Some(width_px.max(1)));
        Ok(self)
    }

    /// Punch `text` from column 0 with the IBM 029 code.
    pub fn punch_text(&mut self, text: &str) -> Result<&mut Self, PrintError> {
        self.punch_text_with(text, ibm029())
    }

    pub fn punch_text_with(
        &mut self,
        text: &str,
        table: &CodeTable,
    ) -> Result<&mut Self, PrintError> {
        let len = text.chars().count();
        if len > CARD_COLUMNS {
            return Err(PrintError::TextTooLong { len });
        }
        for (column, ch) in text.chars().enumerate() {
            let pattern = table
                .encode(ch)
                .ok_or(PrintError::UnknownCharacter { ch, column })?;
            for row in pattern.rows() {
                self.punch(column, row)?;
            }
        }
        Ok(self)
    }

    fn metrics(&self) -> (HorizontalMetrics, VerticalMetrics) {
        (
            HorizontalMetrics::from_card_width(self.spec.card_width as i32 - 1),
            VerticalMetrics::from_card_height(self.spec.card_height as i32 - 1),
        )
    }

    /// Where the hole at `(column, row)` is drawn, at its nominal width.
    pub fn hole_rect(&self, column: usize, row: usize) -> HoleRect {
        let (h, _) = self.metrics();
        self.hole_rect_sized(column, row, h.hole_width.round() as i32)
    }

    fn hole_rect_sized(&self, column: usize, row: usize, width: i32) -> HoleRect {
        let (h, v) = self.metrics();
        let cx = h.side_margin as f64 + (column as f64 + 0.5) * h.col_width;
        let x0 = (cx - width as f64 / 2.0).round() as i32;
        let height = v.hole_height.max(1);
        let cy = v.first_row_offset() + row as i32 * v.row_height;
        let y0 = cy - height / 2;
        HoleRect {
            x0,
            y0,
            x1: x0 + width,
            y1: y0 + height,
        }
    }

    /// Render the card centered in its own image.
    pub fn render(&self) -> Result<RgbImage, PrintError> {
        let (w, h) = self.spec.image_size();
        let mut img = RgbImage::filled(w, h, self.spec.background);
        self.render_into(&mut img, self.spec.margin_x as i32, self.spec.margin_y as i32)?;
        Ok(img)
    }

    /// Draw the card with its top-left corner at `(x0, y0)` of `img`.
    pub fn render_into(&self, img: &mut RgbImage, x0: i32, y0: i32) -> Result<(), PrintError> {
        let (h, v) = self.metrics();
        if h.hole_width.round() < 2.0 || v.hole_height < 2 {
            return Err(PrintError::CardTooSmall {
                width: self.spec.card_width,
                height: self.spec.card_height,
            });
        }
        img.fill_rect(
            x0,
            y0,
            x0 + self.spec.card_width as i32,
            y0 + self.spec.card_height as i32,
            self.spec.card,
        );
        let nominal = h.hole_width.round() as i32;
        for (&(column, row), &width) in &self.holes {
            let r = self.hole_rect_sized(column, row, width.unwrap_or(nominal));
            img.fill_rect(x0 + r.x0, y0 + r.y0, x0 + r.x1, y0 + r.y1, self.spec.hole);
        }
        Ok(())
    }
}

fn check_position(column: usize, row: usize) -> Result<(), PrintError> {
    if column >= CARD_COLUMNS || row >= CARD_ROWS {
        return Err(PrintError::OutOfCard { column, row });
    }
    Ok(())
}

/// Render one card punched with `text`.
pub fn render_card(text: &str, spec: &CardRenderSpec) -> Result<RgbImage, PrintError> {
    let mut card = CardArtwork::new(*spec);
    card.punch_text(text)?;
    card.render()
}

/// Render several cards stacked top to bottom, each in an equal-height band.
pub fn render_cards(texts: &[&str], spec: &CardRenderSpec) -> Result<RgbImage, PrintError> {
    let (w, band) = spec.image_size();
    let mut img = RgbImage::filled(w, band * texts.len(), spec.background);
    for (i, text) in texts.iter().enumerate() {
        let mut card = CardArtwork::new(*spec);
        card.punch_text(text)?;
        card.render_into(
            &mut img,
            spec.margin_x as i32,
            (i * band + spec.margin_y) as i32,
        )?;
    }
    Ok(img)
}
