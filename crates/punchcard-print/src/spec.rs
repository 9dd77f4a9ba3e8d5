use serde::{Deserialize, Serialize};

/// Size and colors of a rendered card photograph.
///
/// The card is drawn dark on a light background with light holes, the way a
/// card looks when photographed in front of a light source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRenderSpec {
    /// Card width in pixels (defaults to 200 dpi).
    pub card_width: usize,
    pub card_height: usize,
    /// Light border left and right of the card.
    pub margin_x: usize,
    /// Light border above and below the card.
    pub margin_y: usize,
    pub background: [u8; 3],
    pub card: [u8; 3],
    pub hole: [u8; 3],
}

impl Default for CardRenderSpec {
    fn default() -> Self {
        Self {
            card_width: 1476,
            card_height: 651,
            margin_x: 60,
            margin_y: 60,
            background: [255, 255, 255],
            card: [70, 60, 50],
            hole: [255, 255, 255],
        }
    }
}

impl CardRenderSpec {
    /// Image size holding one card and its margins.
    pub fn image_size(&self) -> (usize, usize) {
        (
            self.card_width + 2 * self.margin_x,
            self.card_height + 2 * self.margin_y,
        )
    }
}
