/// Errors produced while rendering or writing a card image.
#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    #[error("character {ch:?} in column {column} has no punch code")]
    UnknownCharacter { ch: char, column: usize },
    #[error("text has {len} characters, a card holds 80")]
    TextTooLong { len: usize },
    #[error("column {column} / row {row} is outside the card")]
    OutOfCard { column: usize, row: usize },
    #[error("card of {width}x{height} px is too small to render holes")]
    CardTooSmall { width: usize, height: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Png(#[from] png::EncodingError),
}
