/// Problems with a [`ReaderParams`](crate::ReaderParams) configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("brightest threshold {brightest} is below dimmest threshold {dimmest}")]
    InvertedThresholds { brightest: i32, dimmest: i32 },
    #[error("{name} threshold {value} is outside 0..=255")]
    ThresholdOutOfRange { name: &'static str, value: i32 },
    #[error("number of cards per image must be at least 1")]
    ZeroCards,
}
