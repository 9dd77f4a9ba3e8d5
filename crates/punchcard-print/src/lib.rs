//! Synthetic punched-card photographs.
//!
//! Renders 80-column cards the way a backlit photograph shows them: a dark
//! card on a light background with light holes. Hole positions follow the
//! same layout ratios the reader calibrates with, so rendered cards read back
//! exactly.
//!
//! ```no_run
//! use punchcard_print::{render_card, write_png, CardRenderSpec};
//!
//! let img = render_card("HELLO WORLD", &CardRenderSpec::default())?;
//! write_png("hello.png", &img)?;
//! # Ok::<(), punchcard_print::PrintError>(())
//! ```

mod artwork;
mod error;
mod png_io;
mod spec;

pub use artwork::{render_card, render_cards, CardArtwork, HoleRect};
pub use error::PrintError;
pub use png_io::{encode_png, write_png};
pub use spec::CardRenderSpec;
