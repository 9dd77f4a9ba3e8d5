//! punchcard CLI: decode photographed 80-column punched cards.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use punchcard::config::load_params;
use punchcard::debug_image::DebugCanvas;
use punchcard::detect::{load_rgb, rgb_view};
use punchcard::reader::{
    card_bands, render_dump, CardReadResult, CardReader, DumpFormat, ParamsError, ReaderParams,
};
use serde::Serialize;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "punchcard")]
#[command(about = "Read 80-column punched cards from photographs of backlit cards")]
#[command(version)]
struct Cli {
    /// Images to read.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Brightness cutoff tried first (0-255).
    #[arg(short = 'b', long = "bright-threshold")]
    bright: Option<i32>,

    /// Lowest brightness cutoff to try.
    #[arg(short = 'B', long = "bright-dimmest")]
    dimmest: Option<i32>,

    /// Print an ASCII-art version of each card.
    #[arg(short = 'd', long)]
    dump: bool,

    /// Print ASCII-art with the measured hole widths.
    #[arg(short = 'r', long)]
    dump_raw: bool,

    /// Print per-trial diagnostics.
    #[arg(short = 'D', long)]
    debug: bool,

    /// Holes must be white/grey, not just bright.
    #[arg(short = 'w', long)]
    white: bool,

    /// Save an annotated debug image per card and wait for Enter.
    #[arg(short = 'i', long)]
    debug_image: bool,

    /// Directory for debug images (default: the system temp directory).
    #[arg(long, requires = "debug_image")]
    debug_dir: Option<PathBuf>,

    /// Start looking for a card edge at this x position (pixels).
    #[arg(short = 'x', long = "x-start")]
    xstart: Option<i32>,

    /// Stop looking for a card edge at this x position.
    #[arg(short = 'X', long = "x-stop")]
    xstop: Option<i32>,

    /// Start looking for a card edge at this y position.
    #[arg(short = 'y', long = "y-start")]
    ystart: Option<i32>,

    /// Stop looking for a card edge at this y position.
    #[arg(short = 'Y', long = "y-stop")]
    ystop: Option<i32>,

    /// Shift of the vertical edge probe from the window center (pixels).
    #[arg(short = 'a', long = "adjust-x", allow_hyphen_values = true)]
    xadjust: Option<i32>,

    /// Number of cards stacked vertically in each image.
    #[arg(short = 'n', long = "num-cards")]
    num_cards: Option<usize>,

    /// Reader parameters as JSON; flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON object per card instead of text lines.
    #[arg(long, conflicts_with_all = ["dump", "dump_raw"])]
    json: bool,
}

impl Cli {
    fn params(&self) -> CliResult<ReaderParams> {
        let mut params = match &self.config {
            Some(path) => load_params(path)?,
            None => ReaderParams::default(),
        };
        if let Some(v) = self.bright {
            params.brightest = v;
        }
        if let Some(v) = self.dimmest {
            params.dimmest = v;
        }
        if self.white {
            params.prefer_white = true;
        }
        if let Some(v) = self.xstart {
            params.bounds.xstart = v;
        }
        if let Some(v) = self.xstop {
            params.bounds.xstop = v;
        }
        if let Some(v) = self.ystart {
            params.bounds.ystart = v;
        }
        if let Some(v) = self.ystop {
            params.bounds.ystop = v;
        }
        if let Some(v) = self.xadjust {
            params.bounds.xadjust = v;
        }
        if let Some(v) = self.num_cards {
            params.cards_per_image = v;
        }
        Ok(params)
    }
}

#[derive(Serialize)]
struct CardRecord<'a> {
    image: &'a Path,
    card: usize,
    #[serde(flatten)]
    result: &'a CardReadResult,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let params = cli.params()?;
    match params.validate() {
        Ok(()) => {}
        // Nothing is scanned with an inverted range, every card reads as unread.
        Err(err @ ParamsError::InvertedThresholds { .. }) => log::warn!("{err}"),
        Err(err) => return Err(err.into()),
    }

    let reader = CardReader::new(params);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in &cli.images {
        read_file(&cli, &reader, path, &mut out)?;
    }
    Ok(())
}

fn read_file(cli: &Cli, reader: &CardReader, path: &Path, out: &mut impl Write) -> CliResult<()> {
    log::debug!("reading {}", path.display());
    let img = load_rgb(path)?;
    let view = rgb_view(&img);
    let params = reader.params();
    let bands = card_bands(&params.bounds, view.width, view.height, params.cards_per_image);

    for (index, region) in bands.iter().enumerate() {
        let result = if cli.debug_image {
            let mut canvas = DebugCanvas::new(&img);
            let result = reader.read_observed(&view, region, &mut canvas);
            let target = debug_image_path(cli.debug_dir.as_deref(), path, index);
            canvas.save(&target)?;
            eprintln!("debug image written to {}", target.display());
            wait_for_enter()?;
            result
        } else {
            reader.read(&view, region)
        };

        if cli.json {
            let record = CardRecord {
                image: path,
                card: index,
                result: &result,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
            continue;
        }

        writeln!(out, "{}", result.summary_line())?;
        let id = path.display().to_string();
        if cli.dump {
            eprint!("{}", render_dump(&result, &id, DumpFormat::Markers));
        }
        if cli.dump_raw {
            eprint!("{}", render_dump(&result, &id, DumpFormat::Raw));
        }
    }
    Ok(())
}

fn debug_image_path(dir: Option<&Path>, image: &Path, card: usize) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "card".to_string());
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(std::env::temp_dir);
    dir.join(format!("{stem}.card{card}.debug.png"))
}

/// Block until a line (or end of input) arrives on stdin.
fn wait_for_enter() -> CliResult<()> {
    eprint!("Press Enter to continue...");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(debug: bool) {
    let _ = tracing_log::LogTracer::init();
    punchcard::core::init_tracing(false, punchcard::core::level_for_debug(debug));
}

#[cfg(not(feature = "tracing"))]
fn init_logging(debug: bool) {
    let level = punchcard::core::level_for_debug(debug);
    if let Err(err) = punchcard::core::init_with_level(level) {
        eprintln!("logger already installed: {err}");
    }
}
