//! Stderr logger for the card reader.
//!
//! Records are printed as `[elapsed LEVEL] message`. Install it once at
//! startup with [`init_with_level`]; the threshold search reports each trial at
//! `debug` level, so `LevelFilter::Debug` reproduces the per-trial diagnostics.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{}",
            format_line(elapsed, record.level(), record.args())
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_line(elapsed: f64, level: log::Level, message: &fmt::Arguments<'_>) -> String {
    format!("[{elapsed:7.3}s {level:>5}] {message}")
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger with the provided level filter.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Level used by the command line front-end: `Debug` when trial diagnostics
/// were requested, `Warn` otherwise.
pub fn level_for_debug(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// `EnvFilter` directive for a `log` level filter.
#[cfg(feature = "tracing")]
fn directive(level: LevelFilter) -> String {
    level.as_str().to_ascii_lowercase()
}

/// Install a `tracing-subscriber` fmt subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise events at `level` and above are shown,
/// so [`level_for_debug`] gives the same output as [`init_with_level`].
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool, level: LevelFilter) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)));
    if json {
        let _ = tracing_fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
            .finish()
            .try_init();
    } else {
        let _ = tracing_fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_timer(tracing_fmt::time::Uptime::default())
            .with_writer(std::io::stderr)
            .finish()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_debug_level() {
        assert_eq!(level_for_debug(true), LevelFilter::Debug);
        assert_eq!(level_for_debug(false), LevelFilter::Warn);
    }

    #[test]
    fn line_carries_elapsed_level_and_message() {
        let line = format_line(1.5, log::Level::Debug, &format_args!("trial {} STOP", 2));
        assert_eq!(line, "[  1.500s DEBUG] trial 2 STOP");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_directive_follows_the_debug_flag() {
        assert_eq!(directive(level_for_debug(true)), "debug");
        assert_eq!(directive(level_for_debug(false)), "warn");
        assert!(EnvFilter::try_new(directive(LevelFilter::Trace)).is_ok());
    }

    #[test]
    fn repeated_init_is_a_noop() {
        init_with_level(LevelFilter::Warn).expect("first init");
        init_with_level(LevelFilter::Debug).expect("second init");
    }
}
