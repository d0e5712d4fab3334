//! Logging init: console on stderr, optional debug log file.
//!
//! Console verbosity follows the CLI flags (quiet = errors only, verbose =
//! everything) unless `RUST_LOG` overrides it; the file layer always logs at
//! debug with timestamps.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn console_filter(quiet: bool, verbose: bool) -> EnvFilter {
    let default = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize logging: stderr console, plus a debug-level file when
/// `log_file` is given. Returns Err when the log file cannot be opened so the
/// caller can fall back to `init_logging_stderr`.
pub fn init_logging(quiet: bool, verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_filter(quiet, verbose));

    match log_file {
        Some(path) => {
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file: {}", path.display()))?;
            let file_layer = fmt::layer()
                .with_writer(BoxMakeWriter::new(FileMakeWriter(file)))
                .with_ansi(false)
                .with_filter(LevelFilter::DEBUG);
            tracing_subscriber::registry()
                .with(console)
                .with(file_layer)
                .init();
            tracing::debug!("logging to {}", path.display());
        }
        None => tracing_subscriber::registry().with(console).init(),
    }
    Ok(())
}

/// Initialize logging to stderr only. Use when `init_logging` fails so the
/// CLI still reports something.
pub fn init_logging_stderr(quiet: bool, verbose: bool) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time()
                .with_filter(console_filter(quiet, verbose)),
        )
        .init();
}
