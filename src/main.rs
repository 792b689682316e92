//! termtour binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::io::IsTerminal;
use std::sync::OnceLock;

use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use termtour::{app, args, config};

struct TermtourTimer;

impl tracing_subscriber::fmt::time::FormatTime for TermtourTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Where log lines go when the log file cannot be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FallbackSink {
    /// stderr is redirected away from the terminal.
    Stderr,
    /// stderr is the terminal the demos draw on; log lines are dropped.
    Discard,
}

impl FallbackSink {
    const fn for_stderr(stderr_is_terminal: bool) -> Self {
        if stderr_is_terminal {
            Self::Discard
        } else {
            Self::Stderr
        }
    }

    fn make_writer(self) -> BoxMakeWriter {
        match self {
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            Self::Discard => BoxMakeWriter::new(std::io::sink),
        }
    }
}

/// What: Initialize tracing to `~/.config/termtour/logs/termtour.log`.
///
/// Inputs:
/// - `level`: Fallback filter when `RUST_LOG` is unset.
///
/// Details:
/// - Logs never reach the terminal, which belongs to the demos.
/// - When the log file cannot be opened, logs go to stderr only if stderr is
///   redirected; otherwise they are dropped.
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("termtour.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(TermtourTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            let sink = FallbackSink::for_stderr(std::io::stderr().is_terminal());
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(sink.make_writer())
                .with_timer(TermtourTimer)
                .init();
            tracing::warn!(error = %e, ?sink, "failed to open log file");
        }
    }
}

fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = config::load_settings(cli.config.as_deref());
    let opts = args::process_args(&cli, settings, args::no_color_env());
    tracing::info!(demo = ?opts.demo, "termtour starting");
    if let Err(err) = app::run(&opts) {
        tracing::error!(error = ?err, "Application error");
        // Teardown has cleared the screen by now.
        eprintln!("termtour: {err}");
    }
    tracing::info!("termtour exited");
}
