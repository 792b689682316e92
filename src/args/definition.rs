//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::app::RunOptions;
use crate::config::Settings;
use crate::state::DemoId;

/// termtour - A guided tour of what a terminal can do
#[derive(Parser, Debug)]
#[command(name = "termtour")]
#[command(version)]
#[command(about = "A guided tour of terminal colors, cursor control, input and mouse tracking", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Run a single demo and exit (colors, cursor, terminal, input, mouse)
    #[arg(long, value_parser = parse_demo)]
    pub demo: Option<DemoId>,

    /// Disable the pauses between demo steps
    #[arg(long)]
    pub fast: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Read settings from this file instead of ~/.config/termtour/settings.conf
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// What: Parse the `--demo` value.
///
/// Inputs:
/// - `s`: Raw argument text.
///
/// Output:
/// - The matching `DemoId`, or a message listing the accepted names.
fn parse_demo(s: &str) -> Result<DemoId, String> {
    DemoId::from_name(s)
        .ok_or_else(|| format!("unknown demo '{s}' (expected colors, cursor, terminal, input, mouse)"))
}

/// What: Combine parsed arguments and loaded settings into run options.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings loaded from disk.
/// - `no_color_env`: Whether the `NO_COLOR` convention is active.
///
/// Output:
/// - `RunOptions` for `app::run`.
///
/// Details:
/// - Color is on only when neither the flag, the environment nor the settings turn it off.
/// - `--fast` overrides `pacing = true` from the settings file.
#[must_use]
pub fn process_args(args: &Args, settings: Settings, no_color_env: bool) -> RunOptions {
    let color = settings.color && !args.no_color && !no_color_env;
    let pacing = settings.pacing && !args.fast;
    tracing::debug!(
        demo = ?args.demo,
        color,
        pacing,
        "[Args] resolved run options"
    );
    RunOptions {
        demo: args.demo,
        settings,
        color,
        pacing,
    }
}
