//! qmlmeta library - expose modules for testing
//!
//! The binary is a thin clap front-end; everything it does lives here
//! so integration tests can reach it.

pub mod commands;
pub mod discovery;

use clap::Args;

/// Options shared by every subcommand.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct GlobalOpts {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Initialize tracing output on stderr; stdout is reserved for records.
///
/// `RUST_LOG` overrides the verbosity flags when set.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
