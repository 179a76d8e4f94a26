//! Shared pieces of the pinyin-scaffold binaries.
//!
//! `pinyin-scaffold` and the three standalone `generate-*` executables all parse
//! [`RunArgs`], install tracing through [`init_tracing`], and hand off to
//! [`commands`].

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Args;

/// Flags accepted by every binary. All optional; the defaults reproduce a bare run.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Folder projects and the archive are written into
    #[arg(long, global = true, default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON file overriding the name list and/or archive name
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Install the fmt subscriber with a level picked from the `-v` count.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
