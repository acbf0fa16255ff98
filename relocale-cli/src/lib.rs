//! relocale CLI: the release locale filtering step invoked during CI
//! packaging.
//!
//! Filtering is disabled (#5474): we ship all translations without
//! explicitly approving them. Every invocation prints a single notice line
//! and exits successfully, so packaging logs still show that the step ran.
//! The planning/removal engine lives in `relocale-core` and is deliberately
//! not wired to this entrypoint; re-enabling filtering means putting its
//! `discover -> plan -> apply` steps behind an explicit command here.

use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

/// Notice emitted on every invocation while filtering stays disabled.
pub const DISABLED_NOTICE: &str = "Filtering of release locales disabled (#5474)";

/// Argument surface kept invocation-compatible with the retired filtering
/// step.
///
/// CI definitions still pass the old tool's flags. Everything is swallowed
/// unparsed, with the help and version flags disabled, so no argument can
/// fail the build step or change what it does.
#[derive(Debug, Parser)]
#[command(
    name = "relocale",
    about = "Release locale filtering step for CI packaging (disabled, #5474)",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<OsString>,
}

impl Cli {
    pub fn ignored(&self) -> &[OsString] {
        &self.ignored
    }
}

/// Parse (and discard) the arguments, then emit the disabled-filtering
/// notice.
pub fn run() -> Result<()> {
    let _ = Cli::parse();

    let stdout = io::stdout();
    write_notice(stdout.lock())
}

/// Write the notice line to the given sink.
pub fn write_notice(mut w: impl Write) -> Result<()> {
    writeln!(w, "{DISABLED_NOTICE}")?;
    Ok(())
}
