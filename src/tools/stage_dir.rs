// stage_dir.rs: recreate an output directory from a manifest-selected subset
// of an input directory. Used as a code-signing stand-in by build tests.
// Usage: stage-dir <input_dir> <output_dir>

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use siso_fixture_tools::cli::StageArgs;
use siso_fixture_tools::{logging, stage};

fn main() -> Result<()> {
    let args = StageArgs::parse();
    logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = stage(&args.input_dir, &args.output_dir, &mut out).with_context(|| {
        format!(
            "staging {} into {}",
            args.input_dir.display(),
            args.output_dir.display()
        )
    })?;
    out.flush()?;

    tracing::debug!(
        copied = summary.copied.len(),
        missing = summary.missing.len(),
        "stage finished"
    );
    Ok(())
}
