// echo_inputs.rs: copy each input file verbatim to <out-dir>/out/siso/<name>.
// Used as a generic build action by build tests.
// Usage: echo-inputs --out-dir <dir> <inputs>...

use anyhow::{Context, Result};
use clap::Parser;

use siso_fixture_tools::cli::EchoArgs;
use siso_fixture_tools::{echo, logging, open_inputs};

fn main() -> Result<()> {
    let args = EchoArgs::parse();
    logging::init();

    let inputs = open_inputs(&args.inputs)?;
    let written = echo(&args.out_dir, inputs)
        .with_context(|| format!("echoing inputs into {}", args.out_dir.display()))?;
    tracing::debug!(outputs = written.len(), "echo finished");
    Ok(())
}
