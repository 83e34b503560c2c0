//! Command-line arguments for the two fixture tools.

use std::path::PathBuf;

use clap::Parser;

/// Recreate OUTPUT_DIR and copy the files listed in INPUT_DIR/input into it.
#[derive(Parser, Debug)]
#[command(name = "stage-dir", version, about, long_about = None)]
pub struct StageArgs {
    /// input dir
    pub input_dir: PathBuf,

    /// output dir
    pub output_dir: PathBuf,
}

/// Copy each input file to <OUT_DIR>/out/siso/<basename>.
#[derive(Parser, Debug)]
#[command(name = "echo-inputs", version, about, long_about = None)]
pub struct EchoArgs {
    /// output directory
    #[arg(long)]
    pub out_dir: PathBuf,

    /// input files
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}
