//! Definition of the Clap command line.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Bake an HRTF dataset into C++ source")]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the header and source for a dataset.
    Generate(GenerateArgs),

    /// Validate a dataset and print its elevation table without writing anything.
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct DatasetArgs {
    /// JSON file holding the dataset.
    #[arg(long)]
    pub dataset: PathBuf,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = true)]
pub struct DestinationArgs {
    /// Root of the Synthizer repository.  Files go to the standard locations under it.
    #[arg(long, conflicts_with_all = ["header", "source"])]
    pub repo_root: Option<PathBuf>,

    /// Where to write the header.  Requires `--source`.
    #[arg(long, requires = "source")]
    pub header: Option<PathBuf>,

    /// Where to write the source.  Requires `--header`.
    #[arg(long, requires = "header")]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub destination: DestinationArgs,

    /// Namespace for the generated definitions.
    #[arg(long, default_value = hrtf_codegen::DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Path the source uses to include the header.
    #[arg(long, default_value = hrtf_codegen::DEFAULT_HEADER_INCLUDE)]
    pub header_include: String,
}

#[derive(Debug, Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}
