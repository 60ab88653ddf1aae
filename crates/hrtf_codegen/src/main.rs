//! Command line front end for `hrtf_codegen`.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=info` to see what was written where.
mod cli_args;
mod commands;

fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();

    let args = cli_args::CliArgs::parse();
    commands::dispatch_command(args)
}
