use anyhow::{Context, Result};

use hrtf_codegen::{EmitOptionsBuilder, ExplicitPaths, HrtfDataset, OutputLocator, RepoLayout};

use crate::cli_args::{CliArgs, DestinationArgs, GenerateArgs};

fn locator(dest: &DestinationArgs) -> Result<Box<dyn OutputLocator>> {
    match (&dest.repo_root, &dest.header, &dest.source) {
        (Some(root), None, None) => Ok(Box::new(RepoLayout::new(root))),
        (None, Some(header), Some(source)) => Ok(Box::new(ExplicitPaths {
            header: header.clone(),
            source: source.clone(),
        })),
        _ => anyhow::bail!("Specify either --repo-root, or both --header and --source"),
    }
}

pub fn generate(_top_args: &CliArgs, gen_args: &GenerateArgs) -> Result<()> {
    let path = &gen_args.dataset.dataset;
    let dataset = HrtfDataset::from_json_file(path)
        .with_context(|| format!("While loading {}", path.display()))?;

    let options = EmitOptionsBuilder::default()
        .namespace(gen_args.namespace.as_str())
        .header_include(gen_args.header_include.as_str())
        .build()?;

    let locator = locator(&gen_args.destination)?;
    hrtf_codegen::generate_with_options(&dataset, &*locator, &options)
        .with_context(|| format!("While generating from {}", path.display()))?;

    println!(
        "Wrote {} and {}",
        locator.header_path().display(),
        locator.source_path().display()
    );
    Ok(())
}
