use anyhow::{Context, Result};

use hrtf_codegen::{ElevationIndex, HrtfDataset};

use crate::cli_args::{CliArgs, InspectArgs};

pub fn inspect(_top_args: &CliArgs, inspect_args: &InspectArgs) -> Result<()> {
    let path = &inspect_args.dataset.dataset;
    let dataset = HrtfDataset::from_json_file(path)
        .with_context(|| format!("While loading {}", path.display()))?;
    dataset
        .validate()
        .with_context(|| format!("{} is not a usable dataset", path.display()))?;

    let index = ElevationIndex::new(&dataset);
    println!(
        "{} elevations, {} impulses of {} samples",
        index.elevations().len(),
        index.total_impulses(),
        dataset.impulse_length
    );
    println!("{:>10} {:>8} {:>8}", "angle", "start", "count");
    for e in index.elevations() {
        println!(
            "{:>10.2} {:>8} {:>8}",
            e.angle, e.azimuth_start, e.azimuth_count
        );
    }

    Ok(())
}
