use crate::dataset::HrtfDataset;
use crate::error::Result;
use crate::output::{write_artifacts, OutputLocator};
use crate::render::{render, EmitOptions};

/// Generate the header and source for `dataset` with the default [EmitOptions].
pub fn generate(dataset: &HrtfDataset, locator: &dyn OutputLocator) -> Result<()> {
    generate_with_options(dataset, locator, &EmitOptions::default())
}

/// Generate the header and source for `dataset`, replacing whatever is at the locations `locator` gives.
///
/// Every call is a full regeneration.  If the dataset is malformed nothing is written; if writing fails the error
/// carries the path in question.
pub fn generate_with_options(
    dataset: &HrtfDataset,
    locator: &dyn OutputLocator,
    options: &EmitOptions,
) -> Result<()> {
    let artifacts = render(dataset, options)?;

    log::info!(
        "Generating HRTF data: {} elevations, {} samples per impulse, header {}, source {}",
        dataset.num_elevs,
        dataset.impulse_length,
        locator.header_path().display(),
        locator.source_path().display(),
    );

    write_artifacts(&artifacts, locator)
}
