//! Bakes HRTF datasets into C++ source.
//!
//! Synthizer's C++ library doesn't load HRTF data at runtime.  Instead, the impulses are compiled in as constants.  This
//! crate takes a dataset (`impulse_length`, `elev_min`, `elev_increment`, `num_elevs`, and rings of impulses) and
//! writes two files:
//!
//! - A header declaring `ImpulseArray`, the `IMPULSES` array of all impulses, `IMPULSE_LENGTH`, the `ElevationDef`
//!   record, and the `ELEVATIONS` array.
//! - A source file defining `IMPULSES` and `ELEVATIONS`.
//!
//! The impulses are flattened rings first, then azimuths within each ring, in input order.  `ELEVATIONS` has one entry
//! per ring giving its angle, where its impulses start in `IMPULSES`, and how many there are.
//!
//! Where the files go is up to the caller, via [OutputLocator].  [RepoLayout] is the usual choice.  Rendering is
//! available separately through [render()] for callers who want the text without touching disk.
mod dataset;
mod elevation_index;
mod error;
mod generate;
mod output;
mod render;

pub use dataset::{HrtfDataset, ShapeError};
pub use elevation_index::{ElevationDef, ElevationIndex};
pub use error::{Error, Result};
pub use generate::{generate, generate_with_options};
pub use output::{write_artifacts, write_file, ExplicitPaths, OutputLocator, RepoLayout};
pub use render::{
    render, render_header, render_source, EmitOptions, EmitOptionsBuilder, RenderedArtifacts,
    DEFAULT_HEADER_INCLUDE, DEFAULT_NAMESPACE,
};
