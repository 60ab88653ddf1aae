//! Rendering of the C++ header and source.
//!
//! Everything here is a pure function from a dataset to text.  Writing the text out is [crate::output]'s job.
//!
//! Floats are written with Rust's `Debug` formatting, which is the shortest representation that parses back to the
//! same value and always carries a `.` or an exponent.  That keeps literals from being read as integers and means the
//! compiled arrays hold exactly the input samples.
use itertools::Itertools;

use crate::dataset::HrtfDataset;
use crate::elevation_index::{ElevationDef, ElevationIndex};
use crate::error::Result;

const GEN_COMMENT: &str = r#"/*
 * This file is generated by the HRTF processor. Do not edit.
 */
"#;

/// Knobs for the emitted C++.
///
/// The defaults produce the files Synthizer's C++ build expects.
#[derive(Clone, Debug, PartialEq, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct EmitOptions {
    /// The namespace holding all of the generated definitions.
    #[builder(setter(into), default = "DEFAULT_NAMESPACE.to_string()")]
    pub namespace: String,

    /// What the source file passes to `#include` to get the header.
    #[builder(setter(into), default = "DEFAULT_HEADER_INCLUDE.to_string()")]
    pub header_include: String,
}

pub const DEFAULT_NAMESPACE: &str = "synthizer::hrtf_data";
pub const DEFAULT_HEADER_INCLUDE: &str = "synthizer/data/hrtf.hpp";

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            namespace: DEFAULT_NAMESPACE.to_string(),
            header_include: DEFAULT_HEADER_INCLUDE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedArtifacts {
    /// The declarations: array types, the length constant, and the elevation record.
    pub header: String,

    /// The definitions of the two arrays the header declares.
    pub source: String,
}

/// Validate the dataset, then render both files.
///
/// Nothing is rendered if validation fails.
pub fn render(dataset: &HrtfDataset, options: &EmitOptions) -> Result<RenderedArtifacts> {
    dataset.validate()?;
    let index = ElevationIndex::new(dataset);

    Ok(RenderedArtifacts {
        header: render_header(dataset, &index, options),
        source: render_source(dataset, &index, options),
    })
}

pub fn render_header(dataset: &HrtfDataset, index: &ElevationIndex, options: &EmitOptions) -> String {
    let impulse_length = dataset.impulse_length;
    let total_impulses = index.total_impulses();
    let num_elevs = index.elevations().len();
    let namespace = &options.namespace;

    format!(
        r#"{GEN_COMMENT}
#pragma once

#include <array>
#include <cstddef>

namespace {namespace} {{

typedef std::array<std::array<float, {impulse_length}>, {total_impulses}> ImpulseArray;
extern const ImpulseArray IMPULSES;
const std::size_t IMPULSE_LENGTH = {impulse_length};

struct ElevationDef {{
    double angle;
    /*
     * Where the impulses start in the big array.
     */
    std::size_t azimuth_start;
    std::size_t azimuth_count;
}};

extern const std::array<ElevationDef, {num_elevs}> ELEVATIONS;

}}
"#
    )
}

fn impulse_lit(impulse: &[f32]) -> String {
    let samples = impulse.iter().map(|x| format!("{x:?}")).join(", ");
    format!("    {{ {samples} }},\n")
}

fn elev_lit(elev: &ElevationDef) -> String {
    format!(
        "    {{ .angle = {:?}, .azimuth_start = {}, .azimuth_count = {} }},\n",
        elev.angle, elev.azimuth_start, elev.azimuth_count
    )
}

pub fn render_source(dataset: &HrtfDataset, index: &ElevationIndex, options: &EmitOptions) -> String {
    let impulse_lits = dataset.impulses().map(impulse_lit).join("");
    let elev_lits = index.elevations().iter().map(elev_lit).join("");
    let num_elevs = index.elevations().len();
    let namespace = &options.namespace;
    let header_include = &options.header_include;

    format!(
        r#"{GEN_COMMENT}
#include <array>
#include <cstddef>
#include "{header_include}"

namespace {namespace} {{

const ImpulseArray IMPULSES{{ {{
{impulse_lits}}} }};

const std::array<ElevationDef, {num_elevs}> ELEVATIONS{{ {{
{elev_lits}}} }};

}}
"#
    )
}
