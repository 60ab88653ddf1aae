use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// An HRTF dataset ready to be baked into source.
///
/// Elevations are stored as rings of impulses.  Ring `i` is at `elev_min + elev_increment * i` degrees, where -90 is
/// straight down and 90 straight up.  The order of azimuths within a ring is kept as-is: it is the order the runtime
/// walks when looking an impulse up, so nothing here sorts or otherwise touches it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HrtfDataset {
    /// Number of samples in every impulse of the dataset.
    pub impulse_length: usize,

    /// Angle of the lowest elevation ring, in degrees.
    pub elev_min: f64,

    /// Step between consecutive elevation rings, in degrees.
    pub elev_increment: f64,

    /// Number of elevation rings.  Must match `azimuths.len()`.
    pub num_elevs: usize,

    /// `azimuths[elevation][azimuth]` is an impulse of `impulse_length` samples.
    pub azimuths: Vec<Vec<Vec<f32>>>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("num_elevs is {num_elevs} but the dataset has {rings} elevation rings")]
    RingCount { num_elevs: usize, rings: usize },

    #[error("elevation {elevation} azimuth {azimuth}: impulse has {found} samples, but impulse_length is {expected}")]
    ImpulseLength {
        elevation: usize,
        azimuth: usize,
        found: usize,
        expected: usize,
    },

    #[error("elevation {elevation} azimuth {azimuth}: sample {sample} is {value}, which has no source literal")]
    NonFiniteSample {
        elevation: usize,
        azimuth: usize,
        sample: usize,
        value: f32,
    },

    #[error("elevation {elevation} has angle {angle}, which has no source literal")]
    NonFiniteAngle { elevation: usize, angle: f64 },
}

impl HrtfDataset {
    /// Load a dataset from JSON.
    ///
    /// All five fields are required; a missing one is a decode error.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<HrtfDataset> {
        Ok(serde_json::from_reader(std::io::BufReader::new(reader))?)
    }

    pub fn from_json_file(path: &Path) -> Result<HrtfDataset> {
        log::debug!("Loading HRTF dataset from {}", path.display());
        let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_reader(file)
    }

    /// The angle of the given elevation ring in degrees.
    pub fn elevation_angle(&self, elevation: usize) -> f64 {
        self.elev_min + self.elev_increment * elevation as f64
    }

    /// Iterate over every impulse, rings first and then azimuths within each ring.
    ///
    /// This is the row order of the flattened impulse array.
    pub fn impulses(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.azimuths.iter().flatten().map(|x| &x[..])
    }

    /// Check that the dataset can be emitted as fixed-size arrays whose declared dimensions match their contents.
    ///
    /// This does not look at whether the data is physically plausible, only at whether it can be written out without
    /// producing something that disagrees with itself or doesn't compile.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.azimuths.len() != self.num_elevs {
            return Err(ShapeError::RingCount {
                num_elevs: self.num_elevs,
                rings: self.azimuths.len(),
            });
        }

        for (elevation, ring) in self.azimuths.iter().enumerate() {
            let angle = self.elevation_angle(elevation);
            if !angle.is_finite() {
                return Err(ShapeError::NonFiniteAngle { elevation, angle });
            }

            for (azimuth, impulse) in ring.iter().enumerate() {
                if impulse.len() != self.impulse_length {
                    return Err(ShapeError::ImpulseLength {
                        elevation,
                        azimuth,
                        found: impulse.len(),
                        expected: self.impulse_length,
                    });
                }

                if let Some((sample, value)) = impulse.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                    return Err(ShapeError::NonFiniteSample {
                        elevation,
                        azimuth,
                        sample,
                        value: *value,
                    });
                }
            }
        }

        Ok(())
    }
}
