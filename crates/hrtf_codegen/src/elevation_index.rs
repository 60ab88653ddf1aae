//! The lookup table emitted alongside the impulses.
//!
//! All impulses go into one big array, so the runtime needs to know where each elevation's impulses begin and how many
//! there are.  That's a prefix sum over the ring sizes.
use crate::dataset::HrtfDataset;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElevationDef {
    /// Degrees, -90 straight down and 90 straight up.
    pub angle: f64,

    /// Where this elevation's impulses start in the big array.
    pub azimuth_start: usize,

    pub azimuth_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElevationIndex {
    elevations: Vec<ElevationDef>,
    total_impulses: usize,
}

impl ElevationIndex {
    pub fn new(dataset: &HrtfDataset) -> ElevationIndex {
        let mut elevations = Vec::with_capacity(dataset.azimuths.len());
        let mut total_impulses = 0;

        for (i, ring) in dataset.azimuths.iter().enumerate() {
            elevations.push(ElevationDef {
                angle: dataset.elevation_angle(i),
                azimuth_start: total_impulses,
                azimuth_count: ring.len(),
            });
            total_impulses += ring.len();
        }

        ElevationIndex {
            elevations,
            total_impulses,
        }
    }

    pub fn elevations(&self) -> &[ElevationDef] {
        &self.elevations[..]
    }

    /// Number of rows in the flattened impulse array.
    pub fn total_impulses(&self) -> usize {
        self.total_impulses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::two_ring_dataset;

    use proptest::prelude::*;

    #[test]
    fn test_two_rings() {
        let index = ElevationIndex::new(&two_ring_dataset());
        assert_eq!(index.total_impulses(), 3);
        assert_eq!(
            index.elevations(),
            &[
                ElevationDef {
                    angle: -90.0,
                    azimuth_start: 0,
                    azimuth_count: 1,
                },
                ElevationDef {
                    angle: 0.0,
                    azimuth_start: 1,
                    azimuth_count: 2,
                },
            ]
        );
    }

    #[test]
    fn test_no_rings() {
        let db = HrtfDataset {
            impulse_length: 8,
            elev_min: 0.0,
            elev_increment: 1.0,
            num_elevs: 0,
            azimuths: vec![],
        };
        let index = ElevationIndex::new(&db);
        assert!(index.elevations().is_empty());
        assert_eq!(index.total_impulses(), 0);
    }

    proptest! {
        #[test]
        fn test_prefix_sums(
            ring_sizes in prop::collection::vec(0..20usize, 0..40),
            elev_min in -90.0..0.0f64,
            elev_increment in 0.1..15.0f64,
        ) {
            let db = HrtfDataset {
                impulse_length: 1,
                elev_min,
                elev_increment,
                num_elevs: ring_sizes.len(),
                azimuths: ring_sizes.iter().map(|&n| vec![vec![0.0]; n]).collect(),
            };
            let index = ElevationIndex::new(&db);
            let elevs = index.elevations();

            prop_assert_eq!(elevs.len(), ring_sizes.len());
            prop_assert_eq!(index.total_impulses(), ring_sizes.iter().sum::<usize>());
            prop_assert_eq!(
                index.total_impulses(),
                elevs.iter().map(|e| e.azimuth_count).sum::<usize>()
            );

            for (i, e) in elevs.iter().enumerate() {
                prop_assert_eq!(e.azimuth_count, ring_sizes[i]);
                prop_assert_eq!(e.angle, elev_min + elev_increment * i as f64);
                if i == 0 {
                    prop_assert_eq!(e.azimuth_start, 0);
                } else {
                    prop_assert_eq!(
                        e.azimuth_start,
                        elevs[i - 1].azimuth_start + elevs[i - 1].azimuth_count
                    );
                }
            }
        }
    }
}
