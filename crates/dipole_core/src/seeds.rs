use crate::config::{EngineConfig, NEAR_FIELD_RADIUS};

/// Converts lobe boundaries into field-line seed x-coordinates.
///
/// Within each lobe the seeds start half a spacing inside the outer boundary
/// and step inward by `line_spacing`, stopping at the near-field exclusion
/// radius or once the per-lobe quota `λ/4/line_spacing` is filled. The last
/// boundary seeds no lobe of its own. Ordering is significant: seeds are
/// grouped by lobe, walking inward within each lobe.
pub fn seed_positions(config: &EngineConfig, boundaries: &[f64]) -> Vec<f64> {
    let per_lobe = (config.wavelength / 4.0 / config.line_spacing) as usize;
    let mut seeds = Vec::new();
    for pair in boundaries.windows(2) {
        let mut position = pair[0] - config.line_spacing / 2.0;
        let mut placed = 0;
        while position > NEAR_FIELD_RADIUS && placed < per_lobe {
            seeds.push(position);
            position -= config.line_spacing;
            placed += 1;
        }
    }
    seeds
}

#[cfg(test)]
mod tests {
    use super::seed_positions;
    use crate::config::EngineConfig;
    use crate::field::FieldModel;
    use crate::lobes::lobe_boundaries;

    #[test]
    fn seeds_stay_outside_the_near_field() {
        let config = EngineConfig::default();
        let field = FieldModel::new(&config);
        let boundaries = lobe_boundaries(&field, &config, 0.0);
        let seeds = seed_positions(&config, &boundaries);
        assert!(!seeds.is_empty());
        for &s in &seeds {
            assert!(s > 3.0);
        }
    }

    #[test]
    fn lobes_respect_spacing_and_quota() {
        let config = EngineConfig::default();
        let boundaries = [100.0, 200.0, 300.0];
        let seeds = seed_positions(&config, &boundaries);
        let per_lobe = (config.wavelength / 4.0 / config.line_spacing) as usize;
        // Two lobes, both far enough out to fill the quota.
        assert_eq!(seeds.len(), 2 * per_lobe);
        assert_eq!(seeds[0], 100.0 - config.line_spacing / 2.0);
        assert_eq!(seeds[per_lobe], 200.0 - config.line_spacing / 2.0);
        for lobe in seeds.chunks(per_lobe) {
            for pair in lobe.windows(2) {
                assert!((pair[0] - pair[1] - config.line_spacing).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn near_field_truncates_the_innermost_lobe() {
        let config = EngineConfig::default();
        // First lobe starts at 10 − 4 = 6 and can only fit one seed before
        // crossing the exclusion radius.
        let seeds = seed_positions(&config, &[10.0, 400.0]);
        assert_eq!(seeds, vec![6.0]);
    }

    #[test]
    fn fewer_than_two_boundaries_yield_no_seeds() {
        let config = EngineConfig::default();
        assert!(seed_positions(&config, &[]).is_empty());
        assert!(seed_positions(&config, &[150.0]).is_empty());
    }
}
