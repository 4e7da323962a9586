use crate::config::{DipoleVariant, EngineConfig, NEAR_FIELD_RADIUS, SPEED_OF_LIGHT};
use crate::field::FieldModel;
use crate::roots::bisect;

/// Number of radiation lobes searched for the Hertzian dipole.
const LOBE_COUNT: usize = 7;
/// Hard cap on the number of boundaries per frame.
const MAX_BOUNDARIES: usize = 100;

const BISECT_TOL: f64 = 1e-3;
const BISECT_MAX_ITER: usize = 25;

/// Axial projection of the Hertzian field along the x-axis,
/// `F(x, t) = cos(φ) − (xω/c)·sin(φ)` with `φ = ω(t − x/c)`.
/// Its zeros separate the field-line lobes.
pub fn axial_projection(omega: f64, x: f64, t: f64) -> f64 {
    let phase = -omega * (x / SPEED_OF_LIGHT - t);
    phase.cos() - (x * omega / SPEED_OF_LIGHT) * phase.sin()
}

/// Locates the lobe boundaries on the positive x-axis for time `t`,
/// ordered outward. The list is strictly increasing and recomputed fresh
/// every frame.
pub fn lobe_boundaries(field: &FieldModel, config: &EngineConfig, t: f64) -> Vec<f64> {
    match field.variant() {
        DipoleVariant::Hertzian => hertzian_boundaries(field.omega(), config, t),
        DipoleVariant::Rod => rod_boundaries(field.omega(), config, t),
    }
}

fn hertzian_boundaries(omega: f64, config: &EngineConfig, t: f64) -> Vec<f64> {
    let step = config.wavelength / 16.0;
    let limit = config.scale_factor * LOBE_COUNT as f64 * config.wavelength / 4.0;
    let mut x1 = config.line_spacing / 2.0 + NEAR_FIELD_RADIUS;
    let mut x2 = x1 + step;
    let mut boundaries = Vec::new();

    loop {
        let f1 = axial_projection(omega, x1, t);
        let f2 = axial_projection(omega, x2, t);
        if f1 * f2 <= 0.0 {
            let root = bisect(x1, x2, BISECT_TOL, BISECT_MAX_ITER, |x| {
                axial_projection(omega, x, t)
            });
            boundaries.push(root);
        }
        x1 = x2;
        x2 += step;

        if boundaries.last().is_some_and(|&last| last > limit) {
            break;
        }
        if x1 > limit {
            break;
        }
        if boundaries.len() >= MAX_BOUNDARIES {
            break;
        }
    }
    boundaries
}

/// Rod lobes follow a closed-form radius per lobe instead of a root search:
/// each boundary is the transverse reach of a wavefront launched `n`
/// half-wavelengths ago, `√(a² − (λ/4)²)` with `a = n·λ/2 + c·t̃`.
fn rod_boundaries(omega: f64, config: &EngineConfig, t: f64) -> Vec<f64> {
    let quarter_wave = config.wavelength / 4.0;
    let half_period = std::f64::consts::PI / omega;
    let mut tt = t;
    while tt > half_period {
        tt -= half_period;
    }

    let mut boundaries = Vec::new();
    for n in 0..rod_lobe_count(config.scale_factor) {
        let reach = (2 * n) as f64 * quarter_wave + SPEED_OF_LIGHT * tt;
        if reach > quarter_wave {
            boundaries.push((reach * reach - quarter_wave * quarter_wave).sqrt());
        }
    }
    boundaries
}

fn rod_lobe_count(scale_factor: f64) -> usize {
    if scale_factor < 1.0 {
        4
    } else if scale_factor == 1.0 {
        5
    } else if scale_factor == 2.0 {
        7
    } else if scale_factor == 4.0 {
        12
    } else {
        7
    }
}

#[cfg(test)]
mod tests {
    use super::{axial_projection, lobe_boundaries, MAX_BOUNDARIES};
    use crate::config::{DipoleVariant, EngineConfig};
    use crate::field::FieldModel;

    #[test]
    fn hertzian_boundaries_are_strictly_increasing_and_bounded() {
        let config = EngineConfig::default();
        let field = FieldModel::new(&config);
        for &t in &[0.0, config.period() / 3.0, config.period() * 0.9] {
            let boundaries = lobe_boundaries(&field, &config, t);
            assert!(!boundaries.is_empty());
            assert!(boundaries.len() <= MAX_BOUNDARIES);
            for pair in boundaries.windows(2) {
                assert!(pair[1] > pair[0], "boundaries not increasing at t={t}");
            }
            for &b in &boundaries {
                assert!(b.is_finite());
            }
        }
    }

    #[test]
    fn first_boundary_lies_beyond_the_search_start() {
        let config = EngineConfig::default();
        let field = FieldModel::new(&config);
        let boundaries = lobe_boundaries(&field, &config, 0.0);
        assert!(boundaries[0] > 3.0 + config.line_spacing / 2.0);
    }

    #[test]
    fn boundaries_are_zeros_of_the_axial_projection() {
        let config = EngineConfig::default();
        let field = FieldModel::new(&config);
        let t = config.period() / 5.0;
        let omega = config.omega();
        for &b in &lobe_boundaries(&field, &config, t) {
            // Bisection stops on interval width 1e-3; F has slope O(ωx/c)
            // there, so allow a generous residual.
            assert!(axial_projection(omega, b, t).abs() < 0.2);
        }
    }

    #[test]
    fn rod_boundaries_are_strictly_increasing() {
        let config = EngineConfig {
            variant: DipoleVariant::Rod,
            ..EngineConfig::default()
        };
        let field = FieldModel::new(&config);
        for &t in &[0.0, config.period() / 4.0, config.period() * 2.3] {
            let boundaries = lobe_boundaries(&field, &config, t);
            for pair in boundaries.windows(2) {
                assert!(pair[1] > pair[0]);
            }
            for &b in &boundaries {
                assert!(b.is_finite() && b > 0.0);
            }
        }
    }
}
