use crate::config::{EngineConfig, SPEED_OF_LIGHT};

/// Radial offsets of the successive field nulls inside one wavefront
/// generation, in simulation units.
const RING_OFFSETS: [f64; 17] = [
    5.0, 16.0, 26.0, 35.0, 43.0, 50.0, 55.0, 60.0, 64.0, 68.0, 73.0, 79.0, 86.0, 94.0, 103.0,
    112.0, 125.0,
];

/// Radii of the magnetic field-line rings visible at time `t`.
///
/// Field information travels outward at c; every half period launches a new
/// wavefront whose leading radius is `c·(t − T/4) − λ`. Each generation
/// contributes the configured null offsets, and only radii strictly inside
/// the visible window `(0, λ·scale_factor)` are kept. The set changes size
/// discretely as wavefronts enter and leave the window, so consumers diff
/// whole sets between frames rather than tracking individual rings.
pub fn ring_radii(config: &EngineConfig, t: f64) -> Vec<f64> {
    let period = config.period();
    let t = t % period;
    let window = config.window_extent();

    let mut radii = Vec::new();
    let mut front = SPEED_OF_LIGHT * (t - period / 4.0) - config.wavelength;
    while front < window {
        for offset in RING_OFFSETS {
            let radius = front + offset;
            if radius > 0.0 && radius < window {
                radii.push(radius);
            }
        }
        front += config.wavelength / 2.0;
    }
    radii
}
