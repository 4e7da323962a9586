use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::{
    DipoleVariant, EngineConfig, C_SQUARED, EPSILON_0, MU_0, SPEED_OF_LIGHT, WAVE_IMPEDANCE,
};

/// Divisor applied to both rod-dipole field contributions.
const ROD_FACTOR: f64 = 40.0;

/// Instantaneous electric field at one point: planar components and magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    pub e: Vector2<f64>,
    pub magnitude: f64,
}

impl FieldSample {
    fn zero() -> Self {
        Self {
            e: Vector2::zeros(),
            magnitude: 0.0,
        }
    }

    fn from_components(ex: f64, ey: f64) -> Self {
        Self {
            e: Vector2::new(ex, ey),
            magnitude: ex.hypot(ey),
        }
    }
}

/// Instantaneous Poynting vector at one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoyntingSample {
    pub position: Vector2<f64>,
    pub s: Vector2<f64>,
    pub magnitude: f64,
}

/// Closed-form evaluator for the instantaneous E, H and Poynting fields of an
/// oscillating dipole in the x-y symmetry plane. The dipole variant is
/// resolved once at construction; every evaluation is a pure function of
/// `(t, x, y)`.
#[derive(Debug, Clone, Copy)]
pub struct FieldModel {
    variant: DipoleVariant,
    amplitude: f64,
    omega: f64,
    quarter_wave: f64,
}

impl FieldModel {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            variant: config.variant,
            amplitude: config.amplitude,
            omega: config.omega(),
            quarter_wave: config.wavelength / 4.0,
        }
    }

    pub fn variant(&self) -> DipoleVariant {
        self.variant
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Dipole moment p(t) = p0 · cos(ωt).
    pub fn dipole_moment(&self, t: f64) -> f64 {
        self.amplitude * (self.omega * t).cos()
    }

    /// Sign of the instantaneous dipole moment, used by consumers to color
    /// the pole markers.
    pub fn polarity(&self, t: f64) -> f64 {
        self.dipole_moment(t).signum()
    }

    /// Electric field at `(x, y)` and time `t`. Returns the zero sample at
    /// the singular source point(s) rather than failing.
    pub fn electric(&self, t: f64, x: f64, y: f64) -> FieldSample {
        match self.variant {
            DipoleVariant::Hertzian => self.electric_hertzian(t, x, y),
            DipoleVariant::Rod => self.electric_rod(t, x, y),
        }
    }

    fn electric_hertzian(&self, t: f64, x: f64, y: f64) -> FieldSample {
        let r2 = x * x + y * y;
        let r = r2.sqrt();
        if r == 0.0 {
            return FieldSample::zero();
        }
        let tt = t - r / SPEED_OF_LIGHT;
        let p = self.amplitude * (self.omega * tt).cos();
        let pd1 = -self.omega * self.amplitude * (self.omega * tt).sin();
        let cosa = y / r;
        let far = self.omega * self.omega * p / (C_SQUARED * r);
        let polar = far - pd1 / (SPEED_OF_LIGHT * r2) - p / (r2 * r);
        let radial = (3.0 * pd1 / (SPEED_OF_LIGHT * r2) - far + 3.0 * p / (r2 * r)) * cosa;
        let ex = radial * (x / r);
        let ey = radial * cosa + polar;
        FieldSample::from_components(ex, ey)
    }

    fn electric_rod(&self, t: f64, x: f64, y: f64) -> FieldSample {
        let l_plus = y + self.quarter_wave;
        let l_minus = y - self.quarter_wave;
        let r_plus = (x * x + l_plus * l_plus).sqrt();
        let r_minus = (x * x + l_minus * l_minus).sqrt();
        if r_plus == 0.0 || r_minus == 0.0 {
            return FieldSample::zero();
        }
        let a_plus = (self.omega * (t - r_plus / SPEED_OF_LIGHT)).cos() / r_plus;
        let a_minus = (self.omega * (t - r_minus / SPEED_OF_LIGHT)).cos() / r_minus;
        let ey = (a_plus + a_minus) / ROD_FACTOR;
        let ex = if x == 0.0 {
            0.0
        } else {
            -(l_plus / x * a_plus + l_minus / x * a_minus) / ROD_FACTOR
        };
        FieldSample::from_components(ex, ey)
    }

    /// Azimuthal magnetic field component in the symmetry plane.
    ///
    /// The Hertzian form is normalized by the free-space wave impedance,
    /// `H = ṗ/(Z₀r) + ωp/(Z₀cr)`; the rod form superposes the two retarded
    /// source contributions. Returns 0 at degenerate radii.
    pub fn magnetic(&self, t: f64, x: f64, y: f64) -> f64 {
        match self.variant {
            DipoleVariant::Hertzian => {
                let r = (x * x + y * y).sqrt();
                if r == 0.0 {
                    return 0.0;
                }
                let tt = t - r / SPEED_OF_LIGHT;
                let p = self.amplitude * (self.omega * tt).cos();
                let pd1 = -self.omega * self.amplitude * (self.omega * tt).sin();
                pd1 / (WAVE_IMPEDANCE * r) + self.omega * p / (WAVE_IMPEDANCE * SPEED_OF_LIGHT * r)
            }
            DipoleVariant::Rod => {
                let r_plus = (x * x + (y + self.quarter_wave).powi(2)).sqrt();
                let r_minus = (x * x + (y - self.quarter_wave).powi(2)).sqrt();
                if r_plus == 0.0 || r_minus == 0.0 || x == 0.0 {
                    return 0.0;
                }
                let c_plus = (self.omega * (t - r_plus / SPEED_OF_LIGHT)).cos();
                let c_minus = (self.omega * (t - r_minus / SPEED_OF_LIGHT)).cos();
                (c_plus + c_minus) / (x * ROD_FACTOR)
            }
        }
    }

    /// Poynting vector S = E × H projected into the plane:
    /// `Sx = Ey·H`, `Sy = −Ex·H`.
    pub fn poynting(&self, t: f64, x: f64, y: f64) -> PoyntingSample {
        let e = self.electric(t, x, y);
        let h = self.magnetic(t, x, y);
        let sx = e.e.y * h;
        let sy = -e.e.x * h;
        PoyntingSample {
            position: Vector2::new(x, y),
            s: Vector2::new(sx, sy),
            magnitude: sx.hypot(sy),
        }
    }

    /// Total electromagnetic energy density, ε₀|E|² + μ₀H².
    pub fn energy_density(&self, t: f64, x: f64, y: f64) -> f64 {
        let e = self.electric(t, x, y);
        let h = self.magnetic(t, x, y);
        EPSILON_0 * e.magnitude * e.magnitude + MU_0 * h * h
    }
}
