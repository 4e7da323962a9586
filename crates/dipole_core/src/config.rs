use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Speed of light in simulation units per second.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Speed of light squared, kept at the rounded value the field formulas were
/// calibrated with.
pub const C_SQUARED: f64 = 8.9876e16;
/// Vacuum permittivity.
pub const EPSILON_0: f64 = 8.8542e-12;
/// Vacuum permeability.
pub const MU_0: f64 = 1.2566e-6;
/// Free-space wave impedance.
pub const WAVE_IMPEDANCE: f64 = 376.730_313_4;

/// Radius around the source point excluded from seeding and tracing.
pub const NEAR_FIELD_RADIUS: f64 = 3.0;

/// Which closed-form dipole solution the field model evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DipoleVariant {
    /// Idealized point dipole with the exact near+far radiating solution.
    Hertzian,
    /// Half-wave rod dipole approximated by two point sources at ±λ/4.
    Rod,
}

/// Read-once engine configuration. Built at startup, validated once, and
/// passed by reference into every component; nothing here is mutated after
/// construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineConfig {
    pub variant: DipoleVariant,
    /// Wavelength λ in simulation units.
    pub wavelength: f64,
    /// Dipole moment amplitude p0.
    pub amplitude: f64,
    /// Animation frames per oscillation period.
    pub frames_per_period: usize,
    /// Zoom factor; the visible window spans λ · scale_factor on each axis.
    pub scale_factor: f64,
    /// Spacing between adjacent field-line seeds on the x-axis.
    pub line_spacing: f64,
    /// Poynting arrow grid spacing before window scaling, x direction.
    pub grid_spacing_x: f64,
    /// Poynting arrow grid spacing before window scaling, y direction.
    pub grid_spacing_y: f64,
    /// Field-line integration step factor; the step length is
    /// step_factor / |E|.
    pub step_factor: f64,
    /// Nominal field-line point budget; the tracer step cap is derived from
    /// this and `step_factor`.
    pub max_points: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant: DipoleVariant::Hertzian,
            wavelength: 256.0,
            amplitude: 100.0,
            frames_per_period: 100,
            scale_factor: 3.0,
            line_spacing: 8.0,
            grid_spacing_x: 20.0,
            grid_spacing_y: 20.0,
            step_factor: 0.25,
            max_points: 3500,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.wavelength.is_finite() || self.wavelength <= 0.0 {
            bail!("wavelength must be positive and finite.");
        }
        if !self.amplitude.is_finite() || self.amplitude <= 0.0 {
            bail!("amplitude must be positive and finite.");
        }
        if self.frames_per_period == 0 {
            bail!("frames_per_period must be greater than zero.");
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            bail!("scale_factor must be positive and finite.");
        }
        if !self.line_spacing.is_finite() || self.line_spacing <= 0.0 {
            bail!("line_spacing must be positive and finite.");
        }
        if !self.grid_spacing_x.is_finite() || self.grid_spacing_x <= 0.0 {
            bail!("grid_spacing_x must be positive and finite.");
        }
        if !self.grid_spacing_y.is_finite() || self.grid_spacing_y <= 0.0 {
            bail!("grid_spacing_y must be positive and finite.");
        }
        if !self.step_factor.is_finite() || self.step_factor <= 0.0 {
            bail!("step_factor must be positive and finite.");
        }
        if self.max_points == 0 {
            bail!("max_points must be greater than zero.");
        }
        Ok(())
    }

    /// Angular frequency ω = 2πc/λ.
    pub fn omega(&self) -> f64 {
        2.0 * std::f64::consts::PI * SPEED_OF_LIGHT / self.wavelength
    }

    /// Oscillation period T = λ/c.
    pub fn period(&self) -> f64 {
        self.wavelength / SPEED_OF_LIGHT
    }

    /// Half the visible window edge length, λ · scale_factor.
    pub fn window_extent(&self) -> f64 {
        self.wavelength * self.scale_factor
    }
}
