//! The `dipole_core` crate computes the time-varying electromagnetic field of
//! an oscillating dipole (Hertzian or half-wave rod) and the geometry derived
//! from it for animation frames: electric field lines, magnetic ring radii,
//! and Poynting-vector grid samples. Rendering is an external concern; this
//! crate only produces arrays of points and vectors.
//!
//! Key components:
//! - **Config**: `EngineConfig` / `DipoleVariant`, the read-once run setup.
//! - **Field**: `FieldModel`, closed-form E, H, Poynting and energy-density
//!   evaluators.
//! - **Roots**: generic bisection solver used to refine lobe boundaries.
//! - **Lobes / Seeds**: segmentation of the x-axis into radiation lobes and
//!   placement of field-line seeds within them.
//! - **Streamline**: RK4 field-line tracer with field-adaptive step size.
//! - **Rings**: traveling-wavefront scheduler for magnetic field-line radii.
//! - **Frame**: `Engine`, assembling the full per-frame payload.

pub mod config;
pub mod field;
pub mod frame;
pub mod lobes;
pub mod rings;
pub mod roots;
pub mod seeds;
pub mod streamline;
