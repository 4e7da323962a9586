use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::field::FieldModel;

/// Floor applied to |E| before it divides the step length; without it the
/// step blows up near field nulls.
const FIELD_FLOOR: f64 = 1e-6;

/// One traced electric field line in the upper-right half plane.
///
/// `orientation` is +1 when the line runs from the negative to the positive
/// pole and −1 otherwise; consumers use it purely for coloring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Streamline {
    pub points: Vec<Vector2<f64>>,
    pub orientation: i8,
}

/// Integrates one field line from `(x_start, 0)` with 4th-order Runge-Kutta
/// and a field-adaptive step, `step_factor / |E|`.
///
/// Tracing stops as soon as the point leaves the valid region (inside the
/// near-field radius, below the axis, too close to the dipole axis) or the
/// step cap is reached; the final point is still appended, so a short or
/// even single-point line is a normal outcome.
pub fn trace(field: &FieldModel, config: &EngineConfig, t: f64, x_start: f64) -> Streamline {
    let seed = field.electric(t, x_start, 0.0);
    let direction = if seed.e.y > 0.0 { 1.0 } else { -1.0 };
    let max_steps = (config.max_points as f64 / config.step_factor) as usize + 100;

    let mut position = Vector2::new(x_start, 0.0);
    let mut points = Vec::new();
    let mut step = 0;
    loop {
        let r2 = position.norm_squared();
        if !(r2 >= 9.0 && position.y >= 0.0 && step < max_steps && position.x > 1.0) {
            break;
        }
        points.push(position);
        position = rk4_step(field, config.step_factor, t, position, direction);
        step += 1;
    }
    points.push(position);

    Streamline {
        points,
        orientation: if direction > 0.0 { -1 } else { 1 },
    }
}

fn rk4_step(
    field: &FieldModel,
    step_factor: f64,
    t: f64,
    position: Vector2<f64>,
    direction: f64,
) -> Vector2<f64> {
    let s0 = field.electric(t, position.x, position.y);
    let h = step_factor / s0.magnitude.max(FIELD_FLOOR) * direction;

    let k1 = s0.e * h;
    let p1 = position + k1 * 0.5;
    let k2 = field.electric(t, p1.x, p1.y).e * h;
    let p2 = position + k2 * 0.5;
    let k3 = field.electric(t, p2.x, p2.y).e * h;
    let p3 = position + k3;
    let k4 = field.electric(t, p3.x, p3.y).e * h;

    position + (k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0
}
