//! Plank geometry
//!
//! Maps a pivot-relative distance on the (possibly rotated) plank to a
//! container-local screen center. All functions are pure.
//!
//! Screen coordinates grow right (+x) and down (+y), so a positive angle
//! rotates the plank clockwise and the normal `(sin, -cos)` points up at
//! angle 0.

use super::vec2::Vec2;

/// Thickness used when the host cannot report the plank's height
pub const DEFAULT_PLANK_THICKNESS: f64 = 12.0;
/// Clearance between the plank surface and a resting object
pub const SURFACE_GAP: f64 = 2.0;
/// Extra offset along the normal at `drop_factor == 1`
pub const DROP_HEIGHT: f64 = 200.0;

/// Axis-aligned bounding box as reported by the host (client coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Unit axis along the plank and its outward normal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFrame {
    pub axis: Vec2,
    pub normal: Vec2,
}

/// Pivot center expressed in container-local coordinates
pub fn pivot_local_position(container: &Rect, pivot: &Rect) -> Vec2 {
    pivot.center() - Vec2::new(container.left, container.top)
}

pub fn axis_and_normal(angle: f64) -> AxisFrame {
    let (sin, cos) = angle.sin_cos();
    AxisFrame {
        axis: Vec2::new(cos, sin),
        normal: Vec2::new(sin, -cos),
    }
}

/// Resolve the host-reported thickness, falling back when it is missing,
/// zero or not a number.
pub fn plank_thickness_or_default(reported: Option<f64>) -> f64 {
    match reported {
        Some(t) if t.is_finite() && t != 0.0 => t,
        _ => DEFAULT_PLANK_THICKNESS,
    }
}

/// Center of an object of `radius` sitting `distance` px from the pivot.
///
/// `drop_factor` in `[0, 1]` lifts the object along the normal while it is
/// still falling: 0 rests on the surface, 1 is the spawn height.
pub fn target_center(
    pivot: Vec2,
    frame: AxisFrame,
    distance: f64,
    radius: f64,
    plank_thickness: f64,
    drop_factor: f64,
) -> Vec2 {
    let offset = plank_thickness / 2.0 + radius + SURFACE_GAP;
    let mut center = pivot + frame.axis * distance + frame.normal * offset;

    if drop_factor > 0.0 {
        center = center + frame.normal * (DROP_HEIGHT * drop_factor);
    }

    center
}
