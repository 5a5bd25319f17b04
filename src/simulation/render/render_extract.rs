use serde::Serialize;

use crate::core::geometry::{axis_and_normal, pivot_local_position, plank_thickness_or_default, target_center};
use crate::core::Rect;
use crate::domain::{LogEntry, ObjectId};

use super::SeesawCore;

/// Host-measured layout of the seesaw widgets
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneLayout {
    pub container: Rect,
    pub pivot: Rect,
    /// Rendered plank height, if the host could measure it
    pub plank_thickness: Option<f64>,
}

/// Where and how to draw one weight this frame (container-local px)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPlacement {
    pub id: ObjectId,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub weight: f64,
    pub color: String,
    pub dropping: bool,
}

pub(super) fn placements(core: &SeesawCore, layout: &SceneLayout) -> Vec<ObjectPlacement> {
    let pivot = pivot_local_position(&layout.container, &layout.pivot);
    let frame = axis_and_normal(core.current_angle);
    let thickness = plank_thickness_or_default(layout.plank_thickness);

    core.objects
        .iter()
        .map(|obj| {
            let radius = core.config.radius_for(obj.weight());
            let center = target_center(pivot, frame, obj.x(), radius, thickness, obj.drop_progress());
            ObjectPlacement {
                id: obj.id(),
                cx: center.x,
                cy: center.y,
                radius,
                weight: obj.weight(),
                color: obj.color().to_string(),
                dropping: obj.is_dropping(),
            }
        })
        .collect()
}

pub(super) fn log_entries(core: &SeesawCore) -> Vec<LogEntry> {
    core.objects.iter().rev().map(LogEntry::for_object).collect()
}

/// CSS transform for the plank element (centered horizontally on the pivot)
pub(super) fn plank_transform(core: &SeesawCore) -> String {
    format!("translateX(-50%) rotate({}deg)", core.angle_deg())
}
