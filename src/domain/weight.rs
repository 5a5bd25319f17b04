use std::fmt;

use serde::{Deserialize, Serialize};

pub type ObjectId = u32;

/// In-flight drop animation state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropAnimation {
    /// Seconds since the drop began
    pub timer: f64,
    /// Eased progress, 1.0 = spawn height, 0.0 = on the plank
    pub progress: f64,
}

impl DropAnimation {
    pub fn start() -> Self {
        Self { timer: 0.0, progress: 1.0 }
    }
}

/// One weight dropped on the plank.
///
/// `x` is the signed pixel offset from the pivot (negative = left). Identity,
/// position, mass and color never change after creation; only the drop
/// animation advances until the object settles.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightObject {
    id: ObjectId,
    x: f64,
    weight: f64,
    color: String,
    pub(crate) drop: Option<DropAnimation>,
}

impl WeightObject {
    /// A freshly spawned object, still in the air
    pub fn falling(id: ObjectId, x: f64, weight: f64, color: impl Into<String>) -> Self {
        Self {
            id,
            x,
            weight,
            color: color.into(),
            drop: Some(DropAnimation::start()),
        }
    }

    /// An object already resting on the plank (rehydrated state)
    pub fn settled(id: ObjectId, x: f64, weight: f64, color: impl Into<String>) -> Self {
        Self {
            id,
            x,
            weight,
            color: color.into(),
            drop: None,
        }
    }

    pub fn id(&self) -> ObjectId { self.id }

    pub fn x(&self) -> f64 { self.x }

    pub fn weight(&self) -> f64 { self.weight }

    pub fn color(&self) -> &str { &self.color }

    pub fn side(&self) -> Side { Side::of(self.x) }

    pub fn is_dropping(&self) -> bool { self.drop.is_some() }

    /// 0.0 once settled
    pub fn drop_progress(&self) -> f64 {
        self.drop.map(|d| d.progress).unwrap_or(0.0)
    }

    pub fn drop_timer(&self) -> Option<f64> {
        self.drop.map(|d| d.timer)
    }
}

/// Which arm of the plank an offset falls on. The pivot itself counts as right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn of(x: f64) -> Self {
        if x < 0.0 { Side::Left } else { Side::Right }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
        }
    }
}

/// One line of the placement log shown next to the seesaw
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogEntry {
    pub id: ObjectId,
    pub weight: f64,
    pub side: Side,
    /// Rounded absolute distance from the pivot, in px
    pub distance: f64,
    pub text: String,
}

impl LogEntry {
    pub fn for_object(obj: &WeightObject) -> Self {
        let side = obj.side();
        let distance = obj.x().abs().round();
        let text = format!(
            "Weight: {} kg | Position: placed on the {} side. ({}) px",
            obj.weight(),
            side.label(),
            distance
        );
        Self {
            id: obj.id(),
            weight: obj.weight(),
            side,
            distance,
            text,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Persisted shape of a weight. Extra fields written by older hosts are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedObject {
    pub id: ObjectId,
    pub x: f64,
    pub weight: f64,
    pub color: String,
}

impl From<&WeightObject> for SavedObject {
    fn from(obj: &WeightObject) -> Self {
        Self {
            id: obj.id(),
            x: obj.x(),
            weight: obj.weight(),
            color: obj.color().to_string(),
        }
    }
}

impl From<SavedObject> for WeightObject {
    fn from(saved: SavedObject) -> Self {
        WeightObject::settled(saved.id, saved.x, saved.weight, saved.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falling_object_starts_at_full_progress() {
        let obj = WeightObject::falling(3, -40.0, 7.0, "hsl(10, 80%, 55%)");
        assert!(obj.is_dropping());
        assert_eq!(obj.drop_progress(), 1.0);
        assert_eq!(obj.drop_timer(), Some(0.0));
    }

    #[test]
    fn settled_object_has_no_drop_state() {
        let obj = WeightObject::settled(3, -40.0, 7.0, "red");
        assert!(!obj.is_dropping());
        assert_eq!(obj.drop_progress(), 0.0);
        assert_eq!(obj.drop_timer(), None);
    }

    #[test]
    fn pivot_counts_as_right_side() {
        assert_eq!(Side::of(0.0), Side::Right);
        assert_eq!(Side::of(-0.001), Side::Left);
        assert_eq!(Side::of(12.0), Side::Right);
    }

    #[test]
    fn log_entry_reports_rounded_distance() {
        let obj = WeightObject::falling(1, -120.6, 4.0, "blue");
        let entry = LogEntry::for_object(&obj);

        assert_eq!(entry.side, Side::Left);
        assert_eq!(entry.distance, 121.0);
        assert_eq!(
            entry.to_string(),
            "Weight: 4 kg | Position: placed on the LEFT side. (121) px"
        );
    }
}
