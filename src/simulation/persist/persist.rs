//! JSON snapshot of the object list
//!
//! Format: `[{"id":0,"x":-120.5,"weight":4,"color":"hsl(210, 80%, 55%)"}, ...]`
//! in insertion order. Animation state is not stored; restored weights are
//! already resting on the plank.

use std::collections::HashSet;

use crate::domain::{ObjectId, SavedObject, WeightObject};

pub fn encode_objects(objects: &[WeightObject]) -> String {
    let saved: Vec<SavedObject> = objects.iter().map(SavedObject::from).collect();
    serde_json::to_string(&saved).unwrap_or_else(|_| "[]".to_string())
}

/// Parse and validate a snapshot. `null` is treated as an empty list.
pub fn decode_objects(json: &str) -> Result<Vec<SavedObject>, String> {
    let saved: Option<Vec<SavedObject>> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    let saved = saved.unwrap_or_default();

    let mut seen = HashSet::with_capacity(saved.len());
    for obj in &saved {
        if !obj.x.is_finite() {
            return Err(format!("weight #{} has invalid x {}", obj.id, obj.x));
        }
        if !(obj.weight > 0.0 && obj.weight.is_finite()) {
            return Err(format!("weight #{} has invalid mass {}", obj.id, obj.weight));
        }
        // The id counter resumes at max + 1
        if obj.id == ObjectId::MAX {
            return Err(format!("weight id {} leaves no room for new ids", obj.id));
        }
        if !seen.insert(obj.id) {
            return Err(format!("duplicate weight id {}", obj.id));
        }
    }

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_keeps_order_and_drops_animation_state() {
        let objects = vec![
            WeightObject::falling(4, 30.0, 2.0, "red"),
            WeightObject::settled(1, -15.5, 9.0, "blue"),
        ];

        let json = encode_objects(&objects);
        let saved = decode_objects(&json).unwrap();

        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].id, 4);
        assert_eq!(saved[1].x, -15.5);
        assert!(!json.contains("drop"));
    }

    #[test]
    fn extra_fields_from_older_hosts_are_ignored() {
        let json = r#"[{"id":3,"x":12,"weight":5,"color":"red","isDropping":true,"dropProgress":0.4}]"#;
        let saved = decode_objects(json).unwrap();
        assert_eq!(saved[0].id, 3);
        assert_eq!(saved[0].weight, 5.0);
    }

    #[test]
    fn malformed_snapshots_are_rejected() {
        assert!(decode_objects("{}").is_err());
        assert!(decode_objects("not json").is_err());
        assert!(decode_objects(r#"[{"id":1,"x":3}]"#).is_err());
        assert!(decode_objects(r#"[{"id":1,"x":3,"weight":0,"color":"red"}]"#).is_err());
        assert!(decode_objects(
            r#"[{"id":1,"x":3,"weight":1,"color":"a"},{"id":1,"x":4,"weight":1,"color":"b"}]"#
        )
        .is_err());
    }

    #[test]
    fn largest_id_is_rejected() {
        let json = format!(r#"[{{"id":{},"x":3,"weight":1,"color":"a"}}]"#, ObjectId::MAX);
        assert!(decode_objects(&json).is_err());

        let json = format!(r#"[{{"id":{},"x":3,"weight":1,"color":"a"}}]"#, ObjectId::MAX - 1);
        assert!(decode_objects(&json).is_ok());
    }

    #[test]
    fn null_means_nothing_saved() {
        assert_eq!(decode_objects("null").unwrap(), Vec::new());
    }
}
