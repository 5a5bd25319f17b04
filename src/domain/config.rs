//! Tunable constants for the seesaw model.
//!
//! Defaults reproduce the classic demo: 30° tilt limit, 0.7 s drop, 1–10 kg
//! weights. Hosts may override any subset through a JSON document.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeesawConfig {
    pub gravity: f64,
    /// Rotational inertia of the bare plank
    pub board_inertia: f64,
    /// Fraction of angular velocity removed every tick
    pub damping: f64,
    pub max_angle_deg: f64,
    /// Seconds a new weight takes to land
    pub drop_duration: f64,
    pub radius_base: f64,
    pub radius_per_kg: f64,
    pub min_weight: u32,
    pub max_weight: u32,
    pub storage_key: String,
}

impl Default for SeesawConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            board_inertia: 10_000.0,
            damping: 0.005,
            max_angle_deg: 30.0,
            drop_duration: 0.7,
            radius_base: 15.0,
            radius_per_kg: 1.0,
            min_weight: 1,
            max_weight: 10,
            storage_key: "seesawObjects".to_string(),
        }
    }
}

impl SeesawConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SeesawConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.gravity >= 0.0 && self.gravity.is_finite()) {
            return Err(format!("gravity must be a finite non-negative number, got {}", self.gravity));
        }
        if !(self.board_inertia > 0.0 && self.board_inertia.is_finite()) {
            return Err(format!("boardInertia must be positive, got {}", self.board_inertia));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(format!("damping must be in [0, 1), got {}", self.damping));
        }
        if !(self.max_angle_deg > 0.0 && self.max_angle_deg <= 90.0) {
            return Err(format!("maxAngleDeg must be in (0, 90], got {}", self.max_angle_deg));
        }
        if !(self.drop_duration > 0.0 && self.drop_duration.is_finite()) {
            return Err(format!("dropDuration must be positive, got {}", self.drop_duration));
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(format!(
                "weight range must satisfy 1 <= minWeight <= maxWeight, got {}..={}",
                self.min_weight, self.max_weight
            ));
        }
        if self.storage_key.is_empty() {
            return Err("storageKey must not be empty".to_string());
        }
        Ok(())
    }

    pub fn max_angle_rad(&self) -> f64 {
        self.max_angle_deg.to_radians()
    }

    /// Display radius for an object of `weight` kg
    pub fn radius_for(&self, weight: f64) -> f64 {
        self.radius_base + self.radius_per_kg * weight
    }
}
