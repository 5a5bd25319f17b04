//! Seesaw simulation state
//!
//! `SeesawCore` owns the authoritative model: the weights on the plank, the
//! plank angle and angular velocity, the id counter and the pause flag.
//! It is only mutated through commands (add/delete/reset/pause) and the
//! per-frame tick; geometry and physics stay pure and are handed the
//! object slice.
//!
//! Layout:
//! - commands/  - user-driven mutations
//! - step/      - per-frame integration
//! - init/      - construction, rehydration, settings, rng
//! - render/    - placement extraction for the host renderer
//! - persist/   - JSON snapshot of the object list
//! - facade.rs  - wasm-bindgen surface

use crate::domain::{LogEntry, ObjectId, SeesawConfig, WeightObject};
use crate::systems::physics::{self, TorqueReport};

#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "persist/persist.rs"]
pub mod persist;
mod facade;

pub use facade::Seesaw;
pub use random::WeightDraw;
pub use render_extract::{ObjectPlacement, SceneLayout};

/// The seesaw model
pub struct SeesawCore {
    config: SeesawConfig,
    objects: Vec<WeightObject>,

    // Plank state
    current_angle: f64,
    angular_velocity: f64,

    next_object_id: ObjectId,
    paused: bool,

    // Next weight offered to the user
    next_draw: WeightDraw,
    rng_state: u32,

    // Frame clock
    last_timestamp_ms: Option<f64>,
    frame: u64,

    // Object list changed since the last snapshot was taken
    persist_dirty: bool,
}

impl SeesawCore {
    /// Empty seesaw with default settings
    pub fn new() -> Self {
        init::create_core(SeesawConfig::default(), init::DEFAULT_SEED)
    }

    pub fn with_config(config: SeesawConfig) -> Self {
        init::create_core(config, init::DEFAULT_SEED)
    }

    pub fn with_seed(config: SeesawConfig, seed: u32) -> Self {
        init::create_core(config, seed)
    }

    /// Rebuild from a persisted snapshot. Missing or malformed data starts empty.
    pub fn restore(config: SeesawConfig, seed: u32, saved_json: Option<&str>) -> Self {
        init::restore_core(config, seed, saved_json)
    }

    // === SETTINGS ===

    pub fn config(&self) -> &SeesawConfig {
        &self.config
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_damping(&mut self, damping: f64) {
        settings::set_damping(self, damping);
    }

    // === STATE ===

    pub fn objects(&self) -> &[WeightObject] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn angle_deg(&self) -> f64 {
        self.current_angle.to_degrees()
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn next_object_id(&self) -> ObjectId {
        self.next_object_id
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn next_draw(&self) -> &WeightDraw {
        &self.next_draw
    }

    pub fn torque_report(&self) -> TorqueReport {
        physics::torque_report(&self.objects, self.config.gravity)
    }

    // === COMMANDS ===

    /// Drop a weight of a given mass and color at `x` px from the pivot.
    /// Returns the new id, or `None` while paused.
    pub fn add_weight(&mut self, x: f64, weight: f64, color: &str) -> Option<ObjectId> {
        commands::add_weight(self, x, weight, color)
    }

    /// Drop the currently offered weight at `x` and roll the next one
    pub fn drop_next_weight(&mut self, x: f64) -> Option<ObjectId> {
        commands::drop_next_weight(self, x)
    }

    /// Remove a weight by id. Unknown ids are ignored.
    pub fn delete_weight(&mut self, id: ObjectId) -> bool {
        commands::delete_weight(self, id)
    }

    pub fn reset(&mut self) {
        commands::reset(self)
    }

    pub fn set_paused(&mut self, paused: bool) {
        commands::set_paused(self, paused)
    }

    pub fn toggle_pause(&mut self) -> bool {
        commands::toggle_pause(self)
    }

    // === STEP ===

    /// Integrate one frame of `delta_time` seconds
    pub fn tick(&mut self, delta_time: f64) {
        step::tick(self, delta_time);
    }

    /// Integrate up to a host frame timestamp (ms, e.g. `requestAnimationFrame`)
    pub fn advance_to(&mut self, timestamp_ms: f64) {
        step::advance_to(self, timestamp_ms);
    }

    // === RENDER ===

    pub fn placements(&self, layout: &SceneLayout) -> Vec<ObjectPlacement> {
        render_extract::placements(self, layout)
    }

    /// Placement log, newest first
    pub fn log_entries(&self) -> Vec<LogEntry> {
        render_extract::log_entries(self)
    }

    pub fn plank_transform(&self) -> String {
        render_extract::plank_transform(self)
    }

    // === PERSISTENCE ===

    pub fn snapshot_json(&self) -> String {
        persist::encode_objects(&self.objects)
    }

    /// True once after every change that should be written back
    pub fn take_persist_dirty(&mut self) -> bool {
        std::mem::take(&mut self.persist_dirty)
    }
}

impl Default for SeesawCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
