use wasm_bindgen::prelude::*;

use crate::core::Rect;
use crate::domain::SeesawConfig;
use crate::persistence::{default_store, ObjectStore};

use super::{SceneLayout, SeesawCore};

fn initial_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u32::MAX as f64) as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        super::init::DEFAULT_SEED
    }
}

/// JS-facing seesaw: owns the model, the measured layout and the store
#[wasm_bindgen]
pub struct Seesaw {
    core: SeesawCore,
    layout: SceneLayout,
    store: Box<dyn ObjectStore>,
}

#[wasm_bindgen]
impl Seesaw {
    /// Create a seesaw, restoring any weights saved by a previous session
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_store(SeesawConfig::default(), default_store(), initial_seed())
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config_json(json: String) -> Result<Seesaw, JsValue> {
        let config = SeesawConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::with_store(config, default_store(), initial_seed()))
    }

    /// Replace the settings. A new `storageKey` moves the saved weights to it.
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.load_config_str(&json).map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.core.set_gravity(gravity);
    }

    pub fn set_damping(&mut self, damping: f64) {
        self.core.set_damping(damping);
    }

    /// Report the container/pivot bounding boxes and plank height.
    /// Pass `undefined` for the thickness when it cannot be measured.
    #[allow(clippy::too_many_arguments)]
    pub fn set_layout(
        &mut self,
        container_left: f64,
        container_top: f64,
        container_width: f64,
        container_height: f64,
        pivot_left: f64,
        pivot_top: f64,
        pivot_width: f64,
        pivot_height: f64,
        plank_thickness: Option<f64>,
    ) {
        self.layout = SceneLayout {
            container: Rect::new(container_left, container_top, container_width, container_height),
            pivot: Rect::new(pivot_left, pivot_top, pivot_width, pivot_height),
            plank_thickness,
        };
    }

    // === STATE ===

    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f64 { self.core.current_angle() }

    #[wasm_bindgen(getter)]
    pub fn angle_deg(&self) -> f64 { self.core.angle_deg() }

    #[wasm_bindgen(getter)]
    pub fn angular_velocity(&self) -> f64 { self.core.angular_velocity() }

    #[wasm_bindgen(getter)]
    pub fn object_count(&self) -> usize { self.core.object_count() }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn next_weight(&self) -> f64 { self.core.next_draw().weight }

    #[wasm_bindgen(getter)]
    pub fn next_color(&self) -> String { self.core.next_draw().color.clone() }

    #[wasm_bindgen(getter)]
    pub fn left_weight(&self) -> f64 { self.core.torque_report().left_weight }

    #[wasm_bindgen(getter)]
    pub fn right_weight(&self) -> f64 { self.core.torque_report().right_weight }

    #[wasm_bindgen(getter)]
    pub fn total_weight(&self) -> f64 { self.core.torque_report().total_weight() }

    // === COMMANDS ===

    /// Drop the offered weight `x` px from the pivot (negative = left).
    /// Returns the new id, or `undefined` while paused.
    pub fn add_weight(&mut self, x: f64) -> Option<u32> {
        let id = self.core.drop_next_weight(x);
        self.flush();
        id
    }

    /// Drop the offered weight where the user clicked, given the plank's client box
    pub fn add_weight_at_click(&mut self, client_x: f64, plank_left: f64, plank_width: f64) -> Option<u32> {
        self.add_weight(client_x - (plank_left + plank_width / 2.0))
    }

    pub fn delete_weight(&mut self, id: u32) -> bool {
        let removed = self.core.delete_weight(id);
        self.flush();
        removed
    }

    pub fn reset(&mut self) {
        self.core.reset();
        self.core.take_persist_dirty();
        let key = self.core.config().storage_key.clone();
        if let Err(e) = self.store.clear(&key) {
            log::warn!("could not clear saved weights: {}", e);
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.core.toggle_pause()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    // === STEP ===

    /// Advance to a `requestAnimationFrame` timestamp (ms)
    pub fn frame(&mut self, timestamp_ms: f64) {
        self.core.advance_to(timestamp_ms);
        self.flush();
    }

    /// Advance by an explicit delta in seconds
    pub fn tick(&mut self, delta_time: f64) {
        self.core.tick(delta_time);
        self.flush();
    }

    // === RENDER ===

    /// `[{id, cx, cy, radius, weight, color, dropping}]` in container-local px
    pub fn placements_json(&self) -> String {
        let placements = self.core.placements(&self.layout);
        serde_json::to_string(&placements).unwrap_or_else(|_| "[]".to_string())
    }

    /// Placement log, newest first
    pub fn log_json(&self) -> String {
        let entries = self.core.log_entries();
        serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn objects_json(&self) -> String {
        self.core.snapshot_json()
    }

    pub fn plank_transform(&self) -> String {
        self.core.plank_transform()
    }
}

impl Seesaw {
    /// Build against an explicit store (native hosts and tests)
    pub fn with_store(config: SeesawConfig, store: Box<dyn ObjectStore>, seed: u32) -> Self {
        let saved = store.load(&config.storage_key);
        let core = SeesawCore::restore(config, seed, saved.as_deref());
        Self {
            core,
            layout: SceneLayout::default(),
            store,
        }
    }

    pub fn core(&self) -> &SeesawCore {
        &self.core
    }

    /// Load settings from JSON (native counterpart of `load_config`)
    pub fn load_config_str(&mut self, json: &str) -> Result<(), String> {
        let old_key = self.core.config().storage_key.clone();
        self.core.load_config_json(json)?;
        self.move_saved_objects(&old_key);
        Ok(())
    }

    fn move_saved_objects(&mut self, old_key: &str) {
        if self.core.config().storage_key == old_key {
            return;
        }
        if let Err(e) = self.store.clear(old_key) {
            log::warn!("could not clear saved weights under {}: {}", old_key, e);
        }
        self.core.persist_dirty = true;
        self.flush();
    }

    fn flush(&mut self) {
        if !self.core.take_persist_dirty() {
            return;
        }
        let key = self.core.config().storage_key.clone();
        let snapshot = self.core.snapshot_json();
        if let Err(e) = self.store.save(&key, &snapshot) {
            log::warn!("could not save weights: {}", e);
        }
    }
}

impl Default for Seesaw {
    fn default() -> Self {
        Self::new()
    }
}
