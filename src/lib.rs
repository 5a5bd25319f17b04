//! Seesaw Engine - torque-balance seesaw simulation in WASM
//!
//! The browser host measures the layout, forwards clicks and animation
//! frames, and paints whatever the engine reports back.
//!
//! Architecture:
//! - core/        - vector math and plank geometry
//! - domain/      - weights, config, log entries
//! - systems/     - torque, inertia and drop animation
//! - simulation/  - state, commands, per-frame step, JS facade
//! - persistence  - storage seam for the saved object list

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod persistence;

// Short paths for the pure modules
pub use crate::core::geometry;
pub use systems::physics;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // Already installed when init() runs twice
        let _ = console_log::init_with_level(log::Level::Info);
        web_sys::console::log_1(&"⚖️ Seesaw WASM engine initialized!".into());
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{SeesawConfig, Side, WeightObject};
pub use simulation::{Seesaw, SeesawCore};
