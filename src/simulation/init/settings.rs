use crate::domain::SeesawConfig;

use super::random::draw_weight;
use super::SeesawCore;

pub(super) fn load_config_json(core: &mut SeesawCore, json: &str) -> Result<(), String> {
    let config = SeesawConfig::from_json(json)?;
    log::info!("seesaw config loaded: {:?}", config);
    core.config = config;
    // The offered weight may fall outside the new range
    core.next_draw = draw_weight(&mut core.rng_state, &core.config);
    Ok(())
}

pub(super) fn set_gravity(core: &mut SeesawCore, gravity: f64) {
    if gravity.is_finite() && gravity >= 0.0 {
        core.config.gravity = gravity;
    } else {
        log::warn!("ignoring gravity {}", gravity);
    }
}

pub(super) fn set_damping(core: &mut SeesawCore, damping: f64) {
    if (0.0..1.0).contains(&damping) {
        core.config.damping = damping;
    } else {
        log::warn!("ignoring damping {}", damping);
    }
}
