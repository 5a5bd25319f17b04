use crate::domain::{SeesawConfig, WeightObject};

use super::persist;
use super::random::{draw_weight, sanitize_seed};
use super::SeesawCore;

pub(super) const DEFAULT_SEED: u32 = 12345;

pub(super) fn create_core(config: SeesawConfig, seed: u32) -> SeesawCore {
    let mut rng_state = sanitize_seed(seed);
    let next_draw = draw_weight(&mut rng_state, &config);

    SeesawCore {
        config,
        objects: Vec::new(),
        current_angle: 0.0,
        angular_velocity: 0.0,
        next_object_id: 0,
        paused: false,
        next_draw,
        rng_state,
        last_timestamp_ms: None,
        frame: 0,
        persist_dirty: false,
    }
}

pub(super) fn restore_core(config: SeesawConfig, seed: u32, saved_json: Option<&str>) -> SeesawCore {
    let mut core = create_core(config, seed);

    let Some(json) = saved_json else {
        return core;
    };

    let saved = match persist::decode_objects(json) {
        Ok(saved) => saved,
        Err(e) => {
            log::warn!("ignoring saved seesaw state: {}", e);
            return core;
        }
    };

    core.objects = saved.into_iter().map(WeightObject::from).collect();
    // decode_objects keeps every id below ObjectId::MAX
    core.next_object_id = core.objects.iter().map(|o| o.id() + 1).max().unwrap_or(0);
    log::info!("restored {} weights from storage", core.objects.len());

    core
}
