use crate::domain::{ObjectId, WeightObject};

use super::random::draw_weight;
use super::SeesawCore;

pub(super) fn add_weight(core: &mut SeesawCore, x: f64, weight: f64, color: &str) -> Option<ObjectId> {
    if core.paused {
        log::debug!("paused, ignoring weight at x={}", x);
        return None;
    }

    if !x.is_finite() || !(weight > 0.0 && weight.is_finite()) {
        log::warn!("rejecting weight {} at x={}", weight, x);
        return None;
    }

    let id = core.next_object_id;
    let Some(next_id) = id.checked_add(1) else {
        log::warn!("weight ids exhausted, ignoring weight at x={}", x);
        return None;
    };
    core.next_object_id = next_id;
    core.objects.push(WeightObject::falling(id, x, weight, color));
    core.persist_dirty = true;

    log::debug!("added weight #{} ({} kg) at x={:.0}", id, weight, x);
    Some(id)
}

pub(super) fn drop_next_weight(core: &mut SeesawCore, x: f64) -> Option<ObjectId> {
    let draw = core.next_draw.clone();
    let id = add_weight(core, x, draw.weight, &draw.color)?;
    core.next_draw = draw_weight(&mut core.rng_state, &core.config);
    Some(id)
}

pub(super) fn delete_weight(core: &mut SeesawCore, id: ObjectId) -> bool {
    let Some(idx) = core.objects.iter().position(|o| o.id() == id) else {
        return false;
    };

    core.objects.remove(idx);
    core.persist_dirty = true;
    log::debug!("deleted weight #{}", id);
    true
}

pub(super) fn reset(core: &mut SeesawCore) {
    core.objects.clear();
    core.current_angle = 0.0;
    core.angular_velocity = 0.0;
    core.persist_dirty = true;
    log::info!("seesaw reset");
}

pub(super) fn set_paused(core: &mut SeesawCore, paused: bool) {
    if core.paused != paused {
        core.paused = paused;
        log::info!("seesaw {}", if paused { "paused" } else { "resumed" });
    }
}

pub(super) fn toggle_pause(core: &mut SeesawCore) -> bool {
    let paused = !core.paused;
    set_paused(core, paused);
    paused
}
