use crate::systems::physics::{advance_drop_animations, moment_of_inertia, net_torque};

use super::SeesawCore;

pub(super) fn tick(core: &mut SeesawCore, delta_time: f64) {
    if core.paused {
        return;
    }

    // Guard against clock hiccups from the host
    let dt = if delta_time.is_finite() && delta_time > 0.0 { delta_time } else { 0.0 };
    let config = &core.config;

    let torque = net_torque(&core.objects, config.gravity);
    let inertia = moment_of_inertia(&core.objects, config.board_inertia);
    let angular_acceleration = torque / inertia;

    core.angular_velocity += angular_acceleration * dt;
    // Per-frame damping, not scaled by dt
    core.angular_velocity *= 1.0 - config.damping;

    // Velocity is left untouched while the angle is pinned at the limit
    let max_angle = config.max_angle_rad();
    core.current_angle = (core.current_angle + core.angular_velocity * dt).clamp(-max_angle, max_angle);

    let settled = advance_drop_animations(&mut core.objects, dt, config.drop_duration);
    if settled > 0 {
        log::debug!("{} weight(s) landed", settled);
        core.persist_dirty = true;
    }

    core.frame += 1;
}

/// Turn host frame timestamps into a delta. The first frame integrates
/// nothing, and the clock keeps running while paused so resuming does not
/// replay the pause as one huge step.
pub(super) fn advance_to(core: &mut SeesawCore, timestamp_ms: f64) {
    let delta = match core.last_timestamp_ms {
        Some(last) => (timestamp_ms - last) / 1000.0,
        None => 0.0,
    };

    if timestamp_ms.is_finite() {
        core.last_timestamp_ms = Some(timestamp_ms);
    }

    tick(core, delta);
}
