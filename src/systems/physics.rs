//! Seesaw physics - torque balance and drop animation
//!
//! Simplified lever model:
//! - every weight pulls down with `weight * gravity`
//! - torque contribution is `|x| * force`, signed by side (pivot counts as right)
//! - inertia is `Σ weight * x²` plus a constant for the plank itself
//!
//! Drop animation runs independently of torque: objects contribute to the
//! balance from the moment they are spawned.

use crate::domain::WeightObject;

/// Per-side breakdown of the current load
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TorqueReport {
    pub left_torque: f64,
    pub right_torque: f64,
    pub left_weight: f64,
    pub right_weight: f64,
}

impl TorqueReport {
    /// Positive tips the plank to the right (clockwise)
    pub fn net(&self) -> f64 {
        self.right_torque - self.left_torque
    }

    pub fn total_weight(&self) -> f64 {
        self.left_weight + self.right_weight
    }
}

pub fn torque_report(objects: &[WeightObject], gravity: f64) -> TorqueReport {
    let mut report = TorqueReport::default();

    for obj in objects {
        let force = obj.weight() * gravity;
        let torque = obj.x().abs() * force;
        if obj.x() < 0.0 {
            report.left_torque += torque;
            report.left_weight += obj.weight();
        } else {
            report.right_torque += torque;
            report.right_weight += obj.weight();
        }
    }

    report
}

/// Signed net torque (right minus left). Zero for an empty plank.
pub fn net_torque(objects: &[WeightObject], gravity: f64) -> f64 {
    torque_report(objects, gravity).net()
}

/// I = Σ m*x² + board term. Always >= `board_inertia`, so never zero.
pub fn moment_of_inertia(objects: &[WeightObject], board_inertia: f64) -> f64 {
    let objects_inertia: f64 = objects
        .iter()
        .map(|obj| obj.weight() * obj.x() * obj.x())
        .sum();
    objects_inertia + board_inertia
}

/// Advance every in-flight drop by `delta_time` seconds.
///
/// Progress eases out quadratically: `(1 - t/duration)²`. Objects that reach
/// 0 are settled and lose their drop state. Returns how many settled.
pub fn advance_drop_animations(objects: &mut [WeightObject], delta_time: f64, drop_duration: f64) -> usize {
    let mut settled = 0;

    for obj in objects.iter_mut() {
        let Some(drop) = obj.drop.as_mut() else {
            continue;
        };

        drop.timer += delta_time;
        let linear = 1.0 - (drop.timer / drop_duration).min(1.0);
        drop.progress = linear * linear;

        if drop.progress <= 0.0 {
            obj.drop = None;
            settled += 1;
        }
    }

    settled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DropAnimation;

    fn settled(id: u32, x: f64, weight: f64) -> WeightObject {
        WeightObject::settled(id, x, weight, "gray")
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn net_torque_is_right_minus_left() {
        let objects = vec![settled(0, -10.0, 5.0), settled(1, 20.0, 2.0)];
        assert_close(net_torque(&objects, 9.81), -98.1);
    }

    #[test]
    fn objects_on_the_pivot_count_as_right() {
        let objects = vec![settled(0, 0.0, 4.0), settled(1, 0.0, 6.0)];
        let report = torque_report(&objects, 9.81);

        assert_eq!(report.left_weight, 0.0);
        assert_eq!(report.right_weight, 10.0);
        assert_eq!(report.net(), 0.0);
    }

    #[test]
    fn report_tracks_side_weights() {
        let objects = vec![settled(0, -50.0, 3.0), settled(1, 80.0, 2.0), settled(2, -1.0, 1.0)];
        let report = torque_report(&objects, 1.0);

        assert_close(report.left_weight, 4.0);
        assert_close(report.right_weight, 2.0);
        assert_close(report.total_weight(), 6.0);
        assert_close(report.left_torque, 151.0);
        assert_close(report.right_torque, 160.0);
    }

    #[test]
    fn empty_plank_is_balanced_with_board_inertia() {
        assert_eq!(net_torque(&[], 9.81), 0.0);
        assert_eq!(moment_of_inertia(&[], 10_000.0), 10_000.0);
    }

    #[test]
    fn inertia_adds_board_term() {
        let objects = vec![settled(0, 10.0, 3.0)];
        assert_close(moment_of_inertia(&objects, 10_000.0), 10_300.0);
    }

    #[test]
    fn halfway_timer_gives_quarter_progress() {
        let mut obj = WeightObject::falling(0, 5.0, 1.0, "gray");
        obj.drop = Some(DropAnimation { timer: 0.35, progress: 1.0 });
        let mut objects = vec![obj];

        let count = advance_drop_animations(&mut objects, 0.0, 0.7);

        assert_eq!(count, 0);
        assert!(objects[0].is_dropping());
        assert_close(objects[0].drop_progress(), 0.25);
    }

    #[test]
    fn drop_settles_at_duration() {
        let mut objects = vec![WeightObject::falling(0, 5.0, 1.0, "gray")];

        advance_drop_animations(&mut objects, 0.35, 0.7);
        assert_close(objects[0].drop_progress(), 0.25);

        let count = advance_drop_animations(&mut objects, 0.35, 0.7);
        assert_eq!(count, 1);
        assert!(!objects[0].is_dropping());
        assert_eq!(objects[0].drop_timer(), None);
        assert_eq!(objects[0].drop_progress(), 0.0);
    }

    #[test]
    fn overshooting_the_duration_still_settles() {
        let mut objects = vec![WeightObject::falling(0, 5.0, 1.0, "gray")];
        assert_eq!(advance_drop_animations(&mut objects, 3.0, 0.7), 1);
        assert!(!objects[0].is_dropping());
    }

    #[test]
    fn zero_delta_leaves_objects_unchanged() {
        let mut mid = WeightObject::falling(1, -3.0, 2.0, "red");
        mid.drop = Some(DropAnimation { timer: 0.2, progress: (1.0f64 - 0.2 / 0.7).powi(2) });
        let mut objects = vec![
            WeightObject::falling(0, 5.0, 1.0, "gray"),
            mid,
            settled(2, 40.0, 9.0),
        ];
        let before = objects.clone();

        advance_drop_animations(&mut objects, 0.0, 0.7);

        assert_eq!(objects.len(), before.len());
        for (a, b) in objects.iter().zip(before.iter()) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.is_dropping(), b.is_dropping());
            assert_eq!(a.drop_timer(), b.drop_timer());
            assert_close(a.drop_progress(), b.drop_progress());
        }
    }

    #[test]
    fn progress_is_monotonically_decreasing() {
        let mut objects = vec![WeightObject::falling(0, 5.0, 1.0, "gray")];
        let mut last = objects[0].drop_progress();

        while objects[0].is_dropping() {
            advance_drop_animations(&mut objects, 1.0 / 60.0, 0.7);
            let now = objects[0].drop_progress();
            assert!(now <= last);
            assert!((0.0..=1.0).contains(&now));
            last = now;
        }
    }
}
