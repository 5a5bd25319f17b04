//! Simulation systems

pub mod physics;

pub use physics::{advance_drop_animations, moment_of_inertia, net_torque, torque_report, TorqueReport};
