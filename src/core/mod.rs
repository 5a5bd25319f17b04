//! Core math shared by the physics and render paths

pub mod geometry;
pub mod vec2;

pub use geometry::{AxisFrame, Rect};
pub use vec2::Vec2;
