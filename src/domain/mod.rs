//! Seesaw domain types

pub mod config;
pub mod weight;

pub use config::SeesawConfig;
pub use weight::{DropAnimation, LogEntry, ObjectId, SavedObject, Side, WeightObject};
