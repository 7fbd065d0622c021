//! Core types shared across the openvtol simulation crates:
//! - Transform and spatial helpers
//! - Frame timing
//! - Health state

pub mod components;
pub mod time;
pub mod transform;

pub use components::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used math types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
