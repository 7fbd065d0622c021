//! Chase/free/focus/orbit camera for the flight core.
//!
//! The controller owns a small `CameraState` (position, yaw, pitch,
//! pull-back distance) and delegates per-mode behavior to one type per mode
//! behind the `CameraMode` trait. The renderer backend consumes the view
//! transform and `CameraUniform`; nothing here touches a GPU.

pub mod controller;
pub mod modes;
pub mod tuning;
pub mod uniform;

pub use controller::*;
pub use modes::*;
pub use tuning::*;
pub use uniform::*;
