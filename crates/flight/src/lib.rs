//! Flight state machine and session orchestration.
//!
//! `FlightSession` owns the craft, world, camera, and active mission, and
//! steps them in a strict per-frame order: integrate, resolve collisions,
//! apply damage, evaluate phase transitions, update the camera. Discrete
//! happenings come back through a drained `FlightEvent` queue.

pub mod config;
pub mod events;
pub mod mission;
pub mod session;
pub mod state;
mod update;

pub use config::*;
pub use events::*;
pub use mission::*;
pub use session::*;
pub use state::*;
