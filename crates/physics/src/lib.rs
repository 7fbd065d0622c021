//! Flight physics for openvtol: craft state, the rigid-body integrator, and
//! the multi-surface collision resolver.
//!
//! Everything here is discrete per-tick math over box, point, and
//! heightfield primitives; there is deliberately no general-purpose physics
//! engine behind it.

pub mod collision;
pub mod craft;
pub mod integrator;
pub mod tuning;

pub use collision::*;
pub use craft::*;
pub use integrator::*;
pub use tuning::*;
