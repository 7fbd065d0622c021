//! Read-only world-query surfaces for the flight core: terrain height
//! lookup, structure boxes and landing pads.
//!
//! The flight core never generates or mutates any of this; it only queries.

pub mod geometry;
pub mod terrain;

pub use geometry::*;
pub use terrain::*;
