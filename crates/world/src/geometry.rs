//! Structures, landing pads, and the combined world-geometry view handed to
//! the collision resolver.

use crate::terrain::TerrainQuery;

/// Identifier for a landing pad, used by missions to check for the correct
/// landing spot.
pub type PadId = u32;

/// An axis-aligned vertical box the craft can hit or land on.
#[derive(Debug, Clone, Copy)]
pub struct Structure {
    pub center_x: f32,
    pub center_z: f32,
    pub half_width: f32,
    pub half_depth: f32,
    pub base_y: f32,
    pub height: f32,
}

impl Structure {
    pub fn new(
        center_x: f32,
        center_z: f32,
        half_width: f32,
        half_depth: f32,
        base_y: f32,
        height: f32,
    ) -> Self {
        debug_assert!(half_width >= 0.0 && half_depth >= 0.0);
        Self {
            center_x,
            center_z,
            half_width,
            half_depth,
            base_y,
            height,
        }
    }

    /// Height of the walkable roof.
    pub fn roof(&self) -> f32 {
        self.base_y + self.height
    }

    /// Whether world (x, z) lies within the horizontal footprint.
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        (x - self.center_x).abs() <= self.half_width
            && (z - self.center_z).abs() <= self.half_depth
    }
}

/// A landing-pad volume: a box with a walkable top surface.
#[derive(Debug, Clone, Copy)]
pub struct Pad {
    pub id: PadId,
    pub center_x: f32,
    pub center_z: f32,
    pub half_width: f32,
    pub half_depth: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Pad {
    pub fn new(
        id: PadId,
        center_x: f32,
        center_z: f32,
        half_width: f32,
        half_depth: f32,
        bottom: f32,
        top: f32,
    ) -> Self {
        debug_assert!(half_width >= 0.0 && half_depth >= 0.0);
        debug_assert!(top >= bottom);
        Self {
            id,
            center_x,
            center_z,
            half_width,
            half_depth,
            bottom,
            top,
        }
    }

    /// Whether world (x, z) lies within the horizontal footprint.
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        (x - self.center_x).abs() <= self.half_width
            && (z - self.center_z).abs() <= self.half_depth
    }
}

/// All collision surfaces for the active scene, with named, typed fields.
/// Built once at scene start and queried read-only by the flight core.
pub struct WorldGeometry {
    pub terrain: Box<dyn TerrainQuery>,
    pub structures: Vec<Structure>,
    pub pads: Vec<Pad>,
}

impl WorldGeometry {
    pub fn new(terrain: Box<dyn TerrainQuery>) -> Self {
        Self {
            terrain,
            structures: Vec::new(),
            pads: Vec::new(),
        }
    }

    pub fn with_structures(mut self, structures: Vec<Structure>) -> Self {
        self.structures = structures;
        self
    }

    pub fn with_pads(mut self, pads: Vec<Pad>) -> Self {
        self.pads = pads;
        self
    }

    /// Terrain height under world (x, z).
    pub fn terrain_height(&self, x: f32, z: f32) -> f32 {
        self.terrain.height(x, z)
    }

    /// Pad with the given id, if it exists.
    pub fn pad(&self, id: PadId) -> Option<&Pad> {
        self.pads.iter().find(|p| p.id == id)
    }
}
