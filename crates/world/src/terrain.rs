//! Terrain height queries.

/// Default height reported for queries outside the supplied terrain data.
pub const SEA_LEVEL: f32 = 0.0;

/// Read-only terrain surface: height and water lookup by world position.
pub trait TerrainQuery {
    /// Ground height at world (x, z).
    fn height(&self, x: f32, z: f32) -> f32;

    /// Whether the terrain cell at world (x, z) is water.
    fn is_water(&self, x: f32, z: f32) -> bool;
}

/// Infinite flat terrain at a fixed height. Used by tests and as a
/// placeholder while a real heightfield streams in.
#[derive(Debug, Clone, Copy)]
pub struct FlatTerrain {
    pub height: f32,
    pub water: bool,
}

impl FlatTerrain {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            water: false,
        }
    }

    pub fn water() -> Self {
        Self {
            height: SEA_LEVEL,
            water: true,
        }
    }
}

impl TerrainQuery for FlatTerrain {
    fn height(&self, _x: f32, _z: f32) -> f32 {
        self.height
    }

    fn is_water(&self, _x: f32, _z: f32) -> bool {
        self.water
    }
}

/// A square height grid centered on the origin, sampled with triangle-based
/// interpolation matching a standard diagonal mesh triangulation. Cells at
/// or below sea level count as water; queries outside the grid return sea
/// level (and water), so a craft wandering off the map splashes down rather
/// than reading garbage.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    /// World-space edge length of the grid.
    size: f32,
    /// Samples per edge (at least 2).
    resolution: usize,
    sea_level: f32,
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Build a grid by sampling `f(x, z)` at each grid point.
    pub fn from_fn(size: f32, resolution: usize, sea_level: f32, f: impl Fn(f32, f32) -> f32) -> Self {
        assert!(resolution >= 2, "height grid needs at least 2 samples per edge");
        assert!(size > 0.0);
        let half = size / 2.0;
        let step = size / (resolution - 1) as f32;
        let mut heights = Vec::with_capacity(resolution * resolution);
        for iz in 0..resolution {
            for ix in 0..resolution {
                let x = ix as f32 * step - half;
                let z = iz as f32 * step - half;
                heights.push(f(x, z));
            }
        }
        Self {
            size,
            resolution,
            sea_level,
            heights,
        }
    }

    /// Uniform grid at a constant height.
    pub fn flat(size: f32, resolution: usize, height: f32) -> Self {
        Self::from_fn(size, resolution, SEA_LEVEL, |_, _| height)
    }

    fn in_bounds(&self, x: f32, z: f32) -> bool {
        let half = self.size / 2.0;
        x >= -half && x <= half && z >= -half && z <= half
    }
}

impl TerrainQuery for HeightGrid {
    fn height(&self, x: f32, z: f32) -> f32 {
        if !self.in_bounds(x, z) {
            return self.sea_level;
        }
        let res = self.resolution;
        let half = self.size / 2.0;
        let step = self.size / (res - 1) as f32;

        let gx = (x + half) / step;
        let gz = (z + half) / step;

        let x0 = (gx.floor() as usize).clamp(0, res - 2);
        let z0 = (gz.floor() as usize).clamp(0, res - 2);

        let fx = (gx - x0 as f32).clamp(0.0, 1.0);
        let fz = (gz - z0 as f32).clamp(0.0, 1.0);

        // Heights at the four corners of the grid cell
        let h00 = self.heights[z0 * res + x0];
        let h10 = self.heights[z0 * res + x0 + 1];
        let h01 = self.heights[(z0 + 1) * res + x0];
        let h11 = self.heights[(z0 + 1) * res + x0 + 1];

        // Triangle interpolation along the bottom-left/top-right diagonal,
        // matching the mesh triangulation a renderer would build.
        if fx + fz <= 1.0 {
            h00 + fx * (h10 - h00) + fz * (h01 - h00)
        } else {
            h11 + (1.0 - fx) * (h01 - h11) + (1.0 - fz) * (h10 - h11)
        }
    }

    fn is_water(&self, x: f32, z: f32) -> bool {
        if !self.in_bounds(x, z) {
            return true;
        }
        self.height(x, z) <= self.sea_level
    }
}
