use serde_derive::{Deserialize, Serialize};

use crate::pose::PoseAngles;
use crate::world::GridDims;
use crate::Colour;

/// Everything tunable about the stage. Any field missing from a serialised
/// settings object takes its default value.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    pub canvas_id: String,
    pub clear_colour: Colour,
    pub grid: GridDims,
    /// Edge length of one block, world units.
    pub block_size: f32,
    /// How far in front of the camera block targeting looks.
    pub reach: f32,
    pub move_speed: f32,
    /// Degrees turned by a single pan.
    pub pan_degrees: f32,
    pub fov: f32,
    pub creature_position: [f32; 3],
    pub angles: PoseAngles,
    /// Initial value of the scene rotation slider, degrees.
    pub slider_angle: f32,
    /// Layers in the perimeter wall of a new map.
    pub wall_height: usize,
    pub cylinder_segments: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            canvas_id: String::from("webgl"),
            clear_colour: Colour::BACKGROUND,
            grid: GridDims::default(),
            block_size: 0.5,
            reach: 1.0,
            move_speed: 0.2,
            pan_degrees: 5.0,
            fov: 60.0,
            creature_position: [0.0, -0.2, 0.0],
            angles: PoseAngles::default(),
            slider_angle: 5.0,
            wall_height: 2,
            cylinder_segments: 32,
        }
    }
}

impl Settings {
    /// Clamp values that would leave the stage unusable.
    pub fn sanitised(mut self) -> Self {
        let defaults = Settings::default();

        if !(self.block_size.is_finite() && self.block_size > 0.0) {
            log::warn!(
                "Block size {} is not positive, using {}.",
                self.block_size,
                defaults.block_size
            );
            self.block_size = defaults.block_size;
        }

        self.grid.width = self.grid.width.max(1);
        self.grid.depth = self.grid.depth.max(1);
        self.grid.height = self.grid.height.max(1);
        if self.grid.cell_count().is_none() {
            log::warn!(
                "Grid {}x{}x{} exceeds {} cells, using the default grid.",
                self.grid.width,
                self.grid.depth,
                self.grid.height,
                GridDims::MAX_CELLS
            );
            self.grid = defaults.grid;
        }

        let finite = |name: &str, value: f32, fallback: f32| {
            if value.is_finite() {
                value
            } else {
                log::warn!("{name} {value} is not finite, using {fallback}.");
                fallback
            }
        };
        self.reach = finite("Reach", self.reach, defaults.reach);
        self.move_speed = finite("Move speed", self.move_speed, defaults.move_speed);
        self.pan_degrees = finite("Pan angle", self.pan_degrees, defaults.pan_degrees);
        self.fov = finite("Field of view", self.fov, defaults.fov);
        if !(self.fov > 0.0 && self.fov < 180.0) {
            log::warn!("Field of view {} out of range, using {}.", self.fov, defaults.fov);
            self.fov = defaults.fov;
        }

        self.cylinder_segments = self.cylinder_segments.max(3);
        self
    }
}
