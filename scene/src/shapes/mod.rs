//! Drawable primitives. Each shape owns its transform and colour, generates
//! its vertex data on first render and keeps it, and allocates its buffers
//! once from the renderer, re-uploading into them on every draw.

use crate::render::{BufferId, DrawCall, Renderer};
use crate::Colour;

mod circle;
mod cube;
mod cylinder;
mod point;
mod triangle;

pub use circle::Circle;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use point::Point;
pub use triangle::Triangle;

/// A contiguous run of vertices drawn with a single call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGroup {
    pub first: usize,
    pub count: usize,
    /// Brightness multiplier applied to the shape colour for this group.
    pub shade: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub positions: Vec<f32>,
    pub components: usize,
    pub uv: Option<Vec<f32>>,
    pub groups: Vec<FaceGroup>,
}

impl Geometry {
    const UV_COMPONENTS: usize = 2;

    fn single(positions: Vec<f32>, components: usize) -> Self {
        let count = positions.len() / components;
        Geometry {
            positions,
            components,
            uv: None,
            groups: vec![FaceGroup {
                first: 0,
                count,
                shade: 1.0,
            }],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / self.components
    }

    pub fn positions_of(&self, group: &FaceGroup) -> &[f32] {
        let start = group.first * self.components;
        &self.positions[start..start + group.count * self.components]
    }

    pub fn uv_of(&self, group: &FaceGroup) -> Option<&[f32]> {
        let start = group.first * Self::UV_COMPONENTS;
        self.uv
            .as_ref()
            .map(|uv| &uv[start..start + group.count * Self::UV_COMPONENTS])
    }
}

/// Lazily allocated buffer handles for one shape instance.
#[derive(Clone, Copy, Debug, Default)]
struct Buffers {
    position: Option<BufferId>,
    uv: Option<BufferId>,
}

impl Buffers {
    /// Returns the position buffer, and the UV buffer if `with_uv`,
    /// allocating whichever are missing. On failure the shape should abandon
    /// this render.
    fn ensure(
        &mut self,
        renderer: &mut dyn Renderer,
        with_uv: bool,
    ) -> Option<(BufferId, Option<BufferId>)> {
        let position = match self.position {
            Some(b) => b,
            None => {
                let b = Self::allocate(renderer)?;
                self.position = Some(b);
                b
            }
        };

        if !with_uv {
            return Some((position, None));
        }

        let uv = match self.uv {
            Some(b) => b,
            None => {
                let b = Self::allocate(renderer)?;
                self.uv = Some(b);
                b
            }
        };

        Some((position, Some(uv)))
    }

    fn allocate(renderer: &mut dyn Renderer) -> Option<BufferId> {
        let buffer = renderer.create_buffer();
        if buffer.is_none() {
            log::warn!("Failed to create the buffer object.");
        }
        buffer
    }
}

/// Issue one draw call per face group. When `shade` is set each group's
/// colour is the shape colour scaled by the group's brightness.
fn draw_groups(
    renderer: &mut dyn Renderer,
    geometry: &Geometry,
    (position, uv): (BufferId, Option<BufferId>),
    colour: Colour,
    shade: bool,
) {
    for group in &geometry.groups {
        let colour = if shade {
            colour.shaded(group.shade)
        } else {
            colour
        };
        renderer.set_colour(colour);

        let mut call = DrawCall::triangles(position, geometry.positions_of(group))
            .with_components(geometry.components as i32);
        if let (Some(buffer), Some(coords)) = (uv, geometry.uv_of(group)) {
            call = call.with_uv(buffer, coords);
        }
        renderer.draw(call);
    }
}

/// Vertices of a regular polygon fan around `(x, y)`, as 2D triangles.
fn fan_2d(x: f32, y: f32, radius: f32, segments: u32) -> Vec<f32> {
    let segments = segments.max(3);
    let step = std::f32::consts::TAU / segments as f32;
    let mut positions = Vec::with_capacity(segments as usize * 6);
    for i in 0..segments {
        let a0 = step * i as f32;
        let a1 = step * (i + 1) as f32;
        positions.extend_from_slice(&[
            x,
            y,
            x + radius * a0.cos(),
            y + radius * a0.sin(),
            x + radius * a1.cos(),
            y + radius * a1.sin(),
        ]);
    }
    positions
}
