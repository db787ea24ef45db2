use std::f32::consts::TAU;

use super::{draw_groups, Buffers, FaceGroup, Geometry};
use crate::render::Renderer;
use crate::{Colour, Transform};

/// Cylinder of radius 0.5 around the y axis, from y = 0 to y = 1.
#[derive(Clone, Debug)]
pub struct Cylinder {
    pub colour: Colour,
    pub transform: Transform,
    segments: u32,
    geometry: Option<Geometry>,
    buffers: Buffers,
}

impl Cylinder {
    pub const DEFAULT_SEGMENTS: u32 = 32;
    const RADIUS: f32 = 0.5;

    const SIDE_SHADE: f32 = 1.0;
    const TOP_SHADE: f32 = 0.9;
    const BOTTOM_SHADE: f32 = 0.7;

    pub fn new(colour: Colour, segments: u32) -> Self {
        Cylinder {
            colour,
            transform: Transform::identity(),
            segments: segments.max(3),
            geometry: None,
            buffers: Buffers::default(),
        }
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    fn rim(angle: f32, y: f32) -> [f32; 3] {
        [Self::RADIUS * angle.cos(), y, Self::RADIUS * angle.sin()]
    }

    fn generate_geometry(segments: u32) -> Geometry {
        let step = TAU / segments as f32;
        let n = segments as usize;

        let mut side = Vec::with_capacity(n * 18);
        let mut top = Vec::with_capacity(n * 9);
        let mut bottom = Vec::with_capacity(n * 9);

        for i in 0..segments {
            let a0 = step * i as f32;
            let a1 = step * (i + 1) as f32;

            for v in [
                Self::rim(a0, 0.0),
                Self::rim(a1, 1.0),
                Self::rim(a1, 0.0),
                Self::rim(a0, 0.0),
                Self::rim(a0, 1.0),
                Self::rim(a1, 1.0),
            ] {
                side.extend_from_slice(&v);
            }

            for v in [[0.0, 1.0, 0.0], Self::rim(a0, 1.0), Self::rim(a1, 1.0)] {
                top.extend_from_slice(&v);
            }

            for v in [[0.0, 0.0, 0.0], Self::rim(a1, 0.0), Self::rim(a0, 0.0)] {
                bottom.extend_from_slice(&v);
            }
        }

        let groups = vec![
            FaceGroup {
                first: 0,
                count: n * 6,
                shade: Self::SIDE_SHADE,
            },
            FaceGroup {
                first: n * 6,
                count: n * 3,
                shade: Self::TOP_SHADE,
            },
            FaceGroup {
                first: n * 9,
                count: n * 3,
                shade: Self::BOTTOM_SHADE,
            },
        ];

        let mut positions = side;
        positions.append(&mut top);
        positions.append(&mut bottom);

        Geometry {
            positions,
            components: 3,
            uv: None,
            groups,
        }
    }

    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        let segments = self.segments;
        let geometry = self
            .geometry
            .get_or_insert_with(|| Self::generate_geometry(segments));
        let Some(buffers) = self.buffers.ensure(renderer, false) else {
            return;
        };

        renderer.use_program();
        renderer.set_texture(Default::default());
        renderer.set_model(&self.transform);
        draw_groups(renderer, geometry, buffers, self.colour, true);
    }
}

impl Default for Cylinder {
    fn default() -> Self {
        Cylinder::new(Colour::WHITE, Self::DEFAULT_SEGMENTS)
    }
}
