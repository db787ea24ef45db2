use super::{draw_groups, fan_2d, Buffers, Geometry};
use crate::render::Renderer;
use crate::{Colour, Transform};

/// A filled 2D circle approximated by `segments` triangles.
#[derive(Clone, Debug)]
pub struct Circle {
    pub colour: Colour,
    pub transform: Transform,
    position: [f32; 2],
    size: f32,
    segments: u32,
    geometry: Option<Geometry>,
    buffers: Buffers,
}

impl Circle {
    pub const DEFAULT_SEGMENTS: u32 = 10;
    const SIZE_DIVISOR: f32 = 200.0;

    pub fn new(position: [f32; 2], size: f32, segments: u32, colour: Colour) -> Self {
        Circle {
            colour,
            transform: Transform::identity(),
            position,
            size,
            segments: segments.max(3),
            geometry: None,
            buffers: Buffers::default(),
        }
    }

    pub fn radius(&self) -> f32 {
        self.size / Self::SIZE_DIVISOR
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        let [x, y] = self.position;
        let (radius, segments) = (self.radius(), self.segments);
        let geometry = self
            .geometry
            .get_or_insert_with(|| Geometry::single(fan_2d(x, y, radius, segments), 2));
        let Some(buffers) = self.buffers.ensure(renderer, false) else {
            return;
        };

        renderer.use_program();
        renderer.set_texture(Default::default());
        renderer.set_model(&self.transform);
        draw_groups(renderer, geometry, buffers, self.colour, false);
    }
}
