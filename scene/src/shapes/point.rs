use super::{Buffers, Geometry};
use crate::render::{DrawCall, Renderer};
use crate::{Colour, Transform};

/// A single rasterised point, `size` pixels across.
#[derive(Clone, Debug)]
pub struct Point {
    pub colour: Colour,
    pub transform: Transform,
    position: [f32; 2],
    size: f32,
    geometry: Option<Geometry>,
    buffers: Buffers,
}

impl Point {
    pub fn new(position: [f32; 2], size: f32, colour: Colour) -> Self {
        Point {
            colour,
            transform: Transform::identity(),
            position,
            size,
            geometry: None,
            buffers: Buffers::default(),
        }
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        let position = self.position;
        let geometry = self
            .geometry
            .get_or_insert_with(|| Geometry::single(position.to_vec(), 2));
        let Some((buffer, _)) = self.buffers.ensure(renderer, false) else {
            return;
        };

        renderer.use_program();
        renderer.set_texture(Default::default());
        renderer.set_model(&self.transform);
        renderer.set_point_size(self.size);
        renderer.set_colour(self.colour);

        renderer.draw(DrawCall::points(
            buffer,
            &geometry.positions,
            geometry.components as i32,
        ));
    }
}
