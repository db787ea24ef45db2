use super::{draw_groups, Buffers, Geometry};
use crate::render::Renderer;
use crate::{Colour, Transform};

/// A small upward-pointing 2D triangle centred on `position`, sized in the
/// same units as `Point` and `Circle`.
#[derive(Clone, Debug)]
pub struct Triangle {
    pub colour: Colour,
    pub transform: Transform,
    position: [f32; 2],
    size: f32,
    geometry: Option<Geometry>,
    buffers: Buffers,
}

impl Triangle {
    const SIZE_DIVISOR: f32 = 80.0;

    pub fn new(position: [f32; 2], size: f32, colour: Colour) -> Self {
        Triangle {
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

    fn generate_geometry(position: [f32; 2], size: f32) -> Geometry {
        let [x, y] = position;
        let d = size / Self::SIZE_DIVISOR;
        Geometry::single(
            vec![
                x - d / 4.0,
                y - d / 8.0,
                x + d / 4.0,
                y - d / 8.0,
                x,
                y + d / 3.0,
            ],
            2,
        )
    }

    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        let (position, size) = (self.position, self.size);
        let geometry = self
            .geometry
            .get_or_insert_with(|| Self::generate_geometry(position, size));
        let Some(buffers) = self.buffers.ensure(renderer, false) else {
            return;
        };

        renderer.use_program();
        renderer.set_texture(Default::default());
        renderer.set_model(&self.transform);
        draw_groups(renderer, geometry, buffers, self.colour, false);
    }
}
