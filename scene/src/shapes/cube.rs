use super::{draw_groups, Buffers, FaceGroup, Geometry};
use crate::render::{Renderer, TextureSelect};
use crate::{Colour, Transform};

/// Unit cube spanning `[0, 1]` on each axis, drawn face by face.
#[derive(Clone, Debug, Default)]
pub struct Cube {
    pub colour: Colour,
    pub transform: Transform,
    pub texture: TextureSelect,
    geometry: Option<Geometry>,
    buffers: Buffers,
}

impl Cube {
    const VERTICES_PER_FACE: usize = 6;

    // Brightness ramp standing in for lighting. Order matches `FACES`.
    const FACE_SHADES: [f32; 6] = [1.0, 0.9, 0.8, 0.7, 0.6, 0.8];

    // front, top, back, bottom, left, right
    #[rustfmt::skip]
    const FACES: [[f32; 18]; 6] = [
        [0.,0.,0., 1.,1.,0., 1.,0.,0.,  0.,0.,0., 0.,1.,0., 1.,1.,0.],
        [0.,1.,0., 0.,1.,1., 1.,1.,1.,  0.,1.,0., 1.,1.,1., 1.,1.,0.],
        [0.,0.,1., 1.,1.,1., 1.,0.,1.,  0.,0.,1., 0.,1.,1., 1.,1.,1.],
        [0.,0.,0., 1.,0.,1., 1.,0.,0.,  0.,0.,0., 0.,0.,1., 1.,0.,1.],
        [0.,0.,0., 0.,1.,1., 0.,1.,0.,  0.,0.,0., 0.,0.,1., 0.,1.,1.],
        [1.,0.,0., 1.,1.,0., 1.,1.,1.,  1.,0.,0., 1.,1.,1., 1.,0.,1.],
    ];

    #[rustfmt::skip]
    const FACE_UVS: [[f32; 12]; 6] = [
        [0.,0., 1.,1., 1.,0.,  0.,0., 0.,1., 1.,1.],
        [0.,0., 1.,0., 1.,1.,  0.,0., 1.,1., 0.,1.],
        [0.,0., 1.,1., 1.,0.,  0.,0., 0.,1., 1.,1.],
        [0.,0., 1.,1., 1.,0.,  0.,0., 0.,1., 1.,1.],
        [0.,0., 1.,1., 1.,0.,  0.,0., 0.,1., 1.,1.],
        [0.,0., 1.,0., 1.,1.,  0.,0., 1.,1., 0.,1.],
    ];

    pub fn new(colour: Colour) -> Self {
        Cube {
            colour,
            ..Default::default()
        }
    }

    pub fn with_transform(colour: Colour, transform: Transform) -> Self {
        Cube {
            colour,
            transform,
            ..Default::default()
        }
    }

    pub fn textured(mut self, texture: TextureSelect) -> Self {
        self.texture = texture;
        self
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    fn generate_geometry() -> Geometry {
        let positions = Self::FACES.iter().flatten().copied().collect();
        let uv = Self::FACE_UVS.iter().flatten().copied().collect();
        let groups = Self::FACE_SHADES
            .iter()
            .enumerate()
            .map(|(i, &shade)| FaceGroup {
                first: i * Self::VERTICES_PER_FACE,
                count: Self::VERTICES_PER_FACE,
                shade,
            })
            .collect();

        Geometry {
            positions,
            components: 3,
            uv: Some(uv),
            groups,
        }
    }

    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        let geometry = self.geometry.get_or_insert_with(Self::generate_geometry);
        let Some(buffers) = self.buffers.ensure(renderer, true) else {
            return;
        };

        renderer.use_program();
        renderer.set_texture(self.texture);
        renderer.set_model(&self.transform);

        // Textured faces take their colour from the sampler, so only flat
        // cubes get the per-face ramp.
        let shade = matches!(self.texture, TextureSelect::Colour);
        draw_groups(renderer, geometry, buffers, self.colour, shade);
    }
}
