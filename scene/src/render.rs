use crate::{Colour, Transform};

/// Handle to a vertex buffer owned by a `Renderer`.
pub type BufferId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Points,
}

/// Which source the fragment stage colours from. Maps onto the
/// `u_whichTexture` uniform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureSelect {
    #[default]
    Colour,
    Uv,
    Unit(u8),
}

impl TextureSelect {
    pub fn uniform(self) -> i32 {
        match self {
            TextureSelect::Colour => -2,
            TextureSelect::Uv => -1,
            TextureSelect::Unit(unit) => unit as i32,
        }
    }
}

/// A single draw call: data to upload into `buffer` and draw from.
#[derive(Clone, Copy, Debug)]
pub struct DrawCall<'a> {
    pub buffer: BufferId,
    pub positions: &'a [f32],
    /// Floats per vertex in `positions`.
    pub components: i32,
    pub uv: Option<(BufferId, &'a [f32])>,
    pub primitive: Primitive,
}

impl<'a> DrawCall<'a> {
    pub fn triangles(buffer: BufferId, positions: &'a [f32]) -> Self {
        DrawCall {
            buffer,
            positions,
            components: 3,
            uv: None,
            primitive: Primitive::Triangles,
        }
    }

    /// Single points, `components` floats each.
    pub fn points(buffer: BufferId, positions: &'a [f32], components: i32) -> Self {
        DrawCall {
            buffer,
            positions,
            components,
            uv: None,
            primitive: Primitive::Points,
        }
    }

    pub fn with_components(mut self, components: i32) -> Self {
        self.components = components;
        self
    }

    pub fn with_uv(mut self, buffer: BufferId, uv: &'a [f32]) -> Self {
        self.uv = Some((buffer, uv));
        self
    }

    pub fn vertex_count(&self) -> i32 {
        if self.components > 0 {
            self.positions.len() as i32 / self.components
        } else {
            0
        }
    }
}

/// The immediate-mode drawing surface every shape renders through. The
/// WebGL implementation lives in the client; tests use a recording double.
pub trait Renderer {
    /// Allocate a new vertex buffer. `None` if the device refuses.
    fn create_buffer(&mut self) -> Option<BufferId>;

    /// Clear colour and depth buffers.
    fn clear(&mut self, colour: Colour);

    /// Clear only the depth buffer, so subsequent draws land on top.
    fn clear_depth(&mut self);

    fn use_program(&mut self);

    fn set_view(&mut self, view: &Transform, projection: &Transform);

    fn set_global_rotation(&mut self, rotation: &Transform);

    fn set_model(&mut self, model: &Transform);

    fn set_colour(&mut self, colour: Colour);

    fn set_texture(&mut self, select: TextureSelect);

    fn set_point_size(&mut self, size: f32);

    /// Upload the call's data into its buffers and draw it.
    fn draw(&mut self, call: DrawCall);
}
