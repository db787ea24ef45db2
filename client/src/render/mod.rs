use std::rc::Rc;

use js_sys::Float32Array;
use scene::{BufferId, Colour, DrawCall, Primitive, TextureSelect, Transform};
use web_sys::{WebGlBuffer, WebGlProgram, WebGlUniformLocation};

mod webgl;

pub use webgl::Gl;
use webgl::{create_buffer, create_program, get_attrib_location, get_uniform_location, Texture};

struct Uniforms {
    model: WebGlUniformLocation,
    global_rotation: WebGlUniformLocation,
    view: WebGlUniformLocation,
    projection: WebGlUniformLocation,
    colour: WebGlUniformLocation,
    which_texture: WebGlUniformLocation,
    sampler0: WebGlUniformLocation,
    sampler1: WebGlUniformLocation,
    size: WebGlUniformLocation,
}

impl Uniforms {
    fn new(gl: &Gl, program: &WebGlProgram) -> anyhow::Result<Self> {
        Ok(Uniforms {
            model: get_uniform_location(gl, program, "u_ModelMatrix")?,
            global_rotation: get_uniform_location(gl, program, "u_GlobalRotateMatrix")?,
            view: get_uniform_location(gl, program, "u_ViewMatrix")?,
            projection: get_uniform_location(gl, program, "u_ProjectionMatrix")?,
            colour: get_uniform_location(gl, program, "u_FragColor")?,
            which_texture: get_uniform_location(gl, program, "u_whichTexture")?,
            sampler0: get_uniform_location(gl, program, "u_Sampler0")?,
            sampler1: get_uniform_location(gl, program, "u_Sampler1")?,
            size: get_uniform_location(gl, program, "u_Size")?,
        })
    }
}

/// Immediate-mode renderer over a single WebGL2 program. Buffers are handed
/// out by index and live as long as the renderer.
pub struct WebGlRenderer {
    gl: Rc<Gl>,
    program: WebGlProgram,
    uniforms: Uniforms,
    position_location: u32,
    uv_location: u32,
    buffers: Vec<WebGlBuffer>,
    textures: Vec<Texture>,
}

impl WebGlRenderer {
    const POSITION_COMPONENTS_MAX: i32 = 4;
    const UV_COMPONENTS: i32 = 2;

    const FLOOR_TEXTURE_SIZE: u32 = 64;
    const FLOOR_TEXTURE_CELL: u32 = 8;
    const FLOOR_LIGHT: [u8; 4] = [200, 60, 60, 255];
    const FLOOR_DARK: [u8; 4] = [120, 30, 30, 255];

    pub fn new(gl: Rc<Gl>) -> anyhow::Result<Self> {
        let program = create_program(
            &gl,
            include_str!("webgl/shaders/world.vert"),
            include_str!("webgl/shaders/world.frag"),
        )?;

        let uniforms = Uniforms::new(&gl, &program)?;
        let position_location = get_attrib_location(&gl, &program, "a_Position")?;
        let uv_location = get_attrib_location(&gl, &program, "a_UV")?;

        gl.enable(Gl::DEPTH_TEST);

        // Enable transparency
        gl.enable(Gl::BLEND);
        gl.blend_func(Gl::SRC_ALPHA, Gl::ONE_MINUS_SRC_ALPHA);

        let floor = Texture::checker(
            &gl,
            Self::FLOOR_TEXTURE_SIZE,
            Self::FLOOR_TEXTURE_CELL,
            Self::FLOOR_LIGHT,
            Self::FLOOR_DARK,
        )?;

        let renderer = WebGlRenderer {
            gl,
            program,
            uniforms,
            position_location,
            uv_location,
            buffers: Vec::new(),
            textures: vec![floor],
        };
        renderer.bind_textures();
        log::info!("WebGL renderer ready.");

        Ok(renderer)
    }

    fn bind_textures(&self) {
        self.gl.use_program(Some(&self.program));
        for (unit, texture) in self.textures.iter().enumerate() {
            texture.bind(&self.gl, unit as u32);
        }
        self.gl.uniform1i(Some(&self.uniforms.sampler0), 0);
        self.gl.uniform1i(Some(&self.uniforms.sampler1), 1);
    }

    /// Match the drawing buffer to the canvas size.
    pub fn resize(&self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn upload(&self, buffer: &WebGlBuffer, location: u32, data: &[f32], components: i32) {
        let array = Float32Array::new_with_length(data.len() as u32);
        array.copy_from(data);

        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(buffer));
        self.gl.buffer_data_with_opt_array_buffer(
            Gl::ARRAY_BUFFER,
            Some(&array.buffer()),
            Gl::DYNAMIC_DRAW,
        );
        self.gl
            .vertex_attrib_pointer_with_i32(location, components, Gl::FLOAT, false, 0, 0);
        self.gl.enable_vertex_attrib_array(location);
    }
}

impl scene::Renderer for WebGlRenderer {
    fn create_buffer(&mut self) -> Option<BufferId> {
        match create_buffer(&self.gl) {
            Ok(buffer) => {
                self.buffers.push(buffer);
                Some(self.buffers.len() - 1)
            }
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    fn clear(&mut self, colour: Colour) {
        let [r, g, b, a] = colour.raw();
        self.gl.clear_color(r, g, b, a);
        self.gl
            .clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
    }

    fn clear_depth(&mut self) {
        self.gl.clear(Gl::DEPTH_BUFFER_BIT);
    }

    fn use_program(&mut self) {
        self.gl.use_program(Some(&self.program));
    }

    fn set_view(&mut self, view: &Transform, projection: &Transform) {
        self.gl.use_program(Some(&self.program));
        self.gl
            .uniform_matrix4fv_with_f32_array(Some(&self.uniforms.view), false, view.elements());
        self.gl.uniform_matrix4fv_with_f32_array(
            Some(&self.uniforms.projection),
            false,
            projection.elements(),
        );
    }

    fn set_global_rotation(&mut self, rotation: &Transform) {
        self.gl.use_program(Some(&self.program));
        self.gl.uniform_matrix4fv_with_f32_array(
            Some(&self.uniforms.global_rotation),
            false,
            rotation.elements(),
        );
    }

    fn set_model(&mut self, model: &Transform) {
        self.gl
            .uniform_matrix4fv_with_f32_array(Some(&self.uniforms.model), false, model.elements());
    }

    fn set_colour(&mut self, colour: Colour) {
        self.gl
            .uniform4fv_with_f32_array(Some(&self.uniforms.colour), &colour.raw());
    }

    fn set_texture(&mut self, select: TextureSelect) {
        self.gl
            .uniform1i(Some(&self.uniforms.which_texture), select.uniform());
    }

    fn set_point_size(&mut self, size: f32) {
        self.gl.uniform1f(Some(&self.uniforms.size), size);
    }

    fn draw(&mut self, call: DrawCall) {
        let Some(buffer) = self.buffers.get(call.buffer) else {
            log::warn!("Draw with unknown buffer {}.", call.buffer);
            return;
        };

        let components = call.components.clamp(1, Self::POSITION_COMPONENTS_MAX);
        self.upload(buffer, self.position_location, call.positions, components);

        match call.uv.and_then(|(id, data)| self.buffers.get(id).map(|b| (b, data))) {
            Some((uv_buffer, data)) => {
                self.upload(uv_buffer, self.uv_location, data, Self::UV_COMPONENTS)
            }
            None => self.gl.disable_vertex_attrib_array(self.uv_location),
        }

        let mode = match call.primitive {
            Primitive::Triangles => Gl::TRIANGLES,
            Primitive::Points => Gl::POINTS,
        };
        self.gl.draw_arrays(mode, 0, call.vertex_count());
    }
}
