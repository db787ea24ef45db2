use web_sys::WebGlTexture;

use super::Gl;

pub struct Texture {
    texture: WebGlTexture,
}

impl Texture {
    // 0 is the default and what is used here
    const GL_TEXTURE_DETAIL_LEVEL: i32 = 0;

    // Required to be 0 for textures
    const GL_TEXTURE_BORDER_WIDTH: i32 = 0;

    const RGBA: usize = 4;

    fn new(gl: &Gl) -> anyhow::Result<Texture> {
        match gl.create_texture() {
            Some(texture) => Ok(Texture { texture }),
            None => Err(anyhow::anyhow!("Unable to create texture.")),
        }
    }

    fn set_parameters(&self, gl: &Gl) {
        gl.bind_texture(Gl::TEXTURE_2D, Some(&self.texture));
        gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_S, Gl::REPEAT as i32);
        gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_T, Gl::REPEAT as i32);
        gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MIN_FILTER, Gl::NEAREST as i32);
        gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MAG_FILTER, Gl::NEAREST as i32);
    }

    fn load_u8_array(
        &self,
        gl: &Gl,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> anyhow::Result<()> {
        gl.bind_texture(Gl::TEXTURE_2D, Some(&self.texture));

        if gl
            .tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
                Gl::TEXTURE_2D,
                Self::GL_TEXTURE_DETAIL_LEVEL,
                Gl::RGBA as i32,
                width as i32,
                height as i32,
                Self::GL_TEXTURE_BORDER_WIDTH,
                Gl::RGBA,
                Gl::UNSIGNED_BYTE, // u8
                Some(data),
            )
            .is_err()
        {
            return Err(anyhow::anyhow!("Unable to load array as texture."));
        }

        self.set_parameters(gl);
        Ok(())
    }

    pub fn from_u8_array(gl: &Gl, width: u32, height: u32, data: &[u8]) -> anyhow::Result<Texture> {
        let expected = width as usize * height as usize * Self::RGBA;
        if data.len() != expected {
            return Err(anyhow::anyhow!(
                "Texture data is {} bytes, expected {expected}.",
                data.len()
            ));
        }

        let texture = Texture::new(gl)?;
        texture.load_u8_array(gl, width, height, data)?;
        Ok(texture)
    }

    /// A `size` by `size` checkerboard of `cell` pixel squares in two
    /// colours.
    pub fn checker(
        gl: &Gl,
        size: u32,
        cell: u32,
        light: [u8; 4],
        dark: [u8; 4],
    ) -> anyhow::Result<Texture> {
        let cell = cell.max(1);
        let mut data = Vec::with_capacity(size as usize * size as usize * Self::RGBA);
        for y in 0..size {
            for x in 0..size {
                let colour = if ((x / cell) + (y / cell)) % 2 == 0 {
                    light
                } else {
                    dark
                };
                data.extend_from_slice(&colour);
            }
        }
        Self::from_u8_array(gl, size, size, &data)
    }

    /// Bind to texture unit `unit`.
    pub fn bind(&self, gl: &Gl, unit: u32) {
        gl.active_texture(Gl::TEXTURE0 + unit);
        gl.bind_texture(Gl::TEXTURE_2D, Some(&self.texture));
    }
}
