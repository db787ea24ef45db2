use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
};

mod texture;

pub type Gl = WebGl2RenderingContext;

pub use texture::Texture;

pub fn get_uniform_location(
    gl: &Gl,
    program: &WebGlProgram,
    location: &str,
) -> anyhow::Result<WebGlUniformLocation> {
    match gl.get_uniform_location(program, location) {
        Some(l) => Ok(l),
        None => Err(anyhow::anyhow!(
            "Failed to get WebGlUniformLocation {location}."
        )),
    }
}

pub fn get_attrib_location(gl: &Gl, program: &WebGlProgram, name: &str) -> anyhow::Result<u32> {
    let location = gl.get_attrib_location(program, name);
    if location < 0 {
        Err(anyhow::anyhow!("Failed to get attribute location {name}."))
    } else {
        Ok(location as u32)
    }
}

pub fn create_buffer(gl: &Gl) -> anyhow::Result<WebGlBuffer> {
    match gl.create_buffer() {
        Some(b) => Ok(b),
        None => Err(anyhow::anyhow!("Failed to create WebGL buffer.")),
    }
}

fn create_shader(gl: &Gl, src: &str, stype: u32) -> anyhow::Result<WebGlShader> {
    let shader = match gl.create_shader(stype) {
        Some(s) => s,
        None => return Err(anyhow::anyhow!("Failed to create shader.")),
    };

    gl.shader_source(&shader, src);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .is_falsy()
    {
        return match gl.get_shader_info_log(&shader) {
            Some(e) => Err(anyhow::anyhow!("Shader compilation failed, log: {e}")),
            None => Err(anyhow::anyhow!(
                "Shader compilation failed, no error message."
            )),
        };
    }

    Ok(shader)
}

pub fn create_program(gl: &Gl, vert: &str, frag: &str) -> anyhow::Result<WebGlProgram> {
    let program = match gl.create_program() {
        Some(p) => p,
        None => return Err(anyhow::anyhow!("WebGL program creation failed.")),
    };

    gl.attach_shader(&program, &create_shader(gl, vert, Gl::VERTEX_SHADER)?);
    gl.attach_shader(&program, &create_shader(gl, frag, Gl::FRAGMENT_SHADER)?);

    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .is_falsy()
    {
        gl.delete_program(Some(&program));
        return Err(anyhow::anyhow!("WebGL program linking failed."));
    }

    Ok(program)
}
