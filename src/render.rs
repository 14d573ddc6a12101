//! WebGL setup and drawing for the heart shader.

use crate::clock::{FrameUniforms, Viewport};
use crate::error::{SetupError, ShaderStage};
use crate::shader::*;
use wasm_bindgen::JsCast;
use web_sys as web;
use web_sys::WebGlRenderingContext as GL;

/// The single shader program plus everything needed to feed it.
pub struct HeartRenderer {
    gl: GL,
    canvas: web::HtmlCanvasElement,
    program: web::WebGlProgram,
    _quad: web::WebGlBuffer,
    time: web::WebGlUniformLocation,
    width: web::WebGlUniformLocation,
    height: web::WebGlUniformLocation,
    viewport: Viewport,
}

impl HeartRenderer {
    pub fn new(canvas: web::HtmlCanvasElement, viewport: Viewport) -> Result<Self, SetupError> {
        canvas.set_width(viewport.width);
        canvas.set_height(viewport.height);

        let gl: GL = canvas
            .get_context("webgl")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<GL>().ok())
            .ok_or(SetupError::ContextUnavailable)?;

        let program = link_program(&gl, HEART_VERT, HEART_FRAG)?;
        gl.use_program(Some(&program));

        let quad = gl.create_buffer().ok_or(SetupError::BufferCreate)?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&quad));
        gl.buffer_data_with_u8_array(GL::ARRAY_BUFFER, quad_bytes(), GL::STATIC_DRAW);

        let position = attrib_location(&gl, &program, POSITION_ATTRIB)?;
        gl.enable_vertex_attrib_array(position);
        gl.vertex_attrib_pointer_with_i32(position, QUAD_COMPONENTS, GL::FLOAT, false, QUAD_STRIDE, 0);

        let time = uniform_location(&gl, &program, TIME_UNIFORM)?;
        let width = uniform_location(&gl, &program, WIDTH_UNIFORM)?;
        let height = uniform_location(&gl, &program, HEIGHT_UNIFORM)?;

        let mut renderer = Self {
            gl,
            canvas,
            program,
            _quad: quad,
            time,
            width,
            height,
            viewport,
        };
        renderer.resize(viewport);
        log::info!(
            "[render] heart program ready at {}x{}",
            viewport.width,
            viewport.height
        );
        Ok(renderer)
    }

    /// Match the backing store, GL viewport and size uniforms to `viewport`.
    pub fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
        self.gl
            .viewport(0, 0, viewport.width as i32, viewport.height as i32);
        self.gl
            .uniform1f(Some(&self.width), viewport.width as f32);
        self.gl
            .uniform1f(Some(&self.height), viewport.height as f32);
        self.viewport = viewport;
    }

    /// Upload `time` and draw the full-screen strip. Returns what was uploaded.
    pub fn draw(&self, time: f32) -> FrameUniforms {
        let uniforms = FrameUniforms::new(time, self.viewport);
        self.gl.uniform1f(Some(&self.time), uniforms.time);
        self.gl
            .draw_arrays(GL::TRIANGLE_STRIP, 0, QUAD_VERTEX_COUNT);
        uniforms
    }

    /// The GL context and program, for reading state back.
    pub fn context(&self) -> (&GL, &web::WebGlProgram) {
        (&self.gl, &self.program)
    }
}

fn link_program(gl: &GL, vertex_src: &str, fragment_src: &str) -> Result<web::WebGlProgram, SetupError> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
    let fragment = compile_shader(gl, ShaderStage::Fragment, fragment_src)?;
    let program = gl.create_program().ok_or(SetupError::ProgramCreate)?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);
    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        Ok(program)
    } else {
        let info = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown program error".to_string());
        Err(SetupError::ProgramLink(info))
    }
}

fn compile_shader(gl: &GL, stage: ShaderStage, source: &str) -> Result<web::WebGlShader, SetupError> {
    let kind = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl.create_shader(kind).ok_or(SetupError::ShaderCreate(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown shader error".to_string());
        Err(SetupError::ShaderCompile { stage, log })
    }
}

fn attrib_location(gl: &GL, program: &web::WebGlProgram, name: &str) -> Result<u32, SetupError> {
    let loc = gl.get_attrib_location(program, name);
    u32::try_from(loc).map_err(|_| SetupError::MissingAttribute(name.to_string()))
}

fn uniform_location(
    gl: &GL,
    program: &web::WebGlProgram,
    name: &str,
) -> Result<web::WebGlUniformLocation, SetupError> {
    gl.get_uniform_location(program, name)
        .ok_or_else(|| SetupError::MissingUniform(name.to_string()))
}
