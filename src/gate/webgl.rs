//! WebGL plumbing for the gate's shader effects.

use wasm_bindgen::JsCast;
use web_sys as web;
use web_sys::WebGlRenderingContext as GL;

/// Context attributes for an effect surface.
#[derive(Clone, Copy)]
pub struct ContextOptions {
    pub alpha: bool,
    pub antialias: bool,
    pub premultiplied_alpha: bool,
}

// Unit quad drawn as a 4-vertex triangle strip.
const QUAD: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

/// A linked full-screen-quad program and the GL objects it owns.
///
/// Construction failures delete whatever was created before them and yield
/// `None`, leaving the caller with an inactive effect. `release` is the
/// single teardown path.
#[derive(Clone)]
pub struct FxProgram {
    gl: GL,
    program: web::WebGlProgram,
    vert: web::WebGlShader,
    frag: web::WebGlShader,
    quad: web::WebGlBuffer,
}

impl FxProgram {
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        options: ContextOptions,
        vert_src: &str,
        frag_src: &str,
    ) -> Option<Self> {
        let attrs = web::WebGlContextAttributes::new();
        attrs.set_alpha(options.alpha);
        attrs.set_antialias(options.antialias);
        attrs.set_premultiplied_alpha(options.premultiplied_alpha);

        let gl: GL = canvas
            .get_context_with_context_options("webgl", attrs.as_ref())
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;

        let vert = compile_shader(&gl, GL::VERTEX_SHADER, vert_src)?;
        let Some(frag) = compile_shader(&gl, GL::FRAGMENT_SHADER, frag_src) else {
            gl.delete_shader(Some(&vert));
            return None;
        };

        let Some(program) = gl.create_program() else {
            gl.delete_shader(Some(&vert));
            gl.delete_shader(Some(&frag));
            return None;
        };
        gl.attach_shader(&program, &vert);
        gl.attach_shader(&program, &frag);
        gl.link_program(&program);
        if !gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            log::debug!("fx: program link failed: {:?}", gl.get_program_info_log(&program));
            gl.delete_program(Some(&program));
            gl.delete_shader(Some(&vert));
            gl.delete_shader(Some(&frag));
            return None;
        }
        gl.use_program(Some(&program));

        let Some(quad) = gl.create_buffer() else {
            gl.delete_program(Some(&program));
            gl.delete_shader(Some(&vert));
            gl.delete_shader(Some(&frag));
            return None;
        };
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&quad));
        gl.buffer_data_with_u8_array(GL::ARRAY_BUFFER, bytemuck::cast_slice(&QUAD), GL::STATIC_DRAW);

        let position = gl.get_attrib_location(&program, "a_position");
        if position >= 0 {
            gl.enable_vertex_attrib_array(position as u32);
            gl.vertex_attrib_pointer_with_i32(position as u32, 2, GL::FLOAT, false, 0, 0);
        }

        Some(Self {
            gl,
            program,
            vert,
            frag,
            quad,
        })
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    pub fn uniform(&self, name: &str) -> Option<web::WebGlUniformLocation> {
        self.gl.get_uniform_location(&self.program, name)
    }

    /// Make this program current; uniforms apply to the bound program.
    pub fn bind(&self) {
        self.gl.use_program(Some(&self.program));
    }

    /// Draw the full-screen quad with the current uniforms.
    pub fn draw(&self) {
        self.gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
    }

    /// Delete every GL object this program owns.
    pub fn release(self) {
        self.gl.delete_buffer(Some(&self.quad));
        self.gl.delete_program(Some(&self.program));
        self.gl.delete_shader(Some(&self.vert));
        self.gl.delete_shader(Some(&self.frag));
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Option<web::WebGlShader> {
    let shader = gl.create_shader(kind)?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Some(shader)
    } else {
        log::debug!("fx: shader compile failed: {:?}", gl.get_shader_info_log(&shader));
        gl.delete_shader(Some(&shader));
        None
    }
}
