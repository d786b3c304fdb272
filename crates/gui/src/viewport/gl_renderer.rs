use glam::{Mat4, Vec3};
use glow::HasContext;

use super::mesh::{self, MeshData};
use crate::state::settings::{AxisSettings, GridSettings};

// ── Render parameters ────────────────────────────────────────

/// Parameters for one viewport pass
#[derive(Clone, Copy)]
pub struct RenderParams {
    /// Viewport rectangle [x, y, width, height] in pixels
    pub viewport: [f32; 4],
    pub view_projection: Mat4,
    /// Background color RGB
    pub bg_color: [u8; 3],
    /// Lit material colors (main view) or flat color (projection inset)
    pub shading: Shading,
    /// Draw plane helper and axes
    pub helpers: bool,
    pub grid_visible: bool,
    pub axes_visible: bool,
}

/// How the shape is shaded
#[derive(Clone, Copy)]
pub enum Shading {
    Lit,
    Flat([f32; 3]),
}

// ── GPU buffers ──────────────────────────────────────────────

/// Interleaved f32 vertex buffer with an optional u32 index buffer
struct GpuBuffers {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ibo: Option<glow::Buffer>,
    /// Indices when `ibo` is set, vertices otherwise
    count: i32,
}

/// Key light, roughly from above and in front
const LIGHT_DIR: Vec3 = Vec3::new(0.4, 0.3, 0.85);

/// Attribute sizes of the shape vertex: position, normal, color
const MESH_LAYOUT: &[i32] = &[3, 3, 3];
/// Attribute sizes of the line vertex: position, rgba
const LINE_LAYOUT: &[i32] = &[3, 4];

/// Shape placement handed to the renderer each frame
#[derive(Clone, Copy)]
pub struct ShapeDraw {
    pub model: Mat4,
    pub double_sided: bool,
}

// ── Main GL renderer ─────────────────────────────────────────

/// New model-space geometry for the GPU; `mesh` is None when the scene is empty
pub struct ShapeUpload {
    pub version: u64,
    pub mesh: Option<MeshData>,
}

pub struct GlRenderer {
    mesh_program: glow::Program,
    line_program: glow::Program,
    grid: Option<GpuBuffers>,
    axes: Option<GpuBuffers>,
    /// Cached grid settings to detect changes
    cached_grid_settings: Option<(f32, u32, f32)>,
    /// Cached axes length to detect changes
    cached_axes_length: Option<f32>,
    shape: Option<GpuBuffers>,
    /// Geometry version of the uploaded shape
    shape_version: Option<u64>,
}

impl GlRenderer {
    pub fn new(gl: &glow::Context) -> Self {
        let mesh_program = compile_program(gl, MESH_VERT, MESH_FRAG);
        let line_program = compile_program(gl, LINE_VERT, LINE_FRAG);

        Self {
            mesh_program,
            line_program,
            grid: None,
            axes: None,
            cached_grid_settings: None,
            cached_axes_length: None,
            shape: None,
            shape_version: None,
        }
    }

    /// Update the plane helper grid based on settings
    pub fn update_grid(&mut self, gl: &glow::Context, settings: &GridSettings) {
        let new_settings = (settings.size, settings.divisions, settings.opacity);
        if self.cached_grid_settings == Some(new_settings) {
            return;
        }

        if let Some(old) = self.grid.take() {
            old.delete(gl);
        }

        let color = [0.53, 0.53, 0.53, settings.opacity];
        let grid_data = mesh::plane_grid(settings.size, settings.divisions, color);
        self.grid = Some(GpuBuffers::upload(gl, &grid_data.vertices, LINE_LAYOUT, None));
        self.cached_grid_settings = Some(new_settings);
    }

    /// Update axes mesh based on settings
    pub fn update_axes(&mut self, gl: &glow::Context, settings: &AxisSettings) {
        if self.cached_axes_length == Some(settings.length) {
            return;
        }

        if let Some(old) = self.axes.take() {
            old.delete(gl);
        }

        let axes_data = mesh::axes(settings.length);
        self.axes = Some(GpuBuffers::upload(gl, &axes_data.vertices, LINE_LAYOUT, None));
        self.cached_axes_length = Some(settings.length);
    }

    /// True when the GPU copy of the shape is older than `version`.
    pub fn needs_shape(&self, version: u64) -> bool {
        self.shape_version != Some(version)
    }

    /// Replace the GPU shape with `upload`, unless that version is already there.
    pub fn sync_shape(&mut self, gl: &glow::Context, upload: &ShapeUpload) {
        if !self.needs_shape(upload.version) {
            return;
        }
        self.shape_version = Some(upload.version);

        if let Some(old) = self.shape.take() {
            old.delete(gl);
        }
        if let Some(data) = upload.mesh.as_ref().filter(|d| !d.is_empty()) {
            self.shape = Some(GpuBuffers::upload(
                gl,
                &data.vertices,
                MESH_LAYOUT,
                Some(&data.indices),
            ));
        }
    }

    /// Render one viewport
    pub fn paint(
        &self,
        gl: &glow::Context,
        params: &RenderParams,
        shape: Option<&ShapeDraw>,
        plane_model: Option<Mat4>,
    ) {
        let vp = params.view_projection;
        let [x, y, w, h] = params.viewport.map(|v| v as i32);

        unsafe {
            gl.viewport(x, y, w, h);
            gl.scissor(x, y, w, h);
            gl.enable(glow::SCISSOR_TEST);

            gl.clear_color(
                params.bg_color[0] as f32 / 255.0,
                params.bg_color[1] as f32 / 255.0,
                params.bg_color[2] as f32 / 255.0,
                1.0,
            );
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);

            // Shape
            if let (Some(draw), Some(gpu)) = (shape, self.shape.as_ref()) {
                let program = self.mesh_program;
                gl.use_program(Some(program));
                set_mat4(gl, program, "u_vp", &vp);
                set_mat4(gl, program, "u_model", &draw.model);
                set_vec3(gl, program, "u_light_dir", LIGHT_DIR.normalize());
                let flat_color = match params.shading {
                    Shading::Lit => None,
                    Shading::Flat(c) => Some(Vec3::from_array(c)),
                };
                set_flag(gl, program, "u_flat", flat_color.is_some());
                set_vec3(gl, program, "u_flat_color", flat_color.unwrap_or(Vec3::ZERO));

                if draw.double_sided {
                    gl.disable(glow::CULL_FACE);
                } else {
                    gl.enable(glow::CULL_FACE);
                    gl.cull_face(glow::BACK);
                    gl.front_face(glow::CCW);
                }
                gpu.draw(gl, glow::TRIANGLES);
                gl.disable(glow::CULL_FACE);
            }

            if params.helpers {
                gl.use_program(Some(self.line_program));
                gl.enable(glow::BLEND);
                gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

                if params.axes_visible {
                    if let Some(ref axes) = self.axes {
                        set_mat4(gl, self.line_program, "u_mvp", &vp);
                        axes.draw(gl, glow::LINES);
                    }
                }

                if let (true, Some(model), Some(grid)) =
                    (params.grid_visible, plane_model, self.grid.as_ref())
                {
                    set_mat4(gl, self.line_program, "u_mvp", &(vp * model));
                    gl.depth_mask(false);
                    grid.draw(gl, glow::LINES);
                    gl.depth_mask(true);
                }

                gl.disable(glow::BLEND);
            }

            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::SCISSOR_TEST);
            gl.use_program(None);
        }
    }

    /// Release every GL object; the renderer is unusable afterwards.
    pub fn destroy(&mut self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.mesh_program);
            gl.delete_program(self.line_program);
        }
        for buffers in [self.grid.take(), self.axes.take(), self.shape.take()]
            .into_iter()
            .flatten()
        {
            buffers.delete(gl);
        }
        self.cached_grid_settings = None;
        self.cached_axes_length = None;
        self.shape_version = None;
    }
}

// ── GPU upload and draw ──────────────────────────────────────

impl GpuBuffers {
    /// Upload `vertices` whose attributes follow `layout` (float counts at
    /// locations 0, 1, ...).
    fn upload(
        gl: &glow::Context,
        vertices: &[f32],
        layout: &[i32],
        indices: Option<&[u32]>,
    ) -> Self {
        let floats_per_vertex: i32 = layout.iter().sum();
        let stride = floats_per_vertex * 4;
        unsafe {
            let vao = gl.create_vertex_array().unwrap();
            gl.bind_vertex_array(Some(vao));

            let vbo = gl.create_buffer().unwrap();
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(vertices), glow::STATIC_DRAW);

            let mut offset = 0;
            for (location, &size) in layout.iter().enumerate() {
                gl.enable_vertex_attrib_array(location as u32);
                gl.vertex_attrib_pointer_f32(location as u32, size, glow::FLOAT, false, stride, offset);
                offset += size * 4;
            }

            let ibo = indices.map(|indices| {
                let ibo = gl.create_buffer().unwrap();
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    as_bytes(indices),
                    glow::STATIC_DRAW,
                );
                ibo
            });
            gl.bind_vertex_array(None);

            let count = match indices {
                Some(indices) => indices.len(),
                None => vertices.len() / floats_per_vertex.max(1) as usize,
            };
            Self {
                vao,
                vbo,
                ibo,
                count: count as i32,
            }
        }
    }

    unsafe fn draw(&self, gl: &glow::Context, mode: u32) {
        gl.bind_vertex_array(Some(self.vao));
        match self.ibo {
            Some(ibo) => {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
                gl.draw_elements(mode, self.count, glow::UNSIGNED_INT, 0);
            }
            None => gl.draw_arrays(mode, 0, self.count),
        }
        gl.bind_vertex_array(None);
    }

    fn delete(self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            if let Some(ibo) = self.ibo {
                gl.delete_buffer(ibo);
            }
        }
    }
}

// ── Shader compilation ───────────────────────────────────────

fn compile_program(gl: &glow::Context, vert_src: &str, frag_src: &str) -> glow::Program {
    unsafe {
        let program = gl.create_program().unwrap();
        let stages = [
            (glow::VERTEX_SHADER, vert_src, "vertex"),
            (glow::FRAGMENT_SHADER, frag_src, "fragment"),
        ];
        let mut shaders = Vec::with_capacity(stages.len());
        for (kind, source, label) in stages {
            let shader = gl.create_shader(kind).unwrap();
            gl.shader_source(shader, source);
            gl.compile_shader(shader);
            if !gl.get_shader_compile_status(shader) {
                tracing::error!("{label} shader failed to compile: {}", gl.get_shader_info_log(shader));
            }
            gl.attach_shader(program, shader);
            shaders.push(shader);
        }

        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            tracing::error!("Shader program failed to link: {}", gl.get_program_info_log(program));
        }
        for shader in shaders {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }
        program
    }
}

// ── Uniforms ─────────────────────────────────────────────────

unsafe fn set_mat4(gl: &glow::Context, program: glow::Program, name: &str, mat: &Mat4) {
    let loc = gl.get_uniform_location(program, name);
    gl.uniform_matrix_4_f32_slice(loc.as_ref(), false, &mat.to_cols_array());
}

unsafe fn set_vec3(gl: &glow::Context, program: glow::Program, name: &str, v: Vec3) {
    let loc = gl.get_uniform_location(program, name);
    gl.uniform_3_f32_slice(loc.as_ref(), &v.to_array());
}

unsafe fn set_flag(gl: &glow::Context, program: glow::Program, name: &str, on: bool) {
    let loc = gl.get_uniform_location(program, name);
    gl.uniform_1_i32(loc.as_ref(), i32::from(on));
}

/// View a plain float/index slice as bytes for upload.
fn as_bytes<T: Copy>(slice: &[T]) -> &[u8] {
    // f32 and u32 have no padding, so every byte is initialized
    unsafe { std::slice::from_raw_parts(slice.as_ptr().cast::<u8>(), std::mem::size_of_val(slice)) }
}

// ── Shaders ──────────────────────────────────────────────────

const MESH_VERT: &str = r#"#version 330 core
uniform mat4 u_vp;
uniform mat4 u_model;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec3 a_color;

out vec3 v_normal;
out vec3 v_color;

void main() {
    gl_Position = u_vp * u_model * vec4(a_position, 1.0);
    // Rotation and translation only, so the upper 3x3 keeps normals orthogonal
    v_normal = mat3(u_model) * a_normal;
    v_color = a_color;
}
"#;

const MESH_FRAG: &str = r#"#version 330 core
uniform vec3 u_light_dir;
uniform int u_flat;
uniform vec3 u_flat_color;

in vec3 v_normal;
in vec3 v_color;

out vec4 frag_color;

void main() {
    if (u_flat == 1) {
        frag_color = vec4(u_flat_color, 1.0);
        return;
    }
    vec3 n = normalize(v_normal);
    if (!gl_FrontFacing) {
        n = -n;
    }
    float diffuse = max(dot(n, u_light_dir), 0.0);
    float ambient = 0.35;
    float light = ambient + diffuse * 0.65;
    frag_color = vec4(v_color * light, 1.0);
}
"#;

const LINE_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec4 a_color;

out vec4 v_color;

void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
    v_color = a_color;
}
"#;

const LINE_FRAG: &str = r#"#version 330 core
in vec4 v_color;
out vec4 frag_color;

void main() {
    frag_color = v_color;
}
"#;
