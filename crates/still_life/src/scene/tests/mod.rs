//! Multi-component scene tests
//!
//! The observer doubles here share one [`RecordingShader`] so every draw can
//! snapshot the uniform state it was issued under.

mod scene_flow;

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::math::{Mat4, Vec4};
use crate::render::headless::{RecordingShader, UniformValue};
use crate::render::primitives::{DrawInfo, MeshKind, MeshLibrary, ShapeFaces, ShapeMeshes, ShapeParams};
use crate::render::shader::{uniforms, ShaderInterface};
use crate::render::RenderResult;
use crate::foundation::math::{Vec2, Vec3};

/// Shader state visible to a draw call
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ObservedDraw {
    pub kind: MeshKind,
    pub faces: ShapeFaces,
    pub use_texture: Option<i32>,
    pub sampler: Option<u32>,
    pub color: Option<Vec4>,
    pub model: Option<Mat4>,
    pub shininess: Option<f32>,
    pub use_lighting: Option<i32>,
}

/// Shader that writes through to a shared recorder
pub(super) struct SharedShader(pub Rc<RefCell<RecordingShader>>);

impl ShaderInterface for SharedShader {
    fn set_int(&mut self, name: &str, value: i32) {
        self.0.borrow_mut().set_int(name, value);
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.0.borrow_mut().set_float(name, value);
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.0.borrow_mut().set_vec2(name, value);
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.0.borrow_mut().set_vec3(name, value);
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.0.borrow_mut().set_vec4(name, value);
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.0.borrow_mut().set_mat4(name, value);
    }

    fn set_sampler_2d(&mut self, name: &str, unit: u32) {
        self.0.borrow_mut().set_sampler_2d(name, unit);
    }
}

/// Mesh library that snapshots shader state on every draw
pub(super) struct ObservedMeshes {
    pub inner: ShapeMeshes,
    pub shader: Rc<RefCell<RecordingShader>>,
    pub draws: Vec<ObservedDraw>,
}

impl ObservedMeshes {
    pub fn new(shader: Rc<RefCell<RecordingShader>>) -> Self {
        Self {
            inner: ShapeMeshes::new(),
            shader,
            draws: Vec::new(),
        }
    }
}

impl MeshLibrary for ObservedMeshes {
    fn load_mesh(&mut self, kind: MeshKind, params: ShapeParams) -> RenderResult<()> {
        self.inner.load_mesh(kind, params)
    }

    fn draw_mesh(&mut self, kind: MeshKind, faces: ShapeFaces) -> RenderResult<DrawInfo> {
        let info = self.inner.draw_mesh(kind, faces)?;

        let shader = self.shader.borrow();
        let color = match shader.value(uniforms::OBJECT_COLOR) {
            Some(UniformValue::Vec4(color)) => Some(*color),
            _ => None,
        };
        let shininess = match shader.value(uniforms::MATERIAL_SHININESS) {
            Some(UniformValue::Float(value)) => Some(*value),
            _ => None,
        };

        self.draws.push(ObservedDraw {
            kind,
            faces,
            use_texture: shader.int(uniforms::USE_TEXTURE),
            sampler: shader.sampler(uniforms::OBJECT_TEXTURE),
            color,
            model: shader.mat4(uniforms::MODEL).copied(),
            shininess,
            use_lighting: shader.int(uniforms::USE_LIGHTING),
        });

        Ok(info)
    }
}

/// Shared recorder plus the two doubles wired to it
pub(super) fn observed_pipeline() -> (Rc<RefCell<RecordingShader>>, SharedShader, ObservedMeshes) {
    let recorder = Rc::new(RefCell::new(RecordingShader::new()));
    let shader = SharedShader(Rc::clone(&recorder));
    let meshes = ObservedMeshes::new(Rc::clone(&recorder));
    (recorder, shader, meshes)
}
