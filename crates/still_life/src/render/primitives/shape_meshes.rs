//! Mesh library over the primitive shapes
//!
//! [`MeshLibrary`] is the seam the scene draws through: shapes are loaded once
//! and drawn any number of times with face-inclusion flags. [`ShapeMeshes`] is
//! the CPU implementation; it keeps tessellated meshes in memory and turns each
//! draw into [`DrawInfo`] and running [`DrawStats`].

use std::collections::HashMap;

use crate::render::primitives::mesh::{Mesh, ShapeFaces};
use crate::render::primitives::shapes;
use crate::render::{RenderError, RenderResult};

/// Kinds of primitive the library knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Flat square
    Plane,
    /// Cube
    Box,
    /// Capped cylinder
    Cylinder,
    /// Cone
    Cone,
    /// Cylinder narrowing towards the top
    TaperedCylinder,
    /// Standard torus
    Torus,
    /// First alternate-thickness torus
    ExtraTorus1,
    /// Second alternate-thickness torus
    ExtraTorus2,
}

/// Tessellation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    /// Tube radius for torus kinds; ignored elsewhere
    pub tube_radius: f32,
}

impl ShapeParams {
    /// Default torus tube radius
    pub const DEFAULT_TUBE_RADIUS: f32 = 0.2;

    /// Parameters with the default tube radius
    pub const DEFAULT: Self = Self::torus(Self::DEFAULT_TUBE_RADIUS);

    /// Parameters for a torus of the given tube radius
    pub const fn torus(tube_radius: f32) -> Self {
        Self { tube_radius }
    }
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of a single draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawInfo {
    /// Shape drawn
    pub kind: MeshKind,
    /// Faces requested
    pub faces: ShapeFaces,
    /// Indices submitted
    pub index_count: u32,
}

impl DrawInfo {
    /// Triangles submitted
    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}

/// Running totals across draws
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Draw calls issued
    pub draw_calls: usize,
    /// Triangles submitted
    pub triangles: usize,
}

/// Primitive shape loading and drawing
pub trait MeshLibrary {
    /// Tessellate and keep `kind`; loading again replaces it
    fn load_mesh(&mut self, kind: MeshKind, params: ShapeParams) -> RenderResult<()>;

    /// Draw a loaded shape, including only the faces in `faces`
    fn draw_mesh(&mut self, kind: MeshKind, faces: ShapeFaces) -> RenderResult<DrawInfo>;
}

/// CPU-side mesh library
#[derive(Debug, Default)]
pub struct ShapeMeshes {
    meshes: HashMap<MeshKind, Mesh>,
    stats: DrawStats,
}

impl ShapeMeshes {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mesh for `kind` without storing it
    pub fn tessellate(kind: MeshKind, params: ShapeParams) -> Mesh {
        match kind {
            MeshKind::Plane => shapes::plane(),
            MeshKind::Box => shapes::cube(),
            MeshKind::Cylinder => shapes::cylinder(),
            MeshKind::Cone => shapes::cone(),
            MeshKind::TaperedCylinder => shapes::tapered_cylinder(),
            MeshKind::Torus | MeshKind::ExtraTorus1 | MeshKind::ExtraTorus2 => {
                shapes::torus(params.tube_radius)
            }
        }
    }

    /// A loaded mesh
    pub fn mesh(&self, kind: MeshKind) -> Option<&Mesh> {
        self.meshes.get(&kind)
    }

    /// Whether `kind` has been loaded
    pub fn is_loaded(&self, kind: MeshKind) -> bool {
        self.meshes.contains_key(&kind)
    }

    /// Number of loaded shapes
    pub fn loaded_count(&self) -> usize {
        self.meshes.len()
    }

    /// Totals since creation or the last reset
    pub fn stats(&self) -> DrawStats {
        self.stats
    }

    /// Zero the running totals
    pub fn reset_stats(&mut self) {
        self.stats = DrawStats::default();
    }
}

impl MeshLibrary for ShapeMeshes {
    fn load_mesh(&mut self, kind: MeshKind, params: ShapeParams) -> RenderResult<()> {
        if params.tube_radius <= 0.0 || !params.tube_radius.is_finite() {
            return Err(RenderError::ResourceCreationFailed(format!(
                "{kind:?}: tube radius must be positive, got {}",
                params.tube_radius
            )));
        }

        let mesh = Self::tessellate(kind, params);
        log::debug!(
            "Loaded {:?}: {} vertices, {} triangles, {} bytes of vertex data",
            kind,
            mesh.vertices.len(),
            mesh.triangle_count(),
            mesh.vertex_bytes().len() + mesh.index_bytes().len()
        );

        self.meshes.insert(kind, mesh);
        Ok(())
    }

    fn draw_mesh(&mut self, kind: MeshKind, faces: ShapeFaces) -> RenderResult<DrawInfo> {
        let mesh = self.meshes.get(&kind).ok_or(RenderError::MeshNotLoaded(kind))?;

        let info = DrawInfo {
            kind,
            faces,
            index_count: mesh.index_count_for(faces),
        };

        self.stats.draw_calls += 1;
        self.stats.triangles += info.triangle_count() as usize;
        log::trace!("draw {:?} {:?}: {} indices", kind, faces, info.index_count);

        Ok(info)
    }
}
