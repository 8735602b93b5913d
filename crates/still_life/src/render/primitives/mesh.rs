//! Mesh representation for primitive shapes
//!
//! Pure geometry containers with no backend dependencies. A [`Mesh`] owns its
//! vertex and index data plus a list of [`FaceGroup`]s that split the index
//! buffer into caps and sides.

use bytemuck::{Pod, Zeroable};

/// 3D vertex data structure for rendering
///
/// `#[repr(C)]` keeps the layout stable for buffer uploads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

bitflags::bitflags! {
    /// Which faces of a capped shape a draw includes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShapeFaces: u8 {
        /// Top cap
        const TOP = 1 << 0;
        /// Bottom cap
        const BOTTOM = 1 << 1;
        /// Side wall
        const SIDE = 1 << 2;
        /// Every face
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits() | Self::SIDE.bits();
    }
}

impl Default for ShapeFaces {
    fn default() -> Self {
        Self::ALL
    }
}

/// The part of a shape an index range belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacePart {
    /// Geometry with no optional faces; always drawn
    Body,
    /// Top cap
    Top,
    /// Bottom cap
    Bottom,
    /// Side wall
    Side,
}

impl FacePart {
    /// Whether a draw with `faces` includes this part
    pub fn is_included(self, faces: ShapeFaces) -> bool {
        match self {
            Self::Body => true,
            Self::Top => faces.contains(ShapeFaces::TOP),
            Self::Bottom => faces.contains(ShapeFaces::BOTTOM),
            Self::Side => faces.contains(ShapeFaces::SIDE),
        }
    }
}

/// A contiguous range of the index buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGroup {
    /// Which part of the shape
    pub part: FacePart,
    /// First index in the index buffer
    pub first_index: u32,
    /// Number of indices
    pub index_count: u32,
}

/// Indexed triangle mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles
    pub indices: Vec<u32>,

    /// Face ranges covering `indices`
    pub groups: Vec<FaceGroup>,
}

impl Mesh {
    /// Create a new mesh
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>, groups: Vec<FaceGroup>) -> Self {
        Self { vertices, indices, groups }
    }

    /// Total triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Index ranges drawn for `faces`
    pub fn groups_for(&self, faces: ShapeFaces) -> impl Iterator<Item = &FaceGroup> {
        self.groups.iter().filter(move |g| g.part.is_included(faces))
    }

    /// Indices drawn for `faces`
    pub fn index_count_for(&self, faces: ShapeFaces) -> u32 {
        self.groups_for(faces).map(|g| g.index_count).sum()
    }

    /// Whether the mesh has any optional faces
    pub fn has_part(&self, part: FacePart) -> bool {
        self.groups.iter().any(|g| g.part == part)
    }

    /// Vertex buffer as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
