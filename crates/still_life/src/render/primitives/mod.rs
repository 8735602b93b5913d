//! Parametric primitive shapes
//!
//! The mesh library tessellates the handful of shapes the scene is built from
//! into indexed triangle lists, tagging each index range with the face it
//! belongs to so draws can leave out caps.

pub mod mesh;
pub mod shapes;
pub mod shape_meshes;

pub use mesh::{Mesh, Vertex, FaceGroup, FacePart, ShapeFaces};
pub use shape_meshes::{MeshLibrary, MeshKind, ShapeMeshes, ShapeParams, DrawInfo, DrawStats};
