//! The still-life tabletop, as data
//!
//! Each [`SceneObject`] row is consumed in order by
//! [`SceneManager::render_objects`](crate::scene::SceneManager::render_objects).
//! Objects that don't set lighting or a material inherit whatever the
//! previous row left in the shader.

use crate::render::material::MaterialValues;
use crate::render::primitives::{MeshKind, ShapeFaces, ShapeParams};
use crate::render::transform::TransformParams;

/// How an object is colored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Sample the texture registered under this tag
    Texture(&'static str),
    /// Flat RGBA color
    Color([f32; 4]),
}

/// Material block pushed before an object is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialSource {
    /// Keep the material left by earlier objects
    Inherit,
    /// Push these values
    Inline(MaterialValues),
    /// Look the material up in the material registry
    Tagged(&'static str),
}

/// One draw in the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    /// Name used in log output
    pub name: &'static str,
    /// Mesh to draw
    pub mesh: MeshKind,
    /// Model transform
    pub transform: TransformParams,
    /// Lighting flag to push, if any
    pub lighting: Option<bool>,
    /// Material block source
    pub material: MaterialSource,
    /// Texture or flat color
    pub surface: Surface,
    /// Texture coordinate scale
    pub uv_scale: [f32; 2],
    /// Faces to draw
    pub faces: ShapeFaces,
}

/// A texture file and the tag it registers under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSource {
    /// File name, relative to the texture directory
    pub file: &'static str,
    /// Registry tag
    pub tag: &'static str,
}

/// Meshes the scene uses, in load order
pub const SCENE_MESHES: [(MeshKind, ShapeParams); 8] = [
    (MeshKind::Plane, ShapeParams::DEFAULT),
    (MeshKind::Cylinder, ShapeParams::DEFAULT),
    (MeshKind::Cone, ShapeParams::DEFAULT),
    (MeshKind::Torus, ShapeParams::DEFAULT),
    (MeshKind::Box, ShapeParams::DEFAULT),
    (MeshKind::TaperedCylinder, ShapeParams::DEFAULT),
    (MeshKind::ExtraTorus1, ShapeParams::torus(0.12)),
    (MeshKind::ExtraTorus2, ShapeParams::torus(0.22)),
];

/// Textures the scene loads, in load order
pub const SCENE_TEXTURES: [TextureSource; 7] = [
    TextureSource { file: "wood.jpg", tag: "wood" },
    TextureSource { file: "stone.jpg", tag: "stone" },
    TextureSource { file: "ceramic.jpg", tag: "ceramic" },
    TextureSource { file: "table.jpg", tag: "table" },
    TextureSource { file: "bread1.jpg", tag: "bread1" },
    TextureSource { file: "bread2.jpg", tag: "bread2" },
    TextureSource { file: "basket.jpg", tag: "basket" },
];

const TABLE_MATERIAL: MaterialValues = MaterialValues::new([1.0, 1.0, 1.0], [0.8, 0.8, 0.8], 64.0);
const STONEWARE_MATERIAL: MaterialValues = MaterialValues::new([1.0, 1.0, 1.0], [0.25, 0.25, 0.25], 16.0);

const TOP_AND_SIDE: ShapeFaces = ShapeFaces::TOP.union(ShapeFaces::SIDE);
const BOTTOM_AND_SIDE: ShapeFaces = ShapeFaces::BOTTOM.union(ShapeFaces::SIDE);

const fn object(
    name: &'static str,
    mesh: MeshKind,
    transform: TransformParams,
    surface: Surface,
    uv_scale: [f32; 2],
    faces: ShapeFaces,
) -> SceneObject {
    SceneObject {
        name,
        mesh,
        transform,
        lighting: None,
        material: MaterialSource::Inherit,
        surface,
        uv_scale,
        faces,
    }
}

const fn lit(object: SceneObject, material: MaterialValues) -> SceneObject {
    SceneObject {
        lighting: Some(true),
        material: MaterialSource::Inline(material),
        ..object
    }
}

/// The tabletop: jug, plate, cup, bread basket and two slices of bread
pub const STILL_LIFE: [SceneObject; 13] = [
    lit(
        object(
            "table top",
            MeshKind::Plane,
            TransformParams::new([20.0, 1.0, 15.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            Surface::Texture("table"),
            [4.0, 4.0],
            ShapeFaces::ALL,
        ),
        TABLE_MATERIAL,
    ),
    lit(
        object(
            "jug body",
            MeshKind::Cylinder,
            TransformParams::new([1.7, 4.0, 1.7], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            Surface::Texture("stone"),
            [1.0, 1.0],
            ShapeFaces::ALL,
        ),
        STONEWARE_MATERIAL,
    ),
    object(
        "jug upper",
        MeshKind::Cylinder,
        TransformParams::new([1.0, 2.0, 1.7], [0.0, 0.0, 0.0], [0.0, 3.5, 0.0]),
        Surface::Texture("stone"),
        [1.0, 1.0],
        ShapeFaces::ALL,
    ),
    object(
        "jug lip",
        MeshKind::Cone,
        TransformParams::new([1.4, 2.0, 1.4], [180.0, 0.0, 0.0], [0.0, 6.0, 0.0]),
        Surface::Texture("stone"),
        [1.0, 0.8],
        ShapeFaces::ALL,
    ),
    object(
        "jug handle",
        MeshKind::Torus,
        TransformParams::new([0.9, 1.6, 0.5], [0.0, 0.0, 90.0], [1.8, 4.0, 0.0]),
        Surface::Texture("stone"),
        [1.2, 1.2],
        ShapeFaces::ALL,
    ),
    object(
        "plate base",
        MeshKind::Cylinder,
        TransformParams::new([3.0, 0.1, 3.0], [0.0, 0.0, 0.0], [2.2, 0.16, 5.2]),
        Surface::Texture("wood"),
        [1.0, 1.0],
        ShapeFaces::ALL,
    ),
    object(
        "plate rim",
        MeshKind::ExtraTorus1,
        TransformParams::new([3.05, 3.0, 3.0], [90.0, 0.0, 0.0], [2.2, 0.16, 5.2]),
        Surface::Texture("wood"),
        [1.0, 1.0],
        ShapeFaces::ALL,
    ),
    object(
        "cup body",
        MeshKind::TaperedCylinder,
        TransformParams::new([1.15, 1.05, 1.15], [0.0, 0.0, 180.0], [4.2, 1.1, -2.2]),
        Surface::Texture("ceramic"),
        [2.0, 2.0],
        TOP_AND_SIDE,
    ),
    object(
        "cup rim",
        MeshKind::ExtraTorus2,
        TransformParams::new([0.96, 0.96, 0.96], [90.0, -50.0, 0.0], [4.2, 0.95, -2.2]),
        Surface::Texture("ceramic"),
        [2.0, 2.0],
        ShapeFaces::ALL,
    ),
    object(
        "basket body",
        MeshKind::Cylinder,
        TransformParams::new([2.2, 1.05, 2.2], [0.0, 0.0, 0.0], [-4.2, 0.1, 1.2]),
        Surface::Texture("basket"),
        [2.0, 1.0],
        BOTTOM_AND_SIDE,
    ),
    object(
        "basket rim",
        MeshKind::ExtraTorus2,
        TransformParams::new([1.8, 1.8, 1.6], [90.0, -50.0, 0.0], [-4.2, 1.15, 1.2]),
        Surface::Texture("basket"),
        [2.0, 1.0],
        ShapeFaces::ALL,
    ),
    object(
        "bread piece 1",
        MeshKind::Box,
        TransformParams::new([4.5, 0.4, 0.6], [180.0, -25.0, 25.0], [-4.05, 1.25, 1.1]),
        Surface::Texture("bread1"),
        [1.0, 1.0],
        ShapeFaces::ALL,
    ),
    object(
        "bread piece 2",
        MeshKind::Box,
        TransformParams::new([4.5, 0.55, 0.16], [-62.0, 20.0, 25.0], [-4.3, 1.18, 1.3]),
        Surface::Texture("bread2"),
        [1.0, 1.0],
        ShapeFaces::ALL,
    ),
];
