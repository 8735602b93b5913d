//! Tagged Phong materials

use serde::{Serialize, Deserialize};

use crate::render::material::MaterialValues;

/// A material definition looked up by tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMaterial {
    /// Lookup key
    pub tag: String,
    /// Diffuse color (RGB)
    pub diffuse_color: [f32; 3],
    /// Specular color (RGB)
    pub specular_color: [f32; 3],
    /// Specular exponent
    pub shininess: f32,
}

impl ObjectMaterial {
    /// Create a tagged material
    pub fn new(tag: impl Into<String>, diffuse_color: [f32; 3], specular_color: [f32; 3], shininess: f32) -> Self {
        Self {
            tag: tag.into(),
            diffuse_color,
            specular_color,
            shininess,
        }
    }

    /// Uniform block values for this material
    pub fn values(&self) -> MaterialValues {
        MaterialValues::new(self.diffuse_color, self.specular_color, self.shininess)
    }
}

/// Ordered material list with first-match lookup
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    materials: Vec<ObjectMaterial>,
}

impl MaterialRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material
    pub fn add(&mut self, material: ObjectMaterial) {
        log::debug!("Registered material '{}'", material.tag);
        self.materials.push(material);
    }

    /// Append every material from `materials`, in order
    pub fn extend<I>(&mut self, materials: I)
    where
        I: IntoIterator<Item = ObjectMaterial>,
    {
        for material in materials {
            self.add(material);
        }
    }

    /// First material tagged `tag`, if any
    pub fn find(&self, tag: &str) -> Option<&ObjectMaterial> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    /// Registered materials in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ObjectMaterial> {
        self.materials.iter()
    }

    /// Number of materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
