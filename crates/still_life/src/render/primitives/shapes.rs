//! Tessellation of the parametric shapes
//!
//! Conventions shared by every generator:
//! - Y is up; counter-clockwise winding faces outward
//! - plane and box are centered on the origin
//! - cylinder, cone and tapered cylinder stand on y = 0 with height 1 and
//!   base radius 1
//! - tori lie in the XY plane with main radius 1

use crate::foundation::math::{constants::TAU, Vec3};
use crate::render::primitives::mesh::{FaceGroup, FacePart, Mesh, Vertex};

/// Segments around the axis of round shapes
pub const RADIAL_SEGMENTS: u32 = 36;

/// Segments around the tube of a torus
pub const TUBE_SEGMENTS: u32 = 24;

/// Top radius of the tapered cylinder relative to its base
pub const TAPER_RATIO: f32 = 0.5;

#[derive(Default)]
struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    groups: Vec<FaceGroup>,
}

impl MeshBuilder {
    fn vertex(&mut self, position: Vec3, normal: Vec3, tex_coord: [f32; 2]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(position.into(), normal.into(), tex_coord));
        index
    }

    fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Record every index emitted by `build` as one face group
    fn group(&mut self, part: FacePart, build: impl FnOnce(&mut Self)) {
        let first_index = self.indices.len() as u32;
        build(self);
        let index_count = self.indices.len() as u32 - first_index;
        if index_count > 0 {
            self.groups.push(FaceGroup { part, first_index, index_count });
        }
    }

    fn finish(self) -> Mesh {
        Mesh::new(self.vertices, self.indices, self.groups)
    }
}

fn ring_point(angle: f32) -> (f32, f32) {
    (angle.cos(), angle.sin())
}

/// Unit plane in XZ spanning [-1, 1], facing +Y
pub fn plane() -> Mesh {
    let mut builder = MeshBuilder::default();
    let up = Vec3::y();

    builder.group(FacePart::Body, |b| {
        let v0 = b.vertex(Vec3::new(-1.0, 0.0, 1.0), up, [0.0, 0.0]);
        let v1 = b.vertex(Vec3::new(1.0, 0.0, 1.0), up, [1.0, 0.0]);
        let v2 = b.vertex(Vec3::new(1.0, 0.0, -1.0), up, [1.0, 1.0]);
        let v3 = b.vertex(Vec3::new(-1.0, 0.0, -1.0), up, [0.0, 1.0]);
        b.triangle(v0, v1, v2);
        b.triangle(v0, v2, v3);
    });

    builder.finish()
}

/// Unit cube with side 1, one UV square per face
pub fn cube() -> Mesh {
    // (normal, tangent u, tangent v) with u x v == normal
    let faces = [
        (Vec3::x(), -Vec3::z(), Vec3::y()),
        (-Vec3::x(), Vec3::z(), Vec3::y()),
        (Vec3::y(), Vec3::x(), -Vec3::z()),
        (-Vec3::y(), Vec3::x(), Vec3::z()),
        (Vec3::z(), Vec3::x(), Vec3::y()),
        (-Vec3::z(), -Vec3::x(), Vec3::y()),
    ];

    let mut builder = MeshBuilder::default();
    builder.group(FacePart::Body, |b| {
        for (normal, u, v) in faces {
            let center = normal * 0.5;
            let corners = [
                (center - u * 0.5 - v * 0.5, [0.0, 0.0]),
                (center + u * 0.5 - v * 0.5, [1.0, 0.0]),
                (center + u * 0.5 + v * 0.5, [1.0, 1.0]),
                (center - u * 0.5 + v * 0.5, [0.0, 1.0]),
            ];
            let ids = corners.map(|(position, uv)| b.vertex(position, normal, uv));
            b.triangle(ids[0], ids[1], ids[2]);
            b.triangle(ids[0], ids[2], ids[3]);
        }
    });

    builder.finish()
}

/// Closed cylinder: radius 1, y in [0, 1]
pub fn cylinder() -> Mesh {
    frustum(1.0, 1.0, RADIAL_SEGMENTS)
}

/// Cone: base radius 1 at y = 0, apex at y = 1
pub fn cone() -> Mesh {
    frustum(1.0, 0.0, RADIAL_SEGMENTS)
}

/// Cylinder narrowing to [`TAPER_RATIO`] of its base radius at the top
pub fn tapered_cylinder() -> Mesh {
    frustum(1.0, TAPER_RATIO, RADIAL_SEGMENTS)
}

/// Torus in the XY plane, main radius 1, tube radius `thickness`
pub fn torus(thickness: f32) -> Mesh {
    let main_segments = RADIAL_SEGMENTS;
    let tube_segments = TUBE_SEGMENTS;
    let columns = tube_segments + 1;

    let mut builder = MeshBuilder::default();
    builder.group(FacePart::Body, |b| {
        for i in 0..=main_segments {
            let u = i as f32 / main_segments as f32;
            let (cos_theta, sin_theta) = ring_point(u * TAU);
            let center = Vec3::new(cos_theta, sin_theta, 0.0);

            for j in 0..=tube_segments {
                let v = j as f32 / tube_segments as f32;
                let (cos_phi, sin_phi) = ring_point(v * TAU);
                let normal = Vec3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi);
                b.vertex(center + normal * thickness, normal, [u, v]);
            }
        }

        for i in 0..main_segments {
            for j in 0..tube_segments {
                let a = i * columns + j;
                let next_ring = a + columns;
                b.triangle(a, next_ring, next_ring + 1);
                b.triangle(a, next_ring + 1, a + 1);
            }
        }
    });

    builder.finish()
}

/// Capped frustum between `bottom_radius` at y = 0 and `top_radius` at y = 1
///
/// A zero radius end gets no cap.
fn frustum(bottom_radius: f32, top_radius: f32, segments: u32) -> Mesh {
    let mut builder = MeshBuilder::default();

    builder.group(FacePart::Side, |b| {
        let slope = bottom_radius - top_radius;
        let first = b.vertices.len() as u32;

        for i in 0..=segments {
            let u = i as f32 / segments as f32;
            let (x, z) = ring_point(u * TAU);
            let normal = Vec3::new(x, slope, z).normalize();
            b.vertex(Vec3::new(x * bottom_radius, 0.0, z * bottom_radius), normal, [u, 0.0]);
            b.vertex(Vec3::new(x * top_radius, 1.0, z * top_radius), normal, [u, 1.0]);
        }

        for i in 0..segments {
            let bottom = first + i * 2;
            let top = bottom + 1;
            let next_bottom = bottom + 2;
            let next_top = bottom + 3;
            b.triangle(bottom, top, next_bottom);
            if top_radius > 0.0 {
                b.triangle(next_bottom, top, next_top);
            }
        }
    });

    builder.group(FacePart::Top, |b| {
        if top_radius > 0.0 {
            cap(b, 1.0, top_radius, segments, true);
        }
    });

    builder.group(FacePart::Bottom, |b| {
        if bottom_radius > 0.0 {
            cap(b, 0.0, bottom_radius, segments, false);
        }
    });

    builder.finish()
}

fn cap(b: &mut MeshBuilder, y: f32, radius: f32, segments: u32, facing_up: bool) {
    let normal = if facing_up { Vec3::y() } else { -Vec3::y() };
    let center = b.vertex(Vec3::new(0.0, y, 0.0), normal, [0.5, 0.5]);
    let first = b.vertices.len() as u32;

    for i in 0..=segments {
        let (x, z) = ring_point(i as f32 / segments as f32 * TAU);
        b.vertex(
            Vec3::new(x * radius, y, z * radius),
            normal,
            [0.5 + 0.5 * x, 0.5 + 0.5 * z],
        );
    }

    for i in 0..segments {
        let current = first + i;
        if facing_up {
            b.triangle(center, current + 1, current);
        } else {
            b.triangle(center, current, current + 1);
        }
    }
}
