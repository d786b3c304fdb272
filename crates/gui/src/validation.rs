//! Mesh validation utilities.
//!
//! `MeshValidator` checks mesh data integrity (stride, index range, unit
//! normals) and the shape-level properties the factory promises: bounding
//! dimensions, closed surfaces, outward faces and material color.

use std::collections::HashMap;

use glam::Vec3;

use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

/// Positions are welded on a 1e-4 grid when comparing edges.
const WELD_SCALE: f32 = 1e4;

type VertexKey = (i64, i64, i64);

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    /// Create a new validator for the given mesh.
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    /// Number of vertices (vertices buffer length / 9).
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / 9
    }

    /// Number of triangles (indices buffer length / 3).
    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    /// Check that the vertex buffer length is a multiple of 9 (the stride).
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % 9 == 0
    }

    /// Check that the index buffer length is a multiple of 3.
    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    /// Check that all indices are within the valid vertex range.
    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// Check that all vertex normals have unit length (within epsilon).
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        self.mesh
            .vertices
            .chunks_exact(9)
            .all(|v| (Vec3::new(v[3], v[4], v[5]).length() - 1.0).abs() <= epsilon)
    }

    /// Compute the axis-aligned bounding box of the mesh.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Compute the dimensions (width, depth, height) of the bounding box.
    pub fn dimensions(&self) -> [f32; 3] {
        self.aabb().size().to_array()
    }

    /// Check that the AABB dimensions are approximately equal to `expected`.
    pub fn assert_dimensions_approx(&self, expected: [f32; 3], tolerance: f32) -> bool {
        let dims = self.dimensions();
        (dims[0] - expected[0]).abs() < tolerance
            && (dims[1] - expected[1]).abs() < tolerance
            && (dims[2] - expected[2]).abs() < tolerance
    }

    /// Mean of all vertex positions.
    pub fn centroid(&self) -> Vec3 {
        let count = self.vertex_count();
        if count == 0 {
            return Vec3::ZERO;
        }
        self.mesh.positions().sum::<Vec3>() / count as f32
    }

    /// Check that every vertex carries `color` (within 0.01).
    pub fn has_color(&self, color: [f32; 3]) -> bool {
        let expected = Vec3::from_array(color);
        self.vertex_count() > 0
            && self
                .mesh
                .vertices
                .chunks_exact(9)
                .all(|v| (Vec3::new(v[6], v[7], v[8]) - expected).abs().max_element() < 0.01)
    }

    /// Check that the surface is closed: after welding coincident positions,
    /// every directed edge is matched by exactly one reversed edge.
    pub fn is_closed(&self) -> bool {
        let mut edges: HashMap<(VertexKey, VertexKey), i32> = HashMap::new();
        for tri in self.mesh.indices.chunks_exact(3) {
            let keys = [tri[0], tri[1], tri[2]].map(|i| self.key(i));
            for (a, b) in [(keys[0], keys[1]), (keys[1], keys[2]), (keys[2], keys[0])] {
                if a == b {
                    // Collapsed edge at a pole
                    continue;
                }
                *edges.entry((a, b)).or_default() += 1;
            }
        }
        !edges.is_empty()
            && edges
                .iter()
                .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
    }

    /// Check that every non-degenerate triangle's winding normal points away from `center`.
    pub fn faces_point_away_from(&self, center: Vec3) -> bool {
        let pos: Vec<Vec3> = self.mesh.positions().collect();
        self.mesh.indices.chunks_exact(3).all(|t| {
            let (a, b, c) = (pos[t[0] as usize], pos[t[1] as usize], pos[t[2] as usize]);
            let n = (b - a).cross(c - a);
            n.length() < 1e-9 || n.dot((a + b + c) / 3.0 - center) > 0.0
        })
    }

    fn key(&self, index: u32) -> VertexKey {
        let base = index as usize * 9;
        let v = &self.mesh.vertices[base..base + 3];
        (
            (v[0] * WELD_SCALE).round() as i64,
            (v[1] * WELD_SCALE).round() as i64,
            (v[2] * WELD_SCALE).round() as i64,
        )
    }

    /// Check that no vertex position is NaN or infinite.
    pub fn are_positions_finite(&self) -> bool {
        self.mesh.positions().all(|p| p.is_finite())
    }

    /// Every failed integrity check as a message; empty means the mesh is
    /// safe to upload.
    pub fn validate_all(&self) -> Vec<String> {
        let mesh = self.mesh;
        let vertex_count = self.vertex_count() as u32;
        let checks = [
            (
                self.is_stride_valid(),
                format!("{} vertex floats do not fill whole 9-float vertices", mesh.vertices.len()),
            ),
            (
                self.is_index_stride_valid(),
                format!("{} indices do not form whole triangles", mesh.indices.len()),
            ),
            (self.are_positions_finite(), "Non-finite vertex position".to_string()),
            (
                vertex_count == 0 || self.are_normals_normalized(0.1),
                "Normals deviate from unit length by more than 0.1".to_string(),
            ),
        ];

        let mut errors: Vec<String> = checks
            .into_iter()
            .filter(|(ok, _)| !ok)
            .map(|(_, message)| message)
            .collect();

        if !self.are_indices_in_range() {
            let bad: Vec<u32> = mesh
                .indices
                .iter()
                .copied()
                .filter(|&i| i >= vertex_count)
                .take(5)
                .collect();
            errors.push(format!("Indices {bad:?} out of range for {vertex_count} vertices"));
        }
        errors
    }
}
