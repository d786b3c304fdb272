use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Vertex positions in model space
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices
            .chunks_exact(9)
            .map(|v| Vec3::new(v[0], v[1], v[2]))
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Debug, Clone, Default)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 7
    }
}

/// `0xRRGGBB` to linear-ish float RGB
pub const fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

// ── Solids (Z-up) ────────────────────────────────────────────

/// Axis-aligned box between `min` and `max`, flat shaded.
pub fn box_mesh(min: Vec3, max: Vec3, color: [f32; 3]) -> MeshData {
    let (lo, hi) = (min, max);
    let faces: [([Vec3; 4], Vec3); 6] = [
        // +Z
        ([Vec3::new(lo.x, lo.y, hi.z), Vec3::new(hi.x, lo.y, hi.z), Vec3::new(hi.x, hi.y, hi.z), Vec3::new(lo.x, hi.y, hi.z)], Vec3::Z),
        // -Z
        ([Vec3::new(lo.x, hi.y, lo.z), Vec3::new(hi.x, hi.y, lo.z), Vec3::new(hi.x, lo.y, lo.z), Vec3::new(lo.x, lo.y, lo.z)], Vec3::NEG_Z),
        // +X
        ([Vec3::new(hi.x, lo.y, lo.z), Vec3::new(hi.x, hi.y, lo.z), Vec3::new(hi.x, hi.y, hi.z), Vec3::new(hi.x, lo.y, hi.z)], Vec3::X),
        // -X
        ([Vec3::new(lo.x, hi.y, lo.z), Vec3::new(lo.x, lo.y, lo.z), Vec3::new(lo.x, lo.y, hi.z), Vec3::new(lo.x, hi.y, hi.z)], Vec3::NEG_X),
        // +Y
        ([Vec3::new(hi.x, hi.y, lo.z), Vec3::new(lo.x, hi.y, lo.z), Vec3::new(lo.x, hi.y, hi.z), Vec3::new(hi.x, hi.y, hi.z)], Vec3::Y),
        // -Y
        ([Vec3::new(lo.x, lo.y, lo.z), Vec3::new(hi.x, lo.y, lo.z), Vec3::new(hi.x, lo.y, hi.z), Vec3::new(lo.x, lo.y, hi.z)], Vec3::NEG_Y),
    ];

    let mut vertices = Vec::with_capacity(24 * 9);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / 9) as u32;
        for v in quad {
            push_vert(&mut vertices, *v, *normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// UV sphere centered at the origin, poles on ±Z.
pub fn sphere(radius: f32, rings: u32, sectors: u32, color: [f32; 3]) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for r in 0..=rings {
        let phi = PI * r as f32 / rings as f32;
        let (sp, cp) = phi.sin_cos();

        for s in 0..=sectors {
            let theta = TAU * s as f32 / sectors as f32;
            let (st, ct) = theta.sin_cos();
            let n = Vec3::new(sp * ct, sp * st, cp);
            push_vert(&mut vertices, n * radius, n, color);
        }
    }

    for r in 0..rings {
        for s in 0..sectors {
            let i0 = r * (sectors + 1) + s;
            let i1 = i0 + 1;
            let i2 = i0 + sectors + 1;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    MeshData { vertices, indices }
}

/// Cylinder along +Z with its base on `z = 0`.
pub fn cylinder(radius: f32, height: f32, segments: u32, color: [f32; 3]) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for i in 0..segments {
        let (s0, c0) = segment_angle(i, segments).sin_cos();
        let (s1, c1) = segment_angle(i + 1, segments).sin_cos();
        let n0 = Vec3::new(c0, s0, 0.0);
        let n1 = Vec3::new(c1, s1, 0.0);

        let base = (vertices.len() / 9) as u32;
        push_vert(&mut vertices, Vec3::new(radius * c0, radius * s0, 0.0), n0, color);
        push_vert(&mut vertices, Vec3::new(radius * c1, radius * s1, 0.0), n1, color);
        push_vert(&mut vertices, Vec3::new(radius * c1, radius * s1, height), n1, color);
        push_vert(&mut vertices, Vec3::new(radius * c0, radius * s0, height), n0, color);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    add_cap(&mut vertices, &mut indices, radius, height, segments, Vec3::Z, color);
    add_cap(&mut vertices, &mut indices, radius, 0.0, segments, Vec3::NEG_Z, color);

    MeshData { vertices, indices }
}

/// Cone along +Z with its base on `z = 0` and apex at `z = height`.
pub fn cone(radius: f32, height: f32, segments: u32, color: [f32; 3]) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let slope = radius / height;
    for i in 0..segments {
        let (s0, c0) = segment_angle(i, segments).sin_cos();
        let (s1, c1) = segment_angle(i + 1, segments).sin_cos();
        let n0 = Vec3::new(c0, s0, slope).normalize();
        let n1 = Vec3::new(c1, s1, slope).normalize();
        let n_top = (n0 + n1).normalize();

        let base = (vertices.len() / 9) as u32;
        push_vert(&mut vertices, Vec3::new(0.0, 0.0, height), n_top, color);
        push_vert(&mut vertices, Vec3::new(radius * c0, radius * s0, 0.0), n0, color);
        push_vert(&mut vertices, Vec3::new(radius * c1, radius * s1, 0.0), n1, color);
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    add_cap(&mut vertices, &mut indices, radius, 0.0, segments, Vec3::NEG_Z, color);

    MeshData { vertices, indices }
}

/// Disc in the XY plane, visible from both sides.
pub fn disc(radius: f32, segments: u32, color: [f32; 3]) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    add_cap(&mut vertices, &mut indices, radius, 0.0, segments, Vec3::Z, color);
    add_cap(&mut vertices, &mut indices, radius, 0.0, segments, Vec3::NEG_Z, color);
    MeshData { vertices, indices }
}

/// Flat-shaded triangles: three unique vertices per face, normal from the winding.
pub fn flat_triangles(points: &[Vec3], triangles: &[[usize; 3]], color: [f32; 3]) -> MeshData {
    let mut vertices = Vec::with_capacity(triangles.len() * 27);
    let mut indices = Vec::with_capacity(triangles.len() * 3);

    for tri in triangles {
        let [a, b, c] = tri.map(|i| points[i]);
        let normal = (b - a).cross(c - a).normalize_or_zero();
        let base = (vertices.len() / 9) as u32;
        for p in [a, b, c] {
            push_vert(&mut vertices, p, normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    MeshData { vertices, indices }
}

// ── Plane helper and axes ────────────────────────────────────

/// Square wireframe grid in the local XY plane, centered at the origin.
pub fn plane_grid(size: f32, divisions: u32, color: [f32; 4]) -> LineMeshData {
    let mut vertices = Vec::new();
    let half = size * 0.5;
    let divisions = divisions.max(1);

    for i in 0..=divisions {
        let f = -half + size * i as f32 / divisions as f32;
        // Line along Y
        push_line_vert(&mut vertices, Vec3::new(f, -half, 0.0), color);
        push_line_vert(&mut vertices, Vec3::new(f, half, 0.0), color);
        // Line along X
        push_line_vert(&mut vertices, Vec3::new(-half, f, 0.0), color);
        push_line_vert(&mut vertices, Vec3::new(half, f, 0.0), color);
    }

    LineMeshData { vertices }
}

pub const AXIS_COLORS: [[f32; 4]; 3] = [
    [0.9, 0.2, 0.2, 1.0],
    [0.2, 0.7, 0.2, 1.0],
    [0.2, 0.3, 0.9, 1.0],
];

/// World axes as arrows from the origin, with a small V-shaped head.
pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let head = length * 0.08;

    for (axis, color) in [Vec3::X, Vec3::Y, Vec3::Z].into_iter().zip(AXIS_COLORS) {
        let tip = axis * length;
        push_line_vert(&mut vertices, Vec3::ZERO, color);
        push_line_vert(&mut vertices, tip, color);

        // Head barbs in two perpendicular planes
        let (side_a, side_b) = axis.any_orthonormal_pair();
        for side in [side_a, -side_a, side_b, -side_b] {
            push_line_vert(&mut vertices, tip, color);
            push_line_vert(&mut vertices, tip - axis * head + side * head * 0.5, color);
        }
    }

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn segment_angle(i: u32, segments: u32) -> f32 {
    i as f32 * TAU / segments as f32
}

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, p: Vec3, c: [f32; 4]) {
    v.extend_from_slice(&[p.x, p.y, p.z, c[0], c[1], c[2], c[3]]);
}

/// Fan cap at height `z`; winding follows `normal` (±Z).
fn add_cap(
    vertices: &mut Vec<f32>,
    indices: &mut Vec<u32>,
    radius: f32,
    z: f32,
    segments: u32,
    normal: Vec3,
    color: [f32; 3],
) {
    let center_idx = (vertices.len() / 9) as u32;
    push_vert(vertices, Vec3::new(0.0, 0.0, z), normal, color);

    for i in 0..segments {
        let (s, c) = segment_angle(i, segments).sin_cos();
        push_vert(vertices, Vec3::new(radius * c, radius * s, z), normal, color);
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        if normal.z >= 0.0 {
            indices.extend_from_slice(&[center_idx, center_idx + 1 + i, center_idx + 1 + next]);
        } else {
            indices.extend_from_slice(&[center_idx, center_idx + 1 + next, center_idx + 1 + i]);
        }
    }
}
