//! Incremental 3D convex hull for user-defined polyhedra.
//!
//! Points are added one at a time to an initial tetrahedron. Every face that
//! sees the new point is removed and the hole is closed by a fan of triangles
//! from the horizon edges to the point. Coplanar input falls back to a 2D hull
//! in the common plane, emitted with both windings so it renders from either
//! side.

use std::collections::HashSet;

use glam::{DVec2, DVec3};

use crate::error::InputError;

/// Relative tolerance, scaled by the size of the point cloud.
const EPSILON: f64 = 1e-9;

/// Triangulated convex hull.
#[derive(Debug, Clone)]
pub struct Hull {
    /// Input points (all of them; interior points are simply unreferenced)
    pub points: Vec<DVec3>,
    /// Counter-clockwise triangles seen from outside
    pub triangles: Vec<[usize; 3]>,
    /// True when the points were coplanar and the hull is a double-sided polygon
    pub is_flat: bool,
}

impl Hull {
    /// Indices of points that lie on the hull surface.
    pub fn vertex_indices(&self) -> Vec<usize> {
        let mut used: Vec<usize> = self.triangles.iter().flatten().copied().collect();
        used.sort_unstable();
        used.dedup();
        used
    }

    /// Enclosed volume (zero for flat hulls).
    pub fn volume(&self) -> f64 {
        let sum: f64 = self
            .triangles
            .iter()
            .map(|[a, b, c]| {
                let (a, b, c) = (self.points[*a], self.points[*b], self.points[*c]);
                a.dot(b.cross(c))
            })
            .sum();
        sum / 6.0
    }

    pub fn centroid(&self) -> DVec3 {
        let used = self.vertex_indices();
        if used.is_empty() {
            return DVec3::ZERO;
        }
        used.iter().map(|&i| self.points[i]).sum::<DVec3>() / used.len() as f64
    }
}

#[derive(Debug, Clone, Copy)]
struct Face {
    v: [usize; 3],
    normal: DVec3,
    /// `normal · p` for any point on the face
    offset: f64,
}

impl Face {
    fn new(points: &[DVec3], v: [usize; 3]) -> Self {
        let (a, b, c) = (points[v[0]], points[v[1]], points[v[2]]);
        let normal = (b - a).cross(c - a).normalize_or_zero();
        Self {
            v,
            normal,
            offset: normal.dot(a),
        }
    }

    fn distance(&self, p: DVec3) -> f64 {
        self.normal.dot(p) - self.offset
    }

    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.v;
        [(a, b), (b, c), (c, a)]
    }
}

/// Build the convex hull of `points` (at least 3, not all collinear).
pub fn convex_hull(points: &[DVec3]) -> Result<Hull, InputError> {
    if points.len() < 3 {
        return Err(InputError::TooFewPoints(points.len()));
    }

    let (min, max) = points.iter().fold(
        (DVec3::splat(f64::INFINITY), DVec3::splat(f64::NEG_INFINITY)),
        |(lo, hi), p| (lo.min(*p), hi.max(*p)),
    );
    let span = (max - min).length();
    let eps = EPSILON * span.max(1.0);

    // Two points far apart
    let i0 = (0..points.len())
        .min_by(|&a, &b| points[a].x.total_cmp(&points[b].x))
        .unwrap_or(0);
    let i1 = farthest(points, |p| (p - points[i0]).length());
    if (points[i1] - points[i0]).length() <= eps {
        return Err(InputError::DegeneratePoints);
    }

    // Farthest from the line through them
    let dir = (points[i1] - points[i0]).normalize();
    let line_distance = |p: DVec3| {
        let rel = p - points[i0];
        (rel - dir * rel.dot(dir)).length()
    };
    let i2 = farthest(points, &line_distance);
    if line_distance(points[i2]) <= eps {
        return Err(InputError::DegeneratePoints);
    }

    // Farthest from the plane through all three
    let base_normal = (points[i1] - points[i0])
        .cross(points[i2] - points[i0])
        .normalize();
    let plane_distance = |p: DVec3| base_normal.dot(p - points[i0]).abs();
    let i3 = farthest(points, &plane_distance);
    if plane_distance(points[i3]) <= eps {
        return flat_hull(points, points[i0], base_normal, eps * span);
    }

    let seed = [i0, i1, i2, i3];
    let inside = seed.iter().map(|&i| points[i]).sum::<DVec3>() / 4.0;

    let mut faces: Vec<Face> = [[i0, i1, i2], [i0, i3, i1], [i1, i3, i2], [i2, i3, i0]]
        .into_iter()
        .map(|v| {
            let face = Face::new(points, v);
            if face.distance(inside) > 0.0 {
                Face::new(points, [v[0], v[2], v[1]])
            } else {
                face
            }
        })
        .collect();

    for (index, &p) in points.iter().enumerate() {
        if seed.contains(&index) {
            continue;
        }

        let visible: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.distance(p) > eps)
            .map(|(i, _)| i)
            .collect();
        if visible.is_empty() {
            continue;
        }

        let visible_edges: HashSet<(usize, usize)> = visible
            .iter()
            .flat_map(|&fi| faces[fi].edges())
            .collect();
        let horizon: Vec<(usize, usize)> = visible_edges
            .iter()
            .filter(|(a, b)| !visible_edges.contains(&(*b, *a)))
            .copied()
            .collect();

        let mut keep = Vec::with_capacity(faces.len() + horizon.len());
        for (i, face) in faces.iter().enumerate() {
            if !visible.contains(&i) {
                keep.push(*face);
            }
        }
        for (a, b) in horizon {
            keep.push(Face::new(points, [a, b, index]));
        }
        faces = keep;
    }

    Ok(Hull {
        points: points.to_vec(),
        triangles: faces.into_iter().map(|f| f.v).collect(),
        is_flat: false,
    })
}

fn farthest(points: &[DVec3], metric: impl Fn(DVec3) -> f64) -> usize {
    (0..points.len())
        .max_by(|&a, &b| metric(points[a]).total_cmp(&metric(points[b])))
        .unwrap_or(0)
}

/// 2D hull (monotone chain) of coplanar points, fan-triangulated with both windings.
///
/// `area_eps` bounds the turn cross product, which scales with length squared.
fn flat_hull(
    points: &[DVec3],
    origin: DVec3,
    normal: DVec3,
    area_eps: f64,
) -> Result<Hull, InputError> {
    let u = normal.any_orthonormal_vector();
    let v = normal.cross(u);
    let projected: Vec<DVec2> = points
        .iter()
        .map(|p| {
            let rel = *p - origin;
            DVec2::new(rel.dot(u), rel.dot(v))
        })
        .collect();

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        projected[a]
            .x
            .total_cmp(&projected[b].x)
            .then(projected[a].y.total_cmp(&projected[b].y))
    });

    let cross = |o: usize, a: usize, b: usize| {
        (projected[a] - projected[o]).perp_dot(projected[b] - projected[o])
    };

    let mut lower: Vec<usize> = Vec::new();
    for &i in &order {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2], lower[lower.len() - 1], i) <= area_eps
        {
            lower.pop();
        }
        lower.push(i);
    }
    let mut upper: Vec<usize> = Vec::new();
    for &i in order.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2], upper[upper.len() - 1], i) <= area_eps
        {
            upper.pop();
        }
        upper.push(i);
    }
    lower.pop();
    upper.pop();
    let ring: Vec<usize> = lower.into_iter().chain(upper).collect();
    if ring.len() < 3 {
        return Err(InputError::DegeneratePoints);
    }

    // Ring is counter-clockwise around `normal`
    let mut triangles = Vec::with_capacity((ring.len() - 2) * 2);
    for k in 1..ring.len() - 1 {
        triangles.push([ring[0], ring[k], ring[k + 1]]);
        triangles.push([ring[0], ring[k + 1], ring[k]]);
    }

    Ok(Hull {
        points: points.to_vec(),
        triangles,
        is_flat: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pts(raw: &[[f64; 3]]) -> Vec<DVec3> {
        raw.iter().map(|p| DVec3::from_array(*p)).collect()
    }

    /// Every directed edge must be matched by its reverse exactly once.
    fn assert_closed(hull: &Hull) {
        let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
        for [a, b, c] in &hull.triangles {
            for e in [(*a, *b), (*b, *c), (*c, *a)] {
                *edges.entry(e).or_default() += 1;
            }
        }
        for (&(a, b), &count) in &edges {
            assert_eq!(count, 1, "edge ({a},{b}) used {count} times");
            assert_eq!(edges.get(&(b, a)), Some(&1), "edge ({a},{b}) has no twin");
        }
    }

    fn assert_outward(hull: &Hull) {
        let c = hull.centroid();
        for [a, b, d] in &hull.triangles {
            let (pa, pb, pd) = (hull.points[*a], hull.points[*b], hull.points[*d]);
            let n = (pb - pa).cross(pd - pa);
            assert!(n.dot(pa - c) > 0.0, "face {:?} points inward", [a, b, d]);
        }
    }

    #[test]
    fn test_tetrahedron_example() {
        let hull = convex_hull(&pts(&[
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
        ]))
        .unwrap();
        assert!(!hull.is_flat);
        assert_eq!(hull.triangles.len(), 4);
        assert_eq!(hull.vertex_indices().len(), 4);
        assert!((hull.volume() - 1.0 / 6.0).abs() < 1e-12);
        assert_closed(&hull);
        assert_outward(&hull);
    }

    #[test]
    fn test_cube_with_interior_points() {
        let mut raw = Vec::new();
        for x in [0.0, 2.0] {
            for y in [0.0, 2.0] {
                for z in [0.0, 2.0] {
                    raw.push([x, y, z]);
                }
            }
        }
        raw.push([1.0, 1.0, 1.0]);
        raw.push([0.5, 1.5, 0.25]);
        let hull = convex_hull(&pts(&raw)).unwrap();
        assert!((hull.volume() - 8.0).abs() < 1e-9);
        let used = hull.vertex_indices();
        assert!(!used.contains(&8));
        assert!(!used.contains(&9));
        assert_closed(&hull);
        assert_outward(&hull);
    }

    #[test]
    fn test_octahedron() {
        let hull = convex_hull(&pts(&[
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ]))
        .unwrap();
        assert_eq!(hull.triangles.len(), 8);
        assert!((hull.volume() - 4.0 / 3.0).abs() < 1e-9);
        assert_closed(&hull);
        assert_outward(&hull);
    }

    #[test]
    fn test_three_points_make_flat_triangle() {
        let hull = convex_hull(&pts(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])).unwrap();
        assert!(hull.is_flat);
        // one triangle per side
        assert_eq!(hull.triangles.len(), 2);
        assert_eq!(hull.volume(), 0.0);
    }

    #[test]
    fn test_coplanar_square_with_center() {
        let hull = convex_hull(&pts(&[
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
            [0.5, 0.5, 1.0],
        ]))
        .unwrap();
        assert!(hull.is_flat);
        assert_eq!(hull.triangles.len(), 4);
        assert!(!hull.vertex_indices().contains(&4));
    }

    #[test]
    fn test_too_few_points() {
        let err = convex_hull(&pts(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]])).unwrap_err();
        assert_eq!(err, InputError::TooFewPoints(2));
    }

    #[test]
    fn test_collinear_rejected() {
        let err = convex_hull(&pts(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0]]))
            .unwrap_err();
        assert_eq!(err, InputError::DegeneratePoints);
    }

    #[test]
    fn test_coincident_rejected() {
        let err = convex_hull(&pts(&[[1.0, 2.0, 3.0]; 5])).unwrap_err();
        assert_eq!(err, InputError::DegeneratePoints);
    }

    #[test]
    fn test_flat_hull_at_any_scale() {
        for scale in [1e-5, 1e-3, 1.0, 1e3, 1e6] {
            let hull = convex_hull(&[
                DVec3::ZERO,
                DVec3::new(scale, 0.0, 0.0),
                DVec3::new(0.0, scale, 0.0),
            ])
            .unwrap();
            assert!(hull.is_flat, "scale {scale}");
            assert_eq!(hull.triangles.len(), 2, "scale {scale}");
        }
    }

    #[test]
    fn test_flat_square_at_any_scale() {
        for scale in [1e-5, 1e6] {
            let points = pts(&[
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 1.0],
                [1.0, 1.0, 1.0],
                [0.0, 1.0, 1.0],
                [0.5, 0.5, 1.0],
            ]);
            let points: Vec<DVec3> = points.iter().map(|p| *p * scale).collect();
            let hull = convex_hull(&points).unwrap();
            assert_eq!(hull.triangles.len(), 4, "scale {scale}");
            assert_eq!(hull.vertex_indices(), vec![0, 1, 2, 3], "scale {scale}");
        }
    }

    #[test]
    fn test_solid_hull_at_any_scale() {
        for scale in [1e-4, 1e-2, 1e3, 1e6] {
            let mut raw = Vec::new();
            for x in [0.0, 2.0] {
                for y in [0.0, 2.0] {
                    for z in [0.0, 2.0] {
                        raw.push([x, y, z]);
                    }
                }
            }
            raw.push([1.0, 1.0, 1.0]);
            let points: Vec<DVec3> = raw.iter().map(|p| DVec3::from_array(*p) * scale).collect();
            let hull = convex_hull(&points).unwrap();
            let expected = 8.0 * scale.powi(3);
            assert!((hull.volume() - expected).abs() < expected * 1e-9, "scale {scale}");
            assert!(!hull.vertex_indices().contains(&8), "scale {scale}");
            assert_closed(&hull);
            assert_outward(&hull);
        }
    }

    #[test]
    fn test_points_below_tolerance_rejected() {
        let err = convex_hull(&pts(&[[0.0, 0.0, 0.0], [1e-12, 0.0, 0.0], [0.0, 1e-12, 0.0]]))
            .unwrap_err();
        assert_eq!(err, InputError::DegeneratePoints);
    }

    #[test]
    fn test_duplicate_points_tolerated() {
        let hull = convex_hull(&pts(&[
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
        ]))
        .unwrap();
        assert!((hull.volume() - 1.0 / 6.0).abs() < 1e-12);
        assert_closed(&hull);
    }
}
