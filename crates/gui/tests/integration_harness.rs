//! Integration tests for TestHarness.
//!
//! Tests the headless harness API for programmatic scene manipulation.

use glam::Vec3;
use orthoview_lib::geometry::ProjectionCamera;
use orthoview_lib::harness::TestHarness;
use orthoview_lib::state::CameraRequest;
use shared::{Axis, ShapeKind};

fn assert_vec_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_startup_scene() {
    let mut h = TestHarness::startup();
    assert!(h.has_shape());
    assert_eq!(h.plane_coefficients(), Some([0.0, 0.0, 1.0, 0.0]));

    let v = h.validate_shape_mesh().unwrap();
    assert!(v.validate_all().is_empty());
    assert!(v.assert_dimensions_approx([2.0, 2.0, 2.0], 1e-3));

    let projection = *h.projection();
    assert_vec_near(projection.target, Vec3::ZERO);
    assert_vec_near(projection.position, Vec3::new(0.0, 0.0, 10.0));
    assert!((projection.extent - 2.2).abs() < 1e-3);

    assert_eq!(h.take_camera_request(), Some(CameraRequest::Focus(Vec3::ZERO)));
    assert_eq!(h.take_camera_request(), None);
}

#[test]
fn test_each_primitive_replaces_shape() {
    let mut h = TestHarness::new();
    for &kind in ShapeKind::all() {
        h.create_primitive(kind);
        let v = h.validate_shape_mesh().unwrap();
        assert!(v.validate_all().is_empty(), "{kind:?}");
    }
    // last one wins
    let v = h.validate_shape_mesh().unwrap();
    assert!(v.assert_dimensions_approx([2.0, 2.0, 0.0], 1e-3));
}

#[test]
fn test_projection_follows_plane_normal() {
    let mut h = TestHarness::new();
    h.create_cube();
    h.set_plane([1.0, 0.0, 0.0, -2.0]).unwrap();

    let projection = *h.projection();
    assert_vec_near(projection.target, Vec3::ONE);
    assert_vec_near(projection.position, Vec3::new(11.0, 1.0, 1.0));
    assert!((projection.extent - 2.2).abs() < 1e-3);

    // orbit camera is asked to look at the plane's closest point to the origin
    assert_eq!(
        h.take_camera_request(),
        Some(CameraRequest::Focus(Vec3::new(2.0, 0.0, 0.0)))
    );
}

#[test]
fn test_projection_tracks_translation() {
    let mut h = TestHarness::startup();
    h.translate_shape([3.0, -1.0, 0.5]).unwrap();
    assert_vec_near(h.projection().target, Vec3::new(3.0, -1.0, 0.5));
    assert_vec_near(h.projection().position, Vec3::new(3.0, -1.0, 10.5));
}

#[test]
fn test_rotated_cube_widens_projection() {
    let mut h = TestHarness::new();
    h.create_cube();
    h.set_plane([0.0, 0.0, 1.0, 0.0]).unwrap();
    let before = h.projection().extent;

    h.rotate_shape(Axis::Z, 45.0).unwrap();
    let after = h.projection().extent;
    assert!(after > before + 0.5, "before {before}, after {after}");
}

#[test]
fn test_operations_without_targets_fail() {
    let mut h = TestHarness::new();
    assert!(h.rotate_shape(Axis::X, 90.0).is_err());
    assert!(h.translate_shape([1.0, 0.0, 0.0]).is_err());
    assert!(h.rotate_plane(Axis::X, 90.0).is_err());
    assert_eq!(h.version(), 0);
}

#[test]
fn test_rotate_plane_keeps_distance() {
    let mut h = TestHarness::new();
    h.set_plane([0.0, 0.0, 1.0, -3.0]).unwrap();
    h.rotate_plane(Axis::Y, 90.0).unwrap();

    let [a, b, c, d] = h.plane_coefficients().unwrap();
    assert!((a - 1.0).abs() < 1e-9);
    assert!(b.abs() < 1e-9);
    assert!(c.abs() < 1e-9);
    assert!((d + 3.0).abs() < 1e-9);
}

#[test]
fn test_custom_rejection_keeps_shape() {
    let mut h = TestHarness::new();
    h.create_sphere();
    let version = h.version();
    assert!(h.create_custom("[0,0,0], [1,0,0]").is_err());
    assert!(h.create_custom("not a list").is_err());
    assert!(h.has_shape());
    assert_eq!(h.version(), version);
}

#[test]
fn test_scene_json_round_trip() {
    let mut h = TestHarness::new();
    h.create_custom("[0,0,0], [2,0,0], [0,2,0], [0,0,2]").unwrap();
    h.translate_shape([1.0, -2.0, 0.5]).unwrap();
    h.set_plane([0.0, 2.0, 0.0, 4.0]).unwrap();
    let json = h.export_scene_json();

    let mut other = TestHarness::new();
    other.load_scene_json(&json).unwrap();
    assert_eq!(other.scene.description(), h.scene.description());
    assert_eq!(other.plane_coefficients(), Some([0.0, 1.0, 0.0, 2.0]));
    assert_eq!(other.projection(), h.projection());
}

#[test]
fn test_scene_file_round_trip() {
    let mut h = TestHarness::startup();
    h.translate_shape([0.0, 0.0, 4.0]).unwrap();

    let path = std::env::temp_dir().join(format!("orthoview-test-{}.json", std::process::id()));
    h.scene.save_to_path(&path).unwrap();

    let mut other = TestHarness::new();
    other.scene.load_from_path(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(other.scene.description(), h.scene.description());
}

#[test]
fn test_missing_scene_file_reports_path() {
    let mut h = TestHarness::new();
    let err = h
        .scene
        .load_from_path(std::path::Path::new("/nonexistent/scene.json"))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/scene.json"));
}

#[test]
fn test_clear_resets_everything() {
    let mut h = TestHarness::startup();
    h.take_camera_request();
    h.clear();
    assert!(!h.has_shape());
    assert!(h.plane_coefficients().is_none());
    assert_eq!(h.take_camera_request(), Some(CameraRequest::Reset));
    assert_eq!(*h.projection(), ProjectionCamera::default());
}

#[test]
fn test_transforms_keep_geometry_version() {
    let mut h = TestHarness::startup();
    let geometry = h.scene.geometry_version();
    for _ in 0..10 {
        h.translate_shape([0.1, 0.0, 0.0]).unwrap();
    }
    h.rotate_shape(Axis::X, 15.0).unwrap();
    assert_eq!(h.scene.geometry_version(), geometry);

    h.create_cube();
    assert_ne!(h.scene.geometry_version(), geometry);
}
