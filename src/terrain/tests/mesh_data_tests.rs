use crate::terrain::{
    error::TerrainError,
    heightmap::{HeightCurve, Keyframe, KeyframeCurve},
    mesh::MeshData,
};
use approx::assert_relative_eq;
use nalgebra::{Vector2, Vector3};
use test_case::test_case;

#[test]
fn test_mesh_data_is_presized() {
    let mesh = MeshData::new(4, 3);
    assert_eq!(mesh.vertices().len(), 12);
    assert_eq!(mesh.uvs().len(), 12);
    assert_eq!(mesh.indices().len(), 3 * 2 * 6);
    assert_eq!(mesh.written_indices(), 0);
}

#[test]
fn test_single_quad() {
    let mut mesh = MeshData::new(2, 2);
    mesh.set_vertex(0, Vector3::new(-0.5, 0.0, 0.5));
    mesh.set_vertex(1, Vector3::new(0.5, 0.0, 0.5));
    mesh.set_vertex(2, Vector3::new(-0.5, 0.0, -0.5));
    mesh.set_vertex(3, Vector3::new(0.5, 0.0, -0.5));
    mesh.set_uv(3, Vector2::new(0.5, 0.5));
    mesh.add_triangle(0, 3, 2);
    mesh.add_triangle(3, 0, 1);
    assert_eq!(mesh.written_indices(), 6);

    let mesh = mesh.finalize();
    assert_eq!(mesh.indices(), &[0, 3, 2, 3, 0, 1]);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.uvs()[3], Vector2::new(0.5, 0.5));
    for n in mesh.normals() {
        assert_relative_eq!(n.y, 1.0, epsilon = 1e-6);
    }
}

#[test]
fn test_degenerate_faces_fall_back_to_up() {
    // every vertex at the origin, so no face has an area
    let mut mesh = MeshData::new(2, 2);
    mesh.add_triangle(0, 3, 2);
    mesh.add_triangle(3, 0, 1);

    let mesh = mesh.finalize();
    for n in mesh.normals() {
        assert_eq!(*n, Vector3::new(0.0, 1.0, 0.0));
    }
}

#[test_case(-1.0, 0.0 ; "clamped below")]
#[test_case(0.0, 0.0 ; "first key")]
#[test_case(0.25, 0.05 ; "first segment")]
#[test_case(0.5, 0.1 ; "middle key")]
#[test_case(0.75, 0.55 ; "second segment")]
#[test_case(2.0, 1.0 ; "clamped above")]
fn test_keyframe_curve(t: f32, expected: f32) {
    let curve = KeyframeCurve::new(vec![
        Keyframe::new(0.0, 0.0),
        Keyframe::new(0.5, 0.1),
        Keyframe::new(1.0, 1.0),
    ]).unwrap();

    assert_relative_eq!(curve.evaluate(t), expected, epsilon = 1e-5);
}

#[test]
fn test_default_curve_is_identity() {
    let curve = KeyframeCurve::default();
    for t in [0.0, 0.2, 0.5, 0.9, 1.0] {
        assert_relative_eq!(curve.evaluate(t), t);
    }
}

#[test]
fn test_invalid_curves_are_rejected() {
    assert!(matches!(KeyframeCurve::new(Vec::new()), Err(TerrainError::InvalidCurve(_))));
    assert!(matches!(
        KeyframeCurve::new(vec![Keyframe::new(0.5, 0.0), Keyframe::new(0.5, 1.0)]),
        Err(TerrainError::InvalidCurve(_))
    ));
}

#[test_case(f32::NAN, 0.0 ; "nan time")]
#[test_case(f32::INFINITY, 0.0 ; "infinite time")]
#[test_case(0.5, f32::NAN ; "nan value")]
fn test_non_finite_keyframes_are_rejected(time: f32, value: f32) {
    let result = KeyframeCurve::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(time, value)]);
    assert!(matches!(result, Err(TerrainError::InvalidCurve(_))));
}

#[test]
fn test_nan_sample_takes_first_key() {
    let curve = KeyframeCurve::new(vec![
        Keyframe::new(0.0, 0.2),
        Keyframe::new(1.0, 1.0),
    ]).unwrap();

    assert_eq!(curve.evaluate(f32::NAN), 0.2);
}

#[test]
fn test_unchecked_curve_does_not_panic() {
    // deserializing the curve on its own skips validation
    let curve: KeyframeCurve = toml::from_str(
        "keys = [{ time = nan, value = 0.0 }, { time = 1.0, value = 1.0 }]",
    ).unwrap();
    assert!(curve.validate().is_err());
    let _ = curve.evaluate(0.5);

    let single: KeyframeCurve = toml::from_str("keys = [{ time = nan, value = 0.3 }]").unwrap();
    assert_eq!(single.evaluate(0.5), 0.3);
}
