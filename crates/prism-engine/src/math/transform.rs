use cgmath::{InnerSpace, Matrix4, Vector3};

pub type Mat4 = Matrix4<f32>;

/// Non-uniform scale.
#[inline]
pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Matrix4::from_nonuniform_scale(x, y, z)
}

#[inline]
pub fn scale_by(factors: Vector3<f32>) -> Mat4 {
    scale(factors.x, factors.y, factors.z)
}

#[inline]
pub fn scale_uniform(factor: f32) -> Mat4 {
    Matrix4::from_scale(factor)
}

/// Translation; the offset lands in the fourth column.
#[inline]
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    translate_by(Vector3::new(x, y, z))
}

#[inline]
pub fn translate_by(offset: Vector3<f32>) -> Mat4 {
    Matrix4::from_translation(offset)
}

/// Rotation of `angle` radians about `axis` (Rodrigues' formula).
///
/// The axis is normalized here; a zero axis yields NaNs. A positive angle
/// about `+z` takes `+x` to `(cos a, -sin a)`, so the demo triangle spins
/// clockwise on screen.
pub fn rotate(angle: f32, axis: Vector3<f32>) -> Mat4 {
    let (s, c) = angle.sin_cos();
    let a = axis.normalize();
    let t = a * (1.0 - c);

    // Matrix4::new takes columns in order.
    Matrix4::new(
        c + t.x * a.x,
        t.y * a.x - s * a.z,
        t.z * a.x + s * a.y,
        0.0,
        t.x * a.y + s * a.z,
        c + t.y * a.y,
        t.z * a.y - s * a.x,
        0.0,
        t.x * a.z - s * a.y,
        t.y * a.z + s * a.x,
        c + t.z * a.z,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    )
}

/// Column-major array form, ready for `bytemuck` upload.
#[inline]
pub fn to_cols_array(m: Mat4) -> [[f32; 4]; 4] {
    m.into()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use cgmath::{Matrix, Matrix3, SquareMatrix, Vector4};

    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        let (a, b) = (to_cols_array(a), to_cols_array(b));
        for col in 0..4 {
            for row in 0..4 {
                assert!(
                    (a[col][row] - b[col][row]).abs() < EPS,
                    "mismatch at column {col}, row {row}: {} vs {}",
                    a[col][row],
                    b[col][row]
                );
            }
        }
    }

    fn upper_left(m: Mat4) -> Matrix3<f32> {
        Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate())
    }

    fn sample_axes() -> [Vector3<f32>; 5] {
        [
            Vector3::unit_x(),
            Vector3::unit_y(),
            Vector3::unit_z(),
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.3, 0.0, 7.5),
        ]
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_zero_is_identity() {
        for axis in sample_axes() {
            assert_mat_eq(rotate(0.0, axis), Mat4::identity());
        }
    }

    #[test]
    fn rotate_is_proper_rotation() {
        for axis in sample_axes() {
            for angle in [0.1, 1.0, FRAC_PI_2, PI, 2.0735, 5.5, -3.0, 40.0] {
                let r = upper_left(rotate(angle, axis));
                assert!((r.determinant() - 1.0).abs() < EPS, "det != 1 for {angle} about {axis:?}");

                let should_be_identity = r * r.transpose();
                for col in 0..3 {
                    for row in 0..3 {
                        let expected = if col == row { 1.0 } else { 0.0 };
                        assert!((should_be_identity[col][row] - expected).abs() < EPS);
                    }
                }
            }
        }
    }

    #[test]
    fn rotate_keeps_homogeneous_row_and_column() {
        let m = rotate(1.3, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(m.w, Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!((m.x.w, m.y.w, m.z.w), (0.0, 0.0, 0.0));
    }

    #[test]
    fn rotate_quarter_turn_about_z_is_clockwise() {
        let p = rotate(FRAC_PI_2, Vector3::unit_z()) * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!(p.x.abs() < EPS);
        assert!((p.y + 1.0).abs() < EPS);
        assert!(p.z.abs() < EPS);
    }

    #[test]
    fn rotate_normalizes_axis() {
        assert_mat_eq(
            rotate(0.7, Vector3::new(0.0, 0.0, 5.0)),
            rotate(0.7, Vector3::unit_z()),
        );
    }

    #[test]
    fn rotate_full_turn_returns_to_identity() {
        assert_mat_eq(rotate(TAU, Vector3::new(2.0, -1.0, 0.5)), Mat4::identity());
    }

    #[test]
    fn rotate_leaves_axis_fixed() {
        let axis = Vector3::new(1.0, 2.0, 3.0);
        let p = rotate(2.0, axis) * axis.extend(0.0);
        assert!((p.truncate() - axis).magnitude() < EPS);
    }

    // ── scale / translate ─────────────────────────────────────────────────

    #[test]
    fn scale_puts_factors_on_diagonal() {
        let m = to_cols_array(scale(2.0, 3.0, 4.0));
        assert_eq!((m[0][0], m[1][1], m[2][2], m[3][3]), (2.0, 3.0, 4.0, 1.0));
        assert_mat_eq(scale_by(Vector3::new(2.0, 3.0, 4.0)), scale(2.0, 3.0, 4.0));
        assert_mat_eq(scale_uniform(0.5), scale(0.5, 0.5, 0.5));
    }

    #[test]
    fn translate_offsets_points_but_not_directions() {
        let m = translate(1.0, -2.0, 3.0);
        assert_eq!(m * Vector4::new(0.0, 0.0, 0.0, 1.0), Vector4::new(1.0, -2.0, 3.0, 1.0));
        assert_eq!(m * Vector4::new(1.0, 0.0, 0.0, 0.0), Vector4::new(1.0, 0.0, 0.0, 0.0));
        assert_mat_eq(translate_by(Vector3::new(1.0, -2.0, 3.0)), m);
    }

    #[test]
    fn translation_lives_in_fourth_column() {
        let m = to_cols_array(translate(5.0, 6.0, 7.0));
        assert_eq!(m[3], [5.0, 6.0, 7.0, 1.0]);
    }
}
