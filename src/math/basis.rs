use glam::Vec3;

/// Orthonormal camera frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// Build the front/right/up frame from yaw and pitch (degrees).
///
/// `right` and `up` always come from cross products against `world_up`, never
/// from rotating the previous frame. A `world_up` parallel to `front` yields a
/// zero cross product; glam's `normalize` then returns non-finite components.
pub fn derive_basis(yaw: f32, pitch: f32, world_up: Vec3) -> Basis {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());

    let front = Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize();
    let right = front.cross(world_up).normalize();
    let up = right.cross(front).normalize();

    Basis { front, right, up }
}

impl Basis {
    /// True when every axis is a finite unit vector
    pub fn is_finite(&self) -> bool {
        self.front.is_finite() && self.right.is_finite() && self.up.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_default_orientation_looks_down_negative_z() {
        let basis = derive_basis(-90.0, 0.0, Vec3::Y);
        assert!(basis.front.abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(basis.right.abs_diff_eq(Vec3::X, EPS));
        assert!(basis.up.abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn test_zero_yaw_looks_down_positive_x() {
        let basis = derive_basis(0.0, 0.0, Vec3::Y);
        assert!(basis.front.abs_diff_eq(Vec3::X, EPS));
        assert!(basis.right.abs_diff_eq(Vec3::Z, EPS));
    }

    #[test]
    fn test_pitch_tilts_front_and_up() {
        let basis = derive_basis(-90.0, 45.0, Vec3::Y);
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!(basis.front.abs_diff_eq(Vec3::new(0.0, h, -h), EPS));
        assert!(basis.up.abs_diff_eq(Vec3::new(0.0, h, h), EPS));
        // right stays on the horizon
        assert!(basis.right.y.abs() < EPS);
    }

    #[test]
    fn test_orthonormal_across_angles() {
        for yaw in (-360..=360).step_by(15) {
            for pitch in (-89..=89).step_by(8) {
                let b = derive_basis(yaw as f32, pitch as f32, Vec3::Y);
                assert!((b.front.length() - 1.0).abs() < EPS);
                assert!((b.right.length() - 1.0).abs() < EPS);
                assert!((b.up.length() - 1.0).abs() < EPS);
                assert!(b.front.dot(b.right).abs() < EPS);
                assert!(b.front.dot(b.up).abs() < EPS);
                assert!(b.right.dot(b.up).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_parallel_world_up_is_degenerate() {
        let basis = derive_basis(0.0, 0.0, Vec3::X);
        assert!(!basis.is_finite());
    }
}
