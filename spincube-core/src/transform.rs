/// Model transform construction and rotation state
use nalgebra::{Matrix4, Vector3};

/// Rotation angles around the three axes, in whole degrees (0..360)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    pub x: u16,
    pub y: u16,
    pub z: u16,
}

impl RotationState {
    pub fn new(x: u16, y: u16, z: u16) -> Self {
        Self {
            x: x % 360,
            y: y % 360,
            z: z % 360,
        }
    }

    pub fn zero() -> Self {
        Self { x: 0, y: 0, z: 0 }
    }

    /// Advance every angle by one degree, wrapping at 360.
    ///
    /// Returns true when the X angle wraps to exactly 0, which happens once
    /// per full revolution and drives the texture cycle.
    pub fn step(&mut self) -> bool {
        self.x = (self.x + 1) % 360;
        self.y = (self.y + 1) % 360;
        self.z = (self.z + 1) % 360;
        self.x == 0
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for the per-tick model matrix
pub struct Transform;

impl Transform {
    /// Build the model matrix from identity: translation first, then
    /// rotation about X, then Y, then Z. The composition order is fixed;
    /// the three rotations do not commute.
    pub fn model_matrix(translation: &Vector3<f32>, rotation: &RotationState) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new((rotation.x as f32).to_radians(), 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, (rotation.y as f32).to_radians(), 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, (rotation.z as f32).to_radians()));

        Matrix4::new_translation(translation) * rx * ry * rz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_step_increments_each_angle() {
        let mut state = RotationState::new(10, 20, 30);
        state.step();
        assert_eq!(state, RotationState::new(11, 21, 31));
    }

    #[test]
    fn test_step_wraps_at_360() {
        let mut state = RotationState::new(359, 100, 200);
        let wrapped = state.step();
        assert!(wrapped);
        assert_eq!(state.x, 0);
        assert_eq!(state.y, 101);
        assert_eq!(state.z, 201);
    }

    #[test]
    fn test_wrap_reported_once_per_revolution() {
        let mut state = RotationState::zero();
        let mut wraps = 0;
        for tick in 1..=720 {
            if state.step() {
                wraps += 1;
                assert_eq!(tick % 360, 0);
            }
        }
        assert_eq!(wraps, 2);
    }

    #[test]
    fn test_zero_rotation_is_pure_translation() {
        let matrix = Transform::model_matrix(&Vector3::new(1.0, 2.0, 3.0), &RotationState::zero());
        let moved = matrix.transform_point(&Point3::new(0.0, 0.0, 0.0));
        assert!((moved - Point3::new(1.0, 2.0, 3.0)).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_applies_before_translation() {
        // With the fixed order, the point is rotated about the origin and the
        // translation is added afterwards in world space.
        let translation = Vector3::new(0.0, 0.5, 0.0);
        let rotation = RotationState::new(90, 0, 0);
        let matrix = Transform::model_matrix(&translation, &rotation);

        let moved = matrix.transform_point(&Point3::new(0.0, 1.0, 0.0));
        assert!((moved - Point3::new(0.0, 0.5, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn test_axis_order_is_x_then_y_then_z() {
        let rotation = RotationState::new(90, 90, 0);
        let matrix = Transform::model_matrix(&Vector3::zeros(), &rotation);

        // The fixed composition maps +X to +Y; composing the two active
        // rotations the other way round maps it to -Z instead.
        let moved = matrix.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((moved - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-5);
    }
}
