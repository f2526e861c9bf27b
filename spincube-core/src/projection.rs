/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

/// Camera configuration for rendering the scene
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// A fixed diagonal view of the origin with +Z up
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(2.0, 2.0, 2.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 0.0, 1.0),
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            aspect: width as f32 / height as f32,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Slide the camera along its current view direction until a bounding
    /// sphere of `radius` around `center` fills the vertical field of view.
    /// Performed once at startup.
    pub fn auto_frame(&mut self, center: Point3<f32>, radius: f32) {
        let direction = (self.position - self.target).normalize();
        let distance = radius / (self.fov / 2.0).sin();

        self.target = center;
        self.position = center + direction * distance;
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the perspective projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Project a model-space point to screen coordinates.
    ///
    /// Returns the screen position plus a depth value for the depth test, or
    /// `None` for a degenerate homogeneous coordinate. Points beyond the
    /// screen edges are still returned; clipping happens per cell during
    /// rasterization.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let view = self.view_matrix();
        let projection = self.projection_matrix();
        let mvp = projection * view * model_matrix;

        let clip = mvp * point.to_homogeneous();
        if clip.w.abs() < 1e-6 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.z / clip.w;

        // Convert to screen space
        let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

        Some((screen_x, screen_y, depth))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
