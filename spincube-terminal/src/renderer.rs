/// Cell rasterizer for textured terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix4, Point2, Vector3};
use std::io::Write;

use spincube_core::{Actor, Camera, Texture, Triangle, BACKGROUND};

/// Fixed light direction for the lambertian shade applied on top of the
/// sampled texel
const LIGHT_DIR: [f32; 3] = [0.0, 0.0, 1.0];

/// Floor for the shade so back-lit faces keep a readable texture
const AMBIENT: f32 = 0.3;

/// Rasterizes textured triangles into a grid of colored terminal cells
pub struct CellRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    color_buffer: Vec<[u8; 3]>,
}

impl CellRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            color_buffer: vec![BACKGROUND; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.color_buffer[i] = BACKGROUND;
        }
    }

    pub fn render_actor(&mut self, actor: &Actor, model_matrix: &Matrix4<f32>, camera: &Camera) {
        for triangle in &actor.mesh.triangles {
            self.render_triangle(triangle, &actor.texture, model_matrix, camera);
        }
    }

    fn render_triangle(
        &mut self,
        triangle: &Triangle,
        texture: &Texture,
        model_matrix: &Matrix4<f32>,
        camera: &Camera,
    ) {
        // Project vertices to screen space
        let mut screen = [(0.0f32, 0.0f32, 0.0f32); 3];
        let mut uvs = [Point2::new(0.0f32, 0.0f32); 3];
        for (i, vertex) in triangle.vertices.iter().enumerate() {
            match camera.project_to_screen(
                &vertex.position,
                model_matrix,
                self.width as u32,
                self.height as u32,
            ) {
                Some(coords) => {
                    screen[i] = coords;
                    uvs[i] = vertex.uv;
                }
                None => return, // degenerate projection
            }
        }

        // Shade with the rotated face normal; both winding orders are lit so
        // the cube interior never renders black.
        let light = Vector3::new(LIGHT_DIR[0], LIGHT_DIR[1], LIGHT_DIR[2]);
        let normal = model_matrix.transform_vector(&triangle.calculate_normal());
        let brightness = normal.dot(&light).abs().max(AMBIENT);

        self.rasterize_triangle(&screen, &uvs, texture, brightness);
    }

    fn rasterize_triangle(
        &mut self,
        coords: &[(f32, f32, f32); 3],
        uvs: &[Point2<f32>; 3],
        texture: &Texture,
        brightness: f32,
    ) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box, clipped to the cell grid
        let min_x = (v0.0.min(v1.0).min(v2.0).floor() as i32).max(0);
        let max_x = (v0.0.max(v1.0).max(v2.0).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v0.1.min(v1.1).min(v2.1).floor() as i32).max(0);
        let max_y = (v0.1.max(v1.1).max(v2.1).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                if let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;

                            // Interpolate texture coordinates and sample
                            let u = w0 * uvs[0].x + w1 * uvs[1].x + w2 * uvs[2].x;
                            let v = w0 * uvs[0].y + w1 * uvs[1].y + w2 * uvs[2].y;
                            let [r, g, b] = texture.sample(u, v);

                            self.color_buffer[idx] = [
                                (r as f32 * brightness) as u8,
                                (g as f32 * brightness) as u8,
                                (b as f32 * brightness) as u8,
                            ];
                        }
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let [r, g, b] = self.color_buffer[y * self.width + x];
                writer.queue(SetBackgroundColor(Color::Rgb { r, g, b }))?;
                writer.queue(Print(' '))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
