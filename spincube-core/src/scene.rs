/// Scene assembly: textured cube-face actors in front of a fixed camera
use log::info;
use nalgebra::Point3;
use std::path::Path;

use crate::geometry::{cube_faces, Mesh};
use crate::projection::Camera;
use crate::texture::Texture;

/// Background fill, the dark blue of the empty scene
pub const BACKGROUND: [u8; 3] = [25, 51, 102];

/// A renderable entity pairing one face mesh with its current texture
pub struct Actor {
    pub mesh: Mesh,
    pub texture: Texture,
}

impl Actor {
    pub fn new(mesh: Mesh, texture: Texture) -> Self {
        Self { mesh, texture }
    }

    /// Replace the texture; the mesh is fixed for the actor's lifetime
    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = texture;
    }
}

/// The renderable scene: up to six cube-face actors and the camera
pub struct Scene {
    pub actors: Vec<Actor>,
    pub camera: Camera,
}

impl Scene {
    /// Build the six cube faces, each textured with `image`.
    ///
    /// A face whose texture cannot be loaded gets no actor; the scene may
    /// end up empty. The camera is framed once around the assembled cube.
    pub fn build(image: &Path, width: u32, height: u32) -> Scene {
        let mut actors = Vec::new();
        for face in cube_faces() {
            // Each face loads and owns its texture independently.
            if let Some(texture) = Texture::load(image) {
                actors.push(Actor::new(face.mesh(), texture));
            }
        }

        let mut camera = Camera::new(width, height);
        // Bounding sphere of the unit cube: half the body diagonal.
        camera.auto_frame(Point3::origin(), 3f32.sqrt() / 2.0);

        Scene { actors, camera }
    }

    /// Re-texture every actor with `image`, loading independently per face.
    /// An actor whose reload fails keeps its previous texture.
    pub fn cycle_textures(&mut self, image: &Path) {
        for actor in &mut self.actors {
            if let Some(texture) = Texture::load(image) {
                actor.set_texture(texture);
            }
        }
        info!("updated cube textures to image: {}", image.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FaceDescriptor;

    fn solid_texture(level: u8) -> Texture {
        Texture::from_pixels(1, 1, vec![level, level, level])
    }

    fn one_face_mesh() -> Mesh {
        FaceDescriptor::new(
            Point3::new(-0.5, -0.5, -0.5),
            Point3::new(0.5, -0.5, -0.5),
            Point3::new(-0.5, 0.5, -0.5),
        )
        .mesh()
    }

    #[test]
    fn test_missing_image_builds_empty_scene() {
        let scene = Scene::build(Path::new("no-such-image.jpg"), 800, 600);
        assert!(scene.actors.is_empty());
    }

    #[test]
    fn test_failed_cycle_keeps_previous_texture() {
        let mut scene = Scene::build(Path::new("no-such-image.jpg"), 800, 600);
        scene
            .actors
            .push(Actor::new(one_face_mesh(), solid_texture(42)));

        scene.cycle_textures(Path::new("still-missing.jpg"));

        assert_eq!(scene.actors[0].texture.sample(0.0, 0.0), [42, 42, 42]);
    }

    #[test]
    fn test_set_texture_replaces_without_touching_mesh() {
        let mut actor = Actor::new(one_face_mesh(), solid_texture(10));
        let triangles_before = actor.mesh.triangles.len();

        actor.set_texture(solid_texture(200));

        assert_eq!(actor.texture.sample(0.5, 0.5), [200, 200, 200]);
        assert_eq!(actor.mesh.triangles.len(), triangles_before);
    }
}
