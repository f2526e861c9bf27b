/// Spincube Core Library - Shared geometry and animation logic
///
/// This library provides the stateless core functionality for the terminal
/// cube viewer: face geometry, texture decoding and sampling, camera
/// projection, and the animation state machine driven by tick and key events.

pub mod anim;
pub mod geometry;
pub mod projection;
pub mod scene;
pub mod texture;
pub mod transform;

// Re-export commonly used types
pub use anim::{AnimState, Effect, InputEvent, TranslationKey};
pub use geometry::{cube_faces, FaceDescriptor, Mesh, Triangle, Vertex};
pub use projection::Camera;
pub use scene::{Actor, Scene, BACKGROUND};
pub use texture::Texture;
pub use transform::{RotationState, Transform};
