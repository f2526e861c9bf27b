/// Animation state and the event-driven transitions that advance it
use log::info;
use nalgebra::Vector3;

use crate::transform::RotationState;

/// How far one key press nudges the translation, per axis
const NUDGE: f32 = 0.1;

/// Keys that nudge the cube's translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationKey {
    Left,
    Right,
    Up,
    Down,
    Forward,
    Backward,
}

/// A tagged input consumed by the animation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// One animation timer expiry
    Tick,
    /// A key press affecting translation
    Key(TranslationKey),
}

/// What the caller must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Rotation advanced; redraw with the rebuilt transform
    Redraw,
    /// A full X revolution completed; re-texture every face with the image
    /// at `image_index`, then redraw
    CycleTextures { image_index: usize },
    /// Translation changed; visible on the next tick's transform rebuild
    TranslationChanged,
}

/// Animation state: rotation angles, translation vector, and the index into
/// the image cycle list. Created once at startup and mutated only through
/// [`AnimState::apply`].
#[derive(Debug, Clone)]
pub struct AnimState {
    pub rotation: RotationState,
    pub translation: Vector3<f32>,
    pub image_index: usize,
    image_count: usize,
}

impl AnimState {
    /// `image_count` is the length of the image cycle list; must be non-zero
    pub fn new(image_count: usize) -> Self {
        debug_assert!(image_count > 0);
        Self {
            rotation: RotationState::zero(),
            translation: Vector3::zeros(),
            image_index: 0,
            image_count,
        }
    }

    /// Consume one event, advance the state, and report the side effect the
    /// caller must carry out.
    pub fn apply(&mut self, event: InputEvent) -> Effect {
        match event {
            InputEvent::Tick => {
                if self.rotation.step() {
                    self.image_index = (self.image_index + 1) % self.image_count;
                    Effect::CycleTextures {
                        image_index: self.image_index,
                    }
                } else {
                    Effect::Redraw
                }
            }
            InputEvent::Key(key) => {
                match key {
                    TranslationKey::Left => self.translation.x -= NUDGE,
                    TranslationKey::Right => self.translation.x += NUDGE,
                    TranslationKey::Up => self.translation.y += NUDGE,
                    TranslationKey::Down => self.translation.y -= NUDGE,
                    TranslationKey::Forward => self.translation.z += NUDGE,
                    TranslationKey::Backward => self.translation.z -= NUDGE,
                }
                info!(
                    "translation updated to: [{:.1}, {:.1}, {:.1}]",
                    self.translation.x, self.translation.y, self.translation.z
                );
                Effect::TranslationChanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_every_angle() {
        let mut state = AnimState::new(2);
        assert_eq!(state.apply(InputEvent::Tick), Effect::Redraw);
        assert_eq!(state.rotation, RotationState::new(1, 1, 1));
    }

    #[test]
    fn test_cycle_fires_every_360_ticks() {
        let mut state = AnimState::new(2);
        let mut cycles = Vec::new();
        for tick in 1..=720 {
            if let Effect::CycleTextures { .. } = state.apply(InputEvent::Tick) {
                cycles.push(tick);
            }
        }
        assert_eq!(cycles, vec![360, 720]);
    }

    #[test]
    fn test_image_index_wraps_modulo_list_length() {
        // With ["a.jpg", "b.jpg"]: first cycle selects index 1, second wraps
        // back to index 0.
        let mut state = AnimState::new(2);

        for _ in 0..359 {
            state.apply(InputEvent::Tick);
        }
        assert_eq!(
            state.apply(InputEvent::Tick),
            Effect::CycleTextures { image_index: 1 }
        );

        for _ in 0..359 {
            state.apply(InputEvent::Tick);
        }
        assert_eq!(
            state.apply(InputEvent::Tick),
            Effect::CycleTextures { image_index: 0 }
        );
    }

    #[test]
    fn test_right_and_up_nudge_translation() {
        let mut state = AnimState::new(2);
        state.apply(InputEvent::Key(TranslationKey::Right));
        state.apply(InputEvent::Key(TranslationKey::Up));
        assert!((state.translation - Vector3::new(0.1, 0.1, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_each_key_moves_exactly_one_axis() {
        let cases = [
            (TranslationKey::Left, Vector3::new(-0.1, 0.0, 0.0)),
            (TranslationKey::Right, Vector3::new(0.1, 0.0, 0.0)),
            (TranslationKey::Up, Vector3::new(0.0, 0.1, 0.0)),
            (TranslationKey::Down, Vector3::new(0.0, -0.1, 0.0)),
            (TranslationKey::Forward, Vector3::new(0.0, 0.0, 0.1)),
            (TranslationKey::Backward, Vector3::new(0.0, 0.0, -0.1)),
        ];
        for (key, expected) in cases {
            let mut state = AnimState::new(2);
            assert_eq!(state.apply(InputEvent::Key(key)), Effect::TranslationChanged);
            assert!((state.translation - expected).norm() < 1e-6, "{:?}", key);
        }
    }

    #[test]
    fn test_translation_accumulates_without_bounds() {
        let mut state = AnimState::new(2);
        for _ in 0..1000 {
            state.apply(InputEvent::Key(TranslationKey::Right));
        }
        assert!((state.translation.x - 100.0).abs() < 1e-2);
    }
}
