//! Collaborators the snake calls out to when it eats.  None of them can
//! affect the snake's own state.
use super::cell::Cell;
use super::direction::Direction;

pub(crate) trait FoodSource {
    /// Move the food somewhere else
    fn randomize_position(&mut self);
}

pub(crate) trait EffectSpawner {
    /// Start a one-off visual effect at `at`, oriented along `heading`
    fn spawn_effect(&mut self, at: Cell, heading: Direction);
}

pub(crate) trait CameraShaker {
    fn shake(&mut self);
}

#[cfg(test)]
impl EffectSpawner for () {
    fn spawn_effect(&mut self, _at: Cell, _heading: Direction) {}
}

#[cfg(test)]
impl CameraShaker for () {
    fn shake(&mut self) {}
}
