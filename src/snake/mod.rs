mod cell;
mod chain;
mod direction;
mod feedback;
mod head;
pub(crate) use self::cell::{Cell, Vec2};
pub(crate) use self::chain::{Segment, SegmentChain};
pub(crate) use self::direction::{Direction, DirectionController};
pub(crate) use self::feedback::{CameraShaker, EffectSpawner, FoodSource};
use self::head::Head;
use std::num::NonZeroUsize;
use std::time::Duration;

/// A snake on an unbounded grid.
///
/// The head moves continuously; every time it passes a grid point the body
/// shifts up by one place, so the body always trails exactly one step behind
/// regardless of how the elapsed time is split into ticks.
///
/// `E` and `C` receive the fire-and-forget notifications sent when the snake
/// eats.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snake<E = (), C = ()> {
    direction: DirectionController,

    /// The most recent acceptable turn request, applied when the head next
    /// sets off from a grid point
    pending: Option<Direction>,

    head: Head,
    chain: SegmentChain,
    effects: E,
    camera: C,
}

#[cfg(test)]
impl Snake {
    /// Create a snake whose head is at `head`, facing up, with `length`
    /// segments trailing directly below it
    pub(crate) fn new(head: Cell, length: NonZeroUsize, speed: f32) -> Snake {
        Snake::with_feedback(head, length, speed, (), ())
    }
}

impl<E, C> Snake<E, C> {
    pub(crate) fn with_feedback(
        head: Cell,
        length: NonZeroUsize,
        speed: f32,
        effects: E,
        camera: C,
    ) -> Snake<E, C> {
        let direction = DirectionController::new();
        let heading = direction.current();
        Snake {
            direction,
            pending: None,
            head: Head::new(head, heading, speed),
            chain: SegmentChain::behind(head, heading, length),
            effects,
            camera,
        }
    }

    /// The current direction of travel
    pub(crate) fn direction(&self) -> Direction {
        self.direction.current()
    }

    /// The last grid point the head passed
    pub(crate) fn head(&self) -> Cell {
        self.head.cell()
    }

    pub(crate) fn head_position(&self) -> Vec2 {
        self.head.position()
    }

    /// The grid point to draw the head on
    pub(crate) fn head_display_cell(&self) -> Cell {
        self.head.nearest_cell()
    }

    pub(crate) fn speed(&self) -> f32 {
        self.head.speed()
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        self.chain.units()
    }

    pub(crate) fn len(&self) -> usize {
        self.chain.len()
    }

    pub(crate) fn effects(&self) -> &E {
        &self.effects
    }

    pub(crate) fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    pub(crate) fn camera(&self) -> &C {
        &self.camera
    }

    pub(crate) fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Ask the snake to turn.  A request that would be refused right now is
    /// dropped; an acceptable one replaces any earlier pending request.
    pub(crate) fn request_direction(&mut self, candidate: Direction) {
        if self.direction.accepts(candidate) {
            self.pending = Some(candidate);
        } else {
            log::trace!(
                "Dropping turn request {candidate} while heading {}",
                self.direction()
            );
        }
    }

    /// Advance the simulation by `dt`.  Returns the grid points the head
    /// passed during this tick, in order.
    pub(crate) fn tick(&mut self, dt: Duration) -> Vec<Cell> {
        if self.head.at_cell() {
            self.apply_pending_turn();
        }
        self.head.advance(dt);
        let mut passed = Vec::new();
        while self.head.cross_boundary() {
            if self.follow_head() {
                passed.push(self.head.cell());
            }
            self.apply_pending_turn();
        }
        passed
    }

    /// Move the body if the head has moved since the last call
    fn follow_head(&mut self) -> bool {
        let current = self.head.cell();
        if current == self.head.previous_position {
            return false;
        }
        self.chain.follow(self.head.previous_position);
        self.head.previous_position = current;
        true
    }

    fn apply_pending_turn(&mut self) {
        if let Some(candidate) = self.pending.take() {
            if self.direction.request_change(candidate) {
                self.head.heading = self.direction.current();
            }
        }
    }

    /// Add a segment at the head's current grid point
    pub(crate) fn grow(&mut self) {
        self.chain.grow(self.head.cell(), self.head.heading);
    }
}

impl<E: EffectSpawner, C: CameraShaker> Snake<E, C> {
    /// Eat `food`: grow, then let the collaborators react
    pub(crate) fn collect_food<F: FoodSource>(&mut self, food: &mut F) {
        self.grow();
        self.effects.spawn_effect(self.head.cell(), self.head.heading);
        food.randomize_position();
        self.camera.shake();
    }
}
