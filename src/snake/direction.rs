use super::cell::Cell;
use enum_map::Enum;
use std::fmt;

#[derive(Clone, Copy, Debug, Enum, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub(crate) fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Grid offset of a single step in this direction
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Unit vector pointing in this direction
    pub(crate) fn unit(self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, 1.0),
            Direction::Down => (0.0, -1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    /// If `to` is one step away from `from`, return the direction of that
    /// step.
    pub(crate) fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| from.step(d) == to)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// Holds the snake's authoritative direction and refuses any turn that stays
/// on the current axis.  Turning around therefore always takes two accepted
/// requests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DirectionController {
    current: Direction,
}

impl DirectionController {
    pub(crate) fn new() -> DirectionController {
        DirectionController::starting(Direction::Up)
    }

    pub(crate) fn starting(current: Direction) -> DirectionController {
        DirectionController { current }
    }

    pub(crate) fn current(&self) -> Direction {
        self.current
    }

    /// Would a request for `candidate` be accepted right now?
    pub(crate) fn accepts(&self, candidate: Direction) -> bool {
        match candidate.axis() {
            Axis::Horizontal => self.current.axis() == Axis::Vertical,
            Axis::Vertical => self.current.axis() == Axis::Horizontal,
        }
    }

    /// Switch to `candidate` if it is perpendicular to the current direction.
    /// Returns whether the request was accepted; rejected requests leave the
    /// controller untouched.
    pub(crate) fn request_change(&mut self, candidate: Direction) -> bool {
        if self.accepts(candidate) {
            log::debug!("Turning from {} to {candidate}", self.current);
            self.current = candidate;
            true
        } else {
            log::debug!("Ignoring turn from {} to {candidate}", self.current);
            false
        }
    }
}

impl Default for DirectionController {
    fn default() -> DirectionController {
        DirectionController::new()
    }
}
