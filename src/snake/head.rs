use super::cell::{Cell, Vec2};
use super::direction::Direction;
use crate::consts;
use std::time::Duration;

/// The snake's head.
///
/// The head glides continuously from grid point to grid point: `cell` is the
/// last point it passed and `progress` is how far beyond that point it has
/// travelled towards the next one along `heading`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Head {
    cell: Cell,

    /// Where the head was when the body last followed it.  Only the
    /// controller writes this, after it has moved the body.
    pub(super) previous_position: Cell,

    pub(super) heading: Direction,

    progress: f32,

    /// Units per second
    speed: f32,
}

impl Head {
    pub(super) fn new(cell: Cell, heading: Direction, speed: f32) -> Head {
        Head {
            cell,
            previous_position: cell,
            heading,
            progress: 0.0,
            speed,
        }
    }

    pub(super) fn cell(&self) -> Cell {
        self.cell
    }

    pub(super) fn speed(&self) -> f32 {
        self.speed
    }

    /// Continuous world position
    pub(super) fn position(&self) -> Vec2 {
        Vec2::along(self.cell, self.heading, self.progress)
    }

    /// The grid point the head is visually closest to
    pub(super) fn nearest_cell(&self) -> Cell {
        if self.progress * 2.0 >= consts::STEP_LENGTH {
            self.cell.step(self.heading)
        } else {
            self.cell
        }
    }

    /// True when the head sits exactly on a grid point, i.e., no distance has
    /// accumulated towards the next one
    pub(super) fn at_cell(&self) -> bool {
        self.progress <= 0.0
    }

    /// Accumulate `speed * dt` units of travel along the heading, up to
    /// [`consts::MAX_STEPS_PER_TICK`] units in total
    pub(super) fn advance(&mut self, dt: Duration) {
        let progress = self.speed.mul_add(dt.as_secs_f32(), self.progress);
        if progress > consts::MAX_STEPS_PER_TICK {
            log::warn!("Dropping {progress} units of travel after a {dt:?} tick");
        }
        self.progress = progress.min(consts::MAX_STEPS_PER_TICK);
    }

    /// If a full unit of travel has accumulated, move `cell` one step along
    /// the heading and return `true`.  Call repeatedly after
    /// [`advance()`][Head::advance] until it returns `false`.
    pub(super) fn cross_boundary(&mut self) -> bool {
        if self.progress >= consts::STEP_LENGTH {
            self.progress -= consts::STEP_LENGTH;
            self.cell = self.cell.step(self.heading);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crossings(head: &mut Head) -> usize {
        std::iter::from_fn(|| head.cross_boundary().then_some(())).count()
    }

    #[test]
    fn partial_advance_stays_put() {
        let mut head = Head::new(Cell::new(0, 0), Direction::Up, 4.0);
        head.advance(Duration::from_millis(125));
        assert!(!head.at_cell());
        assert_eq!(crossings(&mut head), 0);
        assert_eq!(head.cell(), Cell::new(0, 0));
        assert_eq!(head.position(), Vec2 { x: 0.0, y: 0.5 });
        assert_eq!(head.nearest_cell(), Cell::new(0, 1));
    }

    #[test]
    fn accumulated_advance_crosses() {
        let mut head = Head::new(Cell::new(0, 0), Direction::Right, 4.0);
        head.advance(Duration::from_millis(125));
        head.advance(Duration::from_millis(125));
        assert_eq!(crossings(&mut head), 1);
        assert_eq!(head.cell(), Cell::new(1, 0));
        assert!(head.at_cell());
        assert_eq!(head.previous_position, Cell::new(0, 0));
    }

    #[test]
    fn long_frame_crosses_several() {
        let mut head = Head::new(Cell::new(0, 0), Direction::Down, 4.0);
        head.advance(Duration::from_millis(875));
        assert_eq!(crossings(&mut head), 3);
        assert_eq!(head.cell(), Cell::new(0, -3));
        assert_eq!(head.position(), Vec2 { x: 0.0, y: -3.5 });
    }

    #[test]
    fn stalled_frame_is_capped() {
        let mut head = Head::new(Cell::new(0, 0), Direction::Left, 5.0);
        head.advance(Duration::from_secs(4_000_000));
        assert_eq!(crossings(&mut head), 64);
        assert_eq!(head.cell(), Cell::new(-64, 0));
        assert!(head.at_cell());
    }
}
