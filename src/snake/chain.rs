use super::cell::Cell;
use super::direction::Direction;
use std::num::NonZeroUsize;
use thiserror::Error;

/// One trailing body unit
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Segment {
    pub(crate) position: Cell,

    /// The direction the segment was travelling in when it reached
    /// `position`
    pub(crate) heading: Direction,
}

impl Segment {
    pub(crate) fn new(position: Cell, heading: Direction) -> Segment {
        Segment { position, heading }
    }

    /// Produce a copy of this segment placed at `position` and facing
    /// `heading`
    pub(crate) fn clone_at(&self, position: Cell, heading: Direction) -> Segment {
        let mut unit = *self;
        unit.position = position;
        unit.heading = heading;
        unit
    }
}

/// The snake's body, front (nearest the head) first.
///
/// `positions` is a snapshot of where every unit stood after the last
/// [`follow()`][SegmentChain::follow] or [`grow()`][SegmentChain::grow].
/// Shifting reads from the snapshot so that no unit ever picks up a position
/// its predecessor has already overwritten.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SegmentChain {
    units: Vec<Segment>,
    positions: Vec<Cell>,
}

impl SegmentChain {
    /// Create a chain of `length` units lined up directly behind `head`, all
    /// facing `heading`
    pub(crate) fn behind(head: Cell, heading: Direction, length: NonZeroUsize) -> SegmentChain {
        let behind = heading.reverse();
        let units = std::iter::successors(Some(head), |c| Some(c.step(behind)))
            .skip(1)
            .take(length.get())
            .map(|position| Segment::new(position, heading));
        SegmentChain::from_segments(units)
            .expect("a nonzero length should produce at least one segment")
    }

    /// Create a chain from the given segments, front first.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `segments` is empty.
    pub(crate) fn from_segments<I>(segments: I) -> Result<SegmentChain, EmptyChain>
    where
        I: IntoIterator<Item = Segment>,
    {
        let units = segments.into_iter().collect::<Vec<_>>();
        if units.is_empty() {
            return Err(EmptyChain);
        }
        let positions = units.iter().map(|u| u.position).collect();
        Ok(SegmentChain { units, positions })
    }

    pub(crate) fn len(&self) -> usize {
        self.units.len()
    }

    pub(crate) fn units(&self) -> &[Segment] {
        &self.units
    }

    fn in_sync(&self) -> bool {
        !self.units.is_empty() && self.units.len() == self.positions.len()
    }

    /// Shift every unit into the place its predecessor held, with the front
    /// unit moving to `leader`.
    pub(crate) fn follow(&mut self, leader: Cell) {
        let in_sync = self.in_sync();
        debug_assert!(in_sync, "segment chain is empty or out of sync");
        if !in_sync {
            log::error!(
                "Refusing to move segment chain: {} units vs. {} positions",
                self.units.len(),
                self.positions.len()
            );
            return;
        }
        let targets = std::iter::once(leader).chain(self.positions.iter().copied());
        for (unit, target) in self.units.iter_mut().zip(targets) {
            if let Some(heading) = Direction::between(unit.position, target) {
                unit.heading = heading;
            }
            unit.position = target;
        }
        for (pos, unit) in self.positions.iter_mut().zip(&self.units) {
            *pos = unit.position;
        }
    }

    /// Add a new front unit at `at`, facing `heading`, modelled on the
    /// current front unit
    pub(crate) fn grow(&mut self, at: Cell, heading: Direction) {
        let in_sync = self.in_sync();
        debug_assert!(in_sync, "segment chain is empty or out of sync");
        let Some(prototype) = self.units.first().filter(|_| in_sync) else {
            log::error!(
                "Refusing to grow segment chain: {} units vs. {} positions",
                self.units.len(),
                self.positions.len()
            );
            return;
        };
        let unit = prototype.clone_at(at, heading);
        self.units.insert(0, unit);
        self.positions.insert(0, unit.position);
        log::info!("Snake grew to {} segments", self.units.len());
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("a segment chain needs at least one segment")]
pub(crate) struct EmptyChain;
