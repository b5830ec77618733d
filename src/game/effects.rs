//! Cosmetic reactions to the snake eating
use crate::consts;
use crate::snake::{CameraShaker, Cell, Direction, EffectSpawner};

/// Bursts of sparks, each of which spreads out and fades over a few frames
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(super) struct Sparks {
    active: Vec<Spark>,
}

impl Sparks {
    /// Age every spark by one frame, dropping those that have burnt out
    pub(super) fn fade(&mut self) {
        for spark in &mut self.active {
            spark.age = spark.age.saturating_add(1);
        }
        self.active.retain(|s| s.age < consts::SPARK_LIFETIME);
    }

    #[cfg(test)]
    pub(super) fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Cells currently lit by a spark
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.active.iter().flat_map(|s| s.cells())
    }
}

impl EffectSpawner for Sparks {
    fn spawn_effect(&mut self, at: Cell, heading: Direction) {
        self.active.push(Spark {
            at,
            heading,
            age: 0,
        });
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Spark {
    at: Cell,
    heading: Direction,
    age: u8,
}

impl Spark {
    /// Sparks fly out ahead of and to either side of the snake, never back
    /// over its body, and drift one cell further out halfway through their
    /// life.
    fn cells(self) -> impl Iterator<Item = Cell> {
        let distance = if self.age < consts::SPARK_LIFETIME / 2 {
            1
        } else {
            2
        };
        let behind = self.heading.reverse();
        Direction::ALL
            .into_iter()
            .filter(move |&d| d != behind)
            .map(move |d| (0..distance).fold(self.at, |c, _| c.step(d)))
    }
}

/// Horizontal jitter of the playing field
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct Shake {
    frames_left: u8,
}

impl Shake {
    pub(super) fn settle(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
    }

    /// Columns by which to displace the playing field this frame
    pub(super) fn offset(self) -> i16 {
        match self.frames_left {
            0 => 0,
            n if n % 2 == 0 => 1,
            _ => -1,
        }
    }
}

impl CameraShaker for Shake {
    fn shake(&mut self) {
        self.frames_left = consts::SHAKE_FRAMES;
    }
}
