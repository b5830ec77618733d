use super::arena::Arena;
use crate::snake::{Cell, FoodSource};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// A single piece of food somewhere in the arena
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Food<R> {
    rng: R,
    arena: Arena,
    position: Cell,
}

impl<R> Food<R> {
    pub(super) fn position(&self) -> Cell {
        self.position
    }
}

impl<R: Rng> Food<R> {
    /// Place food at a random cell of `arena` not in `occupied`
    pub(super) fn new(arena: Arena, rng: R, occupied: &HashSet<Cell>) -> Food<R> {
        let mut food = Food {
            rng,
            arena,
            position: arena.center(),
        };
        food.relocate(occupied);
        food
    }

    /// Move to a random cell other than the current one that is not in
    /// `occupied`.  If there is no such cell, stay put.
    pub(super) fn relocate(&mut self, occupied: &HashSet<Cell>) {
        let current = self.position;
        if let Some(pos) = self
            .arena
            .cells()
            .filter(|&c| c != current && !occupied.contains(&c))
            .choose(&mut self.rng)
        {
            self.position = pos;
        }
    }
}

impl<R: Rng> FoodSource for Food<R> {
    fn randomize_position(&mut self) {
        self.relocate(&HashSet::new());
        log::debug!("Food moved to {}", self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn arena() -> Arena {
        Arena::new(6, 4).expect("arena size should be valid")
    }

    #[test]
    fn new_avoids_occupied() {
        let free = Cell::new(4, 1);
        let occupied = arena().cells().filter(|&c| c != free).collect::<HashSet<_>>();
        let food = Food::new(arena(), ChaCha12Rng::seed_from_u64(RNG_SEED), &occupied);
        assert_eq!(food.position(), free);
    }

    #[test]
    fn randomize_always_moves() {
        let mut food = Food::new(
            arena(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
            &HashSet::new(),
        );
        for _ in 0..50 {
            let before = food.position();
            food.randomize_position();
            assert_ne!(food.position(), before);
            assert_eq!(arena().wrap(food.position()), food.position());
        }
    }

    #[test]
    fn position_without_rng() {
        let food = Food {
            rng: (),
            arena: arena(),
            position: Cell::new(1, 2),
        };
        assert_eq!(food.position(), Cell::new(1, 2));
    }

    #[test]
    fn nowhere_to_go() {
        let occupied = arena().cells().collect::<HashSet<_>>();
        let mut food = Food::new(arena(), ChaCha12Rng::seed_from_u64(RNG_SEED), &occupied);
        assert_eq!(food.position(), arena().center());
        food.relocate(&occupied);
        assert_eq!(food.position(), arena().center());
    }
}
