use crate::consts;
use crate::snake::Cell;
use ratatui::layout::{Position, Size};
use serde::Deserialize;
use thiserror::Error;

/// The visible playing field.
///
/// The snake itself moves on an unbounded grid; the arena folds that grid
/// onto a `width`×`height` torus for drawing and for matching food.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawArena")]
pub(crate) struct Arena {
    width: u16,
    height: u16,
}

impl Arena {
    pub(crate) fn new(width: u16, height: u16) -> Result<Arena, InvalidArena> {
        let (min, max) = (consts::MIN_ARENA_SIZE, consts::MAX_ARENA_SIZE);
        if (min.width..=max.width).contains(&width) && (min.height..=max.height).contains(&height)
        {
            Ok(Arena { width, height })
        } else {
            Err(InvalidArena { width, height })
        }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// The grid point in the middle of the arena
    pub(crate) fn center(self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    /// Fold `cell` into the arena
    pub(crate) fn wrap(self, cell: Cell) -> Cell {
        Cell::new(
            cell.x.rem_euclid(i32::from(self.width)),
            cell.y.rem_euclid(i32::from(self.height)),
        )
    }

    /// Return the on-screen offset from the arena's top-left corner at which
    /// `cell` is drawn
    pub(crate) fn to_screen(self, cell: Cell) -> Position {
        let Cell { x, y } = self.wrap(cell);
        let x = u16::try_from(x).unwrap_or_default();
        let y = u16::try_from(y).unwrap_or_default();
        Position::new(x, (self.height - 1).saturating_sub(y))
    }

    /// Iterate over every grid point in the arena
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let (width, height) = (i32::from(self.width), i32::from(self.height));
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

impl Default for Arena {
    fn default() -> Arena {
        Arena {
            width: consts::DEFAULT_ARENA_SIZE.width,
            height: consts::DEFAULT_ARENA_SIZE.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
struct RawArena {
    width: u16,
    height: u16,
}

impl Default for RawArena {
    fn default() -> RawArena {
        RawArena {
            width: consts::DEFAULT_ARENA_SIZE.width,
            height: consts::DEFAULT_ARENA_SIZE.height,
        }
    }
}

impl TryFrom<RawArena> for Arena {
    type Error = InvalidArena;

    fn try_from(value: RawArena) -> Result<Arena, InvalidArena> {
        Arena::new(value.width, value.height)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "arena size {width}x{height} is out of range; width must be {min_width}-{max_width} and height {min_height}-{max_height}",
    min_width = consts::MIN_ARENA_SIZE.width,
    max_width = consts::MAX_ARENA_SIZE.width,
    min_height = consts::MIN_ARENA_SIZE.height,
    max_height = consts::MAX_ARENA_SIZE.height
)]
pub(crate) struct InvalidArena {
    width: u16,
    height: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn arena(width: u16, height: u16) -> Arena {
        Arena::new(width, height).expect("arena size should be valid")
    }

    #[rstest]
    #[case(4, 4, true)]
    #[case(78, 20, true)]
    #[case(3, 10, false)]
    #[case(10, 3, false)]
    #[case(79, 10, false)]
    #[case(10, 21, false)]
    fn test_new(#[case] width: u16, #[case] height: u16, #[case] ok: bool) {
        assert_eq!(Arena::new(width, height).is_ok(), ok);
    }

    #[rstest]
    #[case(Cell::new(3, 2), Cell::new(3, 2))]
    #[case(Cell::new(10, 2), Cell::new(0, 2))]
    #[case(Cell::new(-1, 2), Cell::new(9, 2))]
    #[case(Cell::new(3, -6), Cell::new(3, 4))]
    #[case(Cell::new(-21, 17), Cell::new(9, 2))]
    fn test_wrap(#[case] cell: Cell, #[case] r: Cell) {
        assert_eq!(arena(10, 5).wrap(cell), r);
    }

    #[rstest]
    #[case(Cell::new(0, 0), Position::new(0, 4))]
    #[case(Cell::new(9, 4), Position::new(9, 0))]
    #[case(Cell::new(2, 5), Position::new(2, 4))]
    #[case(Cell::new(-1, -1), Position::new(9, 0))]
    fn test_to_screen(#[case] cell: Cell, #[case] r: Position) {
        assert_eq!(arena(10, 5).to_screen(cell), r);
    }

    #[test]
    fn cells_cover_arena() {
        let a = arena(5, 4);
        assert_eq!(a.cells().count(), 20);
        assert!(a.cells().all(|c| a.wrap(c) == c));
        assert_eq!(a.center(), Cell::new(2, 2));
    }
}
