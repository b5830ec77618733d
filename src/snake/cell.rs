use super::direction::Direction;
use std::fmt;

/// A point on the unbounded movement grid.  `y` grows upwards.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell one unit away in `direction`
    pub(crate) fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in continuous world space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Vec2 {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl Vec2 {
    /// Return the point `distance` units from `origin` in `direction`
    pub(crate) fn along(origin: Cell, direction: Direction, distance: f32) -> Vec2 {
        let Vec2 { x, y } = Vec2::from(origin);
        let (ux, uy) = direction.unit();
        Vec2 {
            x: ux.mul_add(distance, x),
            y: uy.mul_add(distance, y),
        }
    }
}

impl From<Cell> for Vec2 {
    // Grid coordinates stay far below 2^24 in practice.
    #[allow(clippy::cast_precision_loss)]
    fn from(cell: Cell) -> Vec2 {
        Vec2 {
            x: cell.x as f32,
            y: cell.y as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Cell::new(3, 4))]
    #[case(Direction::Down, Cell::new(3, 2))]
    #[case(Direction::Left, Cell::new(2, 3))]
    #[case(Direction::Right, Cell::new(4, 3))]
    fn test_step(#[case] d: Direction, #[case] r: Cell) {
        assert_eq!(Cell::new(3, 3).step(d), r);
    }

    #[test]
    fn along_moves_partway() {
        assert_eq!(
            Vec2::along(Cell::new(1, 2), Direction::Left, 0.25),
            Vec2 { x: 0.75, y: 2.0 }
        );
        assert_eq!(
            Vec2::along(Cell::new(1, 2), Direction::Up, 0.5),
            Vec2 { x: 1.0, y: 2.5 }
        );
    }
}
