use bitflags::bitflags;

bitflags! {
    /// Per-cell state. The four direction bits are set when the cell is open
    /// (passable) towards that direction.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    struct CellFlags: u8 {
        const NORTH   = 1;
        const EAST    = 1 << 1;
        const SOUTH   = 1 << 2;
        const WEST    = 1 << 3;
        const VISITED = 1 << 4;
    }
}

/// One of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order every neighbor scan uses.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Unit step `(dx, dy)`; y grows downwards (south).
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Direction leading from `from` to the adjacent cell `to`.
    /// Returns `None` if the two cells are not orthogonally adjacent.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        let dx = to.0 as i32 - from.0 as i32;
        let dy = to.1 as i32 - from.1 as i32;
        Direction::ALL
            .into_iter()
            .find(|dir| dir.delta() == (dx as i8, dy as i8) && dx.abs() + dy.abs() == 1)
    }

    const fn flag(self) -> CellFlags {
        match self {
            Direction::North => CellFlags::NORTH,
            Direction::East => CellFlags::EAST,
            Direction::South => CellFlags::SOUTH,
            Direction::West => CellFlags::WEST,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// A single maze cell: which sides are open, plus the visited mark used while carving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    flags: CellFlags,
}

impl Cell {
    /// Opens the side of this cell facing `dir`.
    /// Only one side is touched; keeping the neighbor in sync is the grid's job.
    pub fn break_wall(&mut self, dir: Direction) {
        self.flags.insert(dir.flag());
    }

    /// Checks if this cell is passable towards `dir`.
    pub fn has_path(&self, dir: Direction) -> bool {
        self.flags.contains(dir.flag())
    }

    pub fn set_visited(&mut self) {
        self.flags.insert(CellFlags::VISITED);
    }

    pub fn is_visited(&self) -> bool {
        self.flags.contains(CellFlags::VISITED)
    }

    /// Number of open sides.
    pub fn open_sides(&self) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.has_path(dir))
            .count()
    }

    /// Wall openness with the visited mark masked out, suitable for comparing carved mazes.
    pub fn openings(&self) -> u8 {
        self.flags.difference(CellFlags::VISITED).bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_wall() {
        let mut cell = Cell::default();
        assert!(Direction::ALL.iter().all(|&dir| !cell.has_path(dir)));

        cell.break_wall(Direction::East);
        assert!(cell.has_path(Direction::East));
        assert!(!cell.has_path(Direction::West));
        assert_eq!(cell.open_sides(), 1);

        // Breaking an already open wall is a no-op
        cell.break_wall(Direction::East);
        assert_eq!(cell.open_sides(), 1);
    }

    #[test]
    fn test_visited_does_not_open_walls() {
        let mut cell = Cell::default();
        cell.set_visited();
        assert!(cell.is_visited());
        assert_eq!(cell.open_sides(), 0);
        assert_eq!(cell.openings(), 0);
    }

    #[test]
    fn test_opposites() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_between() {
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::North));
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::East));
        assert_eq!(Direction::between((1, 1), (1, 2)), Some(Direction::South));
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::West));
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((0, 0), (3, 0)), None);
    }
}
