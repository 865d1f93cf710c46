pub mod cell;
pub mod grid;

pub use cell::{Cell, Direction};
pub use grid::Grid;

use crate::{
    error::Result,
    generators::{entropy_seed, recursive_backtrack, seeded_rng},
    solvers::{Pathfinder, manhattan},
};

/// `(x, y)` position of a cell: x is the column, y is the row.
pub type Coord = (u16, u16);

/// A perfect maze: a fully carved grid together with the seed it was carved from.
///
/// The grid is only ever mutated while carving inside the constructors, so every
/// `Maze` handed out holds a spanning tree over its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    seed: u64,
}

impl Maze {
    /// Carves a maze from an explicit seed. The same dimensions and seed always
    /// produce the same walls.
    pub fn with_seed(width: u16, height: u16, seed: u64) -> Result<Self> {
        let mut grid = Grid::new(width, height)?;
        let mut rng = seeded_rng(seed);
        recursive_backtrack(&mut grid, &mut rng);
        Ok(Maze { grid, seed })
    }

    /// Carves a maze from a seed drawn from OS entropy.
    /// The drawn seed is kept, see [`Maze::seed`].
    pub fn from_entropy(width: u16, height: u16) -> Result<Self> {
        Maze::with_seed(width, height, entropy_seed())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// The seed this maze was carved from. Feeding it back to [`Maze::with_seed`]
    /// reproduces the maze.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.contains(coord)
    }

    /// Shortest path from `start` to `goal` using A* with the Manhattan heuristic.
    ///
    /// The result excludes `start` and ends with `goal`; it is empty when both are equal.
    pub fn pathfind(&self, start: Coord, goal: Coord) -> Result<Vec<Coord>> {
        Pathfinder::new(&self.grid).pathfind(start, goal, manhattan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    #[test]
    fn test_single_cell_maze() {
        let maze = Maze::with_seed(1, 1, 7).unwrap();
        let cell = maze.grid().get((0, 0)).unwrap();
        assert!(cell.is_visited());
        assert_eq!(cell.open_sides(), 0);
        assert_eq!(maze.pathfind((0, 0), (0, 0)), Ok(vec![]));
    }

    #[test]
    fn test_two_cell_maze() {
        for seed in 0..16 {
            let maze = Maze::with_seed(2, 1, seed).unwrap();
            assert!(maze.grid().is_open((0, 0), Direction::East));
            assert!(maze.grid().is_open((1, 0), Direction::West));
            assert_eq!(maze.grid().open_edge_count(), 1);
            assert_eq!(maze.pathfind((0, 0), (1, 0)), Ok(vec![(1, 0)]));
            assert_eq!(maze.pathfind((1, 0), (0, 0)), Ok(vec![(0, 0)]));
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let first = Maze::with_seed(3, 3, 42).unwrap();
        let second = Maze::with_seed(3, 3, 42).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.grid().open_edge_count(), 8);
    }

    #[test]
    fn test_entropy_seed_is_reproducible() {
        let maze = Maze::from_entropy(6, 4).unwrap();
        let again = Maze::with_seed(6, 4, maze.seed()).unwrap();
        assert_eq!(maze.grid(), again.grid());
    }

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(
            Maze::with_seed(0, 5, 1),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Maze::from_entropy(5, 0).is_err());
    }

    #[test]
    fn test_goal_out_of_bounds() {
        let maze = Maze::with_seed(4, 3, 9).unwrap();
        assert_eq!(
            maze.pathfind((0, 0), (4, 0)),
            Err(MazeError::InvalidCoordinate {
                coord: (4, 0),
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::with_seed(5, 5, 0).unwrap();
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
    }
}
