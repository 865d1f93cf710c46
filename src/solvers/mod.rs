mod astar;

use crate::error::Result;
use crate::maze::{Coord, Grid};
use astar::solve_astar;

/// Best known way of reaching a cell during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrackedCell {
    /// The cell this one was reached from. The start cell is its own parent.
    parent: Coord,
    /// Cost to reach this cell from the start
    traveling_cost: u32,
    /// Estimated cost to reach the goal from this cell
    heuristic_cost: u32,
}

impl TrackedCell {
    fn total_cost(&self) -> u32 {
        self.traveling_cost + self.heuristic_cost
    }
}

/// Manhattan distance, an admissible and consistent estimate on a 4-connected grid.
pub fn manhattan(from: Coord, to: Coord) -> u32 {
    u32::from(from.0.abs_diff(to.0)) + u32::from(from.1.abs_diff(to.1))
}

/// Shortest path search over a carved grid. The grid is only read.
#[derive(Debug, Clone, Copy)]
pub struct Pathfinder<'a> {
    grid: &'a Grid,
}

impl<'a> Pathfinder<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Find a shortest path from `start` to `goal`, guided by `heuristic`.
    ///
    /// The returned coordinates exclude `start` and end with `goal`. The heuristic must
    /// never overestimate the remaining number of steps, otherwise the path may not be optimal.
    pub fn pathfind<H>(&self, start: Coord, goal: Coord, heuristic: H) -> Result<Vec<Coord>>
    where
        H: Fn(Coord, Coord) -> u32,
    {
        solve_astar(self.grid, start, goal, heuristic)
    }
}
