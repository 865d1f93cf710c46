use super::{
    Coord,
    cell::{Cell, Direction},
};
use crate::error::{MazeError, Result};

/// Fixed-size, row-major storage of maze cells.
/// The dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a fully walled, unvisited grid.
    /// Fails with `InvalidDimensions` before allocating anything if either side is zero.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let cells = vec![Cell::default(); width as usize * height as usize].into_boxed_slice();
        Ok(Grid {
            cells,
            width,
            height,
        })
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Index of `coord` in row-major order, used by solvers for flat bookkeeping.
    pub(crate) fn index_of(&self, coord: Coord) -> Result<usize> {
        if self.contains(coord) {
            Ok(self.ravel_index(coord.0, coord.1))
        } else {
            Err(self.out_of_bounds(coord))
        }
    }

    fn out_of_bounds(&self, coord: Coord) -> MazeError {
        MazeError::IndexOutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        }
    }

    pub fn get(&self, coord: Coord) -> Result<&Cell> {
        let idx = self.index_of(coord)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Result<&mut Cell> {
        let idx = self.index_of(coord)?;
        Ok(&mut self.cells[idx])
    }

    /// Cells with their coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (((i % width) as u16, (i / width) as u16), cell))
    }

    /// The in-bounds cell one step from `coord` towards `dir`, if any.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        if !self.contains(coord) {
            return None;
        }
        let (x, y) = coord;
        // NOTE: Stepping below zero wraps to u16::MAX and stepping past u16::MAX saturates to it.
        // The largest valid index is u16::MAX - 1, so both land out of bounds and get filtered.
        let next = match dir {
            Direction::North => (x, y.wrapping_sub(1)),
            Direction::East => (x.saturating_add(1), y),
            Direction::South => (x, y.saturating_add(1)),
            Direction::West => (x.wrapping_sub(1), y),
        };
        self.contains(next).then_some(next)
    }

    /// In-bounds neighbors of `coord` in `Direction::ALL` order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(coord, dir).map(|next| (dir, next)))
    }

    /// Checks if `coord` is passable towards `dir`. Out-of-bounds coordinates are never open.
    pub fn is_open(&self, coord: Coord, dir: Direction) -> bool {
        self.get(coord).is_ok_and(|cell| cell.has_path(dir))
    }

    /// Opens the wall between `from` and its neighbor towards `dir` on both sides.
    /// Returns the neighbor's coordinate.
    pub fn carve(&mut self, from: Coord, dir: Direction) -> Result<Coord> {
        let to = self
            .neighbor(from, dir)
            .ok_or_else(|| self.out_of_bounds(from))?;
        self.get_mut(from)?.break_wall(dir);
        self.get_mut(to)?.break_wall(dir.opposite());
        Ok(to)
    }

    /// Number of open undirected edges. Only east and south sides are counted so
    /// that every edge is seen exactly once.
    pub fn open_edge_count(&self) -> usize {
        self.cells()
            .map(|(_, cell)| {
                usize::from(cell.has_path(Direction::East))
                    + usize::from(cell.has_path(Direction::South))
            })
            .sum()
    }

    /// Puts every wall back and clears all visited marks.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }
}
