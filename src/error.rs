use thiserror::Error;

use crate::maze::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {width}x{height}, both must be at least 1")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("Cell {coord:?} is outside of the {width}x{height} grid")]
    IndexOutOfBounds { coord: Coord, width: u16, height: u16 },
    #[error("Coordinate {coord:?} is outside of the {width}x{height} maze")]
    InvalidCoordinate { coord: Coord, width: u16, height: u16 },
    #[error("No path from {start:?} to {goal:?}")]
    Unreachable { start: Coord, goal: Coord },
}

pub type Result<T> = core::result::Result<T, MazeError>;
