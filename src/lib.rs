pub mod app;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::{MazeError, Result};
pub use maze::{Cell, Coord, Direction, Grid, Maze};
pub use render::{Canvas, Layout};
pub use solvers::{Pathfinder, manhattan};
