use rand::Rng;

use crate::maze::{Coord, Direction, Grid};

/// Carve a perfect maze into `grid` with a randomized depth-first traversal
/// starting at the origin.
///
/// The grid is reset first, so any previous carving is discarded. Every random
/// draw picks one of the current cell's unvisited neighbors, scanned in
/// `Direction::ALL` order, so the same rng state always yields the same maze.
pub fn recursive_backtrack<R: Rng>(grid: &mut Grid, rng: &mut R) {
    // Initialize the grid with walls
    grid.reset();

    tracing::debug!(
        "[generator] carving {}x{} maze",
        grid.width(),
        grid.height()
    );

    let start: Coord = (0, 0);
    if let Ok(cell) = grid.get_mut(start) {
        cell.set_visited();
    }

    // The stack keeps the current carving path; its top is the cell being extended
    let mut stack = vec![start];
    let mut visited_count = 1usize;
    let mut neighbors: Vec<Direction> = Vec::with_capacity(Direction::ALL.len());

    while let Some(&current) = stack.last() {
        neighbors.clear();
        neighbors.extend(grid.neighbors(current).filter_map(|(dir, next)| {
            match grid.get(next) {
                Ok(cell) if !cell.is_visited() => Some(dir),
                _ => None,
            }
        }));

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let dir = neighbors[rng.random_range(0..neighbors.len())];
        let Ok(next) = grid.carve(current, dir) else {
            // Neighbors come from in-bounds steps, so this cannot happen
            stack.pop();
            continue;
        };
        if let Ok(cell) = grid.get_mut(next) {
            cell.set_visited();
        }
        visited_count += 1;
        tracing::trace!("[generator] carved {} from {:?} to {:?}", dir, current, next);

        stack.push(next);
    }

    tracing::debug!(
        "[generator] done, visited {} of {} cells",
        visited_count,
        grid.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::seeded_rng;

    fn carve(width: u16, height: u16, seed: u64) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        recursive_backtrack(&mut grid, &mut seeded_rng(seed));
        grid
    }

    #[test]
    fn test_every_cell_visited() {
        let grid = carve(7, 5, 3);
        assert!(grid.cells().all(|(_, cell)| cell.is_visited()));
        assert!(grid.cells().all(|(_, cell)| cell.open_sides() > 0));
    }

    #[test]
    fn test_edge_count() {
        for (w, h) in [(1, 1), (1, 6), (6, 1), (4, 4), (9, 3)] {
            let grid = carve(w, h, 11);
            assert_eq!(grid.open_edge_count(), w as usize * h as usize - 1);
        }
    }

    #[test]
    fn test_single_column_is_a_corridor() {
        let grid = carve(1, 4, 5);
        for y in 0..3 {
            assert!(grid.is_open((0, y), Direction::South));
            assert!(grid.is_open((0, y + 1), Direction::North));
        }
        assert!(!grid.is_open((0, 0), Direction::North));
        assert!(!grid.is_open((0, 3), Direction::South));
    }

    #[test]
    fn test_no_openings_through_border() {
        let grid = carve(6, 6, 21);
        for (coord, cell) in grid.cells() {
            for dir in Direction::ALL {
                if grid.neighbor(coord, dir).is_none() {
                    assert!(!cell.has_path(dir), "{:?} open to {} border", coord, dir);
                }
            }
        }
    }

    #[test]
    fn test_recarving_resets_previous_maze() {
        let mut grid = carve(5, 5, 1);
        recursive_backtrack(&mut grid, &mut seeded_rng(2));
        assert_eq!(grid, carve(5, 5, 2));
        assert_eq!(grid.open_edge_count(), 24);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mazes = (0..8).map(|seed| carve(8, 8, seed)).collect::<Vec<_>>();
        assert!(mazes.iter().any(|grid| grid != &mazes[0]));
    }
}
