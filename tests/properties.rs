use std::collections::VecDeque;

use labyrinth::{Coord, Direction, Grid, Maze, MazeError};

const SIZES: [(u16, u16); 8] = [
    (1, 1),
    (2, 1),
    (1, 7),
    (3, 3),
    (5, 5),
    (8, 3),
    (12, 9),
    (20, 20),
];

/// Breadth-first distances from `start` over open walls, `None` for unreached cells.
fn bfs_distances(grid: &Grid, start: Coord) -> Vec<Option<usize>> {
    let width = grid.width() as usize;
    let index = |(x, y): Coord| y as usize * width + x as usize;
    let mut dist = vec![None; grid.len()];
    dist[index(start)] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let d = dist[index(current)].unwrap();
        for (dir, next) in grid.neighbors(current) {
            if grid.is_open(current, dir) && dist[index(next)].is_none() {
                dist[index(next)] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

fn assert_valid_path(grid: &Grid, start: Coord, goal: Coord, path: &[Coord]) {
    let mut previous = start;
    for &step in path {
        let dir = Direction::between(previous, step)
            .unwrap_or_else(|| panic!("{:?} -> {:?} is not a single step", previous, step));
        assert!(grid.is_open(previous, dir), "wall between {:?} and {:?}", previous, step);
        previous = step;
    }
    assert_eq!(previous, goal);
}

#[test]
fn test_spanning_tree() {
    for (w, h) in SIZES {
        for seed in 0..10 {
            let maze = Maze::with_seed(w, h, seed).unwrap();
            let grid = maze.grid();
            let cells = w as usize * h as usize;
            // Connected with exactly n - 1 edges means a tree, so no cycles either
            assert_eq!(grid.open_edge_count(), cells - 1, "{}x{} seed {}", w, h, seed);
            let dist = bfs_distances(grid, (0, 0));
            assert!(dist.iter().all(Option::is_some), "{}x{} seed {}", w, h, seed);
        }
    }
}

#[test]
fn test_wall_symmetry() {
    for (w, h) in SIZES {
        let maze = Maze::with_seed(w, h, 99).unwrap();
        let grid = maze.grid();
        for (coord, cell) in grid.cells() {
            for dir in Direction::ALL {
                match grid.neighbor(coord, dir) {
                    Some(next) => assert_eq!(
                        cell.has_path(dir),
                        grid.get(next).unwrap().has_path(dir.opposite()),
                        "{:?} {} in {}x{}",
                        coord,
                        dir,
                        w,
                        h
                    ),
                    None => assert!(!cell.has_path(dir)),
                }
            }
        }
    }
}

#[test]
fn test_determinism() {
    for (w, h) in SIZES {
        for seed in [0, 1, 7, u64::MAX] {
            let first = Maze::with_seed(w, h, seed).unwrap();
            let second = Maze::with_seed(w, h, seed).unwrap();
            let masks = |maze: &Maze| {
                maze.grid()
                    .cells()
                    .map(|(_, cell)| cell.openings())
                    .collect::<Vec<_>>()
            };
            assert_eq!(masks(&first), masks(&second));
        }
    }
}

#[test]
fn test_search_matches_bfs() {
    for (w, h) in SIZES {
        for seed in 0..5 {
            let maze = Maze::with_seed(w, h, seed).unwrap();
            let grid = maze.grid();
            let starts = [(0, 0), (w - 1, h - 1), (w / 2, h / 2), (w - 1, 0)];
            for start in starts {
                let dist = bfs_distances(grid, start);
                for (goal, _) in grid.cells() {
                    let path = maze.pathfind(start, goal).unwrap();
                    let expected = dist[goal.1 as usize * w as usize + goal.0 as usize].unwrap();
                    assert_eq!(path.len(), expected, "{:?} -> {:?}", start, goal);
                    assert_valid_path(grid, start, goal, &path);
                }
            }
        }
    }
}

#[test]
fn test_corner_to_corner_5x5() {
    let maze = Maze::with_seed(5, 5, 2024).unwrap();
    let path = maze.pathfind((0, 0), (4, 4)).unwrap();
    let dist = bfs_distances(maze.grid(), (0, 0));
    assert_eq!(Some(path.len()), dist[24]);
    assert_eq!(path.last(), Some(&(4, 4)));
    assert!(!path.contains(&(0, 0)));
}

#[test]
fn test_degenerate_path() {
    let maze = Maze::with_seed(6, 6, 3).unwrap();
    for (coord, _) in maze.grid().cells() {
        assert_eq!(maze.pathfind(coord, coord), Ok(vec![]));
    }
}

#[test]
fn test_invalid_requests() {
    assert!(matches!(
        Maze::with_seed(0, 3, 1),
        Err(MazeError::InvalidDimensions { width: 0, .. })
    ));
    let maze = Maze::with_seed(4, 4, 1).unwrap();
    assert!(matches!(
        maze.pathfind((0, 0), (4, 0)),
        Err(MazeError::InvalidCoordinate { coord: (4, 0), .. })
    ));
    assert!(matches!(
        maze.pathfind((0, 4), (0, 0)),
        Err(MazeError::InvalidCoordinate { coord: (0, 4), .. })
    ));
}
