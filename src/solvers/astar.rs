use std::{cmp::Reverse, collections::BinaryHeap};

use super::TrackedCell;
use crate::error::{MazeError, Result};
use crate::maze::{Coord, Grid};

/// Entry of the open set.
///
/// Field order defines the priority: lowest total cost first, then lowest heuristic
/// cost (the node believed closer to the goal), then the earliest pushed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenCell {
    total_cost: u32,
    heuristic_cost: u32,
    order: u64,
    coord: Coord,
}

pub fn solve_astar<H>(grid: &Grid, start: Coord, goal: Coord, heuristic: H) -> Result<Vec<Coord>>
where
    H: Fn(Coord, Coord) -> u32,
{
    for coord in [start, goal] {
        if !grid.contains(coord) {
            return Err(MazeError::InvalidCoordinate {
                coord,
                width: grid.width(),
                height: grid.height(),
            });
        }
    }
    tracing::debug!("[solver] A* from {:?} to {:?}", start, goal);

    // Best known record per cell, indexed in row-major order
    let mut tracked: Vec<Option<TrackedCell>> = vec![None; grid.len()];
    let mut closed = vec![false; grid.len()];

    let start_cell = TrackedCell {
        parent: start,
        traveling_cost: 0,
        heuristic_cost: heuristic(start, goal),
    };
    tracked[grid.index_of(start)?] = Some(start_cell);

    // Priority queue for A*
    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<OpenCell>> = BinaryHeap::new();
    let mut order = 0u64;
    pq.push(Reverse(OpenCell {
        total_cost: start_cell.total_cost(),
        heuristic_cost: start_cell.heuristic_cost,
        order,
        coord: start,
    }));

    let mut expanded = 0usize;
    while let Some(Reverse(current)) = pq.pop() {
        if current.coord == goal {
            let path = reconstruct_path(grid, &tracked, start, goal)?;
            tracing::debug!(
                "[solver] goal reached after expanding {} cells, path length {}",
                expanded,
                path.len()
            );
            return Ok(path);
        }

        let current_idx = grid.index_of(current.coord)?;
        // Entries superseded by a cheaper push stay in the heap; drop them here
        if closed[current_idx] {
            continue;
        }
        closed[current_idx] = true;
        expanded += 1;

        let Some(current_cell) = tracked[current_idx] else {
            continue;
        };
        let new_cost = current_cell.traveling_cost + 1; // Uniform cost for each step

        for (dir, neighbor) in grid.neighbors(current.coord) {
            // The current cell's own side decides whether the step is allowed
            if !grid.is_open(current.coord, dir) {
                continue;
            }
            let neighbor_idx = grid.index_of(neighbor)?;
            if closed[neighbor_idx] {
                continue;
            }

            let candidate = TrackedCell {
                parent: current.coord,
                traveling_cost: new_cost,
                heuristic_cost: heuristic(neighbor, goal),
            };
            let is_cheaper = tracked[neighbor_idx]
                .is_none_or(|known| candidate.total_cost() < known.total_cost());
            if is_cheaper {
                tracked[neighbor_idx] = Some(candidate);
                order += 1;
                pq.push(Reverse(OpenCell {
                    total_cost: candidate.total_cost(),
                    heuristic_cost: candidate.heuristic_cost,
                    order,
                    coord: neighbor,
                }));
            }
        }
    }

    tracing::debug!(
        "[solver] open set exhausted after expanding {} cells, {:?} is unreachable",
        expanded,
        goal
    );
    Err(MazeError::Unreachable { start, goal })
}

/// Walk parent links back from `goal` until reaching the start, which is its own parent.
/// The start itself is not part of the returned path.
fn reconstruct_path(
    grid: &Grid,
    tracked: &[Option<TrackedCell>],
    start: Coord,
    goal: Coord,
) -> Result<Vec<Coord>> {
    let mut path = Vec::new();
    let mut current = goal;
    loop {
        let Some(cell) = tracked[grid.index_of(current)?] else {
            return Err(MazeError::Unreachable { start, goal });
        };
        if cell.parent == current {
            break;
        }
        path.push(current);
        current = cell.parent;
    }
    path.reverse();
    Ok(path)
}
