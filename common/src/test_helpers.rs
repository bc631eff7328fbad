use std::collections::{HashSet, VecDeque};

use crate::grid::Grid;

const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

fn open_neighbors(
    grid: &Grid,
    (x, y): (usize, usize),
) -> impl Iterator<Item = (usize, usize)> + '_ {
    DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        grid.is_open(nx, ny).then(|| (nx as usize, ny as usize))
    })
}

/// Number of unordered pairs of 4-adjacent open cells.
pub fn count_edges(grid: &Grid) -> usize {
    grid.open_cells()
        .map(|(x, y)| {
            usize::from(grid.is_open(x as i64 + 1, y as i64))
                + usize::from(grid.is_open(x as i64, y as i64 + 1))
        })
        .sum()
}

pub fn count_reachable(grid: &Grid, start: (usize, usize)) -> usize {
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        for neighbor in open_neighbors(grid, cell) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited.len()
}

/// Counts simple paths between two cells by exhaustive search, so only use it on
/// small grids or on grids already known to be trees.
pub fn count_simple_paths(grid: &Grid, from: (usize, usize), to: (usize, usize)) -> usize {
    fn walk(
        grid: &Grid,
        cell: (usize, usize),
        to: (usize, usize),
        on_path: &mut HashSet<(usize, usize)>,
    ) -> usize {
        if cell == to {
            return 1;
        }

        let mut paths = 0;
        for neighbor in open_neighbors(grid, cell) {
            if on_path.insert(neighbor) {
                paths += walk(grid, neighbor, to, on_path);
                on_path.remove(&neighbor);
            }
        }
        paths
    }

    let mut on_path = HashSet::from([from]);
    walk(grid, from, to, &mut on_path)
}

pub fn assert_is_spanning_tree(grid: &Grid, start: (usize, usize)) {
    let total_open = grid.open_count();
    assert!(total_open > 0, "there should be at least one open cell");

    let reachable = count_reachable(grid, start);
    assert_eq!(
        reachable, total_open,
        "all open cells should be connected:\n{grid}"
    );

    let edges = count_edges(grid);
    assert_eq!(
        edges + 1,
        total_open,
        "open cells should form a tree with no loops:\n{grid}"
    );
}

pub fn assert_border_is_wall(grid: &Grid) {
    let (rows, cols) = grid.dimensions();

    for ((x, y), cell) in grid.cells() {
        let on_border = x == 0 || y == 0 || x == cols - 1 || y == rows - 1;
        if on_border {
            assert_eq!(
                cell,
                crate::grid::CellState::Wall,
                "border cell ({x}, {y}) should be a wall:\n{grid}"
            );
        }
    }
}
