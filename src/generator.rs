//! Maze generation.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::tree::SpanningTree;
use crate::{Maze, Point};

/// Randomized depth-first maze builder.
///
/// Carves a perfect maze: every interior cell reachable, no cycles. The
/// traversal is iterative with an explicit stack, so the call depth does not
/// grow with the maze size.
pub struct Generator {
    random: StdRng,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve `maze` in place and return its spanning tree.
    ///
    /// Walls are only ever opened towards unvisited cells, so every opening
    /// adds exactly one new cell to the tree and the finished tree has one
    /// edge less than the interior has cells. Each neighbor candidate is
    /// consumed at most once, which bounds the total work by the cell count.
    pub fn generate(&mut self, maze: &mut Maze) -> SpanningTree {
        let mut tree = SpanningTree::new();
        let start = Point::new(
            self.random.gen_range(0..maze.interior_x()),
            self.random.gen_range(0..maze.interior_y()),
        );
        maze.cell_mut(start).visited = true;
        tree.insert_root(start);

        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            let left = maze.cell(current).candidates_left();
            if left == 0 {
                continue;
            }
            // more candidates may remain after this one, revisit later
            stack.push(current);

            let pick = self.random.gen_range(0..left);
            let (next, direction) = maze.cell_mut(current).take_candidate(pick);
            if maze.cell(next).is_visited() {
                continue;
            }

            direction.open_wall(maze, current, next);
            tree.connect(current, next);
            maze.cell_mut(next).visited = true;
            stack.push(next);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::Generator;
    use crate::tree::SpanningTree;
    use crate::{Maze, Point};

    fn generated(size_x: usize, size_y: usize, seed: u64) -> (Maze, SpanningTree) {
        let mut maze = Maze::new(size_x, size_y).unwrap();
        let tree = Generator::new(Some(seed)).generate(&mut maze);
        (maze, tree)
    }

    fn ordered(a: Point, b: Point) -> (Point, Point) {
        if (a.y, a.x) <= (b.y, b.x) {
            (a, b)
        } else {
            (b, a)
        }
    }

    #[test]
    fn tree_has_one_edge_less_than_interior_cells() {
        let (maze, tree) = generated(10, 10, 1);
        assert_eq!(maze.interior_x() * maze.interior_y(), 81);
        assert_eq!(tree.node_count(), 81);
        assert_eq!(tree.edge_count(), 80);
    }

    #[test]
    fn tree_spans_every_interior_cell() {
        let (maze, tree) = generated(12, 11, 2);
        let mut seen = HashSet::from([Point::new(0, 0)]);
        let mut queue = VecDeque::from([Point::new(0, 0)]);
        while let Some(node) = queue.pop_front() {
            for &next in tree.neighbors(node) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        assert_eq!(seen.len(), maze.interior_x() * maze.interior_y());
    }

    #[test]
    fn every_interior_cell_is_visited() {
        let (maze, _) = generated(11, 13, 3);
        for y in 0..maze.interior_y() {
            for x in 0..maze.interior_x() {
                assert!(maze.cell(Point::new(x, y)).is_visited());
            }
        }
    }

    #[test]
    fn wall_openings_match_the_tree_edges() {
        let (maze, tree) = generated(10, 12, 4);

        // walk east and south so every interior wall is checked exactly once
        let mut wall_edges = HashSet::new();
        for y in 0..maze.interior_y() {
            for x in 0..maze.interior_x() {
                let here = Point::new(x, y);
                if x + 1 < maze.interior_x() && !maze.cell(Point::new(x + 1, y)).has_west_wall() {
                    wall_edges.insert(ordered(here, Point::new(x + 1, y)));
                }
                if y + 1 < maze.interior_y() && !maze.cell(Point::new(x, y + 1)).has_north_wall() {
                    wall_edges.insert(ordered(here, Point::new(x, y + 1)));
                }
            }
        }

        let mut tree_edges = HashSet::new();
        for y in 0..maze.interior_y() {
            for x in 0..maze.interior_x() {
                let here = Point::new(x, y);
                for &next in tree.neighbors(here) {
                    tree_edges.insert(ordered(here, next));
                }
            }
        }

        assert_eq!(wall_edges, tree_edges);
    }

    #[test]
    fn same_seed_reproduces_the_same_maze() {
        let (a, _) = generated(10, 10, 42);
        let (b, _) = generated(10, 10, 42);
        for y in 0..10 {
            for x in 0..10 {
                let (left, right) = (a.cell(Point::new(x, y)), b.cell(Point::new(x, y)));
                assert_eq!(left.has_north_wall(), right.has_north_wall());
                assert_eq!(left.has_west_wall(), right.has_west_wall());
            }
        }
    }
}
