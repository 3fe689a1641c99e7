//! Solution path search over the spanning tree.

use anyhow::bail;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::tree::SpanningTree;
use crate::Point;

/// Walks a spanning tree to the unique route between two cells.
///
/// The walk is a random depth-first probe, not a shortest-path search: a
/// tree has exactly one simple path between any two nodes, so any walk that
/// never reuses an edge ends up with that path. Randomness only decides
/// which branch is probed first.
pub struct Pathfinder {
    random: StdRng,
}

impl Pathfinder {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Find the cells strictly between `start` and `target`.
    ///
    /// The tree is taken by value and consumed; pass a clone and keep the
    /// live tree. Consecutive result cells are tree-adjacent, with `start`
    /// and `target` attaching at the ends when the caller re-adds them.
    ///
    /// Every probed edge is removed from the copy in both directions, so a
    /// wrong branch dies out and the stack backtracks past it. Fails when
    /// `start == target`, when either endpoint is unknown to the tree, or
    /// when the tree is disconnected and the walk runs out of cells before
    /// reaching `target`.
    pub fn find_path(
        &mut self,
        mut tree: SpanningTree,
        start: Point,
        target: Point,
    ) -> anyhow::Result<Vec<Point>> {
        if start == target {
            bail!("path start and target are both ({}, {})", start.x, start.y);
        }
        if !tree.contains(start) || !tree.contains(target) {
            bail!("path endpoints must be cells of the spanning tree");
        }

        let mut path = vec![start];
        let mut reached = start;
        while reached != target {
            let Some(current) = path.pop() else {
                // every branch died out: the target sits in another component
                bail!(
                    "no route from ({}, {}) to ({}, {}): spanning tree is disconnected",
                    start.x,
                    start.y,
                    target.x,
                    target.y
                );
            };
            let open = tree.neighbors(current).len();
            if open == 0 {
                // dead end, backtrack to the previous branch point
                continue;
            }
            path.push(current);
            let next = tree.neighbors(current)[self.random.gen_range(0..open)];
            path.push(next);
            tree.disconnect(current, next);
            reached = next;
        }

        // report only the cells in between; the endpoints stay where the
        // caller already has them marked
        path.remove(0);
        path.pop();
        Ok(path)
    }
}
