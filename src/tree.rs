//! Spanning tree of the maze, kept as an adjacency map.

use std::collections::HashMap;

use crate::Point;

/// Map from each reached cell to the cells it is connected to through an
/// opened wall.
///
/// `Clone` is a structural copy of the adjacency lists; there is no shallow
/// view into a tree. [`Pathfinder`](crate::pathfinder::Pathfinder) takes its
/// tree by value and destroys it, so callers keep the live tree and hand
/// over a clone.
#[derive(Clone, Debug, Default)]
pub struct SpanningTree {
    links: HashMap<Point, Vec<Point>>,
}

impl SpanningTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `node` an entry before its first edge. Used for the generator's
    /// start cell, which the tree must know even while it is still alone.
    pub fn insert_root(&mut self, node: Point) {
        self.links.entry(node).or_default();
    }

    /// Record the undirected edge `a <-> b`.
    pub fn connect(&mut self, a: Point, b: Point) {
        self.links.entry(a).or_default().push(b);
        self.links.entry(b).or_default().push(a);
    }

    /// Drop the undirected edge `a <-> b`, both directions.
    pub fn disconnect(&mut self, a: Point, b: Point) {
        Self::drop_link(&mut self.links, a, b);
        Self::drop_link(&mut self.links, b, a);
    }

    fn drop_link(links: &mut HashMap<Point, Vec<Point>>, from: Point, to: Point) {
        if let Some(list) = links.get_mut(&from) {
            if let Some(index) = list.iter().position(|&node| node == to) {
                list.swap_remove(index);
            }
        }
    }

    pub fn contains(&self, node: Point) -> bool {
        self.links.contains_key(&node)
    }

    /// Cells directly connected to `node`.
    pub fn neighbors(&self, node: Point) -> &[Point] {
        self.links.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether an opening directly connects `a` and `b`. This is the move
    /// validation check for gameplay: no wall test needed, the tree only
    /// stores valid openings.
    pub fn is_linked(&self, a: Point, b: Point) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn node_count(&self) -> usize {
        self.links.len()
    }

    /// Number of undirected edges. Each edge is stored as two directed
    /// links.
    pub fn edge_count(&self) -> usize {
        self.links.values().map(Vec::len).sum::<usize>() / 2
    }
}
