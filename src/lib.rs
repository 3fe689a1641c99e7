//! Generate a perfect rectangular maze, walk its spanning tree for the
//! unique route between two cells, and print it with box-drawing glyphs.
//!
//! A perfect maze has exactly one simple path between any two cells. The
//! generator carves it with an iterative randomized depth-first traversal
//! and records every opened wall as an edge of a spanning tree; the
//! pathfinder then walks a throwaway copy of that tree to recover the one
//! route between two cells.
//!
//! # Examples
//! ```
//! use maze_game::generator::Generator;
//! use maze_game::pathfinder::Pathfinder;
//! use maze_game::{Maze, Point};
//!
//! let mut maze = Maze::new(10, 10).unwrap();
//! let mut generator = Generator::new(Some(7));
//! let tree = generator.generate(&mut maze);
//!
//! maze.render();
//! maze.set_marker(0, 0, "PLY");
//! maze.set_marker(8, 8, "END");
//! println!("{maze}");
//!
//! let mut pathfinder = Pathfinder::new(Some(7));
//! let route = pathfinder
//!     .find_path(tree.clone(), Point::new(0, 0), Point::new(8, 8))
//!     .unwrap();
//! assert!(!route.is_empty());
//! ```

use std::fmt;

use anyhow::bail;
use itertools::Itertools;

pub mod generator;
pub mod pathfinder;
pub mod player;
pub mod tree;

/// Junction glyphs indexed by the 4-bit wall code from [`Maze::glyph_index`].
const WALL_JUNCTIONS: [char; 16] = [
    ' ', '╹', '╸', '┛', '╻', '┃', '┓', '┫', '╺', '┗', '━', '┻', '┏', '┣', '┳', '╋',
];

/// Location of a cell in the maze, 0-indexed from the north-west corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Cardinal direction from a cell towards one of its grid neighbors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Grid offset of the neighbor this direction points at; `y` grows
    /// southwards.
    fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }

    /// Open the wall shared by `current` and the neighbor `next` it points
    /// at. Each interior wall is stored on exactly one of the two cells.
    pub(crate) fn open_wall(self, maze: &mut Maze, current: Point, next: Point) {
        match self {
            Direction::East => maze.cell_mut(next).west = false,
            Direction::South => maze.cell_mut(next).north = false,
            Direction::West => maze.cell_mut(current).west = false,
            Direction::North => maze.cell_mut(current).north = false,
        }
    }
}

/// One cell of the maze.
///
/// Only the north and west walls are stored; a cell's south and east walls
/// are the north and west walls of its neighbors. The candidate list holds
/// the adjacent cells the generator has not tried yet.
#[derive(Clone, Debug)]
pub struct Cell {
    pub(crate) north: bool,
    pub(crate) west: bool,
    pub(crate) visited: bool,
    candidates: Vec<(Point, Direction)>,
}

impl Cell {
    fn new(pos: Point, size_x: usize, size_y: usize) -> Self {
        // Candidates stay within the generatable interior, so the traversal
        // can never open the world border.
        let candidates = Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let (dx, dy) = direction.offset();
                let x = pos.x.checked_add_signed(dx)?;
                let y = pos.y.checked_add_signed(dy)?;
                (x < size_x - 1 && y < size_y - 1).then_some((Point::new(x, y), direction))
            })
            .collect();
        Self {
            north: true,
            west: true,
            visited: false,
            candidates,
        }
    }

    pub fn has_north_wall(&self) -> bool {
        self.north
    }

    pub fn has_west_wall(&self) -> bool {
        self.west
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn candidates_left(&self) -> usize {
        self.candidates.len()
    }

    /// Consume the candidate at `index`. Shift-removal keeps the remaining
    /// candidates in construction order.
    pub(crate) fn take_candidate(&mut self, index: usize) -> (Point, Direction) {
        self.candidates.remove(index)
    }
}

/// The maze: a grid of cells plus the text canvas it renders into.
///
/// The allocation includes the boundary frame. The last row and the last
/// column are pre-visited frame cells with their outward walls removed, so
/// the generatable interior is `(size_x - 1) x (size_y - 1)` cells and the
/// frame renders the south and east borders.
pub struct Maze {
    size_x: usize,
    size_y: usize,
    cells: Vec<Vec<Cell>>,
    canvas: Vec<Vec<String>>,
}

impl Maze {
    /// Allocate a `size_x` by `size_y` grid with a closed boundary frame.
    ///
    /// Returns an error when the dimensions leave no interior cell.
    pub fn new(size_x: usize, size_y: usize) -> anyhow::Result<Self> {
        if size_x < 2 || size_y < 2 {
            bail!("a {size_x}x{size_y} maze has no interior; need at least 2x2 cells");
        }
        let cells = (0..size_y)
            .map(|y| {
                (0..size_x)
                    .map(|x| Cell::new(Point::new(x, y), size_x, size_y))
                    .collect()
            })
            .collect();
        let canvas = (0..2 * size_y).map(|_| vec![String::new(); size_x]).collect();
        let mut maze = Self {
            size_x,
            size_y,
            cells,
            canvas,
        };
        maze.close_frame();
        Ok(maze)
    }

    /// Mark the frame row and column as explored and drop their outward
    /// walls: the bottom row keeps only north walls (the south border), the
    /// right column keeps only west walls (the east border).
    fn close_frame(&mut self) {
        for x in 0..self.size_x {
            let cell = &mut self.cells[self.size_y - 1][x];
            cell.west = false;
            cell.visited = true;
        }
        for y in 0..self.size_y {
            let cell = &mut self.cells[y][self.size_x - 1];
            cell.north = false;
            cell.visited = true;
        }
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// Width of the generatable interior.
    pub fn interior_x(&self) -> usize {
        self.size_x - 1
    }

    /// Height of the generatable interior.
    pub fn interior_y(&self) -> usize {
        self.size_y - 1
    }

    /// Whether `(x, y)` addresses an interior (playable) cell.
    pub fn interior_contains(&self, x: usize, y: usize) -> bool {
        x < self.interior_x() && y < self.interior_y()
    }

    pub fn cell(&self, pos: Point) -> &Cell {
        &self.cells[pos.y][pos.x]
    }

    pub(crate) fn cell_mut(&mut self, pos: Point) -> &mut Cell {
        &mut self.cells[pos.y][pos.x]
    }

    /// 4-bit junction code for the north-west corner of `(x, y)`: bit 3 is
    /// this cell's north wall, bit 2 its west wall, bit 1 the west
    /// neighbor's north wall and bit 0 the north neighbor's west wall.
    pub fn glyph_index(&self, x: usize, y: usize) -> usize {
        let mut code = 0;
        if self.cells[y][x].north {
            code |= 0b1000;
        }
        if self.cells[y][x].west {
            code |= 0b0100;
        }
        if x > 0 && self.cells[y][x - 1].north {
            code |= 0b0010;
        }
        if y > 0 && self.cells[y - 1][x].west {
            code |= 0b0001;
        }
        code
    }

    /// Build the text canvas from the current wall state.
    ///
    /// Each cell occupies two canvas rows: the junction glyph followed by
    /// the north wall, then the west wall followed by a three-character
    /// content slot for markers. Rendering never touches the wall state.
    pub fn render(&mut self) {
        for y in 0..self.size_y {
            for x in 0..self.size_x {
                let junction = WALL_JUNCTIONS[self.glyph_index(x, y)];
                let north = if self.cells[y][x].north { "━━━" } else { "   " };
                let west = if self.cells[y][x].west { '┃' } else { ' ' };
                self.canvas[2 * y][x] = format!("{junction}{north}");
                self.canvas[2 * y + 1][x] = format!("{west}   ");
            }
        }
    }

    /// Overlay `marker` on the content slot of `(x, y)`, preserving the
    /// west-wall glyph. The text is padded or cut to the slot's three
    /// characters, so a blank marker restores the empty slot.
    pub fn set_marker(&mut self, x: usize, y: usize, marker: &str) {
        let west = if self.cells[y][x].west { '┃' } else { ' ' };
        let slot: String = marker.chars().chain(std::iter::repeat(' ')).take(3).collect();
        self.canvas[2 * y + 1][x] = format!("{west}{slot}");
    }

    /// Raw canvas rows, for callers that want the two-dimensional form.
    pub fn canvas_rows(&self) -> &[Vec<String>] {
        &self.canvas
    }

    /// Diagnostic dump of the canvas: one fragment array per row, with a
    /// blank line after each cell-row pair.
    pub fn array_dump(&self) -> String {
        self.canvas
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let sep = if index % 2 != 0 { ",\n\n" } else { ",\n" };
                format!("{row:?}{sep}")
            })
            .collect()
    }
}

impl fmt::Display for Maze {
    /// Joined human-readable canvas. The final canvas row belongs to the
    /// frame and carries no walls, so it is dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = &self.canvas[..self.canvas.len() - 1];
        write!(f, "{}", rows.iter().map(|row| row.iter().join("")).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Maze, Point, WALL_JUNCTIONS};

    #[test]
    fn frame_is_closed_and_pre_visited() {
        let maze = Maze::new(6, 5).unwrap();
        for x in 0..6 {
            let cell = maze.cell(Point::new(x, 4));
            assert!(cell.is_visited());
            assert!(!cell.has_west_wall());
        }
        for y in 0..5 {
            let cell = maze.cell(Point::new(5, y));
            assert!(cell.is_visited());
            assert!(!cell.has_north_wall());
        }
        assert!(!maze.cell(Point::new(0, 0)).is_visited());
    }

    #[test]
    fn candidates_stay_inside_the_interior() {
        let maze = Maze::new(6, 5).unwrap();
        // interior is 5x4: corner cells see two neighbors, middle cells four
        assert_eq!(maze.cell(Point::new(0, 0)).candidates.len(), 2);
        assert_eq!(maze.cell(Point::new(2, 2)).candidates.len(), 4);
        for row in &maze.cells {
            for cell in row {
                for (neighbor, _) in &cell.candidates {
                    assert!(maze.interior_contains(neighbor.x, neighbor.y));
                }
            }
        }
    }

    #[test]
    fn too_small_maze_is_rejected() {
        assert!(Maze::new(1, 8).is_err());
        assert!(Maze::new(8, 0).is_err());
        assert!(Maze::new(2, 2).is_ok());
    }

    #[test]
    fn fresh_maze_corners_encode_full_junctions() {
        let maze = Maze::new(5, 5).unwrap();
        assert_eq!(maze.glyph_index(0, 0), 0b1100);
        assert_eq!(maze.glyph_index(1, 0), 0b1110);
        assert_eq!(maze.glyph_index(0, 1), 0b1101);
        assert_eq!(maze.glyph_index(1, 1), 0b1111);
        assert_eq!(WALL_JUNCTIONS[maze.glyph_index(1, 1)], '╋');
        // frame column has no north wall, the top right corner turns south
        assert_eq!(WALL_JUNCTIONS[maze.glyph_index(4, 0)], '┓');
    }

    #[test]
    fn display_drops_the_frame_content_row() {
        let mut maze = Maze::new(5, 4).unwrap();
        maze.render();
        assert_eq!(format!("{maze}").lines().count(), 2 * 4 - 1);
    }

    #[test]
    fn markers_overlay_only_the_content_slot() {
        let mut maze = Maze::new(5, 4).unwrap();
        maze.render();
        let fresh = maze.canvas_rows().to_vec();

        maze.set_marker(1, 2, "PLY");
        assert_eq!(maze.canvas_rows()[5][1], "┃PLY");
        let marked = maze.canvas_rows().to_vec();

        maze.set_marker(1, 2, "PLY");
        assert_eq!(maze.canvas_rows(), marked);

        maze.set_marker(1, 2, "");
        assert_eq!(maze.canvas_rows(), fresh);
    }

    #[test]
    fn markers_are_normalized_to_the_slot_width() {
        let mut maze = Maze::new(5, 4).unwrap();
        maze.render();
        maze.set_marker(0, 0, "OVERLONG");
        assert_eq!(maze.canvas_rows()[1][0], "┃OVE");
        maze.set_marker(0, 0, "x");
        assert_eq!(maze.canvas_rows()[1][0], "┃x  ");
    }
}
