//! Player start and target placement.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::Point;

/// Player position and target cell, both inside the maze interior.
///
/// The two cells are re-rolled until distinct. Movement validation itself
/// belongs to the caller: a step is legal when the destination passes
/// [`Player::in_bounds`] and the live spanning tree links the two cells
/// ([`SpanningTree::is_linked`](crate::tree::SpanningTree::is_linked)).
pub struct Player {
    pos: Point,
    target: Point,
    bound_x: usize,
    bound_y: usize,
    random: StdRng,
}

impl Player {
    /// Place a player inside a `bound_x` by `bound_y` interior.
    ///
    /// Needs at least two cells, otherwise position and target cannot be
    /// kept distinct.
    pub fn new(bound_x: usize, bound_y: usize, seed: Option<u64>) -> Self {
        assert!(
            bound_x * bound_y >= 2,
            "interior of {bound_x}x{bound_y} cells cannot hold distinct player and target"
        );
        let random = if let Some(state) = seed {
            StdRng::seed_from_u64(state)
        } else {
            StdRng::from_entropy()
        };
        let mut player = Self {
            pos: Point::new(0, 0),
            target: Point::new(0, 0),
            bound_x,
            bound_y,
            random,
        };
        player.shuffle_both();
        player
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn target(&self) -> Point {
        self.target
    }

    fn random_cell(&mut self) -> Point {
        Point::new(
            self.random.gen_range(0..self.bound_x),
            self.random.gen_range(0..self.bound_y),
        )
    }

    /// Re-roll the position until it differs from the target.
    pub fn shuffle_pos(&mut self) {
        loop {
            self.pos = self.random_cell();
            if self.pos != self.target {
                break;
            }
        }
    }

    /// Re-roll the target until it differs from the position.
    pub fn shuffle_target(&mut self) {
        loop {
            self.target = self.random_cell();
            if self.target != self.pos {
                break;
            }
        }
    }

    /// Re-roll both cells.
    pub fn shuffle_both(&mut self) {
        self.pos = self.random_cell();
        self.shuffle_target();
    }

    /// Move to a cell the caller has already validated.
    pub fn move_to(&mut self, pos: Point) {
        self.pos = pos;
    }

    /// Whether the player reached the target.
    pub fn at_target(&self) -> bool {
        self.pos == self.target
    }

    /// Boundary check for an intended destination. Signed so the caller can
    /// offset a position without underflow concerns.
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && (x as usize) < self.bound_x && y >= 0 && (y as usize) < self.bound_y
    }
}
