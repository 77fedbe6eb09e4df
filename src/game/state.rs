use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move one cell in a direction, reappearing on the opposite edge
    /// when leaving a `width` x `height` board.
    pub fn stepped_on_torus(&self, direction: Direction, width: usize, height: usize) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy).wrapped(width, height)
    }

    /// Fold the position back onto a `width` x `height` board
    pub fn wrapped(&self, width: usize, height: usize) -> Self {
        Self {
            x: self.x.rem_euclid(width as i32),
            y: self.y.rem_euclid(height as i32),
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    pub fn new(body: Vec<Position>) -> Self {
        debug_assert!(!body.is_empty(), "snake needs a head");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Check if any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake ran into one of its own segments
    SelfCollision,
}

/// What a single movement step produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved; the new state is carried here
    Moved(GameState),
    /// The new head landed on the snake. The move was not applied and the
    /// caller must reset.
    Collided(CollisionType),
}

/// Complete game state
///
/// Values of this type are never mutated by the simulation: every tick
/// produces a fresh state and the hosting loop swaps it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction used by the most recent step
    pub direction: Direction,
    pub food: Vec<Position>,
    pub score: u32,
    /// When set, the next step keeps the tail
    pub growth_pending: bool,
    pub steps: u32,
}

impl GameState {
    pub fn new(snake: Snake, food: Vec<Position>) -> Self {
        Self {
            snake,
            direction: Direction::default(),
            food,
            score: 0,
            growth_pending: false,
            steps: 0,
        }
    }

    /// The state every game starts from and every collision returns to.
    ///
    /// `config` must have a non-empty `initial_snake`, as checked by
    /// [`GameConfig::validate`].
    pub fn initial(config: &GameConfig) -> Self {
        Self::new(
            Snake::new(config.initial_snake.clone()),
            config.initial_food.clone(),
        )
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    pub fn is_food(&self, pos: Position) -> bool {
        self.food.contains(&pos)
    }

    /// Advance the snake one cell in `direction` on a `width` x `height` torus.
    ///
    /// Food is not looked at here; consumption runs as a second phase on the
    /// returned state.
    pub fn step(&self, direction: Direction, width: usize, height: usize) -> StepOutcome {
        let new_head = self.snake.head().stepped_on_torus(direction, width, height);

        if self.snake.occupies(new_head) {
            return StepOutcome::Collided(CollisionType::SelfCollision);
        }

        let mut body = Vec::with_capacity(self.snake.len() + 1);
        body.push(new_head);
        body.extend_from_slice(&self.snake.body);
        if !self.growth_pending {
            body.pop();
        }

        StepOutcome::Moved(Self {
            snake: Snake::new(body),
            direction,
            food: self.food.clone(),
            score: self.score,
            growth_pending: false,
            steps: self.steps + 1,
        })
    }
}
