use log::{debug, info};
use rand::Rng;
use rand::rngs::ThreadRng;

use super::{
    config::GameConfig,
    direction::Direction,
    food::{replace_eaten, spawn_food},
    state::{CollisionType, GameState, StepOutcome},
};

/// Information about a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInfo {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision that forced a reset, if any
    pub collision: Option<CollisionType>,
    /// Growth was pending before this tick and is no longer
    pub growth_cleared: bool,
}

/// Result of a game tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    /// State to show and to feed into the next tick
    pub state: GameState,
    pub info: TickInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`.
    ///
    /// `config` is expected to have passed [`GameConfig::validate`]; an empty
    /// initial snake makes [`reset`](Self::reset) produce a state whose
    /// `head()` panics.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh default state: starting snake, starting food, zero score
    pub fn reset(&self) -> GameState {
        GameState::initial(&self.config)
    }

    /// Run one tick: move, then settle food.
    ///
    /// On self-collision the whole state is thrown away and the defaults come
    /// back in the same tick.
    pub fn tick(&mut self, state: &GameState, direction: Direction) -> TickResult {
        let moved = match state.step(direction, self.config.grid_width, self.config.grid_height) {
            StepOutcome::Moved(moved) => moved,
            StepOutcome::Collided(collision) => {
                info!(
                    "{:?} at score {} after {} steps, resetting",
                    collision, state.score, state.steps
                );
                return TickResult {
                    state: self.reset(),
                    info: TickInfo {
                        ate_food: false,
                        collision: Some(collision),
                        growth_cleared: false,
                    },
                };
            }
        };

        let had_growth = state.growth_pending;
        let (state, ate_food) = self.consume_food(moved);

        TickResult {
            info: TickInfo {
                ate_food,
                collision: None,
                growth_cleared: had_growth && !state.growth_pending,
            },
            state,
        }
    }

    /// Second phase of a tick: score, growth and respawn when the head is on food
    fn consume_food(&mut self, mut state: GameState) -> (GameState, bool) {
        let head = state.snake.head();
        if !state.is_food(head) {
            return (state, false);
        }

        let remaining: Vec<_> = state.food.iter().copied().filter(|&pos| pos != head).collect();
        let replacement = spawn_food(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            &state.snake,
            &remaining,
        );

        state.score += 1;
        state.growth_pending = true;
        state.food = replace_eaten(&state.food, head, replacement);

        debug!(
            "ate food at ({}, {}), score {}, next food {:?}",
            head.x, head.y, state.score, replacement
        );

        (state, true)
    }
}
