//! The hosting loop's view of a running game.
//!
//! [`GameSession`] owns the current [`GameState`] and the direction the next
//! tick will use. [`Ticker`] is the tick clock: it fires once right away,
//! then every interval, and restarts from "right away" whenever it is
//! re-armed.

use log::info;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::time::Duration;
use tokio::time::{Instant, Interval, interval};

use crate::game::{Direction, GameEngine, GameState, TickInfo};

pub struct GameSession<R = ThreadRng> {
    engine: GameEngine<R>,
    state: GameState,
    pending_direction: Direction,
}

impl<R: Rng> GameSession<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        let state = engine.reset();
        Self {
            pending_direction: state.direction,
            engine,
            state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Overwrite the pending direction. Returns true when it changed, which
    /// is the caller's cue to re-arm the tick clock.
    pub fn steer(&mut self, direction: Direction) -> bool {
        let changed = self.pending_direction != direction;
        self.pending_direction = direction;
        changed
    }

    /// Advance one tick with the pending direction.
    ///
    /// A collision also puts the pending direction back to the default one,
    /// so a fresh snake never replays the move that just killed it.
    pub fn tick(&mut self) -> TickInfo {
        let result = self.engine.tick(&self.state, self.pending_direction);
        self.state = result.state;
        if result.info.collision.is_some() {
            self.pending_direction = self.state.direction;
        }
        result.info
    }

    /// Start over from the default state
    pub fn restart(&mut self) {
        info!("restart requested at score {}", self.state.score);
        self.state = self.engine.reset();
        self.pending_direction = self.state.direction;
    }
}

/// Whether a tick changed something the clock is re-armed on: the food
/// (eaten or reset) and the growth-pending flag.
pub fn tick_rearms(info: &TickInfo) -> bool {
    info.ate_food || info.growth_cleared || info.collision.is_some()
}

/// Tick clock with an immediate first tick
pub struct Ticker {
    interval: Interval,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            interval: interval(period),
        }
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) -> Instant {
        self.interval.tick().await
    }

    /// Fire on the next poll, then resume the regular period from there
    pub fn rearm(&mut self) {
        self.interval.reset_immediately();
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, GameConfig, Position};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> GameSession<StdRng> {
        GameSession::new(GameEngine::with_rng(
            GameConfig::default(),
            StdRng::seed_from_u64(3),
        ))
    }

    #[test]
    fn test_starts_from_defaults() {
        let session = session();
        assert_eq!(session.state().snake.head(), Position::new(8, 12));
        assert_eq!(session.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_steer_reports_changes_only() {
        let mut session = session();
        assert!(!session.steer(Direction::Right));
        assert!(session.steer(Direction::Top));
        assert!(!session.steer(Direction::Top));
        assert_eq!(session.pending_direction(), Direction::Top);
    }

    #[test]
    fn test_latest_steer_wins() {
        let mut session = session();
        session.steer(Direction::Top);
        session.steer(Direction::Bottom);
        session.tick();
        assert_eq!(session.state().snake.head(), Position::new(8, 13));
    }

    #[test]
    fn test_reversal_resets_and_restores_direction() {
        let mut session = session();
        session.tick();
        session.steer(Direction::Left);

        let info = session.tick();

        assert_eq!(info.collision, Some(CollisionType::SelfCollision));
        assert!(tick_rearms(&info));
        assert_eq!(session.state().score, 0);
        assert_eq!(session.pending_direction(), Direction::Right);

        // The fresh snake moves on instead of dying again
        let info = session.tick();
        assert_eq!(info.collision, None);
        assert_eq!(session.state().snake.head(), Position::new(9, 12));
    }

    #[test]
    fn test_restart() {
        let mut session = session();
        session.steer(Direction::Bottom);
        session.tick();
        session.tick();

        session.restart();

        assert_eq!(session.state(), &session.engine().reset());
        assert_eq!(session.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_plain_move_does_not_rearm() {
        let mut session = session();
        let info = session.tick();
        assert!(!tick_rearms(&info));
    }

    #[test]
    fn test_meal_and_following_growth_both_rearm() {
        let mut session = session();
        session.state.food = vec![Position::new(9, 12)];

        let meal = session.tick();
        assert!(meal.ate_food);
        assert!(tick_rearms(&meal));

        session.state.food = vec![Position::new(0, 0)];
        let growth = session.tick();
        assert!(!growth.ate_food);
        assert!(growth.growth_cleared);
        assert!(!session.state().growth_pending);
        assert!(tick_rearms(&growth));

        let plain = session.tick();
        assert!(!tick_rearms(&plain));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_fires_immediately_then_on_period() {
        let mut ticker = Ticker::new(Duration::from_millis(500));
        assert_eq!(ticker.period(), Duration::from_millis(500));

        let start = Instant::now();
        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::ZERO);

        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_restarts_the_cadence() {
        let mut ticker = Ticker::new(Duration::from_millis(500));
        ticker.tick().await;

        tokio::time::advance(Duration::from_millis(200)).await;
        ticker.rearm();

        let rearmed_at = Instant::now();
        ticker.tick().await;
        assert_eq!(rearmed_at.elapsed(), Duration::ZERO);

        ticker.tick().await;
        assert_eq!(rearmed_at.elapsed(), Duration::from_millis(500));
    }
}
