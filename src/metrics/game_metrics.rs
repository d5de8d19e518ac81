use std::time::{Duration, Instant};

use crate::game::{Collision, Session};

/// Summary of one finished game
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub length: usize,
    pub food_eaten: u32,
    pub ticks: u64,
    pub collision: Option<Collision>,
}

impl GameRecord {
    pub fn from_session(session: &Session) -> Self {
        Self {
            length: session.snake().target_len(),
            food_eaten: session.food_eaten(),
            ticks: session.ticks(),
            collision: session.collision(),
        }
    }
}

/// Finished games and the clock of the current one, kept in memory for the
/// life of the process.
pub struct GameMetrics {
    games: Vec<GameRecord>,
    game_started: Instant,
    game_time: Duration,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            games: Vec::new(),
            game_started: Instant::now(),
            game_time: Duration::ZERO,
        }
    }

    pub fn on_game_start(&mut self) {
        self.game_started = Instant::now();
        self.game_time = Duration::ZERO;
    }

    /// Advance the clock; it stays frozen once the game is over
    pub fn on_frame(&mut self, running: bool) {
        if running {
            self.game_time = self.game_started.elapsed();
        }
    }

    pub fn on_game_over(&mut self, session: &Session) {
        let record = GameRecord::from_session(session);
        self.games.push(record);
    }

    pub fn games_played(&self) -> usize {
        self.games.len()
    }

    pub fn last_game(&self) -> Option<&GameRecord> {
        self.games.last()
    }

    pub fn longest_snake(&self) -> usize {
        self.games.iter().map(|g| g.length).max().unwrap_or(0)
    }

    pub fn most_food(&self) -> u32 {
        self.games.iter().map(|g| g.food_eaten).max().unwrap_or(0)
    }

    /// Game time as mm:ss
    pub fn game_clock(&self) -> String {
        format_clock(self.game_time)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn format_clock(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameConfig, SessionState};

    fn finished_session(meals: usize) -> Session {
        let mut session = Session::with_seed(GameConfig::new(200, 100), 9).unwrap();
        for _ in 0..meals {
            let head = session.snake().head();
            session.place_food(head);
            session.tick();
        }
        session.place_food(Cell::new(0, 0));
        while session.tick() == SessionState::Running {}
        session
    }

    #[test]
    fn test_clock_format() {
        assert_eq!(format_clock(Duration::from_secs(0)), "00:00");
        assert_eq!(format_clock(Duration::from_millis(125_900)), "02:05");
        assert_eq!(format_clock(Duration::from_secs(3661)), "61:01");
    }

    #[test]
    fn test_record_from_finished_session() {
        let session = finished_session(2);
        let record = GameRecord::from_session(&session);

        assert_eq!(record.length, 5);
        assert_eq!(record.food_eaten, 2);
        assert_eq!(record.collision, Some(Collision::Wall));
        // start x = 100 on a 200 wide board: 10 moves to the wall, one tick to notice
        assert_eq!(record.ticks, 11);
    }

    #[test]
    fn test_best_values_across_games() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.longest_snake(), 0);
        assert!(metrics.last_game().is_none());

        metrics.on_game_over(&finished_session(3));
        metrics.on_game_over(&finished_session(1));

        assert_eq!(metrics.games_played(), 2);
        assert_eq!(metrics.longest_snake(), 6);
        assert_eq!(metrics.most_food(), 3);
        assert_eq!(metrics.last_game().map(|g| g.length), Some(4));
    }

    #[test]
    fn test_clock_frozen_while_not_running() {
        let mut metrics = GameMetrics::new();
        metrics.on_frame(false);
        assert_eq!(metrics.game_time, Duration::ZERO);
        assert_eq!(metrics.game_clock(), "00:00");
    }
}
