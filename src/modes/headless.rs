//! Scripted run without a terminal
//!
//! Feeds one scripted input per tick, then keeps ticking until the game is
//! over or the tick limit is reached. Useful for reproducing a game from a
//! seed and a move list.

use log::info;

use crate::error::Result;
use crate::game::{Collision, Input, Session, SessionState};

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub state: SessionState,
    pub collision: Option<Collision>,
    pub length: usize,
    pub food_eaten: u32,
}

pub struct HeadlessMode {
    session: Session,
    script: Vec<Option<Input>>,
    max_ticks: u64,
}

impl HeadlessMode {
    pub fn new(session: Session, script: Vec<Option<Input>>, max_ticks: u64) -> Self {
        Self {
            session,
            script,
            max_ticks,
        }
    }

    /// Parse a comma separated move list. `.` or an empty entry means
    /// "no input on this tick".
    pub fn parse_script(text: &str) -> Result<Vec<Option<Input>>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        text.split(',')
            .map(|token| match token.trim() {
                "" | "." => Ok(None),
                token => token.parse::<Input>().map(Some),
            })
            .collect()
    }

    pub fn run(&mut self) -> HeadlessReport {
        let mut script = self.script.iter().copied();

        while self.session.ticks() < self.max_ticks {
            if let Some(Some(input)) = script.next() {
                self.session.handle_direction_input(input);
            }
            if self.session.tick() == SessionState::GameOver {
                break;
            }
        }

        let report = HeadlessReport {
            ticks: self.session.ticks(),
            state: self.session.state(),
            collision: self.session.collision(),
            length: self.session.snake().target_len(),
            food_eaten: self.session.food_eaten(),
        };
        info!("headless run finished: {:?}", report);
        report
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
