//! Core rules engine for grid snake
//!
//! This module contains all the game rules without any I/O or rendering dependencies.
//! A front-end drives a `Session` by calling `tick` at a fixed rate and feeding it
//! `Input` events between ticks.

pub mod action;
pub mod config;
pub mod food;
pub mod grid;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use action::{Direction, Input};
pub use config::GameConfig;
pub use food::Food;
pub use grid::{Cell, Grid};
pub use session::{Collision, Session, SessionState};
pub use snake::Snake;
