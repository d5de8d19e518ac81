//! Grid Snake - the rules engine of a tick-driven snake game
//!
//! This library provides:
//! - Core game rules (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Per-process play metrics (metrics module)
//! - Interactive and headless runners (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

pub use error::GameError;
