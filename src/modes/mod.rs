pub mod headless;
pub mod play;

pub use headless::{HeadlessMode, HeadlessReport};
pub use play::PlayMode;
