#![forbid(unsafe_code)]

pub mod display;
pub mod engine;
pub mod error;
pub mod session;
pub mod shuffle;

pub use quiz_core::Clock;

pub use display::DisplayInstruction;
pub use engine::QuizEngine;
pub use error::QuizError;
pub use session::QuizSession;
pub use shuffle::ShuffleStyle;
