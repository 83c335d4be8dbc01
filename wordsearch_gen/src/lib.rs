#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod candidates;
pub mod config;
pub mod direction;
pub mod generate;
pub mod order;
pub mod placement;
pub mod score;
pub mod search;

pub use config::SearchConfig;
pub use direction::Direction;
pub use generate::{generate, generate_with_rng, PuzzleResult};
pub use placement::{LetterGrid, WordPlacement};
pub use search::SearchStats;
