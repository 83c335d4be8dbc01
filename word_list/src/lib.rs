mod dimensions;
mod word_list;

pub use dimensions::{estimate_side, grid_dimensions, MAX_GRID_CELLS, MIN_ESTIMATED_SIDE};
pub use word_list::{WordEntry, WordList};
