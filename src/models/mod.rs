pub mod day;
pub mod entity;
pub mod grid;
pub mod segment;
pub mod state;
pub mod threshold;
