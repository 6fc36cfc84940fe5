pub mod aggregator;
pub mod calculator;
pub mod card;
pub mod colors;
pub mod generators;
pub mod normalize;
pub mod resolver;
pub mod scheduler;
