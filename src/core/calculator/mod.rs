pub mod bucket;
pub mod rolling;
