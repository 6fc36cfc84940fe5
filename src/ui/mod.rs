pub mod messages;
pub mod render;
pub mod style;

pub use render::{RenderOptions, render_card};
