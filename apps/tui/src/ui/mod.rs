mod render;
mod screens;
pub mod widgets;

pub use render::ui;
