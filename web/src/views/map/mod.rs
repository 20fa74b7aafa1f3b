pub mod map_renderer;
pub mod position_button;
