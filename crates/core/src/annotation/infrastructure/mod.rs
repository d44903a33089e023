pub mod stroke_font;
pub mod stroke_renderer;
