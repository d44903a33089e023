use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use imageproc::point::Point;

use crate::annotation::domain::annotation_renderer::AnnotationRenderer;
use crate::annotation::domain::annotations::DrawCommand;
use crate::annotation::infrastructure::stroke_font::{glyph, CAP_HEIGHT};
use crate::shared::constants::HIGHLIGHT;

/// Renders outlines and labels as thick strokes in a single colour.
pub struct StrokeRenderer {
    color: Rgb<u8>,
}

impl StrokeRenderer {
    pub fn new(color: Rgb<u8>) -> Self {
        Self { color }
    }
}

impl Default for StrokeRenderer {
    fn default() -> Self {
        Self::new(HIGHLIGHT)
    }
}

impl AnnotationRenderer for StrokeRenderer {
    fn render(&self, image: &RgbImage, commands: &[DrawCommand]) -> RgbImage {
        let mut canvas = image.clone();
        for command in commands {
            match command {
                DrawCommand::Outline { points, thickness } => {
                    draw_closed_polyline(&mut canvas, points, *thickness, self.color);
                }
                DrawCommand::Label {
                    origin,
                    text,
                    scale,
                    thickness,
                } => {
                    draw_text(&mut canvas, text, *origin, *scale, *thickness, self.color);
                }
            }
        }
        canvas
    }
}

fn draw_closed_polyline(canvas: &mut RgbImage, points: &[Point<i32>], thickness: u32, color: Rgb<u8>) {
    let Some(&last) = points.last() else {
        return;
    };
    let mut prev = last;
    for &p in points {
        draw_thick_segment(
            canvas,
            (prev.x as f32, prev.y as f32),
            (p.x as f32, p.y as f32),
            thickness,
            color,
        );
        prev = p;
    }
}

/// Draws `text` with its baseline starting at `origin`.
fn draw_text(
    canvas: &mut RgbImage,
    text: &str,
    origin: (i32, i32),
    scale: f32,
    thickness: u32,
    color: Rgb<u8>,
) {
    let baseline = origin.1 as f32;
    let mut pen_x = origin.0 as f32;
    for ch in text.chars() {
        let Some(g) = glyph(ch) else {
            log::debug!("No glyph for {ch:?}; leaving a gap");
            pen_x += glyph(' ').map_or(0.0, |space| space.advance) * scale;
            continue;
        };
        let to_px = |(x, y): (i8, i8)| {
            (
                pen_x + x as f32 * scale,
                baseline - (CAP_HEIGHT - y as f32) * scale,
            )
        };
        for stroke in g.strokes {
            match stroke.len() {
                0 => {}
                1 => {
                    let p = to_px(stroke[0]);
                    draw_thick_segment(canvas, p, p, thickness, color);
                }
                _ => {
                    for pair in stroke.windows(2) {
                        draw_thick_segment(canvas, to_px(pair[0]), to_px(pair[1]), thickness, color);
                    }
                }
            }
        }
        pen_x += g.advance * scale;
    }
}

/// Stamps discs of diameter ~`thickness` along the segment, one per pixel step.
fn draw_thick_segment(
    canvas: &mut RgbImage,
    from: (f32, f32),
    to: (f32, f32),
    thickness: u32,
    color: Rgb<u8>,
) {
    let radius = (thickness / 2) as i32;
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (from.0 + dx * t).round() as i32;
        let y = (from.1 + dy * t).round() as i32;
        draw_filled_circle_mut(canvas, (x, y), radius, color);
    }
}
