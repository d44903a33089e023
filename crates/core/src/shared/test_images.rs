//! Synthetic dice scenes shared by unit tests.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

pub const DIE_SIDE: u32 = 150;
pub const PIP_RADIUS: i32 = 10;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Pip offsets, relative to the die's top-left corner, for a standard face.
pub fn face(pips: usize) -> Vec<(i32, i32)> {
    let (lo, mid, hi) = (35, 75, 115);
    match pips {
        1 => vec![(mid, mid)],
        2 => vec![(lo, lo), (hi, hi)],
        3 => vec![(lo, lo), (mid, mid), (hi, hi)],
        4 => vec![(lo, lo), (hi, lo), (lo, hi), (hi, hi)],
        5 => vec![(lo, lo), (hi, lo), (mid, mid), (lo, hi), (hi, hi)],
        6 => vec![(lo, lo), (hi, lo), (lo, mid), (hi, mid), (lo, hi), (hi, hi)],
        _ => panic!("no standard face with {pips} pips"),
    }
}

pub fn black_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, BLACK)
}

/// Draws a white die with black pips at `(x, y)`.
pub fn draw_die(image: &mut RgbImage, x: i32, y: i32, pips: usize) {
    draw_filled_rect_mut(image, Rect::at(x, y).of_size(DIE_SIDE, DIE_SIDE), WHITE);
    for (dx, dy) in face(pips) {
        draw_filled_circle_mut(image, (x + dx, y + dy), PIP_RADIUS, BLACK);
    }
}

/// Two dice side by side: 3 pips on the left, 5 on the right.
pub fn two_dice_scene() -> RgbImage {
    let mut image = black_canvas(480, 260);
    draw_die(&mut image, 50, 50, 3);
    draw_die(&mut image, 280, 60, 5);
    image
}

pub fn white_gray(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([255]))
}

pub fn black_gray(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([0]))
}
