//! Synthetic images shared by unit tests.

use image::{GrayImage, Luma};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect as PixelRect;

use crate::geometry::Rect;

pub(crate) const BACKGROUND: u8 = 0;
pub(crate) const CARD_STOCK: u8 = 230;
pub(crate) const ARTWORK: u8 = 60;

fn to_pixel_rect(r: Rect) -> PixelRect {
    PixelRect::at(r.x, r.y).of_size(r.width as u32, r.height as u32)
}

/// Render a light card on a dark background with a dark artwork panel.
pub(crate) fn render_card(w: u32, h: u32, card: Rect, artwork: Rect) -> GrayImage {
    let mut img = GrayImage::from_pixel(w, h, Luma([BACKGROUND]));
    draw_filled_rect_mut(&mut img, to_pixel_rect(card), Luma([CARD_STOCK]));
    draw_filled_rect_mut(&mut img, to_pixel_rect(artwork), Luma([ARTWORK]));
    img
}

/// Binary edge map containing one-pixel rectangle outlines.
pub(crate) fn outline_map(w: u32, h: u32, rects: &[Rect]) -> GrayImage {
    let mut img = GrayImage::new(w, h);
    for r in rects {
        draw_hollow_rect_mut(&mut img, to_pixel_rect(*r), Luma([255]));
    }
    img
}

/// Binary edge map containing solid rectangles (one outer border each).
pub(crate) fn filled_blobs(w: u32, h: u32, rects: &[Rect]) -> GrayImage {
    let mut img = GrayImage::new(w, h);
    for r in rects {
        draw_filled_rect_mut(&mut img, to_pixel_rect(*r), Luma([255]));
    }
    img
}

/// Binary edge map with one solid rectangle whose corners are cut by `cut`
/// pixels at 45 degrees.
pub(crate) fn chamfered_blob(w: u32, h: u32, r: Rect, cut: i32) -> GrayImage {
    let (x0, y0) = (r.x, r.y);
    let (x1, y1) = (r.right() - 1, r.bottom() - 1);
    let outline = [
        Point::new(x0 + cut, y0),
        Point::new(x1 - cut, y0),
        Point::new(x1, y0 + cut),
        Point::new(x1, y1 - cut),
        Point::new(x1 - cut, y1),
        Point::new(x0 + cut, y1),
        Point::new(x0, y1 - cut),
        Point::new(x0, y0 + cut),
    ];
    let mut img = GrayImage::new(w, h);
    draw_polygon_mut(&mut img, &outline, Luma([255]));
    img
}
