use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect as PixelRect;

/// Light card with a dark artwork panel on a dark background.
pub fn card_image(w: u32, h: u32, card: [i32; 4], artwork: [i32; 4]) -> GrayImage {
    let mut img = GrayImage::from_pixel(w, h, Luma([10]));
    for (r, v) in [(card, 235u8), (artwork, 70u8)] {
        let rect = PixelRect::at(r[0], r[1]).of_size(r[2] as u32, r[3] as u32);
        draw_filled_rect_mut(&mut img, rect, Luma([v]));
    }
    img
}

pub fn encode_png(img: &GrayImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img.clone())
        .write_to(&mut std::io::Cursor::new(&mut buf), ImageFormat::Png)
        .expect("png encoding");
    buf
}
