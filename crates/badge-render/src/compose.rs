//! Image composition: alpha overlay and solid fills.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Overlay `top` onto `base` at the given position using source-over
/// alpha compositing. Pixels falling outside `base` are dropped.
pub fn overlay(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x >= base.width() || target_y >= base.height() {
            continue;
        }
        let alpha = pixel[3] as f32 / 255.0;
        if alpha > 0.99 {
            base.put_pixel(target_x, target_y, *pixel);
        } else if alpha > 0.01 {
            let bg = *base.get_pixel(target_x, target_y);
            base.put_pixel(target_x, target_y, blend_pixel(&bg, pixel, alpha));
        }
    }
}

/// Fill a rectangle; zero-sized rectangles are ignored.
pub fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    if width == 0 || height == 0 {
        return;
    }
    draw_filled_rect_mut(
        img,
        Rect::at(x as i32, y as i32).of_size(width, height),
        color,
    );
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let bg_alpha = bg[3] as f32 / 255.0;
    let out_alpha = alpha + bg_alpha * (1.0 - alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |i: usize| {
        let c = (fg[i] as f32 * alpha + bg[i] as f32 * bg_alpha * (1.0 - alpha)) / out_alpha;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_alpha * 255.0).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_does_not_panic_on_out_of_bounds() {
        let mut base = RgbaImage::new(100, 100);
        let top = RgbaImage::from_pixel(50, 50, Rgba([255, 0, 0, 255]));
        overlay(&mut base, &top, 80, 80);
        assert_eq!(base.get_pixel(99, 99), &Rgba([255, 0, 0, 255]));
        assert_eq!(base.get_pixel(79, 79), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn transparent_pixels_leave_base_untouched() {
        let mut base = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let top = RgbaImage::new(4, 4);
        overlay(&mut base, &top, 0, 0);
        assert!(base.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn half_alpha_blends_over_opaque() {
        let mut base = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let top = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        overlay(&mut base, &top, 0, 0);
        let px = base.get_pixel(0, 0);
        assert_eq!(px[3], 255);
        assert!((126..=130).contains(&px[0]));
    }

    #[test]
    fn fill_rect_paints_area_and_ignores_empty() {
        let mut img = RgbaImage::new(10, 10);
        fill_rect(&mut img, 2, 2, 3, 3, Rgba([1, 2, 3, 255]));
        fill_rect(&mut img, 0, 0, 0, 5, Rgba([9, 9, 9, 255]));
        assert_eq!(img.get_pixel(2, 2), &Rgba([1, 2, 3, 255]));
        assert_eq!(img.get_pixel(4, 4), &Rgba([1, 2, 3, 255]));
        assert_eq!(img.get_pixel(5, 5), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }
}
