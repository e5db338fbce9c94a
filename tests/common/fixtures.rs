//! Test images written to scratch directories.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Save `img` as PNG at `dir/name`, creating parent folders.
pub fn save_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    img.save(&path).unwrap();
    path
}

/// 2x2 image with four distinct colors, not in RGB order.
pub fn four_color_2x2() -> RgbaImage {
    let pixels = [RED, GREEN, BLUE, BLACK];
    RgbaImage::from_fn(2, 2, |x, y| pixels[(y * 2 + x) as usize])
}

/// Fully transparent image.
pub fn transparent(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, CLEAR)
}

/// Heart-ish sprite: red shape on a transparent background.
pub fn sprite(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let (cx, cy) = (x as i32 - size as i32 / 2, y as i32 - size as i32 / 2);
        if cx * cx + cy * cy <= (size as i32 / 3).pow(2) {
            if y < size / 2 {
                RED
            } else {
                Rgba([180, 0, 20, 255])
            }
        } else {
            CLEAR
        }
    })
}

/// Smooth gradient with many distinct colors.
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 127 / (width + height).max(1)) as u8,
            255,
        ])
    })
}
