//! Floating widget icon.
//!
//! Loads an image, scales it to fit the widget, centres it on a transparent
//! square and clears every pixel outside the inscribed circle. Falls back to
//! a solid circle when the image is missing or unreadable.

use std::path::Path;

use eframe::egui;
use image::imageops::{self, FilterType};
use image::{ImageError, Rgba, RgbaImage};
use tracing::{debug, warn};

use crate::model::constants::FLOATING_FALLBACK_COLOR;

/// True if the centre of pixel (x, y) lies inside the ellipse inscribed in
/// a `width` × `height` image.
pub fn inside_circle(x: u32, y: u32, width: u32, height: u32) -> bool {
    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;
    let dx = (x as f32 + 0.5 - rx) / rx;
    let dy = (y as f32 + 0.5 - ry) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Make every pixel outside the inscribed circle fully transparent.
pub fn apply_circle_mask(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if !inside_circle(x, y, width, height) {
            pixel.0[3] = 0;
        }
    }
}

/// Solid circle of the given colour on a transparent square.
pub fn solid_circle(size: u32, (r, g, b): (u8, u8, u8)) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([r, g, b, 255]));
    apply_circle_mask(&mut img);
    img
}

/// Scale, centre and circularly mask the image at `path`.
pub fn circular_icon(path: &Path, size: u32) -> Result<RgbaImage, ImageError> {
    let scaled = image::open(path)?
        .resize(size, size, FilterType::Lanczos3)
        .to_rgba8();

    let mut canvas = RgbaImage::new(size, size);
    let x = (size.saturating_sub(scaled.width())) / 2;
    let y = (size.saturating_sub(scaled.height())) / 2;
    imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));
    apply_circle_mask(&mut canvas);
    Ok(canvas)
}

/// Icon ready for upload as an egui texture.
pub fn load_icon(path: &Path, size: u32) -> egui::ColorImage {
    let img = if path.exists() {
        circular_icon(path, size).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "failed to load icon, using fallback");
            solid_circle(size, FLOATING_FALLBACK_COLOR)
        })
    } else {
        debug!(path = %path.display(), "no icon image, using fallback");
        solid_circle(size, FLOATING_FALLBACK_COLOR)
    };
    to_color_image(&img)
}

fn to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw())
}
