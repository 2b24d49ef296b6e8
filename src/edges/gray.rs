//! Colour to luma reduction and conversions into float planes.
use image::{GrayImage, Luma, RgbImage};
use ndarray::Array2;

/// ITU-R BT.601 luma, rounded to the nearest 8-bit value
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Collapse an RGB image to a single luma channel
pub fn to_gray(image: &RgbImage) -> GrayImage {
    let _span = tracing::debug_span!("to_gray").entered();

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        Luma([luma(pixel[0], pixel[1], pixel[2])])
    })
}

/// Copy a grayscale image into a (height, width) float plane
pub fn gray_plane(gray: &GrayImage) -> Array2<f32> {
    let (width, height) = gray.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        gray.get_pixel(x as u32, y as u32)[0] as f32
    })
}

/// Copy one colour channel (0 = R, 1 = G, 2 = B) into a float plane
pub fn channel_plane(image: &RgbImage, channel: usize) -> Array2<f32> {
    let (width, height) = image.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        image.get_pixel(x as u32, y as u32)[channel] as f32
    })
}
