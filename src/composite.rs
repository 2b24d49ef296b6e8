//! Weighted blend of the original and smoothed frames.
use crate::edges::WeightMap;
use crate::error::{PipelineError, Result};
use image::{Rgb, RgbImage};

/// Round to nearest and saturate into the 8-bit range
#[inline]
pub fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// `original * weight + smoothed * (1 - weight)` for one sample
#[inline]
pub fn blend(original: u8, smoothed: u8, weight: f32) -> f32 {
    original as f32 * weight + smoothed as f32 * (1.0 - weight)
}

fn ensure_shape(expected: (u32, u32), actual: (u32, u32)) -> Result<()> {
    if expected != actual {
        return Err(PipelineError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

/// Blend `original` and `smoothed` channel by channel using `weight`
///
/// All three inputs must share the same width and height; nothing is
/// cropped or tiled to make them fit.
pub fn composite(original: &RgbImage, smoothed: &RgbImage, weight: &WeightMap) -> Result<RgbImage> {
    let _span = tracing::debug_span!("composite").entered();

    let (width, height) = original.dimensions();
    ensure_shape((width, height), smoothed.dimensions())?;
    let (weight_h, weight_w) = weight.dim();
    ensure_shape((width, height), (weight_w as u32, weight_h as u32))?;

    let mut output = RgbImage::new(width, height);
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let w = weight[[y as usize, x as usize]];
        let o = original.get_pixel(x, y);
        let s = smoothed.get_pixel(x, y);
        *pixel = Rgb([
            quantize(blend(o[0], s[0], w)),
            quantize(blend(o[1], s[1], w)),
            quantize(blend(o[2], s[2], w)),
        ]);
    }

    Ok(output)
}

/// Render a weight map as a grayscale RGB image for inspection
pub fn weight_to_rgb(weight: &WeightMap) -> RgbImage {
    let (height, width) = weight.dim();
    RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let value = quantize(weight[[y as usize, x as usize]] * 255.0);
        Rgb([value, value, value])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn gradient_frame(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 30) as u8, (y * 40) as u8, ((x + y) * 10) as u8])
        })
    }

    #[test]
    fn quantize_clamps_instead_of_wrapping() {
        assert_eq!(quantize(-50.0), 0);
        assert_eq!(quantize(400.0), 255);
        assert_eq!(quantize(254.6), 255);
        assert_eq!(quantize(12.4), 12);
        assert_eq!(quantize(12.5), 13);
    }

    #[test]
    fn full_weight_keeps_original() {
        let original = gradient_frame(5, 4);
        let smoothed = RgbImage::from_pixel(5, 4, Rgb([9, 9, 9]));
        let weight = Array2::from_elem((4, 5), 1.0);
        assert_eq!(composite(&original, &smoothed, &weight).unwrap(), original);
    }

    #[test]
    fn zero_weight_takes_smoothed() {
        let original = gradient_frame(5, 4);
        let smoothed = RgbImage::from_pixel(5, 4, Rgb([9, 90, 200]));
        let weight = Array2::zeros((4, 5));
        assert_eq!(composite(&original, &smoothed, &weight).unwrap(), smoothed);
    }

    #[test]
    fn half_weight_averages_each_channel() {
        let original = RgbImage::from_pixel(2, 2, Rgb([100, 0, 255]));
        let smoothed = RgbImage::from_pixel(2, 2, Rgb([200, 50, 0]));
        let weight = Array2::from_elem((2, 2), 0.5);
        let out = composite(&original, &smoothed, &weight).unwrap();
        assert!(out.pixels().all(|p| *p == Rgb([150, 25, 128])));
    }

    #[test]
    fn out_of_range_blend_saturates() {
        let original = RgbImage::from_pixel(2, 1, Rgb([200, 50, 0]));
        let smoothed = RgbImage::from_pixel(2, 1, Rgb([0, 0, 0]));
        // 200 * 2.0 = 400, 50 * -1.0 = -50
        let weight = ndarray::array![[2.0, -1.0]];
        let out = composite(&original, &smoothed, &weight).unwrap();
        assert_eq!(out.get_pixel(0, 0)[0], 255);
        assert_eq!(out.get_pixel(1, 0)[1], 0);
    }

    #[test]
    fn mismatched_weight_is_rejected() {
        let original = gradient_frame(4, 4);
        let smoothed = gradient_frame(4, 4);
        let weight = Array2::zeros((3, 4));
        let err = composite(&original, &smoothed, &weight).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::ShapeMismatch {
                expected: (4, 4),
                actual: (4, 3)
            }
        ));
    }

    #[test]
    fn mismatched_smoothed_is_rejected() {
        let original = gradient_frame(4, 4);
        let smoothed = gradient_frame(5, 4);
        let weight = Array2::zeros((4, 4));
        assert!(matches!(
            composite(&original, &smoothed, &weight),
            Err(PipelineError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn weight_visualization_spans_black_to_white() {
        let weight = ndarray::array![[0.0, 0.5, 1.0]];
        let rgb = weight_to_rgb(&weight);
        assert_eq!(rgb.dimensions(), (3, 1));
        assert_eq!(*rgb.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*rgb.get_pixel(1, 0), Rgb([128, 128, 128]));
        assert_eq!(*rgb.get_pixel(2, 0), Rgb([255, 255, 255]));
    }
}
