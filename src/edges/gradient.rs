//! Horizontal Sobel derivative on float planes.
//!
//! - Convolves a 3×3 kernel with border replication (coordinates are
//!   clamped to the nearest valid pixel), so output size equals input size.
//! - `magnitude` turns the signed derivative into a non-negative edge map.
use ndarray::Array2;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

fn convolve3(plane: &Array2<f32>, kernel: &Kernel3) -> Array2<f32> {
    let (h, w) = plane.dim();
    let mut out = Array2::<f32>::zeros((h, w));

    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum = 0.0;
            for (k_row, &yy) in kernel.iter().zip(y_idx.iter()) {
                sum += plane[[yy, x_idx[0]]] * k_row[0]
                    + plane[[yy, x_idx[1]]] * k_row[1]
                    + plane[[yy, x_idx[2]]] * k_row[2];
            }
            out[[y, x]] = sum;
        }
    }

    out
}

/// Signed first derivative along x (3×3 Sobel)
pub fn horizontal_sobel(plane: &Array2<f32>) -> Array2<f32> {
    let _span = tracing::debug_span!("horizontal_sobel").entered();
    convolve3(plane, &SOBEL_KERNEL_X)
}

/// Absolute value of every sample
pub fn magnitude(gradient: &Array2<f32>) -> Array2<f32> {
    gradient.mapv(f32::abs)
}
