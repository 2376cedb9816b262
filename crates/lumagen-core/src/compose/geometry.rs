//! Pixel-space geometry: crop copy, mirror flips, quarter-turn rotation.
//!
//! Rotation in the editor is always a multiple of 90 degrees, so every
//! operation here is an exact index remap - no resampling, no interpolation,
//! and therefore no pixel-value drift between preview and export.

use crate::{Raster, Rotation};

/// Copy a region out of a source raster.
///
/// The caller guarantees the region lies within the source bounds (the
/// compositor's coordinate mapping clamps before calling) and has non-zero
/// dimensions.
pub fn crop_region(src: &Raster, x: u32, y: u32, width: u32, height: u32) -> Raster {
    debug_assert!(x + width <= src.width && y + height <= src.height);

    if x == 0 && y == 0 && width == src.width && height == src.height {
        return src.clone();
    }

    let mut output = Vec::with_capacity((width * height * 3) as usize);
    for row in 0..height {
        let src_row = (y + row) as usize * src.width as usize * 3;
        let start = src_row + x as usize * 3;
        let end = start + width as usize * 3;
        output.extend_from_slice(&src.pixels[start..end]);
    }

    Raster::new(width, height, output)
}

/// Mirror the raster left-to-right in place.
pub fn flip_horizontal(img: &mut Raster) {
    let row_len = img.width as usize * 3;
    for row in img.pixels.chunks_exact_mut(row_len) {
        let mut left = 0;
        let mut right = img.width as usize - 1;
        while left < right {
            for c in 0..3 {
                row.swap(left * 3 + c, right * 3 + c);
            }
            left += 1;
            right -= 1;
        }
    }
}

/// Mirror the raster top-to-bottom in place.
pub fn flip_vertical(img: &mut Raster) {
    let row_len = img.width as usize * 3;
    let height = img.height as usize;
    for top in 0..height / 2 {
        let bottom = height - 1 - top;
        let (a, b) = img.pixels.split_at_mut(bottom * row_len);
        a[top * row_len..top * row_len + row_len].swap_with_slice(&mut b[..row_len]);
    }
}

/// Rotate the raster by an exact quarter turn (clockwise convention).
///
/// Uses inverse mapping: for each output pixel, read the one source pixel
/// that lands there. 90- and 270-degree turns swap the output dimensions.
pub fn rotate_quarter(src: Raster, rotation: Rotation) -> Raster {
    if rotation == Rotation::Deg0 {
        return src;
    }

    let (src_w, src_h) = (src.width as usize, src.height as usize);
    let (dst_w, dst_h) = if rotation.swaps_dimensions() {
        (src_h, src_w)
    } else {
        (src_w, src_h)
    };

    let mut output = vec![0u8; dst_w * dst_h * 3];
    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let (src_x, src_y) = match rotation {
                Rotation::Deg90 => (dst_y, src_h - 1 - dst_x),
                Rotation::Deg180 => (src_w - 1 - dst_x, src_h - 1 - dst_y),
                Rotation::Deg270 => (src_w - 1 - dst_y, dst_x),
                Rotation::Deg0 => unreachable!(),
            };

            let src_idx = (src_y * src_w + src_x) * 3;
            let dst_idx = (dst_y * dst_w + dst_x) * 3;
            output[dst_idx..dst_idx + 3].copy_from_slice(&src.pixels[src_idx..src_idx + 3]);
        }
    }

    Raster::new(dst_w as u32, dst_h as u32, output)
}
