//! Color filter algorithms.
//!
//! Applies the editor's filter stack to RGB pixel data using the standard
//! filter-effects formulas, so the flattened export matches what the CSS
//! preview showed.
//!
//! ## Filter Order
//! 1. Brightness
//! 2. Contrast
//! 3. Saturate
//! 4. Grayscale
//! 5. Sepia
//! 6. Invert
//!
//! The export compositor applies brightness in its own pass after the rest of
//! the stack (see [`crate::compose`]), so the main entry point here covers
//! contrast through invert and brightness is exposed separately.

use crate::ColorAdjustments;

/// Apply the non-brightness filters to an image's pixel data in place.
///
/// # Arguments
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `adjustments` - The filter percentages to apply
pub fn apply_color_filters(pixels: &mut [u8], adjustments: &ColorAdjustments) {
    let contrast = adjustments.contrast / 100.0;
    let saturate = adjustments.saturate / 100.0;
    let grayscale = adjustments.grayscale / 100.0;
    let sepia = adjustments.sepia / 100.0;
    let invert = adjustments.invert / 100.0;

    // Early exit if everything except brightness is at identity
    if contrast == 1.0 && saturate == 1.0 && grayscale == 0.0 && sepia == 0.0 && invert == 0.0 {
        return;
    }

    for chunk in pixels.chunks_exact_mut(3) {
        let mut r = chunk[0] as f32 / 255.0;
        let mut g = chunk[1] as f32 / 255.0;
        let mut b = chunk[2] as f32 / 255.0;

        (r, g, b) = apply_contrast(r, g, b, contrast);
        (r, g, b) = apply_saturate(r, g, b, saturate);
        (r, g, b) = apply_grayscale(r, g, b, grayscale);
        (r, g, b) = apply_sepia(r, g, b, sepia);
        (r, g, b) = apply_invert(r, g, b, invert);

        chunk[0] = (r.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[1] = (g.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[2] = (b.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

/// Apply the brightness filter to an image's pixel data in place.
///
/// Brightness is a uniform luminance scale: every channel is multiplied by
/// `brightness / 100`. It runs as its own pass so the compositor can apply it
/// after the geometry and color passes, matching the preview result.
pub fn apply_brightness(pixels: &mut [u8], brightness: f32) {
    let factor = brightness / 100.0;
    if factor == 1.0 {
        return;
    }

    for value in pixels.iter_mut() {
        let scaled = *value as f32 * factor;
        *value = scaled.clamp(0.0, 255.0).round() as u8;
    }
}

/// Calculate luminance using the filter-effects matrix coefficients.
#[inline]
fn luminance(r: f32, g: f32, b: f32) -> f32 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast: scale each channel around the 50% midpoint.
///
/// `output = (input - 0.5) * amount + 0.5`
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 1.0 {
        return (r, g, b);
    }
    (
        (r - 0.5) * amount + 0.5,
        (g - 0.5) * amount + 0.5,
        (b - 0.5) * amount + 0.5,
    )
}

/// Saturate: interpolate between luminance gray and the original color.
///
/// Amounts above 1 over-saturate by extrapolating past the original.
#[inline]
fn apply_saturate(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 1.0 {
        return (r, g, b);
    }
    let gray = luminance(r, g, b);
    (
        gray + (r - gray) * amount,
        gray + (g - gray) * amount,
        gray + (b - gray) * amount,
    )
}

/// Grayscale: mix each channel toward the pixel's luminance.
#[inline]
fn apply_grayscale(r: f32, g: f32, b: f32, mix: f32) -> (f32, f32, f32) {
    if mix == 0.0 {
        return (r, g, b);
    }
    let gray = luminance(r, g, b);
    (
        r + (gray - r) * mix,
        g + (gray - g) * mix,
        b + (gray - b) * mix,
    )
}

/// Sepia: mix toward the sepia-toned matrix transform of the pixel.
#[inline]
fn apply_sepia(r: f32, g: f32, b: f32, mix: f32) -> (f32, f32, f32) {
    if mix == 0.0 {
        return (r, g, b);
    }
    let sr = 0.393 * r + 0.769 * g + 0.189 * b;
    let sg = 0.349 * r + 0.686 * g + 0.168 * b;
    let sb = 0.272 * r + 0.534 * g + 0.131 * b;
    (
        r + (sr - r) * mix,
        g + (sg - g) * mix,
        b + (sb - b) * mix,
    )
}

/// Invert: mix each channel toward its complement.
#[inline]
fn apply_invert(r: f32, g: f32, b: f32, mix: f32) -> (f32, f32, f32) {
    if mix == 0.0 {
        return (r, g, b);
    }
    (
        r + (1.0 - 2.0 * r) * mix,
        g + (1.0 - 2.0 * g) * mix,
        b + (1.0 - 2.0 * b) * mix,
    )
}
