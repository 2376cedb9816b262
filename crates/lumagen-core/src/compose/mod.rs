//! Export compositing.
//!
//! Flattens an edit session onto the source image's native-resolution pixels
//! and encodes the result for download. The pipeline order is fixed:
//!
//! 1. Map the applied crop from displayed coordinates to source pixels
//! 2. Crop the source region
//! 3. Mirror flips, then the quarter-turn rotation
//! 4. Color filters (contrast, saturate, grayscale, sepia, invert)
//! 5. Brightness, as its own trailing pass
//! 6. JPEG encode
//!
//! The compositor is handed the displayed image dimensions instead of reading
//! them from a rendered element, so it is deterministic and testable without
//! any rendering surface.

mod geometry;

pub use geometry::{crop_region, flip_horizontal, flip_vertical, rotate_quarter};

use thiserror::Error;

use crate::encode::{encode_jpeg, EncodeError};
use crate::filters::{apply_brightness, apply_color_filters};
use crate::raster::{Raster, RasterError};
use crate::{CropRect, EditSession};

/// JPEG quality used for every export.
pub const EXPORT_JPEG_QUALITY: u8 = 90;

/// Errors raised by an export attempt. Every variant is terminal for the
/// attempt; the caller reports it and never retries automatically.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The source bytes could not be decoded into a drawable form.
    #[error("could not load the image for export: {0}")]
    ImageLoad(#[from] RasterError),

    /// The off-screen output surface could not be acquired.
    #[error("drawing surface unavailable")]
    ContextUnavailable,

    /// The final encode failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// The size the source image was actually rendered at on screen.
///
/// The ratio between this and the native resolution converts crop
/// coordinates from preview space into source pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
}

impl DisplaySize {
    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// The filename the exported bytes should be persisted under.
pub fn export_file_name(edited: bool) -> &'static str {
    if edited {
        "edited-image.jpeg"
    } else {
        "generated-image.jpeg"
    }
}

/// Flatten the session's edits onto the source image and encode for download.
///
/// `display` is the size the preview element rendered the image at; the
/// applied crop (if any) is interpreted in that coordinate space. Identical
/// inputs always produce identical bytes.
pub fn compose_export(
    source_bytes: &[u8],
    session: &EditSession,
    display: DisplaySize,
) -> Result<Vec<u8>, ExportError> {
    let source = Raster::decode(source_bytes)?;
    if !display.is_valid() {
        return Err(ExportError::ContextUnavailable);
    }

    let (x, y, width, height) = source_region(session.crop.as_ref(), display, &source);
    let mut canvas = crop_region(&source, x, y, width, height);

    if session.transform.scale_x < 0 {
        flip_horizontal(&mut canvas);
    }
    if session.transform.scale_y < 0 {
        flip_vertical(&mut canvas);
    }
    let mut canvas = rotate_quarter(canvas, session.transform.rotation);

    apply_color_filters(&mut canvas.pixels, &session.adjustments);
    apply_brightness(&mut canvas.pixels, session.adjustments.brightness);

    log::debug!(
        "composited {}x{} export (rotation {} deg)",
        canvas.width,
        canvas.height,
        session.transform.rotation.degrees()
    );

    let surface = canvas
        .into_rgb_image()
        .ok_or(ExportError::ContextUnavailable)?;
    let (out_width, out_height) = surface.dimensions();
    Ok(encode_jpeg(
        surface.as_raw(),
        out_width,
        out_height,
        EXPORT_JPEG_QUALITY,
    )?)
}

/// Map the applied crop into source pixels, or select the full frame.
///
/// Displayed coordinates scale by the native/displayed ratio per axis. The
/// mapped region is clamped into the native frame with a one-pixel minimum,
/// so sub-pixel drags and rounding can never produce an empty or
/// out-of-bounds read.
fn source_region(
    crop: Option<&CropRect>,
    display: DisplaySize,
    source: &Raster,
) -> (u32, u32, u32, u32) {
    let Some(crop) = crop.filter(|c| c.has_area()) else {
        return (0, 0, source.width, source.height);
    };

    let scale_x = source.width as f64 / display.width as f64;
    let scale_y = source.height as f64 / display.height as f64;

    let x = ((crop.x as f64 * scale_x).round() as u32).min(source.width.saturating_sub(1));
    let y = ((crop.y as f64 * scale_y).round() as u32).min(source.height.saturating_sub(1));
    let width = ((crop.width as f64 * scale_x).round() as u32).clamp(1, source.width - x);
    let height = ((crop.height as f64 * scale_y).round() as u32).clamp(1, source.height - y);

    (x, y, width, height)
}
