//! Lumagen Core - Image editing pipeline
//!
//! This crate provides the core functionality for Lumagen: the edit session
//! model, live preview style rendering, the crop selector state machine, the
//! export compositor, and the remote image-generation client.

pub mod compose;
pub mod filters;
pub mod flight;
pub mod generate;
pub mod preview;
pub mod raster;
pub mod selector;

mod encode;

pub use compose::{compose_export, export_file_name, DisplaySize, ExportError};
pub use encode::{encode_jpeg, EncodeError};
pub use flight::Flight;
pub use generate::{AspectRatio, GenerateError, ImageService, ServiceConfig};
pub use preview::{render_style, StyleDescriptor};
pub use raster::{Raster, RasterError};
pub use selector::CropSelector;

/// Color adjustment stack for the editor.
///
/// Each field is a CSS-style percentage. Brightness, contrast and saturation
/// are amounts around a 100% identity; grayscale, sepia and invert are mixes
/// from 0% (off) to 100% (full effect). The fields are applied in a fixed
/// order: brightness, contrast, saturate, grayscale, sepia, invert.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorAdjustments {
    /// Brightness (0 to 200, identity 100)
    pub brightness: f32,
    /// Contrast (0 to 200, identity 100)
    pub contrast: f32,
    /// Saturation (0 to 200, identity 100)
    pub saturate: f32,
    /// Grayscale mix (0 to 100)
    pub grayscale: f32,
    /// Sepia mix (0 to 100)
    pub sepia: f32,
    /// Inversion mix (0 to 100)
    pub invert: f32,
}

impl Default for ColorAdjustments {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            saturate: 100.0,
            grayscale: 0.0,
            sepia: 0.0,
            invert: 0.0,
        }
    }
}

impl ColorAdjustments {
    /// Upper bound for the amount-style sliders (brightness/contrast/saturate).
    pub const AMOUNT_MAX: f32 = 200.0;
    /// Upper bound for the mix-style sliders (grayscale/sepia/invert).
    pub const MIX_MAX: f32 = 100.0;

    /// Create adjustments at their identity values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their identity defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Named one-click filter presets.
///
/// A preset replaces the whole adjustment stack with defaults plus its own
/// field, so presets are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Preset {
    Grayscale,
    Sepia,
    Invert,
}

impl Preset {
    /// The adjustment stack this preset stands for.
    pub fn adjustments(self) -> ColorAdjustments {
        let mut adjustments = ColorAdjustments::default();
        match self {
            Preset::Grayscale => adjustments.grayscale = ColorAdjustments::MIX_MAX,
            Preset::Sepia => adjustments.sepia = ColorAdjustments::MIX_MAX,
            Preset::Invert => adjustments.invert = ColorAdjustments::MIX_MAX,
        }
        adjustments
    }
}

/// Quarter-turn rotation state.
///
/// The editor only ever rotates in 90-degree steps, so the angle is a closed
/// enum rather than a raw integer - other angles are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// The next rotation after a clockwise quarter turn (wraps at 360).
    pub fn rotated_cw(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// The rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Returns true if this rotation swaps the output width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Geometric transform state: rotation plus mirror flips.
///
/// `scale_x`/`scale_y` are always -1 or +1; a flip toggles the sign, so every
/// flip is its own inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeometricTransform {
    pub rotation: Rotation,
    pub scale_x: i8,
    pub scale_y: i8,
}

impl Default for GeometricTransform {
    fn default() -> Self {
        Self {
            rotation: Rotation::Deg0,
            scale_x: 1,
            scale_y: 1,
        }
    }
}

impl GeometricTransform {
    /// Check if the transform is the identity (no rotation, no flips).
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// A crop rectangle in displayed-preview coordinates.
///
/// Coordinates are measured from the preview surface's top-left corner, in
/// the same units the pointer events arrive in. The export compositor maps
/// the rectangle back to native source pixels.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRect {
    /// True when both dimensions are strictly positive.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// The complete set of pending, unbaked edits for one editing invocation.
///
/// An `EditSession` starts at the identity state and is discarded when the
/// editor closes; nothing persists across invocations. Edits never touch the
/// source pixels until the export compositor flattens them.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EditSession {
    pub adjustments: ColorAdjustments,
    pub transform: GeometricTransform,
    /// The confirmed crop, if any. Draft rectangles live in [`CropSelector`].
    pub crop: Option<CropRect>,
    pub is_cropping: bool,
}

impl EditSession {
    /// Create a session at the identity state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_brightness(&mut self, value: f32) {
        self.adjustments.brightness = value.clamp(0.0, ColorAdjustments::AMOUNT_MAX);
    }

    pub fn set_contrast(&mut self, value: f32) {
        self.adjustments.contrast = value.clamp(0.0, ColorAdjustments::AMOUNT_MAX);
    }

    pub fn set_saturate(&mut self, value: f32) {
        self.adjustments.saturate = value.clamp(0.0, ColorAdjustments::AMOUNT_MAX);
    }

    pub fn set_grayscale(&mut self, value: f32) {
        self.adjustments.grayscale = value.clamp(0.0, ColorAdjustments::MIX_MAX);
    }

    pub fn set_sepia(&mut self, value: f32) {
        self.adjustments.sepia = value.clamp(0.0, ColorAdjustments::MIX_MAX);
    }

    pub fn set_invert(&mut self, value: f32) {
        self.adjustments.invert = value.clamp(0.0, ColorAdjustments::MIX_MAX);
    }

    /// Advance the rotation by a clockwise quarter turn.
    pub fn rotate_cw(&mut self) {
        self.transform.rotation = self.transform.rotation.rotated_cw();
    }

    /// Mirror the image left-to-right. Applying twice restores the original.
    pub fn flip_horizontal(&mut self) {
        self.transform.scale_x = -self.transform.scale_x;
    }

    /// Mirror the image top-to-bottom. Applying twice restores the original.
    pub fn flip_vertical(&mut self) {
        self.transform.scale_y = -self.transform.scale_y;
    }

    /// Replace the adjustment stack wholesale with a preset.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.adjustments = preset.adjustments();
    }

    /// Reset the adjustment stack to identity (the "Reset All" button).
    ///
    /// Geometric state and crop are reset by opening a fresh session, not by
    /// this operation.
    pub fn reset_adjustments(&mut self) {
        self.adjustments = ColorAdjustments::default();
    }

    /// Enter cropping mode. The selector is constructed by the caller; the
    /// session only tracks that a selection is in progress.
    pub fn begin_crop(&mut self) {
        self.is_cropping = true;
    }

    /// Promote a confirmed draft to the applied crop and exit cropping mode.
    ///
    /// A `None` or zero-area draft commits nothing; any previously applied
    /// crop stays in place. Cropping mode ends either way.
    pub fn confirm_crop(&mut self, draft: Option<CropRect>) {
        if let Some(rect) = draft.filter(CropRect::has_area) {
            self.crop = Some(rect);
        }
        self.is_cropping = false;
    }

    /// Exit cropping mode without committing; the applied crop is untouched.
    pub fn cancel_crop(&mut self) {
        self.is_cropping = false;
    }
}
