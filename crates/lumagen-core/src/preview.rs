//! Live preview style rendering.
//!
//! The preview never touches pixels. It derives a CSS style pair from the
//! current edit state, and the host page assigns it to the on-screen image
//! element. Recomputed synchronously on every state change; idempotent and
//! side-effect free.

use crate::{ColorAdjustments, GeometricTransform};

/// The derived style for the preview element.
///
/// `filter` is a CSS filter chain in the fixed stack order; `transform` is a
/// CSS transform chain, rotation first. CSS applies transform functions
/// right-to-left, so the flips act in image space before the rotation -
/// matching the export compositor's flip-then-rotate pixel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub filter: String,
    pub transform: String,
}

/// Render the preview style for the given edit state.
pub fn render_style(
    adjustments: &ColorAdjustments,
    transform: &GeometricTransform,
) -> StyleDescriptor {
    let filter = format!(
        "brightness({}%) contrast({}%) saturate({}%) grayscale({}%) sepia({}%) invert({}%)",
        adjustments.brightness,
        adjustments.contrast,
        adjustments.saturate,
        adjustments.grayscale,
        adjustments.sepia,
        adjustments.invert,
    );
    let transform = format!(
        "rotate({}deg) scale({}, {})",
        transform.rotation.degrees(),
        transform.scale_x,
        transform.scale_y,
    );

    StyleDescriptor { filter, transform }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditSession, Preset};

    #[test]
    fn test_identity_style() {
        let session = EditSession::new();
        let style = render_style(&session.adjustments, &session.transform);

        assert_eq!(
            style.filter,
            "brightness(100%) contrast(100%) saturate(100%) grayscale(0%) sepia(0%) invert(0%)"
        );
        assert_eq!(style.transform, "rotate(0deg) scale(1, 1)");
    }

    #[test]
    fn test_filter_chain_reflects_sliders() {
        let mut session = EditSession::new();
        session.set_brightness(120.0);
        session.set_grayscale(45.0);

        let style = render_style(&session.adjustments, &session.transform);
        assert_eq!(
            style.filter,
            "brightness(120%) contrast(100%) saturate(100%) grayscale(45%) sepia(0%) invert(0%)"
        );
    }

    #[test]
    fn test_preset_style() {
        let mut session = EditSession::new();
        session.apply_preset(Preset::Sepia);

        let style = render_style(&session.adjustments, &session.transform);
        assert!(style.filter.contains("sepia(100%)"));
        assert!(style.filter.contains("grayscale(0%)"));
    }

    #[test]
    fn test_transform_chain_rotation_then_scale() {
        let mut session = EditSession::new();
        session.rotate_cw();
        session.flip_vertical();

        let style = render_style(&session.adjustments, &session.transform);
        assert_eq!(style.transform, "rotate(90deg) scale(1, -1)");
    }

    #[test]
    fn test_render_is_pure() {
        let session = EditSession::new();
        let a = render_style(&session.adjustments, &session.transform);
        let b = render_style(&session.adjustments, &session.transform);
        assert_eq!(a, b);
    }
}
