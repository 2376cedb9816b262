//! Interactive crop selection.
//!
//! A small state machine over pointer events on the preview surface. The
//! selector owns the draft rectangle while the user drags; a confirmed draft
//! is promoted into the edit session by the caller. All coordinates are in
//! displayed-preview space, and the draft is kept inside the surface by
//! clamping the pointer, so a selection can never extend off-canvas.

use crate::CropRect;

/// Pointer-driven rectangle selection over a preview surface.
///
/// A fresh selector is constructed every time cropping mode is entered; it
/// never pre-seeds from a previously applied rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSelector {
    surface_width: f32,
    surface_height: f32,
    anchor: Option<(f32, f32)>,
    draft: Option<CropRect>,
    dragging: bool,
}

impl CropSelector {
    /// Create a selector for a surface of the given displayed size.
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        Self {
            surface_width: surface_width.max(0.0),
            surface_height: surface_height.max(0.0),
            anchor: None,
            draft: None,
            dragging: false,
        }
    }

    /// Begin a drag: record the anchor and start a zero-area draft there.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let (ax, ay) = self.clamp_to_surface(x, y);
        self.anchor = Some((ax, ay));
        self.draft = Some(CropRect {
            x: ax,
            y: ay,
            width: 0.0,
            height: 0.0,
        });
        self.dragging = true;
    }

    /// Track the pointer: the draft becomes the axis-aligned box between the
    /// anchor and the pointer, with the pointer clamped to the surface.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let Some((ax, ay)) = self.anchor else {
            return;
        };

        let (cx, cy) = self.clamp_to_surface(x, y);
        self.draft = Some(CropRect {
            x: ax.min(cx),
            y: ay.min(cy),
            width: (cx - ax).abs(),
            height: (cy - ay).abs(),
        });
    }

    /// End the drag. The draft persists until confirmed or cancelled.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
        self.anchor = None;
    }

    /// The current draft rectangle, if a drag has started one.
    pub fn draft(&self) -> Option<CropRect> {
        self.draft
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Consume the selector, yielding the draft if it has positive area.
    ///
    /// Zero-area drags (anchor and release on the same row or column) yield
    /// `None` and must not replace a previously applied crop.
    pub fn confirm(self) -> Option<CropRect> {
        self.draft.filter(CropRect::has_area)
    }

    /// Consume the selector, discarding the draft.
    pub fn cancel(self) {}

    fn clamp_to_surface(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(0.0, self.surface_width),
            y.clamp(0.0, self.surface_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_produces_axis_aligned_box() {
        let mut selector = CropSelector::new(400.0, 300.0);
        selector.pointer_down(50.0, 60.0);
        selector.pointer_move(150.0, 20.0);

        let draft = selector.draft().unwrap();
        assert_eq!(draft.x, 50.0);
        assert_eq!(draft.y, 20.0);
        assert_eq!(draft.width, 100.0);
        assert_eq!(draft.height, 40.0);
    }

    #[test]
    fn test_pointer_clamped_to_surface() {
        let mut selector = CropSelector::new(400.0, 300.0);
        selector.pointer_down(10.0, 10.0);
        selector.pointer_move(900.0, 20.0);

        let draft = selector.draft().unwrap();
        assert_eq!(draft.x + draft.width, 400.0, "right edge stops at surface");
        assert_eq!(draft.y, 10.0);
    }

    #[test]
    fn test_pointer_clamped_at_negative_coordinates() {
        let mut selector = CropSelector::new(400.0, 300.0);
        selector.pointer_down(80.0, 90.0);
        selector.pointer_move(-50.0, -10.0);

        let draft = selector.draft().unwrap();
        assert_eq!(draft.x, 0.0);
        assert_eq!(draft.y, 0.0);
        assert_eq!(draft.width, 80.0);
        assert_eq!(draft.height, 90.0);
    }

    #[test]
    fn test_draft_persists_after_pointer_up() {
        let mut selector = CropSelector::new(400.0, 300.0);
        selector.pointer_down(0.0, 0.0);
        selector.pointer_move(100.0, 100.0);
        selector.pointer_up();

        assert!(!selector.is_dragging());
        assert!(selector.draft().is_some());
    }

    #[test]
    fn test_moves_after_pointer_up_are_ignored() {
        let mut selector = CropSelector::new(400.0, 300.0);
        selector.pointer_down(0.0, 0.0);
        selector.pointer_move(100.0, 100.0);
        selector.pointer_up();
        selector.pointer_move(300.0, 300.0);

        let draft = selector.draft().unwrap();
        assert_eq!(draft.width, 100.0);
        assert_eq!(draft.height, 100.0);
    }

    #[test]
    fn test_zero_area_drag_confirms_nothing() {
        let mut selector = CropSelector::new(400.0, 300.0);
        selector.pointer_down(42.0, 10.0);
        selector.pointer_move(42.0, 200.0);
        selector.pointer_up();

        // Width is zero: anchor and release share an x coordinate.
        assert_eq!(selector.confirm(), None);
    }

    #[test]
    fn test_untouched_selector_confirms_nothing() {
        let selector = CropSelector::new(400.0, 300.0);
        assert_eq!(selector.confirm(), None);
    }

    #[test]
    fn test_confirm_yields_positive_area_draft() {
        let mut selector = CropSelector::new(400.0, 300.0);
        selector.pointer_down(10.0, 10.0);
        selector.pointer_move(110.0, 60.0);
        selector.pointer_up();

        let rect = selector.confirm().unwrap();
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn test_new_drag_replaces_previous_draft() {
        let mut selector = CropSelector::new(400.0, 300.0);
        selector.pointer_down(10.0, 10.0);
        selector.pointer_move(110.0, 60.0);
        selector.pointer_up();

        selector.pointer_down(200.0, 200.0);
        let draft = selector.draft().unwrap();
        assert_eq!(draft.x, 200.0);
        assert_eq!(draft.width, 0.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
