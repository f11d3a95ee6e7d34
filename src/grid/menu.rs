//! Placement of the floating edit menu.
//!
//! The menu is anchored where the gesture was released, expressed relative
//! to the grid container's top-left corner and clamped horizontally so the
//! fixed-width menu never overflows the container's right edge. Vertical
//! position is intentionally unclamped; the menu is an overlay and may
//! extend below the fold.

use egui::{Pos2, Rect};

/// Fixed width of the floating edit menu, in points.
pub const MENU_WIDTH: f32 = 300.0;

/// Container-relative anchor for the edit menu.
///
/// `x = min(pointer.x - left, width - MENU_WIDTH)`, `y = pointer.y - top`.
/// An unmeasurable container (grid not laid out yet) yields the degenerate
/// origin rather than an error, so the edit flow is never blocked.
pub fn menu_position(pointer: Pos2, container: Option<Rect>) -> Pos2 {
    let Some(rect) = container else {
        return Pos2::ZERO;
    };
    let x = (pointer.x - rect.left()).min(rect.width() - MENU_WIDTH);
    let y = pointer.y - rect.top();
    Pos2::new(x, y)
}
