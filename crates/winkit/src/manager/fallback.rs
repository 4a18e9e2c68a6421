//! Unmanaged placement
//!
//! Used when no window manager is installed. Geometry requests are clamped
//! onto the surface and a visible window repaints itself; nothing else on
//! screen is touched. In particular, hiding a window does not reclaim the
//! area it covered.

use super::{ManagerError, WindowManager};
use crate::desktop::Desktop;
use crate::foundation::geometry::{Coord, Rect};
use crate::window::{WindowFlags, WindowHandle, WindowInit};

/// Smallest width a window is clamped to
pub const MIN_WINDOW_WIDTH: Coord = 1;
/// Smallest height a window is clamped to
pub const MIN_WINDOW_HEIGHT: Coord = 1;

/// Clamp a requested rectangle onto a `surface_width` x `surface_height`
/// surface.
///
/// Order matters:
/// 1. a negative origin is moved to 0 and the overhang taken off the size,
/// 2. the origin is pulled in so at least a minimum-size window fits,
/// 3. the size is raised to the minimum,
/// 4. the size is cut so the window ends at the surface edge.
///
/// A request lying wholly off-screen therefore ends up as a minimum-size
/// window at the nearest legal position.
pub fn clamp_to_surface(target: Rect, surface_width: Coord, surface_height: Coord) -> Rect {
    let Rect { mut x, mut y, mut width, mut height } = target;

    if x < 0 {
        width = width.saturating_add(x);
        x = 0;
    }
    if y < 0 {
        height = height.saturating_add(y);
        y = 0;
    }
    x = x.min(surface_width.saturating_sub(MIN_WINDOW_WIDTH));
    y = y.min(surface_height.saturating_sub(MIN_WINDOW_HEIGHT));
    width = width.max(MIN_WINDOW_WIDTH);
    height = height.max(MIN_WINDOW_HEIGHT);
    if x.saturating_add(width) > surface_width {
        width = surface_width.saturating_sub(x);
    }
    if y.saturating_add(height) > surface_height {
        height = surface_height.saturating_sub(y);
    }

    Rect::new(x, y, width, height)
}

/// The no-manager strategy
#[derive(Debug, Default)]
pub struct FallbackPlacement;

impl FallbackPlacement {
    /// Create the fallback strategy
    pub const fn new() -> Self {
        Self
    }
}

impl WindowManager for FallbackPlacement {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn add(&mut self, desktop: &mut Desktop, window: WindowHandle, init: &WindowInit) -> Result<(), ManagerError> {
        self.redim(desktop, window, init.rect());
        Ok(())
    }

    fn delete(&mut self, _desktop: &mut Desktop, _window: WindowHandle) {}

    fn visible(&mut self, desktop: &mut Desktop, window: WindowHandle) {
        // Hidden windows leave their pixels behind
        if desktop.flags(window).contains(WindowFlags::VISIBLE) {
            desktop.repaint(window);
        }
    }

    fn redim(&mut self, desktop: &mut Desktop, window: WindowHandle, target: Rect) {
        let (width, height) = desktop.surface_size();
        let bounds = clamp_to_surface(target, width, height);
        if bounds != target {
            log::debug!("Clamped {window:?} from {target:?} to {bounds:?}");
        }
        desktop.set_bounds(window, bounds);
        desktop.redraw_in_place(window);
    }

    fn raise(&mut self, desktop: &mut Desktop, window: WindowHandle) {
        // No stacking order; a raise is just a repaint
        desktop.repaint(window);
    }
}
