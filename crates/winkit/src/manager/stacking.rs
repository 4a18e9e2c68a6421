//! Stacking window manager
//!
//! Keeps managed windows in a back-to-front list. Whenever a visible window
//! disappears from part of the screen (hidden, moved, shrunk, minimized or
//! deleted) the vacated area is filled with the default background color and
//! every visible window intersecting it is repainted, bottom first.
//!
//! Windows whose class cannot redraw are cleared when repainted; only state a
//! window class saves can be restored.

use slotmap::SecondaryMap;

use super::fallback::clamp_to_surface;
use super::{ManagerError, WindowManager};
use crate::desktop::Desktop;
use crate::foundation::geometry::Rect;
use crate::window::{MinMax, WindowFlags, WindowHandle, WindowInit};

/// Per-window bookkeeping private to the manager
#[derive(Debug, Clone, Copy)]
struct ManagedWindow {
    state: MinMax,
    /// Geometry to return to when leaving minimized/maximized
    restore: Rect,
    /// Visibility to return to when leaving minimized
    restore_visible: bool,
}

/// Z-ordered window manager
#[derive(Debug, Default)]
pub struct StackingManager {
    /// Back to front
    z_order: Vec<WindowHandle>,
    managed: SecondaryMap<WindowHandle, ManagedWindow>,
    capacity: Option<usize>,
}

impl StackingManager {
    /// Create an unbounded manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse registrations beyond `limit` windows
    #[must_use]
    pub fn with_capacity_limit(mut self, limit: usize) -> Self {
        self.capacity = Some(limit);
        self
    }

    /// Managed windows, back to front
    pub fn z_order(&self) -> &[WindowHandle] {
        &self.z_order
    }

    /// Number of managed windows
    pub fn len(&self) -> usize {
        self.z_order.len()
    }

    /// True when nothing is managed
    pub fn is_empty(&self) -> bool {
        self.z_order.is_empty()
    }

    /// Whether `window` is registered
    pub fn is_managed(&self, window: WindowHandle) -> bool {
        self.managed.contains_key(window)
    }

    fn position(&self, window: WindowHandle) -> Option<usize> {
        self.z_order.iter().position(|&w| w == window)
    }

    fn bring_to_front(&mut self, window: WindowHandle) {
        if let Some(pos) = self.position(window) {
            let handle = self.z_order.remove(pos);
            self.z_order.push(handle);
        }
    }

    /// Repaint, bottom first, every visible window from `from` upwards that
    /// intersects one of `areas`. A repainted window covers its whole bounds,
    /// so those bounds become dirty for the windows above it.
    fn refresh_from(&self, desktop: &mut Desktop, from: usize, areas: &[Rect]) {
        let mut dirty = areas.to_vec();
        for &window in &self.z_order[from..] {
            let Some(win) = desktop.window(window) else {
                continue;
            };
            let (bounds, visible) = (win.bounds(), win.is_visible());
            if visible && dirty.iter().any(|area| area.intersects(&bounds)) {
                desktop.repaint(window);
                dirty.push(bounds);
            }
        }
    }

    /// Give an area back to the background and to the windows beneath
    fn vacate(&self, desktop: &mut Desktop, area: Rect) {
        desktop.clear_area(area);
        self.refresh_from(desktop, 0, &[area]);
    }

    /// Apply final geometry and repaint whatever it affects
    fn place(&self, desktop: &mut Desktop, window: WindowHandle, bounds: Rect) {
        let Some(old) = desktop.bounds(window) else {
            return;
        };
        desktop.set_bounds(window, bounds);
        if !desktop.flags(window).contains(WindowFlags::VISIBLE) {
            return;
        }

        if old == bounds {
            let from = self.position(window).unwrap_or(0);
            self.refresh_from(desktop, from, &[bounds]);
        } else {
            desktop.clear_area(old);
            self.refresh_from(desktop, 0, &[old, bounds]);
        }
    }
}

impl WindowManager for StackingManager {
    fn name(&self) -> &'static str {
        "stacking"
    }

    fn add(&mut self, desktop: &mut Desktop, window: WindowHandle, init: &WindowInit) -> Result<(), ManagerError> {
        if self.managed.contains_key(window) {
            return Err(ManagerError::AlreadyManaged);
        }
        if let Some(limit) = self.capacity {
            if self.z_order.len() >= limit {
                return Err(ManagerError::CapacityExhausted { limit });
            }
        }

        self.z_order.push(window);
        self.managed.insert(
            window,
            ManagedWindow {
                state: MinMax::Normal,
                restore: init.rect(),
                restore_visible: init.show,
            },
        );
        log::debug!("Managing {window:?} ({} windows)", self.z_order.len());

        self.redim(desktop, window, init.rect());
        Ok(())
    }

    fn delete(&mut self, desktop: &mut Desktop, window: WindowHandle) {
        let Some(pos) = self.position(window) else {
            return;
        };
        self.z_order.remove(pos);
        self.managed.remove(window);

        if desktop.flags(window).contains(WindowFlags::VISIBLE) {
            if let Some(area) = desktop.bounds(window) {
                self.vacate(desktop, area);
            }
        }
    }

    fn visible(&mut self, desktop: &mut Desktop, window: WindowHandle) {
        let Some(pos) = self.position(window) else {
            return;
        };
        let Some(bounds) = desktop.bounds(window) else {
            return;
        };

        if desktop.flags(window).contains(WindowFlags::VISIBLE) {
            // Showing a minimized window restores it in place
            if let Some(entry) = self.managed.get_mut(window) {
                if entry.state == MinMax::Minimized {
                    entry.state = MinMax::Normal;
                }
            }
            self.refresh_from(desktop, pos, &[bounds]);
        } else {
            self.vacate(desktop, bounds);
        }
    }

    fn stay_hidden(&mut self, window: WindowHandle) {
        if let Some(entry) = self.managed.get_mut(window) {
            if entry.state == MinMax::Minimized {
                entry.restore_visible = false;
            }
        }
    }

    fn redim(&mut self, desktop: &mut Desktop, window: WindowHandle, target: Rect) {
        let (width, height) = desktop.surface_size();
        let bounds = clamp_to_surface(target, width, height);
        let Some(entry) = self.managed.get_mut(window) else {
            return;
        };

        // Minimized and maximized windows keep their geometry; the request
        // takes effect on restore
        if entry.state != MinMax::Normal {
            entry.restore = bounds;
            return;
        }
        self.place(desktop, window, bounds);
    }

    fn raise(&mut self, desktop: &mut Desktop, window: WindowHandle) {
        if !self.is_managed(window) {
            return;
        }
        self.bring_to_front(window);
        desktop.repaint(window);
    }

    fn set_min_max(&mut self, desktop: &mut Desktop, window: WindowHandle, state: MinMax) {
        let Some(entry) = self.managed.get(window).copied() else {
            return;
        };
        let Some(bounds) = desktop.bounds(window) else {
            return;
        };
        if entry.state == state {
            return;
        }

        let restore = if entry.state == MinMax::Normal {
            bounds
        } else {
            entry.restore
        };
        let was_visible = desktop.flags(window).contains(WindowFlags::VISIBLE);
        if entry.state == MinMax::Minimized && entry.restore_visible {
            desktop.update_flags(window, |flags| flags.insert(WindowFlags::VISIBLE));
        }
        log::debug!("{window:?}: {:?} -> {state:?}", entry.state);

        match state {
            MinMax::Minimized => {
                self.managed.insert(
                    window,
                    ManagedWindow {
                        state,
                        restore,
                        restore_visible: was_visible,
                    },
                );
                if was_visible {
                    desktop.update_flags(window, |flags| flags.remove(WindowFlags::VISIBLE));
                    self.vacate(desktop, bounds);
                }
            }
            MinMax::Maximized => {
                self.managed.insert(window, ManagedWindow { state, restore, ..entry });
                self.bring_to_front(window);
                let full = desktop.surface_rect();
                self.place(desktop, window, full);
            }
            MinMax::Normal => {
                self.managed.insert(window, ManagedWindow { state, restore, ..entry });
                self.place(desktop, window, restore);
            }
        }
    }

    fn min_max(&self, window: WindowHandle) -> MinMax {
        self.managed
            .get(window)
            .map_or(MinMax::Normal, |entry| entry.state)
    }
}
