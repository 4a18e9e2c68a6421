//! Window system facade
//!
//! [`WindowSystem`] is the public operation set for windows. It owns the
//! [`Desktop`] and exactly one placement strategy, and routes every lifecycle
//! request (create, show/hide, enable, move/resize, redraw, destroy) through
//! that strategy. Drawing goes through [`Desktop`], reachable with
//! [`WindowSystem::desktop_mut`].

use crate::core::config::ToolkitConfig;
use crate::desktop::{Defaults, Desktop};
use crate::foundation::color::Color;
use crate::foundation::geometry::{Coord, Rect};
use crate::manager::{FallbackPlacement, ManagerError, WindowManager};
use crate::surface::{Font, Surface};
use crate::window::heap::Backing;
use crate::window::{
    ClassHooks, ClassId, MinMax, WindowClass, WindowFlags, WindowHandle, WindowHeap, WindowInit,
    WindowObject, WindowStorage, BASE_WINDOW,
};

/// Why a window could not be created
#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    /// The window heap could not supply the instance
    #[error("Out of memory: {class} needs {size} bytes")]
    OutOfMemory {
        /// Class being created
        class: &'static str,
        /// Requested instance size
        size: usize,
    },

    /// The window manager refused the window
    #[error("Window manager rejected {class}: {reason}")]
    Rejected {
        /// Class being created
        class: &'static str,
        /// Manager's reason
        #[source]
        reason: ManagerError,
        /// Caller storage, handed back untouched
        storage: Option<WindowStorage>,
    },
}

impl CreateError {
    /// Recover the caller storage passed to the failed constructor
    pub fn into_storage(self) -> Option<WindowStorage> {
        match self {
            Self::Rejected { storage, .. } => storage,
            Self::OutOfMemory { .. } => None,
        }
    }
}

/// Windows plus the strategy that places them
pub struct WindowSystem {
    desktop: Desktop,
    manager: Box<dyn WindowManager>,
}

impl WindowSystem {
    /// Compose a window system from a surface and a placement strategy
    pub fn new(surface: Box<dyn Surface>, manager: Box<dyn WindowManager>) -> Self {
        log::info!("Window system on {}x{} surface, {} placement", surface.width(), surface.height(), manager.name());
        Self {
            desktop: Desktop::new(surface),
            manager,
        }
    }

    /// Compose a window system without a window manager
    pub fn unmanaged(surface: Box<dyn Surface>) -> Self {
        Self::new(surface, Box::new(FallbackPlacement::new()))
    }

    /// Compose a window system as described by `config`
    pub fn from_config(config: &ToolkitConfig, surface: Box<dyn Surface>) -> Self {
        let defaults = Defaults {
            foreground: config.defaults.foreground,
            background: config.defaults.background,
            font: None,
        };
        Self::new(surface, config.manager.build())
            .with_heap(Box::new(config.heap.build()))
            .with_defaults(defaults)
    }

    /// Replace the window heap. Ignored once any window exists.
    #[must_use]
    pub fn with_heap(mut self, heap: Box<dyn WindowHeap>) -> Self {
        self.desktop = self.desktop.with_heap(heap);
        self
    }

    /// Replace the default drawing state
    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.desktop = self.desktop.with_defaults(defaults);
        self
    }

    /// Name of the active placement strategy
    pub fn manager_name(&self) -> &'static str {
        self.manager.name()
    }

    /// Windows, surface and drawing primitives
    pub const fn desktop(&self) -> &Desktop {
        &self.desktop
    }

    /// Windows, surface and drawing primitives
    pub fn desktop_mut(&mut self) -> &mut Desktop {
        &mut self.desktop
    }

    // Defaults. Changes apply to windows created afterwards only.

    /// Set the default foreground color
    pub fn set_default_color(&mut self, color: Color) {
        self.desktop.defaults_mut().foreground = color;
    }

    /// Default foreground color
    pub fn default_color(&self) -> Color {
        self.desktop.defaults().foreground
    }

    /// Set the default background color
    pub fn set_default_bg_color(&mut self, color: Color) {
        self.desktop.defaults_mut().background = color;
    }

    /// Default background color
    pub fn default_bg_color(&self) -> Color {
        self.desktop.defaults().background
    }

    /// Set the default font
    pub fn set_default_font(&mut self, font: Option<Font>) {
        self.desktop.defaults_mut().font = font;
    }

    /// Default font
    pub fn default_font(&self) -> Option<&Font> {
        self.desktop.defaults().font.as_ref()
    }

    // Construction and destruction

    /// Construct a window of any class.
    ///
    /// Without `storage` the instance is allocated from the window heap and
    /// marked [`WindowFlags::DYNAMIC`]; with it the window is never marked
    /// dynamic, whatever `flags` says. The new window takes the current
    /// defaults, is registered with the placement strategy and placed at
    /// (a clamped version of) the requested geometry. Visibility is left to
    /// the caller.
    ///
    /// # Errors
    ///
    /// [`CreateError::OutOfMemory`] when the heap is exhausted,
    /// [`CreateError::Rejected`] when the manager refuses the window. Either
    /// way nothing of the window remains.
    pub fn create(
        &mut self,
        storage: Option<WindowStorage>,
        init: &WindowInit,
        class: &'static dyn WindowClass,
        flags: WindowFlags,
    ) -> Result<WindowHandle, CreateError> {
        let (flags, backing) = match storage {
            Some(storage) => (flags - WindowFlags::DYNAMIC, Backing::Caller(storage.claim())),
            None => {
                let size = class.instance_size();
                let Some(block) = self.desktop.heap_mut().allocate(size) else {
                    return Err(CreateError::OutOfMemory {
                        class: class.class_name(),
                        size,
                    });
                };
                (flags | WindowFlags::DYNAMIC, Backing::Heap(block))
            }
        };

        let defaults = self.desktop.defaults().clone();
        let window = self.desktop.insert(WindowObject::new(
            class,
            init.rect(),
            defaults.foreground,
            defaults.background,
            defaults.font,
            flags,
            backing,
        ));

        if let Err(reason) = self.manager.add(&mut self.desktop, window, init) {
            log::warn!("{} refused {}: {reason}", self.manager.name(), class.class_name());
            let storage = self.release(window);
            return Err(CreateError::Rejected {
                class: class.class_name(),
                reason,
                storage,
            });
        }

        log::debug!(
            "Created {} {window:?} at {:?}",
            class.class_name(),
            self.desktop.bounds(window)
        );
        Ok(window)
    }

    /// Construct a plain window and show it if `init.show` is set
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub fn create_window(
        &mut self,
        storage: Option<WindowStorage>,
        init: &WindowInit,
    ) -> Result<WindowHandle, CreateError> {
        let window = self.create(storage, init, &BASE_WINDOW, WindowFlags::empty())?;
        self.set_visible(window, init.show);
        Ok(window)
    }

    /// Destroy a window.
    ///
    /// The manager forgets it first, then the class tears down its own state,
    /// then the flags are cleared and the storage goes back where it came
    /// from: heap blocks are released, caller storage is returned.
    pub fn destroy(&mut self, window: WindowHandle) -> Option<WindowStorage> {
        let Some(class) = self.desktop.window(window).map(WindowObject::class) else {
            log::warn!("Destroying unknown window {window:?}");
            return None;
        };

        self.manager.delete(&mut self.desktop, window);
        if class.hooks().contains(ClassHooks::DESTROY) {
            class.destroy(&mut self.desktop, window);
        }
        self.desktop
            .update_flags(window, |flags| *flags = WindowFlags::empty());

        log::debug!("Destroyed {} {window:?}", class.class_name());
        self.release(window)
    }

    fn release(&mut self, window: WindowHandle) -> Option<WindowStorage> {
        match self.desktop.remove(window)?.backing {
            Backing::Heap(block) => {
                self.desktop.heap_mut().release(block);
                None
            }
            Backing::Caller(storage) => Some(storage),
        }
    }

    // Queries

    /// Class name of a window
    pub fn class_name(&self, window: WindowHandle) -> Option<&'static str> {
        self.desktop.window(window).map(WindowObject::class_name)
    }

    /// Class identity of a window
    pub fn class_id(&self, window: WindowHandle) -> Option<ClassId> {
        self.desktop.window(window).map(WindowObject::class_id)
    }

    /// Current bounds. Read these back after a move or resize: requests are
    /// advisory.
    pub fn bounds(&self, window: WindowHandle) -> Option<Rect> {
        self.desktop.bounds(window)
    }

    /// State bits; empty for destroyed windows
    pub fn flags(&self, window: WindowHandle) -> WindowFlags {
        self.desktop.flags(window)
    }

    /// Whether a window is visible
    pub fn is_visible(&self, window: WindowHandle) -> bool {
        self.flags(window).contains(WindowFlags::VISIBLE)
    }

    /// Whether a window is enabled
    pub fn is_enabled(&self, window: WindowHandle) -> bool {
        self.flags(window).contains(WindowFlags::ENABLED)
    }

    // State changes

    /// Show or hide a window. Only transitions reach the placement strategy.
    pub fn set_visible(&mut self, window: WindowHandle, visible: bool) {
        if !self.desktop.contains(window) {
            return;
        }
        if self.is_visible(window) == visible {
            if !visible {
                self.manager.stay_hidden(window);
            }
            return;
        }

        self.desktop
            .update_flags(window, |flags| flags.set(WindowFlags::VISIBLE, visible));
        log::debug!("{window:?} visible = {visible}");
        self.manager.visible(&mut self.desktop, window);
    }

    /// Enable or disable a window. A visible window whose class can redraw is
    /// repainted on every transition, with or without a manager.
    pub fn set_enabled(&mut self, window: WindowHandle, enabled: bool) {
        if !self.desktop.contains(window) || self.is_enabled(window) == enabled {
            return;
        }

        self.desktop
            .update_flags(window, |flags| flags.set(WindowFlags::ENABLED, enabled));
        log::debug!("{window:?} enabled = {enabled}");
        self.desktop.redraw_in_place(window);
    }

    /// Request a new position, keeping the size
    pub fn move_to(&mut self, window: WindowHandle, x: Coord, y: Coord) {
        if let Some(bounds) = self.desktop.bounds(window) {
            self.manager
                .redim(&mut self.desktop, window, bounds.with_origin(x, y));
        }
    }

    /// Request a new size, keeping the position
    pub fn resize(&mut self, window: WindowHandle, width: Coord, height: Coord) {
        if let Some(bounds) = self.desktop.bounds(window) {
            self.manager
                .redim(&mut self.desktop, window, bounds.with_size(width, height));
        }
    }

    /// Repaint a window from its saved state.
    ///
    /// With a manager this also raises the window, since paint order follows
    /// z-order. Windows whose class cannot redraw are cleared instead.
    pub fn redraw(&mut self, window: WindowHandle) {
        self.raise(window);
    }

    /// Bring a window to the front of the z-order and repaint it
    pub fn raise(&mut self, window: WindowHandle) {
        if self.desktop.contains(window) {
            self.manager.raise(&mut self.desktop, window);
        }
    }

    /// Minimize, maximize or restore. Ignored without a manager that
    /// supports it; read [`min_max`](Self::min_max) back for the outcome.
    pub fn set_min_max(&mut self, window: WindowHandle, state: MinMax) {
        if self.desktop.contains(window) {
            self.manager.set_min_max(&mut self.desktop, window, state);
        }
    }

    /// Minimized / maximized / normal state
    pub fn min_max(&self, window: WindowHandle) -> MinMax {
        self.manager.min_max(window)
    }

    /// Set a window's foreground color
    pub fn set_color(&mut self, window: WindowHandle, color: Color) {
        if let Some(win) = self.desktop.window_mut(window) {
            win.set_foreground(color);
        }
    }

    /// Set a window's background color
    pub fn set_bg_color(&mut self, window: WindowHandle, color: Color) {
        if let Some(win) = self.desktop.window_mut(window) {
            win.set_background(color);
        }
    }

    /// Set (or remove) a window's font
    pub fn set_font(&mut self, window: WindowHandle, font: Option<Font>) {
        if let Some(win) = self.desktop.window_mut(window) {
            win.set_font(font);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ManagerConfig;
    use crate::surface::{RecordingSurface, SurfaceCall};
    use crate::tests::{recording_system, trace, TracedClass, TracingManager};
    use crate::window::BudgetHeap;

    fn unmanaged() -> (WindowSystem, crate::surface::CallLog) {
        recording_system(200, 150, Box::new(FallbackPlacement::new()))
    }

    #[test]
    fn test_visibility_reaches_manager_only_on_transitions() {
        let calls = trace();
        let (mut ws, _log) = recording_system(200, 150, TracingManager::boxed(&calls));
        let win = ws.create_window(None, &WindowInit::new(0, 0, 20, 20)).unwrap();
        assert_eq!(*calls.borrow(), ["manager.add"]);
        calls.borrow_mut().clear();

        ws.set_visible(win, true);
        ws.set_visible(win, true);
        assert_eq!(*calls.borrow(), ["manager.visible"]);

        ws.set_visible(win, false);
        ws.set_visible(win, false);
        assert_eq!(*calls.borrow(), ["manager.visible", "manager.visible"]);
        assert!(!ws.is_visible(win));
    }

    #[test]
    fn test_enable_transition_redraws_visible_window() {
        let calls = trace();
        let class = TracedClass::leak("button", ClassHooks::REDRAW, &calls);
        let (mut ws, log) = unmanaged();
        let win = ws
            .create(None, &WindowInit::new(10, 10, 30, 20), class, WindowFlags::empty())
            .unwrap();
        ws.set_visible(win, true);
        calls.borrow_mut().clear();
        log.clear();

        ws.set_enabled(win, true);
        ws.set_enabled(win, true);
        assert!(ws.is_enabled(win));
        assert_eq!(*calls.borrow(), ["button.redraw"]);
        assert_eq!(
            log.take(),
            vec![
                SurfaceCall::SetClip(Rect::new(10, 10, 30, 20)),
                SurfaceCall::SetClip(Rect::new(10, 10, 30, 20)),
                SurfaceCall::Box { area: Rect::new(10, 10, 30, 20), color: Color::WHITE },
            ]
        );

        ws.set_visible(win, false);
        calls.borrow_mut().clear();
        ws.set_enabled(win, false);
        assert!(!ws.is_enabled(win));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_caller_storage_is_never_dynamic_and_comes_back() {
        let (mut ws, _log) = unmanaged();
        let win = ws
            .create(Some(WindowStorage::new()), &WindowInit::new(0, 0, 10, 10), &BASE_WINDOW, WindowFlags::DYNAMIC)
            .unwrap();
        assert!(!ws.flags(win).contains(WindowFlags::DYNAMIC));

        let storage = ws.destroy(win).expect("caller storage returned");
        assert_eq!(storage.uses(), 1);
        let stats = ws.desktop().heap_stats();
        assert_eq!(stats.allocations, 0);
        assert_eq!(stats.releases, 0);

        // Storage can be reused for another window
        let again = ws.create_window(Some(storage), &WindowInit::new(0, 0, 10, 10)).unwrap();
        assert_eq!(ws.destroy(again).map(|s| s.uses()), Some(2));
    }

    #[test]
    fn test_heap_window_is_released_exactly_once() {
        let (mut ws, _log) = unmanaged();
        let win = ws.create_window(None, &WindowInit::new(0, 0, 10, 10)).unwrap();
        assert!(ws.flags(win).contains(WindowFlags::DYNAMIC));

        assert!(ws.destroy(win).is_none());
        assert!(ws.destroy(win).is_none());

        let stats = ws.desktop().heap_stats();
        assert_eq!(stats.allocations, 1);
        assert_eq!(stats.releases, 1);
        assert_eq!(stats.live_blocks(), 0);
        assert_eq!(stats.bytes_in_use, 0);
    }

    #[test]
    fn test_out_of_memory_leaves_nothing_registered() {
        let calls = trace();
        let (ws, _log) = recording_system(200, 150, TracingManager::boxed(&calls));
        let mut ws = ws.with_heap(Box::new(BudgetHeap::with_budget(0)));

        let err = ws.create_window(None, &WindowInit::new(0, 0, 10, 10)).unwrap_err();
        assert!(matches!(err, CreateError::OutOfMemory { class: "Window", .. }));
        assert!(err.into_storage().is_none());
        assert!(ws.desktop().is_empty());
        assert!(calls.borrow().is_empty());
        assert_eq!(ws.desktop().heap_stats().failures, 1);

        // Caller storage does not touch the heap
        assert!(ws.create_window(Some(WindowStorage::new()), &WindowInit::new(0, 0, 10, 10)).is_ok());
    }

    #[test]
    fn test_destroy_runs_manager_then_class_then_frees() {
        let calls = trace();
        let class = TracedClass::leak("label", ClassHooks::DESTROY, &calls);
        let (mut ws, _log) = recording_system(200, 150, TracingManager::boxed(&calls));
        let win = ws
            .create(None, &WindowInit::new(0, 0, 10, 10), class, WindowFlags::ENABLED)
            .unwrap();
        calls.borrow_mut().clear();

        ws.destroy(win);
        assert_eq!(*calls.borrow(), ["manager.delete", "label.destroy"]);
        assert!(!ws.desktop().contains(win));
        assert_eq!(ws.flags(win), WindowFlags::empty());
        assert_eq!(ws.desktop().heap_stats().releases, 1);
    }

    #[test]
    fn test_class_identity_and_name() {
        let calls = trace();
        let slider = TracedClass::leak("slider", ClassHooks::empty(), &calls);
        let (mut ws, _log) = unmanaged();
        let plain = ws.create_window(None, &WindowInit::new(0, 0, 10, 10)).unwrap();
        let custom = ws
            .create(None, &WindowInit::new(0, 0, 10, 10), slider, WindowFlags::empty())
            .unwrap();

        assert_eq!(ws.class_name(plain), Some("Window"));
        assert_eq!(ws.class_name(custom), Some("slider"));
        assert_eq!(ws.class_id(custom), Some(ClassId::of(slider)));
        assert_ne!(ws.class_id(plain), ws.class_id(custom));

        let other_plain = ws.create_window(None, &WindowInit::new(20, 0, 10, 10)).unwrap();
        assert_eq!(ws.class_id(plain), ws.class_id(other_plain));
        assert_eq!(ws.class_name(plain), ws.class_name(other_plain));

        ws.destroy(custom);
        assert_eq!(ws.class_name(custom), None);
    }

    #[test]
    fn test_unmanaged_move_clamps_and_redraws() {
        let calls = trace();
        let class = TracedClass::leak("panel", ClassHooks::REDRAW, &calls);
        let (mut ws, log) = unmanaged();
        let win = ws
            .create(None, &WindowInit::new(10, 10, 50, 50), class, WindowFlags::empty())
            .unwrap();
        ws.set_visible(win, true);
        log.clear();

        ws.move_to(win, 180, 140);
        assert_eq!(ws.bounds(win), Some(Rect::new(180, 140, 20, 10)));
        assert_eq!(
            log.take(),
            vec![
                SurfaceCall::SetClip(Rect::new(180, 140, 20, 10)),
                SurfaceCall::SetClip(Rect::new(180, 140, 20, 10)),
                SurfaceCall::Box { area: Rect::new(180, 140, 20, 10), color: Color::WHITE },
            ]
        );
    }

    #[test]
    fn test_resize_keeps_position() {
        let (mut ws, log) = unmanaged();
        let win = ws.create_window(None, &WindowInit::new(30, 40, 10, 10)).unwrap();
        ws.resize(win, 60, 0);
        assert_eq!(ws.bounds(win), Some(Rect::new(30, 40, 60, 1)));
        // Hidden and no redraw hook: nothing drawn
        assert!(log.is_empty());
    }

    #[test]
    fn test_extreme_geometry_is_normalized() {
        let (mut ws, _log) = recording_system(100, 100, Box::new(FallbackPlacement::new()));
        let win = ws
            .create_window(None, &WindowInit::new(10, 10, 20, 20).with_show(true))
            .unwrap();

        ws.resize(win, Coord::MAX, 10);
        assert_eq!(ws.bounds(win), Some(Rect::new(10, 10, 90, 10)));
        ws.move_to(win, Coord::MIN, Coord::MAX);
        assert_eq!(ws.bounds(win), Some(Rect::new(0, 99, 1, 1)));

        let far = ws
            .create_window(None, &WindowInit::new(Coord::MAX, Coord::MAX, Coord::MAX, Coord::MAX))
            .unwrap();
        assert_eq!(ws.bounds(far), Some(Rect::new(99, 99, 1, 1)));
    }

    #[test]
    fn test_heap_swap_after_creation_keeps_original_heap() {
        let (ws, _log) = unmanaged();
        let mut ws = ws.with_heap(Box::new(BudgetHeap::with_budget(4096)));
        let win = ws.create_window(None, &WindowInit::new(0, 0, 10, 10)).unwrap();

        let mut ws = ws.with_heap(Box::new(BudgetHeap::unbounded()));
        assert!(ws.destroy(win).is_none());

        let stats = ws.desktop().heap_stats();
        assert_eq!(stats.allocations, 1);
        assert_eq!(stats.releases, 1);
        assert_eq!(stats.bytes_in_use, 0);
    }

    #[test]
    fn test_unmanaged_hide_draws_nothing() {
        let (mut ws, log) = unmanaged();
        let win = ws
            .create_window(None, &WindowInit::new(0, 0, 50, 50).with_show(true))
            .unwrap();
        log.clear();

        ws.set_visible(win, false);
        ws.redraw(win);
        assert!(log.is_empty());
    }

    #[test]
    fn test_defaults_apply_to_later_windows_only() {
        let (mut ws, _log) = unmanaged();
        let before = ws.create_window(None, &WindowInit::new(0, 0, 10, 10)).unwrap();
        ws.set_default_color(Color::RED);
        ws.set_default_bg_color(Color::BLUE);
        let after = ws.create_window(None, &WindowInit::new(0, 0, 10, 10)).unwrap();

        let desktop = ws.desktop();
        assert_eq!(desktop.window(before).map(WindowObject::foreground), Some(Color::WHITE));
        assert_eq!(desktop.window(before).map(WindowObject::background), Some(Color::BLACK));
        assert_eq!(desktop.window(after).map(WindowObject::foreground), Some(Color::RED));
        assert_eq!(desktop.window(after).map(WindowObject::background), Some(Color::BLUE));
        assert_eq!(ws.default_color(), Color::RED);
        assert_eq!(ws.default_bg_color(), Color::BLUE);
    }

    #[test]
    fn test_window_colors_and_font_are_per_window() {
        let (mut ws, log) = unmanaged();
        let font = Font::new("fixed_5x8", 8, 5);
        let first = ws
            .create_window(None, &WindowInit::new(0, 0, 40, 20).with_show(true))
            .unwrap();
        let second = ws.create_window(None, &WindowInit::new(50, 0, 40, 20)).unwrap();
        ws.set_color(first, Color::GREEN);
        ws.set_font(first, Some(font));
        assert!(ws.default_font().is_none());
        log.clear();

        ws.desktop_mut().draw_string(first, 1, 2, "ok");
        assert!(log.snapshot().contains(&SurfaceCall::Text {
            at: crate::foundation::geometry::Point::new(1, 2),
            text: "ok".to_string(),
            font: "fixed_5x8".to_string(),
            color: Color::GREEN,
            background: None,
        }));
        assert_eq!(
            ws.desktop().window(second).map(WindowObject::foreground),
            Some(Color::WHITE)
        );
    }

    #[test]
    fn test_stale_handle_operations_are_ignored() {
        let calls = trace();
        let (mut ws, log) = recording_system(200, 150, TracingManager::boxed(&calls));
        let win = ws
            .create_window(None, &WindowInit::new(0, 0, 10, 10).with_show(true))
            .unwrap();
        ws.destroy(win);
        calls.borrow_mut().clear();
        log.clear();

        ws.set_visible(win, false);
        ws.set_enabled(win, true);
        ws.move_to(win, 5, 5);
        ws.resize(win, 5, 5);
        ws.redraw(win);
        ws.set_min_max(win, MinMax::Maximized);
        ws.set_color(win, Color::RED);

        assert!(calls.borrow().is_empty());
        assert!(log.is_empty());
        assert_eq!(ws.bounds(win), None);
        assert!(!ws.is_visible(win));
    }

    #[test]
    fn test_from_config_wires_manager_heap_and_defaults() {
        let config = ToolkitConfig::default()
            .with_colors(Color::YELLOW, Color::GRAY)
            .with_manager(ManagerConfig::Stacking { max_windows: Some(1) })
            .with_heap_budget(4096);
        let mut ws = WindowSystem::from_config(&config, Box::new(RecordingSurface::new(64, 48)));

        assert_eq!(ws.manager_name(), "stacking");
        assert_eq!(ws.default_color(), Color::YELLOW);
        assert_eq!(ws.default_bg_color(), Color::GRAY);
        assert_eq!(ws.desktop().surface_size(), (64, 48));

        assert!(ws.create_window(None, &WindowInit::new(0, 0, 8, 8)).is_ok());
        let err = ws.create_window(None, &WindowInit::new(0, 0, 8, 8)).unwrap_err();
        assert!(matches!(err, CreateError::Rejected { reason: ManagerError::CapacityExhausted { limit: 1 }, .. }));
        assert_eq!(ws.desktop().len(), 1);
        assert_eq!(ws.desktop().heap_stats().live_blocks(), 1);
    }
}
