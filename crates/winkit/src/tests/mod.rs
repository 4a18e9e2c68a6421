//! Shared fixtures and end-to-end scenarios
//!
//! The fixtures record what happened instead of asserting inline: surface
//! calls go to a [`CallLog`], manager and class callbacks go to a [`Trace`].

mod lifecycle_integration;

use std::cell::RefCell;
use std::rc::Rc;

use crate::desktop::Desktop;
use crate::foundation::geometry::Rect;
use crate::manager::{FallbackPlacement, ManagerError, WindowManager};
use crate::surface::{CallLog, RecordingSurface};
use crate::system::WindowSystem;
use crate::window::{ClassHooks, WindowClass, WindowHandle, WindowInit, WindowObject};

/// Ordered record of manager and class callbacks
pub(crate) type Trace = Rc<RefCell<Vec<String>>>;

pub(crate) fn trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

/// Window system on a recording surface
pub(crate) fn recording_system(
    width: i32,
    height: i32,
    manager: Box<dyn WindowManager>,
) -> (WindowSystem, CallLog) {
    let surface = RecordingSurface::new(width, height);
    let log = surface.log();
    (WindowSystem::new(Box::new(surface), manager), log)
}

/// Window class that records its hook calls. The redraw hook outlines the
/// window so repaints show up on the surface.
pub(crate) struct TracedClass {
    name: &'static str,
    hooks: ClassHooks,
    trace: Trace,
}

impl TracedClass {
    /// Leak a new class so it can be used as a `&'static` descriptor
    pub(crate) fn leak(name: &'static str, hooks: ClassHooks, trace: &Trace) -> &'static dyn WindowClass {
        Box::leak(Box::new(Self {
            name,
            hooks,
            trace: Rc::clone(trace),
        }))
    }
}

impl WindowClass for TracedClass {
    fn class_name(&self) -> &'static str {
        self.name
    }

    fn instance_size(&self) -> usize {
        std::mem::size_of::<WindowObject>() + 16
    }

    fn hooks(&self) -> ClassHooks {
        self.hooks
    }

    fn destroy(&self, _desktop: &mut Desktop, _window: WindowHandle) {
        self.trace.borrow_mut().push(format!("{}.destroy", self.name));
    }

    fn redraw(&self, desktop: &mut Desktop, window: WindowHandle) {
        self.trace.borrow_mut().push(format!("{}.redraw", self.name));
        if let Some(Rect { width, height, .. }) = desktop.bounds(window) {
            desktop.draw_box(window, 0, 0, width, height);
        }
    }

    fn after_clear(&self, _desktop: &mut Desktop, _window: WindowHandle) {
        self.trace.borrow_mut().push(format!("{}.after_clear", self.name));
    }
}

/// Fallback placement that records every manager call before delegating
pub(crate) struct TracingManager {
    inner: FallbackPlacement,
    trace: Trace,
}

impl TracingManager {
    pub(crate) fn boxed(trace: &Trace) -> Box<dyn WindowManager> {
        Box::new(Self {
            inner: FallbackPlacement::new(),
            trace: Rc::clone(trace),
        })
    }

    fn record(&self, event: &str) {
        self.trace.borrow_mut().push(format!("manager.{event}"));
    }
}

impl WindowManager for TracingManager {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn add(&mut self, desktop: &mut Desktop, window: WindowHandle, init: &WindowInit) -> Result<(), ManagerError> {
        self.record("add");
        self.inner.add(desktop, window, init)
    }

    fn delete(&mut self, desktop: &mut Desktop, window: WindowHandle) {
        self.record("delete");
        self.inner.delete(desktop, window);
    }

    fn visible(&mut self, desktop: &mut Desktop, window: WindowHandle) {
        self.record("visible");
        self.inner.visible(desktop, window);
    }

    fn redim(&mut self, desktop: &mut Desktop, window: WindowHandle, target: Rect) {
        self.record("redim");
        self.inner.redim(desktop, window, target);
    }

    fn raise(&mut self, desktop: &mut Desktop, window: WindowHandle) {
        self.record("raise");
        self.inner.raise(desktop, window);
    }
}
