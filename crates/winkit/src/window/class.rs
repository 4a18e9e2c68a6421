//! Window classes
//!
//! Every concrete window type (plain window, label, button, console, ...)
//! provides one immutable [`WindowClass`] value shared by all of its
//! instances. A window holds a `&'static` reference to it and all
//! polymorphic behavior is dispatched through that reference.

use std::fmt;

use bitflags::bitflags;

use super::object::WindowObject;
use super::WindowHandle;
use crate::desktop::Desktop;

bitflags! {
    /// Which optional hooks a class implements
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClassHooks: u8 {
        /// [`WindowClass::destroy`] releases class-owned resources
        const DESTROY = 1 << 0;
        /// [`WindowClass::redraw`] can repaint the window from saved state
        const REDRAW = 1 << 1;
        /// [`WindowClass::after_clear`] repaints static decoration after a clear
        const AFTER_CLEAR = 1 << 2;
    }
}

/// Behavior table of a window type
///
/// Hooks not announced by [`hooks`](Self::hooks) are never called. A class
/// without [`ClassHooks::REDRAW`] cannot reproduce its contents; showing or
/// redrawing such a window clears it to its background color instead.
///
/// Class values must not be zero-sized: their address is the class identity.
pub trait WindowClass {
    /// Type name, e.g. `"Window"` or `"Button"`
    fn class_name(&self) -> &'static str;

    /// Bytes needed when the toolkit allocates an instance
    fn instance_size(&self) -> usize;

    /// Optional hooks this class implements
    fn hooks(&self) -> ClassHooks {
        ClassHooks::empty()
    }

    /// Tear down class-owned state. Runs after the window left the manager's
    /// collection and before its storage is released.
    fn destroy(&self, _desktop: &mut Desktop, _window: WindowHandle) {}

    /// Repaint the window. The clip is already set to the window bounds.
    fn redraw(&self, _desktop: &mut Desktop, _window: WindowHandle) {}

    /// Repaint decoration right after the window was cleared
    fn after_clear(&self, _desktop: &mut Desktop, _window: WindowHandle) {}
}

/// Runtime type identity of a window: the address of its class value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(usize);

impl ClassId {
    /// Identity of a class value
    pub fn of(class: &'static dyn WindowClass) -> Self {
        Self((class as *const dyn WindowClass).cast::<()>() as usize)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class@{:#x}", self.0)
    }
}

/// The class of plain windows: no hooks, so showing one clears it
#[derive(Debug)]
pub struct BaseWindowClass {
    name: &'static str,
    size: usize,
}

impl WindowClass for BaseWindowClass {
    fn class_name(&self) -> &'static str {
        self.name
    }

    fn instance_size(&self) -> usize {
        self.size
    }
}

/// Class value shared by every plain window
pub static BASE_WINDOW: BaseWindowClass = BaseWindowClass {
    name: "Window",
    size: std::mem::size_of::<WindowObject>(),
};
