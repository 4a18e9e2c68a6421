//! The base window record shared by every window type

use std::fmt;

use bitflags::bitflags;

use super::class::{ClassHooks, ClassId, WindowClass};
use super::heap::Backing;
use crate::foundation::color::Color;
use crate::foundation::geometry::{Coord, Point, Rect};
use crate::surface::Font;

bitflags! {
    /// Window state bits
    ///
    /// The low byte belongs to the base window; the high byte
    /// ([`CLASS_PRIVATE`](Self::CLASS_PRIVATE)) is free for subclasses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u16 {
        /// Drawn on screen; drawing primitives only act on visible windows
        const VISIBLE = 1 << 0;
        /// Accepts user input
        const ENABLED = 1 << 1;
        /// Storage was allocated by the toolkit
        const DYNAMIC = 1 << 2;
        /// Bits reserved for window classes
        const CLASS_PRIVATE = 0xFF00;
    }
}

/// Requested initial geometry and visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowInit {
    /// Requested left edge
    pub x: Coord,
    /// Requested top edge
    pub y: Coord,
    /// Requested width
    pub width: Coord,
    /// Requested height
    pub height: Coord,
    /// Show the window once it exists
    pub show: bool,
}

impl WindowInit {
    /// Geometry request for a hidden window
    pub const fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self { x, y, width, height, show: false }
    }

    /// Show (or not) once created
    #[must_use]
    pub const fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Requested rectangle
    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Minimized / maximized / normal state, as tracked by a window manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinMax {
    /// Normal size and position
    #[default]
    Normal,
    /// Covers the whole display
    Maximized,
    /// Hidden until restored
    Minimized,
}

/// A live window
///
/// Read access is public; mutation goes through
/// [`WindowSystem`](crate::WindowSystem) so that visibility, geometry and
/// repainting stay consistent.
pub struct WindowObject {
    class: &'static dyn WindowClass,
    bounds: Rect,
    foreground: Color,
    background: Color,
    font: Option<Font>,
    flags: WindowFlags,
    pub(crate) backing: Backing,
}

impl WindowObject {
    pub(crate) fn new(
        class: &'static dyn WindowClass,
        bounds: Rect,
        foreground: Color,
        background: Color,
        font: Option<Font>,
        flags: WindowFlags,
        backing: Backing,
    ) -> Self {
        Self {
            class,
            bounds,
            foreground,
            background,
            font,
            flags,
            backing,
        }
    }

    /// Behavior table
    pub fn class(&self) -> &'static dyn WindowClass {
        self.class
    }

    /// Class name
    pub fn class_name(&self) -> &'static str {
        self.class.class_name()
    }

    /// Class identity
    pub fn class_id(&self) -> ClassId {
        ClassId::of(self.class)
    }

    /// Hooks implemented by the class
    pub fn hooks(&self) -> ClassHooks {
        self.class.hooks()
    }

    /// Screen-relative bounds
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Top-left corner on screen
    pub const fn position(&self) -> Point {
        self.bounds.origin()
    }

    /// Foreground drawing color
    pub const fn foreground(&self) -> Color {
        self.foreground
    }

    /// Background color
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Text font, if any
    pub const fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// State bits
    pub const fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// Whether the window is visible
    pub const fn is_visible(&self) -> bool {
        self.flags.contains(WindowFlags::VISIBLE)
    }

    /// Whether the window is enabled
    pub const fn is_enabled(&self) -> bool {
        self.flags.contains(WindowFlags::ENABLED)
    }

    /// Whether the toolkit allocated this window's storage
    pub const fn is_dynamic(&self) -> bool {
        self.flags.contains(WindowFlags::DYNAMIC)
    }

    /// Translate a window-relative point to surface coordinates
    pub const fn to_absolute(&self, p: Point) -> Point {
        p.offset(self.bounds.origin())
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub(crate) fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    pub(crate) fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub(crate) fn set_font(&mut self, font: Option<Font>) {
        self.font = font;
    }

    pub(crate) fn flags_mut(&mut self) -> &mut WindowFlags {
        &mut self.flags
    }
}

impl fmt::Debug for WindowObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowObject")
            .field("class", &self.class.class_name())
            .field("bounds", &self.bounds)
            .field("foreground", &self.foreground)
            .field("background", &self.background)
            .field("font", &self.font)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
