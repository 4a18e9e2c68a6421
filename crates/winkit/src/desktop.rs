//! Desktop
//!
//! The state every window operation works on: the live windows, the drawing
//! surface, the window heap and the default drawing state. Placement
//! strategies and class hooks receive `&mut Desktop`; the
//! [`WindowSystem`](crate::WindowSystem) facade owns it.
//!
//! All drawing primitives share one guard-and-dispatch path:
//! 1. hidden (or stale) windows are skipped without touching the surface,
//! 2. the surface clip is set to the window bounds on every call,
//! 3. window-relative coordinates are offset by the window position and the
//!    window's colors are passed along.

use slotmap::SlotMap;

use crate::foundation::color::Color;
use crate::foundation::geometry::{Coord, Point, Rect};
use crate::surface::{Font, ImageError, ImageSource, Justify, Surface};
use crate::window::heap::{BudgetHeap, HeapStats, WindowHeap};
use crate::window::{ClassHooks, WindowFlags, WindowHandle, WindowObject};

/// Drawing state copied into every new window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Foreground color
    pub foreground: Color,
    /// Background color; also what hidden windows read back and what
    /// managers fill vacated areas with
    pub background: Color,
    /// Font for text primitives
    pub font: Option<Font>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::BLACK,
            font: None,
        }
    }
}

/// Windows, surface, heap and defaults
pub struct Desktop {
    windows: SlotMap<WindowHandle, WindowObject>,
    surface: Box<dyn Surface>,
    heap: Box<dyn WindowHeap>,
    defaults: Defaults,
}

impl Desktop {
    /// Create an empty desktop on `surface` with an unbounded heap
    pub fn new(surface: Box<dyn Surface>) -> Self {
        Self {
            windows: SlotMap::with_key(),
            surface,
            heap: Box::new(BudgetHeap::unbounded()),
            defaults: Defaults::default(),
        }
    }

    /// Replace the window heap. Refused once any window exists, since live
    /// heap windows must be released to the heap that allocated them.
    #[must_use]
    pub fn with_heap(mut self, heap: Box<dyn WindowHeap>) -> Self {
        if self.windows.is_empty() {
            self.heap = heap;
        } else {
            log::warn!(
                "Keeping the current window heap: {} windows are still live",
                self.windows.len()
            );
        }
        self
    }

    /// Replace the default drawing state
    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    // Queries

    /// Look up a live window
    pub fn window(&self, window: WindowHandle) -> Option<&WindowObject> {
        self.windows.get(window)
    }

    /// Whether the handle refers to a live window
    pub fn contains(&self, window: WindowHandle) -> bool {
        self.windows.contains_key(window)
    }

    /// State bits; empty for destroyed windows
    pub fn flags(&self, window: WindowHandle) -> WindowFlags {
        self.windows
            .get(window)
            .map_or(WindowFlags::empty(), WindowObject::flags)
    }

    /// Current bounds
    pub fn bounds(&self, window: WindowHandle) -> Option<Rect> {
        self.windows.get(window).map(WindowObject::bounds)
    }

    /// Iterate over live windows in no particular order
    pub fn windows(&self) -> impl Iterator<Item = (WindowHandle, &WindowObject)> {
        self.windows.iter()
    }

    /// Number of live windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when no window exists
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Surface width and height
    pub fn surface_size(&self) -> (Coord, Coord) {
        (self.surface.width(), self.surface.height())
    }

    /// The whole surface as a rectangle
    pub fn surface_rect(&self) -> Rect {
        Rect::new(0, 0, self.surface.width(), self.surface.height())
    }

    /// The drawing surface
    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }

    /// The drawing surface, for class hooks that draw outside the primitives
    pub fn surface_mut(&mut self) -> &mut dyn Surface {
        self.surface.as_mut()
    }

    /// Heap counters
    pub fn heap_stats(&self) -> HeapStats {
        self.heap.stats()
    }

    /// Default drawing state
    pub const fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub(crate) fn defaults_mut(&mut self) -> &mut Defaults {
        &mut self.defaults
    }

    // Storage

    pub(crate) fn heap_mut(&mut self) -> &mut dyn WindowHeap {
        self.heap.as_mut()
    }

    pub(crate) fn insert(&mut self, window: WindowObject) -> WindowHandle {
        self.windows.insert(window)
    }

    pub(crate) fn remove(&mut self, window: WindowHandle) -> Option<WindowObject> {
        self.windows.remove(window)
    }

    pub(crate) fn window_mut(&mut self, window: WindowHandle) -> Option<&mut WindowObject> {
        self.windows.get_mut(window)
    }

    // Placement support

    /// Move and size a window without repainting. Placement strategies call
    /// this once they have settled on the final rectangle.
    pub fn set_bounds(&mut self, window: WindowHandle, bounds: Rect) {
        if let Some(win) = self.windows.get_mut(window) {
            win.set_bounds(bounds);
        }
    }

    pub(crate) fn update_flags(&mut self, window: WindowHandle, update: impl FnOnce(&mut WindowFlags)) {
        if let Some(win) = self.windows.get_mut(window) {
            update(win.flags_mut());
        }
    }

    /// Show procedure: repaint a visible window from its saved state, or
    /// clear it to its background when its class cannot redraw.
    pub fn repaint(&mut self, window: WindowHandle) {
        if !self.redraw_in_place(window) {
            self.clear(window);
        }
    }

    /// Run the class redraw hook of a visible window with the clip set to its
    /// bounds. Returns `false` when the window is hidden or its class has no
    /// redraw hook.
    pub fn redraw_in_place(&mut self, window: WindowHandle) -> bool {
        let Some(win) = Self::drawable(&self.windows, window) else {
            return false;
        };
        let class = win.class();
        if !class.hooks().contains(ClassHooks::REDRAW) {
            return false;
        }

        log::trace!("Redrawing {} {window:?}", class.class_name());
        self.surface.set_clip(win.bounds());
        class.redraw(self, window);
        true
    }

    /// Fill a screen area with the default background color
    pub fn clear_area(&mut self, area: Rect) {
        if area.is_empty() {
            return;
        }
        self.surface.set_clip(area);
        self.surface.fill_area(area, self.defaults.background);
    }

    fn drawable(
        windows: &SlotMap<WindowHandle, WindowObject>,
        window: WindowHandle,
    ) -> Option<&WindowObject> {
        match windows.get(window) {
            Some(win) if win.is_visible() => Some(win),
            Some(_) => None,
            None => {
                log::warn!("Ignoring draw on destroyed window {window:?}");
                None
            }
        }
    }

    fn paint<R>(
        &mut self,
        window: WindowHandle,
        hidden: R,
        op: impl FnOnce(&mut dyn Surface, &WindowObject) -> R,
    ) -> R {
        let Some(win) = Self::drawable(&self.windows, window) else {
            return hidden;
        };
        self.surface.set_clip(win.bounds());
        op(self.surface.as_mut(), win)
    }

    fn paint_text(&mut self, window: WindowHandle, op: impl FnOnce(&mut dyn Surface, &WindowObject, &Font)) {
        let Some(win) = Self::drawable(&self.windows, window) else {
            return;
        };
        let Some(font) = win.font() else {
            return;
        };
        self.surface.set_clip(win.bounds());
        op(self.surface.as_mut(), win, font);
    }

    // Drawing primitives (window-relative coordinates)

    /// Fill the window with its background color, then let the class repaint
    /// its decoration
    pub fn clear(&mut self, window: WindowHandle) {
        let Some(win) = Self::drawable(&self.windows, window) else {
            return;
        };
        let (bounds, background, class) = (win.bounds(), win.background(), win.class());

        self.surface.set_clip(bounds);
        self.surface.fill_area(bounds, background);
        if class.hooks().contains(ClassHooks::AFTER_CLEAR) {
            class.after_clear(self, window);
        }
    }

    /// Set a pixel in the foreground color
    pub fn draw_pixel(&mut self, window: WindowHandle, x: Coord, y: Coord) {
        self.paint(window, (), |surface, win| {
            surface.draw_pixel(win.to_absolute(Point::new(x, y)), win.foreground());
        });
    }

    /// Draw a line
    pub fn draw_line(&mut self, window: WindowHandle, x0: Coord, y0: Coord, x1: Coord, y1: Coord) {
        self.paint(window, (), |surface, win| {
            surface.draw_line(
                win.to_absolute(Point::new(x0, y0)),
                win.to_absolute(Point::new(x1, y1)),
                win.foreground(),
            );
        });
    }

    /// Draw a rectangle outline
    pub fn draw_box(&mut self, window: WindowHandle, x: Coord, y: Coord, cx: Coord, cy: Coord) {
        self.paint(window, (), |surface, win| {
            let origin = win.to_absolute(Point::new(x, y));
            surface.draw_box(Rect::new(origin.x, origin.y, cx, cy), win.foreground());
        });
    }

    /// Fill a rectangle in the foreground color
    pub fn fill_area(&mut self, window: WindowHandle, x: Coord, y: Coord, cx: Coord, cy: Coord) {
        self.paint(window, (), |surface, win| {
            let origin = win.to_absolute(Point::new(x, y));
            surface.fill_area(Rect::new(origin.x, origin.y, cx, cy), win.foreground());
        });
    }

    /// Copy a block of `buffer` (which is `src_stride` pixels wide) starting
    /// at (`src_x`, `src_y`) into the window
    pub fn blit_area(
        &mut self,
        window: WindowHandle,
        x: Coord,
        y: Coord,
        cx: Coord,
        cy: Coord,
        src_x: Coord,
        src_y: Coord,
        src_stride: Coord,
        buffer: &[Color],
    ) {
        self.paint(window, (), |surface, win| {
            let origin = win.to_absolute(Point::new(x, y));
            surface.blit_area(
                Rect::new(origin.x, origin.y, cx, cy),
                Point::new(src_x, src_y),
                src_stride,
                buffer,
            );
        });
    }

    /// Circle outline
    pub fn draw_circle(&mut self, window: WindowHandle, x: Coord, y: Coord, radius: Coord) {
        self.paint(window, (), |surface, win| {
            surface.draw_circle(win.to_absolute(Point::new(x, y)), radius, win.foreground());
        });
    }

    /// Filled circle
    pub fn fill_circle(&mut self, window: WindowHandle, x: Coord, y: Coord, radius: Coord) {
        self.paint(window, (), |surface, win| {
            surface.fill_circle(win.to_absolute(Point::new(x, y)), radius, win.foreground());
        });
    }

    /// Ellipse outline
    pub fn draw_ellipse(&mut self, window: WindowHandle, x: Coord, y: Coord, a: Coord, b: Coord) {
        self.paint(window, (), |surface, win| {
            surface.draw_ellipse(win.to_absolute(Point::new(x, y)), a, b, win.foreground());
        });
    }

    /// Filled ellipse
    pub fn fill_ellipse(&mut self, window: WindowHandle, x: Coord, y: Coord, a: Coord, b: Coord) {
        self.paint(window, (), |surface, win| {
            surface.fill_ellipse(win.to_absolute(Point::new(x, y)), a, b, win.foreground());
        });
    }

    /// Arc outline
    pub fn draw_arc(
        &mut self,
        window: WindowHandle,
        x: Coord,
        y: Coord,
        radius: Coord,
        start_angle: Coord,
        end_angle: Coord,
    ) {
        self.paint(window, (), |surface, win| {
            surface.draw_arc(
                win.to_absolute(Point::new(x, y)),
                radius,
                start_angle,
                end_angle,
                win.foreground(),
            );
        });
    }

    /// Filled arc
    pub fn fill_arc(
        &mut self,
        window: WindowHandle,
        x: Coord,
        y: Coord,
        radius: Coord,
        start_angle: Coord,
        end_angle: Coord,
    ) {
        self.paint(window, (), |surface, win| {
            surface.fill_arc(
                win.to_absolute(Point::new(x, y)),
                radius,
                start_angle,
                end_angle,
                win.foreground(),
            );
        });
    }

    /// Read a pixel. Hidden windows report the default background color
    /// without sampling the surface.
    pub fn pixel_color(&mut self, window: WindowHandle, x: Coord, y: Coord) -> Color {
        let hidden = self.defaults.background;
        self.paint(window, hidden, |surface, win| {
            surface.pixel_color(win.to_absolute(Point::new(x, y)))
        })
    }

    /// Draw a character; no-op without a font
    pub fn draw_char(&mut self, window: WindowHandle, x: Coord, y: Coord, c: char) {
        self.paint_text(window, |surface, win, font| {
            surface.draw_char(win.to_absolute(Point::new(x, y)), c, font, win.foreground());
        });
    }

    /// Draw a character on its background cell; no-op without a font
    pub fn fill_char(&mut self, window: WindowHandle, x: Coord, y: Coord, c: char) {
        self.paint_text(window, |surface, win, font| {
            surface.fill_char(
                win.to_absolute(Point::new(x, y)),
                c,
                font,
                win.foreground(),
                win.background(),
            );
        });
    }

    /// Draw a string; no-op without a font
    pub fn draw_string(&mut self, window: WindowHandle, x: Coord, y: Coord, text: &str) {
        self.paint_text(window, |surface, win, font| {
            surface.draw_string(win.to_absolute(Point::new(x, y)), text, font, win.foreground());
        });
    }

    /// Draw a string over its background; no-op without a font
    pub fn fill_string(&mut self, window: WindowHandle, x: Coord, y: Coord, text: &str) {
        self.paint_text(window, |surface, win, font| {
            surface.fill_string(
                win.to_absolute(Point::new(x, y)),
                text,
                font,
                win.foreground(),
                win.background(),
            );
        });
    }

    /// Draw a justified string inside a box; no-op without a font
    pub fn draw_string_box(
        &mut self,
        window: WindowHandle,
        x: Coord,
        y: Coord,
        cx: Coord,
        cy: Coord,
        text: &str,
        justify: Justify,
    ) {
        self.paint_text(window, |surface, win, font| {
            let origin = win.to_absolute(Point::new(x, y));
            surface.draw_string_box(
                Rect::new(origin.x, origin.y, cx, cy),
                text,
                font,
                win.foreground(),
                justify,
            );
        });
    }

    /// Fill a box and draw a justified string in it; no-op without a font
    pub fn fill_string_box(
        &mut self,
        window: WindowHandle,
        x: Coord,
        y: Coord,
        cx: Coord,
        cy: Coord,
        text: &str,
        justify: Justify,
    ) {
        self.paint_text(window, |surface, win, font| {
            let origin = win.to_absolute(Point::new(x, y));
            surface.fill_string_box(
                Rect::new(origin.x, origin.y, cx, cy),
                text,
                font,
                win.foreground(),
                win.background(),
                justify,
            );
        });
    }

    /// Polygon outline; `points` are relative to (`tx`, `ty`)
    pub fn draw_poly(&mut self, window: WindowHandle, tx: Coord, ty: Coord, points: &[Point]) {
        self.paint(window, (), |surface, win| {
            surface.draw_poly(win.to_absolute(Point::new(tx, ty)), points, win.foreground());
        });
    }

    /// Filled convex polygon; `points` are relative to (`tx`, `ty`)
    pub fn fill_convex_poly(&mut self, window: WindowHandle, tx: Coord, ty: Coord, points: &[Point]) {
        self.paint(window, (), |surface, win| {
            surface.fill_convex_poly(win.to_absolute(Point::new(tx, ty)), points, win.foreground());
        });
    }

    /// Draw the `cx` x `cy` block of `image` starting at (`sx`, `sy`).
    /// Drawing into a hidden window succeeds without decoding anything.
    pub fn draw_image(
        &mut self,
        window: WindowHandle,
        image: &mut dyn ImageSource,
        x: Coord,
        y: Coord,
        cx: Coord,
        cy: Coord,
        sx: Coord,
        sy: Coord,
    ) -> Result<(), ImageError> {
        self.paint(window, Ok(()), |surface, win| {
            let origin = win.to_absolute(Point::new(x, y));
            surface.draw_image(image, Rect::new(origin.x, origin.y, cx, cy), Point::new(sx, sy))
        })
    }
}
