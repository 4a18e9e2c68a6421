//! Recording surface
//!
//! A [`Surface`] that performs no rasterization and instead appends every
//! call to a shared [`CallLog`]. Used for host-side tests and for tracing a
//! window session without a display attached.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Font, ImageError, ImageSource, Justify, Surface};
use crate::foundation::color::Color;
use crate::foundation::geometry::{Coord, Point, Rect};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    /// `set_clip`
    SetClip(Rect),
    /// `draw_pixel`
    Pixel { at: Point, color: Color },
    /// `draw_line`
    Line { from: Point, to: Point, color: Color },
    /// `draw_box`
    Box { area: Rect, color: Color },
    /// `fill_area`
    Fill { area: Rect, color: Color },
    /// `blit_area`
    Blit { area: Rect, src: Point, src_stride: Coord, pixels: usize },
    /// `draw_circle` / `fill_circle`
    Circle { center: Point, radius: Coord, color: Color, filled: bool },
    /// `draw_ellipse` / `fill_ellipse`
    Ellipse { center: Point, a: Coord, b: Coord, color: Color, filled: bool },
    /// `draw_arc` / `fill_arc`
    Arc { center: Point, radius: Coord, start: Coord, end: Coord, color: Color, filled: bool },
    /// `pixel_color`
    ReadPixel { at: Point },
    /// `draw_char` / `fill_char`
    Char { at: Point, c: char, font: String, color: Color, background: Option<Color> },
    /// `draw_string` / `fill_string`
    Text { at: Point, text: String, font: String, color: Color, background: Option<Color> },
    /// `draw_string_box` / `fill_string_box`
    TextBox {
        area: Rect,
        text: String,
        font: String,
        color: Color,
        background: Option<Color>,
        justify: Justify,
    },
    /// `draw_poly` / `fill_convex_poly`
    Poly { origin: Point, points: Vec<Point>, color: Color, filled: bool },
    /// `draw_image`
    Image { name: String, area: Rect, src: Point },
}

impl SurfaceCall {
    /// Whether this call changes pixels (everything but clip and readback)
    pub const fn is_paint(&self) -> bool {
        !matches!(self, Self::SetClip(_) | Self::ReadPixel { .. })
    }
}

/// Shared, cloneable view of the calls a [`RecordingSurface`] received
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<SurfaceCall>>>);

impl CallLog {
    /// Copy of every call recorded so far
    pub fn snapshot(&self) -> Vec<SurfaceCall> {
        self.0.borrow().clone()
    }

    /// Drain the log
    pub fn take(&self) -> Vec<SurfaceCall> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Number of recorded calls
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Number of recorded calls that change pixels
    pub fn paint_count(&self) -> usize {
        self.0.borrow().iter().filter(|call| call.is_paint()).count()
    }

    fn push(&self, call: SurfaceCall) {
        log::trace!("surface: {call:?}");
        self.0.borrow_mut().push(call);
    }
}

/// A surface that records instead of drawing
#[derive(Debug)]
pub struct RecordingSurface {
    width: Coord,
    height: Coord,
    backdrop: Color,
    pixels: HashMap<Point, Color>,
    log: CallLog,
}

impl RecordingSurface {
    /// Create a recording surface of the given size
    pub fn new(width: Coord, height: Coord) -> Self {
        Self {
            width,
            height,
            backdrop: Color::BLACK,
            pixels: HashMap::new(),
            log: CallLog::default(),
        }
    }

    /// Color reported by readback for pixels never set with `draw_pixel`
    #[must_use]
    pub const fn with_backdrop(mut self, backdrop: Color) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Handle to the call log; stays valid after the surface is boxed
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> Coord {
        self.width
    }

    fn height(&self) -> Coord {
        self.height
    }

    fn set_clip(&mut self, area: Rect) {
        self.log.push(SurfaceCall::SetClip(area));
    }

    fn draw_pixel(&mut self, at: Point, color: Color) {
        self.pixels.insert(at, color);
        self.log.push(SurfaceCall::Pixel { at, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.log.push(SurfaceCall::Line { from, to, color });
    }

    fn draw_box(&mut self, area: Rect, color: Color) {
        self.log.push(SurfaceCall::Box { area, color });
    }

    fn fill_area(&mut self, area: Rect, color: Color) {
        self.log.push(SurfaceCall::Fill { area, color });
    }

    fn blit_area(&mut self, area: Rect, src: Point, src_stride: Coord, buffer: &[Color]) {
        self.log.push(SurfaceCall::Blit {
            area,
            src,
            src_stride,
            pixels: buffer.len(),
        });
    }

    fn draw_circle(&mut self, center: Point, radius: Coord, color: Color) {
        self.log.push(SurfaceCall::Circle { center, radius, color, filled: false });
    }

    fn fill_circle(&mut self, center: Point, radius: Coord, color: Color) {
        self.log.push(SurfaceCall::Circle { center, radius, color, filled: true });
    }

    fn draw_ellipse(&mut self, center: Point, a: Coord, b: Coord, color: Color) {
        self.log.push(SurfaceCall::Ellipse { center, a, b, color, filled: false });
    }

    fn fill_ellipse(&mut self, center: Point, a: Coord, b: Coord, color: Color) {
        self.log.push(SurfaceCall::Ellipse { center, a, b, color, filled: true });
    }

    fn draw_arc(&mut self, center: Point, radius: Coord, start: Coord, end: Coord, color: Color) {
        self.log.push(SurfaceCall::Arc { center, radius, start, end, color, filled: false });
    }

    fn fill_arc(&mut self, center: Point, radius: Coord, start: Coord, end: Coord, color: Color) {
        self.log.push(SurfaceCall::Arc { center, radius, start, end, color, filled: true });
    }

    fn pixel_color(&mut self, at: Point) -> Color {
        self.log.push(SurfaceCall::ReadPixel { at });
        self.pixels.get(&at).copied().unwrap_or(self.backdrop)
    }

    fn draw_char(&mut self, at: Point, c: char, font: &Font, color: Color) {
        self.log.push(SurfaceCall::Char {
            at,
            c,
            font: font.name().to_string(),
            color,
            background: None,
        });
    }

    fn fill_char(&mut self, at: Point, c: char, font: &Font, color: Color, background: Color) {
        self.log.push(SurfaceCall::Char {
            at,
            c,
            font: font.name().to_string(),
            color,
            background: Some(background),
        });
    }

    fn draw_string(&mut self, at: Point, text: &str, font: &Font, color: Color) {
        self.log.push(SurfaceCall::Text {
            at,
            text: text.to_string(),
            font: font.name().to_string(),
            color,
            background: None,
        });
    }

    fn fill_string(&mut self, at: Point, text: &str, font: &Font, color: Color, background: Color) {
        self.log.push(SurfaceCall::Text {
            at,
            text: text.to_string(),
            font: font.name().to_string(),
            color,
            background: Some(background),
        });
    }

    fn draw_string_box(&mut self, area: Rect, text: &str, font: &Font, color: Color, justify: Justify) {
        self.log.push(SurfaceCall::TextBox {
            area,
            text: text.to_string(),
            font: font.name().to_string(),
            color,
            background: None,
            justify,
        });
    }

    fn fill_string_box(
        &mut self,
        area: Rect,
        text: &str,
        font: &Font,
        color: Color,
        background: Color,
        justify: Justify,
    ) {
        self.log.push(SurfaceCall::TextBox {
            area,
            text: text.to_string(),
            font: font.name().to_string(),
            color,
            background: Some(background),
            justify,
        });
    }

    fn draw_poly(&mut self, origin: Point, points: &[Point], color: Color) {
        self.log.push(SurfaceCall::Poly {
            origin,
            points: points.to_vec(),
            color,
            filled: false,
        });
    }

    fn fill_convex_poly(&mut self, origin: Point, points: &[Point], color: Color) {
        self.log.push(SurfaceCall::Poly {
            origin,
            points: points.to_vec(),
            color,
            filled: true,
        });
    }

    fn draw_image(&mut self, image: &mut dyn ImageSource, area: Rect, src: Point) -> Result<(), ImageError> {
        self.log.push(SurfaceCall::Image {
            name: image.name().to_string(),
            area,
            src,
        });
        Ok(())
    }
}
