//! Drawing Surface Trait
//!
//! Defines the interface between the window layer and the pixel engine.
//! Keeps windows independent of the rasterizer and of the display driver
//! behind it. Every call takes absolute surface coordinates; the window layer
//! translates and clips before calling in.

pub mod recording;

use std::fmt;
use std::sync::Arc;

use crate::foundation::color::Color;
use crate::foundation::geometry::{Coord, Point, Rect};

pub use recording::{CallLog, RecordingSurface, SurfaceCall};

/// Metrics of a font face owned by the text renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    /// Face name, e.g. `"DejaVuSans12"`
    pub name: String,
    /// Line height in pixels
    pub height: Coord,
    /// Widest glyph in pixels
    pub max_width: Coord,
}

/// Shared handle to a font face
///
/// Cloning is cheap; every clone refers to the same face.
#[derive(Clone, PartialEq, Eq)]
pub struct Font(Arc<FontFace>);

impl Font {
    /// Wrap a font face for sharing between windows
    pub fn new(name: impl Into<String>, height: Coord, max_width: Coord) -> Self {
        Self(Arc::new(FontFace {
            name: name.into(),
            height,
            max_width,
        }))
    }

    /// Face name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Line height in pixels
    pub fn height(&self) -> Coord {
        self.0.height
    }

    /// Font metrics
    pub fn face(&self) -> &FontFace {
        &self.0
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Font").field(&self.0.name).finish()
    }
}

/// Horizontal justification inside a string box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Left aligned
    #[default]
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

/// An image the surface knows how to decode and draw
pub trait ImageSource {
    /// Image width and height in pixels
    fn size(&self) -> (Coord, Coord);

    /// Name for diagnostics
    fn name(&self) -> &str {
        "image"
    }
}

/// Errors reported by image drawing
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// The surface has no decoder for this image type
    #[error("Unsupported image format")]
    Unsupported,

    /// The image data is corrupt
    #[error("Bad image data: {0}")]
    BadData(String),

    /// Decoding ran out of working memory
    #[error("Out of memory while decoding image")]
    NoMemory,

    /// Reading the image failed
    #[error("Image IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend-agnostic drawing interface
///
/// Implementations must honor the clip rectangle set by [`Surface::set_clip`]
/// for every subsequent primitive until the next `set_clip`.
pub trait Surface {
    /// Surface width in pixels
    fn width(&self) -> Coord;

    /// Surface height in pixels
    fn height(&self) -> Coord;

    /// Restrict drawing to `area`
    fn set_clip(&mut self, area: Rect);

    /// Set a single pixel
    fn draw_pixel(&mut self, at: Point, color: Color);

    /// Draw a line between two points
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Draw the outline of a rectangle
    fn draw_box(&mut self, area: Rect, color: Color);

    /// Fill a rectangle
    fn fill_area(&mut self, area: Rect, color: Color);

    /// Copy a block of pixels.
    ///
    /// `src` is the top-left of the block inside `buffer`, which is
    /// `src_stride` pixels wide.
    fn blit_area(&mut self, area: Rect, src: Point, src_stride: Coord, buffer: &[Color]);

    /// Circle outline
    fn draw_circle(&mut self, center: Point, radius: Coord, color: Color);

    /// Filled circle
    fn fill_circle(&mut self, center: Point, radius: Coord, color: Color);

    /// Ellipse outline with half-axes `a` and `b`
    fn draw_ellipse(&mut self, center: Point, a: Coord, b: Coord, color: Color);

    /// Filled ellipse
    fn fill_ellipse(&mut self, center: Point, a: Coord, b: Coord, color: Color);

    /// Arc outline; angles in degrees, counter-clockwise from 3 o'clock
    fn draw_arc(&mut self, center: Point, radius: Coord, start: Coord, end: Coord, color: Color);

    /// Filled arc (pie slice)
    fn fill_arc(&mut self, center: Point, radius: Coord, start: Coord, end: Coord, color: Color);

    /// Read back a pixel
    fn pixel_color(&mut self, at: Point) -> Color;

    /// Draw a character, leaving the background untouched
    fn draw_char(&mut self, at: Point, c: char, font: &Font, color: Color);

    /// Draw a character over a filled background cell
    fn fill_char(&mut self, at: Point, c: char, font: &Font, color: Color, background: Color);

    /// Draw a string, leaving the background untouched
    fn draw_string(&mut self, at: Point, text: &str, font: &Font, color: Color);

    /// Draw a string over a filled background
    fn fill_string(&mut self, at: Point, text: &str, font: &Font, color: Color, background: Color);

    /// Draw a string justified within a box
    fn draw_string_box(&mut self, area: Rect, text: &str, font: &Font, color: Color, justify: Justify);

    /// Fill a box and draw a justified string in it
    fn fill_string_box(
        &mut self,
        area: Rect,
        text: &str,
        font: &Font,
        color: Color,
        background: Color,
        justify: Justify,
    );

    /// Polygon outline; `points` are relative to `origin`
    fn draw_poly(&mut self, origin: Point, points: &[Point], color: Color);

    /// Filled convex polygon; `points` are relative to `origin`
    fn fill_convex_poly(&mut self, origin: Point, points: &[Point], color: Color);

    /// Decode and draw the `area.width` x `area.height` block of `image`
    /// starting at `src` into `area`
    fn draw_image(&mut self, image: &mut dyn ImageSource, area: Rect, src: Point) -> Result<(), ImageError>;
}
