//! # Winkit
//!
//! Window object model and window-manager contract for small displays.
//!
//! ## Features
//!
//! - **Window objects**: a base window record (geometry, colors, font, state
//!   flags) plus class tables that add teardown, redraw and decoration hooks
//! - **Ownership tracking**: windows live either in toolkit heap storage or in
//!   storage supplied by the caller, and are freed accordingly
//! - **Pluggable placement**: a stacking window manager, or inline clamping
//!   when no manager is installed
//! - **Guarded drawing**: every primitive is skipped for hidden windows,
//!   clipped to the window and translated to surface coordinates
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use winkit::prelude::*;
//!
//! fn main() -> Result<(), CreateError> {
//!     let surface = RecordingSurface::new(320, 240);
//!     let mut ws = WindowSystem::new(Box::new(surface), Box::new(StackingManager::new()));
//!
//!     let win = ws.create_window(None, &WindowInit::new(10, 10, 100, 60).with_show(true))?;
//!     ws.desktop_mut().draw_line(win, 0, 0, 99, 59);
//!     ws.destroy(win);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core toolkit modules
pub mod core;

pub mod config;
pub mod foundation;
pub mod surface;
pub mod window;
pub mod manager;

mod desktop;
mod system;

#[cfg(test)]
mod tests;

pub use desktop::{Defaults, Desktop};
pub use system::{CreateError, WindowSystem};

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::{
        core::{Config, ToolkitConfig, ManagerConfig},
        foundation::{
            color::Color,
            geometry::{Coord, Point, Rect},
        },
        manager::{FallbackPlacement, ManagerError, StackingManager, WindowManager},
        surface::{Font, Justify, RecordingSurface, Surface},
        window::{ClassHooks, MinMax, WindowClass, WindowFlags, WindowHandle, WindowInit, WindowStorage},
        CreateError, Defaults, Desktop, WindowSystem,
    };
}
