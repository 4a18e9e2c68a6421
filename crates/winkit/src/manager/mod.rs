//! Placement strategies
//!
//! A [`WindowManager`] arbitrates window registration, visibility changes,
//! geometry changes and stacking. Exactly one strategy is installed per
//! [`WindowSystem`](crate::WindowSystem), chosen when it is composed:
//!
//! - [`StackingManager`]: z-ordered manager that reclaims vacated screen
//!   areas and repaints overlapped windows
//! - [`FallbackPlacement`]: no manager at all; geometry is clamped inline and
//!   windows repaint only themselves
//!
//! The facade calls [`add`](WindowManager::add),
//! [`delete`](WindowManager::delete), [`visible`](WindowManager::visible) and
//! [`raise`](WindowManager::raise) only on real transitions;
//! [`stay_hidden`](WindowManager::stay_hidden) reports a hide request that
//! changed nothing.
//! [`redim`](WindowManager::redim) is always called, with the full target
//! rectangle.

pub mod fallback;
pub mod stacking;

pub use fallback::{clamp_to_surface, FallbackPlacement, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
pub use stacking::StackingManager;

use crate::desktop::Desktop;
use crate::foundation::geometry::Rect;
use crate::window::{MinMax, WindowHandle, WindowInit};

/// Reasons a manager refuses a window
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// The manager's collection is full
    #[error("Window manager is full ({limit} windows)")]
    CapacityExhausted {
        /// Configured limit
        limit: usize,
    },

    /// The window is already registered
    #[error("Window is already managed")]
    AlreadyManaged,
}

/// Operation set a placement strategy implements
///
/// Every method runs synchronously inside the facade call that triggered it.
pub trait WindowManager {
    /// Strategy name for diagnostics
    fn name(&self) -> &'static str;

    /// Register a freshly constructed window and apply its requested
    /// geometry. On error the window is discarded by the caller, so the
    /// manager must not keep any reference to it.
    fn add(&mut self, desktop: &mut Desktop, window: WindowHandle, init: &WindowInit) -> Result<(), ManagerError>;

    /// Forget a window that is about to be destroyed
    fn delete(&mut self, desktop: &mut Desktop, window: WindowHandle);

    /// React to the VISIBLE flag having just changed
    fn visible(&mut self, desktop: &mut Desktop, window: WindowHandle);

    /// A hide was requested for a window that is already hidden. Managers
    /// that hide windows themselves (minimize) drop any pending re-show.
    fn stay_hidden(&mut self, _window: WindowHandle) {}

    /// Move and/or resize. `target` is advisory; the strategy decides the
    /// final rectangle and what to repaint.
    fn redim(&mut self, desktop: &mut Desktop, window: WindowHandle, target: Rect);

    /// Bring a window to the front and repaint it
    fn raise(&mut self, desktop: &mut Desktop, window: WindowHandle);

    /// Minimize, maximize or restore. Strategies without the notion ignore it.
    fn set_min_max(&mut self, _desktop: &mut Desktop, _window: WindowHandle, _state: MinMax) {}

    /// Current min/max state
    fn min_max(&self, _window: WindowHandle) -> MinMax {
        MinMax::Normal
    }
}
