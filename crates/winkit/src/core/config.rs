//! # Toolkit Configuration
//!
//! Composition-time settings for a [`WindowSystem`](crate::WindowSystem):
//! the display it runs on, the drawing state new windows start with, which
//! placement strategy arbitrates visibility and geometry, and how much heap
//! dynamically created windows may consume.
//!
//! ## Configuration Categories
//!
//! - **Display Config**: surface size used by headless targets
//! - **Defaults Config**: initial foreground/background colors
//! - **Manager Config**: window manager or the unmanaged fallback path
//! - **Heap Config**: byte budget for toolkit-owned window storage

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::geometry::Coord;
use crate::manager::{FallbackPlacement, StackingManager, WindowManager};
use crate::window::heap::BudgetHeap;

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError};

/// # Display Configuration
///
/// Size of the drawing surface. Real display drivers report their own size;
/// this is consulted by headless and recording surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Surface width in pixels
    pub width: Coord,
    /// Surface height in pixels
    pub height: Coord,
}

impl DisplayConfig {
    /// Create a new display configuration
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(320, 240)
    }
}

/// # Defaults Configuration
///
/// Drawing state copied into every window at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Default foreground color
    pub foreground: Color,
    /// Default background color
    pub background: Color,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

/// # Manager Configuration
///
/// Chooses the placement strategy. Exactly one is active for the lifetime of
/// a window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManagerConfig {
    /// No window manager: geometry is clamped inline and windows repaint
    /// themselves
    #[default]
    None,
    /// Z-ordered window manager
    Stacking {
        /// Upper bound on managed windows (`None` = unbounded)
        #[serde(default)]
        max_windows: Option<usize>,
    },
}

impl ManagerConfig {
    /// Instantiate the configured strategy
    pub fn build(&self) -> Box<dyn WindowManager> {
        match *self {
            Self::None => Box::new(FallbackPlacement::new()),
            Self::Stacking { max_windows } => {
                let manager = StackingManager::new();
                Box::new(match max_windows {
                    Some(limit) => manager.with_capacity_limit(limit),
                    None => manager,
                })
            }
        }
    }
}

/// # Heap Configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapConfig {
    /// Bytes available for dynamically created windows (`None` = unbounded)
    pub budget_bytes: Option<usize>,
}

impl HeapConfig {
    /// Instantiate the configured heap
    pub fn build(&self) -> BudgetHeap {
        match self.budget_bytes {
            Some(bytes) => BudgetHeap::with_budget(bytes),
            None => BudgetHeap::unbounded(),
        }
    }
}

/// # Complete Toolkit Configuration
///
/// Top-level configuration that encompasses all toolkit subsystems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Log filter used by binaries (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Display settings
    pub display: DisplayConfig,
    /// Default drawing state
    pub defaults: DefaultsConfig,
    /// Placement strategy
    pub manager: ManagerConfig,
    /// Window storage heap
    pub heap: HeapConfig,
}

impl ToolkitConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            display: DisplayConfig::default(),
            defaults: DefaultsConfig::default(),
            manager: ManagerConfig::default(),
            heap: HeapConfig::default(),
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set display size
    #[must_use]
    pub fn with_display(mut self, width: Coord, height: Coord) -> Self {
        self.display = DisplayConfig::new(width, height);
        self
    }

    /// Set default colors
    #[must_use]
    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.defaults = DefaultsConfig {
            foreground,
            background,
        };
        self
    }

    /// Select the placement strategy
    #[must_use]
    pub fn with_manager(mut self, manager: ManagerConfig) -> Self {
        self.manager = manager;
        self
    }

    /// Limit the window heap
    #[must_use]
    pub fn with_heap_budget(mut self, bytes: usize) -> Self {
        self.heap.budget_bytes = Some(bytes);
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

        if self.display.width < 1 || self.display.height < 1 {
            return Err(format!(
                "Display must be at least 1x1, got {}x{}",
                self.display.width, self.display.height
            ));
        }

        if let ManagerConfig::Stacking {
            max_windows: Some(0),
        } = self.manager
        {
            return Err("Stacking manager needs room for at least one window".to_string());
        }

        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(format!("Unknown log level: {}", self.log_level));
        }

        Ok(())
    }
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ToolkitConfig {}
