//! # Core Toolkit Module
//!
//! Shared configuration for every toolkit subsystem. The window layer itself
//! lives in [`crate::window`], [`crate::manager`] and [`crate::system`]; this
//! module only decides how those pieces are composed.
//!
//! ## Organization
//!
//! - **Config**: display, default drawing state, manager choice, heap budget

pub mod config;

// Re-export commonly used config types
pub use config::{
    Config, ConfigError, DefaultsConfig, DisplayConfig, HeapConfig, ManagerConfig,
    ToolkitConfig,
};
