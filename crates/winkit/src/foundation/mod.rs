//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the toolkit:
//! - Geometry types (coordinates, points, rectangles)
//! - Colors
//! - Logging utilities

pub mod color;
pub mod geometry;
pub mod logging;
