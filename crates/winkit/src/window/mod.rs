//! Window object model
//!
//! - [`object`]: the base window record and its flags
//! - [`class`]: per-type behavior tables and class identity
//! - [`heap`]: toolkit-owned versus caller-owned window storage

pub mod class;
pub mod heap;
pub mod object;

pub use class::{BaseWindowClass, ClassHooks, ClassId, WindowClass, BASE_WINDOW};
pub use heap::{BudgetHeap, HeapBlock, HeapStats, WindowHeap, WindowStorage};
pub use object::{MinMax, WindowFlags, WindowInit, WindowObject};

slotmap::new_key_type! {
    /// Handle to a live window.
    ///
    /// Handles are generational: once a window is destroyed its handle never
    /// resolves again, even if the slot is reused.
    pub struct WindowHandle;
}
