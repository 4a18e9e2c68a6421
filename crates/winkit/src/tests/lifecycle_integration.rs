//! End-to-end lifecycle scenarios

use super::{recording_system, trace, TracedClass, TracingManager};
use crate::foundation::geometry::Rect;
use crate::manager::StackingManager;
use crate::window::{ClassHooks, MinMax, WindowFlags, WindowInit, WindowStorage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_lifecycle_through_manager() {
        let calls = trace();
        let class = TracedClass::leak("dialog", ClassHooks::all(), &calls);
        let (mut ws, _log) = recording_system(320, 240, TracingManager::boxed(&calls));

        let win = ws
            .create(None, &WindowInit::new(10, 10, 100, 80), class, WindowFlags::ENABLED)
            .unwrap();
        ws.set_visible(win, true);
        ws.move_to(win, 20, 30);
        ws.raise(win);
        ws.set_enabled(win, false);
        ws.destroy(win);

        assert_eq!(
            *calls.borrow(),
            [
                "manager.add",
                "manager.visible",
                "dialog.redraw",
                "manager.redim",
                "dialog.redraw",
                "manager.raise",
                "dialog.redraw",
                "dialog.redraw",
                "manager.delete",
                "dialog.destroy",
            ]
        );
        assert!(ws.desktop().is_empty());
    }

    #[test]
    fn test_storage_round_trips_through_rejection() {
        let (mut ws, _log) = recording_system(100, 100, Box::new(StackingManager::new().with_capacity_limit(1)));
        let kept = ws.create_window(Some(WindowStorage::new()), &WindowInit::new(0, 0, 10, 10)).unwrap();

        let storage = ws
            .create_window(Some(WindowStorage::new()), &WindowInit::new(0, 0, 10, 10))
            .unwrap_err()
            .into_storage()
            .expect("rejected storage returned");
        assert_eq!(storage.uses(), 1);

        ws.destroy(kept);
        let reused = ws.create_window(Some(storage), &WindowInit::new(5, 5, 10, 10)).unwrap();
        assert_eq!(ws.bounds(reused), Some(Rect::new(5, 5, 10, 10)));
        assert_eq!(ws.desktop().heap_stats().allocations, 0);
    }

    #[test]
    fn test_handles_stay_distinct_after_slot_reuse() {
        let (mut ws, _log) = recording_system(100, 100, Box::new(StackingManager::new()));
        let first = ws.create_window(None, &WindowInit::new(0, 0, 10, 10)).unwrap();
        ws.destroy(first);
        let second = ws.create_window(None, &WindowInit::new(0, 0, 10, 10)).unwrap();

        assert_ne!(first, second);
        assert!(ws.desktop().contains(second));
        assert!(!ws.desktop().contains(first));
        ws.set_visible(first, true);
        assert!(!ws.is_visible(second));
    }

    #[test]
    fn test_min_max_is_ignored_without_manager_support() {
        let calls = trace();
        let (mut ws, _log) = recording_system(100, 100, TracingManager::boxed(&calls));
        let win = ws
            .create_window(None, &WindowInit::new(10, 10, 20, 20).with_show(true))
            .unwrap();

        ws.set_min_max(win, MinMax::Maximized);
        assert_eq!(ws.min_max(win), MinMax::Normal);
        assert_eq!(ws.bounds(win), Some(Rect::new(10, 10, 20, 20)));
    }

    #[test]
    fn test_move_while_maximized_applies_on_restore() {
        let (mut ws, _log) = recording_system(100, 100, Box::new(StackingManager::new()));
        let win = ws
            .create_window(None, &WindowInit::new(10, 10, 20, 20).with_show(true))
            .unwrap();

        ws.set_min_max(win, MinMax::Maximized);
        assert_eq!(ws.bounds(win), Some(Rect::new(0, 0, 100, 100)));
        ws.move_to(win, 50, 50);
        assert_eq!(ws.bounds(win), Some(Rect::new(0, 0, 100, 100)));

        // The move kept the maximized size, cut to fit
        ws.set_min_max(win, MinMax::Normal);
        assert_eq!(ws.bounds(win), Some(Rect::new(50, 50, 50, 50)));
    }
}
