// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Coordinate-mapped drag controller.
//!
//! Translates device-space pointer movement into logical-canvas position
//! deltas for exactly one element at a time. The canvas may be rendered at
//! an arbitrary uniform scale relative to its fixed 1280x720 logical size;
//! deltas are divided by `rendered_width / 1280` to stay in logical units.
//!
//! The controller never owns the poster. It issues selection and position
//! update requests through [`PosterHost`], a small capability interface the
//! application implements over its own state.

use crate::models::poster::{ElementId, LOGICAL_WIDTH};

/// Capability interface to the state owner holding the poster.
pub trait PosterHost {
    /// Mark an element as the current selection.
    fn select_element(&mut self, id: ElementId);

    /// Current stored position of an element, logical units.
    /// `None` if the element is unknown.
    fn element_position(&self, id: ElementId) -> Option<(f32, f32)>;

    /// Request that an element move to a new logical position.
    fn update_element_position(&mut self, id: ElementId, x: f32, y: f32);
}

/// A pointer position in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePoint {
    pub x: f32,
    pub y: f32,
}

impl DevicePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The single active gesture: which element, and where the pointer was at
/// the last applied update.
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    element: ElementId,
    anchor: DevicePoint,
}

/// Tracks at most one drag gesture. Idle when `active` is `None`.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn dragged_element(&self) -> Option<ElementId> {
        self.active.map(|drag| drag.element)
    }

    /// Pointer-down over an element: start (or restart) the drag and select
    /// the element. A press while another drag is active simply overwrites
    /// it; devices deliver down/up in matched pairs under normal operation.
    pub fn pointer_down(&mut self, host: &mut dyn PosterHost, id: ElementId, pointer: DevicePoint) {
        self.active = Some(ActiveDrag {
            element: id,
            anchor: pointer,
        });
        host.select_element(id);
        log::debug!(
            "drag started on {:?} at device ({:.1}, {:.1})",
            id,
            pointer.x,
            pointer.y
        );
    }

    /// Pointer-move: apply the incremental device delta to the dragged
    /// element, scaled into logical units.
    ///
    /// No-op when idle, when the rendering surface is unmounted
    /// (`rendered_width` is `None`), when the scale would be non-positive or
    /// non-finite, or when the host does not know the element. A skipped
    /// move leaves the anchor untouched, so the next applied move measures
    /// the full delta since the last update.
    pub fn pointer_moved(
        &mut self,
        host: &mut dyn PosterHost,
        pointer: DevicePoint,
        rendered_width: Option<f32>,
    ) {
        let Some(drag) = self.active.as_mut() else {
            return;
        };
        let Some(rendered_width) = rendered_width else {
            return;
        };

        let scale = rendered_width / LOGICAL_WIDTH;
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }

        let Some((x, y)) = host.element_position(drag.element) else {
            return;
        };

        let delta_x = (pointer.x - drag.anchor.x) / scale;
        let delta_y = (pointer.y - drag.anchor.y) / scale;
        host.update_element_position(drag.element, x + delta_x, y + delta_y);
        drag.anchor = pointer;
    }

    /// Pointer-up, from the element or from the document-level fallback:
    /// end the drag wherever the release happened.
    pub fn pointer_up(&mut self) {
        if let Some(drag) = self.active.take() {
            log::debug!("drag ended on {:?}", drag.element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Recording host: positions plus a log of every request the
    /// controller issues.
    struct MockHost {
        positions: BTreeMap<ElementId, (f32, f32)>,
        selected: Vec<ElementId>,
        updates: Vec<(ElementId, f32, f32)>,
    }

    impl MockHost {
        fn new() -> Self {
            let mut positions = BTreeMap::new();
            positions.insert(ElementId::Title, (400.0, 120.0));
            positions.insert(ElementId::Lecturer, (220.0, 320.0));
            Self {
                positions,
                selected: Vec::new(),
                updates: Vec::new(),
            }
        }
    }

    impl PosterHost for MockHost {
        fn select_element(&mut self, id: ElementId) {
            self.selected.push(id);
        }

        fn element_position(&self, id: ElementId) -> Option<(f32, f32)> {
            self.positions.get(&id).copied()
        }

        fn update_element_position(&mut self, id: ElementId, x: f32, y: f32) {
            self.positions.insert(id, (x, y));
            self.updates.push((id, x, y));
        }
    }

    #[test]
    fn move_at_native_scale_applies_raw_delta() {
        let mut host = MockHost::new();
        let mut drag = DragController::new();

        drag.pointer_down(&mut host, ElementId::Title, DevicePoint::new(100.0, 100.0));
        drag.pointer_moved(&mut host, DevicePoint::new(110.0, 115.0), Some(1280.0));

        let (x, y) = host.positions[&ElementId::Title];
        assert!((x - 410.0).abs() < 1e-4);
        assert!((y - 135.0).abs() < 1e-4);
    }

    #[test]
    fn move_at_half_scale_doubles_delta() {
        let mut host = MockHost::new();
        let mut drag = DragController::new();

        drag.pointer_down(&mut host, ElementId::Title, DevicePoint::new(100.0, 100.0));
        drag.pointer_moved(&mut host, DevicePoint::new(110.0, 115.0), Some(640.0));

        let (x, y) = host.positions[&ElementId::Title];
        assert!((x - 420.0).abs() < 1e-4);
        assert!((y - 150.0).abs() < 1e-4);
    }

    #[test]
    fn many_small_moves_match_one_large_move() {
        let mut stepped = MockHost::new();
        let mut drag = DragController::new();
        drag.pointer_down(&mut stepped, ElementId::Title, DevicePoint::new(0.0, 0.0));
        for step in 1..=20 {
            let pointer = DevicePoint::new(step as f32 * 1.7, step as f32 * -2.3);
            drag.pointer_moved(&mut stepped, pointer, Some(640.0));
        }

        let mut single = MockHost::new();
        let mut drag = DragController::new();
        drag.pointer_down(&mut single, ElementId::Title, DevicePoint::new(0.0, 0.0));
        drag.pointer_moved(&mut single, DevicePoint::new(34.0, -46.0), Some(640.0));

        let (sx, sy) = stepped.positions[&ElementId::Title];
        let (ox, oy) = single.positions[&ElementId::Title];
        assert!((sx - ox).abs() < 1e-3);
        assert!((sy - oy).abs() < 1e-3);
        assert_eq!(stepped.updates.len(), 20);
        assert_eq!(single.updates.len(), 1);
    }

    #[test]
    fn pointer_down_selects_immediately() {
        let mut host = MockHost::new();
        let mut drag = DragController::new();

        drag.pointer_down(&mut host, ElementId::Lecturer, DevicePoint::new(5.0, 5.0));

        assert_eq!(host.selected, vec![ElementId::Lecturer]);
        assert_eq!(drag.dragged_element(), Some(ElementId::Lecturer));
        assert!(host.updates.is_empty());
    }

    #[test]
    fn no_updates_while_idle() {
        let mut host = MockHost::new();
        let mut drag = DragController::new();

        drag.pointer_moved(&mut host, DevicePoint::new(500.0, 500.0), Some(1280.0));

        assert!(host.updates.is_empty());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_anywhere_ends_the_drag() {
        let mut host = MockHost::new();
        let mut drag = DragController::new();

        drag.pointer_down(&mut host, ElementId::Title, DevicePoint::new(100.0, 100.0));
        // Release arrives from the document-level fallback, far outside the
        // element bounds.
        drag.pointer_up();

        assert!(!drag.is_dragging());
        drag.pointer_moved(&mut host, DevicePoint::new(400.0, 400.0), Some(1280.0));
        assert!(host.updates.is_empty());
    }

    #[test]
    fn press_on_second_element_takes_over_the_drag() {
        let mut host = MockHost::new();
        let mut drag = DragController::new();

        drag.pointer_down(&mut host, ElementId::Title, DevicePoint::new(100.0, 100.0));
        drag.pointer_down(&mut host, ElementId::Lecturer, DevicePoint::new(200.0, 200.0));
        drag.pointer_moved(&mut host, DevicePoint::new(210.0, 210.0), Some(1280.0));

        assert_eq!(host.selected, vec![ElementId::Title, ElementId::Lecturer]);
        assert_eq!(drag.dragged_element(), Some(ElementId::Lecturer));
        // Title never moved; Lecturer did.
        assert_eq!(host.positions[&ElementId::Title], (400.0, 120.0));
        let (x, y) = host.positions[&ElementId::Lecturer];
        assert!((x - 230.0).abs() < 1e-4);
        assert!((y - 330.0).abs() < 1e-4);
    }

    #[test]
    fn unmounted_surface_skips_the_move_but_keeps_the_drag() {
        let mut host = MockHost::new();
        let mut drag = DragController::new();

        drag.pointer_down(&mut host, ElementId::Title, DevicePoint::new(100.0, 100.0));
        drag.pointer_moved(&mut host, DevicePoint::new(150.0, 150.0), None);

        assert!(host.updates.is_empty());
        assert!(drag.is_dragging());

        // The anchor was not reset, so the next valid move applies the full
        // delta since pointer-down.
        drag.pointer_moved(&mut host, DevicePoint::new(150.0, 150.0), Some(1280.0));
        let (x, y) = host.positions[&ElementId::Title];
        assert!((x - 450.0).abs() < 1e-4);
        assert!((y - 170.0).abs() < 1e-4);
    }

    #[test]
    fn zero_rendered_width_skips_the_move() {
        let mut host = MockHost::new();
        let mut drag = DragController::new();

        drag.pointer_down(&mut host, ElementId::Title, DevicePoint::new(100.0, 100.0));
        drag.pointer_moved(&mut host, DevicePoint::new(150.0, 150.0), Some(0.0));

        assert!(host.updates.is_empty());
        assert!(drag.is_dragging());
        assert_eq!(host.positions[&ElementId::Title], (400.0, 120.0));
    }

    #[test]
    fn unknown_element_is_a_no_op_move() {
        let mut host = MockHost::new();
        host.positions.remove(&ElementId::Title);
        let mut drag = DragController::new();

        drag.pointer_down(&mut host, ElementId::Title, DevicePoint::new(100.0, 100.0));
        drag.pointer_moved(&mut host, DevicePoint::new(150.0, 150.0), Some(1280.0));

        assert!(host.updates.is_empty());
    }
}
