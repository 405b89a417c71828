// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_crop` crate.
//!
//! These drive `CropController` through mixed event sequences and check the
//! coverage invariant after every step, alongside the concrete sizing and
//! interaction scenarios the engine is expected to reproduce.

use kurbo::{Point, Size, Vec2};
use understory_crop::{
    CropConfig, CropController, EventOutcome, FitPolicy, GestureKind, Key, LoadOutcome, PanAxes,
    clamp_position, compute_layout,
};

const VIEWPORT: Size = Size::new(800.0, 400.0);

fn editing(config: CropConfig, natural: Size) -> CropController<u32> {
    let mut crop = CropController::new(config, VIEWPORT);
    let ticket = crop.set_source(1).unwrap();
    let outcome = crop.on_image_resource_resolved(ticket, natural).unwrap();
    assert!(matches!(outcome, LoadOutcome::Applied(_)));
    crop.set_editing(true);
    crop
}

fn assert_covered(crop: &CropController<u32>) {
    let size = crop.rendered_size();
    let viewport = crop.viewport();
    let p = crop.position();
    assert!(
        viewport.height - size.height <= p.y && p.y <= 0.0,
        "y offset {p:?} uncovers viewport {viewport:?} with image {size:?}"
    );
    if crop.config().axes.pans_x() {
        assert!(
            viewport.width - size.width <= p.x && p.x <= 0.0,
            "x offset {p:?} uncovers viewport {viewport:?} with image {size:?}"
        );
    }
}

/// A deterministic mix of drags, keys, and stray events that overshoot the
/// bounds in every direction.
fn scripted_events(crop: &mut CropController<u32>) {
    let pointers = [
        Point::new(400.0, 200.0),
        Point::new(-3000.0, 50.0),
        Point::new(5000.0, -4000.0),
        Point::new(120.0, 9000.0),
        Point::new(-10.0, -10.0),
    ];
    for (i, &start) in pointers.iter().enumerate() {
        let kind = if i % 2 == 0 {
            GestureKind::Pointer
        } else {
            GestureKind::Touch
        };
        let _ = crop.on_gesture_start(kind, start);
        assert_covered(crop);
        for &to in &pointers {
            let _ = crop.on_gesture_move(kind, to);
            assert_covered(crop);
            let _ = crop.on_key(Key::ArrowRight);
            assert_covered(crop);
        }
        let _ = crop.on_gesture_end();
        for key in [Key::ArrowUp, Key::ArrowLeft, Key::ArrowDown, Key::Other] {
            for _ in 0..40 {
                let _ = crop.on_key(key);
                assert_covered(crop);
            }
        }
    }
}

#[test]
fn coverage_holds_for_every_committed_update() {
    let naturals = [
        Size::new(400.0, 200.0),
        Size::new(100.0, 200.0),
        Size::new(4000.0, 100.0),
        Size::new(640.0, 480.0),
        Size::new(1.0, 1.0),
    ];
    for config in [CropConfig::free_pan(), CropConfig::vertical_pan()] {
        for natural in naturals {
            let mut crop = editing(config, natural);
            assert_covered(&crop);
            scripted_events(&mut crop);

            crop.set_zoom(2.5);
            assert_covered(&crop);
            scripted_events(&mut crop);
        }
    }
}

#[test]
fn clamp_is_idempotent_over_a_grid() {
    let sizes = [Size::new(800.0, 1600.0), Size::new(1234.5, 400.0), Size::ZERO];
    for size in sizes {
        for axes in [PanAxes::Both, PanAxes::VerticalOnly] {
            for ix in -4..=4 {
                for iy in -4..=4 {
                    let p = Point::new(f64::from(ix) * 333.0, f64::from(iy) * 333.0);
                    let once = clamp_position(p, size, VIEWPORT, axes);
                    assert_eq!(clamp_position(once, size, VIEWPORT, axes), once);
                }
            }
        }
    }
}

#[test]
fn exact_fit_centers_at_origin() {
    let layout = compute_layout(
        Size::new(400.0, 200.0),
        VIEWPORT,
        FitPolicy::FitThenCover,
        1.0,
    )
    .unwrap();
    assert_eq!(layout.size, Size::new(800.0, 400.0));
    assert_eq!(layout.initial_position, Point::new(0.0, 0.0));
}

#[test]
fn portrait_image_takes_the_cover_branch() {
    let crop = editing(CropConfig::free_pan(), Size::new(100.0, 200.0));
    assert_eq!(crop.rendered_size(), Size::new(800.0, 1600.0));
    assert_eq!(crop.position(), Point::new(0.0, -600.0));
}

#[test]
fn keyboard_steps_stop_at_the_boundary() {
    let mut crop = editing(CropConfig::free_pan(), Size::new(100.0, 200.0));
    let mut last = crop.position().y;
    for _ in 0..50 {
        let out = crop.on_key(Key::ArrowDown);
        assert!(out.prevent_default);
        let y = crop.position().y;
        assert!(y >= last, "Down must never move the image up");
        assert!(y <= 0.0, "y must never exceed 0, got {y}");
        last = y;
    }
    assert_eq!(crop.position().y, 0.0);

    // 30 steps would be enough; the rest must be no-ops.
    let out = crop.on_key(Key::ArrowDown);
    assert!(out.prevent_default);
    assert!(!out.moved);
}

#[test]
fn drag_anchor_is_stable() {
    // 3200x1600 in 800x400 gives a wide interior so no clamping applies.
    let mut crop = editing(CropConfig::free_pan(), Size::new(400.0, 200.0));
    crop.set_zoom(4.0);
    assert_eq!(crop.rendered_size(), Size::new(3200.0, 1600.0));

    // Move the image to (-50, -50) first.
    let _ = crop.on_gesture_start(GestureKind::Pointer, Point::ZERO);
    let _ = crop.on_gesture_move(
        GestureKind::Pointer,
        Point::new(-50.0, -50.0) - crop.position().to_vec2(),
    );
    let _ = crop.on_gesture_end();
    assert_eq!(crop.position(), Point::new(-50.0, -50.0));

    let _ = crop.on_gesture_start(GestureKind::Pointer, Point::new(100.0, 100.0));
    let info = crop.debug_info();
    assert_eq!(info.position + Vec2::new(150.0, 150.0), Point::new(100.0, 100.0));

    let out = crop.on_gesture_move(GestureKind::Pointer, Point::new(120.0, 130.0));
    assert!(out.moved);
    assert_eq!(crop.position(), Point::new(-30.0, -20.0));
}

#[test]
fn edit_mode_gate_blocks_every_event() {
    let mut crop = editing(CropConfig::free_pan(), Size::new(100.0, 200.0));
    crop.set_editing(false);
    let before = crop.position();

    let outcomes = [
        crop.on_gesture_start(GestureKind::Pointer, Point::new(10.0, 10.0)),
        crop.on_gesture_move(GestureKind::Pointer, Point::new(10.0, 300.0)),
        crop.on_gesture_end(),
        crop.on_gesture_start(GestureKind::Touch, Point::new(10.0, 10.0)),
        crop.on_gesture_move(GestureKind::Touch, Point::new(10.0, -300.0)),
        crop.on_pointer_leave(),
        crop.on_key(Key::ArrowUp),
        crop.on_key(Key::ArrowDown),
        crop.on_key(Key::ArrowLeft),
        crop.on_key(Key::ArrowRight),
    ];
    for out in outcomes {
        assert_eq!(out, EventOutcome::IGNORED);
    }
    assert_eq!(crop.position(), before);
}

#[test]
fn other_keys_keep_default_action() {
    let mut crop = editing(CropConfig::free_pan(), Size::new(100.0, 200.0));
    for id in ["Enter", "a", " ", "PageDown", "Tab"] {
        assert_eq!(crop.on_key(Key::from_identifier(id)), EventOutcome::IGNORED);
    }
}
