use approx::assert_relative_eq;
use darkroom_core::viewport::{
    bound_transform, fit_size, size, vec2, Size, Viewport, MAX_SCALE, MIN_SCALE,
    WHEEL_ZOOM_FACTOR,
};

const RENDERED: Size = Size {
    width: 800.0,
    height: 600.0,
};
const CONTAINER: Size = Size {
    width: 800.0,
    height: 600.0,
};

/// Viewport zoomed in `notches` wheel steps with the cursor on center,
/// so the translation stays at the origin.
fn zoomed(notches: u32) -> Viewport {
    let mut viewport = Viewport::new();
    for _ in 0..notches {
        viewport.wheel(vec2(0.0, 0.0), true, RENDERED, CONTAINER);
    }
    viewport
}

#[test]
fn at_or_below_native_scale_the_transform_is_identity() {
    for scale in [0.1, 0.5, 1.0] {
        let t = bound_transform(scale, 120.0, -45.0, RENDERED, CONTAINER);
        assert!(t.is_identity(), "scale {scale} should collapse to identity");
    }
}

#[test]
fn scale_is_clamped_to_the_legal_range() {
    assert_eq!(bound_transform(0.01, 0.0, 0.0, RENDERED, CONTAINER).scale, MIN_SCALE);
    assert_eq!(bound_transform(25.0, 0.0, 0.0, RENDERED, CONTAINER).scale, MAX_SCALE);
}

#[test]
fn translation_never_exceeds_the_pan_limit() {
    for scale in [1.5_f32, 2.0, 5.0, 10.0] {
        for requested in [-1e6_f32, -10.0, 0.0, 10.0, 1e6] {
            let t = bound_transform(scale, requested, requested, RENDERED, CONTAINER);
            let max_x = ((RENDERED.width * scale - CONTAINER.width) / 2.0).max(0.0);
            let max_y = ((RENDERED.height * scale - CONTAINER.height) / 2.0).max(0.0);
            assert!(t.x.abs() <= max_x, "x {} out of bounds at scale {scale}", t.x);
            assert!(t.y.abs() <= max_y, "y {} out of bounds at scale {scale}", t.y);
            assert_eq!(t.x, requested.clamp(-max_x, max_x));
            assert_eq!(t.y, requested.clamp(-max_y, max_y));
        }
    }
}

#[test]
fn small_image_cannot_pan_even_when_zoomed() {
    // 100px rendered at 2x is still smaller than a 500px container, so
    // the pan limit collapses to zero on both axes.
    let t = bound_transform(2.0, 80.0, -80.0, size(100.0, 100.0), size(500.0, 500.0));
    assert_eq!(t.scale, 2.0);
    assert_eq!(t.x, 0.0);
    assert_eq!(t.y, 0.0);
}

#[test]
fn wheel_in_multiplies_scale_by_the_fixed_factor() {
    let viewport = zoomed(1);
    assert_relative_eq!(viewport.transform().scale, WHEEL_ZOOM_FACTOR);
    assert_eq!(viewport.transform().x, 0.0);
    assert_eq!(viewport.transform().y, 0.0);
}

#[test]
fn wheel_out_at_native_size_stays_at_identity() {
    let mut viewport = Viewport::new();
    viewport.wheel(vec2(50.0, 50.0), false, RENDERED, CONTAINER);
    assert!(viewport.transform().is_identity());
}

#[test]
fn repeated_wheel_in_saturates_at_max_scale() {
    // 1.1^25 > 10, so 25 notches must hit the ceiling exactly.
    let viewport = zoomed(25);
    assert_eq!(viewport.transform().scale, MAX_SCALE);
}

#[test]
fn wheel_out_from_max_leaves_the_legal_range_intact() {
    let mut viewport = zoomed(25);
    viewport.wheel(vec2(0.0, 0.0), false, RENDERED, CONTAINER);
    let scale = viewport.transform().scale;
    assert!(scale < MAX_SCALE && scale >= MIN_SCALE);
    assert_relative_eq!(scale, MAX_SCALE / WHEEL_ZOOM_FACTOR, max_relative = 1e-5);
}

#[test]
fn wheel_keeps_the_point_under_the_cursor_stationary() {
    // Large rendered size so the pan clamp cannot interfere.
    let rendered = size(2000.0, 2000.0);
    let container = size(800.0, 800.0);
    let mut viewport = Viewport::new();
    let cursor = vec2(100.0, 60.0);
    viewport.wheel(cursor, true, rendered, container);

    let before = viewport.transform();
    // Content-space point currently under the cursor.
    let content_x = (cursor.x - before.x) / before.scale;
    let content_y = (cursor.y - before.y) / before.scale;

    viewport.wheel(cursor, true, rendered, container);
    let after = viewport.transform();
    assert_relative_eq!((cursor.x - after.x) / after.scale, content_x, max_relative = 1e-4);
    assert_relative_eq!((cursor.y - after.y) / after.scale, content_y, max_relative = 1e-4);
}

#[test]
fn drag_is_ignored_at_native_size() {
    let mut viewport = Viewport::new();
    viewport.drag_start(vec2(10.0, 10.0));
    assert!(!viewport.is_dragging());
    viewport.drag_move(vec2(90.0, 90.0), RENDERED, CONTAINER);
    assert!(viewport.transform().is_identity());
}

#[test]
fn drag_translates_by_the_pointer_delta() {
    let mut viewport = zoomed(8); // ~2.14x, ample pan room
    viewport.drag_start(vec2(5.0, 5.0));
    assert!(viewport.is_dragging());

    viewport.drag_move(vec2(25.0, 15.0), RENDERED, CONTAINER);
    let t = viewport.transform();
    assert_eq!(t.x, 20.0);
    assert_eq!(t.y, 10.0);
}

#[test]
fn drag_move_is_clamped_to_the_pan_limit() {
    let mut viewport = zoomed(8);
    let scale = viewport.transform().scale;
    viewport.drag_start(vec2(0.0, 0.0));
    viewport.drag_move(vec2(1e6, -1e6), RENDERED, CONTAINER);

    let t = viewport.transform();
    assert_eq!(t.x, (RENDERED.width * scale - CONTAINER.width) / 2.0);
    assert_eq!(t.y, -(RENDERED.height * scale - CONTAINER.height) / 2.0);
}

#[test]
fn drag_end_stops_following_the_pointer() {
    let mut viewport = zoomed(8);
    viewport.drag_start(vec2(0.0, 0.0));
    viewport.drag_move(vec2(20.0, 10.0), RENDERED, CONTAINER);
    viewport.drag_end();
    assert!(!viewport.is_dragging());

    let before = viewport.transform();
    viewport.drag_move(vec2(500.0, 500.0), RENDERED, CONTAINER);
    assert_eq!(viewport.transform(), before);
}

#[test]
fn reset_returns_to_identity_and_cancels_the_drag() {
    let mut viewport = zoomed(8);
    viewport.drag_start(vec2(0.0, 0.0));
    viewport.reset();
    assert!(viewport.transform().is_identity());
    assert!(!viewport.is_dragging());
}

#[test]
fn fit_size_contains_without_distortion() {
    // Wide image letterboxed into a square.
    assert_eq!(fit_size(size(2000.0, 1000.0), size(500.0, 500.0)), size(500.0, 250.0));
    // Small images are scaled up to fill the short axis.
    assert_eq!(fit_size(size(100.0, 100.0), size(500.0, 300.0)), size(300.0, 300.0));
    // Exact fit passes through unchanged.
    assert_eq!(fit_size(size(800.0, 600.0), size(800.0, 600.0)), size(800.0, 600.0));
}
