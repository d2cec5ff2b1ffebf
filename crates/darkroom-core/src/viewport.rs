//! Pure zoom/pan math for one displayed image.
//!
//! Coordinates are in screen pixels relative to the container center: the
//! image is drawn centered, scaled about its center by `scale`, then
//! shifted by the translation `(x, y)`. "Rendered size" below always means
//! the size the image is drawn at when `scale == 1` (the contain-fit of
//! the pixel size into the container), not the raw pixel size.

/// Minimum zoom; at this scale the image sits fixed at the fitted size.
pub const MIN_SCALE: f32 = 1.0;
/// Maximum zoom.
pub const MAX_SCALE: f32 = 10.0;
/// Per wheel notch the scale is multiplied or divided by this factor.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

pub fn size(width: f32, height: f32) -> Size {
    Size { width, height }
}

/// Scale plus translation for one displayed image. Ephemeral per-pane
/// state; reset whenever the displayed revision changes or loading begins.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewportTransform {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

impl ViewportTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Clamp a requested transform into the legal range.
///
/// `scale` is clamped to `[MIN_SCALE, MAX_SCALE]`. At or below native
/// size no panning is permitted and the result is the identity. Above it,
/// each axis is clamped to `max(0, (rendered * scale - container) / 2)`
/// so the image edge never leaves the visible viewport.
pub fn bound_transform(
    scale: f32,
    x: f32,
    y: f32,
    rendered: Size,
    container: Size,
) -> ViewportTransform {
    let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    if scale <= MIN_SCALE {
        return ViewportTransform::IDENTITY;
    }
    let max_x = ((rendered.width * scale - container.width) / 2.0).max(0.0);
    let max_y = ((rendered.height * scale - container.height) / 2.0).max(0.0);
    ViewportTransform {
        scale,
        x: x.clamp(-max_x, max_x),
        y: y.clamp(-max_y, max_y),
    }
}

/// Contain-fit an image's pixel size into a container, preserving aspect.
pub fn fit_size(image: Size, container: Size) -> Size {
    let fit = (container.width / image.width).min(container.height / image.height);
    Size {
        width: image.width * fit,
        height: image.height * fit,
    }
}

/// Zoom/pan state for one image pane: the current transform plus drag
/// tracking. All mutation goes through [`bound_transform`].
#[derive(Debug, Default)]
pub struct Viewport {
    transform: ViewportTransform,
    /// `pointer - translation` recorded at drag start.
    drag_offset: Option<Vec2>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    /// One wheel notch: scale by the fixed factor (up = in, down = out),
    /// keeping the content point under `cursor` stationary on screen.
    /// `cursor` is relative to the container center.
    pub fn wheel(&mut self, cursor: Vec2, zoom_in: bool, rendered: Size, container: Size) {
        let factor = if zoom_in {
            WHEEL_ZOOM_FACTOR
        } else {
            1.0 / WHEEL_ZOOM_FACTOR
        };
        // Clamp before solving for the translation so the fixed-point
        // equation uses the scale that will actually be applied.
        let scale = (self.transform.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let ratio = scale / self.transform.scale;
        let x = cursor.x - (cursor.x - self.transform.x) * ratio;
        let y = cursor.y - (cursor.y - self.transform.y) * ratio;
        self.transform = bound_transform(scale, x, y, rendered, container);
    }

    /// Begin dragging. Permitted only when zoomed in past native size.
    pub fn drag_start(&mut self, pointer: Vec2) {
        if self.transform.scale > MIN_SCALE {
            self.drag_offset = Some(vec2(
                pointer.x - self.transform.x,
                pointer.y - self.transform.y,
            ));
        }
    }

    /// Follow the pointer while dragging; no-op when no drag is active.
    pub fn drag_move(&mut self, pointer: Vec2, rendered: Size, container: Size) {
        if let Some(offset) = self.drag_offset {
            self.transform = bound_transform(
                self.transform.scale,
                pointer.x - offset.x,
                pointer.y - offset.y,
                rendered,
                container,
            );
        }
    }

    pub fn drag_end(&mut self) {
        self.drag_offset = None;
    }

    /// Back to identity; any active drag is abandoned.
    pub fn reset(&mut self) {
        self.transform = ViewportTransform::IDENTITY;
        self.drag_offset = None;
    }
}
