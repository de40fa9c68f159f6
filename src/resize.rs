// src/resize.rs

use crate::geometry::{Geometry, Point, Size};
use crate::hit_test::ResizeRegion;

/// 拖拽边缘缩放期间的临时状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub region: ResizeRegion,
    /// Global pointer position at press.
    pub press: Point,
    /// Window geometry at press.
    pub origin: Geometry,
}

impl ResizeSession {
    pub fn geometry_at(&self, pointer: Point, min: Size) -> Geometry {
        resize(self.origin, self.press, pointer, self.region, min)
    }
}

/// Computes the window geometry for an edge/corner drag from `press` to `pointer`.
///
/// Width and height never drop below `min`; when shrinking from the left or top the
/// origin stops where the opposite edge would otherwise have to move.
pub fn resize(origin: Geometry, press: Point, pointer: Point, region: ResizeRegion, min: Size) -> Geometry {
    let dx = pointer.x - press.x;
    let dy = pointer.y - press.y;
    let Geometry { x, y, width: w, height: h } = origin;
    let mut out = origin;

    if region.has_left() {
        out.x = (x + dx).min(x + w - min.width);
        out.width = (w - dx).max(min.width);
    }
    if region.has_right() {
        out.width = (w + dx).max(min.width);
    }
    if region.has_top() {
        out.y = (y + dy).min(y + h - min.height);
        out.height = (h - dy).max(min.height);
    }
    if region.has_bottom() {
        out.height = (h + dy).max(min.height);
    }
    out
}
