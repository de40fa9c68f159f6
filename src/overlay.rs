// src/overlay.rs
//! Interaction state of the overlay window, free of any toolkit types.

use log::{debug, trace};

use crate::config::{BOTTOM_RIGHT_READOUT_GAP, BOTTOM_RIGHT_READOUT_SIZE, EDGE_MARGIN, MIN_SIZE};
use crate::error::Result;
use crate::geometry::{Geometry, Point, SelectionRect, Size};
use crate::hit_test::{CursorShape, cursor_for, hit_test};
use crate::host::{ClipboardWriter, Surface};
use crate::resize::ResizeSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    /// 左键按下后、松开前
    Selecting { start: Point },
    Resizing(ResizeSession),
}

/// A text element placed at a window-local position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub origin: Point,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    geometry: Geometry,
    mode: Mode,
    live_text: String,
    selection: Option<SelectionRect>,
    finalized: bool,
    corner_text: String,
}

impl Overlay {
    pub fn new(geometry: Geometry) -> Self {
        Overlay {
            geometry,
            mode: Mode::Idle,
            live_text: String::new(),
            selection: None,
            finalized: false,
            corner_text: String::new(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[cfg(test)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn live_text(&self) -> &str {
        &self.live_text
    }

    pub fn corner_text(&self) -> &str {
        &self.corner_text
    }

    /// The rectangle to draw, whether still being dragged or finalized.
    pub fn selection(&self) -> Option<SelectionRect> {
        self.selection
    }

    pub fn finalized_selection(&self) -> Option<SelectionRect> {
        self.selection.filter(|_| self.finalized)
    }

    pub fn is_gesture_active(&self) -> bool {
        self.mode != Mode::Idle
    }

    /// 右下角坐标，锚定在距窗口右下角 10 个单位处
    pub fn bottom_right_readout(&self) -> Readout {
        let Size { width: w, height: h } = self.geometry.size();
        Readout {
            origin: Point::new(
                w - BOTTOM_RIGHT_READOUT_SIZE.width - BOTTOM_RIGHT_READOUT_GAP,
                h - BOTTOM_RIGHT_READOUT_SIZE.height - BOTTOM_RIGHT_READOUT_GAP,
            ),
            text: format!("Window bottom-right: ({},{})", w - 1, h - 1),
        }
    }

    /// `local` is window-relative, `global` is in screen coordinates.
    ///
    /// `primary_held` reports the button state carried by the move event; a
    /// gesture whose release never arrived is closed here as if released at
    /// `local`.
    pub fn pointer_moved(&mut self, local: Point, global: Point, primary_held: bool, surface: &mut impl Surface) {
        self.live_text = format!("Cursor: ({}, {})", local.x, local.y);
        surface.request_repaint();

        if !primary_held && self.is_gesture_active() {
            debug!("primary release was missed, closing {:?} at {local}", self.mode);
            self.pointer_released(local, surface);
        }

        match self.mode {
            Mode::Resizing(session) => {
                let next = session.geometry_at(global, MIN_SIZE);
                if next != self.geometry {
                    trace!("resize {:?} -> {:?}", self.geometry, next);
                    self.geometry = next;
                    surface.set_geometry(next);
                }
            }
            Mode::Selecting { start } => {
                self.selection = Some(SelectionRect::from_points(start, local));
            }
            Mode::Idle => {
                let region = hit_test(local, self.geometry.size(), EDGE_MARGIN);
                surface.set_cursor(cursor_for(region));
            }
        }
    }

    pub fn pointer_pressed(&mut self, local: Point, global: Point, surface: &mut impl Surface) {
        if let Some(region) = hit_test(local, self.geometry.size(), EDGE_MARGIN) {
            debug!("resize {region:?} started at {global}");
            self.mode = Mode::Resizing(ResizeSession { region, press: global, origin: self.geometry });
            return;
        }

        self.mode = Mode::Selecting { start: local };
        self.selection = None;
        self.finalized = false;
        self.corner_text.clear();
        surface.request_repaint();
    }

    pub fn pointer_released(&mut self, local: Point, surface: &mut impl Surface) {
        match self.mode {
            Mode::Resizing(_) => {
                debug!("resize finished at {:?}", self.geometry);
                self.mode = Mode::Idle;
            }
            Mode::Selecting { start } => {
                let rect = SelectionRect::from_points(start, local);
                self.mode = Mode::Idle;
                self.selection = Some(rect);
                self.finalized = true;
                self.corner_text = format!("Selection corners:\n{}", rect.corner_line());
                debug!("selection finalized: {}", rect.corner_line());
                surface.request_repaint();
            }
            Mode::Idle => {}
        }
    }

    pub fn pointer_left(&mut self, surface: &mut impl Surface) {
        surface.set_cursor(CursorShape::Arrow);
    }

    /// Records where the window actually sits on screen.
    pub fn window_moved(&mut self, origin: Point) {
        self.geometry = self.geometry.with_origin(origin);
    }

    pub fn window_resized(&mut self, size: Size, surface: &mut impl Surface) {
        self.geometry = self.geometry.with_size(size);
        surface.request_repaint();
    }

    /// Copies the finalized corners, or the live cursor text when nothing is selected.
    pub fn copy_coordinates(&self, clipboard: &mut impl ClipboardWriter) -> Result<String> {
        let text = match self.finalized_selection() {
            Some(rect) => rect.corner_line(),
            None => self.live_text.clone(),
        };
        clipboard.set_text(&text)?;
        debug!("copied {text:?}");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::INITIAL_GEOMETRY;
    use crate::hit_test::ResizeRegion;
    use crate::host::testing::{MemoryClipboard, RecordingSurface};

    fn overlay() -> Overlay {
        Overlay::new(INITIAL_GEOMETRY)
    }

    fn global(local: Point) -> Point {
        Point::new(local.x + INITIAL_GEOMETRY.x, local.y + INITIAL_GEOMETRY.y)
    }

    fn drag(o: &mut Overlay, s: &mut RecordingSurface, from: Point, to: Point) {
        o.pointer_pressed(from, global(from), s);
        o.pointer_moved(to, global(to), true, s);
        o.pointer_released(to, s);
    }

    #[test]
    fn drag_reports_four_corners() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        drag(&mut o, &mut s, Point::new(50, 50), Point::new(200, 150));

        let rect = o.finalized_selection().unwrap();
        assert_eq!(
            rect.corners(),
            [Point::new(50, 50), Point::new(200, 50), Point::new(200, 150), Point::new(50, 150)]
        );
        assert_eq!(
            o.corner_text(),
            "Selection corners:\ntop-left:(50,50)  top-right:(200,50)  bottom-right:(200,150)  bottom-left:(50,150)"
        );
        assert_eq!(o.mode(), Mode::Idle);
    }

    #[test]
    fn reverse_drag_normalizes() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        drag(&mut o, &mut s, Point::new(200, 150), Point::new(50, 50));
        assert_eq!(o.finalized_selection().unwrap().top_left(), Point::new(50, 50));
    }

    #[test]
    fn in_progress_rectangle_follows_pointer() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        o.pointer_pressed(Point::new(100, 100), global(Point::new(100, 100)), &mut s);
        o.pointer_moved(Point::new(60, 300), global(Point::new(60, 300)), true, &mut s);

        let rect = o.selection().unwrap();
        assert_eq!(rect.top_left(), Point::new(60, 100));
        assert_eq!(rect.bottom_right(), Point::new(100, 300));
        assert_eq!(o.finalized_selection(), None);
        assert_eq!(o.live_text(), "Cursor: (60, 300)");
        assert!(s.cursors.is_empty());
    }

    #[test]
    fn press_clears_previous_selection() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        drag(&mut o, &mut s, Point::new(50, 50), Point::new(200, 150));

        o.pointer_pressed(Point::new(300, 300), global(Point::new(300, 300)), &mut s);
        assert_eq!(o.selection(), None);
        assert_eq!(o.finalized_selection(), None);
        assert_eq!(o.corner_text(), "");
        assert_eq!(o.mode(), Mode::Selecting { start: Point::new(300, 300) });
    }

    #[test]
    fn press_on_edge_starts_resize_and_keeps_selection() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        drag(&mut o, &mut s, Point::new(50, 50), Point::new(200, 150));
        let before = o.finalized_selection();

        o.pointer_pressed(Point::new(3, 3), Point::new(103, 103), &mut s);
        match o.mode() {
            Mode::Resizing(session) => {
                assert_eq!(session.region, ResizeRegion::TopLeft);
                assert_eq!(session.press, Point::new(103, 103));
                assert_eq!(session.origin, INITIAL_GEOMETRY);
            }
            other => panic!("expected resize, got {other:?}"),
        }
        assert_eq!(o.finalized_selection(), before);
    }

    #[test]
    fn resize_applies_clamped_geometry_once_per_move() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        o.pointer_pressed(Point::new(2, 300), Point::new(102, 400), &mut s);
        o.pointer_moved(Point::new(2, 300), Point::new(802, 400), true, &mut s);

        assert_eq!(s.geometries, vec![Geometry::new(700, 100, 200, 600)]);
        assert_eq!(o.geometry(), Geometry::new(700, 100, 200, 600));
        assert!(s.cursors.is_empty());

        o.pointer_released(Point::new(2, 300), &mut s);
        assert_eq!(o.mode(), Mode::Idle);
        assert_eq!(o.selection(), None);
    }

    #[test]
    fn resize_starts_from_actual_window_position() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        o.window_moved(Point::new(0, 0));
        o.pointer_pressed(Point::new(795, 300), Point::new(795, 300), &mut s);
        match o.mode() {
            Mode::Resizing(session) => assert_eq!(session.origin, Geometry::new(0, 0, 800, 600)),
            other => panic!("expected resize, got {other:?}"),
        }

        o.pointer_moved(Point::new(805, 300), Point::new(805, 300), true, &mut s);
        assert_eq!(s.geometries, vec![Geometry::new(0, 0, 810, 600)]);
    }

    #[test]
    fn idle_move_sets_cursor_from_hit_test() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        o.pointer_moved(Point::new(3, 3), Point::new(103, 103), false, &mut s);
        assert_eq!(s.last_cursor(), Some(CursorShape::ResizeDiagonalNwSe));
        o.pointer_moved(Point::new(400, 300), Point::new(500, 400), false, &mut s);
        assert_eq!(s.last_cursor(), Some(CursorShape::Arrow));
        o.pointer_moved(Point::new(400, 595), Point::new(500, 695), false, &mut s);
        assert_eq!(s.last_cursor(), Some(CursorShape::ResizeVertical));
    }

    #[test]
    fn leaving_resets_cursor() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        o.pointer_moved(Point::new(795, 300), Point::new(895, 400), false, &mut s);
        assert_eq!(s.last_cursor(), Some(CursorShape::ResizeHorizontal));
        o.pointer_left(&mut s);
        assert_eq!(s.last_cursor(), Some(CursorShape::Arrow));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        o.pointer_released(Point::new(10, 10), &mut s);
        assert_eq!(o.selection(), None);
        assert_eq!(s.repaints, 0);
    }

    #[test]
    fn missed_release_closes_gestures() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        o.pointer_pressed(Point::new(795, 300), Point::new(895, 400), &mut s);
        o.pointer_moved(Point::new(400, 300), Point::new(500, 400), false, &mut s);
        assert_eq!(o.mode(), Mode::Idle);
        assert!(s.geometries.is_empty());

        o.pointer_pressed(Point::new(50, 50), global(Point::new(50, 50)), &mut s);
        o.pointer_moved(Point::new(80, 90), global(Point::new(80, 90)), false, &mut s);
        assert_eq!(o.mode(), Mode::Idle);
        assert_eq!(o.finalized_selection().unwrap().bottom_right(), Point::new(80, 90));
    }

    #[test]
    fn window_resize_reanchors_bottom_right_readout() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        assert_eq!(
            o.bottom_right_readout(),
            Readout { origin: Point::new(570, 566), text: "Window bottom-right: (799,599)".into() }
        );
        o.window_resized(Size::new(300, 200), &mut s);
        let readout = o.bottom_right_readout();
        assert_eq!(readout.origin, Point::new(70, 166));
        assert_eq!(readout.text, "Window bottom-right: (299,199)");
        assert_eq!(o.geometry().origin(), INITIAL_GEOMETRY.origin());
    }

    #[test]
    fn copy_without_selection_uses_live_text() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        let mut clip = MemoryClipboard::default();
        o.pointer_moved(Point::new(12, 34), global(Point::new(12, 34)), false, &mut s);

        let copied = o.copy_coordinates(&mut clip).unwrap();
        assert_eq!(copied, "Cursor: (12, 34)");
        assert_eq!(clip.text.as_deref(), Some("Cursor: (12, 34)"));
    }

    #[test]
    fn copy_before_any_move_is_empty() {
        let mut clip = MemoryClipboard::default();
        assert_eq!(overlay().copy_coordinates(&mut clip).unwrap(), "");
    }

    #[test]
    fn copy_with_selection_uses_corner_line() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        let mut clip = MemoryClipboard::default();
        drag(&mut o, &mut s, Point::new(50, 50), Point::new(200, 150));

        o.copy_coordinates(&mut clip).unwrap();
        assert_eq!(
            clip.text.as_deref(),
            Some("top-left:(50,50)  top-right:(200,50)  bottom-right:(200,150)  bottom-left:(50,150)")
        );
    }

    #[test]
    fn copy_during_drag_uses_live_text() {
        let mut o = overlay();
        let mut s = RecordingSurface::default();
        let mut clip = MemoryClipboard::default();
        o.pointer_pressed(Point::new(50, 50), global(Point::new(50, 50)), &mut s);
        o.pointer_moved(Point::new(70, 70), global(Point::new(70, 70)), true, &mut s);

        assert_eq!(o.copy_coordinates(&mut clip).unwrap(), "Cursor: (70, 70)");
    }
}
