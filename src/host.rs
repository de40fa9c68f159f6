// src/host.rs
//! Side effects the overlay needs from its host window and the system.

use crate::error::Result;
use crate::geometry::Geometry;
use crate::hit_test::CursorShape;

/// 宿主窗口提供的能力：光标、几何、重绘
pub trait Surface {
    fn set_cursor(&mut self, cursor: CursorShape);

    /// Moves and resizes the window in one step.
    fn set_geometry(&mut self, geometry: Geometry);

    fn request_repaint(&mut self);
}

pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records every call so tests can assert on them.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub cursors: Vec<CursorShape>,
        pub geometries: Vec<Geometry>,
        pub repaints: usize,
    }

    impl RecordingSurface {
        pub fn last_cursor(&self) -> Option<CursorShape> {
            self.cursors.last().copied()
        }
    }

    impl Surface for RecordingSurface {
        fn set_cursor(&mut self, cursor: CursorShape) {
            self.cursors.push(cursor);
        }

        fn set_geometry(&mut self, geometry: Geometry) {
            self.geometries.push(geometry);
        }

        fn request_repaint(&mut self) {
            self.repaints += 1;
        }
    }

    #[derive(Debug, Default)]
    pub struct MemoryClipboard {
        pub text: Option<String>,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }
}
