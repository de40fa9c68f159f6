// src/config.rs
//! Fixed layout, sizing and palette for the overlay window.

use crate::geometry::{Geometry, Point, Size};

pub const WINDOW_TITLE: &str = "Mouse coordinates & selection";

/// 屏幕坐标 (100,100) 起，800×600
pub const INITIAL_GEOMETRY: Geometry = Geometry::new(100, 100, 800, 600);

/// 边缘判定宽度
pub const EDGE_MARGIN: i32 = 8;

pub const MIN_SIZE: Size = Size::new(200, 150);

pub const LIVE_READOUT_ORIGIN: Point = Point::new(10, 10);
pub const CORNER_READOUT_ORIGIN: Point = Point::new(10, 40);
pub const COPY_BUTTON_ORIGIN: Point = Point::new(10, 110);
pub const COPY_BUTTON_SIZE: Size = Size::new(100, 32);
pub const COPY_BUTTON_LABEL: &str = "Copy coordinates";

pub const BOTTOM_RIGHT_READOUT_SIZE: Size = Size::new(220, 24);
/// Gap between the bottom-right readout and the window's bottom-right corner.
pub const BOTTOM_RIGHT_READOUT_GAP: i32 = 10;

pub const LIVE_FONT_SIZE: f64 = 16.0;
pub const READOUT_FONT_SIZE: f64 = 14.0;

pub const BORDER_WIDTH: f64 = 3.0;
pub const SELECTION_STROKE_WIDTH: f64 = 2.0;
pub const SELECTION_DASH: &[f64] = &[6.0, 4.0];

/// RGBA color, independent of the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }
}

pub const BORDER_COLOR: Rgba = Rgba::new(0, 0, 255, 128);
pub const SELECTION_FILL: Rgba = Rgba::new(255, 255, 255, 77);
pub const SELECTION_STROKE: Rgba = Rgba::new(255, 0, 0, 255);
pub const READOUT_COLOR: Rgba = Rgba::new(255, 255, 255, 255);
pub const BOTTOM_RIGHT_COLOR: Rgba = Rgba::new(255, 255, 0, 255);
