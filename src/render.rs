// src/render.rs
//! Builds the list of things to draw for one repaint. The widget replays it with piet.

use crate::config::{
    BORDER_COLOR, BORDER_WIDTH, BOTTOM_RIGHT_COLOR, CORNER_READOUT_ORIGIN, LIVE_FONT_SIZE,
    LIVE_READOUT_ORIGIN, READOUT_COLOR, READOUT_FONT_SIZE, Rgba, SELECTION_DASH, SELECTION_FILL,
    SELECTION_STROKE, SELECTION_STROKE_WIDTH,
};
use crate::geometry::{Point, SelectionRect};
use crate::overlay::Overlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl From<SelectionRect> for Bounds {
    fn from(r: SelectionRect) -> Self {
        Bounds { x0: r.left(), y0: r.top(), x1: r.right(), y1: r.bottom() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Stroke {
        bounds: Bounds,
        color: Rgba,
        width: f64,
        dash: Option<&'static [f64]>,
    },
    Fill {
        bounds: Bounds,
        color: Rgba,
    },
    Text {
        origin: Point,
        text: String,
        font_size: f64,
        color: Rgba,
    },
}

/// 按绘制顺序排列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub items: Vec<Item>,
}

impl Scene {
    fn push_text(&mut self, origin: Point, text: &str, font_size: f64, color: Rgba) {
        if text.is_empty() {
            return;
        }
        self.items.push(Item::Text { origin, text: text.to_string(), font_size, color });
    }
}

pub fn scene(overlay: &Overlay) -> Scene {
    let size = overlay.geometry().size();
    let mut scene = Scene::default();

    // 窗口边框，左上内缩 1，右下内缩 2
    scene.items.push(Item::Stroke {
        bounds: Bounds { x0: 1, y0: 1, x1: size.width - 2, y1: size.height - 2 },
        color: BORDER_COLOR,
        width: BORDER_WIDTH,
        dash: None,
    });

    if let Some(rect) = overlay.selection() {
        let bounds = Bounds::from(rect);
        scene.items.push(Item::Fill { bounds, color: SELECTION_FILL });
        scene.items.push(Item::Stroke {
            bounds,
            color: SELECTION_STROKE,
            width: SELECTION_STROKE_WIDTH,
            dash: Some(SELECTION_DASH),
        });
    }

    scene.push_text(LIVE_READOUT_ORIGIN, overlay.live_text(), LIVE_FONT_SIZE, READOUT_COLOR);
    scene.push_text(CORNER_READOUT_ORIGIN, overlay.corner_text(), READOUT_FONT_SIZE, READOUT_COLOR);
    let readout = overlay.bottom_right_readout();
    scene.push_text(readout.origin, &readout.text, READOUT_FONT_SIZE, BOTTOM_RIGHT_COLOR);

    scene
}
