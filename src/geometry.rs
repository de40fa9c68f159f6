// src/geometry.rs

use std::fmt;

/// 窗口内或屏幕上的整数坐标点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}

/// 窗口在屏幕上的位置与尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Geometry { x, y, width, height }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn with_origin(self, origin: Point) -> Self {
        Geometry { x: origin.x, y: origin.y, ..self }
    }

    pub fn with_size(self, size: Size) -> Self {
        Geometry { width: size.width, height: size.height, ..self }
    }
}

/// 由两点构造的选区矩形，构造时即规范化，与拖拽方向无关。
///
/// Edges are inclusive: a drag from `(50,50)` to `(200,150)` reports
/// `(200,150)` as its bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl SelectionRect {
    pub fn from_points(a: Point, b: Point) -> Self {
        SelectionRect {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    /// 左上、右上、右下、左下
    pub fn corners(&self) -> [Point; 4] {
        [self.top_left(), self.top_right(), self.bottom_right(), self.bottom_left()]
    }

    /// One-line corner listing, also used as the clipboard payload.
    pub fn corner_line(&self) -> String {
        let [tl, tr, br, bl] = self.corners();
        format!("top-left:{tl}  top-right:{tr}  bottom-right:{br}  bottom-left:{bl}")
    }
}
