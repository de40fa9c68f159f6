// src/widget.rs

use druid::piet::{FontFamily, StrokeStyle, Text, TextLayoutBuilder};
use druid::widget::Button;
use druid::{
    BoxConstraints, Color, Cursor, Data, Env, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx,
    PaintCtx, Point, Rect, RenderContext, Selector, Size, UpdateCtx, Vec2, Widget, WidgetExt,
    WidgetPod,
};
use log::warn;

use crate::clipboard::SystemClipboard;
use crate::config::{COPY_BUTTON_LABEL, COPY_BUTTON_ORIGIN, COPY_BUTTON_SIZE, Rgba};
use crate::geometry::{self, Geometry};
use crate::hit_test::CursorShape;
use crate::host::Surface;
use crate::overlay::Overlay;
use crate::render::{self, Bounds, Item};

/// 鼠标离开窗口后由 lifecycle 转发给 event
const POINTER_LEFT: Selector = Selector::new("coordpick.pointer-left");

#[derive(Clone, Data)]
pub struct AppState {
    #[data(same_fn = "PartialEq::eq")]
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(geometry: Geometry) -> Self {
        AppState { overlay: Overlay::new(geometry) }
    }
}

/// Routes overlay side effects to the druid window.
struct EventSurface<'c, 'a, 'b> {
    ctx: &'c mut EventCtx<'a, 'b>,
}

impl Surface for EventSurface<'_, '_, '_> {
    fn set_cursor(&mut self, cursor: CursorShape) {
        self.ctx.set_cursor(&druid_cursor(cursor));
    }

    fn set_geometry(&mut self, g: Geometry) {
        let window = self.ctx.window();
        if let Some(origin) = moved_origin(to_point(window.get_position()), g) {
            window.set_position(to_druid_point(origin));
        }
        window.set_size(Size::new(g.width as f64, g.height as f64));
    }

    fn request_repaint(&mut self) {
        self.ctx.request_paint();
    }
}

/// druid has no diagonal resize cursor, so both diagonals show as a crosshair.
fn druid_cursor(shape: CursorShape) -> Cursor {
    match shape {
        CursorShape::Arrow => Cursor::Arrow,
        CursorShape::ResizeHorizontal => Cursor::ResizeLeftRight,
        CursorShape::ResizeVertical => Cursor::ResizeUpDown,
        CursorShape::ResizeDiagonalNwSe | CursorShape::ResizeDiagonalNeSw => Cursor::Crosshair,
    }
}

/// 只有左/上边缩放会移动窗口；位置不变时不调用 `set_position`
fn moved_origin(current: geometry::Point, target: Geometry) -> Option<geometry::Point> {
    Some(target.origin()).filter(|origin| *origin != current)
}

fn to_point(p: Point) -> geometry::Point {
    geometry::Point::new(p.x.round() as i32, p.y.round() as i32)
}

fn to_druid_point(p: geometry::Point) -> Point {
    Point::new(p.x as f64, p.y as f64)
}

fn to_rect(b: Bounds) -> Rect {
    Rect::new(b.x0 as f64, b.y0 as f64, b.x1 as f64, b.y1 as f64)
}

fn to_color(c: Rgba) -> Color {
    Color::rgba8(c.r, c.g, c.b, c.a)
}

/// Screen position of a window-relative point.
fn global_pos(ctx: &EventCtx, window_pos: Point) -> geometry::Point {
    let origin: Vec2 = ctx.window().get_position().to_vec2();
    to_point(window_pos + origin)
}

pub struct OverlayWidget {
    copy_button: WidgetPod<AppState, Box<dyn Widget<AppState>>>,
}

impl OverlayWidget {
    pub fn new() -> Self {
        let button = Button::new(COPY_BUTTON_LABEL)
            .on_click(|_ctx, data: &mut AppState, _env| {
                if let Err(e) = data.overlay.copy_coordinates(&mut SystemClipboard) {
                    warn!("复制失败: {e}");
                }
            })
            .boxed();
        OverlayWidget { copy_button: WidgetPod::new(button) }
    }
}

impl Widget<AppState> for OverlayWidget {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, env: &Env) {
        self.copy_button.event(ctx, event, data, env);

        match event {
            Event::WindowSize(size) => {
                let size = geometry::Size::new(size.width.round() as i32, size.height.round() as i32);
                data.overlay.window_resized(size, &mut EventSurface { ctx });
            }

            Event::MouseDown(e) if e.button.is_left() => {
                // 按钮上的点击不开始框选
                if self.copy_button.layout_rect().contains(e.pos) {
                    return;
                }
                ctx.set_active(true);
                data.overlay.window_moved(to_point(ctx.window().get_position()));
                let global = global_pos(ctx, e.window_pos);
                data.overlay.pointer_pressed(to_point(e.pos), global, &mut EventSurface { ctx });
            }

            Event::MouseMove(e) => {
                let global = global_pos(ctx, e.window_pos);
                data.overlay.pointer_moved(to_point(e.pos), global, e.buttons.has_left(), &mut EventSurface { ctx });
                if ctx.is_active() && !data.overlay.is_gesture_active() {
                    ctx.set_active(false);
                }
            }

            Event::MouseUp(e) if e.button.is_left() => {
                if ctx.is_active() {
                    ctx.set_active(false);
                }
                data.overlay.pointer_released(to_point(e.pos), &mut EventSurface { ctx });
            }

            Event::Command(cmd) if cmd.is(POINTER_LEFT) => {
                data.overlay.pointer_left(&mut EventSurface { ctx });
                ctx.set_handled();
            }
            _ => {}
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &AppState, env: &Env) {
        if let LifeCycle::HotChanged(false) = event {
            ctx.submit_command(POINTER_LEFT.to(ctx.widget_id()));
        }
        self.copy_button.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old: &AppState, data: &AppState, env: &Env) {
        self.copy_button.update(ctx, data, env);
        if !old.same(data) {
            ctx.request_paint();
        }
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &AppState, env: &Env) -> Size {
        let button_size = Size::new(COPY_BUTTON_SIZE.width as f64, COPY_BUTTON_SIZE.height as f64);
        self.copy_button.layout(ctx, &BoxConstraints::tight(button_size), data, env);
        self.copy_button.set_origin(ctx, to_druid_point(COPY_BUTTON_ORIGIN));
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, env: &Env) {
        for item in render::scene(&data.overlay).items {
            match item {
                Item::Stroke { bounds, color, width, dash: Some(pattern) } => {
                    let style = StrokeStyle::new().dash_pattern(pattern);
                    ctx.stroke_styled(to_rect(bounds), &to_color(color), width, &style);
                }
                Item::Stroke { bounds, color, width, dash: None } => {
                    ctx.stroke(to_rect(bounds), &to_color(color), width);
                }
                Item::Fill { bounds, color } => {
                    ctx.fill(to_rect(bounds), &to_color(color));
                }
                Item::Text { origin, text, font_size, color } => {
                    let layout = ctx
                        .text()
                        .new_text_layout(text)
                        .font(FontFamily::SYSTEM_UI, font_size)
                        .text_color(to_color(color))
                        .build();
                    match layout {
                        Ok(layout) => ctx.draw_text(&layout, to_druid_point(origin)),
                        Err(e) => warn!("文字排版失败: {e}"),
                    }
                }
            }
        }

        self.copy_button.paint(ctx, data, env);
    }
}
