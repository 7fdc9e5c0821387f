use glam::Vec2;
use web_sys as web;

/// Pointer drag in progress on the canvas, in backing-store pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous sample, or `None` when not dragging
    /// with this pointer.
    pub fn step(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}

/// Normalize a wheel delta to lines regardless of `deltaMode`.
#[inline]
pub fn wheel_lines(delta_y: f64, delta_mode: u32) -> f32 {
    match delta_mode {
        0 => (delta_y / 100.0) as f32, // pixels
        1 => delta_y as f32,           // lines
        _ => (delta_y * 10.0) as f32,  // pages
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
