use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Value of `name` in the page's query string, if present.
pub fn query_param(name: &str) -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    web::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Call `handler` with the checked state whenever the checkbox changes.
pub fn add_checkbox_listener(
    input: &web::HtmlInputElement,
    mut handler: impl FnMut(bool) + 'static,
) {
    let target = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        handler(target.checked());
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
