use endgame_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn root_element() -> Option<web::Element> {
    window_document().and_then(|d| d.document_element())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// Current window size in CSS pixels.
pub fn window_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Size the canvas backing store to the window and return the new viewport.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let vp = window_viewport();
    canvas.set_width(vp.width.max(1.0) as u32);
    canvas.set_height(vp.height.max(1.0) as u32);
    vp
}

/// Fixed, full-viewport and pointer-transparent, beneath page content.
pub fn style_background_canvas(canvas: &web::HtmlCanvasElement, opacity: f32) {
    let style = format!(
        "position:fixed;inset:0;pointer-events:none;z-index:0;opacity:{opacity}"
    );
    _ = canvas.set_attribute("style", &style);
}
