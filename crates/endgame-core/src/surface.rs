//! Minimal 2D drawing surface used by the background renderer.
//!
//! The method set mirrors the subset of the Canvas 2D API that the shape
//! drawers need, so the web implementation is a thin forwarding layer and the
//! host tests can record calls instead of rasterizing.

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);

    fn set_alpha(&mut self, alpha: f64);
    fn set_fill(&mut self, css: &str);
    fn set_stroke(&mut self, css: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_shadow(&mut self, blur: f64, css: &str);
    /// Fill with a linear gradient from `from` at `(x0, y0)` to `to` at `(x1, y1)`.
    fn set_fill_linear_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        from: &str,
        to: &str,
    );

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64);
    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn fill(&mut self);
    fn stroke(&mut self);
}
