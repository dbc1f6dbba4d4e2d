use crate::element::VisualElement;
use crate::surface::Surface;
use crate::theme::{ColorMode, Hsl, LinkStyle, ShapeKind, ThemeConfig};
use crate::world::EffectsLevel;
use rand::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

/// Pick the draw color for an element. `PerFrame` configs draw a new palette
/// entry on every call.
pub fn element_color<R: Rng>(
    element: &VisualElement,
    config: &ThemeConfig,
    rng: &mut R,
) -> Hsl {
    match config.color_mode {
        ColorMode::PerElement => element.color,
        ColorMode::PerFrame => *config.colors.choose(rng).unwrap_or(&element.color),
    }
}

pub fn draw_element<S: Surface + ?Sized, R: Rng>(
    surface: &mut S,
    element: &VisualElement,
    config: &ThemeConfig,
    effects: EffectsLevel,
    rng: &mut R,
) {
    let color = element_color(element, config, rng);
    let glow = |blur: f64| if effects.is_high() { blur } else { 0.0 };
    let s = element.size as f64;

    surface.save();
    surface.translate(element.position.x as f64, element.position.y as f64);
    surface.rotate(element.rotation as f64);
    surface.set_alpha(element.opacity as f64);

    match element.kind {
        ShapeKind::Dot => {
            if config.glow > 0.0 && effects.is_high() {
                surface.set_shadow(config.glow, &color.with_sl(100.0, 50.0).css(1.0));
            }
            surface.set_fill(&color.css(1.0));
            surface.begin_path();
            if config.petal_chance > 0.0 && rng.gen::<f32>() < config.petal_chance {
                surface.ellipse(0.0, 0.0, s, s * 0.6, FRAC_PI_4);
            } else {
                surface.arc(0.0, 0.0, s);
            }
            surface.fill();
        }
        ShapeKind::Cloud => {
            surface.set_fill(&color.css(0.4));
            for i in 0..5 {
                let x = (i as f64 - 2.0) * s * 0.3;
                let y = (i as f64).sin() * s * 0.2;
                surface.begin_path();
                surface.arc(x, y, s * 0.4);
                surface.fill();
            }
        }
        ShapeKind::Bird => {
            surface.set_stroke(&color.css(1.0));
            surface.set_line_width(2.0);
            surface.begin_path();
            surface.move_to(-s * 0.3, 0.0);
            surface.quadratic_curve_to(0.0, -s * 0.2, s * 0.3, 0.0);
            surface.move_to(-s * 0.3, 0.0);
            surface.quadratic_curve_to(0.0, s * 0.2, s * 0.3, 0.0);
            surface.stroke();
        }
        ShapeKind::SunRay => {
            surface.set_stroke(&color.css(0.6));
            surface.set_line_width(1.0);
            surface.begin_path();
            surface.move_to(0.0, 0.0);
            surface.line_to(s, 0.0);
            surface.stroke();
        }
        ShapeKind::Planet => {
            surface.set_fill(&color.css(1.0));
            surface.set_shadow(glow(20.0), &color.css(1.0));
            surface.begin_path();
            surface.arc(0.0, 0.0, s * 0.3);
            surface.fill();
        }
        ShapeKind::Star => {
            surface.set_fill(&color.css(1.0));
            surface.set_shadow(glow(10.0), &color.css(1.0));
            for i in 0..4 {
                surface.save();
                surface.rotate(i as f64 * FRAC_PI_2);
                surface.begin_path();
                surface.move_to(0.0, 0.0);
                surface.line_to(s * 0.2, 0.0);
                surface.line_to(s * 0.1, s * 0.05);
                surface.line_to(0.0, 0.0);
                surface.fill();
                surface.restore();
            }
        }
        ShapeKind::Comet => {
            surface.set_fill_linear_gradient(0.0, 0.0, -s, 0.0, &color.css(1.0), &color.css(0.0));
            surface.begin_path();
            surface.ellipse(0.0, 0.0, s * 0.1, s * 0.05, 0.0);
            surface.fill();
        }
        ShapeKind::Circuit => {
            surface.set_stroke(&color.css(1.0));
            surface.set_line_width(2.0);
            surface.set_shadow(glow(5.0), &color.css(1.0));
            surface.begin_path();
            surface.rect(-s * 0.2, -s * 0.2, s * 0.4, s * 0.4);
            surface.move_to(0.0, -s * 0.2);
            surface.line_to(0.0, s * 0.2);
            surface.move_to(-s * 0.2, 0.0);
            surface.line_to(s * 0.2, 0.0);
            surface.stroke();
        }
        ShapeKind::Hexagon => {
            surface.set_stroke(&color.css(0.8));
            surface.set_line_width(1.0);
            surface.set_shadow(glow(8.0), &color.css(1.0));
            surface.begin_path();
            for i in 0..6 {
                let angle = i as f64 * FRAC_PI_3;
                let (x, y) = (angle.cos() * s * 0.3, angle.sin() * s * 0.3);
                if i == 0 {
                    surface.move_to(x, y);
                } else {
                    surface.line_to(x, y);
                }
            }
            surface.close_path();
            surface.stroke();
        }
        ShapeKind::Grid => {
            surface.set_stroke(&color.css(0.5));
            surface.set_line_width(1.0);
            surface.begin_path();
            for i in -1..=1 {
                let o = i as f64 * s * 0.2;
                surface.move_to(o, -s * 0.2);
                surface.line_to(o, s * 0.2);
                surface.move_to(-s * 0.2, o);
                surface.line_to(s * 0.2, o);
            }
            surface.stroke();
        }
        ShapeKind::Leaf => {
            surface.set_fill(&color.css(0.7));
            surface.begin_path();
            surface.move_to(0.0, -s * 0.3);
            surface.quadratic_curve_to(s * 0.2, -s * 0.1, 0.0, s * 0.3);
            surface.quadratic_curve_to(-s * 0.2, -s * 0.1, 0.0, -s * 0.3);
            surface.fill();
        }
        ShapeKind::Petal => {
            surface.set_fill(&color.css(0.6));
            surface.begin_path();
            surface.ellipse(0.0, -s * 0.2, s * 0.15, s * 0.25, 0.0);
            surface.fill();
        }
        ShapeKind::Branch => {
            surface.set_stroke(&color.css(1.0));
            surface.set_line_width(2.0);
            surface.begin_path();
            surface.move_to(0.0, 0.0);
            surface.line_to(s * 0.3, -s * 0.2);
            surface.move_to(0.0, 0.0);
            surface.line_to(s * 0.2, s * 0.3);
            surface.stroke();
        }
    }

    surface.restore();
}

/// Connect every pair closer than `style.radius`, fading with distance.
/// Returns the number of lines drawn.
pub fn draw_links<S: Surface + ?Sized>(
    surface: &mut S,
    elements: &[VisualElement],
    style: &LinkStyle,
) -> usize {
    let mut drawn = 0;
    for (i, a) in elements.iter().enumerate() {
        for b in &elements[i + 1..] {
            let d = a.position.distance(b.position);
            if d >= style.radius {
                continue;
            }
            surface.save();
            surface.set_alpha(link_alpha(d, style) as f64);
            surface.set_stroke(&a.color.with_sl(100.0, 50.0).css(1.0));
            surface.set_line_width(style.line_width);
            surface.begin_path();
            surface.move_to(a.position.x as f64, a.position.y as f64);
            surface.line_to(b.position.x as f64, b.position.y as f64);
            surface.stroke();
            surface.restore();
            drawn += 1;
        }
    }
    drawn
}

#[inline]
pub fn link_alpha(distance: f32, style: &LinkStyle) -> f32 {
    ((1.0 - distance / style.radius) * style.max_alpha).clamp(0.0, style.max_alpha)
}
