// Host-side tests for element seeding, wrap-around and the renderer lifecycle.

mod common;

use common::RecordingSurface;
use endgame_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const VARIANTS: [RendererVariant; 2] = [RendererVariant::Particles, RendererVariant::Worlds];

fn viewport() -> Viewport {
    Viewport::new(1280.0, 720.0)
}

#[test]
fn tables_are_well_formed() {
    for variant in VARIANTS {
        for world in World::ALL {
            let c = config_for(variant, world);
            assert!(c.element_count > 0, "{variant:?}/{world}");
            assert!(c.element_count <= constants::MAX_ELEMENTS);
            assert!(!c.element_types.is_empty());
            assert!(!c.colors.is_empty());
            assert!(c.speed > 0.0);
            assert!(c.size_range.0 <= c.size_range.1);
            assert!(c.opacity_range.0 >= 0.0 && c.opacity_range.1 <= 1.0);
        }
    }
}

#[test]
fn only_particle_flux_draws_links() {
    for variant in VARIANTS {
        for world in World::ALL {
            let has_links = config_for(variant, world).links.is_some();
            let expected = variant == RendererVariant::Particles && world == World::Flux;
            assert_eq!(has_links, expected, "{variant:?}/{world}");
        }
    }
}

#[test]
fn start_seeds_exact_count_with_allowed_kinds() {
    for variant in VARIANTS {
        for world in World::ALL {
            let mut r = BackgroundRenderer::new(variant, 7);
            assert!(r.start(world, viewport()));
            let config = config_for(variant, world);
            assert_eq!(r.elements().len(), config.element_count);
            for e in r.elements() {
                assert!(config.allows(e.kind), "{:?} not in {variant:?}/{world}", e.kind);
                assert!(viewport().contains(e.position));
                assert!((0.0..=1.0).contains(&e.opacity));
                assert!(e.size >= config.size_range.0 && e.size <= config.size_range.1);
            }
        }
    }
}

#[test]
fn start_is_idempotent_for_same_world() {
    let mut r = BackgroundRenderer::new(RendererVariant::Worlds, 1);
    assert!(r.start(World::Sol, viewport()));
    let before = r.elements().to_vec();
    assert!(!r.start(World::Sol, viewport()));
    assert_eq!(r.elements(), before.as_slice());
}

#[test]
fn start_with_other_world_reseeds() {
    let mut r = BackgroundRenderer::new(RendererVariant::Worlds, 1);
    r.start(World::Sol, viewport());
    assert!(r.start(World::Flux, viewport()));
    let config = config_for(RendererVariant::Worlds, World::Flux);
    assert_eq!(r.elements().len(), config.element_count);
    assert!(r.elements().iter().all(|e| config.allows(e.kind)));
}

#[test]
fn repeated_theme_change_keeps_cardinality() {
    for variant in VARIANTS {
        let mut r = BackgroundRenderer::new(variant, 99);
        r.start(World::Grid, viewport());
        r.on_theme_change(World::Terra);
        let first = r.elements().len();
        r.on_theme_change(World::Terra);
        assert_eq!(r.elements().len(), first);
        let config = config_for(variant, World::Terra);
        assert!(r.elements().iter().all(|e| config.allows(e.kind)));
    }
}

#[test]
fn rapid_reseeds_never_accumulate() {
    let mut r = BackgroundRenderer::new(RendererVariant::Particles, 3);
    r.start(World::Flux, viewport());
    for i in 0..50 {
        r.on_viewport_resize(Viewport::new(300.0 + i as f32, 200.0));
        r.on_theme_change(World::ALL[i % World::ALL.len()]);
    }
    assert_eq!(r.elements().len(), r.config().element_count);
}

#[test]
fn theme_change_before_start_does_not_seed() {
    let mut r = BackgroundRenderer::new(RendererVariant::Worlds, 3);
    r.on_theme_change(World::Flux);
    assert!(r.elements().is_empty());
    r.start(World::Flux, viewport());
    assert_eq!(r.elements().len(), config_for(RendererVariant::Worlds, World::Flux).element_count);
}

#[test]
fn elements_stay_within_wrap_margin() {
    for variant in VARIANTS {
        for world in World::ALL {
            let vp = Viewport::new(320.0, 240.0);
            let mut r = BackgroundRenderer::new(variant, 11);
            r.start(world, vp);
            let margin = r.config().wrap_margin();
            for _ in 0..5_000 {
                r.step();
                for e in r.elements() {
                    assert!(vp.contains_with_margin(e.position, margin), "{e:?}");
                }
            }
        }
    }
}

#[test]
fn element_leaving_an_edge_reappears_opposite() {
    let config = config_for(RendererVariant::Worlds, World::Sol);
    let vp = Viewport::new(200.0, 100.0);
    let margin = config.wrap_margin();
    let mut rng = StdRng::seed_from_u64(5);
    let mut e = VisualElement::spawn(config, vp, &mut rng);

    e.position = Vec2::new(-margin + 0.05, 50.0);
    e.velocity = Vec2::new(-0.1, 0.0);
    e.step(vp, margin);
    assert!(e.position.x > vp.width, "x = {}", e.position.x);

    e.position = Vec2::new(100.0, vp.height + margin - 0.05);
    e.velocity = Vec2::new(0.0, 0.1);
    e.step(vp, margin);
    assert!(e.position.y < 0.0, "y = {}", e.position.y);
}

#[test]
fn wrap_margin_covers_size_and_glow() {
    for variant in VARIANTS {
        for world in World::ALL {
            let c = config_for(variant, world);
            assert!(c.wrap_margin() >= c.size_range.1 + c.glow as f32, "{variant:?}/{world}");
        }
    }
}

#[test]
fn glowing_dot_wraps_only_once_fully_offscreen() {
    let config = config_for(RendererVariant::Particles, World::Flux);
    assert!(config.glow > 0.0);
    let vp = Viewport::new(800.0, 600.0);
    let margin = config.wrap_margin();
    let mut rng = StdRng::seed_from_u64(9);
    let mut e = VisualElement::spawn(config, vp, &mut rng);
    e.size = config.size_range.1;

    e.position = Vec2::new(-margin + 0.05, 300.0);
    e.velocity = Vec2::new(-0.1, 0.0);
    let reach = e.position.x + e.size + config.glow as f32;
    assert!(reach <= 0.05 + 1e-3, "glow still visible at x reach {reach}");
    e.step(vp, margin);
    assert!(e.position.x > vp.width, "x = {}", e.position.x);
    let reach = e.position.x - e.size - config.glow as f32;
    assert!(reach >= vp.width - 0.05 - 1e-3, "glow pops in at {reach}");
}

#[test]
fn wrap_axis_preserves_overshoot() {
    let v = element::wrap_axis(-10.5, 100.0, 10.0);
    assert!((v - 109.5).abs() < 1e-4);
    let v = element::wrap_axis(111.0, 100.0, 10.0);
    assert!((v - (-9.0)).abs() < 1e-4);
    assert_eq!(element::wrap_axis(42.0, 100.0, 10.0), 42.0);
}

#[test]
fn resize_mid_animation_reseeds_inside_new_bounds() {
    let mut r = BackgroundRenderer::new(RendererVariant::Particles, 21);
    r.start(World::Flux, Viewport::new(1920.0, 1080.0));
    for _ in 0..120 {
        r.step();
    }
    let small = Viewport::new(400.0, 300.0);
    r.on_viewport_resize(small);
    assert_eq!(r.viewport(), small);
    assert_eq!(r.elements().len(), r.config().element_count);
    assert!(r.elements().iter().all(|e| small.contains(e.position)));
}

#[test]
fn zero_sized_viewport_is_safe() {
    let mut r = BackgroundRenderer::new(RendererVariant::Worlds, 2);
    r.start(World::Grid, Viewport::new(0.0, 0.0));
    for _ in 0..10 {
        r.step();
    }
    assert_eq!(r.elements().len(), r.config().element_count);
}

#[test]
fn stop_releases_batch_and_ignores_frames() {
    let mut r = BackgroundRenderer::new(RendererVariant::Worlds, 4);
    r.start(World::Terra, viewport());
    r.stop();
    assert!(!r.is_running());
    assert!(r.elements().is_empty());

    let mut surface = RecordingSurface::new(1280.0, 720.0);
    r.frame(&mut surface);
    assert_eq!(surface.clears, 0);
    assert_eq!(surface.fills + surface.strokes, 0);

    r.on_viewport_resize(viewport());
    assert!(r.elements().is_empty());
}

#[test]
fn frame_draws_every_element_with_balanced_state() {
    for variant in VARIANTS {
        for world in World::ALL {
            let mut r = BackgroundRenderer::new(variant, 8);
            r.start(world, viewport());
            let mut surface = RecordingSurface::new(1280.0, 720.0);
            r.frame(&mut surface);
            assert_eq!(surface.clears, 1);
            assert_eq!(surface.depth, 0, "unbalanced save/restore for {variant:?}/{world}");
            assert!(surface.fills + surface.strokes >= r.elements().len());
        }
    }
}

#[test]
fn low_effects_skip_glow_and_links() {
    let mut high = BackgroundRenderer::new(RendererVariant::Particles, 12);
    high.start(World::Flux, Viewport::new(200.0, 200.0));
    let mut s_high = RecordingSurface::new(200.0, 200.0);
    high.frame(&mut s_high);
    assert!(s_high.shadows.iter().any(|b| *b > 0.0));

    let mut low = BackgroundRenderer::new(RendererVariant::Particles, 12);
    low.set_effects_level(EffectsLevel::Low);
    low.start(World::Flux, Viewport::new(200.0, 200.0));
    let mut s_low = RecordingSurface::new(200.0, 200.0);
    low.frame(&mut s_low);
    assert!(s_low.shadows.iter().all(|b| *b == 0.0));
    // Dots are filled, links are the only strokes.
    assert_eq!(s_low.strokes, 0);
    assert!(s_high.strokes > 0, "80 dots in 200x200 should have neighbours");
}

#[test]
fn links_fade_with_distance_and_respect_radius() {
    let style = LinkStyle {
        radius: 100.0,
        max_alpha: 0.2,
        line_width: 0.5,
    };
    assert!((draw::link_alpha(0.0, &style) - 0.2).abs() < 1e-6);
    assert!((draw::link_alpha(50.0, &style) - 0.1).abs() < 1e-6);
    assert_eq!(draw::link_alpha(100.0, &style), 0.0);

    let config = config_for(RendererVariant::Particles, World::Flux);
    let mut rng = StdRng::seed_from_u64(1);
    let mut a = VisualElement::spawn(config, viewport(), &mut rng);
    let mut b = a.clone();
    let mut c = a.clone();
    a.position = Vec2::new(0.0, 0.0);
    b.position = Vec2::new(60.0, 0.0);
    c.position = Vec2::new(500.0, 0.0);
    let mut surface = RecordingSurface::new(600.0, 100.0);
    let drawn = draw::draw_links(&mut surface, &[a, b, c], &style);
    assert_eq!(drawn, 1);
    assert_eq!(surface.strokes, 1);
}

#[test]
fn per_element_colors_are_stable_across_frames() {
    let config = config_for(RendererVariant::Particles, World::Grid);
    let mut rng = StdRng::seed_from_u64(9);
    let e = VisualElement::spawn(config, viewport(), &mut rng);
    for _ in 0..20 {
        assert_eq!(draw::element_color(&e, config, &mut rng), e.color);
    }
}

#[test]
fn per_frame_colors_stay_in_palette() {
    let config = config_for(RendererVariant::Worlds, World::Flux);
    let mut rng = StdRng::seed_from_u64(9);
    let e = VisualElement::spawn(config, viewport(), &mut rng);
    for _ in 0..50 {
        let c = draw::element_color(&e, config, &mut rng);
        assert!(config.colors.contains(&c));
    }
}

#[test]
fn hsl_css_formats_alpha() {
    let c = Hsl::new(300.0, 100.0, 65.0);
    assert_eq!(c.css(1.0), "hsl(300 100% 65%)");
    assert_eq!(c.css(0.4), "hsl(300 100% 65% / 0.4)");
    assert_eq!(c.with_sl(100.0, 50.0).to_string(), "hsl(300 100% 50%)");
}
