use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use carousel::{Carousel, CarouselConfig, DragRelease, Geometry, math};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    math::abs(a - b) < eps
}

/// Card 250, spacing 200, commit threshold 100.
fn config() -> CarouselConfig {
    CarouselConfig::default().with_spacing_multiplier(0.8)
}

fn mounted_controller(count: usize) -> Controller {
    let mut c = Controller::new(config(), count).unwrap();
    c.on_geometry(Geometry::new(400.0, 300.0));
    c
}

#[test]
fn default_spring_matches_settle_curve_parameters() {
    let s = Spring::default();
    assert_eq!(s.response, 0.6);
    assert_eq!(s.damping_fraction, 0.8);
    assert!(approx(s.angular_frequency(), 10.471_975, 1e-3));
    assert!(approx(s.stiffness(), 109.662_27, 1e-2));
    assert!(approx(s.damping(), 16.755_16, 1e-3));
}

#[test]
fn spring_starts_at_initial_conditions_in_every_regime() {
    for spring in [
        Spring::new(0.6, 0.3),
        Spring::critically_damped(0.6),
        Spring::new(0.6, 2.5),
    ] {
        let (x, v) = spring.evaluate(1.5, -4.0, 0.0);
        assert!(approx(x, 1.5, 1e-4), "{spring:?}");
        assert!(approx(v, -4.0, 1e-3), "{spring:?}");
    }
}

#[test]
fn spring_animation_settles_on_target_with_small_overshoot() {
    let anim = SpringAnimation::new(2.0, 3.0, 0.0, 1_000, Spring::default());
    assert_eq!(anim.sample(1_000), 2.0);
    assert!(!anim.is_done(1_100));

    let mut max = f32::MIN;
    for now_ms in (1_000..=2_500u64).step_by(8) {
        max = max.max(anim.sample(now_ms));
    }
    assert!(max > 3.0, "0.8 damping overshoots slightly");
    assert!(max < 3.02);

    assert!(anim.is_done(2_500));
    assert_eq!(anim.sample(2_500), 3.0);
    assert_eq!(anim.velocity(2_500), 0.0);
}

#[test]
fn critically_damped_spring_never_overshoots() {
    let anim = SpringAnimation::new(0.0, 1.0, 0.0, 0, Spring::critically_damped(0.5));
    let mut last = 0.0;
    for now_ms in (0..=2_000u64).step_by(10) {
        let v = anim.sample(now_ms);
        assert!(v <= 1.0 + 1e-6);
        assert!(v >= last - 1e-6);
        last = v;
    }
    assert!(anim.is_done(2_000));
}

#[test]
fn retarget_keeps_position_and_velocity() {
    let mut anim = SpringAnimation::new(0.0, 1.0, 0.0, 0, Spring::default());
    let pos = anim.sample(120);
    let vel = anim.velocity(120);
    anim.retarget(120, 2.0);
    assert!(approx(anim.sample(120), pos, 1e-5));
    assert!(approx(anim.velocity(120), vel, 1e-3));
    assert_eq!(anim.to, 2.0);
}

#[test]
fn tween_easings_hit_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert!(approx(easing.sample(0.5), 0.5, 1e-6));
    }
    let t = Tween::new(10.0, 20.0, 100, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert!(t.is_done(101));
    assert_eq!(t.sample(500), 20.0);
}

#[test]
fn release_settles_displayed_index_towards_logical_index() {
    let mut c = mounted_controller(5);
    c.on_drag_start();
    c.on_drag_move(-200.0, 0);
    let r = c.on_drag_end(DragRelease::new(-200.0, -200.0), 0);
    assert_eq!(r.to_index, 3);

    // The engine is already at rest; only the display is in flight.
    assert_eq!(c.carousel().rest_index(), 3);
    assert_eq!(c.carousel().drag_offset(), 0.0);
    assert!(c.is_animating());

    // No visual jump at the moment of release.
    let state = c.displayed_state(0);
    assert!(approx(state.current_index, 2.0, 1e-5));
    assert!(approx(state.drag_offset, -200.0, 1e-3));

    let mut settled_at = None;
    for now_ms in (16..=3_000u64).step_by(16) {
        if c.tick(now_ms).is_none() {
            settled_at = Some(now_ms);
            break;
        }
    }
    let settled_at = settled_at.expect("spring settles");
    assert!(settled_at > 300);
    assert_eq!(c.displayed_state(settled_at).current_index, 3.0);
    assert_eq!(c.displayed_state(settled_at).drag_offset, 0.0);
}

fn offsets_by_index(frame: &Frame) -> Vec<f32> {
    let mut offsets = vec![0.0; frame.transforms.len()];
    for t in &frame.transforms {
        offsets[t.index] = t.total_offset;
    }
    offsets
}

#[test]
fn release_does_not_move_any_card_on_the_release_frame() {
    for (translation, predicted) in [(-120.0, -120.0), (-200.0, -200.0), (40.0, 600.0)] {
        let mut c = mounted_controller(5);
        c.on_drag_start();
        c.on_drag_move(translation, 0);
        let before = offsets_by_index(&c.frame(32));

        let r = c.on_drag_end(DragRelease::new(translation, predicted), 32);
        assert!(r.changed_page());
        let after = offsets_by_index(&c.frame(32));

        assert_eq!(before.len(), 5);
        for (b, a) in before.iter().zip(&after) {
            assert!(math::abs(b - a) < 1.0, "{translation}: {b} vs {a}");
        }
    }
}

#[test]
fn committed_release_settles_the_focal_card_into_the_centre() {
    let mut c = mounted_controller(5);
    c.on_drag_move(-120.0, 0);
    c.on_drag_end(DragRelease::new(-120.0, -120.0), 0);
    assert!(c.is_animating());

    // Item 3 starts 80px right of centre and ends centred.
    let start = offsets_by_index(&c.frame(0))[3];
    assert!(approx(start, 80.0, 1e-2));
    assert!(c.tick(3_000).is_none());
    assert_eq!(offsets_by_index(&c.frame(3_000))[3], 0.0);
}

#[test]
fn scroll_to_index_animates_from_rest() {
    let mut c = mounted_controller(5);
    assert!(!c.is_animating());
    assert_eq!(c.scroll_to_index(4, 0), 4);
    assert!(c.is_animating());
    assert_eq!(c.displayed_index(0), 2.0);

    let mid = c.displayed_index(150);
    assert!(mid > 2.0 && mid < 4.0, "{mid}");

    assert!(c.tick(3_000).is_none());
    assert_eq!(c.displayed_index(3_000), 4.0);
}

#[test]
fn snap_back_only_animates_the_offset() {
    let mut c = mounted_controller(5);
    c.on_drag_move(-30.0, 0);
    let r = c.on_drag_end(DragRelease::new(-30.0, -30.0), 0);
    assert!(!r.changed_page());
    assert_eq!(c.displayed_index(50), 2.0);
    let mid = c.displayed_offset(50);
    assert!(mid > -30.0 && mid < 0.0);
    assert!(c.tick(3_000).is_none());
    assert_eq!(c.displayed_offset(3_000), 0.0);
}

#[test]
fn cancel_snaps_back() {
    let mut c = mounted_controller(5);
    c.on_drag_move(-190.0, 0);
    let r = c.on_drag_cancel(0);
    assert_eq!(r.to_index, 2);
    assert_eq!(c.carousel().rest_index(), 2);
    assert!(approx(c.displayed_offset(0), -190.0, 1e-3));
}

#[test]
fn new_drag_shows_live_offset_while_index_keeps_settling() {
    let mut c = mounted_controller(5);
    c.on_drag_move(-200.0, 0);
    c.on_drag_end(DragRelease::new(-200.0, -200.0), 0);

    c.on_drag_start();
    c.on_drag_move(40.0, 60);
    assert_eq!(c.displayed_offset(60), 40.0);
    let idx = c.displayed_index(60);
    assert!(idx > 2.0 && idx < 3.1);
}

#[test]
fn second_release_retargets_without_a_jump() {
    let mut c = mounted_controller(7);
    assert_eq!(c.carousel().rest_index(), 3);
    c.on_drag_move(-200.0, 0);
    c.on_drag_end(DragRelease::new(-200.0, -200.0), 0);

    let before = c.displayed_index(100);
    c.on_drag_move(-10.0, 100);
    c.on_drag_end(DragRelease::new(-10.0, -600.0), 100);
    assert_eq!(c.carousel().rest_index(), 5);
    assert!(approx(c.displayed_index(100), before, 1e-4));

    assert!(c.tick(5_000).is_none());
    assert_eq!(c.displayed_index(5_000), 5.0);
}

#[test]
fn scroll_and_jump_clamp_the_index() {
    let mut c = mounted_controller(4);
    assert_eq!(c.scroll_to_index(10, 0), 3);
    assert!(c.is_animating());
    assert!(approx(c.displayed_index(0), 2.0, 1e-5));

    assert_eq!(c.jump_to_index(0), 0);
    assert!(!c.is_animating());
    assert_eq!(c.displayed_index(0), 0.0);
}

#[test]
fn set_count_clamps_and_stops_animation() {
    let mut c = mounted_controller(6);
    c.scroll_to_index(5, 0);
    c.set_count(2);
    assert!(!c.is_animating());
    assert_eq!(c.carousel().rest_index(), 1);
    assert_eq!(c.frame(0).transforms.len(), 2);
}

#[test]
fn frame_is_painted_back_to_front() {
    let c = mounted_controller(5);
    let frame = c.frame(0);
    assert_eq!(frame.transforms.len(), 5);
    assert_eq!(frame.transforms.last().map(|t| t.index), Some(2));
    assert!(
        frame
            .transforms
            .windows(2)
            .all(|w| w[0].z_order <= w[1].z_order)
    );
    assert!(frame.layout.is_some());
    assert_eq!(frame.indicator.map(|i| i.active), Some(Some(2)));
}

#[test]
fn frame_before_layout_is_empty() {
    let c = Controller::new(config(), 5).unwrap();
    let frame = c.frame(0);
    assert!(frame.layout.is_none());
    assert!(frame.transforms.is_empty());
}

#[test]
fn indicator_follows_rest_index_with_a_transition() {
    let mut c = mounted_controller(5);
    assert_eq!(c.indicator_page(0), Some(2));

    // A drag alone does not move the rest-driven indicator.
    c.on_drag_move(-180.0, 0);
    assert_eq!(c.indicator_page(0), Some(2));

    c.on_drag_end(DragRelease::new(-180.0, -180.0), 0);
    assert_eq!(c.indicator_page(0), Some(3));

    let mid = c.indicator(100).unwrap();
    assert!(approx(mid.dots[3].scale, 0.9, 1e-4));
    assert!(approx(mid.dots[2].scale, 0.9, 1e-4));
    assert!(c.needs_frame(100));

    c.tick(250);
    let done = c.indicator(250).unwrap();
    assert_eq!(done.dots[3].scale, 1.0);
    assert_eq!(done.dots[2].scale, 0.8);
    assert_eq!(done.active, Some(3));
}

#[test]
fn live_indicator_tracks_the_drag() {
    let mut c = mounted_controller(5).with_indicator_source(IndicatorSource::Live);
    c.on_drag_move(-150.0, 0);
    assert_eq!(c.indicator_page(0), Some(3));
    c.on_drag_move(-40.0, 16);
    assert_eq!(c.indicator_page(16), Some(2));
}

#[test]
fn disabled_indicator_is_absent() {
    let mut c = Controller::new(config().with_indicator_style(None), 3).unwrap();
    c.on_geometry(Geometry::new(300.0, 200.0));
    assert!(c.indicator(0).is_none());
    assert!(c.frame(0).indicator.is_none());
}

#[test]
fn indicator_transition_can_be_configured() {
    let mut t = IndicatorTransition::new(40, Easing::Linear);
    t.jump_to_page(Some(0));
    t.set_page(Some(1), 0);
    assert!(t.is_animating(20));
    let style = carousel::IndicatorStyle::default();
    let layout = t.layout(3, &style, 20);
    assert!(approx(layout.dots[1].scale, 0.9, 1e-4));
    t.tick(40);
    assert!(!t.is_animating(40));
    assert_eq!(t.current_page(), Some(1));
}

#[test]
fn anchor_keeps_focus_across_prepend() {
    let mut c = Carousel::new(CarouselConfig::default(), 5).unwrap();
    c.set_geometry(Geometry::new(400.0, 250.0));
    assert_eq!(c.rest_index(), 2);

    let anchor = capture_focus_anchor(&c, |i| Some(100u64 + i as u64)).unwrap();
    assert_eq!(anchor.key, 102);

    // Prepend one item: old items shift by +1.
    c.set_count(6);
    let keys: Vec<u64> = core::iter::once(999)
        .chain((0..5).map(|i| 100 + i))
        .collect();
    let applied = apply_focus_anchor(&mut c, &anchor, |k| keys.iter().position(|x| x == k));
    assert!(applied);
    assert_eq!(c.rest_index(), 3);

    let missing = FocusAnchor { key: 7u64 };
    assert!(!apply_focus_anchor(&mut c, &missing, |_| None));
    assert_eq!(c.rest_index(), 3);
}

#[test]
fn empty_carousel_has_no_anchor() {
    let c = Carousel::new(CarouselConfig::default(), 0).unwrap();
    assert!(capture_focus_anchor(&c, |i| Some(i)).is_none());
}

fn letters(s: &str) -> Vec<String> {
    s.chars().map(|ch| format!("{ch}")).collect()
}

fn view(items: Vec<String>) -> CarouselView<String, String, String> {
    CarouselView::new(config(), items, |s: &String| s.clone(), |s: &String| {
        format!("card:{s}")
    })
    .unwrap()
}

#[test]
fn view_renders_items_back_to_front() {
    let mut v = view(letters("abcde"));
    v.controller_mut().on_geometry(Geometry::new(400.0, 300.0));
    assert_eq!(v.focused_item().map(String::as_str), Some("c"));

    let rendered = v.render(0);
    assert_eq!(rendered.len(), 5);
    let front = rendered.last().unwrap();
    assert_eq!(front.key, "c");
    assert_eq!(front.content, "card:c");
    assert!(front.transform.is_focal());

    let indicator = v.indicator(0).unwrap();
    assert_eq!(indicator.dots.len(), 5);
}

#[test]
fn view_keeps_focus_when_items_change() {
    let mut v = view(letters("abcde"));
    v.controller_mut().on_geometry(Geometry::new(400.0, 300.0));

    assert!(v.set_items(letters("zabcde")));
    assert_eq!(v.focused_item().map(String::as_str), Some("c"));
    assert_eq!(v.controller().carousel().rest_index(), 3);

    // Focused item removed: clamp instead.
    assert!(!v.set_items(letters("ab")));
    assert_eq!(v.controller().carousel().rest_index(), 1);
    assert_eq!(v.len(), 2);
}

#[test]
fn view_before_layout_does_not_pin_focus() {
    let mut v = view(letters("abcde"));
    assert!(!v.set_items(letters("abc")));
    v.controller_mut().on_geometry(Geometry::new(400.0, 300.0));
    assert_eq!(v.focused_item().map(String::as_str), Some("b"));
}

#[test]
fn empty_view_renders_nothing() {
    let mut v = view(vec![]);
    v.controller_mut().on_geometry(Geometry::new(400.0, 300.0));
    assert!(v.is_empty());
    assert!(v.render(0).is_empty());
    assert!(v.focused_item().is_none());
    assert_eq!(v.indicator(0).map(|i| i.dots.len()), Some(0));
}
