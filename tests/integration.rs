// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the banner viewer driven through its messages.

use approx::assert_abs_diff_eq;
use banner_lens::banner::{load_banners, Banner, BannerSource};
use banner_lens::ui::state::{PanOffset, PointerKind, SlideViewState};
use banner_lens::ui::viewer::subcomponents::{carousel, modal};
use banner_lens::ui::viewer::{Effect, Message, Settings, State};
use banner_lens::ui::widgets::PointerEvent;
use iced::Point;
use std::time::{Duration, Instant};

fn banners(count: usize) -> Vec<Banner> {
    (0..count)
        .map(|i| Banner::new(format!("banner-{i}.png"), None))
        .collect()
}

fn viewer(count: usize) -> State {
    State::with_banners(Settings::default(), banners(count))
}

fn carousel_pointer(event: PointerEvent) -> Message {
    Message::Carousel(carousel::Message::Pointer(event))
}

fn modal_pointer(event: PointerEvent) -> Message {
    Message::Modal(modal::Message::Pointer(event))
}

fn mouse_press(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Pressed {
        pointer: PointerKind::Mouse,
        position: Some(Point::new(x, y)),
    }
}

fn mouse_move(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Moved {
        pointer: PointerKind::Mouse,
        position: Some(Point::new(x, y)),
    }
}

fn mouse_release() -> PointerEvent {
    PointerEvent::Released {
        pointer: PointerKind::Mouse,
    }
}

fn tap_slide(state: &mut State, index: usize) {
    state.update(Message::Carousel(carousel::Message::Select(index)));
    state.update(carousel_pointer(mouse_press(100.0, 100.0)));
    state.update(carousel_pointer(mouse_release()));
}

#[test]
fn autoplay_advances_through_slides() {
    let mut state = viewer(3);
    assert_eq!(state.active_index(), 0);

    let tick = || Message::Carousel(carousel::Message::AutoplayTick);
    assert_eq!(state.update(tick()), Effect::SlideChanged(1));
    assert_eq!(state.update(tick()), Effect::SlideChanged(2));
    assert_eq!(state.update(tick()), Effect::SlideChanged(0));
}

#[test]
fn open_zoom_pan_and_close() {
    let mut state = viewer(3);
    tap_slide(&mut state, 1);
    assert!(state.is_modal_open());
    assert_eq!(state.active_index(), 1);

    state.update(Message::Modal(modal::Message::ZoomIn));
    state.update(Message::Modal(modal::Message::ZoomIn));
    assert_abs_diff_eq!(state.active_slide_state().zoom.value(), 2.0);

    state.update(modal_pointer(mouse_press(100.0, 100.0)));
    state.update(modal_pointer(mouse_move(150.0, 100.0)));
    state.update(modal_pointer(mouse_release()));

    let offset = state.active_slide_state().offset;
    assert_abs_diff_eq!(offset.dx, 25.0);
    assert_abs_diff_eq!(offset.dy, 0.0);

    state.update(Message::Modal(modal::Message::Close));
    assert!(!state.is_modal_open());
    let slide = state.slide_state(1).unwrap();
    assert_abs_diff_eq!(slide.zoom.value(), 1.0);
    assert_eq!(slide.offset, PanOffset::ZERO);
}

#[test]
fn empty_list_renders_nothing_and_ignores_input() {
    let mut state = viewer(0);
    assert_eq!(state.active_index(), 0);
    assert!(!state.autoplay_active());

    assert_eq!(
        state.update(Message::Carousel(carousel::Message::AutoplayTick)),
        Effect::None
    );
    tap_slide(&mut state, 0);
    assert!(!state.is_modal_open());
    assert_eq!(
        state.update(Message::Modal(modal::Message::ZoomIn)),
        Effect::None
    );
    assert!(state.slide_state(0).is_none());
}

#[test]
fn zoom_out_at_fitted_is_a_noop() {
    let mut state = viewer(2);
    tap_slide(&mut state, 0);
    let before = state.active_slide_state();

    state.update(Message::Modal(modal::Message::ZoomOut));

    assert_eq!(state.active_slide_state(), before);
    assert_eq!(state.active_slide_state(), SlideViewState::default());
}

#[test]
fn pan_never_exceeds_bounds() {
    let mut state = viewer(1);
    tap_slide(&mut state, 0);
    state.update(Message::Modal(modal::Message::ZoomIn));

    state.update(modal_pointer(mouse_press(0.0, 0.0)));
    for step in 1..=40 {
        let p = step as f32 * 37.0;
        state.update(modal_pointer(mouse_move(p, -p)));
        let offset = state.active_slide_state().offset;
        assert!(offset.dx.abs() <= 100.0 + f32::EPSILON);
        assert!(offset.dy.abs() <= 100.0 + f32::EPSILON);
    }
}

#[test]
fn zoom_stays_within_range_and_on_half_steps() {
    let mut state = viewer(1);
    tap_slide(&mut state, 0);

    let ops = [
        modal::Message::ZoomIn,
        modal::Message::ZoomIn,
        modal::Message::ZoomOut,
        modal::Message::ZoomIn,
        modal::Message::ZoomIn,
        modal::Message::ZoomIn,
        modal::Message::ZoomIn,
        modal::Message::ZoomOut,
    ];
    for op in ops {
        state.update(Message::Modal(op));
        let zoom = state.active_slide_state().zoom.value();
        assert!((1.0..=3.0).contains(&zoom));
        assert_abs_diff_eq!((zoom * 2.0).fract(), 0.0);
    }
}

#[test]
fn drag_after_release_does_not_pan() {
    let mut state = viewer(1);
    tap_slide(&mut state, 0);
    state.update(Message::Modal(modal::Message::ZoomIn));

    state.update(modal_pointer(mouse_press(0.0, 0.0)));
    state.update(modal_pointer(mouse_release()));
    state.update(modal_pointer(mouse_move(80.0, 80.0)));

    assert!(state.active_slide_state().offset.is_zero());
}

#[test]
fn touch_drag_pans_like_mouse() {
    let mut state = viewer(1);
    tap_slide(&mut state, 0);
    state.update(Message::Modal(modal::Message::ZoomIn));
    state.update(Message::Modal(modal::Message::ZoomIn));

    let finger = PointerKind::Finger(3);
    state.update(modal_pointer(PointerEvent::Pressed {
        pointer: finger,
        position: Some(Point::new(10.0, 10.0)),
    }));
    state.update(modal_pointer(PointerEvent::Moved {
        pointer: finger,
        position: Some(Point::new(10.0, 50.0)),
    }));
    state.update(modal_pointer(PointerEvent::Left));

    assert_abs_diff_eq!(state.active_slide_state().offset.dy, 20.0);
    assert!(!state.is_dragging());
}

#[test]
fn swipe_moves_carousel_one_slide() {
    let mut state = viewer(3);
    state.update(carousel_pointer(mouse_press(300.0, 50.0)));
    let effect = state.update(carousel_pointer(mouse_move(240.0, 50.0)));
    state.update(carousel_pointer(mouse_release()));

    assert_eq!(effect, Effect::SlideChanged(1));
    assert!(!state.is_modal_open());
}

#[test]
fn transition_settles_on_target() {
    let mut state = viewer(1);
    let start = Instant::now();
    state.update_at(carousel_pointer(mouse_press(1.0, 1.0)), start);
    state.update_at(carousel_pointer(mouse_release()), start);
    state.update_at(Message::Modal(modal::Message::ZoomIn), start);

    let mid = start + Duration::from_millis(100);
    state.update_at(Message::Frame(mid), mid);
    let scale = state.displayed_transform().scale;
    assert!(scale > 1.0 && scale < 1.5);

    let end = start + Duration::from_millis(400);
    state.update_at(Message::Frame(end), end);
    assert_abs_diff_eq!(state.displayed_transform().scale, 1.5);
}

#[test]
fn directory_source_feeds_the_viewer() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.png", "a.png", "c.png"] {
        image_rs::RgbaImage::new(4, 2)
            .save(dir.path().join(name))
            .unwrap();
    }

    let source = BannerSource::from_path(dir.path()).unwrap();
    let loaded = load_banners(&source).unwrap();
    let names: Vec<_> = loaded.iter().map(Banner::display_name).collect();
    assert_eq!(names, ["a.png", "b.png", "c.png"]);

    let mut state = State::with_banners(Settings::default(), loaded);
    assert_eq!(state.banners().len(), 3);
    tap_slide(&mut state, 2);
    assert_eq!(
        state.active_banner().map(Banner::display_name).as_deref(),
        Some("c.png")
    );
}
