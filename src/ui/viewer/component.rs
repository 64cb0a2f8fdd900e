// SPDX-License-Identifier: MPL-2.0
//! Banner viewer orchestrator.
//!
//! Owns the banner list, the active index, the modal flag and the view
//! state of every slide. The carousel and modal sub-components handle their
//! own input; this module applies their effects to shared state.

use super::subcomponents::carousel;
use super::subcomponents::modal::{self, Direction};
use super::{carousel_pane, modal_pane};
use crate::banner::Banner;
use crate::config::{
    AutoplayInterval, TransitionDuration, SLIDE_TRANSITION_MS, TRANSITION_FRAME_MS,
};
use crate::i18n::fluent::I18n;
use crate::ui::state::{
    SlideAnimation, SlideStates, SlideViewState, Transform, TransformTransition,
};
use crate::ui::widgets::Slide;
use iced::{event, keyboard, Element, Subscription};
use std::time::{Duration, Instant};

/// Messages handled by the banner viewer.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    Modal(modal::Message),
    /// Frame tick while a transform or slide animation is running.
    Frame(Instant),
    /// Native event forwarded by the application (keyboard shortcuts).
    RawEvent(event::Event),
}

/// Effects reported to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The active slide changed (carousel or modal).
    SlideChanged(usize),
}

/// Environment needed to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Viewer settings resolved from the config file.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub autoplay: bool,
    pub autoplay_interval: AutoplayInterval,
    pub transition: TransitionDuration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval: AutoplayInterval::default(),
            transition: TransitionDuration::default(),
        }
    }
}

/// Complete viewer state.
#[derive(Debug)]
pub struct State {
    banners: Vec<Banner>,
    carousel: carousel::State,
    modal: modal::State,
    slides: SlideStates,
    transition: TransformTransition,
    /// Carousel slide animation after the last slide change.
    slide_animation: Option<SlideAnimation>,
    settings: Settings,
    /// Time of the last frame, used to sample the transition when drawing.
    now: Instant,
    loading: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let now = Instant::now();
        Self {
            banners: Vec::new(),
            carousel: carousel::State::new(0),
            modal: modal::State::default(),
            slides: SlideStates::default(),
            transition: TransformTransition::settled(Transform::IDENTITY, now),
            slide_animation: None,
            settings,
            now,
            loading: false,
        }
    }

    /// Creates a viewer already showing `banners`.
    #[must_use]
    pub fn with_banners(settings: Settings, banners: Vec<Banner>) -> Self {
        let mut state = Self::new(settings);
        state.set_banners(banners);
        state
    }

    /// Replaces the banner list supplied by the loader.
    ///
    /// View state of banners that are still present is kept.
    pub fn set_banners(&mut self, banners: Vec<Banner>) {
        let ids: Vec<_> = banners.iter().map(Banner::id).collect();
        self.slides.retain(&ids);
        self.carousel.inner.set_len(banners.len());
        self.banners = banners;
        self.slide_animation = None;
        self.loading = false;
        if self.banners.is_empty() {
            self.close_modal(Instant::now());
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.carousel.active_index()
    }

    #[must_use]
    pub fn active_banner(&self) -> Option<&Banner> {
        self.banners.get(self.active_index())
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_visible()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.modal.is_dragging()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.carousel.is_paused()
    }

    /// View state of the slide at `index`.
    #[must_use]
    pub fn slide_state(&self, index: usize) -> Option<SlideViewState> {
        self.banners.get(index).map(|b| self.slides.get(b.id()))
    }

    /// View state of the active slide (default when the list is empty).
    #[must_use]
    pub fn active_slide_state(&self) -> SlideViewState {
        self.slide_state(self.active_index()).unwrap_or_default()
    }

    /// Whether carousel swipes may change slides.
    ///
    /// Reads the zoom of the slide at the active index, which only the modal
    /// changes and which closing the modal resets, so outside the modal this
    /// is always true.
    #[must_use]
    pub fn swipe_enabled(&self) -> bool {
        self.active_slide_state().zoom.is_min()
    }

    /// Whether the autoplay timer should be running.
    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        self.settings.autoplay
            && !self.carousel.is_paused()
            && !self.modal.is_visible()
            && self.banners.len() > 1
    }

    #[must_use]
    pub fn transition_running(&self) -> bool {
        self.transition.is_running(self.now)
    }

    #[must_use]
    pub fn slide_animating(&self) -> bool {
        self.slide_animation
            .is_some_and(|animation| animation.is_running(self.now))
    }

    /// Carousel slide to draw at the last frame time, if one is in flight.
    #[must_use]
    pub fn displayed_slide(&self) -> Option<Slide<'_>> {
        let animation = self.slide_animation.filter(|a| a.is_running(self.now))?;
        let outgoing = self.banners.get(animation.from)?;
        Some(Slide {
            outgoing,
            progress: animation.progress(self.now),
            forward: animation.forward,
        })
    }

    /// Transform to draw for the active slide at the last frame time.
    #[must_use]
    pub fn displayed_transform(&self) -> Transform {
        self.transition.sample(self.now)
    }

    /// Handle a message at the current time.
    pub fn update(&mut self, message: Message) -> Effect {
        self.update_at(message, Instant::now())
    }

    /// Handle a message as if it arrived at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Effect {
        self.now = now;
        match message {
            Message::Carousel(msg) => self.handle_carousel(msg, now),
            Message::Modal(msg) => self.handle_modal(msg, now),
            Message::Frame(_) => Effect::None,
            Message::RawEvent(event) => match self.shortcut(&event) {
                Some(msg) => self.handle_modal(msg, now),
                None => Effect::None,
            },
        }
    }

    fn handle_carousel(&mut self, msg: carousel::Message, now: Instant) -> Effect {
        // The carousel is hidden behind the modal and does not advance.
        if self.modal.is_visible() {
            return Effect::None;
        }
        let swipe_enabled = self.swipe_enabled();
        let before = self.active_index();
        match self.carousel.handle(msg, swipe_enabled) {
            carousel::Effect::None => Effect::None,
            carousel::Effect::SlideChanged(index) => {
                self.slide_animation = Some(SlideAnimation::new(
                    before,
                    slides_forward(before, index, self.banners.len()),
                    now,
                    Duration::from_millis(SLIDE_TRANSITION_MS),
                ));
                Effect::SlideChanged(index)
            }
            carousel::Effect::Tapped(index) => {
                self.open_modal(index, now);
                Effect::None
            }
        }
    }

    fn handle_modal(&mut self, msg: modal::Message, now: Instant) -> Effect {
        let Some(id) = self.active_banner().map(Banner::id) else {
            return Effect::None;
        };

        let effect = self.modal.handle(msg, self.slides.get_mut(id));
        match effect {
            modal::Effect::None => Effect::None,
            modal::Effect::TransformChanged => {
                let target = Transform::from(self.slides.get(id));
                self.transition
                    .retarget(target, now, self.settings.transition.as_duration());
                Effect::None
            }
            modal::Effect::Navigate(direction) => {
                let changed = match direction {
                    Direction::Next => self.carousel.inner.next(),
                    Direction::Previous => self.carousel.inner.previous(),
                };
                if !changed {
                    return Effect::None;
                }
                let target = Transform::from(self.active_slide_state());
                self.transition.jump(target, now);
                Effect::SlideChanged(self.active_index())
            }
            modal::Effect::Closed => {
                self.close_modal(now);
                Effect::None
            }
        }
    }

    fn open_modal(&mut self, index: usize, now: Instant) {
        if self.banners.is_empty() {
            return;
        }
        self.carousel.inner.select(index);
        self.slide_animation = None;
        self.modal.open();
        let target = Transform::from(self.active_slide_state());
        self.transition.jump(target, now);
        tracing::debug!(index, "opened banner modal");
    }

    fn close_modal(&mut self, now: Instant) {
        if self.modal.is_visible() {
            let mut scratch = SlideViewState::default();
            self.modal.handle(modal::Message::Close, &mut scratch);
        }
        self.slides.reset_all();
        self.transition.jump(Transform::IDENTITY, now);
    }

    /// Maps keyboard shortcuts to modal messages while the modal is open.
    fn shortcut(&self, event: &event::Event) -> Option<modal::Message> {
        if !self.modal.is_visible() {
            return None;
        }
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return None;
        };
        if modifiers.command() || modifiers.alt() {
            return None;
        }

        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(modal::Message::Close),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                Some(modal::Message::Navigate(Direction::Next))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                Some(modal::Message::Navigate(Direction::Previous))
            }
            keyboard::Key::Character(c) => match c.as_str() {
                "+" | "=" => Some(modal::Message::ZoomIn),
                "-" => Some(modal::Message::ZoomOut),
                _ => None,
            },
            _ => None,
        }
    }

    /// Autoplay timer and transition frames.
    pub fn subscription(&self) -> Subscription<Message> {
        let autoplay = if self.autoplay_active() {
            iced::time::every(self.settings.autoplay_interval.as_duration())
                .map(|_| Message::Carousel(carousel::Message::AutoplayTick))
        } else {
            Subscription::none()
        };

        let frames = if self.transition_running() || self.slide_animating() {
            iced::time::every(Duration::from_millis(TRANSITION_FRAME_MS)).map(Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([autoplay, frames])
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        if self.modal.is_visible() {
            if let Some(banner) = self.active_banner() {
                return modal_pane::view(modal_pane::ViewModel {
                    i18n: env.i18n,
                    banner,
                    index: self.active_index(),
                    total: self.banners.len(),
                    zoom: self.active_slide_state().zoom,
                    transform: self.displayed_transform(),
                    dragging: self.modal.is_dragging(),
                });
            }
        }

        carousel_pane::view(carousel_pane::ViewModel {
            i18n: env.i18n,
            banners: &self.banners,
            active_index: self.active_index(),
            slide: self.displayed_slide(),
            paused: self.carousel.is_paused(),
            autoplay: self.settings.autoplay,
            loading: self.loading,
        })
    }
}

/// Direction a carousel slide travels from `before` to `after`.
///
/// Wrapping one step counts as adjacent; any other jump follows the index order.
fn slides_forward(before: usize, after: usize, len: usize) -> bool {
    if len == 0 {
        return true;
    }
    if after == (before + 1) % len {
        return true;
    }
    if after == (before + len - 1) % len {
        return false;
    }
    after > before
}
