// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the banner viewer to localization and settings,
//! starts the asynchronous banner load and logs the viewer's effects.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::banner::source::load_banners_async;
use crate::banner::BannerSource;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::viewer::{self, component};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("banners", &self.viewer.banners().len())
            .field("modal_open", &self.viewer.is_modal_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Viewer settings derived from the loaded config.
fn viewer_settings(config: &Config) -> viewer::Settings {
    viewer::Settings {
        autoplay: config.carousel.autoplay.unwrap_or(true),
        autoplay_interval: config.carousel.interval(),
        transition: config.viewer.transition(),
    }
}

impl App {
    /// Loads config and localization, then starts loading the banner source
    /// given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let mut app = App {
            i18n,
            viewer: component::State::new(viewer_settings(&config)),
        };

        let task = match flags.source {
            Some(path) => app.start_loading(path),
            None => {
                tracing::info!("no banner source given; showing empty carousel");
                Task::none()
            }
        };

        (app, task)
    }

    fn start_loading(&mut self, path: String) -> Task<Message> {
        match BannerSource::from_path(&path) {
            Ok(source) => {
                self.viewer.set_loading(true);
                Task::perform(load_banners_async(source), Message::BannersLoaded)
            }
            Err(err) => {
                self.log_load_error(&err);
                Task::none()
            }
        }
    }

    fn log_load_error(&self, err: &crate::error::Error) {
        match err {
            crate::error::Error::Source(source_err) => tracing::warn!(
                error = %source_err,
                "{}",
                self.i18n.tr(source_err.i18n_key())
            ),
            other => tracing::warn!(error = %other, "failed to load banners"),
        }
    }

    fn title(&self) -> String {
        let count = self.viewer.banners().len();
        if count == 0 {
            self.i18n.tr("window-title")
        } else {
            self.i18n
                .tr_with_args("window-title-with-count", &[("count", count.to_string())])
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.viewer.is_modal_open()),
            subscription::create_viewer_subscription(&self.viewer),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(msg) => {
                if let component::Effect::SlideChanged(index) = self.viewer.update(msg) {
                    tracing::debug!(index, "active banner changed");
                }
            }
            Message::BannersLoaded(Ok(banners)) => {
                tracing::info!(count = banners.len(), "banners ready");
                self.viewer.set_banners(banners);
            }
            Message::BannersLoaded(Err(err)) => {
                self.log_load_error(&err);
                self.viewer.set_banners(Vec::new());
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::Banner;
    use crate::ui::viewer::subcomponents::carousel;

    fn app() -> App {
        let config = Config::default();
        App {
            i18n: I18n::new(Some("en-US".to_string()), &config),
            viewer: component::State::new(viewer_settings(&config)),
        }
    }

    #[test]
    fn default_config_enables_autoplay() {
        let settings = viewer_settings(&Config::default());
        assert!(settings.autoplay);
        assert_eq!(
            settings.autoplay_interval.millis(),
            config::DEFAULT_AUTOPLAY_INTERVAL_MS
        );
    }

    #[test]
    fn title_counts_loaded_banners() {
        let mut app = app();
        assert_eq!(app.title(), "Banner Lens");

        let banners = vec![Banner::new("a.png", None), Banner::new("b.png", None)];
        let _ = app.update(Message::BannersLoaded(Ok(banners)));
        assert_eq!(app.title(), "Banner Lens (2 banners)");
    }

    #[test]
    fn failed_load_leaves_empty_viewer() {
        let mut app = app();
        app.viewer.set_loading(true);
        let err = crate::error::SourceError::NotFound("missing".into());
        let _ = app.update(Message::BannersLoaded(Err(err.into())));
        assert!(app.viewer.banners().is_empty());
        assert!(!app.viewer.is_loading());
    }

    #[test]
    fn viewer_messages_are_forwarded() {
        let mut app = app();
        let banners = (0..3).map(|i| Banner::new(format!("{i}.png"), None)).collect();
        let _ = app.update(Message::BannersLoaded(Ok(banners)));
        let _ = app.update(Message::Viewer(component::Message::Carousel(
            carousel::Message::AutoplayTick,
        )));
        assert_eq!(app.viewer.active_index(), 1);
    }

    #[test]
    fn unsupported_source_does_not_start_loading() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("banner.txt");
        std::fs::write(&file, "x").unwrap();

        let mut app = app();
        let _ = app.start_loading(file.to_string_lossy().into_owned());
        assert!(!app.viewer.is_loading());
    }
}
