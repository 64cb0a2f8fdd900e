// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::banner::Banner;
use crate::error::Error;
use crate::ui::viewer::component;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// Result of the asynchronous banner load started at boot.
    BannersLoaded(Result<Vec<Banner>, Error>),
}

/// Runtime flags passed from the launcher into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Banner directory or `.toml` manifest.
    pub source: Option<String>,
}
