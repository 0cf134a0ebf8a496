// SPDX-License-Identifier: MPL-2.0

//! Main application module for PinkCam
//!
//! This module contains the application model, message handling and UI
//! rendering. Session logic lives in [`crate::studio::Studio`]; the model
//! wraps it with widget state (image handles, hover, drawer page).
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, ContextPage)
//! - `camera_preview`: Live preview with the flash overlay
//! - `controls`: Shutter button and photo counter
//! - `filter_picker`: Horizontal strip of filter tiles
//! - `gallery_view`: Captured photos with download buttons
//! - `settings`: Settings drawer UI
//! - `view`: Main view layout
//! - `update`: Message dispatch to `handlers`

mod camera_preview;
mod controls;
mod filter_picker;
mod gallery_view;
mod handlers;
pub mod settings;
mod state;
mod update;
mod view;

use crate::backends::camera::{CameraBackendType, StreamConstraints, get_backend};
use crate::config::{AppTheme, Config};
use crate::constants::camera::FRAME_CHANNEL_CAPACITY;
use crate::constants::{SWATCH_COLOR, ui};
use crate::errors::CameraError;
use crate::filters::color::render_swatch;
use crate::filters::FilterLibrary;
use crate::fl;
use crate::gallery::EntranceAnimation;
use crate::pipelines::photo::CpuSurface;
use crate::studio::Studio;
use cosmic::app::context_drawer;
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppFlags, AppModel, CameraStatus, ContextPage, Message};
use std::collections::HashMap;
use tracing::{debug, info, warn};

const REPOSITORY: &str = "https://github.com/cosmic-utils/pinkcam";

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = AppFlags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = crate::config::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(core: cosmic::Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_name("camera-photo-symbolic"))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        let (config_handler, config) = Config::load();

        let backend_type = flags.backend_override.unwrap_or(config.backend);
        info!(backend = %backend_type, filter_count = config.filter_count, "Starting PinkCam");

        let library = FilterLibrary::generate(config.procedural_count());
        let filter_swatches = library
            .iter()
            .map(|descriptor| {
                widget::image::Handle::from_rgba(
                    ui::SWATCH_WIDTH,
                    ui::SWATCH_HEIGHT,
                    render_swatch(
                        &descriptor.expression,
                        SWATCH_COLOR,
                        ui::SWATCH_WIDTH,
                        ui::SWATCH_HEIGHT,
                    ),
                )
            })
            .collect();
        let studio = Studio::new(library, config.flash_enabled, config.jpeg_quality);

        let theme_dropdown_options = AppTheme::ALL
            .iter()
            .map(|theme| match theme {
                AppTheme::System => fl!("theme-system"),
                AppTheme::Dark => fl!("theme-dark"),
                AppTheme::Light => fl!("theme-light"),
            })
            .collect();

        let theme_task = cosmic::command::set_theme(config.app_theme.theme());

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            studio,
            surface: CpuSurface::new(),
            backend_type,
            camera_status: CameraStatus::default(),
            preview: None,
            filter_swatches,
            gallery_thumbnails: HashMap::new(),
            gallery_entrance: EntranceAnimation::new(),
            hovered_item: None,
            last_download: None,
            theme_dropdown_options,
        };

        (app, theme_task)
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Blocking dialog shown once when the camera cannot be acquired.
    fn dialog(&self) -> Option<Element<'_, Self::Message>> {
        let err = self.studio.camera_error()?;

        Some(
            widget::dialog()
                .title(fl!("camera-unavailable"))
                .icon(widget::icon::from_name("camera-disabled-symbolic").size(64))
                .body(fl!("camera-unavailable-body", reason = err.to_string()))
                .primary_action(
                    widget::button::suggested(fl!("ok")).on_press(Message::DismissCameraError),
                )
                .into(),
        )
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        let shutter_key_sub = cosmic::iced::event::listen_with(shutter_key);

        Subscription::batch([config_sub, camera_subscription(self.backend_type), shutter_key_sub])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

/// Space presses the shutter unless a widget consumed the key
fn shutter_key(
    event: cosmic::iced::Event,
    status: cosmic::iced::event::Status,
    _window: cosmic::iced::window::Id,
) -> Option<Message> {
    use cosmic::iced::keyboard::{self, Key, key::Named};

    match (event, status) {
        (
            cosmic::iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Space),
                ..
            }),
            cosmic::iced::event::Status::Ignored,
        ) => Some(Message::Capture),
        _ => None,
    }
}

/// Acquire the camera once and forward its frames to the UI
///
/// A refused stream is reported with a single `CameraUnavailable` message and
/// never retried. Frames are dropped while the UI is behind.
fn camera_subscription(backend_type: CameraBackendType) -> Subscription<Message> {
    use cosmic::iced::futures::{SinkExt, StreamExt};

    Subscription::run_with_id(
        ("camera", backend_type),
        cosmic::iced::stream::channel(FRAME_CHANNEL_CAPACITY, move |mut output| async move {
            info!(backend = %backend_type, "Requesting camera stream");

            let requested = tokio::task::spawn_blocking(move || {
                get_backend(backend_type).request_stream(&StreamConstraints::default())
            })
            .await
            .unwrap_or_else(|e| {
                Err(CameraError::InitializationFailed(format!(
                    "Camera task failed: {}",
                    e
                )))
            });

            let mut stream = match requested {
                Ok(stream) => stream,
                Err(err) => {
                    let _ = output.send(Message::CameraUnavailable(err)).await;
                    std::future::pending::<()>().await;
                    return;
                }
            };

            let _ = output
                .send(Message::CameraStarted(stream.device.name.clone()))
                .await;

            let mut dropped = 0u64;
            while let Some(frame) = stream.frames.next().await {
                match output.try_send(Message::CameraFrame(frame)) {
                    Ok(()) => {}
                    Err(e) if e.is_disconnected() => {
                        info!("Output channel disconnected - camera subscription ending");
                        return;
                    }
                    Err(_) => {
                        dropped += 1;
                        debug!(dropped, "Frame dropped (UI channel full)");
                    }
                }
            }

            warn!("Camera frame stream ended");
            std::future::pending::<()>().await;
        }),
    )
}
