// SPDX-License-Identifier: MPL-2.0

//! Settings drawer view

use crate::app::state::{AppModel, CameraStatus, ContextPage, Message};
use crate::config::AppTheme;
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let flash_toggle =
            widget::toggler(self.config.flash_enabled).on_toggle(|_| Message::ToggleFlash);
        let mirror_toggle =
            widget::toggler(self.config.mirror_preview).on_toggle(|_| Message::ToggleMirrorPreview);

        let current_theme_index = AppTheme::ALL
            .iter()
            .position(|theme| *theme == self.config.app_theme);
        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            current_theme_index,
            Message::SetAppTheme,
        );

        let camera_info = match &self.camera_status {
            CameraStatus::Starting => fl!("initializing-camera"),
            CameraStatus::Streaming(device) => device.clone(),
            CameraStatus::Unavailable => fl!("camera-unavailable"),
        };

        let about_button = widget::button::standard(fl!("about"))
            .on_press(Message::ToggleContextPage(ContextPage::About));

        let settings_column: Element<'_, Message> = widget::column()
            .push(Self::toggle_row(fl!("flash"), flash_toggle.into()))
            .push(widget::vertical_space().height(spacing.space_s))
            .push(Self::toggle_row(fl!("mirror-preview"), mirror_toggle.into()))
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text(fl!("theme")).size(16).font(cosmic::font::bold()))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text(fl!("camera")).size(16).font(cosmic::font::bold()))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(format!("{} ({})", camera_info, self.backend_type)).size(12))
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text(fl!("save-location")).size(16).font(cosmic::font::bold()))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(self.config.save_dir().display().to_string()).size(12))
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("filter-count", count = self.studio.library().len()))
                    .size(12),
            )
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::row()
                    .push(
                        widget::text(format!("{} {}", fl!("version"), env!("GIT_VERSION")))
                            .size(12)
                            .class(cosmic::theme::Text::Accent),
                    )
                    .push(widget::horizontal_space().width(Length::Fill))
                    .push(about_button)
                    .align_y(Alignment::Center),
            )
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }

    fn toggle_row<'a>(label: String, toggle: Element<'a, Message>) -> Element<'a, Message> {
        widget::row()
            .push(widget::text(label).size(16).font(cosmic::font::bold()))
            .push(widget::horizontal_space().width(Length::Fill))
            .push(toggle)
            .align_y(Alignment::Center)
            .into()
    }
}
