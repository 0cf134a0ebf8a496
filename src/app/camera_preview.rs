// SPDX-License-Identifier: GPL-3.0-only

//! Camera preview with the flash overlay

use crate::app::state::{AppModel, CameraStatus, Message};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Background, Border, Color, ContentFit, Length};
use cosmic::widget;

/// Corner radius of the preview frame
const PREVIEW_RADIUS: f32 = 24.0;

impl AppModel {
    /// Build the live preview
    ///
    /// Shows the filtered frame, or a status line while the camera starts or
    /// after it was refused. The white flash overlay is stacked on top and
    /// its opacity follows the studio's flash state.
    pub fn build_camera_preview(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match (&self.preview, &self.camera_status) {
            (Some(handle), _) => widget::image::Image::new(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            (None, CameraStatus::Unavailable) => {
                Self::preview_message(fl!("camera-unavailable"))
            }
            (None, _) => Self::preview_message(fl!("initializing-camera")),
        };

        let opacity = self.studio.flash().opacity();
        let flash_overlay = widget::container(widget::Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, opacity))),
                ..Default::default()
            });

        widget::container(
            cosmic::iced::widget::stack![content, flash_overlay]
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| widget::container::Style {
            background: Some(Background::Color(Color::BLACK)),
            border: Border {
                radius: [PREVIEW_RADIUS; 4].into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
    }

    fn preview_message(text: String) -> Element<'static, Message> {
        widget::container(widget::text(text).size(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(cosmic::iced::alignment::Horizontal::Center)
            .align_y(cosmic::iced::alignment::Vertical::Center)
            .style(|_theme| widget::container::Style {
                text_color: Some(Color::WHITE),
                ..Default::default()
            })
            .into()
    }
}
