// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Layout: the live preview fills the left side with the shutter row and the
//! filter strip below it; the gallery column sits on the right.

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let controls_row = widget::row()
            .push(
                widget::container(self.build_photo_counter())
                    .width(Length::Fill)
                    .align_x(cosmic::iced::alignment::Horizontal::Left),
            )
            .push(self.build_capture_button())
            .push(
                widget::container(self.build_flash_toggle())
                    .width(Length::Fill)
                    .align_x(cosmic::iced::alignment::Horizontal::Right),
            )
            .align_y(Alignment::Center)
            .padding([0, spacing.space_s]);

        let studio_column = widget::column()
            .push(self.build_camera_preview())
            .push(controls_row)
            .push(self.build_filter_strip())
            .spacing(spacing.space_xs)
            .width(Length::Fill)
            .height(Length::Fill);

        widget::row()
            .push(studio_column)
            .push(
                widget::container(self.build_gallery())
                    .width(Length::Fixed(ui::GALLERY_WIDTH))
                    .height(Length::Fill),
            )
            .spacing(spacing.space_s)
            .padding(spacing.space_xs)
            .into()
    }
}
