// SPDX-License-Identifier: MPL-2.0

//! Photo counter and flash toggle

use crate::app::state::{AppModel, Message};
use crate::fl;
use cosmic::Element;
use cosmic::widget;

impl AppModel {
    /// "N photos" label, always equal to the gallery size
    pub fn build_photo_counter(&self) -> Element<'_, Message> {
        let count = self.studio.session().photo_count();
        widget::text(fl!("photo-count", count = count))
            .size(16)
            .font(cosmic::font::bold())
            .into()
    }

    /// Icon button switching the screen flash on and off
    pub fn build_flash_toggle(&self) -> Element<'_, Message> {
        let icon_name = if self.studio.session().flash_enabled {
            "display-brightness-symbolic"
        } else {
            "display-brightness-off-symbolic"
        };

        widget::button::icon(widget::icon::from_name(icon_name))
            .on_press(Message::ToggleFlash)
            .class(cosmic::theme::Button::Icon)
            .into()
    }
}
