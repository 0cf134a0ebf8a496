// SPDX-License-Identifier: MPL-2.0

//! Shutter button widget implementation

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

/// Shutter fill (pink-500)
const SHUTTER_COLOR: Color = Color {
    r: 0.925,
    g: 0.282,
    b: 0.6,
    a: 1.0,
};
/// Ring around the shutter
const SHUTTER_RING_WIDTH: f32 = 4.0;

impl AppModel {
    /// Build the shutter button
    ///
    /// A pink disc inside a white ring. The shutter works whether or not the
    /// camera is streaming; without a frame the capture is rejected but the
    /// flash still fires.
    pub fn build_capture_button(&self) -> Element<'_, Message> {
        let inner_size = ui::SHUTTER_INNER;
        let outer_size = ui::SHUTTER_OUTER;

        let button_inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(SHUTTER_COLOR)),
            border: Border {
                radius: [inner_size / 2.0; 4].into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let ring = widget::container(button_inner)
            .width(Length::Fixed(outer_size))
            .height(Length::Fixed(outer_size))
            .center_x(outer_size)
            .center_y(outer_size)
            .style(move |_theme| widget::container::Style {
                border: Border {
                    radius: [outer_size / 2.0; 4].into(),
                    width: SHUTTER_RING_WIDTH,
                    color: Color::WHITE,
                },
                ..Default::default()
            });

        widget::button::custom(ring)
            .on_press(Message::Capture)
            .padding(0)
            .class(cosmic::theme::Button::Image)
            .width(Length::Fixed(outer_size))
            .height(Length::Fixed(outer_size))
            .into()
    }
}
