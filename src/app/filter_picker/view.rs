// SPDX-License-Identifier: GPL-3.0-only

//! Filter strip view

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, Color, ContentFit, Length};
use cosmic::widget;

/// Spacing between tiles
const TILE_SPACING: u16 = 8;
/// Outline width of the selected tile
const TILE_BORDER_WIDTH: f32 = 3.0;
/// Outline colour of the selected tile (pink-500)
const SELECTED_COLOR: Color = Color {
    r: 0.925,
    g: 0.282,
    b: 0.6,
    a: 1.0,
};

impl AppModel {
    /// Build the scrollable filter strip
    ///
    /// Exactly one tile carries the selection outline: the one whose
    /// expression drives the preview and the next capture.
    pub fn build_filter_strip(&self) -> Element<'_, Message> {
        let active = self.studio.active_index();

        let tiles = self
            .studio
            .library()
            .iter()
            .zip(self.filter_swatches.iter())
            .enumerate()
            .fold(
                widget::row().spacing(TILE_SPACING),
                |row, (index, (descriptor, swatch))| {
                    row.push(Self::build_filter_tile(
                        index,
                        &descriptor.name,
                        swatch,
                        index == active,
                    ))
                },
            );

        widget::scrollable::horizontal(tiles)
            .width(Length::Fill)
            .into()
    }

    fn build_filter_tile<'a>(
        index: usize,
        name: &'a str,
        swatch: &widget::image::Handle,
        is_selected: bool,
    ) -> Element<'a, Message> {
        let inner_width = ui::TILE_WIDTH - TILE_BORDER_WIDTH * 2.0;
        let inner_height = ui::TILE_HEIGHT - TILE_BORDER_WIDTH * 2.0;

        let swatch_image = widget::image::Image::new(swatch.clone())
            .content_fit(ContentFit::Fill)
            .width(Length::Fixed(inner_width))
            .height(Length::Fixed(inner_height));

        let bordered = widget::container(swatch_image)
            .width(Length::Fixed(ui::TILE_WIDTH))
            .height(Length::Fixed(ui::TILE_HEIGHT))
            .center_x(ui::TILE_WIDTH)
            .center_y(ui::TILE_HEIGHT)
            .style(move |_theme| widget::container::Style {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border {
                    radius: [ui::TILE_RADIUS; 4].into(),
                    width: if is_selected { TILE_BORDER_WIDTH } else { 0.0 },
                    color: if is_selected {
                        SELECTED_COLOR
                    } else {
                        Color::TRANSPARENT
                    },
                },
                ..Default::default()
            });

        let tile_button = widget::button::custom(bordered)
            .on_press(Message::SelectFilter(index))
            .padding(0)
            .class(cosmic::theme::Button::Image);

        let name_label = widget::text(name)
            .size(11)
            .width(Length::Fixed(ui::TILE_WIDTH))
            .align_x(cosmic::iced::alignment::Horizontal::Center);

        widget::column()
            .push(tile_button)
            .push(widget::vertical_space().height(Length::Fixed(4.0)))
            .push(name_label)
            .align_x(Alignment::Center)
            .into()
    }
}
