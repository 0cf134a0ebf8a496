// SPDX-License-Identifier: MPL-2.0

//! Gallery column
//!
//! Captured photos, newest first, in a fixed-width grid. A new photo fades
//! and zooms in; hovering a photo reveals its download button.

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::fl;
use crate::gallery::GalleryItem;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, Color, ContentFit, Length};
use cosmic::widget::{self, icon};

/// Spacing between gallery cells
const CELL_SPACING: u16 = 8;
/// Corner radius of gallery cells
const CELL_RADIUS: f32 = 12.0;

impl AppModel {
    /// Build the gallery column
    pub fn build_gallery(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let header = widget::text(fl!("gallery")).size(16).font(cosmic::font::bold());

        let body: Element<'_, Message> = if self.studio.gallery().is_empty() {
            widget::container(widget::text(fl!("gallery-empty")).size(12))
                .width(Length::Fill)
                .padding([spacing.space_m, 0])
                .align_x(cosmic::iced::alignment::Horizontal::Center)
                .into()
        } else {
            self.build_gallery_grid()
        };

        let mut column = widget::column()
            .push(header)
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(widget::scrollable(body).height(Length::Fill));

        if let Some(path) = &self.last_download {
            column = column.push(
                widget::text(fl!("saved-to", path = path.display().to_string()))
                    .size(11)
                    .class(cosmic::theme::Text::Accent),
            );
        }

        column.spacing(0).width(Length::Fill).into()
    }

    fn build_gallery_grid(&self) -> Element<'_, Message> {
        let columns = ui::GALLERY_COLUMNS.max(1);
        let cell_size = (ui::GALLERY_WIDTH - (columns as f32 - 1.0) * CELL_SPACING as f32)
            / columns as f32;

        let items: Vec<&GalleryItem> = self.studio.gallery().iter().collect();
        let mut grid = widget::column().spacing(CELL_SPACING);
        for chunk in items.chunks(columns) {
            let row = chunk.iter().fold(widget::row().spacing(CELL_SPACING), |row, item| {
                row.push(self.build_gallery_cell(item, cell_size))
            });
            grid = grid.push(row);
        }
        grid.into()
    }

    fn build_gallery_cell(&self, item: &GalleryItem, size: f32) -> Element<'_, Message> {
        let timestamp_id = item.timestamp_id;
        let height = size * 0.75;

        // New photos grow into place while a black veil clears
        let progress = self.gallery_entrance.progress(timestamp_id);
        let zoom = ui::ENTRANCE_START_SCALE + (1.0 - ui::ENTRANCE_START_SCALE) * progress;

        let picture: Element<'_, Message> = match self.gallery_thumbnails.get(&timestamp_id) {
            Some(handle) => widget::image::Image::new(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(size * zoom))
                .height(Length::Fixed(height * zoom))
                .into(),
            None => icon::from_name("image-x-generic-symbolic").size(32).into(),
        };

        let mut layers = cosmic::iced::widget::stack![
            widget::container(picture).center_x(size).center_y(height)
        ];
        if progress < 1.0 {
            let veil = 1.0 - progress;
            let cover = widget::Space::new(Length::Fixed(size), Length::Fixed(height));
            layers = layers.push(widget::container(cover).style(move |_theme| {
                widget::container::Style {
                    background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, veil))),
                    ..Default::default()
                }
            }));
        }
        if self.hovered_item == Some(timestamp_id) {
            let download_button =
                widget::button::icon(icon::from_name("document-save-symbolic"))
                    .on_press(Message::DownloadPhoto(timestamp_id))
                    .class(cosmic::theme::Button::Suggested);

            layers = layers.push(
                widget::container(download_button)
                    .center_x(size)
                    .center_y(height)
                    .style(|_theme| widget::container::Style {
                        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.35))),
                        ..Default::default()
                    }),
            );
        }

        let cell = widget::container(layers)
            .width(Length::Fixed(size))
            .height(Length::Fixed(height))
            .align_y(Alignment::Center)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                border: Border {
                    radius: [CELL_RADIUS; 4].into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        cosmic::iced::widget::mouse_area(cell)
            .on_enter(Message::HoverGalleryItem(timestamp_id))
            .on_exit(Message::LeaveGalleryItem(timestamp_id))
            .into()
    }
}
