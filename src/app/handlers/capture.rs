// SPDX-License-Identifier: GPL-3.0-only

//! Capture handlers
//!
//! Handles the shutter, the flash overlay timer and the start of a new
//! photo's gallery entrance.

use crate::app::state::{AppModel, Message};
use crate::flash::{self, FlashTicket};
use crate::gallery;
use cosmic::Task;
use cosmic::widget::image;
use tracing::debug;

impl AppModel {
    // =========================================================================
    // Capture Handlers
    // =========================================================================

    pub(crate) fn handle_capture(&mut self) -> Task<cosmic::Action<Message>> {
        let outcome = self.studio.capture(&mut self.surface);
        let mut tasks = Vec::new();

        if let Ok(timestamp_id) = outcome.photo
            && let Some(item) = self.studio.gallery().find(timestamp_id)
        {
            let thumbnail = &item.thumbnail;
            self.gallery_thumbnails.insert(
                timestamp_id,
                image::Handle::from_rgba(thumbnail.width, thumbnail.height, thumbnail.rgba.to_vec()),
            );

            let ticket = self.gallery_entrance.start(timestamp_id);
            tasks.push(Task::perform(gallery::next_entrance_frame(ticket), |ticket| {
                cosmic::Action::App(Message::GalleryEntranceFrame(ticket))
            }));
        }

        if let Some(ticket) = outcome.flash {
            tasks.push(Task::perform(flash::settle_after(ticket), |ticket| {
                cosmic::Action::App(Message::FlashSettled(ticket))
            }));
        }

        Task::batch(tasks)
    }

    pub(crate) fn handle_flash_settled(&mut self, ticket: FlashTicket) -> Task<cosmic::Action<Message>> {
        if !self.studio.settle_flash(ticket) {
            debug!(?ticket, "Stale flash timer ignored");
        }
        Task::none()
    }
}
