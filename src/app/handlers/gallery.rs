// SPDX-License-Identifier: GPL-3.0-only

//! Gallery handlers
//!
//! Entrance animation frames, hover tracking and photo downloads.

use crate::app::state::{AppModel, Message};
use crate::errors::PhotoError;
use crate::gallery::{self, EntranceTicket};
use crate::storage;
use cosmic::Task;
use std::path::PathBuf;
use tracing::{error, info, warn};

impl AppModel {
    // =========================================================================
    // Gallery Handlers
    // =========================================================================

    /// Advance the entrance and schedule the next frame while it runs
    pub(crate) fn handle_gallery_entrance_frame(
        &mut self,
        ticket: EntranceTicket,
    ) -> Task<cosmic::Action<Message>> {
        match self.gallery_entrance.advance(ticket) {
            Some(next) => Task::perform(gallery::next_entrance_frame(next), |ticket| {
                cosmic::Action::App(Message::GalleryEntranceFrame(ticket))
            }),
            None => Task::none(),
        }
    }

    pub(crate) fn handle_hover_gallery_item(&mut self, timestamp_id: i64) -> Task<cosmic::Action<Message>> {
        self.hovered_item = Some(timestamp_id);
        Task::none()
    }

    /// Leaving a cell only clears the hover if no other cell took it over
    pub(crate) fn handle_leave_gallery_item(&mut self, timestamp_id: i64) -> Task<cosmic::Action<Message>> {
        if self.hovered_item == Some(timestamp_id) {
            self.hovered_item = None;
        }
        Task::none()
    }

    pub(crate) fn handle_download_photo(&mut self, timestamp_id: i64) -> Task<cosmic::Action<Message>> {
        let Some(item) = self.studio.gallery().find(timestamp_id) else {
            warn!(timestamp_id, "Download requested for unknown photo");
            return Task::none();
        };

        Task::perform(
            storage::save_gallery_item(item.clone(), self.config.save_dir()),
            |result| cosmic::Action::App(Message::PhotoDownloaded(result)),
        )
    }

    pub(crate) fn handle_photo_downloaded(
        &mut self,
        result: Result<PathBuf, PhotoError>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(path) => {
                info!(path = %path.display(), "Photo downloaded");
                self.last_download = Some(path);
            }
            Err(err) => {
                error!(error = %err, "Failed to download photo");
            }
        }
        Task::none()
    }
}
