// SPDX-License-Identifier: GPL-3.0-only

//! Filter selection handlers

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    pub(crate) fn handle_select_filter(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        if self.studio.select_filter(index) {
            self.refresh_preview();
        }
        Task::none()
    }
}
