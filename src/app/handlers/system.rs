// SPDX-License-Identifier: GPL-3.0-only

//! Settings handlers
//!
//! Flash, theme and external config updates.

use crate::app::state::{AppModel, Message};
use crate::config::{AppTheme, Config};
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info};

impl AppModel {
    // =========================================================================
    // Settings Handlers
    // =========================================================================

    pub(crate) fn handle_toggle_flash(&mut self) -> Task<cosmic::Action<Message>> {
        self.config.flash_enabled = !self.config.flash_enabled;
        self.studio.set_flash_enabled(self.config.flash_enabled);
        info!(flash_enabled = self.config.flash_enabled, "Flash toggled");

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save flash setting");
        }
        Task::none()
    }

    pub(crate) fn handle_update_config(&mut self, config: Config) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        if config.flash_enabled != self.config.flash_enabled {
            self.studio.set_flash_enabled(config.flash_enabled);
        }
        let mirror_changed = config.mirror_preview != self.config.mirror_preview;
        let theme_changed = config.app_theme != self.config.app_theme;
        self.config = config;

        if mirror_changed {
            self.refresh_preview();
        }
        if theme_changed {
            return cosmic::command::set_theme(self.config.app_theme.theme());
        }
        Task::none()
    }

    pub(crate) fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(&app_theme) = AppTheme::ALL.get(index) else {
            return Task::none();
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save app theme setting");
        }

        cosmic::command::set_theme(app_theme.theme())
    }
}
