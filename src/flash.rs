// SPDX-License-Identifier: GPL-3.0-only

//! Screen flash overlay
//!
//! A capture with flash enabled turns a white overlay fully opaque and
//! schedules it to clear after [`FLASH_DURATION`]. Every pulse gets a ticket;
//! only the ticket of the latest pulse may clear the overlay, so a timer
//! left over from an earlier capture cannot cut a newer flash short.

use crate::constants::FLASH_DURATION;
use tracing::debug;

/// Identifies one flash pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlashTicket(u64);

/// Opacity state of the flash overlay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashOverlay {
    opacity: f32,
    generation: u64,
}

impl FlashOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current overlay opacity, 0.0 (hidden) to 1.0 (white)
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Start a pulse at full opacity
    pub fn fire(&mut self) -> FlashTicket {
        self.generation += 1;
        self.opacity = 1.0;
        debug!(generation = self.generation, "Flash fired");
        FlashTicket(self.generation)
    }

    /// Clear the overlay if `ticket` belongs to the latest pulse
    ///
    /// Returns whether the overlay was cleared.
    pub fn settle(&mut self, ticket: FlashTicket) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "Ignoring stale flash ticket"
            );
            return false;
        }
        self.opacity = 0.0;
        true
    }

    /// Clear the overlay now and invalidate any pending ticket
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.opacity = 0.0;
    }
}

/// Wait out a pulse, then hand the ticket back for [`FlashOverlay::settle`]
pub async fn settle_after(ticket: FlashTicket) -> FlashTicket {
    tokio::time::sleep(FLASH_DURATION).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_then_settle() {
        let mut flash = FlashOverlay::new();
        assert_eq!(flash.opacity(), 0.0);
        let ticket = flash.fire();
        assert_eq!(flash.opacity(), 1.0);
        assert!(flash.settle(ticket));
        assert_eq!(flash.opacity(), 0.0);
    }

    #[test]
    fn test_stale_ticket_keeps_newer_flash() {
        let mut flash = FlashOverlay::new();
        let first = flash.fire();
        let second = flash.fire();
        assert!(!flash.settle(first));
        assert!(flash.is_visible());
        assert!(flash.settle(second));
        assert!(!flash.is_visible());
    }

    #[test]
    fn test_cancel_invalidates_ticket() {
        let mut flash = FlashOverlay::new();
        let ticket = flash.fire();
        flash.cancel();
        assert!(!flash.is_visible());
        assert!(!flash.settle(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_after_waits_for_duration() {
        let mut flash = FlashOverlay::new();
        let ticket = flash.fire();
        let start = tokio::time::Instant::now();
        let returned = settle_after(ticket).await;
        assert!(start.elapsed() >= FLASH_DURATION);
        assert!(flash.settle(returned));
    }
}
