// SPDX-License-Identifier: GPL-3.0-only

//! In-memory gallery of captured photos
//!
//! Items are kept newest first and never removed. Each item carries the
//! encoded JPEG plus a small RGBA thumbnail for the gallery column.
//!
//! A freshly added item fades and zooms in over [`ENTRANCE_STEPS`] frames.
//! [`EntranceAnimation`] tracks that progress; the app advances it with
//! [`next_entrance_frame`] timers, one at a time.

use crate::constants::capture::DOWNLOAD_PREFIX;
use crate::constants::{ENTRANCE_FRAME, ENTRANCE_STEPS};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Small RGBA preview of a captured photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<[u8]>,
}

/// One captured photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Encoded JPEG bytes, as downloaded
    pub image_data: Arc<[u8]>,
    /// Capture time in milliseconds since the epoch, unique within the session
    pub timestamp_id: i64,
    pub width: u32,
    pub height: u32,
    pub thumbnail: Thumbnail,
}

impl GalleryItem {
    /// File name used when the item is downloaded
    pub fn download_name(&self) -> String {
        format!("{}_{}.jpg", DOWNLOAD_PREFIX, self.timestamp_id)
    }
}

/// Ordered collection of captured photos, newest first
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: VecDeque<GalleryItem>,
    last_timestamp_id: Option<i64>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier for a capture taken at `now_ms`
    ///
    /// Strictly greater than every identifier handed out before, so two
    /// captures in the same millisecond still get distinct ids.
    pub fn next_timestamp_id(&mut self, now_ms: i64) -> i64 {
        let id = match self.last_timestamp_id {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last_timestamp_id = Some(id);
        id
    }

    /// Insert at the front
    pub fn add_item(&mut self, item: GalleryItem) {
        self.items.push_front(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items, newest first
    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }

    pub fn newest(&self) -> Option<&GalleryItem> {
        self.items.front()
    }

    pub fn find(&self, timestamp_id: i64) -> Option<&GalleryItem> {
        self.items.iter().find(|item| item.timestamp_id == timestamp_id)
    }
}

/// Identifies one entrance animation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntranceTicket(u64);

/// Entrance progress of the newest gallery item
///
/// Starting a new entrance replaces the running one; timers still holding
/// the old ticket stop at their next frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntranceAnimation {
    timestamp_id: Option<i64>,
    step: u32,
    generation: u64,
}

impl EntranceAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the entrance of `timestamp_id` from fully transparent
    pub fn start(&mut self, timestamp_id: i64) -> EntranceTicket {
        self.generation += 1;
        self.timestamp_id = Some(timestamp_id);
        self.step = 0;
        debug!(timestamp_id, generation = self.generation, "Gallery entrance started");
        EntranceTicket(self.generation)
    }

    /// Move one frame forward
    ///
    /// Returns the ticket to schedule the next frame with, or `None` once
    /// the item has settled or `ticket` belongs to a replaced run.
    pub fn advance(&mut self, ticket: EntranceTicket) -> Option<EntranceTicket> {
        if ticket.0 != self.generation || self.timestamp_id.is_none() {
            return None;
        }
        self.step += 1;
        if self.step >= ENTRANCE_STEPS {
            self.timestamp_id = None;
            self.step = 0;
            return None;
        }
        Some(ticket)
    }

    /// Entrance progress of `timestamp_id`, 0.0 (just added) to 1.0 (settled)
    pub fn progress(&self, timestamp_id: i64) -> f32 {
        match self.timestamp_id {
            Some(id) if id == timestamp_id => self.step as f32 / ENTRANCE_STEPS as f32,
            _ => 1.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timestamp_id.is_some()
    }
}

/// Wait one animation frame, then hand the ticket back for
/// [`EntranceAnimation::advance`]
pub async fn next_entrance_frame(ticket: EntranceTicket) -> EntranceTicket {
    tokio::time::sleep(ENTRANCE_FRAME).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(timestamp_id: i64) -> GalleryItem {
        GalleryItem {
            image_data: Arc::from(vec![0xFF, 0xD8]),
            timestamp_id,
            width: 2,
            height: 1,
            thumbnail: Thumbnail {
                width: 2,
                height: 1,
                rgba: Arc::from(vec![0u8; 8]),
            },
        }
    }

    #[test]
    fn test_newest_first() {
        let mut gallery = Gallery::new();
        gallery.add_item(item(10));
        gallery.add_item(item(20));
        gallery.add_item(item(30));
        let ids: Vec<_> = gallery.iter().map(|i| i.timestamp_id).collect();
        assert_eq!(ids, [30, 20, 10]);
        assert_eq!(gallery.newest().unwrap().timestamp_id, 30);
    }

    #[test]
    fn test_timestamp_ids_strictly_increase() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.next_timestamp_id(1_000), 1_000);
        assert_eq!(gallery.next_timestamp_id(1_000), 1_001);
        assert_eq!(gallery.next_timestamp_id(999), 1_002);
        assert_eq!(gallery.next_timestamp_id(5_000), 5_000);
    }

    #[test]
    fn test_download_name() {
        assert_eq!(item(1712345678901).download_name(), "pinkcam_1712345678901.jpg");
    }

    #[test]
    fn test_find() {
        let mut gallery = Gallery::new();
        gallery.add_item(item(1));
        gallery.add_item(item(2));
        assert!(gallery.find(1).is_some());
        assert!(gallery.find(3).is_none());
    }

    #[test]
    fn test_entrance_runs_to_settled() {
        let mut entrance = EntranceAnimation::new();
        assert_eq!(entrance.progress(7), 1.0);

        let mut ticket = entrance.start(7);
        assert_eq!(entrance.progress(7), 0.0);
        assert_eq!(entrance.progress(6), 1.0, "older items are not animated");

        let mut frames = 0;
        let mut last = 0.0;
        while let Some(next) = entrance.advance(ticket) {
            let progress = entrance.progress(7);
            assert!(progress > last && progress < 1.0);
            last = progress;
            ticket = next;
            frames += 1;
        }
        assert_eq!(frames, ENTRANCE_STEPS - 1);
        assert!(!entrance.is_running());
        assert_eq!(entrance.progress(7), 1.0);
    }

    #[test]
    fn test_new_entrance_replaces_running_one() {
        let mut entrance = EntranceAnimation::new();
        let first = entrance.start(1);
        assert!(entrance.advance(first).is_some());

        let second = entrance.start(2);
        assert_eq!(entrance.progress(1), 1.0);
        assert_eq!(entrance.progress(2), 0.0);
        assert!(entrance.advance(first).is_none(), "stale timer stops");
        assert_eq!(entrance.progress(2), 0.0);
        assert!(entrance.advance(second).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entrance_frame_waits_one_frame() {
        let mut entrance = EntranceAnimation::new();
        let ticket = entrance.start(3);
        let start = tokio::time::Instant::now();
        let returned = next_entrance_frame(ticket).await;
        assert!(start.elapsed() >= ENTRANCE_FRAME);
        assert_eq!(entrance.advance(returned), Some(ticket));
    }
}
