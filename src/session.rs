// SPDX-License-Identifier: GPL-3.0-only

//! Per-session capture state

use crate::filters::FilterExpression;

/// Mutable state of one studio session
///
/// The photo counter only ever grows, by exactly one per stored capture.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    active_filter: FilterExpression,
    photo_count: u64,
    pub flash_enabled: bool,
}

impl SessionState {
    pub fn new(flash_enabled: bool) -> Self {
        Self {
            active_filter: FilterExpression::identity(),
            photo_count: 0,
            flash_enabled,
        }
    }

    /// Expression applied to the preview and to the next capture
    pub fn active_filter(&self) -> &FilterExpression {
        &self.active_filter
    }

    pub fn set_active_filter(&mut self, expression: FilterExpression) {
        self.active_filter = expression;
    }

    pub fn photo_count(&self) -> u64 {
        self.photo_count
    }

    /// Count one stored capture, returning the new total
    pub fn record_capture(&mut self) -> u64 {
        self.photo_count += 1;
        self.photo_count
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = SessionState::default();
        assert!(session.active_filter().is_identity());
        assert_eq!(session.photo_count(), 0);
        assert!(session.flash_enabled);
    }

    #[test]
    fn test_counter_increments_by_one() {
        let mut session = SessionState::new(false);
        assert_eq!(session.record_capture(), 1);
        assert_eq!(session.record_capture(), 2);
        assert_eq!(session.photo_count(), 2);
    }
}
