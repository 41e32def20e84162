//! App-wide loading/error/success notices.
//!
//! Success and error notices clear themselves after a configured delay.
//! Expiry is measured against an injected [`Clock`], so nothing here owns a
//! timer; the UI polls [`NoticeCenter::current`] or calls
//! [`NoticeCenter::tick`] on its own schedule.

mod clock;

pub use clock::*;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ProgramConfig;

/// A user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum Notice {
    Loading,
    Error(String),
    Success(String),
}

#[derive(Debug, Clone)]
struct ActiveNotice {
    notice: Notice,
    /// None for notices that stay until replaced (loading)
    expires_at: Option<DateTime<Utc>>,
}

/// Holds the single notice currently on screen.
#[derive(Debug)]
pub struct NoticeCenter<C: Clock> {
    clock: C,
    auto_clear: Duration,
    active: Option<ActiveNotice>,
}

impl<C: Clock> NoticeCenter<C> {
    /// Create a notice center with an explicit auto-clear delay.
    pub fn new(clock: C, auto_clear: Duration) -> Self {
        Self {
            clock,
            auto_clear,
            active: None,
        }
    }

    /// Create a notice center using the configured delay.
    pub fn from_config(clock: C, config: &ProgramConfig) -> Self {
        let millis = i64::try_from(config.notice_auto_clear_ms).unwrap_or(i64::MAX);
        Self::new(clock, Duration::milliseconds(millis))
    }

    /// Show the loading indicator until replaced or stopped.
    pub fn start_loading(&mut self) {
        self.active = Some(ActiveNotice {
            notice: Notice::Loading,
            expires_at: None,
        });
    }

    /// Clear the loading indicator, leaving any other notice in place.
    pub fn stop_loading(&mut self) {
        if matches!(self.active, Some(ActiveNotice { notice: Notice::Loading, .. })) {
            self.active = None;
        }
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show_timed(Notice::Error(message.into()));
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show_timed(Notice::Success(message.into()));
    }

    fn show_timed(&mut self, notice: Notice) {
        let expires_at = self.clock.now().checked_add_signed(self.auto_clear);
        tracing::debug!(?notice, ?expires_at, "showing notice");
        self.active = Some(ActiveNotice { notice, expires_at });
    }

    /// Notice visible right now, if any.
    pub fn current(&self) -> Option<&Notice> {
        let now = self.clock.now();
        self.active
            .as_ref()
            .filter(|active| active.expires_at.map_or(true, |at| now < at))
            .map(|active| &active.notice)
    }

    /// Drop an expired notice. Returns true if one was cleared.
    pub fn tick(&mut self) -> bool {
        if self.active.is_some() && self.current().is_none() {
            self.active = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn setup() -> (Arc<ManualClock>, NoticeCenter<Arc<ManualClock>>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        ));
        let center = NoticeCenter::new(clock.clone(), Duration::milliseconds(3000));
        (clock, center)
    }

    #[test]
    fn test_success_auto_clears() {
        let (clock, mut center) = setup();
        center.show_success("Appointment booked");

        clock.advance(Duration::milliseconds(2999));
        assert_eq!(
            center.current(),
            Some(&Notice::Success("Appointment booked".into()))
        );

        clock.advance(Duration::milliseconds(1));
        assert_eq!(center.current(), None);
        assert!(center.tick());
        assert!(!center.tick());
    }

    #[test]
    fn test_loading_never_auto_clears() {
        let (clock, mut center) = setup();
        center.start_loading();

        clock.advance(Duration::hours(1));
        assert_eq!(center.current(), Some(&Notice::Loading));
        assert!(!center.tick());

        center.stop_loading();
        assert_eq!(center.current(), None);
    }

    #[test]
    fn test_error_replaces_loading() {
        let (_clock, mut center) = setup();
        center.start_loading();
        center.show_error("Network unavailable");

        center.stop_loading();
        assert_eq!(
            center.current(),
            Some(&Notice::Error("Network unavailable".into()))
        );
    }

    #[test]
    fn test_from_config_uses_configured_delay() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        let config = ProgramConfig {
            notice_auto_clear_ms: 500,
            ..ProgramConfig::default()
        };
        let mut center = NoticeCenter::from_config(clock.clone(), &config);

        center.show_error("Signature upload failed");
        clock.advance(Duration::milliseconds(500));
        assert_eq!(center.current(), None);
    }

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_string(&Notice::Success("Saved".into())).unwrap();
        assert_eq!(json, r#"{"kind":"success","message":"Saved"}"#);
    }
}
