/// Default auto-dismiss duration for transient notices, in milliseconds.
pub const DEFAULT_NOTICE_MS: u32 = 2000;

/// A user-facing message.
///
/// `duration_ms == None` marks a sticky notice that stays up until it is
/// explicitly dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub duration_ms: Option<u32>,
}

/// Transient-message surface consumed by the viewer components.
///
/// Implementations must be fire-and-forget: showing a notice never blocks
/// and never fails.
pub trait Notifier {
    /// Show an auto-dismissing notice with the default duration.
    fn show(&mut self, message: &str) {
        self.show_for(message, DEFAULT_NOTICE_MS);
    }

    /// Show an auto-dismissing notice.
    fn show_for(&mut self, message: &str, duration_ms: u32);

    /// Show a notice that stays up until `dismiss_sticky` is called.
    fn show_sticky(&mut self, message: &str);

    /// Dismiss the current sticky notice, if any.
    fn dismiss_sticky(&mut self);
}

/// In-memory notifier used in tests and headless runs.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
    sticky: Option<String>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn sticky(&self) -> Option<&str> {
        self.sticky.as_deref()
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for NoticeLog {
    fn show_for(&mut self, message: &str, duration_ms: u32) {
        self.notices.push(Notice {
            message: message.to_string(),
            duration_ms: Some(duration_ms),
        });
    }

    fn show_sticky(&mut self, message: &str) {
        self.sticky = Some(message.to_string());
        self.notices.push(Notice {
            message: message.to_string(),
            duration_ms: None,
        });
    }

    fn dismiss_sticky(&mut self) {
        self.sticky = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_NOTICE_MS, NoticeLog, Notifier};

    #[test]
    fn show_uses_default_duration() {
        let mut log = NoticeLog::new();
        log.show("hello");
        assert_eq!(log.notices().len(), 1);
        assert_eq!(log.notices()[0].duration_ms, Some(DEFAULT_NOTICE_MS));
    }

    #[test]
    fn sticky_stays_until_dismissed() {
        let mut log = NoticeLog::new();
        log.show_sticky("working...");
        assert_eq!(log.sticky(), Some("working..."));
        log.show("other");
        assert_eq!(log.sticky(), Some("working..."));
        log.dismiss_sticky();
        assert_eq!(log.sticky(), None);
    }

    #[test]
    fn drain_clears_notices() {
        let mut log = NoticeLog::new();
        log.show("a");
        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.notices().is_empty());
    }
}
