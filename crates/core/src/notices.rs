//! Notices

use std::time::Duration;

/// How long a notice stays up before its hide fires.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Notice severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Neutral information
    #[default]
    Info,

    /// Something completed
    Success,

    /// Something failed
    Error,
}

impl Severity {
    /// Banner CSS classes.
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "notification info",
            Self::Success => "notification success",
            Self::Error => "notification error",
        }
    }

    /// Icon CSS classes.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "fas fa-info-circle",
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }
}

/// A message shown in the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text
    pub message: String,

    /// Severity
    pub severity: Severity,
}

/// The transient notification banner.
///
/// Calls are not queued: `show` replaces whatever is displayed, and every scheduled
/// `hide` hides the banner, even when a newer notice replaced the one it was
/// scheduled for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBanner {
    notice: Option<Notice>,
    visible: bool,
}

impl NoticeBanner {
    /// Replace the banner content and make it visible.
    ///
    /// The caller schedules [`NoticeBanner::hide`] after [`NOTICE_DURATION`].
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.notice = Some(Notice {
            message: message.into(),
            severity,
        });
        self.visible = true;
    }

    /// Hide the banner, whatever it currently shows.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the banner is displayed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The notice on display, if the banner is visible.
    pub fn visible_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|_| self.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_stay_up_for_three_seconds() {
        assert_eq!(NOTICE_DURATION, Duration::from_secs(3));
    }

    #[test]
    fn severity_defaults_to_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn each_severity_has_its_own_class_and_icon() {
        assert_eq!(Severity::Info.class(), "notification info");
        assert_eq!(Severity::Success.icon(), "fas fa-check-circle");
        assert_eq!(Severity::Error.class(), "notification error");
        assert_eq!(Severity::Error.icon(), "fas fa-exclamation-circle");
    }

    #[test]
    fn show_makes_notice_visible_until_hidden() {
        let mut banner = NoticeBanner::default();

        assert_eq!(banner.visible_notice(), None);

        banner.show("Đã lưu", Severity::Success);

        assert_eq!(
            banner.visible_notice().map(|notice| notice.message.as_str()),
            Some("Đã lưu")
        );

        banner.hide();

        assert!(!banner.is_visible());
        assert_eq!(banner.visible_notice(), None);
    }

    #[test]
    fn second_show_replaces_the_first() {
        let mut banner = NoticeBanner::default();

        banner.show("first", Severity::Info);
        banner.show("second", Severity::Error);

        assert_eq!(
            banner.visible_notice(),
            Some(&Notice {
                message: "second".to_string(),
                severity: Severity::Error,
            })
        );
    }

    #[test]
    fn earlier_hide_also_hides_a_newer_notice() {
        let mut banner = NoticeBanner::default();

        banner.show("first", Severity::Info);
        banner.show("second", Severity::Info);

        // The timer scheduled by the first show fires.
        banner.hide();

        assert_eq!(banner.visible_notice(), None);
    }
}
