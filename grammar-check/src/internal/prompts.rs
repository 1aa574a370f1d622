//! User interaction abstractions.
//!
//! Validation and engine failures are decided by the orchestrator; showing
//! them to the user is a separate step behind [`UserInteraction`].

use mockall::automock;
use std::fmt;
use tracing::{error, info, warn};

/// The three modal dialog styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Error,
    Warning,
    Information,
}

impl DialogKind {
    pub fn title(&self) -> &'static str {
        match self {
            DialogKind::Error => "Error",
            DialogKind::Warning => "Warning",
            DialogKind::Information => "Information",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Trait for presenting dialogs to the user.
///
/// Implementations decide whether the dialog blocks until acknowledged.
/// The interactive window uses `InquireInteraction`, which does.
///
/// # Example
///
/// ```rust
/// use grammar_check::internal::prompts::{DialogKind, Silent, UserInteraction};
///
/// let interaction = Silent;
/// interaction.alert(DialogKind::Warning, "Please enter some text to check.");
/// ```
#[automock]
pub trait UserInteraction: Send + Sync {
    /// Show a dialog of the given kind.
    fn alert(&self, kind: DialogKind, message: &str);
}

/// Swallows every dialog. Useful for library callers that inspect the
/// returned status instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl UserInteraction for Silent {
    fn alert(&self, _kind: DialogKind, _message: &str) {}
}

/// Writes dialogs to the console log without waiting for the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlerts;

impl UserInteraction for LogAlerts {
    fn alert(&self, kind: DialogKind, message: &str) {
        match kind {
            DialogKind::Error => error!(target: "always", "{}: {}", kind, message),
            DialogKind::Warning => warn!(target: "always", "{}: {}", kind, message),
            DialogKind::Information => info!(target: "always", "{}: {}", kind, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_titles() {
        assert_eq!(DialogKind::Error.title(), "Error");
        assert_eq!(DialogKind::Warning.to_string(), "Warning");
        assert_eq!(DialogKind::Information.to_string(), "Information");
    }

    #[test]
    fn test_silent_and_log_alerts_do_not_panic() {
        Silent.alert(DialogKind::Error, "An error occurred: boom");
        LogAlerts.alert(DialogKind::Information, "Please enter at least 3 words");
    }

    #[test]
    fn test_interactions_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Silent>();
        assert_send_sync::<LogAlerts>();
        assert_send_sync::<MockUserInteraction>();
    }
}
