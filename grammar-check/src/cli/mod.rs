//! Terminal implementations of the interaction traits.
//!
//! Use these when a person is sitting at the terminal. For scripted runs use
//! [`LogAlerts`](crate::LogAlerts), for library usage or tests use
//! [`Silent`](crate::Silent).
//!
//! # TTY Detection
//!
//! `InquireInteraction` detects when stdin is not a TTY (a pipe or CI) and
//! falls back to logging the dialog instead of waiting for acknowledgement.

use crate::internal::prompts::{DialogKind, LogAlerts, UserInteraction};
use colored::Colorize;
use inquire::InquireError;
use tracing::{debug, warn};

const ACKNOWLEDGE: &str = "OK";

/// Modal dialogs drawn with `inquire`. Each dialog blocks until dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct InquireInteraction;

impl InquireInteraction {
    fn heading(kind: DialogKind) -> String {
        match kind {
            DialogKind::Error => kind.title().red().bold().to_string(),
            DialogKind::Warning => kind.title().yellow().bold().to_string(),
            DialogKind::Information => kind.title().blue().bold().to_string(),
        }
    }
}

impl UserInteraction for InquireInteraction {
    fn alert(&self, kind: DialogKind, message: &str) {
        debug!("Showing {} dialog: {}", kind, message);
        tracing_indicatif::suspend_tracing_indicatif(|| {
            let prompt = format!("{}: {}", Self::heading(kind), message);
            match inquire::Select::new(&prompt, vec![ACKNOWLEDGE]).prompt() {
                Ok(_) => {}
                Err(InquireError::NotTTY) => {
                    warn!(target: "user", "Showing dialog, but input device is not a TTY.");
                    LogAlerts.alert(kind, message);
                }
                Err(e) => debug!("Dialog dismissed: {}", e),
            }
        })
    }
}
