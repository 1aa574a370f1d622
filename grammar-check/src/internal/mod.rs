//! Abstractions that keep the check pipeline independent of the terminal.
//!
//! The orchestrator never talks to a terminal directly. Dialogs go through
//! [`prompts::UserInteraction`], so the same pipeline runs inside the
//! interactive window, behind the one-shot `check` command, or in tests.
//!
//! | Use Case | UserInteraction |
//! |----------|-----------------|
//! | Interactive window | `InquireInteraction` (in the cli module) |
//! | One-shot command | `LogAlerts` |
//! | Library/Testing | `Silent` |

pub mod prompts;

pub use prompts::{DialogKind, LogAlerts, Silent, UserInteraction};
