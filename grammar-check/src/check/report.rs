use crate::shared::models::GrammarMatch;
use colored::Colorize;
use itertools::Itertools;

pub const NO_ERRORS_MESSAGE: &str = "No grammatical errors detected.";
pub const SEPARATOR_WIDTH: usize = 60;
const NO_SUGGESTIONS: &str = "None";

/// How the result pane draws a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportVariant {
    #[default]
    Normal,
    /// Visually distinguished, used for the clean result.
    Success,
}

/// Text shown in the result pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub text: String,
    pub variant: ReportVariant,
}

impl Report {
    pub fn new(text: impl Into<String>, variant: ReportVariant) -> Self {
        Self {
            text: text.into(),
            variant,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text as the result pane draws it.
    pub fn styled(&self) -> String {
        match self.variant {
            ReportVariant::Normal => self.text.clone(),
            ReportVariant::Success => self.text.green().to_string(),
        }
    }

    /// Formats engine matches, numbering them from 1 in the order given.
    pub fn from_matches(matches: &[GrammarMatch]) -> Self {
        if matches.is_empty() {
            return Self::new(NO_ERRORS_MESSAGE, ReportVariant::Success);
        }

        let text = matches
            .iter()
            .enumerate()
            .map(|(i, grammar_match)| block(i + 1, grammar_match))
            .collect::<String>();
        Self::new(text, ReportVariant::Normal)
    }
}

fn block(number: usize, grammar_match: &GrammarMatch) -> String {
    let suggestions = if grammar_match.replacements.is_empty() {
        NO_SUGGESTIONS.to_string()
    } else {
        grammar_match.replacements.iter().join(", ")
    };

    format!(
        "ERROR {}:\nContext: {}\nType: {}\nMessage: {}\nSuggestions: {}\n{}\n",
        number,
        grammar_match.context,
        grammar_match.rule_id,
        grammar_match.message,
        suggestions,
        "-".repeat(SEPARATOR_WIDTH),
    )
}
