use derive_builder::Builder;

/// One issue flagged by the grammar engine.
///
/// `context`, `rule_id`, `message` and `replacements` are what gets shown to
/// the user. The remaining attributes are carried through from the engine so
/// library callers can locate the issue in the original text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct GrammarMatch {
    /// Text surrounding the issue, as cut by the engine.
    pub context: String,
    pub rule_id: String,
    pub message: String,
    /// Suggested replacements, best first. May be empty.
    #[builder(default)]
    pub replacements: Vec<String>,
    /// Position of the issue inside `context`.
    #[builder(default)]
    pub offset_in_context: usize,
    /// Position of the issue inside the checked text.
    #[builder(default)]
    pub offset: usize,
    #[builder(default)]
    pub error_length: usize,
    #[builder(default)]
    pub category: String,
    #[builder(default)]
    pub rule_issue_type: String,
    #[builder(default)]
    pub sentence: String,
}

impl GrammarMatch {
    /// The slice of `context` the issue covers, if the offsets line up.
    ///
    /// Offsets and lengths are in UTF-16 code units, as LanguageTool reports them.
    pub fn matched_text(&self) -> Option<&str> {
        let start = utf16_to_byte_index(&self.context, self.offset_in_context)?;
        let end = utf16_to_byte_index(&self.context, self.offset_in_context + self.error_length)?;
        self.context.get(start..end)
    }
}

/// Byte index of the char boundary `units` UTF-16 code units into `text`.
/// `None` when past the end or inside a surrogate pair.
fn utf16_to_byte_index(text: &str, units: usize) -> Option<usize> {
    let mut seen = 0;
    for (index, c) in text.char_indices() {
        if seen == units {
            return Some(index);
        }
        if seen > units {
            return None;
        }
        seen += c.len_utf16();
    }
    (seen == units).then_some(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_supplemental_fields() {
        let m = GrammarMatchBuilder::default()
            .context("He go to school")
            .rule_id("SUBJECT_VERB_AGREEMENT")
            .message("Subject-verb agreement error")
            .build()
            .unwrap();

        assert!(m.replacements.is_empty());
        assert_eq!(m.offset, 0);
        assert_eq!(m.category, "");
    }

    #[test]
    fn test_builder_requires_display_fields() {
        let result = GrammarMatchBuilder::default().context("He go").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_matched_text() {
        let m = GrammarMatchBuilder::default()
            .context("He go to school")
            .rule_id("R")
            .message("m")
            .offset_in_context(3_usize)
            .error_length(2_usize)
            .build()
            .unwrap();
        assert_eq!(m.matched_text(), Some("go"));

        let out_of_range = GrammarMatch {
            offset_in_context: 40,
            error_length: 2,
            ..m
        };
        assert_eq!(out_of_range.matched_text(), None);
    }

    #[test]
    fn test_matched_text_counts_utf16_units() {
        let m = GrammarMatch {
            context: "Café go home".to_string(),
            offset_in_context: 5,
            error_length: 2,
            ..Default::default()
        };
        assert_eq!(m.matched_text(), Some("go"));

        // the emoji is two UTF-16 units
        let m = GrammarMatch {
            context: "😀 He go home".to_string(),
            offset_in_context: 6,
            error_length: 2,
            ..Default::default()
        };
        assert_eq!(m.matched_text(), Some("go"));

        let inside_pair = GrammarMatch {
            offset_in_context: 1,
            error_length: 1,
            ..m
        };
        assert_eq!(inside_pair.matched_text(), None);
    }
}
