use crate::check::store::CheckerStore;
use colored::Colorize;

pub const WINDOW_TITLE: &str = "Advanced Grammar Checker";
pub const INPUT_LABEL: &str = "Enter Text";
pub const RESULTS_LABEL: &str = "Grammar Check Results";
pub const WINDOW_WIDTH: usize = 80;

const EMPTY_PANE: &str = "(empty)";

/// Draws the whole window for the current store state.
pub fn render_window(store: &CheckerStore) -> String {
    let rule = "=".repeat(WINDOW_WIDTH);
    let mut out = format!(
        "{}\n{:^width$}\n{}\n",
        rule,
        WINDOW_TITLE.bold(),
        rule,
        width = WINDOW_WIDTH
    );

    out.push_str(&pane(INPUT_LABEL, store.get_input().trim_end()));

    let report = store.report();
    if report.is_empty() {
        out.push_str(&pane(RESULTS_LABEL, ""));
    } else {
        out.push_str(&pane(RESULTS_LABEL, report.styled().trim_end()));
    }

    out.push_str(&"_".repeat(WINDOW_WIDTH));
    out.push('\n');
    out.push_str(&store.status().to_string().dimmed().to_string());
    out
}

fn pane(label: &str, body: &str) -> String {
    let heading = format!("[ {} ]", label).white().bold();
    if body.is_empty() {
        format!("{}\n{}\n\n", heading, EMPTY_PANE.dimmed())
    } else {
        format!("{}\n{}\n\n", heading, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::report::ReportVariant;
    use crate::check::store::Status;

    #[test]
    fn test_fresh_window() {
        let rendered = render_window(&CheckerStore::new());
        assert!(rendered.contains(WINDOW_TITLE));
        assert!(rendered.contains("[ Enter Text ]"));
        assert!(rendered.contains("[ Grammar Check Results ]"));
        assert_eq!(rendered.matches(EMPTY_PANE).count(), 2);
        assert!(rendered.contains("Ready"));
    }

    #[test]
    fn test_window_shows_store_state() {
        let mut store = CheckerStore::new();
        store.set_input("He go to school yesterday.\n");
        store.set_report("ERROR 1:\nContext: He go to school\n", ReportVariant::Normal);
        store.set_status(Status::Completed);

        let rendered = render_window(&store);
        assert!(rendered.contains("He go to school yesterday."));
        assert!(rendered.contains("ERROR 1:\nContext: He go to school"));
        assert!(rendered.contains("Grammar check completed"));
        assert!(!rendered.contains(EMPTY_PANE));
    }

    #[test]
    fn test_window_layout() {
        let mut store = CheckerStore::new();
        store.set_input("He go to school yesterday.");

        let rendered = strip_ansi_escapes::strip_str(render_window(&store));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "=".repeat(WINDOW_WIDTH));
        assert_eq!(lines[1].trim(), WINDOW_TITLE);
        assert_eq!(lines[2], "=".repeat(WINDOW_WIDTH));
        assert_eq!(&lines[3..6], ["[ Enter Text ]", "He go to school yesterday.", ""]);
        assert_eq!(&lines[6..9], ["[ Grammar Check Results ]", EMPTY_PANE, ""]);
        assert_eq!(lines[9], "_".repeat(WINDOW_WIDTH));
        assert_eq!(lines[10], "Ready");
        assert_eq!(lines.len(), 11);
    }
}
