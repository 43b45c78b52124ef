//! Pure parsing of narrative descriptor contents.
//!
//! A descriptor is line oriented. An optional first line of the form
//! `<anything>:<title>` carries the title (and any issue id); every other line
//! is body text, kept verbatim.

use crate::core::issues::{IssueScanner, first_issue};
use crate::core::types::Narrative;

/// Separates the lead-in of the title line from the title itself.
pub const TITLE_SEPARATOR: char = ':';

/// Line terminator appended to each body line.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Controls how the body text is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyOptions {
    /// Drop the terminator after the last body line.
    pub trim_trailing_newline: bool,
}

/// Title and issue id extracted from a title line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleLine {
    pub title: Option<String>,
    pub card_number: Option<String>,
}

/// Unit kind for a descriptor file name: everything before the first `.`.
///
/// Falls back to the whole name when there is no `.` or nothing precedes it,
/// so the kind is never empty.
pub fn narrative_kind(file_name: &str) -> &str {
    match file_name.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// True if `line` qualifies as a title line (contains the separator anywhere).
pub fn is_title_line(line: &str) -> bool {
    line.contains(TITLE_SEPARATOR)
}

/// Iterator over the lines of `contents`.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is not part of
/// the line. A final line without terminator is still yielded.
pub fn split_lines(contents: &str) -> Lines<'_> {
    Lines { rest: contents }
}

#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(at) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };
        let line = &self.rest[..at];
        let after = &self.rest[at..];
        self.rest = after.strip_prefix("\r\n").unwrap_or(&after[1..]);
        Some(line)
    }
}

/// Strip ASCII control characters and spaces from both ends.
///
/// Unicode whitespace such as NBSP is kept.
fn trim_title(title: &str) -> &str {
    title.trim_matches(|c: char| c <= ' ')
}

/// Split a title line into title and first issue id.
///
/// A separator at position 0 leaves both absent.
pub fn parse_title_line<S: IssueScanner + ?Sized>(line: &str, scanner: &S) -> TitleLine {
    match line.find(TITLE_SEPARATOR) {
        Some(at) if at > 0 => TitleLine {
            title: Some(trim_title(&line[at + TITLE_SEPARATOR.len_utf8()..]).to_string()),
            card_number: first_issue(scanner, line),
        },
        _ => TitleLine::default(),
    }
}

/// Build a [`Narrative`] from descriptor contents.
pub fn parse_narrative<S: IssueScanner + ?Sized>(
    kind: &str,
    contents: &str,
    scanner: &S,
    options: BodyOptions,
) -> Narrative {
    let mut lines = split_lines(contents).peekable();
    let title_line = lines
        .next_if(|line| is_title_line(line))
        .map(|line| parse_title_line(line, scanner))
        .unwrap_or_default();
    let text = render_body(lines, options);
    Narrative::new(title_line.title, title_line.card_number, kind, text)
}

fn render_body<'a>(lines: impl Iterator<Item = &'a str>, options: BodyOptions) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push_str(LINE_TERMINATOR);
    }
    if options.trim_trailing_newline && text.ends_with(LINE_TERMINATOR) {
        text.truncate(text.len() - LINE_TERMINATOR.len());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::issues::{NoIssues, PatternIssueScanner};

    fn body(lines: &[&str]) -> String {
        lines
            .iter()
            .map(|line| format!("{line}{LINE_TERMINATOR}"))
            .collect()
    }

    #[test]
    fn kind_is_text_before_first_dot() {
        assert_eq!(narrative_kind("epic.narrative"), "epic");
        assert_eq!(narrative_kind("a.b.narrative"), "a");
        assert_eq!(narrative_kind("Feature.NARRATIVE"), "Feature");
    }

    #[test]
    fn kind_falls_back_to_full_name() {
        assert_eq!(narrative_kind("README"), "README");
        assert_eq!(narrative_kind(".narrative"), ".narrative");
    }

    #[test]
    fn title_line_is_split_and_trimmed() {
        let parsed = parse_title_line("Growth:   Increase user retention  ", &NoIssues);
        assert_eq!(parsed.title.as_deref(), Some("Increase user retention"));
        assert_eq!(parsed.card_number, None);
    }

    #[test]
    fn title_splits_at_first_separator_only() {
        let parsed = parse_title_line("Feature: Metric: retention", &NoIssues);
        assert_eq!(parsed.title.as_deref(), Some("Metric: retention"));
    }

    #[test]
    fn empty_title_after_separator_is_present() {
        let parsed = parse_title_line("Epic:", &NoIssues);
        assert_eq!(parsed.title.as_deref(), Some(""));
    }

    #[test]
    fn leading_separator_leaves_title_and_card_absent() {
        let scanner = |_: &str| vec!["#1".to_string()];
        let parsed = parse_title_line(":leading colon", &scanner);
        assert_eq!(parsed, TitleLine::default());
    }

    #[test]
    fn card_number_is_scanned_from_whole_title_line() {
        let scanner = PatternIssueScanner::default();
        let parsed = parse_title_line("Epic #42: Checkout SHOP-7", &scanner);
        assert_eq!(parsed.title.as_deref(), Some("Checkout SHOP-7"));
        assert_eq!(parsed.card_number.as_deref(), Some("#42"));
    }

    #[test]
    fn title_line_is_consumed_and_body_kept_verbatim() {
        let contents = "Growth: Increase user retention\nUsers should return.\nMetric: 30-day retention.\n";
        let narrative = parse_narrative("epic", contents, &NoIssues, BodyOptions::default());

        assert_eq!(narrative.kind(), "epic");
        assert_eq!(narrative.title(), Some("Increase user retention"));
        assert_eq!(narrative.card_number(), None);
        assert_eq!(
            narrative.text(),
            body(&["Users should return.", "Metric: 30-day retention."])
        );
    }

    #[test]
    fn first_line_without_separator_starts_body() {
        let contents = "Just a description with no title\nSecond line";
        let narrative = parse_narrative("feature", contents, &NoIssues, BodyOptions::default());

        assert_eq!(narrative.title(), None);
        assert_eq!(narrative.card_number(), None);
        assert_eq!(
            narrative.text(),
            body(&["Just a description with no title", "Second line"])
        );
    }

    #[test]
    fn leading_colon_line_is_still_consumed() {
        let narrative = parse_narrative(
            "epic",
            ":leading colon\nbody",
            &NoIssues,
            BodyOptions::default(),
        );
        assert_eq!(narrative.title(), None);
        assert_eq!(narrative.text(), body(&["body"]));
    }

    #[test]
    fn empty_contents_yield_empty_body() {
        let narrative = parse_narrative("epic", "", &NoIssues, BodyOptions::default());
        assert_eq!(narrative.title(), None);
        assert_eq!(narrative.text(), "");
    }

    #[test]
    fn trailing_newline_can_be_trimmed() {
        let options = BodyOptions {
            trim_trailing_newline: true,
        };
        let narrative = parse_narrative("epic", "Epic: T\none\ntwo\n", &NoIssues, options);
        assert_eq!(narrative.text(), format!("one{LINE_TERMINATOR}two"));
    }

    #[test]
    fn title_trim_keeps_unicode_whitespace() {
        let parsed = parse_title_line("Epic:\0 \u{a0}Checkout\u{a0}\t", &NoIssues);
        assert_eq!(parsed.title.as_deref(), Some("\u{a0}Checkout\u{a0}"));
    }

    #[test]
    fn lines_end_at_any_terminator() {
        let lines: Vec<_> = split_lines("a\nb\r\nc\rd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);

        let lines: Vec<_> = split_lines("a\r\r\n\n").collect();
        assert_eq!(lines, vec!["a", "", ""]);

        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn lone_carriage_returns_split_lines() {
        let narrative = parse_narrative(
            "epic",
            "Epic: T\rbody one\rbody two\r",
            &NoIssues,
            BodyOptions::default(),
        );
        assert_eq!(narrative.title(), Some("T"));
        assert_eq!(narrative.text(), body(&["body one", "body two"]));
    }

    #[test]
    fn crlf_lines_are_normalized() {
        let narrative = parse_narrative(
            "epic",
            "Epic: T\r\none\r\ntwo\r\n",
            &NoIssues,
            BodyOptions::default(),
        );
        assert_eq!(narrative.title(), Some("T"));
        assert_eq!(narrative.text(), body(&["one", "two"]));
    }
}
