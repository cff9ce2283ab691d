//! Regex fallback extraction over unstructured record bodies.
//!
//! Structured metadata is authoritative; these patterns only recover a
//! value when the corresponding field is absent. Matching is
//! case-insensitive and matched regions may span lines (a field value
//! can wrap, a field declaration does not nest).

use onebrain_core::ActivityEntry;
use regex::{Regex, RegexBuilder};

/// Return the trimmed capture `group` of `pattern` in `text`, or the
/// caller-supplied `default` when there is no match.
///
/// Pure: the text is never mutated, and repeated application yields the
/// same result.
#[must_use]
pub fn extract(text: &str, pattern: &Regex, group: usize, default: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(group))
        .map_or_else(|| default.to_string(), |m| m.as_str().trim().to_string())
}

/// The per-field pattern table, compiled once at startup and passed by
/// reference into the components that need it.
#[derive(Debug)]
pub struct FieldPatterns {
    project_id: Regex,
    project_name: Regex,
    client: Regex,
    developer_name: Regex,
    developer_id: Regex,
    customer_id: Regex,
    health: Regex,
    priority: Regex,
    due_date: Regex,
    details: Regex,
    activity_marker: Regex,
}

fn field_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
}

impl FieldPatterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            project_id: field_regex(r"Project ID:\s*(\S+)")?,
            project_name: field_regex(r"Project Name:\s*(.+?)(?:\n|$)")?,
            client: field_regex(r"Client:\s*(.+?)(?:\n|$)")?,
            developer_name: field_regex(r"Developer:\s*(.+?)\s*\(")?,
            developer_id: field_regex(r"\((DEV-\d+)\)")?,
            customer_id: field_regex(r"Customer ID:\s*(\S+)")?,
            health: field_regex(r"Health:\s*(.+?)(?:\n|$)")?,
            priority: field_regex(r"Priority:\s*(\w+)")?,
            due_date: field_regex(r"Due Date:\s*([\d-]+)")?,
            // The value runs until the next capitalized line start. The
            // terminator is consumed rather than looked ahead at, which
            // leaves the captured group unchanged; case folding is
            // disabled for the terminator so lowercase wrapped lines
            // stay part of the value.
            details: field_regex(r"Details:\s*(.+?)(?:\n(?-i:[A-Z])|\z)")?,
            activity_marker: field_regex(r"───── Activity ([\d\- :]+) ─────")?,
        })
    }

    #[must_use]
    pub fn project_id(&self, text: &str) -> Option<String> {
        capture(&self.project_id, text)
    }

    #[must_use]
    pub fn project_name(&self, text: &str) -> Option<String> {
        capture(&self.project_name, text)
    }

    #[must_use]
    pub fn client(&self, text: &str) -> Option<String> {
        capture(&self.client, text)
    }

    #[must_use]
    pub fn developer_name(&self, text: &str) -> Option<String> {
        capture(&self.developer_name, text)
    }

    #[must_use]
    pub fn developer_id(&self, text: &str) -> Option<String> {
        capture(&self.developer_id, text)
    }

    #[must_use]
    pub fn customer_id(&self, text: &str) -> Option<String> {
        capture(&self.customer_id, text)
    }

    #[must_use]
    pub fn health(&self, text: &str) -> Option<String> {
        capture(&self.health, text)
    }

    #[must_use]
    pub fn priority(&self, text: &str) -> Option<String> {
        capture(&self.priority, text)
    }

    #[must_use]
    pub fn due_date(&self, text: &str) -> Option<String> {
        capture(&self.due_date, text)
    }

    #[must_use]
    pub fn details(&self, text: &str) -> Option<String> {
        capture(&self.details, text)
    }

    /// Parse the ordered activity log embedded in a record body.
    ///
    /// Each block runs from its marker line to the next marker or the
    /// end of text.
    #[must_use]
    pub fn activities(&self, text: &str) -> Vec<ActivityEntry> {
        let markers: Vec<(usize, usize, String)> = self
            .activity_marker
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let stamp = caps.get(1)?;
                Some((whole.start(), whole.end(), stamp.as_str().trim().to_string()))
            })
            .collect();

        markers
            .iter()
            .enumerate()
            .map(|(i, (_, end, timestamp))| {
                let block_end = markers.get(i + 1).map_or(text.len(), |next| next.0);
                ActivityEntry {
                    timestamp: timestamp.clone(),
                    text: text[*end..block_end].trim().to_string(),
                }
            })
            .collect()
    }
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn patterns() -> FieldPatterns {
        FieldPatterns::new().expect("field patterns should compile")
    }

    const BODY: &str = "Project ID: PRJ-007\n\
        Customer ID: CI004\n\
        Client: Northwind\n\
        Project Name: Vortex Migration\n\
        Details: Move the legacy pipeline\nonto the new runtime\n\
        Status & Health: 🟢 On track\n\
        Priority: High\n\
        Due Date: 2026-09-15\n\
        Assigned Developer: Liam Chen (DEV-003)\n\
        Last Interaction: Kickoff call\n\
        Last Updated: 2026-08-01T09:00:00+00:00";

    #[test]
    fn recovers_every_field_from_an_ingested_body() {
        let p = patterns();
        assert_eq!(p.project_id(BODY).as_deref(), Some("PRJ-007"));
        assert_eq!(p.customer_id(BODY).as_deref(), Some("CI004"));
        assert_eq!(p.client(BODY).as_deref(), Some("Northwind"));
        assert_eq!(p.project_name(BODY).as_deref(), Some("Vortex Migration"));
        assert_eq!(p.developer_name(BODY).as_deref(), Some("Liam Chen"));
        assert_eq!(p.developer_id(BODY).as_deref(), Some("DEV-003"));
        assert_eq!(p.health(BODY).as_deref(), Some("🟢 On track"));
        assert_eq!(p.priority(BODY).as_deref(), Some("High"));
        assert_eq!(p.due_date(BODY).as_deref(), Some("2026-09-15"));
    }

    #[test]
    fn details_may_wrap_across_lines() {
        let p = patterns();
        assert_eq!(
            p.details(BODY).as_deref(),
            Some("Move the legacy pipeline\nonto the new runtime")
        );
    }

    #[test]
    fn extraction_is_case_insensitive() {
        let p = patterns();
        let body = "project id: prj-001\nproject name: Quiet One";
        assert_eq!(p.project_id(body).as_deref(), Some("prj-001"));
        assert_eq!(p.project_name(body).as_deref(), Some("Quiet One"));
    }

    #[test]
    fn missing_field_falls_back_to_default() {
        let p = patterns();
        let got = extract("no ids here", &p.project_id, 1, "—");
        assert_eq!(got, "—");
    }

    #[test]
    fn extract_is_idempotent() {
        let p = patterns();
        let first = extract(BODY, &p.client, 1, "—");
        let second = extract(BODY, &p.client, 1, "—");
        assert_eq!(first, second);
        assert_eq!(first, "Northwind");
    }

    #[test]
    fn activities_parse_in_append_order() {
        let p = patterns();
        let body = format!(
            "{BODY}\n\n───── Activity 2026-08-02 14:30 ─────\nClient asked for dark mode\n\n───── Activity 2026-08-03 09:05 ─────\nShipped the toggle"
        );
        let entries = p.activities(&body);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, "2026-08-02 14:30");
        assert_eq!(entries[0].text, "Client asked for dark mode");
        assert_eq!(entries[1].timestamp, "2026-08-03 09:05");
        assert_eq!(entries[1].text, "Shipped the toggle");
    }

    #[test]
    fn body_without_markers_has_no_activities() {
        let p = patterns();
        assert!(p.activities(BODY).is_empty());
    }
}
