use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::domain::{ScheduleItem, Segment};

const SCHEDULE_RULE: usize = 60;
const SUMMARY_RULE: usize = 80;
const PENDING_MARK: &str = "○";

/// Plain-text rendering of a schedule, one block per study day.
pub fn export_schedule_text(items: &[ScheduleItem]) -> String {
    let mut by_date: BTreeMap<NaiveDate, Vec<&ScheduleItem>> = BTreeMap::new();
    for item in items {
        by_date.entry(item.scheduled_date).or_default().push(item);
    }

    let mut out = String::from("MY STUDY SCHEDULE\n");
    out.push_str(&rule('=', SCHEDULE_RULE));
    out.push('\n');

    for (date, mut day) in by_date {
        day.sort_by(|a, b| a.start_time.cmp(&b.start_time));

        out.push_str(&format!("\n{}\n", date.format("%A, %B %d, %Y")));
        out.push_str(&rule('-', SCHEDULE_RULE));
        for item in day {
            out.push_str(&format!(
                "{} {} - {}: {} ({})\n",
                PENDING_MARK,
                item.start_time,
                item.end_time,
                item.topic_name,
                item.difficulty.as_str().to_uppercase()
            ));
            if !item.unit_name.is_empty() {
                out.push_str(&format!("   Unit: {}\n", item.unit_name));
            }
            out.push_str(&format!("   Estimated Time: {} hours\n\n", item.estimated_hours));
        }
    }

    let total_hours: u32 = items.iter().map(|i| i.estimated_hours).sum();
    out.push('\n');
    out.push_str(&rule('=', SCHEDULE_RULE));
    out.push_str("STATISTICS\n");
    out.push_str(&rule('=', SCHEDULE_RULE));
    out.push_str(&format!("Total Topics: {}\n", items.len()));
    out.push_str(&format!("Total Study Hours: {}\n", total_hours));
    out
}

/// Plain-text study notes: sources, then each segment with bullets and key points.
pub fn export_summary_text(topic: &str, segments: &[Segment], sources: &[String]) -> String {
    let mut out = format!("STUDY SUMMARY: {}\n", topic);
    out.push_str(&rule('=', SUMMARY_RULE));
    out.push('\n');

    if !sources.is_empty() {
        out.push_str("SOURCES:\n");
        for (n, source) in sources.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", n + 1, source));
        }
        out.push('\n');
        out.push_str(&rule('-', SUMMARY_RULE));
        out.push('\n');
    }

    for (n, segment) in segments.iter().enumerate() {
        out.push_str(&format!("\n{}. {}\n", n + 1, segment.title));
        out.push_str(&rule('-', SUMMARY_RULE));
        out.push('\n');
        for sentence in &segment.content {
            out.push_str(&format!("• {}\n", sentence));
        }
        out.push('\n');

        if !segment.key_points.is_empty() {
            out.push_str("KEY POINTS:\n");
            for point in &segment.key_points {
                out.push_str(&format!("  ✓ {}\n", point));
            }
            out.push('\n');
        }
    }

    out
}

/// `summary_<topic>.txt` with the topic reduced to alphanumerics, spaces, `-` and `_`.
pub fn summary_file_name(topic: &str) -> String {
    let safe: String = topic
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let safe: String = safe.trim().chars().take(50).collect();
    format!("summary_{}.txt", safe)
}

fn rule(ch: char, width: usize) -> String {
    let mut line: String = std::iter::repeat(ch).take(width).collect();
    line.push('\n');
    line
}
