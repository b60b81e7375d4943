use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::SyllabusUnit;

pub const IMPLICIT_UNIT_NAME: &str = "General Topics";
const MIN_TOPIC_CHARS: usize = 4;

static UNIT_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(Unit|Module|Chapter|Week)\s*(\d+)[:\s-]*(.*)$")
        .expect("UNIT_HEADER_REGEX is a valid regex pattern")
});
static BULLET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•]\s*").expect("BULLET_REGEX is a valid regex pattern"));

/// Parses a free-form outline into units and their topics, in source order.
pub fn parse_syllabus(syllabus_text: &str) -> Vec<SyllabusUnit> {
    let mut units: Vec<SyllabusUnit> = Vec::new();

    for line in syllabus_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = UNIT_HEADER_REGEX.captures(line) {
            let name = caps[3].trim();
            let unit_name = if name.is_empty() {
                format!("{} {}", &caps[1], &caps[2])
            } else {
                name.to_string()
            };
            units.push(SyllabusUnit::new(unit_name));
            continue;
        }

        let topic = BULLET_REGEX.replace(line, "");
        if topic.chars().count() < MIN_TOPIC_CHARS {
            continue;
        }

        if units.is_empty() {
            units.push(SyllabusUnit::new(IMPLICIT_UNIT_NAME));
        }
        if let Some(current) = units.last_mut() {
            current.topics.push(topic.into_owned());
        }
    }

    units
}
