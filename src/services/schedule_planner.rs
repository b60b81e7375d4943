use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::models::domain::{ScheduleItem, Topic};
use crate::services::difficulty_classifier::classify_difficulty;
use crate::services::syllabus_parser::parse_syllabus;

pub const DEFAULT_HOURS_PER_DAY: f64 = 3.0;
pub const MAX_HOURS_PER_DAY: f64 = 8.0;
const DAY_OVERFLOW_FACTOR: f64 = 1.5;
const MORNING_SLOT: u32 = 9;
const AFTERNOON_SLOT: u32 = 14;
const EVENING_SLOT: u32 = 18;
const AFTERNOON_CUTOFF_HOURS: u32 = 4;
const LATEST_END_HOUR: u32 = 22;

/// Outcome of planning a syllabus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchedulePlan {
    Planned(Vec<ScheduleItem>),
    /// The syllabus yielded no topics.
    NoTopics,
    /// Placement could not complete (calendar overflow).
    Failed(String),
}

impl SchedulePlan {
    pub fn is_planned(&self) -> bool {
        matches!(self, SchedulePlan::Planned(_))
    }

    /// Items of a successful plan; empty for both failure shapes.
    pub fn into_items(self) -> Vec<ScheduleItem> {
        match self {
            SchedulePlan::Planned(items) => items,
            SchedulePlan::NoTopics | SchedulePlan::Failed(_) => Vec::new(),
        }
    }
}

/// Plans a syllabus over `total_days`, starting at `start_date` (ISO `YYYY-MM-DD`)
/// or today when absent or unparseable.
pub fn plan_schedule(syllabus_text: &str, total_days: i64, start_date: Option<&str>) -> SchedulePlan {
    let start = start_date
        .and_then(|raw| match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(e) => {
                log::warn!("Ignoring invalid start date '{}': {}", raw, e);
                None
            }
        })
        .unwrap_or_else(|| Local::now().date_naive());

    plan_from(syllabus_text, total_days, start)
}

pub fn plan_from(syllabus_text: &str, total_days: i64, start: NaiveDate) -> SchedulePlan {
    let topics = classified_topics(syllabus_text);
    if topics.is_empty() {
        return SchedulePlan::NoTopics;
    }

    let total_hours: u32 = topics.iter().map(|t| t.estimated_hours).sum();
    let hours_per_day = hours_per_day(total_hours, total_days);
    log::info!(
        "Planning {} topics ({} hours) over {} days at {:.1} hours/day",
        topics.len(),
        total_hours,
        total_days,
        hours_per_day
    );

    let Some(mut date) = skip_weekend(start) else {
        return SchedulePlan::Failed(format!("no weekday on or after {}", start));
    };
    let mut day_hours: u32 = 0;
    let mut items = Vec::with_capacity(topics.len());

    for topic in &topics {
        if day_hours > 0 && f64::from(day_hours + topic.estimated_hours) > hours_per_day * DAY_OVERFLOW_FACTOR {
            date = match date.succ_opt().and_then(skip_weekend) {
                Some(next) => next,
                None => return SchedulePlan::Failed(format!("calendar overflow after {}", date)),
            };
            day_hours = 0;
        }

        let start_hour = slot_for(day_hours);
        let end_hour = (start_hour + topic.estimated_hours).min(LATEST_END_HOUR);
        items.push(ScheduleItem::for_topic(topic, date, start_hour, end_hour));
        day_hours += topic.estimated_hours;
    }

    SchedulePlan::Planned(items)
}

fn classified_topics(syllabus_text: &str) -> Vec<Topic> {
    parse_syllabus(syllabus_text)
        .iter()
        .flat_map(|unit| {
            unit.topics
                .iter()
                .map(|name| Topic::new(&unit.unit_name, name, classify_difficulty(name)))
        })
        .collect()
}

fn hours_per_day(total_hours: u32, total_days: i64) -> f64 {
    if total_days <= 0 {
        return DEFAULT_HOURS_PER_DAY;
    }
    (f64::from(total_hours) / total_days as f64).min(MAX_HOURS_PER_DAY)
}

fn slot_for(day_hours: u32) -> u32 {
    match day_hours {
        0 => MORNING_SLOT,
        h if h < AFTERNOON_CUTOFF_HOURS => AFTERNOON_SLOT,
        _ => EVENING_SLOT,
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First weekday on or after `date`.
fn skip_weekend(mut date: NaiveDate) -> Option<NaiveDate> {
    while is_weekend(date) {
        date = date.succ_opt()?;
    }
    Some(date)
}
