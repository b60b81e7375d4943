use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::domain::topic::{Difficulty, Topic};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleItem {
    pub unit_name: String,
    pub topic_name: String,
    pub difficulty: Difficulty,
    pub estimated_hours: u32,
    pub scheduled_date: NaiveDate, // ISO 8601 on the wire
    pub start_time: String,        // "HH:MM"
    pub end_time: String,          // "HH:MM"
    pub is_auto_generated: bool,
}

impl ScheduleItem {
    pub fn for_topic(topic: &Topic, scheduled_date: NaiveDate, start_hour: u32, end_hour: u32) -> Self {
        ScheduleItem {
            unit_name: topic.unit_name.clone(),
            topic_name: topic.topic_name.clone(),
            difficulty: topic.difficulty,
            estimated_hours: topic.estimated_hours,
            scheduled_date,
            start_time: format!("{:02}:00", start_hour),
            end_time: format!("{:02}:00", end_hour),
            is_auto_generated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_item_formats_slots_and_iso_date() {
        let topic = Topic::new("Basics", "Arrays", Difficulty::Easy);
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date");
        let item = ScheduleItem::for_topic(&topic, date, 9, 11);

        assert_eq!(item.start_time, "09:00");
        assert_eq!(item.end_time, "11:00");
        assert!(item.is_auto_generated);

        let json = serde_json::to_value(&item).expect("item should serialize");
        assert_eq!(json["scheduled_date"], "2024-03-04");
        assert_eq!(json["difficulty"], "easy");
    }
}
