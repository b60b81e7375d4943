use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::ScheduleItem};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Stores a generated plan, replacing any earlier plan for the same
    /// owner and subject. Returns the number of items stored.
    async fn save_schedule(&self, owner: &str, subject: &str, items: Vec<ScheduleItem>) -> AppResult<usize>;
}

type ScheduleKey = (String, String);

#[derive(Clone, Default)]
pub struct InMemoryScheduleRepository {
    schedules: Arc<RwLock<HashMap<ScheduleKey, Vec<ScheduleItem>>>>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn items_for(&self, owner: &str, subject: &str) -> Vec<ScheduleItem> {
        self.schedules
            .read()
            .await
            .get(&(owner.to_string(), subject.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn save_schedule(&self, owner: &str, subject: &str, items: Vec<ScheduleItem>) -> AppResult<usize> {
        let count = items.len();
        let mut schedules = self.schedules.write().await;
        schedules.insert((owner.to_string(), subject.to_string()), items);
        log::info!("Saved {} schedule items for {} / '{}'", count, owner, subject);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Difficulty, Topic};
    use chrono::NaiveDate;

    fn item(topic: &str) -> ScheduleItem {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date");
        ScheduleItem::for_topic(&Topic::new("Unit 1", topic, Difficulty::Easy), date, 9, 11)
    }

    #[tokio::test]
    async fn test_saving_again_replaces_previous_plan() {
        let repo = InMemoryScheduleRepository::new();

        let stored = repo
            .save_schedule("alice", "Algorithms", vec![item("Arrays"), item("Lists")])
            .await
            .expect("save");
        assert_eq!(stored, 2);

        repo.save_schedule("alice", "Algorithms", vec![item("Sorting")])
            .await
            .expect("save");
        let items = repo.items_for("alice", "Algorithms").await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].topic_name, "Sorting");
        assert!(repo.items_for("bob", "Algorithms").await.is_empty());
    }
}
