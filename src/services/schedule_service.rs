use std::sync::Arc;

use validator::Validate;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::dto::{request::GenerateScheduleRequest, response::ScheduleResponse},
    repositories::ScheduleRepository,
    services::schedule_planner::{plan_schedule, SchedulePlan},
};

pub struct ScheduleService {
    repository: Arc<dyn ScheduleRepository>,
    config: Arc<Config>,
}

impl ScheduleService {
    pub fn new(repository: Arc<dyn ScheduleRepository>, config: Arc<Config>) -> Self {
        Self { repository, config }
    }

    pub async fn generate_schedule(&self, owner: &str, request: GenerateScheduleRequest) -> AppResult<ScheduleResponse> {
        request.validate()?;

        let total_days = request.total_days.unwrap_or(self.config.default_schedule_days);
        if total_days > self.config.max_schedule_days {
            return Err(AppError::ValidationError(format!(
                "total_days must be at most {}",
                self.config.max_schedule_days
            )));
        }

        let subject = request.subject.trim();
        log::info!("Generating {}-day schedule for '{}'", total_days, subject);

        let items = match plan_schedule(&request.syllabus, total_days, request.start_date.as_deref()) {
            SchedulePlan::Planned(items) => items,
            SchedulePlan::NoTopics => {
                return Err(AppError::ValidationError(
                    "Could not parse syllabus. Use lines like 'Unit 1: Name' followed by one topic per line."
                        .to_string(),
                ))
            }
            SchedulePlan::Failed(reason) => {
                log::error!("Schedule planning failed for '{}': {}", subject, reason);
                return Err(AppError::InternalError(format!("Schedule generation failed: {}", reason)));
            }
        };

        self.repository
            .save_schedule(owner, subject, items.clone())
            .await?;

        Ok(ScheduleResponse::new(subject, items))
    }
}
