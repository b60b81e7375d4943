pub mod schedule_repository;
pub mod study_session_repository;

pub use schedule_repository::{InMemoryScheduleRepository, ScheduleRepository};
pub use study_session_repository::{InMemoryStudySessionRepository, StudySessionRepository};
