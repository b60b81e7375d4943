pub mod question;
pub mod schedule_item;
pub mod segment;
pub mod study_material;
pub mod syllabus_unit;
pub mod topic;
pub use question::{Question, QuestionType};
pub use schedule_item::ScheduleItem;
pub use segment::Segment;
pub use study_material::StudyMaterial;
pub use syllabus_unit::SyllabusUnit;
pub use topic::{Difficulty, Topic};
