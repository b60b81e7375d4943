pub mod difficulty_classifier;
pub mod export_service;
pub mod learning_service;
pub mod quiz_grading_service;
pub mod quiz_synthesizer;
pub mod schedule_planner;
pub mod schedule_service;
pub mod segmenter;
pub mod sentence_extractor;
pub mod syllabus_parser;
pub mod text_normalizer;
pub mod topic_suggestions;
