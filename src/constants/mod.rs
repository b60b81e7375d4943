pub mod difficulty_keywords;
pub mod quiz_defaults;
