use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub min_source_chars: usize,
    pub substantial_source_chars: usize,
    pub min_user_text_chars: usize,
    pub max_schedule_days: i64,
    pub default_schedule_days: i64,
    pub quiz_enabled_by_default: bool,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            min_source_chars: env_or("MIN_SOURCE_CHARS", 100),
            substantial_source_chars: env_or("SUBSTANTIAL_SOURCE_CHARS", 500),
            min_user_text_chars: env_or("MIN_USER_TEXT_CHARS", 50),
            max_schedule_days: env_or("MAX_SCHEDULE_DAYS", 365),
            default_schedule_days: env_or("DEFAULT_SCHEDULE_DAYS", 30),
            quiz_enabled_by_default: env_or("QUIZ_ENABLED_BY_DEFAULT", true),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            default_schedule_days: 10,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_source_chars: 100,
            substantial_source_chars: 500,
            min_user_text_chars: 50,
            max_schedule_days: 365,
            default_schedule_days: 30,
            quiz_enabled_by_default: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(config.min_source_chars > 0);
        assert!(config.max_schedule_days >= config.default_schedule_days);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.min_source_chars, 100);
        assert_eq!(config.substantial_source_chars, 500);
        assert_eq!(config.default_schedule_days, 10);
        assert!(config.quiz_enabled_by_default);
    }

    #[test]
    fn test_env_or_ignores_unparseable_values() {
        assert_eq!(env_or("STUDY_PLANNER_SURELY_UNSET_KEY", 42usize), 42);
    }
}
