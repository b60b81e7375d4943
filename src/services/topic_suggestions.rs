pub const MAX_SUGGESTIONS: usize = 3;

const RELATED_TOPICS: &[(&str, &[&str])] = &[
    ("kubernetes", &["Docker", "Pods", "Container Orchestration"]),
    ("pods", &["Kubernetes", "Docker", "Containers"]),
    ("jenkins", &["CI/CD", "DevOps", "Git"]),
    ("docker", &["Kubernetes", "Containers", "Microservices"]),
    ("python", &["Django", "Flask", "Data Science"]),
    ("machine learning", &["Deep Learning", "AI", "Neural Networks"]),
];

const DEFAULT_SUGGESTIONS: &[&str] = &["Related Topics", "Advanced Concepts", "Applications"];

/// Up to three follow-up topics; the first matching table entry wins.
pub fn suggest_related_topics(topic: &str) -> Vec<String> {
    let lowered = topic.trim().to_lowercase();

    let related = RELATED_TOPICS
        .iter()
        .find(|(key, _)| !lowered.is_empty() && (lowered.contains(key) || key.contains(lowered.as_str())))
        .map(|(_, related)| *related)
        .unwrap_or(DEFAULT_SUGGESTIONS);

    related
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_topic_gets_table_entry() {
        assert_eq!(
            suggest_related_topics("Intro to Kubernetes"),
            vec!["Docker", "Pods", "Container Orchestration"]
        );
        assert_eq!(
            suggest_related_topics("Machine Learning"),
            vec!["Deep Learning", "AI", "Neural Networks"]
        );
    }

    #[test]
    fn test_topic_inside_key_matches() {
        assert_eq!(suggest_related_topics("jenk")[0], "CI/CD");
    }

    #[test]
    fn test_first_match_wins() {
        // both "kubernetes" and "docker" appear; kubernetes is listed first
        assert_eq!(suggest_related_topics("docker and kubernetes")[0], "Docker");
    }

    #[test]
    fn test_unknown_or_blank_topic_gets_defaults() {
        assert_eq!(
            suggest_related_topics("Medieval Poetry"),
            vec!["Related Topics", "Advanced Concepts", "Applications"]
        );
        assert_eq!(suggest_related_topics("  ").len(), MAX_SUGGESTIONS);
    }
}
