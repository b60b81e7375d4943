#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::request::GenerateScheduleRequest;

    /// Twelve well-formed sentences about volcanoes.
    pub fn sample_article() -> String {
        [
            "Volcanoes form where magma reaches the surface of the Earth.",
            "Most volcanoes sit along the boundaries of tectonic plates.",
            "The Pacific Ring of Fire holds most of the active volcanoes.",
            "Shield volcanoes have gentle slopes built from fluid lava flows.",
            "Stratovolcanoes are steep cones made of alternating ash and lava.",
            "Explosive eruptions happen when gas pressure builds inside thick magma.",
            "Pyroclastic flows race down slopes at very high speeds.",
            "Volcanic ash can ground aircraft across an entire continent.",
            "Scientists in Iceland monitor earthquakes to forecast eruptions.",
            "Satellites measure ground swelling before many eruptions begin.",
            "Volcanic soils are very fertile and support dense farming.",
            "Geothermal plants in Kenya turn volcanic heat into electricity.",
        ]
        .join(" ")
    }

    pub fn sample_notes() -> String {
        "My notes: magma chambers feed eruptions. Lava cools into basalt near the vent. \
         Ash clouds travel far with the wind."
            .to_string()
    }

    /// Two units with three topics each.
    pub fn sample_syllabus() -> String {
        "Unit 1: Foundations\n\
         - Introduction to Python\n\
         - Database Design Techniques\n\
         - Advanced Machine Learning Algorithms\n\
         Unit 2: Practice\n\
         - Basic Syntax Overview\n\
         - Testing Patterns\n\
         - Complex Algorithm Theory"
            .to_string()
    }

    pub fn schedule_request(syllabus: &str, total_days: Option<i64>) -> GenerateScheduleRequest {
        GenerateScheduleRequest {
            subject: "Algorithms".to_string(),
            syllabus: syllabus.to_string(),
            total_days,
            start_date: Some("2024-03-04".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::sentence_extractor::extract_sentences;
    use crate::services::syllabus_parser::parse_syllabus;

    #[test]
    fn test_fixtures_sample_article_has_twelve_sentences() {
        assert_eq!(extract_sentences(&sample_article()).count(), 12);
    }

    #[test]
    fn test_fixtures_sample_syllabus_shape() {
        let units = parse_syllabus(&sample_syllabus());
        assert_eq!(units.len(), 2);
        assert!(units.iter().all(|u| u.topics.len() == 3));
    }

    #[test]
    fn test_fixtures_notes_are_long_enough_to_use() {
        assert!(sample_notes().chars().count() > 50);
    }
}
