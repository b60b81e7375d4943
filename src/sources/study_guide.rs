use crate::sources::SourceText;

pub const STUDY_GUIDE_CITATION: &str = "AI-Generated Study Guide";

/// Last-resort source: a generic outline for any query. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct StudyGuideProvider;

impl StudyGuideProvider {
    pub fn guide_for(&self, query: &str) -> SourceText {
        let areas = [
            ("Fundamental Concepts", format!("Understanding the basic principles and definitions related to {}.", query)),
            ("Historical Context", format!("How {} developed over time and its evolution.", query)),
            ("Practical Applications", format!("Real-world uses and implementations of {}.", query)),
            ("Key Components", format!("The main elements that make up {}.", query)),
            ("Related Topics", format!("Other subjects that connect to {}.", query)),
        ];

        let mut text = format!("TOPIC: {}\n\n", query);
        text.push_str(&format!(
            "This is an educational topic that covers various aspects of {q}. \
             To learn more about {q}, consider exploring the following areas:\n\n",
            q = query
        ));
        for (n, (heading, body)) in areas.iter().enumerate() {
            text.push_str(&format!("{}. {}: {}\n\n", n + 1, heading, body));
        }
        text.push_str("For more detailed information, try:\n");
        text.push_str(&format!("- Searching for specific aspects of {}\n", query));
        text.push_str("- Uploading your own study materials\n");
        text.push_str("- Adding your class notes in the text area\n");

        SourceText::new(text, STUDY_GUIDE_CITATION)
    }
}
