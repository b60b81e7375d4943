use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>, // unique, 2 for TrueFalse and 4 for MultipleChoice
    pub answer: String,       // always one of `options`
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum QuestionType {
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
    #[serde(rename = "True or False")]
    TrueFalse,
}

impl Question {
    pub fn multiple_choice(question: impl Into<String>, options: Vec<String>, answer: &str) -> Self {
        Question {
            question: question.into(),
            options,
            answer: answer.to_string(),
            question_type: QuestionType::MultipleChoice,
        }
    }

    pub fn true_false(statement: &str) -> Self {
        Question {
            question: format!("True or False: {}", statement),
            options: vec!["True".to_string(), "False".to_string()],
            answer: "True".to_string(),
            question_type: QuestionType::TrueFalse,
        }
    }

    /// Checks that the answer is one of the options and no option repeats.
    pub fn is_well_formed(&self) -> bool {
        let expected_len = match self.question_type {
            QuestionType::MultipleChoice => 4,
            QuestionType::TrueFalse => 2,
        };
        let mut seen = std::collections::HashSet::new();
        self.options.len() == expected_len
            && self.options.iter().all(|o| seen.insert(o.as_str()))
            && self.options.contains(&self.answer)
    }
}
