use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use study_planner::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::{ScheduleItem, StudyMaterial},
        dto::request::{GenerateScheduleRequest, GenerateStudyRequest},
    },
    repositories::{
        InMemoryScheduleRepository, InMemoryStudySessionRepository, ScheduleRepository,
        StudySessionRepository,
    },
    services::quiz_grading_service::QuizGradingService,
    sources::{SourceProvider, SourceText, StaticTextProvider},
};

/// Keeps every saved session in insertion order.
struct RecordingSessionRepository {
    sessions: Arc<RwLock<Vec<StudyMaterial>>>,
}

impl RecordingSessionRepository {
    fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl StudySessionRepository for RecordingSessionRepository {
    async fn save_session(&self, material: StudyMaterial) -> AppResult<StudyMaterial> {
        self.sessions.write().await.push(material.clone());
        Ok(material)
    }
}

/// Keyed by subject only; rejects empty plans.
struct StrictScheduleRepository {
    schedules: Arc<RwLock<HashMap<String, Vec<ScheduleItem>>>>,
}

impl StrictScheduleRepository {
    fn new() -> Self {
        Self {
            schedules: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ScheduleRepository for StrictScheduleRepository {
    async fn save_schedule(&self, _owner: &str, subject: &str, items: Vec<ScheduleItem>) -> AppResult<usize> {
        if items.is_empty() {
            return Err(AppError::RepositoryError("refusing empty schedule".to_string()));
        }
        let count = items.len();
        self.schedules.write().await.insert(subject.to_string(), items);
        Ok(count)
    }
}

/// Always errors, to exercise provider fallthrough.
struct UnavailableProvider;

#[async_trait]
impl SourceProvider for UnavailableProvider {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    async fn fetch(&self, _query: &str) -> AppResult<Option<SourceText>> {
        Err(AppError::SourceError("connection refused".to_string()))
    }
}

fn article(topic: &str, sentences: usize) -> String {
    (1..=sentences)
        .map(|i| format!("{} has an important property number {} worth studying.", topic, i))
        .collect::<Vec<_>>()
        .join(" ")
}

fn syllabus() -> String {
    "Unit 1: Basics\n- Arrays\n- Lists\n- Hash Tables\nUnit 2: Algorithms\n- Sorting\n- Graph Search Techniques\n- Advanced Dynamic Programming"
        .to_string()
}

#[tokio::test]
async fn study_session_repository_receives_each_generated_session() {
    let sessions = Arc::new(RecordingSessionRepository::new());
    let state = AppState::new(
        Config::default(),
        vec![],
        sessions.clone(),
        Arc::new(InMemoryScheduleRepository::new()),
    );

    let first = state
        .learning_service
        .generate(GenerateStudyRequest::for_query("Python"))
        .await
        .expect("first session");
    let second = state
        .learning_service
        .generate(GenerateStudyRequest::for_query("Jenkins"))
        .await
        .expect("second session");

    let saved = sessions.sessions.read().await;
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].session_id, first.session_id);
    assert_eq!(saved[1].session_id, second.session_id);
    assert_ne!(first.session_id, second.session_id);
    assert_eq!(saved[1].suggestions, vec!["CI/CD", "DevOps", "Git"]);
}

#[tokio::test]
async fn failing_provider_is_skipped_in_favour_of_the_next() {
    let providers: Vec<Arc<dyn SourceProvider>> = vec![
        Arc::new(UnavailableProvider),
        Arc::new(StaticTextProvider::new().with_document("graphs", article("Graphs", 20), "Encyclopedia")),
    ];
    let state = AppState::in_memory(Config::default(), providers);

    let material = state
        .learning_service
        .generate(GenerateStudyRequest::for_query("Graphs"))
        .await
        .expect("session");

    assert_eq!(material.sources, vec!["Encyclopedia"]);
    assert_eq!(material.segments.len(), 4);
    assert_eq!(material.segments[3].title, "Graphs - Part 4");
    assert!(!material.insufficient_material);
}

#[tokio::test]
async fn generated_quiz_can_be_graded_through_the_session() {
    let state = AppState::in_memory(Config::default(), vec![]);
    let mut request = GenerateStudyRequest::for_query("Graphs");
    request.uploaded_text = Some(article("Graphs", 7));

    let material = state.learning_service.generate(request).await.expect("session");
    let quiz = &material.segments[0].quiz;
    let all_correct: HashMap<usize, String> = quiz
        .iter()
        .enumerate()
        .map(|(i, q)| (i, q.answer.clone()))
        .collect();

    let result = QuizGradingService::grade_segment(&material.segments, 0, &all_correct).expect("graded");

    assert_eq!(result.score, quiz.len());
    assert_eq!(result.percentage, 100.0);
    assert!(matches!(
        QuizGradingService::grade_segment(&material.segments, 99, &all_correct),
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn schedule_repository_stores_generated_plan() {
    let schedules = Arc::new(StrictScheduleRepository::new());
    let state = AppState::new(
        Config::default(),
        vec![],
        Arc::new(InMemoryStudySessionRepository::new()),
        schedules.clone(),
    );

    let response = state
        .schedule_service
        .generate_schedule(
            "alice",
            GenerateScheduleRequest {
                subject: "Data Structures".to_string(),
                syllabus: syllabus(),
                total_days: Some(14),
                start_date: Some("2024-09-02".to_string()),
            },
        )
        .await
        .expect("schedule");

    assert_eq!(response.total_topics, 6);
    let stored = schedules.schedules.read().await;
    assert_eq!(stored.get("Data Structures"), Some(&response.items));
    assert_eq!(response.items[0].unit_name, "Basics");
    assert_eq!(response.items[5].unit_name, "Algorithms");
}

#[tokio::test]
async fn schedule_request_validation_errors_surface_before_storage() {
    let schedules = Arc::new(StrictScheduleRepository::new());
    let state = AppState::new(
        Config::default(),
        vec![],
        Arc::new(InMemoryStudySessionRepository::new()),
        schedules.clone(),
    );

    let blank = state
        .schedule_service
        .generate_schedule(
            "alice",
            GenerateScheduleRequest {
                subject: "Data Structures".to_string(),
                syllabus: "   ".to_string(),
                total_days: Some(14),
                start_date: None,
            },
        )
        .await;
    assert!(matches!(blank, Err(AppError::ValidationError(_))));

    let no_topics = state
        .schedule_service
        .generate_schedule(
            "alice",
            GenerateScheduleRequest {
                subject: "Data Structures".to_string(),
                syllabus: "Week 1\nWeek 2".to_string(),
                total_days: Some(14),
                start_date: None,
            },
        )
        .await;
    assert!(matches!(no_topics, Err(AppError::ValidationError(_))));
    assert!(schedules.schedules.read().await.is_empty());
}
