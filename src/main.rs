use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use study_planner::{
    app_state::AppState,
    config::Config,
    errors::{AppError, ErrorResponse},
    models::{
        domain::StudyMaterial,
        dto::request::{GenerateScheduleRequest, GenerateStudyRequest, SubmitQuizRequest},
    },
    services::{
        export_service::{export_schedule_text, export_summary_text, summary_file_name},
        quiz_grading_service::QuizGradingService,
    },
};

const CLI_OWNER: &str = "local";

#[derive(Parser)]
#[command(name = "study-planner")]
#[command(version)]
#[command(about = "Turns study text into quizzed segments and syllabi into study calendars")]
struct Cli {
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a syllabus file over a number of days
    Schedule {
        syllabus: PathBuf,

        days: Option<i64>,

        /// First study day, YYYY-MM-DD (defaults to today)
        start: Option<String>,

        #[arg(long, default_value = "My Subject")]
        subject: String,

        /// Print the plain-text calendar instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// Segment a text file into study parts with quizzes
    Learn {
        file: PathBuf,

        topic: String,

        #[arg(long)]
        no_quiz: bool,

        /// Print the plain-text summary instead of JSON
        #[arg(long)]
        summary: bool,

        /// Also write the plain-text summary to summary_<topic>.txt
        #[arg(long)]
        save: bool,
    },
    /// Grade answers against one segment of a saved `learn` output
    Grade {
        material: PathBuf,

        /// JSON submission, e.g. '{"segment_index": 0, "answers": {"0": "True"}}'
        submission: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let state = AppState::in_memory(Config::from_env(), vec![]);

    match run(cli.command, &state).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<AppError>() {
            Some(app_err) => {
                log::error!("{}", app_err);
                eprintln!("{}", serde_json::to_string_pretty(&ErrorResponse::from(app_err))?);
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}

async fn run(command: Commands, state: &AppState) -> Result<()> {
    match command {
        Commands::Schedule {
            syllabus,
            days,
            start,
            subject,
            text,
        } => {
            let request = GenerateScheduleRequest {
                subject,
                syllabus: read_file(&syllabus)?,
                total_days: days,
                start_date: start,
            };
            let response = state
                .schedule_service
                .generate_schedule(CLI_OWNER, request)
                .await?;

            if text {
                print!("{}", export_schedule_text(&response.items));
            } else {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Commands::Learn {
            file,
            topic,
            no_quiz,
            summary,
            save,
        } => {
            let request = GenerateStudyRequest {
                query: topic,
                user_notes: None,
                uploaded_text: Some(read_file(&file)?),
                quiz_enabled: no_quiz.then_some(false),
            };
            let material = state.learning_service.generate(request).await?;
            let summary_text =
                export_summary_text(&material.topic, &material.segments, &material.sources);

            if save {
                let path = summary_file_name(&material.topic);
                std::fs::write(&path, &summary_text)
                    .with_context(|| format!("failed to write {}", path))?;
                log::info!("Summary written to {}", path);
            }
            if summary {
                print!("{}", summary_text);
            } else {
                println!("{}", serde_json::to_string_pretty(&material)?);
            }
        }
        Commands::Grade { material, submission } => {
            let material: StudyMaterial = serde_json::from_str(&read_file(&material)?)
                .context("material file is not a saved study session")?;
            let submission: SubmitQuizRequest = serde_json::from_str(&submission)
                .context("submission must be a JSON object with segment_index and answers")?;

            let result = QuizGradingService::grade_submission(&material.segments, &submission)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
