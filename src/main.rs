use std::path::PathBuf;

use bikini_quiz::{CsvLedger, Quiz, QuizError, DEFAULT_RESULTS_PATH};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the built-in bank)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// CSV file finished results are appended to
    #[arg(short, long, default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,

    /// Directory for the log file
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Log filter, overridden by RUST_LOG when set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Log to a file; the terminal belongs to the quiz screens.
fn init_tracing(args: &Args) -> Result<WorkerGuard, InitError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("bikini-quiz.log")
        .build(&args.log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

fn load_quiz(args: &Args) -> Result<Quiz, QuizError> {
    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::reference()?,
    };
    Ok(quiz.with_ledger(Box::new(CsvLedger::new(args.results.clone()))))
}

fn main() {
    let args = Args::parse();
    let log_guard = match init_tracing(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!(
                "Error running quiz: cannot open log directory {}: {}",
                args.log_dir.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let result = load_quiz(&args).and_then(Quiz::run);
    if let Err(e) = result {
        tracing::error!(error = %e, "quiz exited with an error");
        eprintln!("Error running quiz: {}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}
