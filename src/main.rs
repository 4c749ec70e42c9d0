use std::path::PathBuf;

use clap::Parser;
use quiz_engine::Quiz;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = "questions.json")]
    questions: PathBuf,

    /// Open directly on the first question
    #[arg(long)]
    skip_welcome: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let quiz = match Quiz::from_json(&args.questions) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let quiz = if args.skip_welcome {
        quiz.skip_welcome()
    } else {
        quiz
    };

    log::info!("starting quiz from {}", args.questions.display());
    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
