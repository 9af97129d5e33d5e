use std::path::PathBuf;

use clap::Parser;
use quiz_trainer::{default_quizzes, load_quizzes_from_json, App, QuizStore, TerminalConsole};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quizzes from (built-in samples if omitted)
    #[arg(short, long)]
    quizzes: Option<PathBuf>,

    /// Seed for the order of questions in play mode
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let quizzes = match &args.quizzes {
        Some(path) => load_quizzes_from_json(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => default_quizzes(),
    };
    let store = QuizStore::with_quizzes(quizzes);

    let mut app = match args.seed {
        Some(seed) => App::with_seed(store, seed),
        None => App::new(store),
    };
    let mut console = TerminalConsole::new(!args.no_color);

    if let Err(e) = app.run(&mut console).await {
        eprintln!("Error running quiz trainer: {}", e);
        std::process::exit(1);
    }
}
