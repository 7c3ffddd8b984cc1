use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use quizmark::Mode;
use quizmark::core::{config, deck, state::App};
use quizmark::tui;

#[derive(Parser)]
#[command(name = "quizmark", version, about = "Interactive annotator for quiz question decks")]
struct Args {
    /// What to record for each question
    #[arg(value_enum)]
    mode: Mode,

    /// Path to the question deck (a JSON array of records)
    json_path: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("quizmark: {e} (using defaults)");
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config);

    // File logger - writes to quizmark.log in the current directory
    if resolved.log_level != LevelFilter::Off {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(log_file) = File::create("quizmark.log") {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
    }

    info!(
        "quizmark starting in {} mode on {}",
        args.mode.label(),
        args.json_path.display()
    );

    // Load failures are the only fatal errors, and they all happen here,
    // before the terminal is touched
    let records = match deck::load_deck(&args.json_path) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("quizmark: {e}");
            return ExitCode::FAILURE;
        }
    };
    if records.is_empty() {
        eprintln!(
            "quizmark: {} contains no questions",
            args.json_path.display()
        );
        return ExitCode::FAILURE;
    }

    let app = App::from_config(args.json_path, args.mode, records, &resolved);
    match tui::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("quizmark: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
