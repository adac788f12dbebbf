//! Quiz Master interactive shell entry point.

mod command;
mod config;
mod shell;

use config::CliConfig;
use log::error;
use quizmaster_core::{init_logging, InMemoryQuestionRepository, QuizService};
use shell::Shell;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match CliConfig::from_env().and_then(|config| init_logging(&config.log)) {
        Ok(()) => {}
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }

    let service = QuizService::new(InMemoryQuestionRepository::new());

    println!("Welcome to Quiz Master!");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match Shell::new(&service).run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=shell_stop module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
