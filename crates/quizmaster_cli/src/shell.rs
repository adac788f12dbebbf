//! Line-oriented command shell.
//!
//! # Responsibility
//! - Read one command per line, dispatch it to the quiz service and write
//!   the result.
//!
//! # Invariants
//! - Commands run strictly one after another.
//! - Argument count and ID format are validated before any service call.
//! - Command failures are printed and never end the loop; only `exit`,
//!   end of input or a stream I/O error do.

use crate::command::{Command, CommandError, HELP_TEXT};
use log::{debug, info};
use quizmaster_core::textinput::split;
use quizmaster_core::{Question, QuestionId, QuizApi};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "$ ";

pub struct Shell<'a, S: QuizApi> {
    service: &'a S,
}

impl<'a, S: QuizApi> Shell<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Runs the read-dispatch loop until `exit` or end of input.
    ///
    /// # Errors
    /// Returns the first I/O error raised by `input` or `out`. Lines that
    /// are not valid UTF-8 are decoded lossily, not treated as errors.
    pub fn run(&self, mut input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("event=shell_stop module=cli status=ok reason=eof");
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if !self.execute(line, out)? {
                info!("event=shell_stop module=cli status=ok reason=exit");
                return Ok(());
            }
        }
    }

    /// Executes one command line; returns `false` when the shell should stop.
    pub fn execute(&self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let args = split(line, ' ');
        let name = args[0].to_lowercase();

        let Some(command) = Command::from_name(&name) else {
            debug!("event=command_unknown module=cli status=error");
            writeln!(out, "Command \"{name}\" is not found. See \"help\"")?;
            return Ok(true);
        };

        let result = match command {
            Command::Exit => return Ok(false),
            Command::Help => {
                write!(out, "{HELP_TEXT}")?;
                return Ok(true);
            }
            Command::Question => self.question(&args, out),
            Command::Questions => self.questions(out),
            Command::CreateQuestion => self.create_question(&args, out),
            Command::UpdateQuestion => self.update_question(&args, out),
            Command::DeleteQuestion => self.delete_question(&args, out),
            Command::AnswerQuestion => self.answer_question(&args, out),
        };

        match result {
            Ok(()) => debug!("event=command module=cli status=ok command={}", command.as_str()),
            Err(ShellFailure::Io(err)) => return Err(err),
            Err(ShellFailure::Command(err)) => {
                debug!(
                    "event=command module=cli status=error command={} error={err}",
                    command.as_str()
                );
                writeln!(out, "{err}")?;
            }
        }
        Ok(true)
    }

    fn question(&self, args: &[String], out: &mut impl Write) -> ShellResult {
        expect_args(args, 2)?;
        let id = parse_id(&args[1])?;

        let question = self
            .service
            .get_question(id)
            .map_err(CommandError::failed("get", id))?;
        write_question(out, &question)?;
        Ok(())
    }

    fn questions(&self, out: &mut impl Write) -> ShellResult {
        let questions = self
            .service
            .list_questions()
            .map_err(|source| CommandError::Failed {
                action: "list",
                id: None,
                source,
            })?;

        writeln!(out, "No | Question | Answer")?;
        for question in &questions {
            writeln!(
                out,
                "{} \"{}\" {}",
                question.id, question.question, question.answer
            )?;
        }
        Ok(())
    }

    fn create_question(&self, args: &[String], out: &mut impl Write) -> ShellResult {
        expect_args(args, 4)?;
        let id = parse_id(&args[1])?;

        let question = self
            .service
            .create_question(Question::new(id, args[2].as_str(), args[3].as_str()))
            .map_err(|source| CommandError::Failed {
                action: "create",
                id: None,
                source,
            })?;

        writeln!(out, "Question no {id} created:")?;
        write_question(out, &question)?;
        Ok(())
    }

    fn update_question(&self, args: &[String], out: &mut impl Write) -> ShellResult {
        expect_args(args, 4)?;
        let id = parse_id(&args[1])?;

        let question = self
            .service
            .update_question(Question::new(id, args[2].as_str(), args[3].as_str()))
            .map_err(CommandError::failed("update", id))?;

        writeln!(out, "Question no {id} updated:")?;
        write_question(out, &question)?;
        Ok(())
    }

    fn delete_question(&self, args: &[String], out: &mut impl Write) -> ShellResult {
        expect_args(args, 2)?;
        let id = parse_id(&args[1])?;

        self.service
            .delete_question(id)
            .map_err(CommandError::failed("delete", id))?;

        writeln!(out, "Question no {id} deleted:")?;
        Ok(())
    }

    fn answer_question(&self, args: &[String], out: &mut impl Write) -> ShellResult {
        expect_args(args, 3)?;
        let id = parse_id(&args[1])?;

        let correct = self
            .service
            .answer_question(id, &args[2])
            .map_err(CommandError::failed("answer", id))?;

        writeln!(out, "{}", if correct { "Correct!" } else { "Incorrect!" })?;
        Ok(())
    }
}

type ShellResult = Result<(), ShellFailure>;

/// Splits recoverable command errors from fatal stream errors.
enum ShellFailure {
    Command(CommandError),
    Io(io::Error),
}

impl From<CommandError> for ShellFailure {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<io::Error> for ShellFailure {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

fn expect_args(args: &[String], count: usize) -> Result<(), CommandError> {
    if args.len() != count {
        return Err(CommandError::InvalidArgumentCount);
    }
    Ok(())
}

fn parse_id(raw: &str) -> Result<QuestionId, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidIdFormat)
}

fn write_question(out: &mut impl Write, question: &Question) -> io::Result<()> {
    writeln!(out, "Q: \"{}\"", question.question)?;
    writeln!(out, "A: {}", question.answer)
}
