//! Shell command table and command-level errors.

use quizmaster_core::{QuestionId, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP_TEXT: &str = "Command | Description\n\
help | Shows list of available command\n\
create_question <no> <question> <answer> | Create a question\n\
update_question <no> <question> <answer> | Update a question\n\
delete_question <no> | Delete a question\n\
question <no> | Shows a question\n\
questions | Shows list of question\n\
answer_question <no> <answer> | Answer a question\n\
exit | Exit CLI\n";

/// Commands understood by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Question,
    Questions,
    CreateQuestion,
    UpdateQuestion,
    DeleteQuestion,
    AnswerQuestion,
}

impl Command {
    /// Parses an already lower-cased command name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exit" => Some(Self::Exit),
            "help" => Some(Self::Help),
            "question" => Some(Self::Question),
            "questions" => Some(Self::Questions),
            "create_question" => Some(Self::CreateQuestion),
            "update_question" => Some(Self::UpdateQuestion),
            "delete_question" => Some(Self::DeleteQuestion),
            "answer_question" => Some(Self::AnswerQuestion),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Help => "help",
            Self::Question => "question",
            Self::Questions => "questions",
            Self::CreateQuestion => "create_question",
            Self::UpdateQuestion => "update_question",
            Self::DeleteQuestion => "delete_question",
            Self::AnswerQuestion => "answer_question",
        }
    }
}

/// Recoverable failure of one shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidArgumentCount,
    InvalidIdFormat,
    /// Service call failed; `id` is echoed back when the command names one.
    Failed {
        action: &'static str,
        id: Option<QuestionId>,
        source: RepoError,
    },
}

impl CommandError {
    pub fn failed(action: &'static str, id: QuestionId) -> impl FnOnce(RepoError) -> Self {
        move |source| Self::Failed {
            action,
            id: Some(id),
            source,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgumentCount => write!(f, "Invalid input format. See \"help\""),
            Self::InvalidIdFormat => write!(f, "Invalid question ID, should be integer"),
            Self::Failed {
                action,
                id: Some(id),
                source,
            } => write!(f, "Could not {action} question [{id}]: {source}"),
            Self::Failed {
                action,
                id: None,
                source,
            } => write!(f, "Could not {action} question: {source}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Failed { source, .. } => Some(source),
            _ => None,
        }
    }
}
