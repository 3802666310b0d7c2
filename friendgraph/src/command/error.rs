use thiserror::Error;

/// A script line that could not be parsed into a [crate::command::Command].
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CommandError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' is missing argument <{argument}>")]
    MissingArgument {
        line: usize,
        command: &'static str,
        argument: &'static str,
    },

    #[error("line {line}: '{command}' does not take argument '{argument}'")]
    UnexpectedArgument {
        line: usize,
        command: &'static str,
        argument: String,
    },
}

impl CommandError {
    pub fn line(&self) -> usize {
        match self {
            CommandError::UnknownCommand { line, .. }
            | CommandError::MissingArgument { line, .. }
            | CommandError::UnexpectedArgument { line, .. } => *line,
        }
    }
}
