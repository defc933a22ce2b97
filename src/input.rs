use std::str::FromStr;

use crate::nav::{Command, CopiedField, ViewKind};

/// A line typed into the terminal presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Copy a contact field; the value comes from the catalog.
    Copy(CopiedField),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseInputError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`open` needs a project id")]
    MissingProjectId,
    #[error("`copy` needs a field, `email` or `phone`")]
    MissingField,
    #[error("`copy` expects `email` or `phone`, got `{0}`")]
    UnknownField(String),
}

pub const HELP: &str = "\
commands:
  work | home       show the project list
  about             show the about page
  open <id>         show a project case study
  menu              toggle the mobile menu
  contact           open the contact modal
  close             close the contact modal
  copy email|phone  copy a contact field
  help              show this text
  quit              exit";

impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseInputError::Empty);
        };
        let input = match head.to_ascii_lowercase().as_str() {
            "work" | "home" => Input::Command(Command::NavigateTo(ViewKind::Home)),
            "about" => Input::Command(Command::NavigateTo(ViewKind::About)),
            "open" => match words.next() {
                Some(id) => Input::Command(Command::OpenProjectDetail(id.to_string())),
                None => return Err(ParseInputError::MissingProjectId),
            },
            "menu" => Input::Command(Command::ToggleMobileMenu),
            "contact" => Input::Command(Command::OpenContactModal),
            "close" => Input::Command(Command::CloseContactModal),
            "copy" => match words.next().map(str::to_ascii_lowercase).as_deref() {
                Some("email") => Input::Copy(CopiedField::Email),
                Some("phone") => Input::Copy(CopiedField::Phone),
                Some(other) => return Err(ParseInputError::UnknownField(other.to_string())),
                None => return Err(ParseInputError::MissingField),
            },
            "help" | "?" => Input::Help,
            "quit" | "exit" | "q" => Input::Quit,
            other => return Err(ParseInputError::Unknown(other.to_string())),
        };
        Ok(input)
    }
}
