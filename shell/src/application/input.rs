use std::str::FromStr;

use thiserror::Error;

/// One user gesture, as read from a line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Replace the input text.
    Type(String),
    /// Confirmation key in the input.
    Enter,
    /// Click on a dropdown row (zero-based).
    Pick(usize),
    /// Move the highlight used by the "get image" button (zero-based).
    Highlight(usize),
    /// The "get image" button.
    GetImage,
    /// Click on the input: shows or hides the dropdown.
    Toggle,
    /// Focus left the input.
    Blur,
    /// Close the error dialog.
    Close,
    /// Download the displayed image.
    Save,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command :{0} (try :help)")]
    UnknownCommand(String),

    #[error(":{0} expects a row number starting at 1")]
    InvalidRow(String),
}

impl FromStr for UserAction {
    type Err = InputError;

    /// Lines starting with `:` are commands, an empty line presses Enter and
    /// anything else is typed into the input.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);

        let Some(command) = line.strip_prefix(':') else {
            return Ok(if line.is_empty() {
                UserAction::Enter
            } else {
                UserAction::Type(line.to_string())
            });
        };

        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let arg = words.next();

        match name {
            "enter" => Ok(UserAction::Enter),
            "pick" => parse_row(name, arg).map(UserAction::Pick),
            "hl" | "highlight" => parse_row(name, arg).map(UserAction::Highlight),
            "get" => Ok(UserAction::GetImage),
            "toggle" => Ok(UserAction::Toggle),
            "blur" => Ok(UserAction::Blur),
            "close" => Ok(UserAction::Close),
            "clear" => Ok(UserAction::Type(String::new())),
            "save" => Ok(UserAction::Save),
            "help" | "h" => Ok(UserAction::Help),
            "quit" | "q" => Ok(UserAction::Quit),
            other => Err(InputError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_row(name: &str, arg: Option<&str>) -> Result<usize, InputError> {
    arg.and_then(|a| a.parse::<usize>().ok())
        .and_then(|row| row.checked_sub(1))
        .ok_or_else(|| InputError::InvalidRow(name.to_string()))
}

pub const HELP: &str = "\
type text to search, empty line = Enter
:pick N    fetch suggestion N
:hl N      highlight suggestion N for :get
:get       fetch the highlighted suggestion
:toggle    show or hide suggestions
:blur      hide suggestions
:close     close the error dialog
:clear     clear the input
:save      download the displayed image
:quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_typing() {
        assert_eq!(
            "pad thai".parse::<UserAction>(),
            Ok(UserAction::Type("pad thai".to_string()))
        );
        assert_eq!("".parse::<UserAction>(), Ok(UserAction::Enter));
        assert_eq!("\r".parse::<UserAction>(), Ok(UserAction::Enter));
    }

    #[test]
    fn test_commands() {
        assert_eq!(":pick 2".parse::<UserAction>(), Ok(UserAction::Pick(1)));
        assert_eq!(":hl 1".parse::<UserAction>(), Ok(UserAction::Highlight(0)));
        assert_eq!(":get".parse::<UserAction>(), Ok(UserAction::GetImage));
        assert_eq!(":clear".parse::<UserAction>(), Ok(UserAction::Type(String::new())));
        assert_eq!(":q".parse::<UserAction>(), Ok(UserAction::Quit));
    }

    #[test]
    fn test_bad_commands() {
        assert_eq!(
            ":pick 0".parse::<UserAction>(),
            Err(InputError::InvalidRow("pick".to_string()))
        );
        assert_eq!(
            ":pick".parse::<UserAction>(),
            Err(InputError::InvalidRow("pick".to_string()))
        );
        assert_eq!(
            ":dance".parse::<UserAction>(),
            Err(InputError::UnknownCommand("dance".to_string()))
        );
    }
}
