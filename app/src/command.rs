use std::path::PathBuf;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(PathBuf),
    Upload,
    Question(String),
    /// Submits the current question, replacing it first when text is given.
    Ask(Option<String>),
    Ping,
    Show,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP: &str = "\
Commands:
  open <path>        select a PDF file
  upload             upload the selected PDF
  question <text>    set the question
  ask [<text>]       ask the current (or given) question
  ping               check that the backend is live
  show               show the page again
  help               show this help
  quit               leave";

impl Command {
    /// Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "open" | "file" if rest.is_empty() => Command::Invalid("usage: open <path>".to_string()),
            "open" | "file" => Command::Open(PathBuf::from(rest)),
            "upload" => Command::Upload,
            "question" | "q" => Command::Question(rest.to_string()),
            "ask" if rest.is_empty() => Command::Ask(None),
            "ask" => Command::Ask(Some(rest.to_string())),
            "ping" => Command::Ping,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Invalid(format!("unknown command {:?}, type help", other)),
        };
        Some(command)
    }
}
