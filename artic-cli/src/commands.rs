//! Interactive command parsing.

use thiserror::Error;

/// Command parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?} (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("{0:?} is not a valid number")]
    InvalidNumber(String),
    #[error("{0} must be at least 1")]
    NotPositive(&'static str),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Goto(u32),
    Rows(u32),
    /// Flip these rows (0-based indices on the current page).
    Toggle(Vec<usize>),
    /// Make exactly these rows the current page's selection.
    Set(Vec<usize>),
    AutoSelect(usize),
    Clear,
    Refresh,
    Selected,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  n, next              next page
  p, prev              previous page
  g, goto <page>       jump to a page
  rows <n>             rows per page (5, 10, 12, 25, 50)
  t, toggle <row...>   flip rows on this page
  set [row...]         select exactly these rows on this page
  auto <n>             select the next n unselected artworks
  clear                deselect everything
  r, refresh           reload this page
  s, selected          list every selected artwork
  h, help              show this help
  q, quit              exit";

impl Command {
    /// Parses a line. Returns `Ok(None)` for blank input.
    ///
    /// Row numbers are typed 1-based and stored 0-based.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "n" | "next" => Command::Next,
            "p" | "prev" => Command::Prev,
            "g" | "goto" => Command::Goto(positive(first(&args, "goto")?, "page")?),
            "rows" => Command::Rows(positive(first(&args, "rows")?, "rows")?),
            "t" | "toggle" => {
                if args.is_empty() {
                    return Err(CommandError::MissingArgument("toggle"));
                }
                Command::Toggle(rows(&args)?)
            }
            "set" => Command::Set(rows(&args)?),
            "auto" => Command::AutoSelect(positive(first(&args, "auto")?, "count")?),
            "clear" => Command::Clear,
            "r" | "refresh" => Command::Refresh,
            "s" | "selected" => Command::Selected,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn first<'a>(args: &[&'a str], command: &'static str) -> Result<&'a str, CommandError> {
    args.first().copied().ok_or(CommandError::MissingArgument(command))
}

fn positive<T>(word: &str, what: &'static str) -> Result<T, CommandError>
where
    T: TryFrom<i64>,
{
    let value: i64 = word
        .parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))?;
    if value <= 0 {
        return Err(CommandError::NotPositive(what));
    }
    T::try_from(value).map_err(|_| CommandError::InvalidNumber(word.to_string()))
}

fn rows(args: &[&str]) -> Result<Vec<usize>, CommandError> {
    args.iter()
        .map(|word| positive::<usize>(word, "row").map(|row| row - 1))
        .collect()
}
