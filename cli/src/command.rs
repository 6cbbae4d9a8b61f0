use pymines_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("expected a row and a column")]
    InvalidArgs,
    #[error("could not parse {axis} `{value}`")]
    InvalidNumber { axis: &'static str, value: String },
}

impl Command {
    /// Parses one input line; blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let words: Vec<_> = line.split_whitespace().collect();
        let Some(&first) = words.first() else {
            return Ok(None);
        };

        match first {
            "q" | "quit" => return Ok(Some(Self::Quit)),
            "h" | "help" => return Ok(Some(Self::Help)),
            _ => {}
        }

        // `r 1 2` and plain `1 2` both reveal
        let args = match first {
            "r" | "reveal" => &words[1..],
            _ if first.parse::<Coord>().is_ok() => &words[..],
            _ => return Err(CommandError::Unknown(first.to_owned())),
        };

        let [row, col] = args else {
            return Err(CommandError::InvalidArgs);
        };
        Ok(Some(Self::Reveal((parse_axis("row", row)?, parse_axis("column", col)?))))
    }
}

fn parse_axis(axis: &'static str, value: &str) -> Result<Coord, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        axis,
        value: value.to_owned(),
    })
}
