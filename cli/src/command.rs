use std::path::PathBuf;
use std::str::{FromStr, SplitWhitespace};

use minesweep_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Save(PathBuf),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseCommandError {
    #[error("Type \"r\" to reveal or \"f\" to flag, followed by row and column (e.g. r 2 5).")]
    UnknownCommand,
    #[error("Give both a row and a column, e.g. {0} 2 5.")]
    MissingCoords(&'static str),
    #[error("\"{0}\" is not a valid row or column.")]
    BadCoord(String),
    #[error("Give a file name to save to, e.g. s game.json.")]
    MissingPath,
}

pub const HELP: &str = "\
Commands (row first, then column, both from 0):
  r <row> <col>  reveal a cell
  f <row> <col>  flag or unflag a cell
  s <file>       save the game
  h              show this help
  q              quit";

fn parse_coords(words: &mut SplitWhitespace<'_>, verb: &'static str) -> Result<Coord2, ParseCommandError> {
    let row = parse_coord(words.next(), verb)?;
    let col = parse_coord(words.next(), verb)?;
    Ok((row, col))
}

fn parse_coord(token: Option<&str>, verb: &'static str) -> Result<Coord, ParseCommandError> {
    let token = token.ok_or(ParseCommandError::MissingCoords(verb))?;
    token
        .parse()
        .map_err(|_| ParseCommandError::BadCoord(token.to_owned()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().map(str::to_lowercase).unwrap_or_default();

        match verb.as_str() {
            "r" | "reveal" => Ok(Self::Reveal(parse_coords(&mut words, "r")?)),
            "f" | "flag" => Ok(Self::Flag(parse_coords(&mut words, "f")?)),
            "s" | "save" => words
                .next()
                .map(|path| Self::Save(PathBuf::from(path)))
                .ok_or(ParseCommandError::MissingPath),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ParseCommandError::UnknownCommand),
        }
    }
}
