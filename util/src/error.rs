use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum WordSearchError {
  Internal(String),
  Parse(String),
  Input(String),
}

impl Display for WordSearchError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      WordSearchError::Internal(msg) => write!(f, "Internal error: {msg}"),
      WordSearchError::Parse(msg) => write!(f, "Parse error: {msg}"),
      WordSearchError::Input(msg) => write!(f, "Input error: {msg}"),
    }
  }
}

impl Error for WordSearchError {}

pub type WordSearchResult<T = ()> = Result<T, Box<dyn Error>>;
